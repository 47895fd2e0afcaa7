//! The fixed ontology the builders and parsers are keyed by.
//!
//! Pod documents are free-form graphs; what makes a document "an image post"
//! or "a like" is the presence of these well-known terms.

/// Namespace prefixes, for building test fixtures and derived terms.
pub mod ns {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const LDP: &str = "http://www.w3.org/ns/ldp#";
    pub const SOLID: &str = "http://www.w3.org/ns/solid/terms#";
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    pub const DCT: &str = "http://purl.org/dc/terms/";
    pub const SIOC: &str = "http://rdfs.org/sioc/ns#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const VCARD: &str = "http://www.w3.org/2006/vcard/ns#";
    pub const ACL: &str = "http://www.w3.org/ns/auth/acl#";
    pub const AS: &str = "https://www.w3.org/ns/activitystreams#";
}

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

pub const LDP_CONTAINER: &str = "http://www.w3.org/ns/ldp#Container";
pub const LDP_BASIC_CONTAINER: &str = "http://www.w3.org/ns/ldp#BasicContainer";
pub const LDP_CONTAINS: &str = "http://www.w3.org/ns/ldp#contains";

/// The profile pointer naming the user's application folder.
pub const SOLID_TIMELINE: &str = "http://www.w3.org/ns/solid/terms#timeline";

pub const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";
pub const FOAF_IMG: &str = "http://xmlns.com/foaf/0.1/img";
pub const FOAF_KNOWS: &str = "http://xmlns.com/foaf/0.1/knows";
pub const FOAF_DEPICTION: &str = "http://xmlns.com/foaf/0.1/depiction";
pub const FOAF_AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";

pub const VCARD_HAS_PHOTO: &str = "http://www.w3.org/2006/vcard/ns#hasPhoto";

pub const DCT_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
pub const DCT_CREATOR: &str = "http://purl.org/dc/terms/creator";
pub const DCT_CREATED: &str = "http://purl.org/dc/terms/created";

/// The type marker for image metadata documents.
pub const SIOC_POST: &str = "http://rdfs.org/sioc/ns#Post";

pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

pub const ACL_AUTHORIZATION: &str = "http://www.w3.org/ns/auth/acl#Authorization";
pub const ACL_ACCESS_TO: &str = "http://www.w3.org/ns/auth/acl#accessTo";
pub const ACL_AGENT: &str = "http://www.w3.org/ns/auth/acl#agent";
pub const ACL_AGENT_CLASS: &str = "http://www.w3.org/ns/auth/acl#agentClass";
pub const ACL_MODE: &str = "http://www.w3.org/ns/auth/acl#mode";
pub const ACL_DEFAULT_FOR_NEW: &str = "http://www.w3.org/ns/auth/acl#defaultForNew";
pub const ACL_CONTROL: &str = "http://www.w3.org/ns/auth/acl#Control";
pub const ACL_READ: &str = "http://www.w3.org/ns/auth/acl#Read";
pub const ACL_WRITE: &str = "http://www.w3.org/ns/auth/acl#Write";
pub const ACL_APPEND: &str = "http://www.w3.org/ns/auth/acl#Append";

pub const AS_TYPE: &str = "https://www.w3.org/ns/activitystreams#type";
pub const AS_ACTOR: &str = "https://www.w3.org/ns/activitystreams#actor";
pub const AS_OBJECT: &str = "https://www.w3.org/ns/activitystreams#object";
pub const AS_CONTENT: &str = "https://www.w3.org/ns/activitystreams#content";
pub const AS_IN_REPLY_TO: &str = "https://www.w3.org/ns/activitystreams#inReplyTo";
pub const AS_PUBLISHED: &str = "https://www.w3.org/ns/activitystreams#published";
pub const AS_LIKE: &str = "https://www.w3.org/ns/activitystreams#Like";
pub const AS_NOTE: &str = "https://www.w3.org/ns/activitystreams#Note";
