//! Entity parsers: read one entity back out of the graph mirror.
//!
//! Presence of the matching type marker is how "does this document represent
//! an X" is decided, so Image/Like/Comment parsing fails with `NotFound`
//! when the marker is absent. A profile, by contrast, is always a person:
//! missing fields fall back instead of failing.

use crate::error::{Error, Result};
use crate::graph::GraphStore;
use crate::model::{Comment, Image, Like, Person, PLACEHOLDER_AVATAR};
use crate::term::{Node, Term};
use crate::vocab;
use chrono::{DateTime, Utc};

fn has_type(store: &GraphStore, subject: &Node, predicate: &str, kind: &str, graph: &str) -> bool {
    !store
        .matching(Some(subject), Some(predicate), Some(&Term::iri(kind)), Some(graph))
        .is_empty()
}

fn required<'a>(
    store: &'a GraphStore,
    subject: &Node,
    predicate: &str,
    graph: &str,
    what: &'static str,
    uri: &str,
) -> Result<&'a Term> {
    store
        .first_object(subject, predicate, Some(graph))
        .ok_or_else(|| Error::not_found(what, uri))
}

fn timestamp(term: &Term, uri: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(term.value())
        .map(|at| at.with_timezone(&Utc))
        .map_err(|err| Error::Parse {
            uri: uri.to_string(),
            detail: format!("bad timestamp {:?}: {err}", term.value()),
        })
}

/// Parse an image metadata document loaded into `graph`.
pub fn image_from_graph(store: &GraphStore, uri: &str, graph: &str) -> Result<Image> {
    let subject = Node::iri(uri);
    if !has_type(store, &subject, vocab::RDF_TYPE, vocab::SIOC_POST, graph) {
        return Err(Error::not_found("image", uri));
    }
    let image_uri = required(store, &subject, vocab::FOAF_DEPICTION, graph, "image", uri)?;
    let description = required(store, &subject, vocab::DCT_DESCRIPTION, graph, "image", uri)?;
    let creator = required(store, &subject, vocab::DCT_CREATOR, graph, "image", uri)?;
    let created = required(store, &subject, vocab::DCT_CREATED, graph, "image", uri)?;
    Ok(Image {
        uri: uri.to_string(),
        image_uri: image_uri.value().to_string(),
        description: description.value().to_string(),
        creator: creator.value().to_string(),
        created_at: timestamp(created, uri)?,
    })
}

/// Parse a like document loaded into `graph`.
pub fn like_from_graph(store: &GraphStore, uri: &str, graph: &str) -> Result<Like> {
    let subject = Node::iri(uri);
    if !has_type(store, &subject, vocab::AS_TYPE, vocab::AS_LIKE, graph) {
        return Err(Error::not_found("like", uri));
    }
    let object = required(store, &subject, vocab::AS_OBJECT, graph, "like", uri)?;
    let creator = required(store, &subject, vocab::AS_ACTOR, graph, "like", uri)?;
    let published = required(store, &subject, vocab::AS_PUBLISHED, graph, "like", uri)?;
    Ok(Like {
        uri: uri.to_string(),
        object: object.value().to_string(),
        creator: creator.value().to_string(),
        created_at: timestamp(published, uri)?,
    })
}

/// Parse a comment document loaded into `graph`.
pub fn comment_from_graph(store: &GraphStore, uri: &str, graph: &str) -> Result<Comment> {
    let subject = Node::iri(uri);
    if !has_type(store, &subject, vocab::AS_TYPE, vocab::AS_NOTE, graph) {
        return Err(Error::not_found("comment", uri));
    }
    let content = required(store, &subject, vocab::AS_CONTENT, graph, "comment", uri)?;
    let in_reply_to = required(store, &subject, vocab::AS_IN_REPLY_TO, graph, "comment", uri)?;
    let creator = required(store, &subject, vocab::AS_ACTOR, graph, "comment", uri)?;
    let published = required(store, &subject, vocab::AS_PUBLISHED, graph, "comment", uri)?;
    Ok(Comment {
        uri: uri.to_string(),
        content: content.value().to_string(),
        in_reply_to: in_reply_to.value().to_string(),
        creator: creator.value().to_string(),
        created_at: timestamp(published, uri)?,
    })
}

/// Read a person out of their profile document. Missing name and image fall
/// back; the image falls back foaf:img, then vcard:hasPhoto, then the
/// placeholder.
pub fn person_from_graph(store: &GraphStore, web_id: &str, graph: &str) -> Person {
    let subject = Node::iri(web_id);
    let name = store
        .first_object(&subject, vocab::FOAF_NAME, Some(graph))
        .map(|term| term.value().to_string())
        .unwrap_or_default();
    let avatar = store
        .first_object(&subject, vocab::FOAF_IMG, Some(graph))
        .or_else(|| store.first_object(&subject, vocab::VCARD_HAS_PHOTO, Some(graph)))
        .map(|term| term.value().to_string())
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string());
    Person {
        web_id: web_id.to_string(),
        name,
        avatar,
    }
}
