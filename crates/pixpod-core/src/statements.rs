//! Statement builders: domain values into the statement sets their documents
//! are made of. Pure functions; emission order is part of the wire contract.

use crate::term::{Node, Statement, Term};
use crate::vocab;
use chrono::{DateTime, SecondsFormat, Utc};

/// xsd:dateTime literal with millisecond precision, the pod's timestamp form.
pub fn timestamp_literal(at: DateTime<Utc>) -> Term {
    Term::typed_literal(
        at.to_rfc3339_opts(SecondsFormat::Millis, true),
        vocab::XSD_DATE_TIME,
    )
}

/// The kind of activity recorded on a target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Like,
    Note,
}

impl ActivityKind {
    pub fn iri(self) -> &'static str {
        match self {
            ActivityKind::Like => vocab::AS_LIKE,
            ActivityKind::Note => vocab::AS_NOTE,
        }
    }
}

/// Statements of an image metadata document.
pub fn image_statements(
    meta_uri: &str,
    image_uri: &str,
    description: &str,
    creator: &str,
    created_at: DateTime<Utc>,
) -> Vec<Statement> {
    let subject = Node::iri(meta_uri);
    vec![
        Statement::new(
            subject.clone(),
            vocab::RDF_TYPE,
            Term::iri(vocab::SIOC_POST),
            meta_uri,
        ),
        Statement::new(
            subject.clone(),
            vocab::FOAF_DEPICTION,
            Term::iri(image_uri),
            meta_uri,
        ),
        Statement::new(
            subject.clone(),
            vocab::DCT_DESCRIPTION,
            Term::literal(description),
            meta_uri,
        ),
        Statement::new(
            subject.clone(),
            vocab::DCT_CREATOR,
            Term::iri(creator),
            meta_uri,
        ),
        Statement::new(
            subject,
            vocab::DCT_CREATED,
            timestamp_literal(created_at),
            meta_uri,
        ),
    ]
}

/// Statements of a like document.
pub fn like_statements(
    like_uri: &str,
    object: &str,
    creator: &str,
    published: DateTime<Utc>,
) -> Vec<Statement> {
    let subject = Node::iri(like_uri);
    vec![
        Statement::new(
            subject.clone(),
            vocab::AS_TYPE,
            Term::iri(vocab::AS_LIKE),
            like_uri,
        ),
        Statement::new(subject.clone(), vocab::AS_ACTOR, Term::iri(creator), like_uri),
        Statement::new(subject.clone(), vocab::AS_OBJECT, Term::iri(object), like_uri),
        Statement::new(
            subject,
            vocab::AS_PUBLISHED,
            timestamp_literal(published),
            like_uri,
        ),
    ]
}

/// Statements of a comment document.
pub fn comment_statements(
    comment_uri: &str,
    content: &str,
    in_reply_to: &str,
    creator: &str,
    published: DateTime<Utc>,
) -> Vec<Statement> {
    let subject = Node::iri(comment_uri);
    vec![
        Statement::new(
            subject.clone(),
            vocab::AS_TYPE,
            Term::iri(vocab::AS_NOTE),
            comment_uri,
        ),
        Statement::new(
            subject.clone(),
            vocab::AS_CONTENT,
            Term::literal(content),
            comment_uri,
        ),
        Statement::new(
            subject.clone(),
            vocab::AS_ACTOR,
            Term::iri(creator),
            comment_uri,
        ),
        Statement::new(
            subject.clone(),
            vocab::AS_IN_REPLY_TO,
            Term::iri(in_reply_to),
            comment_uri,
        ),
        Statement::new(
            subject,
            vocab::AS_PUBLISHED,
            timestamp_literal(published),
            comment_uri,
        ),
    ]
}

/// The lightweight back-reference recorded in the **target's** document,
/// so a resource's likes and comments can be enumerated without scanning
/// every pod.
pub fn activity_record(
    activity_uri: &str,
    target_uri: &str,
    kind: ActivityKind,
) -> Vec<Statement> {
    vec![Statement::new(
        Node::iri(activity_uri),
        vocab::AS_TYPE,
        Term::iri(kind.iri()),
        target_uri,
    )]
}
