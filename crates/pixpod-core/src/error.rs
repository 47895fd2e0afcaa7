//! Error taxonomy shared by both crates.
//!
//! Transport failures are opaque at this layer: a `Fetch` or `Write` does not
//! distinguish a missing document from a network fault or a denied request.

use serde::Serialize;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum Error {
    /// A remote document could not be loaded.
    #[error("could not fetch the document at {uri}")]
    Fetch { uri: String },

    /// A remote document could not be created or updated.
    #[error("could not write the document at {uri}")]
    Write { uri: String },

    /// A loaded document is not well-formed Turtle.
    #[error("could not parse the document at {uri}: {detail}")]
    Parse { uri: String, detail: String },

    /// A loaded document lacks the type marker or a field the entity needs.
    #[error("{what} not found at {uri}")]
    NotFound { what: &'static str, uri: String },

    /// The profile carries no application-folder pointer.
    #[error("no application folder")]
    NoAppFolder,

    /// The pointed-at folder fails the required sub-collection check.
    #[error("no valid application folder")]
    NoValidFolder,

    /// Caller-supplied input was rejected before any remote call.
    #[error("{0}")]
    Validation(String),
}

impl Error {
    pub fn fetch(uri: impl Into<String>) -> Self {
        Error::Fetch { uri: uri.into() }
    }

    pub fn write(uri: impl Into<String>) -> Self {
        Error::Write { uri: uri.into() }
    }

    pub fn not_found(what: &'static str, uri: impl Into<String>) -> Self {
        Error::NotFound {
            what,
            uri: uri.into(),
        }
    }
}
