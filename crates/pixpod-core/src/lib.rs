//! Pixpod data layer: the statement model, the in-memory graph mirror, and
//! the pure build/parse functions for the app's entities.
//!
//! A pod is a user-owned remote document space. Everything the app stores
//! there is either a binary asset or a small linked-data document made of
//! subject-predicate-object statements. This crate owns the local statement
//! model for those documents:
//!
//! - [`term`] / [`graph`]: statements and the additive in-memory store that
//!   mirrors every fetched document.
//! - [`turtle`]: Turtle text into statements, stamped with the document they
//!   came from.
//! - [`vocab`]: the fixed ontology (FOAF, DCT, SIOC, ACL, ActivityStreams,
//!   LDP, solid terms) the builders and parsers are keyed by.
//! - [`statements`] / [`parse`]: symmetric build/parse pairs for images,
//!   likes, comments, and activity records.
//! - [`acl`]: access-list generation for files and folders.
//!
//! Everything here is synchronous and I/O-free; the `pixpod-client` crate
//! layers remote fetching and orchestration on top.

pub mod acl;
pub mod error;
pub mod graph;
pub mod id;
pub mod model;
pub mod parse;
pub mod statements;
pub mod term;
pub mod turtle;
pub mod uri;
pub mod vocab;

pub use error::{Error, Result};
pub use graph::GraphStore;
pub use model::{Comment, Image, Like, Person};
pub use term::{serialize_statements, Literal, Node, Statement, Term};
