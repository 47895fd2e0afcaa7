//! Domain entities, as immutable value records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Avatar used when a profile carries no image.
pub const PLACEHOLDER_AVATAR: &str = "/img/icon/empty-profile.svg";

/// A user, derived from their profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub web_id: String,
    /// Display name; empty when the profile has none.
    pub name: String,
    /// Profile image, falling back to [`PLACEHOLDER_AVATAR`].
    pub avatar: String,
}

/// An image post: one metadata document describing exactly one binary asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// URI of the metadata (.ttl) document.
    pub uri: String,
    /// URI of the binary asset the metadata describes.
    pub image_uri: String,
    pub description: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    /// URI of the like (.ttl) document.
    pub uri: String,
    /// URI of the liked object.
    pub object: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// URI of the comment (.ttl) document.
    pub uri: String,
    pub content: String,
    /// URI of the object the comment replies to.
    pub in_reply_to: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}
