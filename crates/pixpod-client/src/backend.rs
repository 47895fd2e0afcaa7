//! The pod backend: orchestration over the graph mirror and the remote
//! document client.
//!
//! Reads are load-then-parse; collections are load-then-enumerate-then-parse
//! with per-item skips; writes compose builder output with remote creates;
//! updates are load-then-diff-then-write, applied to the local mirror only
//! after the remote accepted them.

use chrono::Utc;
use futures::future::join_all;
use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use pixpod_core::acl::{self, AccessMode};
use pixpod_core::statements::{self, ActivityKind};
use pixpod_core::term::{Node, Statement, Term};
use pixpod_core::{id, parse, serialize_statements, turtle, uri, vocab};
use pixpod_core::{Comment, Error, GraphStore, Image, Like, Person, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::Arc;

use crate::collect::Collected;
use crate::remote::{ClientConfig, DocumentClient, HttpDocumentClient, TURTLE_CONTENT_TYPE};
use crate::subscription::{SubscriptionHandle, SubscriptionRegistry};

/// The sub-collections every application folder must carry.
pub const REQUIRED_COLLECTIONS: [&str; 3] = ["images", "comments", "likes"];

/// Where folder acquisition ended up. Everything except `Valid` means
/// "prompt the user to choose or create a folder".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FolderStatus {
    Unknown,
    Resolving,
    Valid,
    Missing,
    Invalid,
    FetchFailed,
}

pub struct PodBackend {
    store: RwLock<GraphStore>,
    client: Arc<dyn DocumentClient>,
    subscriptions: SubscriptionRegistry,
    watches: Mutex<HashMap<String, SubscriptionHandle>>,
}

impl PodBackend {
    /// A backend over an injected store and client. Tests hand in an empty
    /// store and a fake client; nothing is process-global.
    pub fn new(store: GraphStore, client: Arc<dyn DocumentClient>) -> Self {
        Self {
            store: RwLock::new(store),
            client,
            subscriptions: SubscriptionRegistry::new(),
            watches: Mutex::new(HashMap::new()),
        }
    }

    /// A backend talking HTTP to real pods.
    pub fn over_http(config: &ClientConfig) -> Self {
        Self::new(GraphStore::new(), Arc::new(HttpDocumentClient::new(config)))
    }

    /// Read access to the graph mirror. The guard must not be held across
    /// an `await`.
    pub fn store(&self) -> RwLockReadGuard<'_, GraphStore> {
        self.store.read()
    }

    pub fn subscriptions(&self) -> &SubscriptionRegistry {
        &self.subscriptions
    }

    /// Documents currently registered for remote-change notification.
    pub fn watched_documents(&self) -> Vec<String> {
        self.subscriptions.watched()
    }

    /// Stop watching a document; true when a registration existed.
    pub fn unwatch(&self, uri: &str) -> bool {
        self.watches.lock().remove(uri).is_some()
    }

    fn watch(&self, uri: &str) {
        let mut watches = self.watches.lock();
        if !watches.contains_key(uri) {
            watches.insert(uri.to_string(), self.subscriptions.register(uri));
        }
    }

    /// Fetch a document and merge its statements into the mirror.
    async fn load_document(&self, uri: &str) -> Result<()> {
        let text = self.client.load(uri).await?;
        let loaded = turtle::parse_document(&text, uri)?;
        self.store.write().insert_all(loaded);
        Ok(())
    }

    // ========================================================================
    // Application folder
    // ========================================================================

    /// The folder named by the profile's timeline pointer.
    pub async fn app_folder(&self, web_id: &str) -> Result<String> {
        let profile = uri::document_of(web_id);
        self.load_document(&profile).await?;
        let store = self.store.read();
        store
            .first_object(&Node::iri(web_id), vocab::SOLID_TIMELINE, Some(profile.as_str()))
            .map(|folder| folder.value().to_string())
            .ok_or(Error::NoAppFolder)
    }

    /// True iff the folder's direct children include all three required
    /// sub-collections. Extra children are ignored; duplicates collapse.
    pub async fn is_valid_app_folder(&self, folder_uri: &str) -> Result<bool> {
        let folder = uri::with_trailing_slash(folder_uri);
        self.load_document(&folder).await?;
        let found: BTreeSet<String> = {
            let store = self.store.read();
            store
                .matching(
                    None,
                    Some(vocab::RDF_TYPE),
                    Some(&Term::iri(vocab::LDP_CONTAINER)),
                    Some(folder.as_str()),
                )
                .iter()
                .filter_map(|st| match &st.subject {
                    Node::Iri(child) if child != &folder => uri::last_segment(child),
                    _ => None,
                })
                .filter(|segment| REQUIRED_COLLECTIONS.contains(&segment.as_str()))
                .collect()
        };
        self.watch(&folder);
        Ok(found.len() == REQUIRED_COLLECTIONS.len())
    }

    /// The profile's folder, only if it passes validation.
    pub async fn valid_app_folder(&self, web_id: &str) -> Result<String> {
        let folder = self.app_folder(web_id).await?;
        if self.is_valid_app_folder(&folder).await? {
            Ok(uri::with_trailing_slash(&folder))
        } else {
            Err(Error::NoValidFolder)
        }
    }

    /// Drive folder acquisition to a terminal state.
    pub async fn folder_status(&self, web_id: &str) -> FolderStatus {
        let folder = match self.app_folder(web_id).await {
            Ok(folder) => folder,
            Err(Error::NoAppFolder) => return FolderStatus::Missing,
            Err(_) => return FolderStatus::FetchFailed,
        };
        match self.is_valid_app_folder(&folder).await {
            Ok(true) => FolderStatus::Valid,
            Ok(false) => FolderStatus::Invalid,
            Err(_) => FolderStatus::FetchFailed,
        }
    }

    /// Create the folder, its three sub-collections, and its access
    /// document, then point the profile at it. Degrades to `false` on any
    /// failure: partial folder creation is a retryable state, not an error
    /// the caller has to dissect.
    pub async fn create_app_folders(&self, web_id: &str, folder_uri: &str) -> bool {
        let folder = uri::with_trailing_slash(folder_uri);
        let created = async {
            self.client.create_collection(&folder).await?;
            for collection in REQUIRED_COLLECTIONS {
                self.client
                    .create_collection(&format!("{folder}{collection}/"))
                    .await?;
            }
            let folder_acl =
                acl::folder_access_list(web_id, &folder, &[AccessMode::Read], true, &[]);
            self.client
                .write(
                    &acl::acl_document_uri(&folder),
                    serialize_statements(&folder_acl),
                )
                .await?;
            Ok::<(), Error>(())
        };
        if let Err(err) = created.await {
            tracing::warn!(folder = %folder, error = %err, "application folder creation failed");
            return false;
        }
        self.update_app_folder(web_id, &folder).await
    }

    /// Point the profile's timeline pointer at a new folder. `false` on any
    /// failure, leaving remote and local state unchanged.
    pub async fn update_app_folder(&self, web_id: &str, folder_uri: &str) -> bool {
        let profile = uri::document_of(web_id);
        if let Err(err) = self.load_document(&profile).await {
            tracing::warn!(profile = %profile, error = %err, "could not load the profile document");
            return false;
        }
        let user = Node::iri(web_id);
        let insertions = vec![Statement::new(
            user.clone(),
            vocab::SOLID_TIMELINE,
            Term::iri(folder_uri),
            &profile,
        )];
        let deletions: Vec<Statement> = {
            let store = self.store.read();
            store
                .matching(Some(&user), Some(vocab::SOLID_TIMELINE), None, Some(profile.as_str()))
                .into_iter()
                .cloned()
                .collect()
        };
        if let Err(err) = self.update_resource(&profile, &insertions, &deletions).await {
            tracing::warn!(profile = %profile, error = %err, "could not update the profile document");
            return false;
        }
        self.watch(&profile);
        true
    }

    // ========================================================================
    // Resource updates
    // ========================================================================

    /// Load a document, apply a statement diff, and write it back. The local
    /// mirror changes only after the remote accepted the new content, and
    /// deletions and insertions land under one write lock, so no reader
    /// observes a half-applied diff.
    pub async fn update_resource(
        &self,
        uri: &str,
        insertions: &[Statement],
        deletions: &[Statement],
    ) -> Result<()> {
        self.load_document(uri).await?;
        let next: Vec<Statement> = {
            let store = self.store.read();
            let mut document: Vec<Statement> =
                store.statements_in(uri).into_iter().cloned().collect();
            document.retain(|st| !deletions.contains(st));
            for insertion in insertions {
                if !document.contains(insertion) {
                    document.push(insertion.clone());
                }
            }
            document
        };
        self.client.write(uri, serialize_statements(&next)).await?;
        let mut store = self.store.write();
        store.remove_all(deletions);
        store.insert_all(insertions.iter().cloned());
        Ok(())
    }

    // ========================================================================
    // Images
    // ========================================================================

    /// A user's images, newest first. A caller-supplied folder skips
    /// re-validation; with none, an unresolvable folder yields an empty
    /// result rather than a failure.
    pub async fn images(&self, web_id: &str, folder: Option<&str>) -> Result<Collected<Image>> {
        let folder = match folder {
            Some(folder) => uri::with_trailing_slash(folder),
            None => match self.valid_app_folder(web_id).await {
                Ok(folder) => folder,
                Err(err) => {
                    tracing::warn!(web_id = %web_id, error = %err, "no application folder resolvable");
                    return Ok(Collected::new());
                }
            },
        };
        let image_folder = format!("{folder}images/");
        self.load_document(&image_folder).await?;
        let files: Vec<String> = {
            let store = self.store.read();
            store
                .matching(
                    Some(&Node::iri(&image_folder)),
                    Some(vocab::LDP_CONTAINS),
                    None,
                    Some(image_folder.as_str()),
                )
                .iter()
                .filter_map(|st| st.object.as_iri())
                .filter(|child| child.ends_with(".ttl"))
                .map(str::to_string)
                .collect()
        };
        let mut collected = Collected::new();
        for file in files {
            match self.image(&file).await {
                Ok(image) => collected.push(image),
                Err(err) => collected.skip(&file, &err),
            }
        }
        self.watch(&image_folder);
        collected.items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(collected)
    }

    /// A single image; the metadata document must carry the post marker.
    pub async fn image(&self, image_uri: &str) -> Result<Image> {
        let document = uri::document_of(image_uri);
        self.load_document(&document).await?;
        let store = self.store.read();
        parse::image_from_graph(&store, image_uri, &document)
    }

    /// Upload a binary asset, its metadata document, and the access
    /// documents for both. Every step is required; the first failure aborts
    /// and propagates, and earlier artifacts stay behind (no rollback).
    #[allow(clippy::too_many_arguments)]
    pub async fn upload_image(
        &self,
        content: Vec<u8>,
        content_type: &str,
        description: &str,
        web_id: &str,
        folder: &str,
        public: bool,
        allowed: &[String],
    ) -> Result<Image> {
        let folder = uri::with_trailing_slash(folder);
        let token = id::fresh_token();
        let created_at = Utc::now();

        let asset_uri = format!("{folder}images/{token}.{}", extension_for(content_type));
        let asset_uri = self.client.create(&asset_uri, content, content_type).await?;

        let meta_uri = format!("{folder}images/{token}.ttl");
        let meta = statements::image_statements(&meta_uri, &asset_uri, description, web_id, created_at);
        let meta_uri = self
            .client
            .create(
                &meta_uri,
                serialize_statements(&meta).into_bytes(),
                TURTLE_CONTENT_TYPE,
            )
            .await?;

        let asset_acl = acl::file_access_list(web_id, &asset_uri, &[AccessMode::Read], public, allowed);
        self.client
            .create(
                &acl::acl_document_uri(&asset_uri),
                serialize_statements(&asset_acl).into_bytes(),
                TURTLE_CONTENT_TYPE,
            )
            .await?;

        // The metadata document additionally grants Append, so other users'
        // likes and comments can record their back-references in it.
        let meta_acl = acl::file_access_list(
            web_id,
            &meta_uri,
            &[AccessMode::Append, AccessMode::Read],
            public,
            allowed,
        );
        self.client
            .create(
                &acl::acl_document_uri(&meta_uri),
                serialize_statements(&meta_acl).into_bytes(),
                TURTLE_CONTENT_TYPE,
            )
            .await?;

        Ok(Image {
            uri: meta_uri,
            image_uri: asset_uri,
            description: description.to_string(),
            creator: web_id.to_string(),
            created_at,
        })
    }

    // ========================================================================
    // Persons
    // ========================================================================

    /// Identifiers of the user's friends, from the profile's knows relation.
    pub async fn friends_web_ids(&self, web_id: &str) -> Result<Vec<String>> {
        let profile = uri::document_of(web_id);
        self.load_document(&profile).await?;
        let store = self.store.read();
        Ok(store
            .matching(Some(&Node::iri(web_id)), Some(vocab::FOAF_KNOWS), None, Some(profile.as_str()))
            .iter()
            .filter_map(|st| st.object.as_iri())
            .map(str::to_string)
            .collect())
    }

    pub async fn person(&self, web_id: &str) -> Result<Person> {
        let profile = uri::document_of(web_id);
        self.load_document(&profile).await?;
        let store = self.store.read();
        Ok(parse::person_from_graph(&store, web_id, &profile))
    }

    /// Sequential per-person fetch; one unreachable profile becomes a skip,
    /// not a failure.
    pub async fn persons(&self, web_ids: &[String]) -> Collected<Person> {
        let mut collected = Collected::new();
        for web_id in web_ids {
            match self.person(web_id).await {
                Ok(person) => collected.push(person),
                Err(err) => collected.skip(web_id, &err),
            }
        }
        collected
    }

    pub async fn friends(&self, web_id: &str) -> Result<Collected<Person>> {
        let friend_ids = self.friends_web_ids(web_id).await?;
        Ok(self.persons(&friend_ids).await)
    }

    /// All friends' images, newest first. One request per friend, all in
    /// flight at once; a slow or failing friend neither blocks nor fails
    /// the others.
    pub async fn friends_images(&self, web_id: &str) -> Result<Collected<Image>> {
        let friend_ids = self.friends_web_ids(web_id).await?;
        let fetches = friend_ids.iter().map(|friend| self.images(friend, None));
        let results = join_all(fetches).await;

        let mut collected = Collected::new();
        for (friend, result) in friend_ids.iter().zip(results) {
            match result {
                Ok(batch) => collected.merge(batch),
                Err(err) => collected.skip(friend, &err),
            }
        }
        collected.items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(collected)
    }

    // ========================================================================
    // Likes
    // ========================================================================

    /// Like a resource: write the like document, then record the activity
    /// back-reference on the target. Liking the same resource twice is
    /// rejected before anything is written.
    pub async fn upload_like(&self, web_id: &str, folder: &str, target: &str) -> Result<Like> {
        let existing = self.likes(target).await?;
        if existing.items.iter().any(|like| like.creator == web_id) {
            return Err(Error::Validation("resource already liked".to_string()));
        }

        let folder = uri::with_trailing_slash(folder);
        let like_uri = format!("{folder}likes/{}.ttl", id::fresh_token());
        let published = Utc::now();
        let like = statements::like_statements(&like_uri, target, web_id, published);
        self.client
            .create(
                &like_uri,
                serialize_statements(&like).into_bytes(),
                TURTLE_CONTENT_TYPE,
            )
            .await?;
        self.record_activity(&like_uri, target, ActivityKind::Like)
            .await?;

        Ok(Like {
            uri: like_uri,
            object: target.to_string(),
            creator: web_id.to_string(),
            created_at: published,
        })
    }

    /// Likes on a resource, resolved from its activity records.
    pub async fn likes(&self, target: &str) -> Result<Collected<Like>> {
        let records = self.activity_records(target, ActivityKind::Like).await?;
        let mut collected = Collected::new();
        for record in records {
            match self.like(&record).await {
                Ok(like) => collected.push(like),
                Err(err) => collected.skip(&record, &err),
            }
        }
        self.watch(target);
        Ok(collected)
    }

    pub async fn like(&self, like_uri: &str) -> Result<Like> {
        let document = uri::document_of(like_uri);
        self.load_document(&document).await?;
        let store = self.store.read();
        parse::like_from_graph(&store, like_uri, &document)
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Comment on a resource. Empty input is rejected before anything is
    /// written.
    pub async fn upload_comment(
        &self,
        web_id: &str,
        folder: &str,
        in_reply_to: &str,
        content: &str,
    ) -> Result<Comment> {
        if content.trim().is_empty() {
            return Err(Error::Validation("comment text is empty".to_string()));
        }

        let folder = uri::with_trailing_slash(folder);
        let comment_uri = format!("{folder}comments/{}.ttl", id::fresh_token());
        let published = Utc::now();
        let comment =
            statements::comment_statements(&comment_uri, content, in_reply_to, web_id, published);
        self.client
            .create(
                &comment_uri,
                serialize_statements(&comment).into_bytes(),
                TURTLE_CONTENT_TYPE,
            )
            .await?;
        self.record_activity(&comment_uri, in_reply_to, ActivityKind::Note)
            .await?;

        Ok(Comment {
            uri: comment_uri,
            content: content.to_string(),
            in_reply_to: in_reply_to.to_string(),
            creator: web_id.to_string(),
            created_at: published,
        })
    }

    /// Comments on a resource, oldest first.
    pub async fn comments(&self, target: &str) -> Result<Collected<Comment>> {
        let records = self.activity_records(target, ActivityKind::Note).await?;
        let mut collected = Collected::new();
        for record in records {
            match self.comment(&record).await {
                Ok(comment) => collected.push(comment),
                Err(err) => collected.skip(&record, &err),
            }
        }
        self.watch(target);
        collected.items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(collected)
    }

    pub async fn comment(&self, comment_uri: &str) -> Result<Comment> {
        let document = uri::document_of(comment_uri);
        self.load_document(&document).await?;
        let store = self.store.read();
        parse::comment_from_graph(&store, comment_uri, &document)
    }

    // ========================================================================
    // Activity records
    // ========================================================================

    /// URIs of the activity documents of one kind recorded on a target.
    async fn activity_records(&self, target: &str, kind: ActivityKind) -> Result<Vec<String>> {
        self.load_document(target).await?;
        let store = self.store.read();
        Ok(store
            .matching(None, Some(vocab::AS_TYPE), Some(&Term::iri(kind.iri())), Some(target))
            .iter()
            .filter_map(|st| match &st.subject {
                Node::Iri(activity) => Some(activity.clone()),
                Node::Blank(_) => None,
            })
            .collect())
    }

    /// Record the activity back-reference on the target. Idempotent: a
    /// retried upload finds the record already present and does not
    /// duplicate it.
    async fn record_activity(
        &self,
        activity_uri: &str,
        target: &str,
        kind: ActivityKind,
    ) -> Result<()> {
        let record = statements::activity_record(activity_uri, target, kind);
        self.load_document(target).await?;
        let already_recorded = {
            let store = self.store.read();
            record.iter().all(|st| store.contains(st))
        };
        if already_recorded {
            return Ok(());
        }
        self.update_resource(target, &record, &[]).await
    }
}

fn extension_for(content_type: &str) -> &str {
    let subtype = content_type.split('/').nth(1).unwrap_or("");
    let subtype = subtype.split(';').next().unwrap_or(subtype).trim();
    let subtype = subtype.split('+').next().unwrap_or(subtype);
    if subtype.is_empty() {
        "bin"
    } else {
        subtype
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_follows_the_content_type() {
        assert_eq!(extension_for("image/jpeg"), "jpeg");
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/svg+xml"), "svg");
        assert_eq!(extension_for("image/jpeg; charset=binary"), "jpeg");
        assert_eq!(extension_for("garbage"), "bin");
    }
}
