//! Pixpod client layer: remote document I/O and the backend façade.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        POD BACKEND                             │
//! ├────────────────────────────────────────────────────────────────┤
//! │                                                                │
//! │   ┌──────────┐  load    ┌──────────────┐  merge  ┌──────────┐  │
//! │   │  remote  │─────────►│   Turtle     │────────►│  Graph   │  │
//! │   │   pods   │          │   parsing    │         │  Store   │  │
//! │   └──────────┘          └──────────────┘         └──────────┘  │
//! │        ▲                                              │        │
//! │        │ create/write                                 │ parse  │
//! │   ┌──────────┐          ┌──────────────┐              ▼        │
//! │   │ builders │◄─────────│   PodBackend │───────► entities      │
//! │   └──────────┘          └──────────────┘                       │
//! │                                                                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`PodBackend`] orchestrates: load-then-parse for single entities,
//! load-then-enumerate-then-parse for collections, a fan-out across friends'
//! pods, and load-then-diff-then-write for updates. The shared
//! [`GraphStore`](pixpod_core::GraphStore) instance is constructor-injected;
//! all network and persistence concerns go through the [`DocumentClient`]
//! trait.

pub mod backend;
pub mod collect;
pub mod remote;
pub mod subscription;

pub use backend::{FolderStatus, PodBackend};
pub use collect::{Collected, Skip};
pub use remote::{ClientConfig, DocumentClient, HttpDocumentClient, TURTLE_CONTENT_TYPE};
pub use subscription::{SubscriptionHandle, SubscriptionRegistry};
