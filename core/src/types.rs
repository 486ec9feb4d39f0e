//! Domain types for the to-do service.
//!
//! # Design
//! `TodoItem` is the stored record. Callers never construct one directly for
//! a write: `add_item` takes a `NewTodoItem`, which has no id, owner, or
//! completion field, so a client cannot pick its own id or create an item on
//! another user's behalf. The service fills those in.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do task record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    /// Generated at creation, immutable afterwards.
    pub id: Uuid,
    /// Free-text label. Not validated; an empty title is stored as-is.
    pub title: String,
    /// False at creation; flips to true through mark-done and never back.
    pub is_done: bool,
    /// Caller-supplied due timestamp, offset preserved.
    pub due_at: DateTime<FixedOffset>,
    /// Id of the owning user. Assigned by the service, never by the caller.
    pub user_id: String,
}

/// Caller-supplied fields for a new item. Everything else is stamped by the
/// service at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodoItem {
    pub title: String,
    pub due_at: DateTime<FixedOffset>,
}

/// An authenticated user, resolved by the calling layer and passed into
/// every service call. The core only reads `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
}
