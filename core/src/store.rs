//! Persistence boundary for to-do items.
//!
//! # Design
//! The service talks to a `TodoStore` trait instead of a concrete database,
//! so the core stays testable without any database dependency. `MemoryStore`
//! is the in-process implementation: shared state behind a tokio `RwLock`,
//! the same shape a real backend would expose. Items are kept in insertion
//! order; listings come back in that order.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::TodoItem;

/// Failures at the persistence seam.
///
/// Both variants surface to service callers as operation failure; the core
/// never retries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A storage constraint was violated, e.g. a duplicate id on insert or
    /// a missing row on update.
    #[error("constraint violation: {0}")]
    Constraint(String),
}

/// Abstract store of to-do items keyed by id.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Persist a new item. Fails if an item with the same id already exists.
    async fn insert(&self, item: TodoItem) -> Result<(), StoreError>;

    /// Look up a single item by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TodoItem>, StoreError>;

    /// All items owned by `user_id` that are not yet done, in store order.
    async fn find_incomplete_by_owner(&self, user_id: &str) -> Result<Vec<TodoItem>, StoreError>;

    /// Replace the stored item carrying the same id. Fails if absent.
    async fn update(&self, item: TodoItem) -> Result<(), StoreError>;
}

/// In-memory `TodoStore` backed by a shared, locked vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<Vec<TodoItem>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn insert(&self, item: TodoItem) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::Constraint(format!(
                "duplicate item id {}",
                item.id
            )));
        }
        items.push(item);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TodoItem>, StoreError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn find_incomplete_by_owner(&self, user_id: &str) -> Result<Vec<TodoItem>, StoreError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| item.user_id == user_id && !item.is_done)
            .cloned()
            .collect())
    }

    async fn update(&self, item: TodoItem) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                *existing = item;
                Ok(())
            }
            None => Err(StoreError::Constraint(format!(
                "no item with id {} to update",
                item.id
            ))),
        }
    }
}
