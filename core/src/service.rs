//! Ownership-enforcing operations over a `TodoStore`.
//!
//! # Design
//! `TodoItemService` is the only logic component: it stamps ownership on
//! writes, gates mutations on an ownership comparison, and issues one or two
//! sequential store calls per operation. There is no separate authorization
//! layer; the owner check inside `mark_done` is the sole gate, re-checked on
//! every call rather than trusting anything the caller resolved earlier.
//!
//! Mutations report plain success/failure. "Not found" and "not owned"
//! deliberately collapse into the same `false`, so a caller cannot probe
//! whether another user's item exists. Store failures are logged here and
//! reported the same way.

use uuid::Uuid;

use crate::store::{StoreError, TodoStore};
use crate::types::{NewTodoItem, TodoItem, User};

/// The to-do business logic, generic over its persistence backend.
#[derive(Debug, Clone)]
pub struct TodoItemService<S> {
    store: S,
}

impl<S: TodoStore> TodoItemService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create an item owned by `owner`.
    ///
    /// The service assigns a fresh id, stamps `owner`'s id, and forces the
    /// item to start incomplete. The title is stored as supplied, empty or
    /// not. Returns true iff the write completed.
    pub async fn add_item(&self, new_item: NewTodoItem, owner: &User) -> bool {
        let item = TodoItem {
            id: Uuid::new_v4(),
            title: new_item.title,
            is_done: false,
            due_at: new_item.due_at,
            user_id: owner.id.clone(),
        };
        match self.store.insert(item).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, user_id = %owner.id, "failed to add item");
                false
            }
        }
    }

    /// Mark the item with `id` as done, if it exists and `user` owns it.
    ///
    /// A missing item and an ownership mismatch produce the same `false`
    /// with nothing mutated. Calling this again on an already-done owned
    /// item stores the same value and returns true again.
    pub async fn mark_done(&self, id: Uuid, user: &User) -> bool {
        let item = match self.store.find_by_id(id).await {
            Ok(Some(item)) => item,
            Ok(None) => return false,
            Err(err) => {
                tracing::warn!(error = %err, %id, "failed to look up item");
                return false;
            }
        };
        if item.user_id != user.id {
            return false;
        }

        let done = TodoItem {
            is_done: true,
            ..item
        };
        match self.store.update(done).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, %id, "failed to mark item done");
                false
            }
        }
    }

    /// All of `user`'s items that are not yet done, in store order.
    ///
    /// An empty list is a normal result, not an error; only a store failure
    /// surfaces as `Err`.
    pub async fn get_incomplete_items(&self, user: &User) -> Result<Vec<TodoItem>, StoreError> {
        self.store.find_incomplete_by_owner(&user.id).await
    }
}
