//! Core logic for a minimal multi-user to-do list.
//!
//! # Overview
//! Users create timestamped tasks, mark them done, and list their own
//! incomplete items. The entire business logic lives in `TodoItemService`,
//! which enforces per-user ownership and the one-way incomplete→complete
//! transition around an abstract `TodoStore`.
//!
//! # Design
//! - The service stamps the owner on every write; callers cannot create an
//!   item on another user's behalf.
//! - Ownership comparison inside `mark_done` is the sole authorization gate.
//! - "Not found" and "not owned" collapse into the same failure, so callers
//!   learn nothing about items they do not own.
//! - The store is a trait; `MemoryStore` keeps the core testable without a
//!   database. A calling layer resolves the authenticated `User` and passes
//!   it explicitly into every operation — there is no ambient request
//!   context.

pub mod service;
pub mod store;
pub mod types;

pub use service::TodoItemService;
pub use store::{MemoryStore, StoreError, TodoStore};
pub use types::{NewTodoItem, TodoItem, User};
