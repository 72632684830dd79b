//! Todo Persistence Layer
//!
//! Infrastructure layer providing repository implementations for the domain
//! `ItemRepository` contract.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            Infrastructure Layer              │
//! ├─────────────────────────────────────────────┤
//! │  memory/                                     │
//! │  InMemoryItemRepository                      │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!                       │ implements
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │               Domain Layer                   │
//! │               ItemRepository                 │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use todo_persistence::memory::InMemoryItemRepository;
//! use todo_domain::ItemRepository;
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::new());
//! ```

pub mod error;
pub mod memory;

pub use error::PersistenceError;
pub use memory::InMemoryItemRepository;
