//! Todo Application Layer
//!
//! Implements the item use cases on top of the domain repository contract.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Application Layer                │
//! ├──────────────────────────────────────────────┤
//! │  ItemService          │  ApplicationError     │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!                       │ depends on
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │                 Domain Layer                  │
//! │       Item, ItemId, ItemRepository trait      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - **Validation**: enforce the title rule the repository does not know about
//! - **Use Case Orchestration**: sequence repository calls into one operation
//! - **Error Mapping**: translate domain errors to application-level errors
//!
//! # Non-Goals
//!
//! - Storage (belongs in Infrastructure Layer)
//! - HTTP handling (belongs in Presentation Layer)

pub mod errors;
pub mod services;

pub use errors::{ApplicationError, ApplicationResult};
pub use services::ItemService;
