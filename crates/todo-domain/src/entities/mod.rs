//! Core domain entities with business logic and validation
//!
//! - `item`: the todo item entity and its creation candidate

mod item;

pub use item::*;
