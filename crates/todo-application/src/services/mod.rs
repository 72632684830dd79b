//! Application layer services
//!
//! Services are stateless and receive their repository through the
//! constructor, so any `ItemRepository` backend can be injected.

mod item_service;

pub use item_service::ItemService;
