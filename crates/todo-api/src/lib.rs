#![warn(missing_docs)]

//! Todo RESTful API
//!
//! HTTP gateway over the item use cases: decodes requests, calls the
//! application service and maps its results and errors to responses.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::{ConfigLoader, ServerConfig};
pub use server::ApiServer;
pub use state::AppState;
