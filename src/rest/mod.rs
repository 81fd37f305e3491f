//! # REST Layer
//!
//! Axum routes and handlers for the authors, sections, and books resources.
//! One module per resource, each exporting a `*_routes` constructor, combined
//! by `HttpServer`.

mod authors;
mod books;
mod config;
mod errors;
mod populate;
mod sections;
mod server;
mod state;

pub use authors::author_routes;
pub use books::book_routes;
pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult, FailureBody};
pub use sections::section_routes;
pub use server::HttpServer;
pub use state::AppState;
