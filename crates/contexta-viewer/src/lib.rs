//! Demo HTTP server for request-scoped context.
//!
//! Each request's viewer is resolved once in middleware and bound with
//! [`VIEWER`](viewer::VIEWER); handlers and anything they call read it back
//! through [`use_viewer`](viewer::use_viewer) instead of taking it as an
//! argument.

pub mod config;
pub mod error;
pub mod middleware;
pub mod resolver;
pub mod routes;
pub mod server;
pub mod viewer;

pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use resolver::{DirectoryResolver, QueryNameResolver, ViewerQuery, ViewerResolver};
pub use server::{AppState, build_router, serve, start_server};
pub use viewer::{User, VIEWER, use_viewer};
