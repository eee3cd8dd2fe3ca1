//! HTTP API layer for noticeboard-rs.
//!
//! This crate provides the REST surface of the notice board:
//!
//! - **Endpoints**: notice CRUD with the lazy archive sweep, plus login
//! - **State**: service handles shared across handlers via [`middleware::AppState`]
//!
//! Built on Axum 0.8 with the Tower middleware stack.

pub mod endpoints;
pub mod middleware;

pub use endpoints::router;
