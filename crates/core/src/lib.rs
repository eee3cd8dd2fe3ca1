//! Core business logic for noticeboard-rs.

pub mod services;

pub use services::*;
