//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI one place to go through.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup and removal

pub mod services;
