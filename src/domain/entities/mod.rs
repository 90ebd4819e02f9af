//! Core domain entities.
//!
//! - [`Link`] - A stored slug to URL mapping
//! - [`NewLink`] - Input for inserting a link

pub mod link;

pub use link::{Link, NewLink};
