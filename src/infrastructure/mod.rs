//! Infrastructure layer: concrete implementations of domain contracts.
//!
//! - [`persistence`] - Link storage backends

pub mod persistence;
