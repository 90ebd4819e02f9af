//! Helpers shared by the service, the HTTP layer and the admin CLI.
//!
//! - [`slug`] - Slug validation, normalization and random generation
//! - [`target_url`] - Validation of the URLs links point at
//! - [`db_error`] - Classification of database errors

pub mod db_error;
pub mod slug;
pub mod target_url;
