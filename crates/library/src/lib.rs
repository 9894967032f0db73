//! Project-scoped component library loading and character profile
//! storage.
//!
//! The one asynchronous surface of the system: JSON documents on disk go
//! in, validated `figura-core` data comes out. Library load failures
//! never abort prompt building; [`loader::load_project_library`] falls
//! back to the built-in default library instead.

pub mod error;
pub mod loader;
pub mod profile;
