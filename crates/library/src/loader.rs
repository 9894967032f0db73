//! Project component library loading (PRD-34).
//!
//! A project may ship its own `prompt_components.json` next to its other
//! configuration. The strict reader surfaces IO/parse/validation errors;
//! the project-level loader never fails, substituting the built-in
//! default library so prompt building always has components to offer.

use std::path::Path;

use figura_core::component_library::{default_library, validate_library, ComponentLibrary};

use crate::error::LibraryError;

/// File name of a project's component library document.
pub const LIBRARY_FILE_NAME: &str = "prompt_components.json";

/// Read and validate a component library file.
pub async fn read_library(path: &Path) -> Result<ComponentLibrary, LibraryError> {
    let bytes = tokio::fs::read(path).await?;
    let library: ComponentLibrary = serde_json::from_slice(&bytes)?;
    validate_library(&library)?;
    Ok(library)
}

/// Load the component library for a project directory.
///
/// Falls back to [`default_library`] when the project file is absent,
/// unreadable, or invalid. The fallback is logged, not propagated: a
/// broken library file must never take prompt building down with it.
pub async fn load_project_library(project_dir: &Path) -> ComponentLibrary {
    let path = project_dir.join(LIBRARY_FILE_NAME);
    match read_library(&path).await {
        Ok(library) => {
            tracing::debug!(path = %path.display(), name = %library.name, "loaded project component library");
            library
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to built-in component library");
            default_library()
        }
    }
}
