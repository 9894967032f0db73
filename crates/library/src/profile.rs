//! Character profile storage (PRD-31).
//!
//! A profile is the caller-owned character configuration document: the
//! appearance record plus any named prompt sets saved with it. Profiles
//! are plain JSON files; the dialogs read one, edit the appearance, and
//! write it back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use figura_core::appearance::CharacterAppearance;
use figura_core::prompt_set::{validate_prompt_set, PromptSet};

use crate::error::LibraryError;

/// A character configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterProfile {
    pub name: String,
    pub appearance: CharacterAppearance,
    pub prompt_sets: Vec<PromptSet>,
}

/// Read and validate a character profile file.
pub async fn read_profile(path: &Path) -> Result<CharacterProfile, LibraryError> {
    let bytes = tokio::fs::read(path).await?;
    let profile: CharacterProfile = serde_json::from_slice(&bytes)?;
    for set in &profile.prompt_sets {
        validate_prompt_set(set)?;
    }
    Ok(profile)
}

/// Write a character profile file, pretty-printed for hand editing.
pub async fn write_profile(path: &Path, profile: &CharacterProfile) -> Result<(), LibraryError> {
    let bytes = serde_json::to_vec_pretty(profile)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
