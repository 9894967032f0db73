//! Prompt component libraries (PRD-34).
//!
//! A component library is the project-scoped catalog of reusable prompt
//! fragments, grouped by category for the picker UI. This module holds
//! the pure types, validation, and the built-in default library used
//! when a project ships no library of its own; file loading lives in
//! `figura-library`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One reusable prompt fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptComponent {
    /// Library-wide unique identifier.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Tags contributed to the positive prompt.
    pub positive: String,
    /// Tags contributed to the negative prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A display grouping of components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentCategory {
    pub id: String,
    pub label: String,
    pub components: Vec<PromptComponent>,
}

/// A complete component library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentLibrary {
    pub name: String,
    pub categories: Vec<ComponentCategory>,
}

impl ComponentLibrary {
    /// Look up a component by id across all categories.
    pub fn component(&self, id: &str) -> Option<&PromptComponent> {
        self.all_components().find(|c| c.id == id)
    }

    /// Iterate every component in category order.
    pub fn all_components(&self) -> impl Iterator<Item = &PromptComponent> {
        self.categories.iter().flat_map(|c| c.components.iter())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a single component: id and name must be non-empty.
pub fn validate_component(component: &PromptComponent) -> Result<(), CoreError> {
    if component.id.is_empty() {
        return Err(CoreError::Validation(
            "Component id must not be empty".to_string(),
        ));
    }
    if component.name.is_empty() {
        return Err(CoreError::Validation(format!(
            "Component '{}' must have a name",
            component.id
        )));
    }
    Ok(())
}

/// Validate a library: non-empty name, valid categories and components,
/// and library-wide unique component ids.
pub fn validate_library(library: &ComponentLibrary) -> Result<(), CoreError> {
    if library.name.is_empty() {
        return Err(CoreError::Validation(
            "Library name must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for category in &library.categories {
        if category.id.is_empty() {
            return Err(CoreError::Validation(
                "Category id must not be empty".to_string(),
            ));
        }
        for component in &category.components {
            validate_component(component)?;
            if !seen.insert(component.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate component id: {}",
                    component.id
                )));
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Built-in default library
// ---------------------------------------------------------------------------

fn component(
    id: &str,
    name: &str,
    positive: &str,
    negative: Option<&str>,
) -> PromptComponent {
    PromptComponent {
        id: id.to_string(),
        name: name.to_string(),
        positive: positive.to_string(),
        negative: negative.map(String::from),
        description: None,
    }
}

/// The built-in component library, used as the fallback when a project
/// has no library file or its file fails to load.
pub fn default_library() -> ComponentLibrary {
    ComponentLibrary {
        name: "Built-in".to_string(),
        categories: vec![
            ComponentCategory {
                id: "quality".to_string(),
                label: "Quality".to_string(),
                components: vec![
                    component(
                        "quality_standard",
                        "Standard quality",
                        "masterpiece, best quality, highly detailed",
                        Some("worst quality, low quality"),
                    ),
                    component(
                        "quality_sharp",
                        "Sharp detail",
                        "sharp focus, intricate details, 8k",
                        Some("blurry, out of focus"),
                    ),
                ],
            },
            ComponentCategory {
                id: "style".to_string(),
                label: "Style".to_string(),
                components: vec![
                    component(
                        "style_cinematic",
                        "Cinematic",
                        "cinematic composition, film grain",
                        None,
                    ),
                    component(
                        "style_soft_anime",
                        "Soft anime",
                        "soft shading, clean lineart",
                        None,
                    ),
                ],
            },
            ComponentCategory {
                id: "lighting".to_string(),
                label: "Lighting".to_string(),
                components: vec![
                    component(
                        "lighting_golden_hour",
                        "Golden hour",
                        "golden hour, warm lighting",
                        None,
                    ),
                    component(
                        "lighting_studio",
                        "Studio",
                        "studio lighting, softbox lighting",
                        Some("harsh shadows"),
                    ),
                    component(
                        "lighting_dramatic",
                        "Dramatic",
                        "dramatic lighting, strong shadows, rim light",
                        None,
                    ),
                ],
            },
            ComponentCategory {
                id: "mood".to_string(),
                label: "Mood".to_string(),
                components: vec![
                    component("mood_serene", "Serene", "serene, calm atmosphere", None),
                    component(
                        "mood_melancholy",
                        "Melancholy",
                        "melancholy, muted colors",
                        None,
                    ),
                    component(
                        "mood_energetic",
                        "Energetic",
                        "dynamic pose, vibrant colors",
                        None,
                    ),
                ],
            },
            ComponentCategory {
                id: "setting".to_string(),
                label: "Setting".to_string(),
                components: vec![
                    component(
                        "setting_city_night",
                        "City at night",
                        "city street, night, neon lights",
                        None,
                    ),
                    component(
                        "setting_forest",
                        "Forest",
                        "forest clearing, dappled sunlight",
                        None,
                    ),
                    component(
                        "setting_indoor_cozy",
                        "Cozy interior",
                        "cozy room, warm interior",
                        None,
                    ),
                ],
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
