//! Named prompt sets (PRD-34).
//!
//! A prompt set is a reusable named style: a positive/negative string
//! pair combined onto a finished character prompt. Sets are assembled
//! from project component libraries; see
//! [`PromptSet::from_components`].

use serde::{Deserialize, Serialize};

use crate::component_library::PromptComponent;
use crate::error::CoreError;

/// A named positive/negative style record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSet {
    pub id: String,
    pub name: String,
    pub positive: String,
    pub negative: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PromptSet {
    /// Assemble a set from library components, comma-joining their tags
    /// with empty parts dropped. Component order is preserved.
    pub fn from_components(id: &str, name: &str, components: &[&PromptComponent]) -> Self {
        let positive: Vec<&str> = components
            .iter()
            .map(|c| c.positive.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        let negative: Vec<&str> = components
            .iter()
            .filter_map(|c| c.negative.as_deref())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            positive: positive.join(", "),
            negative: negative.join(", "),
            description: None,
        }
    }
}

/// Validate a prompt set: id and name must be non-empty.
pub fn validate_prompt_set(set: &PromptSet) -> Result<(), CoreError> {
    if set.id.is_empty() {
        return Err(CoreError::Validation(
            "Prompt set id must not be empty".to_string(),
        ));
    }
    if set.name.is_empty() {
        return Err(CoreError::Validation(format!(
            "Prompt set '{}' must have a name",
            set.id
        )));
    }
    Ok(())
}

/// Former per-character styling record, merged into [`PromptSet`].
#[deprecated(note = "Mood sets were unified with prompt sets. Use PromptSet.")]
pub type MoodSet = PromptSet;

#[cfg(test)]
mod tests {
    use super::*;

    fn component(id: &str, positive: &str, negative: Option<&str>) -> PromptComponent {
        PromptComponent {
            id: id.to_string(),
            name: id.to_string(),
            positive: positive.to_string(),
            negative: negative.map(String::from),
            description: None,
        }
    }

    #[test]
    fn from_components_joins_in_order() {
        let a = component("a", "cinematic lighting", Some("flat lighting"));
        let b = component("b", "film grain", None);
        let set = PromptSet::from_components("noir", "Noir", &[&a, &b]);
        assert_eq!(set.positive, "cinematic lighting, film grain");
        assert_eq!(set.negative, "flat lighting");
    }

    #[test]
    fn from_components_drops_empty_parts() {
        let a = component("a", "", Some(""));
        let b = component("b", "soft focus", None);
        let set = PromptSet::from_components("soft", "Soft", &[&a, &b]);
        assert_eq!(set.positive, "soft focus");
        assert_eq!(set.negative, "");
    }

    #[test]
    fn from_components_with_no_components_is_empty() {
        let set = PromptSet::from_components("empty", "Empty", &[]);
        assert_eq!(set.positive, "");
        assert_eq!(set.negative, "");
    }

    #[test]
    fn validate_accepts_named_set() {
        let set = PromptSet {
            id: "noir".to_string(),
            name: "Noir".to_string(),
            ..Default::default()
        };
        assert!(validate_prompt_set(&set).is_ok());
    }

    #[test]
    fn validate_rejects_empty_id() {
        let set = PromptSet {
            name: "Noir".to_string(),
            ..Default::default()
        };
        let err = validate_prompt_set(&set).unwrap_err();
        assert!(err.to_string().contains("id must not be empty"));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let set = PromptSet {
            id: "noir".to_string(),
            ..Default::default()
        };
        let err = validate_prompt_set(&set).unwrap_err();
        assert!(err.to_string().contains("must have a name"));
    }
}
