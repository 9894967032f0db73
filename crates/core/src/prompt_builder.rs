//! Prompt assembly from appearance records (PRD-31).
//!
//! Stateless builder functions that turn a [`CharacterAppearance`] into a
//! positive/negative tag string pair. Regional variants filter catalog
//! tags by body region so partial shots do not pick up tags for body
//! parts outside the frame.

use serde::{Deserialize, Serialize};

use crate::appearance::CharacterAppearance;
use crate::attribute_catalog::{resolve_option, FIELD_ORDER};
use crate::error::CoreError;
use crate::prompt_set::PromptSet;
use crate::region::{Region, ShotType};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Negative tags substituted when a build produces no negative fragment.
/// A generation request with an empty negative prompt reliably degrades
/// output quality, so character builds never return one.
pub const DEFAULT_NEGATIVE_TAGS: &[&str] = &[
    "lowres",
    "bad anatomy",
    "bad hands",
    "missing fingers",
    "extra digit",
    "fewer digits",
    "cropped",
    "worst quality",
    "low quality",
    "jpeg artifacts",
    "signature",
    "watermark",
    "blurry",
];

/// Default framing text for [`build_portrait_prompt`].
pub const PORTRAIT_FRAMING: &str = "portrait, looking at viewer, detailed face";

/// Default framing text for [`build_full_body_prompt`].
pub const FULL_BODY_FRAMING: &str = "full body, standing";

// ---------------------------------------------------------------------------
// Output type
// ---------------------------------------------------------------------------

/// A finished positive/negative prompt pair. Always freshly allocated;
/// callers hand it straight to the generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub positive: String,
    pub negative: String,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build an unfiltered prompt pair from an appearance record.
///
/// Catalog tags are appended in [`FIELD_ORDER`], then quality tags, then
/// the free-form tag inputs, then the caller-supplied scene text. The
/// negative side falls back to [`DEFAULT_NEGATIVE_TAGS`] when nothing
/// produced a negative fragment.
pub fn build_from_appearance(
    appearance: Option<&CharacterAppearance>,
    positive_prompt: Option<&str>,
    negative_prompt: Option<&str>,
) -> Result<GeneratedPrompt, CoreError> {
    let appearance = require_appearance(appearance)?;
    let (positive, negative) =
        collect_fragments(appearance, None, positive_prompt, negative_prompt);
    Ok(finish(positive, negative))
}

/// Build a prompt pair filtered to the regions of a framing preset.
///
/// Catalog tags outside `shot_type.regions()` are dropped; quality tags,
/// user tag lists, and the caller-supplied scene text are
/// shot-independent and always included.
pub fn build_regional_prompt(
    appearance: Option<&CharacterAppearance>,
    shot_type: ShotType,
    extra_positive: Option<&str>,
    extra_negative: Option<&str>,
) -> Result<GeneratedPrompt, CoreError> {
    let appearance = require_appearance(appearance)?;
    let (positive, negative) = collect_fragments(
        appearance,
        Some(shot_type.regions()),
        extra_positive,
        extra_negative,
    );
    Ok(finish(positive, negative))
}

/// Build a prompt pair filtered to an explicit region set.
///
/// An empty region set is scenery mode: the result is empty on both
/// sides, with no quality tags and no negative defaulting.
///
/// When [`Region::FullBody`] is selected, negative framing hints are
/// appended after defaulting to keep excluded body parts out of frame:
/// `head_out_of_frame` when the head is wanted, and `upper_body` /
/// `lower_body` when those regions are excluded.
pub fn build_regional_prompt_with_regions(
    appearance: Option<&CharacterAppearance>,
    regions: &[Region],
    extra_positive: Option<&str>,
    extra_negative: Option<&str>,
) -> Result<GeneratedPrompt, CoreError> {
    if regions.is_empty() {
        return Ok(GeneratedPrompt::default());
    }

    let appearance = require_appearance(appearance)?;
    let (positive, negative) =
        collect_fragments(appearance, Some(regions), extra_positive, extra_negative);
    let mut prompt = finish(positive, negative);

    if regions.contains(&Region::FullBody) {
        let mut hints: Vec<&str> = Vec::new();
        if regions.contains(&Region::Head) {
            hints.push("head_out_of_frame");
        }
        if !regions.contains(&Region::UpperBody) {
            hints.push("upper_body");
        }
        if !regions.contains(&Region::LowerBody) {
            hints.push("lower_body");
        }
        if !hints.is_empty() {
            prompt.negative = join_pair(&prompt.negative, &hints.join(", "));
        }
    }

    Ok(prompt)
}

/// Combine a finished prompt with a named prompt set, comma-joined per
/// side with empty parts dropped. Pure concatenation: no defaulting.
pub fn combine_with_prompt_set(base: &GeneratedPrompt, set: &PromptSet) -> GeneratedPrompt {
    GeneratedPrompt {
        positive: join_pair(&base.positive, &set.positive),
        negative: join_pair(&base.negative, &set.negative),
    }
}

// ---------------------------------------------------------------------------
// Convenience wrappers
// ---------------------------------------------------------------------------

/// Portrait shot with the default portrait framing text.
pub fn build_portrait_prompt(
    appearance: Option<&CharacterAppearance>,
) -> Result<GeneratedPrompt, CoreError> {
    build_regional_prompt(appearance, ShotType::Portrait, Some(PORTRAIT_FRAMING), None)
}

/// Full-body shot with the default standing framing text.
pub fn build_full_body_prompt(
    appearance: Option<&CharacterAppearance>,
) -> Result<GeneratedPrompt, CoreError> {
    build_regional_prompt(appearance, ShotType::FullBody, Some(FULL_BODY_FRAMING), None)
}

/// Unfiltered build with caller action/setting text folded into the
/// scene prompt.
pub fn build_scene_prompt(
    appearance: Option<&CharacterAppearance>,
    action: Option<&str>,
    setting: Option<&str>,
) -> Result<GeneratedPrompt, CoreError> {
    let scene = join_pair(action.unwrap_or(""), setting.unwrap_or(""));
    let scene = (!scene.is_empty()).then_some(scene.as_str());
    build_from_appearance(appearance, scene, None)
}

// ---------------------------------------------------------------------------
// Fragment collection
// ---------------------------------------------------------------------------

fn require_appearance(
    appearance: Option<&CharacterAppearance>,
) -> Result<&CharacterAppearance, CoreError> {
    appearance.ok_or_else(|| CoreError::InvalidInput("appearance is required".to_string()))
}

/// Collect ordered positive and negative fragments for an appearance.
///
/// `regions` of `None` disables region filtering. Quality tags, user tag
/// lists, and the extra scene text are never filtered.
fn collect_fragments(
    appearance: &CharacterAppearance,
    regions: Option<&[Region]>,
    extra_positive: Option<&str>,
    extra_negative: Option<&str>,
) -> (Vec<String>, Vec<String>) {
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for field in FIELD_ORDER {
        let Some(option) = resolve_option(*field, appearance.selected(*field)) else {
            continue;
        };
        if let Some(included) = regions {
            if !included.contains(&option.region) {
                continue;
            }
        }
        push_fragment(&mut positive, option.positive);
        push_fragment(&mut negative, option.negative);
    }

    for tag in &appearance.quality_tags {
        push_fragment(&mut positive, tag);
    }
    push_fragment(&mut positive, &appearance.additional_tags);

    for tag in &appearance.negative_tags {
        push_fragment(&mut negative, tag);
    }
    push_fragment(&mut negative, &appearance.additional_negative_tags);

    push_fragment(&mut positive, extra_positive.unwrap_or(""));
    push_fragment(&mut negative, extra_negative.unwrap_or(""));

    (positive, negative)
}

/// Join collected fragments, substituting the default negative tags when
/// the negative side is empty.
fn finish(positive: Vec<String>, negative: Vec<String>) -> GeneratedPrompt {
    let negative = if negative.is_empty() {
        DEFAULT_NEGATIVE_TAGS.join(", ")
    } else {
        negative.join(", ")
    };
    GeneratedPrompt {
        positive: positive.join(", "),
        negative,
    }
}

fn push_fragment(fragments: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        fragments.push(trimmed.to_string());
    }
}

/// Comma-join two parts, dropping whichever is empty.
fn join_pair(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => String::new(),
        (false, true) => left.to_string(),
        (true, false) => right.to_string(),
        (false, false) => format!("{left}, {right}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::REGIONS_ALL;
    use assert_matches::assert_matches;

    fn sample_appearance() -> CharacterAppearance {
        CharacterAppearance {
            gender: "female".to_string(),
            hair_color: "blonde".to_string(),
            quality_tags: vec!["masterpiece".to_string()],
            ..Default::default()
        }
    }

    // -- build_from_appearance ----------------------------------------------

    #[test]
    fn missing_appearance_is_invalid_input() {
        let err = build_from_appearance(None, None, None).unwrap_err();
        assert_matches!(err, CoreError::InvalidInput(_));
    }

    #[test]
    fn unset_fields_contribute_nothing() {
        let appearance = CharacterAppearance::default();
        let prompt = build_from_appearance(Some(&appearance), None, None).unwrap();
        assert_eq!(prompt.positive, "");
        assert_eq!(prompt.negative, DEFAULT_NEGATIVE_TAGS.join(", "));
    }

    #[test]
    fn catalog_tags_appear_in_field_order() {
        let appearance = CharacterAppearance {
            hair_color: "blonde".to_string(),
            gender: "female".to_string(),
            eye_color: "green".to_string(),
            ..Default::default()
        };
        let prompt = build_from_appearance(Some(&appearance), None, None).unwrap();
        assert_eq!(
            prompt.positive,
            "1girl, female, blonde hair, green eyes"
        );
    }

    #[test]
    fn scene_text_comes_last() {
        let appearance = sample_appearance();
        let prompt =
            build_from_appearance(Some(&appearance), Some("sitting in a cafe"), None).unwrap();
        assert_eq!(
            prompt.positive,
            "1girl, female, blonde hair, masterpiece, sitting in a cafe"
        );
    }

    #[test]
    fn option_negatives_and_user_negatives_collect_in_order() {
        let appearance = CharacterAppearance {
            art_style: "anime".to_string(),
            negative_tags: vec!["extra fingers".to_string()],
            additional_negative_tags: "text".to_string(),
            ..Default::default()
        };
        let prompt =
            build_from_appearance(Some(&appearance), None, Some("out of frame")).unwrap();
        assert_eq!(
            prompt.negative,
            "photorealistic, 3d render, extra fingers, text, out of frame"
        );
    }

    #[test]
    fn empty_fragments_never_produce_stray_separators() {
        let appearance = CharacterAppearance {
            gender: "female".to_string(),
            additional_tags: "   ".to_string(),
            quality_tags: vec!["".to_string(), "masterpiece".to_string()],
            ..Default::default()
        };
        let prompt = build_from_appearance(Some(&appearance), Some(""), None).unwrap();
        assert_eq!(prompt.positive, "1girl, female, masterpiece");
    }

    #[test]
    fn unknown_selected_value_contributes_nothing() {
        let appearance = CharacterAppearance {
            hair_color: "chartreuse".to_string(),
            ..Default::default()
        };
        let prompt = build_from_appearance(Some(&appearance), None, None).unwrap();
        assert_eq!(prompt.positive, "");
    }

    // -- build_regional_prompt ----------------------------------------------

    #[test]
    fn portrait_drops_body_tags() {
        let appearance = CharacterAppearance {
            hair_color: "blonde".to_string(),
            breast_size: "large".to_string(),
            leg_type: "slender".to_string(),
            ..Default::default()
        };
        let prompt =
            build_regional_prompt(Some(&appearance), ShotType::Portrait, None, None).unwrap();
        assert_eq!(prompt.positive, "blonde hair");
    }

    #[test]
    fn quality_and_user_tags_survive_region_filtering() {
        let appearance = CharacterAppearance {
            leg_type: "slender".to_string(),
            quality_tags: vec!["masterpiece".to_string()],
            additional_tags: "soft lighting".to_string(),
            ..Default::default()
        };
        let prompt =
            build_regional_prompt(Some(&appearance), ShotType::Portrait, None, None).unwrap();
        assert_eq!(prompt.positive, "masterpiece, soft lighting");
    }

    #[test]
    fn upper_body_includes_head_and_torso() {
        let appearance = CharacterAppearance {
            hair_color: "blonde".to_string(),
            breast_size: "small".to_string(),
            leg_type: "slender".to_string(),
            ..Default::default()
        };
        let prompt =
            build_regional_prompt(Some(&appearance), ShotType::UpperBody, None, None).unwrap();
        assert_eq!(prompt.positive, "blonde hair, small breasts");
    }

    // -- build_regional_prompt_with_regions ---------------------------------

    #[test]
    fn empty_regions_is_scenery_mode() {
        let appearance = sample_appearance();
        let prompt =
            build_regional_prompt_with_regions(Some(&appearance), &[], None, None).unwrap();
        assert_eq!(prompt, GeneratedPrompt::default());
    }

    #[test]
    fn empty_regions_ignores_missing_appearance() {
        let prompt = build_regional_prompt_with_regions(None, &[], None, None).unwrap();
        assert_eq!(prompt, GeneratedPrompt::default());
    }

    #[test]
    fn worked_example_head_and_full_body() {
        let appearance = sample_appearance();
        let prompt = build_regional_prompt_with_regions(
            Some(&appearance),
            &[Region::Head, Region::FullBody],
            None,
            None,
        )
        .unwrap();

        let gender_at = prompt.positive.find("1girl, female").unwrap();
        let hair_at = prompt.positive.find("blonde hair").unwrap();
        let quality_at = prompt.positive.find("masterpiece").unwrap();
        assert!(gender_at < hair_at && hair_at < quality_at);

        // No negative fragment was produced, so the default set is
        // substituted before the framing hints are appended.
        assert_eq!(
            prompt.negative,
            format!(
                "{}, head_out_of_frame, upper_body, lower_body",
                DEFAULT_NEGATIVE_TAGS.join(", ")
            )
        );
    }

    #[test]
    fn full_body_alone_excludes_head_hint() {
        let appearance = sample_appearance();
        let prompt = build_regional_prompt_with_regions(
            Some(&appearance),
            &[Region::FullBody],
            None,
            None,
        )
        .unwrap();
        assert!(!prompt.negative.contains("head_out_of_frame"));
        assert!(prompt.negative.ends_with("upper_body, lower_body"));
    }

    #[test]
    fn all_regions_synthesize_no_exclusion_hints() {
        let appearance = sample_appearance();
        let prompt =
            build_regional_prompt_with_regions(Some(&appearance), REGIONS_ALL, None, None)
                .unwrap();
        assert!(prompt.negative.contains("head_out_of_frame"));
        assert!(!prompt.negative.contains("upper_body"));
        assert!(!prompt.negative.contains("lower_body"));
    }

    #[test]
    fn head_only_synthesizes_nothing() {
        let appearance = sample_appearance();
        let prompt =
            build_regional_prompt_with_regions(Some(&appearance), &[Region::Head], None, None)
                .unwrap();
        assert_eq!(prompt.negative, DEFAULT_NEGATIVE_TAGS.join(", "));
    }

    #[test]
    fn region_filtering_is_monotonic() {
        let appearance = CharacterAppearance {
            gender: "female".to_string(),
            hair_color: "blonde".to_string(),
            breast_size: "medium".to_string(),
            leg_type: "toned".to_string(),
            quality_tags: vec!["masterpiece".to_string()],
            ..Default::default()
        };

        let head_only =
            build_regional_prompt_with_regions(Some(&appearance), &[Region::Head], None, None)
                .unwrap();
        let all =
            build_regional_prompt_with_regions(Some(&appearance), REGIONS_ALL, None, None)
                .unwrap();

        let all_fragments: Vec<&str> = all.positive.split(", ").collect();
        for fragment in head_only.positive.split(", ") {
            assert!(
                all_fragments.contains(&fragment),
                "'{fragment}' missing from full-region build"
            );
        }
    }

    // -- combine_with_prompt_set --------------------------------------------

    #[test]
    fn combine_joins_non_empty_sides() {
        let base = GeneratedPrompt {
            positive: "a".to_string(),
            negative: "b".to_string(),
        };
        let set = PromptSet {
            id: "set".to_string(),
            name: "Set".to_string(),
            positive: "c".to_string(),
            negative: String::new(),
            description: None,
        };
        let combined = combine_with_prompt_set(&base, &set);
        assert_eq!(combined.positive, "a, c");
        assert_eq!(combined.negative, "b");
    }

    #[test]
    fn combine_with_empty_base_takes_set_sides() {
        let base = GeneratedPrompt::default();
        let set = PromptSet {
            id: "set".to_string(),
            name: "Set".to_string(),
            positive: "cinematic".to_string(),
            negative: "flat lighting".to_string(),
            description: None,
        };
        let combined = combine_with_prompt_set(&base, &set);
        assert_eq!(combined.positive, "cinematic");
        assert_eq!(combined.negative, "flat lighting");
    }

    // -- Convenience wrappers -----------------------------------------------

    #[test]
    fn portrait_wrapper_appends_framing_text() {
        let appearance = sample_appearance();
        let prompt = build_portrait_prompt(Some(&appearance)).unwrap();
        assert!(prompt.positive.ends_with(PORTRAIT_FRAMING));
        // Gender is a full-body tag, so the portrait filter drops it.
        assert!(!prompt.positive.contains("1girl"));
        assert!(prompt.positive.contains("blonde hair"));
    }

    #[test]
    fn full_body_wrapper_appends_framing_text() {
        let appearance = sample_appearance();
        let prompt = build_full_body_prompt(Some(&appearance)).unwrap();
        assert!(prompt.positive.starts_with("1girl, female"));
        assert!(prompt.positive.ends_with(FULL_BODY_FRAMING));
    }

    #[test]
    fn scene_wrapper_folds_action_and_setting() {
        let appearance = sample_appearance();
        let prompt = build_scene_prompt(
            Some(&appearance),
            Some("reading a book"),
            Some("cozy library"),
        )
        .unwrap();
        assert!(prompt
            .positive
            .ends_with("masterpiece, reading a book, cozy library"));
    }

    #[test]
    fn scene_wrapper_with_no_text_matches_plain_build() {
        let appearance = sample_appearance();
        let scene = build_scene_prompt(Some(&appearance), None, None).unwrap();
        let plain = build_from_appearance(Some(&appearance), None, None).unwrap();
        assert_eq!(scene, plain);
    }
}
