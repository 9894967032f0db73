//! Static appearance attribute catalog (PRD-31).
//!
//! Maps every selectable appearance field to its ordered option list.
//! The catalog is compile-time constant data; the prompt builder resolves
//! a character's selected values against it. Every option list starts
//! with a single empty "None" sentinel so the UI can always render an
//! unset choice, and unset fields contribute no tags.

use serde::{Deserialize, Serialize};

use crate::region::Region;

// ---------------------------------------------------------------------------
// Option type
// ---------------------------------------------------------------------------

/// One selectable choice for an appearance attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeOption {
    /// Machine-readable selection key (matches the stored appearance value).
    pub value: &'static str,
    /// Human-readable display label.
    pub label: &'static str,
    /// Tags appended to the positive prompt when selected.
    pub positive: &'static str,
    /// Tags appended to the negative prompt when selected.
    pub negative: &'static str,
    /// Body region this option describes.
    pub region: Region,
}

const fn opt(
    value: &'static str,
    label: &'static str,
    positive: &'static str,
    negative: &'static str,
    region: Region,
) -> AttributeOption {
    AttributeOption {
        value,
        label,
        positive,
        negative,
        region,
    }
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// The appearance attribute fields, one per selectable dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeField {
    Gender,
    AgeGroup,
    HairStyle,
    HairColor,
    EyeColor,
    BodyType,
    SkinTone,
    ArtStyle,
    FaceShape,
    NoseType,
    LipType,
    EyebrowStyle,
    EyeShape,
    Cheekbones,
    Jawline,
    ForeheadSize,
    ChinType,
    ShoulderWidth,
    ArmType,
    NeckLength,
    HipWidth,
    LegType,
    ButtSize,
    Glasses,
    Earrings,
    Freckles,
    FacialHair,
    BreastSize,
}

/// Fixed resolution order for prompt assembly. Tag output iterates this
/// order, so it must stay stable for deterministic prompts.
pub const FIELD_ORDER: &[AttributeField] = &[
    AttributeField::Gender,
    AttributeField::AgeGroup,
    AttributeField::HairStyle,
    AttributeField::HairColor,
    AttributeField::EyeColor,
    AttributeField::BodyType,
    AttributeField::SkinTone,
    AttributeField::ArtStyle,
    AttributeField::FaceShape,
    AttributeField::NoseType,
    AttributeField::LipType,
    AttributeField::EyebrowStyle,
    AttributeField::EyeShape,
    AttributeField::Cheekbones,
    AttributeField::Jawline,
    AttributeField::ForeheadSize,
    AttributeField::ChinType,
    AttributeField::ShoulderWidth,
    AttributeField::ArmType,
    AttributeField::NeckLength,
    AttributeField::HipWidth,
    AttributeField::LegType,
    AttributeField::ButtSize,
    AttributeField::Glasses,
    AttributeField::Earrings,
    AttributeField::Freckles,
    AttributeField::FacialHair,
    AttributeField::BreastSize,
];

impl AttributeField {
    /// Return the string representation of a field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::AgeGroup => "age_group",
            Self::HairStyle => "hair_style",
            Self::HairColor => "hair_color",
            Self::EyeColor => "eye_color",
            Self::BodyType => "body_type",
            Self::SkinTone => "skin_tone",
            Self::ArtStyle => "art_style",
            Self::FaceShape => "face_shape",
            Self::NoseType => "nose_type",
            Self::LipType => "lip_type",
            Self::EyebrowStyle => "eyebrow_style",
            Self::EyeShape => "eye_shape",
            Self::Cheekbones => "cheekbones",
            Self::Jawline => "jawline",
            Self::ForeheadSize => "forehead_size",
            Self::ChinType => "chin_type",
            Self::ShoulderWidth => "shoulder_width",
            Self::ArmType => "arm_type",
            Self::NeckLength => "neck_length",
            Self::HipWidth => "hip_width",
            Self::LegType => "leg_type",
            Self::ButtSize => "butt_size",
            Self::Glasses => "glasses",
            Self::Earrings => "earrings",
            Self::Freckles => "freckles",
            Self::FacialHair => "facial_hair",
            Self::BreastSize => "breast_size",
        }
    }

    /// The ordered option list for this field.
    pub fn options(self) -> &'static [AttributeOption] {
        match self {
            Self::Gender => GENDER_OPTIONS,
            Self::AgeGroup => AGE_GROUP_OPTIONS,
            Self::HairStyle => HAIR_STYLE_OPTIONS,
            Self::HairColor => HAIR_COLOR_OPTIONS,
            Self::EyeColor => EYE_COLOR_OPTIONS,
            Self::BodyType => BODY_TYPE_OPTIONS,
            Self::SkinTone => SKIN_TONE_OPTIONS,
            Self::ArtStyle => ART_STYLE_OPTIONS,
            Self::FaceShape => FACE_SHAPE_OPTIONS,
            Self::NoseType => NOSE_TYPE_OPTIONS,
            Self::LipType => LIP_TYPE_OPTIONS,
            Self::EyebrowStyle => EYEBROW_STYLE_OPTIONS,
            Self::EyeShape => EYE_SHAPE_OPTIONS,
            Self::Cheekbones => CHEEKBONES_OPTIONS,
            Self::Jawline => JAWLINE_OPTIONS,
            Self::ForeheadSize => FOREHEAD_SIZE_OPTIONS,
            Self::ChinType => CHIN_TYPE_OPTIONS,
            Self::ShoulderWidth => SHOULDER_WIDTH_OPTIONS,
            Self::ArmType => ARM_TYPE_OPTIONS,
            Self::NeckLength => NECK_LENGTH_OPTIONS,
            Self::HipWidth => HIP_WIDTH_OPTIONS,
            Self::LegType => LEG_TYPE_OPTIONS,
            Self::ButtSize => BUTT_SIZE_OPTIONS,
            Self::Glasses => GLASSES_OPTIONS,
            Self::Earrings => EARRINGS_OPTIONS,
            Self::Freckles => FRECKLES_OPTIONS,
            Self::FacialHair => FACIAL_HAIR_OPTIONS,
            Self::BreastSize => BREAST_SIZE_OPTIONS,
        }
    }
}

impl std::fmt::Display for AttributeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the option a selected value refers to.
///
/// The empty string resolves to the field's "None" sentinel; unknown
/// values resolve to `None`. Either way no tags are contributed.
pub fn resolve_option(field: AttributeField, value: &str) -> Option<&'static AttributeOption> {
    field.options().iter().find(|option| option.value == value)
}

// ---------------------------------------------------------------------------
// Option tables
// ---------------------------------------------------------------------------

const GENDER_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::FullBody),
    opt("female", "Female", "1girl, female", "", Region::FullBody),
    opt("male", "Male", "1boy, male", "", Region::FullBody),
    opt(
        "androgynous",
        "Androgynous",
        "androgynous",
        "",
        Region::FullBody,
    ),
];

const AGE_GROUP_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::FullBody),
    opt(
        "young_adult",
        "Young adult",
        "young adult",
        "elderly",
        Region::FullBody,
    ),
    opt("adult", "Adult", "adult", "", Region::FullBody),
    opt(
        "middle_aged",
        "Middle-aged",
        "middle-aged",
        "",
        Region::FullBody,
    ),
    opt("elderly", "Elderly", "elderly, old", "", Region::FullBody),
];

const HAIR_STYLE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("short", "Short", "short hair", "", Region::Head),
    opt("long", "Long", "long hair", "", Region::Head),
    opt("ponytail", "Ponytail", "ponytail", "", Region::Head),
    opt("twintails", "Twintails", "twintails", "", Region::Head),
    opt("bob", "Bob cut", "bob cut", "", Region::Head),
    opt("braid", "Braid", "braided hair", "", Region::Head),
    opt("bun", "Bun", "hair bun", "", Region::Head),
    opt("curly", "Curly", "curly hair", "", Region::Head),
    opt("bald", "Bald", "bald", "long hair", Region::Head),
];

const HAIR_COLOR_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("blonde", "Blonde", "blonde hair", "", Region::Head),
    opt("black", "Black", "black hair", "", Region::Head),
    opt("brown", "Brown", "brown hair", "", Region::Head),
    opt("red", "Red", "red hair", "", Region::Head),
    opt("silver", "Silver", "silver hair", "", Region::Head),
    opt("white", "White", "white hair", "", Region::Head),
    opt("blue", "Blue", "blue hair", "", Region::Head),
    opt("pink", "Pink", "pink hair", "", Region::Head),
];

const EYE_COLOR_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("blue", "Blue", "blue eyes", "", Region::Head),
    opt("green", "Green", "green eyes", "", Region::Head),
    opt("brown", "Brown", "brown eyes", "", Region::Head),
    opt("red", "Red", "red eyes", "", Region::Head),
    opt("amber", "Amber", "amber eyes", "", Region::Head),
    opt("grey", "Grey", "grey eyes", "", Region::Head),
];

const BODY_TYPE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::FullBody),
    opt("slim", "Slim", "slim body, slender", "", Region::FullBody),
    opt(
        "athletic",
        "Athletic",
        "athletic build, toned body",
        "",
        Region::FullBody,
    ),
    opt("curvy", "Curvy", "curvy body", "", Region::FullBody),
    opt("muscular", "Muscular", "muscular", "", Region::FullBody),
    opt("petite", "Petite", "petite", "", Region::FullBody),
    opt("heavyset", "Heavyset", "plump, chubby", "", Region::FullBody),
];

const SKIN_TONE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::FullBody),
    opt("pale", "Pale", "pale skin", "", Region::FullBody),
    opt("fair", "Fair", "fair skin", "", Region::FullBody),
    opt("olive", "Olive", "olive skin", "", Region::FullBody),
    opt("tan", "Tan", "tan skin, tanned", "", Region::FullBody),
    opt("dark", "Dark", "dark skin", "", Region::FullBody),
];

const ART_STYLE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::FullBody),
    opt(
        "anime",
        "Anime",
        "anime style",
        "photorealistic, 3d render",
        Region::FullBody,
    ),
    opt(
        "realistic",
        "Realistic",
        "photorealistic, realistic",
        "anime, cartoon",
        Region::FullBody,
    ),
    opt(
        "semi_realistic",
        "Semi-realistic",
        "semi-realistic",
        "",
        Region::FullBody,
    ),
    opt(
        "watercolor",
        "Watercolor",
        "watercolor style",
        "",
        Region::FullBody,
    ),
    opt(
        "oil_painting",
        "Oil painting",
        "oil painting style",
        "",
        Region::FullBody,
    ),
];

const FACE_SHAPE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("oval", "Oval", "oval face", "", Region::Head),
    opt("round", "Round", "round face", "", Region::Head),
    opt("heart", "Heart", "heart-shaped face", "", Region::Head),
    opt(
        "square",
        "Square",
        "square face, angular face",
        "",
        Region::Head,
    ),
    opt("long", "Long", "long face", "", Region::Head),
];

const NOSE_TYPE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("small", "Small", "small nose", "", Region::Head),
    opt("button", "Button", "button nose", "", Region::Head),
    opt("straight", "Straight", "straight nose", "", Region::Head),
    opt("aquiline", "Aquiline", "aquiline nose", "", Region::Head),
    opt("wide", "Wide", "wide nose", "", Region::Head),
];

const LIP_TYPE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("thin", "Thin", "thin lips", "", Region::Head),
    opt("full", "Full", "full lips, plump lips", "", Region::Head),
    opt("heart", "Heart", "heart-shaped lips", "", Region::Head),
    opt("wide", "Wide", "wide lips", "", Region::Head),
];

const EYEBROW_STYLE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("thin", "Thin", "thin eyebrows", "", Region::Head),
    opt("thick", "Thick", "thick eyebrows", "", Region::Head),
    opt("arched", "Arched", "arched eyebrows", "", Region::Head),
    opt("straight", "Straight", "straight eyebrows", "", Region::Head),
];

const EYE_SHAPE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("almond", "Almond", "almond eyes", "", Region::Head),
    opt("round", "Round", "round eyes", "", Region::Head),
    opt("narrow", "Narrow", "narrow eyes", "", Region::Head),
    opt("upturned", "Upturned", "upturned eyes", "", Region::Head),
    opt("droopy", "Droopy", "droopy eyes", "", Region::Head),
];

const CHEEKBONES_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("high", "High", "high cheekbones", "", Region::Head),
    opt(
        "prominent",
        "Prominent",
        "prominent cheekbones",
        "",
        Region::Head,
    ),
    opt("soft", "Soft", "soft cheekbones", "", Region::Head),
];

const JAWLINE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt(
        "sharp",
        "Sharp",
        "sharp jawline, defined jawline",
        "",
        Region::Head,
    ),
    opt("soft", "Soft", "soft jawline", "", Region::Head),
    opt("square", "Square", "square jaw", "", Region::Head),
];

const FOREHEAD_SIZE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("small", "Small", "small forehead", "", Region::Head),
    opt(
        "large",
        "Large",
        "large forehead, prominent forehead",
        "",
        Region::Head,
    ),
];

const CHIN_TYPE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("pointed", "Pointed", "pointed chin", "", Region::Head),
    opt("round", "Round", "round chin", "", Region::Head),
    opt("cleft", "Cleft", "cleft chin", "", Region::Head),
    opt("strong", "Strong", "strong chin", "", Region::Head),
];

const SHOULDER_WIDTH_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::UpperBody),
    opt("narrow", "Narrow", "narrow shoulders", "", Region::UpperBody),
    opt(
        "broad",
        "Broad",
        "broad shoulders, wide shoulders",
        "",
        Region::UpperBody,
    ),
];

const ARM_TYPE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::UpperBody),
    opt(
        "slender",
        "Slender",
        "slender arms, thin arms",
        "",
        Region::UpperBody,
    ),
    opt("toned", "Toned", "toned arms", "", Region::UpperBody),
    opt("muscular", "Muscular", "muscular arms", "", Region::UpperBody),
];

const NECK_LENGTH_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::UpperBody),
    opt("short", "Short", "short neck", "", Region::UpperBody),
    opt(
        "long",
        "Long",
        "long neck, elegant neck",
        "",
        Region::UpperBody,
    ),
];

const HIP_WIDTH_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::LowerBody),
    opt(
        "narrow",
        "Narrow",
        "narrow hips, slim hips",
        "",
        Region::LowerBody,
    ),
    opt(
        "wide",
        "Wide",
        "wide hips, curvy hips",
        "",
        Region::LowerBody,
    ),
];

const LEG_TYPE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::LowerBody),
    opt(
        "slender",
        "Slender",
        "slender legs, long legs",
        "",
        Region::LowerBody,
    ),
    opt("toned", "Toned", "toned legs", "", Region::LowerBody),
    opt("muscular", "Muscular", "muscular legs", "", Region::LowerBody),
    opt("thick", "Thick", "thick thighs", "", Region::LowerBody),
];

const BUTT_SIZE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::LowerBody),
    opt("small", "Small", "small butt", "", Region::LowerBody),
    opt("round", "Round", "round butt", "", Region::LowerBody),
    opt("large", "Large", "large butt", "", Region::LowerBody),
];

const GLASSES_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("round", "Round", "round glasses", "", Region::Head),
    opt("square", "Square", "square glasses", "", Region::Head),
    opt("rimless", "Rimless", "rimless glasses", "", Region::Head),
    opt("sunglasses", "Sunglasses", "sunglasses", "", Region::Head),
];

const EARRINGS_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("stud", "Stud", "stud earrings", "", Region::Head),
    opt("hoop", "Hoop", "hoop earrings", "", Region::Head),
    opt("dangle", "Dangle", "dangle earrings", "", Region::Head),
];

const FRECKLES_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt("light", "Light", "light freckles", "", Region::Head),
    opt(
        "heavy",
        "Heavy",
        "freckles, freckled face",
        "",
        Region::Head,
    ),
];

const FACIAL_HAIR_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::Head),
    opt(
        "clean_shaven",
        "Clean-shaven",
        "clean-shaven",
        "beard, mustache, stubble",
        Region::Head,
    ),
    opt("stubble", "Stubble", "stubble", "", Region::Head),
    opt("beard", "Beard", "beard, full beard", "", Region::Head),
    opt("mustache", "Mustache", "mustache", "", Region::Head),
    opt("goatee", "Goatee", "goatee", "", Region::Head),
];

const BREAST_SIZE_OPTIONS: &[AttributeOption] = &[
    opt("", "None", "", "", Region::UpperBody),
    opt(
        "flat",
        "Flat",
        "flat chest",
        "large breasts",
        Region::UpperBody,
    ),
    opt("small", "Small", "small breasts", "", Region::UpperBody),
    opt("medium", "Medium", "medium breasts", "", Region::UpperBody),
    opt("large", "Large", "large breasts", "", Region::UpperBody),
    opt("huge", "Huge", "huge breasts", "", Region::UpperBody),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Catalog invariants -------------------------------------------------

    #[test]
    fn every_field_appears_once_in_field_order() {
        for field in FIELD_ORDER {
            assert_eq!(
                FIELD_ORDER.iter().filter(|f| *f == field).count(),
                1,
                "{field} duplicated in FIELD_ORDER"
            );
        }
        assert_eq!(FIELD_ORDER.len(), 28);
    }

    #[test]
    fn every_option_list_has_exactly_one_empty_sentinel() {
        for field in FIELD_ORDER {
            let sentinels: Vec<_> = field
                .options()
                .iter()
                .filter(|o| o.value.is_empty())
                .collect();
            assert_eq!(sentinels.len(), 1, "{field} sentinel count");
            assert!(sentinels[0].positive.is_empty(), "{field} sentinel positive");
            assert!(sentinels[0].negative.is_empty(), "{field} sentinel negative");
        }
    }

    #[test]
    fn option_values_are_unique_per_field() {
        for field in FIELD_ORDER {
            let options = field.options();
            for option in options {
                assert_eq!(
                    options.iter().filter(|o| o.value == option.value).count(),
                    1,
                    "{field} option '{}' duplicated",
                    option.value
                );
            }
        }
    }

    #[test]
    fn non_sentinel_options_carry_positive_tags() {
        for field in FIELD_ORDER {
            for option in field.options().iter().filter(|o| !o.value.is_empty()) {
                assert!(
                    !option.positive.is_empty(),
                    "{field} option '{}' has no positive tags",
                    option.value
                );
            }
        }
    }

    // -- resolve_option -----------------------------------------------------

    #[test]
    fn resolves_known_value() {
        let option = resolve_option(AttributeField::HairColor, "blonde").unwrap();
        assert_eq!(option.positive, "blonde hair");
        assert_eq!(option.region, Region::Head);
    }

    #[test]
    fn empty_value_resolves_to_sentinel() {
        let option = resolve_option(AttributeField::HairColor, "").unwrap();
        assert!(option.positive.is_empty());
        assert!(option.negative.is_empty());
    }

    #[test]
    fn unknown_value_resolves_to_none() {
        assert!(resolve_option(AttributeField::HairColor, "chartreuse").is_none());
    }

    #[test]
    fn field_as_str_matches_serde_names() {
        let json = serde_json::to_string(&AttributeField::HairColor).unwrap();
        assert_eq!(json, "\"hair_color\"");
        assert_eq!(AttributeField::HairColor.as_str(), "hair_color");
    }
}
