//! Character appearance records (PRD-31).
//!
//! A [`CharacterAppearance`] holds the selected catalog value per
//! attribute field plus the free-form tag lists a user can attach. It is
//! owned and mutated by the character configuration layer; the prompt
//! builder only reads it.

use serde::{Deserialize, Serialize};

use crate::attribute_catalog::AttributeField;

/// Per-character appearance selections and free-form tag inputs.
///
/// Selected values are keys into the attribute catalog; the empty string
/// means unset. All fields default so partial documents deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterAppearance {
    pub gender: String,
    pub age_group: String,
    pub hair_style: String,
    pub hair_color: String,
    pub eye_color: String,
    pub body_type: String,
    pub skin_tone: String,
    pub art_style: String,
    pub face_shape: String,
    pub nose_type: String,
    pub lip_type: String,
    pub eyebrow_style: String,
    pub eye_shape: String,
    pub cheekbones: String,
    pub jawline: String,
    pub forehead_size: String,
    pub chin_type: String,
    pub shoulder_width: String,
    pub arm_type: String,
    pub neck_length: String,
    pub hip_width: String,
    pub leg_type: String,
    pub butt_size: String,
    pub glasses: String,
    pub earrings: String,
    pub freckles: String,
    pub facial_hair: String,
    pub breast_size: String,

    /// Quality boosters, always shot-independent.
    pub quality_tags: Vec<String>,
    /// Free-text positive tags appended after the catalog tags.
    pub additional_tags: String,
    /// User-managed negative tags.
    pub negative_tags: Vec<String>,
    /// Free-text negative tags appended after `negative_tags`.
    pub additional_negative_tags: String,
}

impl CharacterAppearance {
    /// The selected catalog value for a field (empty when unset).
    pub fn selected(&self, field: AttributeField) -> &str {
        match field {
            AttributeField::Gender => &self.gender,
            AttributeField::AgeGroup => &self.age_group,
            AttributeField::HairStyle => &self.hair_style,
            AttributeField::HairColor => &self.hair_color,
            AttributeField::EyeColor => &self.eye_color,
            AttributeField::BodyType => &self.body_type,
            AttributeField::SkinTone => &self.skin_tone,
            AttributeField::ArtStyle => &self.art_style,
            AttributeField::FaceShape => &self.face_shape,
            AttributeField::NoseType => &self.nose_type,
            AttributeField::LipType => &self.lip_type,
            AttributeField::EyebrowStyle => &self.eyebrow_style,
            AttributeField::EyeShape => &self.eye_shape,
            AttributeField::Cheekbones => &self.cheekbones,
            AttributeField::Jawline => &self.jawline,
            AttributeField::ForeheadSize => &self.forehead_size,
            AttributeField::ChinType => &self.chin_type,
            AttributeField::ShoulderWidth => &self.shoulder_width,
            AttributeField::ArmType => &self.arm_type,
            AttributeField::NeckLength => &self.neck_length,
            AttributeField::HipWidth => &self.hip_width,
            AttributeField::LegType => &self.leg_type,
            AttributeField::ButtSize => &self.butt_size,
            AttributeField::Glasses => &self.glasses,
            AttributeField::Earrings => &self.earrings,
            AttributeField::Freckles => &self.freckles,
            AttributeField::FacialHair => &self.facial_hair,
            AttributeField::BreastSize => &self.breast_size,
        }
    }
}
