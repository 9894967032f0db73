//! Body regions and shot type framing presets (PRD-31).
//!
//! Every attribute option carries a [`Region`] so that partial-shot
//! generations can exclude tags for body parts outside the frame
//! (prompt bleeding suppression).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// Body-area classification attached to every attribute option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Head,
    UpperBody,
    LowerBody,
    FullBody,
}

impl Region {
    /// Return the string representation of a region.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::UpperBody => "upper_body",
            Self::LowerBody => "lower_body",
            Self::FullBody => "full_body",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every region, in declaration order.
pub const REGIONS_ALL: &[Region] = &[
    Region::Head,
    Region::UpperBody,
    Region::LowerBody,
    Region::FullBody,
];

// ---------------------------------------------------------------------------
// Shot types
// ---------------------------------------------------------------------------

pub const SHOT_PORTRAIT: &str = "portrait";
pub const SHOT_UPPER_BODY: &str = "upper_body";
pub const SHOT_FULL_BODY: &str = "full_body";

pub const VALID_SHOT_TYPES: &[&str] = &[SHOT_PORTRAIT, SHOT_UPPER_BODY, SHOT_FULL_BODY];

/// Named framing preset mapping to a fixed region set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    Portrait,
    UpperBody,
    FullBody,
}

impl ShotType {
    /// Parse a shot type name. Returns `None` for unknown names; callers
    /// that need the lenient fallback use [`regions_for_shot`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            SHOT_PORTRAIT => Some(Self::Portrait),
            SHOT_UPPER_BODY => Some(Self::UpperBody),
            SHOT_FULL_BODY => Some(Self::FullBody),
            _ => None,
        }
    }

    /// Return the string representation of a shot type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => SHOT_PORTRAIT,
            Self::UpperBody => SHOT_UPPER_BODY,
            Self::FullBody => SHOT_FULL_BODY,
        }
    }

    /// The regions included in this framing.
    pub fn regions(self) -> &'static [Region] {
        match self {
            Self::Portrait => &[Region::Head],
            Self::UpperBody => &[Region::Head, Region::UpperBody],
            Self::FullBody => REGIONS_ALL,
        }
    }
}

impl std::fmt::Display for ShotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a shot type name to its region set.
///
/// Unknown names fall back to the full region set rather than erroring,
/// so a stale or misspelled preset still produces a complete character.
pub fn regions_for_shot(shot_type: &str) -> &'static [Region] {
    match ShotType::parse(shot_type) {
        Some(shot) => shot.regions(),
        None => REGIONS_ALL,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
