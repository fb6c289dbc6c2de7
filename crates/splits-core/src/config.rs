//! Scoring configuration and rule constants.
//!
//! This module contains:
//! - `ScoringConfig` - options that change how the scorer treats malformed games
//! - `BonusPolicy` - strict rejection or lenient zero-fill of missing rolls
//! - `rules` - fixed ten-pin constants

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Ten-pin rule constants.
pub mod rules {
    /// Pins standing at the start of a frame.
    pub const PINS: u32 = 10;

    /// Frames in a complete game.
    pub const FRAMES_PER_GAME: usize = 10;

    /// Frames scored with the regular rules (all but the final frame).
    pub const REGULAR_FRAMES: usize = FRAMES_PER_GAME - 1;

    /// Rolls in a perfect game (9 strikes plus three in the final frame).
    pub const MAX_ROLLS: usize = 21;

    /// Score of a perfect game.
    pub const PERFECT_SCORE: u32 = 300;
}

/// How the scorer reacts when a frame needs a roll the game does not contain.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BonusPolicy {
    /// Reject structurally incomplete or oversized games.
    #[default]
    Strict,
    /// Score whatever is present; missing rolls count as zero.
    Lenient,
}

impl BonusPolicy {
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub policy: BonusPolicy,
}

impl ScoringConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: BonusPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for a config using [`BonusPolicy::Lenient`].
    pub fn lenient() -> Self {
        Self::new().with_policy(BonusPolicy::Lenient)
    }
}
