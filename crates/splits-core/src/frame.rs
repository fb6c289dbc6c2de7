//! Frames and games.
//!
//! A `Frame` is an immutable run of 1-3 rolls; a `Game` is the ordered list of
//! frames produced by the parser. The last frame of a game is always scored as
//! the final frame, even when a malformed input produced fewer than ten.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::config::rules::FRAMES_PER_GAME;
use crate::error::{Error, Result};
use crate::roll::Roll;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    #[strum(serialize = "STRIKE")]
    Strike,
    #[strum(serialize = "SPARE")]
    Spare,
    #[strum(serialize = "OPEN")]
    Open,
}

impl FrameKind {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    rolls: Vec<Roll>,
}

impl Frame {
    pub fn new(rolls: Vec<Roll>) -> Self {
        Self { rolls }
    }

    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    pub fn roll(&self, index: usize) -> Option<Roll> {
        self.rolls.get(index).copied()
    }

    pub fn first(&self) -> Option<Roll> {
        self.roll(0)
    }

    /// A lone strike. A final frame opening with a strike does not count.
    pub fn is_strike(&self) -> bool {
        self.rolls == [Roll::Strike]
    }

    pub fn is_spare(&self) -> bool {
        self.roll(1).is_some_and(|roll| roll.is_spare())
    }

    /// Classification by the opening rolls, valid for regular and final frames.
    pub fn kind(&self) -> FrameKind {
        if self.first().is_some_and(|roll| roll.is_strike()) {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    /// The frame as written on a score sheet, e.g. `X`, `5/`, `-7`.
    pub fn marks(&self) -> String {
        self.rolls.iter().map(Roll::symbol).collect()
    }

    /// Roll count a complete final frame of this shape holds.
    pub fn expected_final_rolls(&self) -> usize {
        match self.kind() {
            FrameKind::Strike | FrameKind::Spare => 3,
            FrameKind::Open => 2,
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marks())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Game {
    frames: Vec<Frame>,
}

impl Game {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn final_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Frames scored with the regular rules, followed by the final frame.
    pub fn split_final(&self) -> Option<(&Frame, &[Frame])> {
        self.frames.split_last()
    }

    pub fn roll_count(&self) -> usize {
        self.frames.iter().map(Frame::len).sum()
    }

    /// Check the ten-frame shape: exactly ten frames, regular frames closed
    /// by a strike or two rolls, and a final frame sized by its opening.
    pub fn validate(&self) -> Result<()> {
        if self.frames.len() != FRAMES_PER_GAME {
            return Err(Error::FrameCount {
                expected: FRAMES_PER_GAME,
                actual: self.frames.len(),
            });
        }

        let Some((last, regular)) = self.split_final() else {
            return Err(Error::EmptyInput);
        };

        for (index, frame) in regular.iter().enumerate() {
            let closed = frame.is_strike() || (frame.len() == 2 && !frame.rolls[0].is_strike());
            if !closed {
                return Err(Error::MalformedFrame { frame: index + 1 });
            }
        }

        let expected = last.expected_final_rolls();
        if last.len() != expected {
            return Err(Error::FinalFrameRolls {
                expected,
                actual: last.len(),
            });
        }

        Ok(())
    }
}
