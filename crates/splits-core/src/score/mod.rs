//! Game scoring.
//!
//! This module contains:
//! - `Scorer` - folds a `Game` into a `ScoreCard` under a `ScoringConfig`
//! - `FrameScore`, `ScoreCard` - per-frame breakdown
//! - `compute_score`, `score_game` - one-call entry points

mod card;

pub use card::*;

use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::config::rules::PINS;
use crate::error::Result;
use crate::frame::{Frame, FrameKind, Game};
use crate::parser::parse_frames;
use crate::roll::Roll;

/// Total score of a game under the default (strict) configuration.
pub fn compute_score(game: &Game) -> Result<u32> {
    Scorer::default().score(game)
}

/// Parse and score a roll string in one step.
pub fn score_game(input: &str, config: &ScoringConfig) -> Result<ScoreCard> {
    let game = parse_frames(input)?;
    Scorer::new(*config).score_card(&game)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, game: &Game) -> Result<u32> {
        self.score_card(game).map(|card| card.total)
    }

    /// Strict scoring validates the game first, so every roll the fold reads
    /// is present. Lenient scoring counts absent rolls as zero.
    pub fn score_card(&self, game: &Game) -> Result<ScoreCard> {
        if self.config.policy.is_strict() {
            game.validate()?;
        }

        let mut card = ScoreCard::new();
        let Some((last, regular)) = game.split_final() else {
            return Ok(card);
        };

        let frames = game.frames();
        for (index, frame) in regular.iter().enumerate() {
            let number = index + 1;
            let following = &frames[number..];
            let score = self.regular_frame_score(frame, following, number);
            card.push(frame.kind(), frame.marks(), score);
        }

        let score = self.final_frame_score(last, game.len());
        card.push(last.kind(), last.marks(), score);

        debug!("Scored {} frames, total {}", card.len(), card.total);
        Ok(card)
    }

    fn regular_frame_score(&self, frame: &Frame, following: &[Frame], number: usize) -> u32 {
        if frame.is_strike() {
            PINS + self.strike_bonus(following, number)
        } else if frame.is_spare() {
            let next = following.first().and_then(Frame::first);
            PINS + self.roll_value(next, number)
        } else {
            self.roll_value(frame.roll(0), number) + self.roll_value(frame.roll(1), number)
        }
    }

    /// Bonus for a strike in frames 1-9: the next two rolls, read across a
    /// following strike into the frame after it.
    fn strike_bonus(&self, following: &[Frame], number: usize) -> u32 {
        let Some(next) = following.first() else {
            return self.missing_roll(number) * 2;
        };

        if next.is_strike() {
            let after = following.get(1).and_then(Frame::first);
            PINS + self.roll_value(after, number)
        } else {
            self.two_roll_bonus(next.roll(0), next.roll(1), number)
        }
    }

    /// Bonus from a pair of rolls; a spare in second place completes the rack.
    fn two_roll_bonus(&self, first: Option<Roll>, second: Option<Roll>, number: usize) -> u32 {
        if second.is_some_and(|roll| roll.is_spare()) {
            return PINS;
        }
        self.roll_value(first, number) + self.roll_value(second, number)
    }

    fn final_frame_score(&self, frame: &Frame, number: usize) -> u32 {
        let expected = frame.expected_final_rolls();
        if frame.len() > expected {
            warn!(
                "Final frame {} has {} rolls, ignoring the last {}",
                frame,
                frame.len(),
                frame.len() - expected
            );
        }

        match frame.kind() {
            FrameKind::Strike => PINS + self.two_roll_bonus(frame.roll(1), frame.roll(2), number),
            FrameKind::Spare => PINS + self.roll_value(frame.roll(2), number),
            FrameKind::Open => {
                self.roll_value(frame.roll(0), number) + self.roll_value(frame.roll(1), number)
            }
        }
    }

    fn roll_value(&self, roll: Option<Roll>, number: usize) -> u32 {
        match roll {
            Some(roll) => roll.value(),
            None => self.missing_roll(number),
        }
    }

    /// Only reachable for lenient scoring; strict games are validated whole.
    fn missing_roll(&self, number: usize) -> u32 {
        warn!("Frame {} is missing a roll, counting it as 0", number);
        0
    }
}
