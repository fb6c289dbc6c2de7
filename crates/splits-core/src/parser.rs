//! Roll string parsing.
//!
//! Parsing runs in two phases: up to nine regular frames, each closed by a
//! strike or a second roll, then every remaining roll as the final frame.

use tracing::debug;

use crate::config::rules::{FRAMES_PER_GAME, REGULAR_FRAMES};
use crate::error::{Error, Result};
use crate::frame::{Frame, Game};
use crate::roll::Roll;

/// Decode a roll string into rolls, rejecting unknown symbols.
pub fn parse_rolls(input: &str) -> Result<Vec<Roll>> {
    input
        .trim()
        .chars()
        .enumerate()
        .map(|(position, symbol)| Roll::from_symbol(symbol, position))
        .collect()
}

/// Parse a roll string into frames.
///
/// Does not check the roll count; a short or long string yields fewer than
/// ten frames or an oversized final frame. See [`Game::validate`].
pub fn parse_frames(input: &str) -> Result<Game> {
    let rolls = parse_rolls(input)?;
    if rolls.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut frames = Vec::with_capacity(FRAMES_PER_GAME);
    let mut cursor = 0;

    while frames.len() < REGULAR_FRAMES {
        let width = match &rolls[cursor..] {
            [Roll::Strike, ..] => 1,
            [_, _, ..] => 2,
            _ => break,
        };
        frames.push(Frame::new(rolls[cursor..cursor + width].to_vec()));
        cursor += width;
    }

    // Final frame takes everything left, strikes included. Input ending on a
    // frame boundary gets no empty final frame; its last frame scores as final.
    if cursor < rolls.len() {
        frames.push(Frame::new(rolls[cursor..].to_vec()));
    }

    debug!(
        "Parsed {} rolls into {} frames",
        rolls.len(),
        frames.len()
    );

    Ok(Game::new(frames))
}
