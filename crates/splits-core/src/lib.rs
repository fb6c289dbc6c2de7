//! # splits-core
//!
//! Core library for the splits bowling score calculator.
//!
//! This crate provides:
//! - Roll decoding from the one-character-per-roll notation (`X`, `/`, `-`, `0`-`9`)
//! - Frame parsing into a ten-frame game
//! - Scoring with strike/spare look-ahead and the tenth-frame bonus rolls
//! - Per-frame score cards and text/JSON export
//!
//! ```
//! use splits_core::{compute_score, parse_frames};
//!
//! let game = parse_frames("XXXXXXXXXXXX").unwrap();
//! assert_eq!(compute_score(&game).unwrap(), 300);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod parser;
pub mod roll;
pub mod score;

// Re-export from config module
pub use config::{BonusPolicy, ScoringConfig};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from export module
pub use export::{
    ExportFormat, export_score_card, format_score_table, format_score_text, generate_score_json,
};

// Re-export from frame module
pub use frame::{Frame, FrameKind, Game};

// Re-export from parser module
pub use parser::{parse_frames, parse_rolls};

// Re-export from roll module
pub use roll::Roll;

// Re-export from score module
pub use score::{FrameScore, ScoreCard, Scorer, compute_score, score_game};
