//! Export formats for score cards.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Result;
use crate::frame::FrameKind;
use crate::score::{FrameScore, ScoreCard};

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
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

/// Render a score card in the given format.
///
/// `breakdown` adds the per-frame table to text output; JSON always carries
/// every frame.
pub fn export_score_card(card: &ScoreCard, format: ExportFormat, breakdown: bool) -> Result<String> {
    match format {
        ExportFormat::Text if breakdown => Ok(format!(
            "{}{}",
            format_score_table(card),
            format_score_text(card)
        )),
        ExportFormat::Text => Ok(format_score_text(card)),
        ExportFormat::Json => generate_score_json(card),
    }
}

pub fn format_score_text(card: &ScoreCard) -> String {
    format!("Final Score: {}", card.total)
}

/// Format the per-frame breakdown as a colored table
pub fn format_score_table(card: &ScoreCard) -> String {
    let mut output = String::new();

    let border: String = "━".repeat(38);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  {:>5}  {:<5}  {:<6}  {:>5}  {:>5}", "FRAME", "MARKS", "KIND", "SCORE", "TOTAL");
    let _ = writeln!(output, "{}", border_dim);
    for frame in &card.frames {
        let _ = writeln!(output, "{}", format_frame_row(frame));
    }
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  STRIKES: {}  SPARES: {}",
        card.strikes(),
        card.spares()
    );

    output
}

fn format_frame_row(frame: &FrameScore) -> String {
    let marks = format!("{:<5}", frame.marks);
    let kind = format!("{:<6}", frame.kind.short_name());
    let (marks, kind) = match frame.kind {
        FrameKind::Strike => (marks.yellow().bold().to_string(), kind.yellow().to_string()),
        FrameKind::Spare => (marks.cyan().bold().to_string(), kind.cyan().to_string()),
        FrameKind::Open => (marks, kind.dimmed().to_string()),
    };

    format!(
        "  {:>5}  {}  {}  {:>5}  {:>5}",
        frame.number,
        marks,
        kind,
        frame.score,
        frame.running_total.bold()
    )
}

pub fn generate_score_json(card: &ScoreCard) -> Result<String> {
    Ok(serde_json::to_string_pretty(card)?)
}
