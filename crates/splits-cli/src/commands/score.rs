use anyhow::{Context, Result};
use splits_core::{BonusPolicy, ScoringConfig, export_score_card, score_game};
use tracing::{debug, info};

use crate::cli::OutputFormat;

/// Score a game string and print it in the requested format.
pub fn run(game: &str, lenient: bool, breakdown: bool, format: OutputFormat) -> Result<()> {
    let policy = if lenient {
        BonusPolicy::Lenient
    } else {
        BonusPolicy::Strict
    };
    let config = ScoringConfig::new().with_policy(policy);
    debug!("Scoring {:?} with {} policy", game, policy);

    let card = score_game(game, &config).with_context(|| format!("Failed to score game {:?}", game))?;
    info!("Scored {} frames", card.len());

    let output = export_score_card(&card, format.into(), breakdown)?;
    println!("{}", output);

    Ok(())
}
