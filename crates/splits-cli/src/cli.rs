//! CLI argument definitions for splits.

use clap::Parser;

#[derive(Parser)]
#[command(name = "splits")]
#[command(about = "Ten-pin bowling score calculator", version)]
pub struct Args {
    /// Game string, one character per roll (X strike, / spare, - miss, 0-9 pins)
    #[arg(value_name = "GAME", allow_hyphen_values = true)]
    pub game: Option<String>,

    /// Count missing bonus rolls as zero instead of rejecting short games
    #[arg(long, env = "SPLITS_LENIENT")]
    pub lenient: bool,

    /// Print the frame-by-frame breakdown
    #[arg(long, short)]
    pub breakdown: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for splits_core::ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}
