//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without scoring anything.

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "splits")]
struct Args {
    #[arg(value_name = "GAME", allow_hyphen_values = true)]
    game: Option<String>,
    #[arg(long, env = "SPLITS_LENIENT")]
    lenient: bool,
    #[arg(long, short)]
    breakdown: bool,
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["splits"]).unwrap();
    assert!(args.game.is_none());
    assert!(!args.breakdown);
    assert!(matches!(args.format, OutputFormat::Text));
}

#[test]
fn test_parse_game() {
    let args = Args::try_parse_from(["splits", "XXXXXXXXXXXX"]).unwrap();
    assert_eq!(args.game.as_deref(), Some("XXXXXXXXXXXX"));
}

#[test]
fn test_parse_game_starting_with_miss() {
    let args = Args::try_parse_from(["splits", "--------------------"]).unwrap();
    assert_eq!(args.game.as_deref(), Some("--------------------"));

    let args = Args::try_parse_from(["splits", "-/5/5/5/5/5/5/5/5/5/5"]).unwrap();
    assert_eq!(args.game.as_deref(), Some("-/5/5/5/5/5/5/5/5/5/5"));
}

#[test]
fn test_parse_flags_before_game_starting_with_miss() {
    let args = Args::try_parse_from(["splits", "-b", "-f", "json", "--------------------"]).unwrap();
    assert!(args.breakdown);
    assert!(matches!(args.format, OutputFormat::Json));
    assert_eq!(args.game.as_deref(), Some("--------------------"));
}

#[test]
fn test_parse_breakdown_short() {
    let args = Args::try_parse_from(["splits", "-b", "9-9-9-9-9-9-9-9-9-9-"]).unwrap();
    assert!(args.breakdown);
}

#[test]
fn test_parse_json_format() {
    let args = Args::try_parse_from(["splits", "-f", "json", "X7/9-X-88/-6XXX81"]).unwrap();
    assert!(matches!(args.format, OutputFormat::Json));
}

#[test]
fn test_parse_lenient() {
    let args = Args::try_parse_from(["splits", "--lenient", "XXX"]).unwrap();
    assert!(args.lenient);
}

#[test]
fn test_invalid_format_fails() {
    let result = Args::try_parse_from(["splits", "--format", "tsv", "XXX"]);
    assert!(result.is_err());
}

#[test]
fn test_extra_positional_fails() {
    let result = Args::try_parse_from(["splits", "XXX", "XXX"]);
    assert!(result.is_err());
}
