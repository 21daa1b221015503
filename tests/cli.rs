//! Tests for command-line interface parsing and batch options

use clap::Parser;
use std::path::PathBuf;
use variatex::io::cli::Cli;
use variatex::io::configuration::{DEFAULT_BLEND_ALPHA, DEFAULT_SEED, DEFAULT_VARIATION_COUNT};

// Tests CLI parsing with only the required target argument
#[test]
fn test_cli_parse_minimal_args() {
    let args = vec!["variatex", "textures.png"];
    let cli = Cli::parse_from(args);

    assert_eq!(cli.target, PathBuf::from("textures.png"));
    assert_eq!(cli.count, DEFAULT_VARIATION_COUNT);
    assert_eq!(cli.seed, DEFAULT_SEED);
    assert!((cli.alpha - DEFAULT_BLEND_ALPHA).abs() < f64::EPSILON);
    assert!(cli.output.is_none());
    assert!(!cli.quiet);
}

// Tests CLI parsing with all available arguments
#[test]
fn test_cli_parse_all_args() {
    let args = vec![
        "variatex",
        "textures",
        "--output",
        "generated",
        "--count",
        "10",
        "--alpha",
        "0.25",
        "--seed",
        "123",
        "--quiet",
        "--no-skip",
    ];
    let cli = Cli::parse_from(args);

    assert_eq!(cli.target, PathBuf::from("textures"));
    assert_eq!(cli.output, Some(PathBuf::from("generated")));
    assert_eq!(cli.count, 10);
    assert!((cli.alpha - 0.25).abs() < f64::EPSILON);
    assert_eq!(cli.seed, 123);
    assert!(cli.quiet);
    assert!(cli.no_skip);
}

// Tests regeneration behavior based on the --no-skip flag
#[test]
fn test_skip_existing_logic() {
    let cli_default = Cli::parse_from(vec!["variatex", "textures.png"]);
    assert!(cli_default.skip_existing());

    let cli_no_skip = Cli::parse_from(vec!["variatex", "textures.png", "--no-skip"]);
    assert!(!cli_no_skip.skip_existing());
}

// Tests progress display based on the --quiet flag
#[test]
fn test_should_show_progress() {
    let cli_default = Cli::parse_from(vec!["variatex", "textures.png"]);
    assert!(cli_default.should_show_progress());

    let cli_quiet = Cli::parse_from(vec!["variatex", "textures.png", "--quiet"]);
    assert!(!cli_quiet.should_show_progress());
}

// Tests short flag parsing (-c, -a, -s)
#[test]
fn test_cli_short_flags() {
    let args = vec![
        "variatex", "in.png", "-c", "5", "-a", "0.75", "-s", "999", "-q", "-n",
    ];
    let cli = Cli::parse_from(args);

    assert_eq!(cli.count, 5);
    assert!((cli.alpha - 0.75).abs() < f64::EPSILON);
    assert_eq!(cli.seed, 999);
    assert!(cli.quiet);
    assert!(cli.no_skip);
}
