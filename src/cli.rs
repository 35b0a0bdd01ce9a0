use crate::models::{Edition, Hemisphere};
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gardenops",
    version,
    about = "Seasonal garden advice for South African gardens"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured edition (regional, general)
    #[arg(short, long, global = true, value_parser = parse_edition)]
    pub edition: Option<Edition>,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print advice for a season and plant type
    Advise(AdviseArgs),
    /// List the plant choices offered for a season
    Options {
        /// Season to list regional plants for
        #[arg(short, long)]
        season: Option<String>,
    },
    /// Interactive advice form
    Tui {
        /// Season to preselect
        #[arg(short, long)]
        season: Option<String>,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config and the configured defaults
    Check,
}

#[derive(Args, Default)]
pub struct AdviseArgs {
    /// Season (spring, summer, autumn, winter)
    #[arg(short, long)]
    pub season: Option<String>,

    /// Plant type: a category or a regional plant name
    #[arg(short, long)]
    pub plant: Option<String>,

    /// Use the season of today's date
    #[arg(long, conflicts_with = "season")]
    pub current_season: bool,

    /// Hemisphere for --current-season (southern, northern)
    #[arg(long, requires = "current_season", value_parser = parse_hemisphere)]
    pub hemisphere: Option<Hemisphere>,

    /// Output format (text, json, html)
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,
}

fn parse_edition(s: &str) -> Result<Edition, String> {
    Edition::from_str(s).ok_or_else(|| format!("unknown edition '{}' (use regional or general)", s))
}

fn parse_hemisphere(s: &str) -> Result<Hemisphere, String> {
    Hemisphere::from_str(s)
        .ok_or_else(|| format!("unknown hemisphere '{}' (use southern or northern)", s))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).ok_or_else(|| format!("unknown format '{}' (use text, json or html)", s))
}
