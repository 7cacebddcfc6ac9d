use std::path::PathBuf;

use calisthenics_domain::{Category, Equipment, Injury, Level};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "calisthenics",
    version,
    about = "Generate bodyweight training programs"
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Increase the log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use an alternative configuration file
    #[arg(global = true, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a workout plan from a request file
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// List exercises of the catalog
    #[command(visible_alias = "ex")]
    Catalog(CatalogArgs),

    /// Show body metrics and the chosen split of a request
    Metabolism {
        /// Request file (TOML or JSON)
        request: PathBuf,
    },

    /// Render SVG charts of a generated plan
    Chart(ChartArgs),

    /// View the configuration
    #[command(subcommand)]
    Config(ConfigCmd),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Request file (TOML or JSON)
    pub request: PathBuf,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Write the plan to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Only show exercises of this category
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Only show exercises of this difficulty
    #[arg(short, long)]
    pub level: Option<Level>,

    /// Available equipment (all equipment if omitted)
    #[arg(short, long)]
    pub equipment: Vec<Equipment>,

    /// Hide exercises contraindicated for this injury
    #[arg(short, long)]
    pub injury: Vec<Injury>,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Request file (TOML or JSON)
    pub request: PathBuf,

    /// Target of the training volume chart
    #[arg(long, value_name = "FILE", default_value = "volume.svg")]
    pub volume: PathBuf,

    /// Target of the muscle distribution chart
    #[arg(long, value_name = "FILE", default_value = "muscles.svg")]
    pub muscles: PathBuf,
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Print the effective configuration
    Show,

    /// Print the location of the configuration file
    Path,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Text,
    Json,
}
