use crate::types::{GranularityArg, LogLevel, OutputFormat, RemainingArg};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "yeardots")]
#[command(about = "A year of dots: see how much of the year, month, week, and day is left", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml (default: platform config dir)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        value_name = "INSTANT",
        help = "Pin the clock: YYYY-MM-DD, YYYY-MM-DDTHH:MM or YYYY-MM-DDTHH:MM:SS"
    )]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one view of the current year
    Show {
        #[arg(long, short)]
        granularity: Option<GranularityArg>,

        #[arg(long, short)]
        remaining: Option<RemainingArg>,
    },

    /// Walk the granularity cycle and print each step
    Cycle {
        /// Number of advances to print (0-1000)
        #[arg(long, default_value = "4", value_parser = clap::value_parser!(u16).range(0..=1000))]
        steps: u16,

        #[arg(long)]
        from: Option<GranularityArg>,
    },

    /// Interactive full-screen view
    Tui,

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Print the resolved config file path
    Path,
}
