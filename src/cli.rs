use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "locale-checkr",
    about = "Scan a website for localization signals and market-expansion readiness",
    version
)]
pub struct Cli {
    /// Website URL to analyze (https:// is assumed when the scheme is omitted)
    #[arg(required_unless_present = "tier_config")]
    pub url: Option<String>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Config file [default: ./.locale-checkr/config.toml, fallback ~/.config/locale-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the tier metadata map as JSON and exit
    #[arg(long)]
    pub tier_config: bool,

    /// Also list extracted hreflang alternates
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the one-line summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
