//! `locale-checkr` — fetch a website and grade its localization readiness.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load HTTP config ([`config::load_config`]).
//! 3. Fetch the page ([`fetcher`]).
//! 4. Extract document facts from the markup ([`facts`]).
//! 5. Run the analysis passes ([`analysis`]): score, expansion signals,
//!    tier classification, evidence summary.
//! 6. Render the requested report ([`report`], or JSON straight from the
//!    [`models::AnalysisReport`]).

mod analysis;
mod cli;
mod config;
mod facts;
mod fetcher;
mod models;
mod report;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use analysis::{evidence, scorer, signals, tier};
use cli::{Cli, ReportFormat};
use config::load_config;
use models::{AnalysisReport, ScanResults};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.tier_config {
        println!("{}", serde_json::to_string_pretty(&tier::tier_config())?);
        return Ok(());
    }

    // Present when --tier-config is not (clap enforces it)
    let url = cli.url.unwrap_or_default();

    let config = load_config(cli.config.as_deref())?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .user_agent(&config.http.user_agent)
        .build()?;

    let spinner = if !cli.quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(format!("Fetching {}", fetcher::normalize_url(&url)));
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let fetched = fetcher::fetch_page(&client, &url).await;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let page = fetched?;

    let document = facts::extract(&page.html)?;
    let title = facts::extract_title(&page.html)?.unwrap_or_default();

    let localization_score = scorer::score(&document);
    let expansion_signals = signals::detect(&document);
    let scan = ScanResults::from_facts(&document);
    let tier_summary = tier::extract_tier(Some(&scan));
    let evidence = evidence::summarize(&scan, &expansion_signals);

    let analysis_report = AnalysisReport {
        url: page.url,
        title,
        response_time_ms: page.response_time.as_millis() as u64,
        localization_score,
        hreflang_tags: scan.hreflang_tags,
        expansion_signals,
        tier: tier_summary,
        evidence,
    };

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&analysis_report, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&analysis_report)?);
        }
    }

    Ok(())
}
