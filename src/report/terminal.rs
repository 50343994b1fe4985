use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{AnalysisReport, Grade, ScoreDetails};

/// Render a colored terminal report.
pub fn render(report: &AnalysisReport, verbose: bool, quiet: bool) -> Result<()> {
    let score = &report.localization_score;

    if quiet {
        println!(
            "Score: {}/{} ({})  Tier: {} ({})  Ready for localization: {}",
            score.score,
            score.max_score,
            grade_colored(score.grade),
            report.tier.tier,
            report.tier.tier_label,
            if score.ready_for_localization { "yes" } else { "no" },
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "locale-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Analyzing: {}\n", report.url);

    let posture = if report.expansion_signals.is_actively_expanding {
        format!(
            "Actively expanding (score {})",
            report.expansion_signals.expansion_score
        )
    } else if report.expansion_signals.is_first_time_global {
        format!(
            "First-time global (score {})",
            report.expansion_signals.expansion_score
        )
    } else {
        "None detected".to_string()
    };

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    if !report.title.is_empty() {
        println!(" │  {:<48} │", format!("Title             : {}", report.title));
    }
    println!(
        " │  {:<48} │",
        format!(
            "Score             : {}/{}  (grade {})",
            score.score,
            score.max_score,
            grade_colored(score.grade)
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "Tier              : {} — {}",
            report.tier.tier,
            tier_colored(report.tier.tier, &report.tier.tier_label)
        )
    );
    println!(" │  {:<48} │", format!("Expansion         : {}", posture));
    println!(
        " │  {:<48} │",
        format!(
            "Ready to localize : {}",
            if score.ready_for_localization { "yes" } else { "no" }
        )
    );
    println!(
        " │  {:<48} │",
        format!("Evidence          : {}", report.evidence)
    );
    println!(
        " │  {:<48} │",
        format!("Fetched in        : {} ms", report.response_time_ms)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    let rows = signal_rows(&score.details);
    if rows.is_empty() {
        println!(" No localization signals detected.\n");
    } else {
        println!(
            " {} Localization signals detected:\n",
            "[SIGNALS]".green().bold()
        );
        render_signal_table(&rows);
        println!();
    }

    if verbose && !report.hreflang_tags.is_empty() {
        println!(
            " {} Alternate language links:\n",
            "[HREFLANG]".cyan().bold()
        );
        render_hreflang_table(report);
        println!();
    }

    Ok(())
}

fn signal_rows(details: &ScoreDetails) -> Vec<(&'static str, String, &'static str)> {
    let mut rows = Vec::new();
    if let Some(lang) = &details.html_lang {
        rows.push(("html lang attribute", lang.clone(), "+10"));
    }
    if let Some(count) = details.hreflang_count {
        rows.push(("hreflang alternates", count.to_string(), "+20"));
    }
    if details.language_switcher == Some(true) {
        rows.push(("language switcher", "present".to_string(), "+25"));
    }
    if let Some(libs) = &details.i18n_libraries {
        rows.push(("i18n libraries", libs.join(", "), "+15"));
    }
    rows
}

fn render_signal_table(rows: &[(&str, String, &str)]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Signal").add_attribute(Attribute::Bold),
            Cell::new("Evidence").add_attribute(Attribute::Bold),
            Cell::new("Points").add_attribute(Attribute::Bold),
        ]);

    for (signal, evidence, points) in rows {
        table.add_row(vec![
            Cell::new(signal),
            Cell::new(evidence),
            Cell::new(points).fg(Color::Green),
        ]);
    }

    println!("{}", table);
}

fn render_hreflang_table(report: &AnalysisReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Locale").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
        ]);

    for link in &report.hreflang_tags {
        table.add_row(vec![Cell::new(&link.hreflang), Cell::new(&link.href)]);
    }

    println!("{}", table);
}

fn grade_colored(grade: Grade) -> ColoredString {
    let text = grade.to_string();
    match grade {
        Grade::APlus | Grade::A => text.green(),
        Grade::B | Grade::C => text.yellow(),
        Grade::D | Grade::F => text.red(),
    }
}

/// Terminal approximation of the tier hex swatches: emerald, blue, amber, grey.
fn tier_colored(tier: u8, label: &str) -> ColoredString {
    match tier {
        1 => label.green(),
        2 => label.blue(),
        3 => label.yellow(),
        _ => label.bright_black(),
    }
}
