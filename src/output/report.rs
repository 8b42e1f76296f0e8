//! Report rendering for the `audit` command

use colored::{ColoredString, Colorize};
use tabled::Tabled;

use super::Formattable;
use super::formatters::{Rating, format_saving_ms, format_score, rating};
use super::json::format_json;
use super::table::format_table;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::Report;

#[derive(Debug, Tabled)]
struct ScoreRow {
    #[tabled(rename = "CATEGORY")]
    category: &'static str,
    #[tabled(rename = "SCORE")]
    score: String,
}

#[derive(Debug, Tabled)]
struct MetricRow {
    #[tabled(rename = "METRIC")]
    metric: &'static str,
    #[tabled(rename = "VALUE")]
    value: String,
    #[tabled(rename = "SCORE")]
    score: String,
}

#[derive(Debug, Tabled)]
struct OpportunityRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "SAVING")]
    saving: String,
    #[tabled(rename = "SCORE")]
    score: String,
}

fn score_rows(report: &Report) -> Vec<(&'static str, f64)> {
    let s = &report.scores;
    vec![
        ("Performance", s.performance),
        ("Accessibility", s.accessibility),
        ("Best Practices", s.best_practices),
        ("SEO", s.seo),
    ]
}

fn metric_rows(report: &Report) -> Vec<(&'static str, &str, f64)> {
    let m = &report.metrics;
    vec![
        ("First Contentful Paint", m.fcp.as_str(), m.fcp_score),
        ("Largest Contentful Paint", m.lcp.as_str(), m.lcp_score),
        ("Cumulative Layout Shift", m.cls.as_str(), m.cls_score),
        ("Total Blocking Time", m.tbt.as_str(), m.tbt_score),
        ("Speed Index", m.si.as_str(), m.si_score),
    ]
}

fn colorize_score(score: f64) -> ColoredString {
    let text = format_score(score);
    match rating(score) {
        Rating::Good => text.green(),
        Rating::NeedsImprovement => text.yellow(),
        Rating::Poor => text.red(),
    }
}

fn format_pretty(report: &Report) -> String {
    let mut out = Vec::new();

    let source = if report.is_mock {
        "(mock data)".yellow().to_string()
    } else {
        "(live)".green().to_string()
    };
    out.push(format!("{} {}", report.url.bold(), source));
    out.push(String::new());

    out.push("Scores".bold().to_string());
    for (label, score) in score_rows(report) {
        out.push(format!("  {:<16} {}", label, colorize_score(score)));
    }
    out.push(String::new());

    out.push("Metrics".bold().to_string());
    for (label, value, score) in metric_rows(report) {
        out.push(format!(
            "  {:<26} {:<10} {}",
            label,
            value,
            colorize_score(score)
        ));
    }
    out.push(String::new());

    out.push("Opportunities".bold().to_string());
    if report.opportunities.is_empty() {
        out.push("  None - nothing scored below 90".dimmed().to_string());
    }
    for (i, opp) in report.opportunities.iter().enumerate() {
        out.push(format!(
            "  {}. {} {}",
            i + 1,
            opp.title,
            format!("(saves {})", format_saving_ms(opp.saving)).cyan()
        ));
        out.push(format!("     {}", opp.id.dimmed()));
    }

    out.join("\n")
}

fn format_tables(report: &Report) -> String {
    let scores: Vec<ScoreRow> = score_rows(report)
        .into_iter()
        .map(|(category, score)| ScoreRow {
            category,
            score: format_score(score),
        })
        .collect();

    let metrics: Vec<MetricRow> = metric_rows(report)
        .into_iter()
        .map(|(metric, value, score)| MetricRow {
            metric,
            value: value.to_string(),
            score: format_score(score),
        })
        .collect();

    let opportunities: Vec<OpportunityRow> = report
        .opportunities
        .iter()
        .map(|opp| OpportunityRow {
            id: opp.id.clone(),
            title: opp.title.clone(),
            saving: format_saving_ms(opp.saving),
            score: format_score(opp.score),
        })
        .collect();

    let mut header = report.url.clone();
    if report.is_mock {
        header.push_str(" (mock data)");
    }

    [
        header,
        format_table(&scores),
        format_table(&metrics),
        format_table(&opportunities),
    ]
    .join("\n\n")
}

impl Formattable for Report {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Table => Ok(format_tables(self)),
            OutputFormat::Pretty => Ok(format_pretty(self)),
        }
    }
}
