//! Raw PageSpeed payload → `Report`

use super::{MAX_OPPORTUNITIES, Metrics, Opportunity, Report, Scores};
use crate::client::models::{LighthouseAudit, LighthouseResult, PageSpeedResponse};

/// Opportunities scoring at or above this are not worth reporting
const OPPORTUNITY_SCORE_CEILING: f64 = 0.9;

const NOT_AVAILABLE: &str = "N/A";

/// Build a report from a PageSpeed response for `url`.
pub fn normalize(url: &str, payload: &PageSpeedResponse) -> Report {
    let lighthouse = &payload.lighthouse_result;

    Report {
        url: url.to_string(),
        scores: Scores {
            performance: lighthouse.category_score("performance"),
            accessibility: lighthouse.category_score("accessibility"),
            best_practices: lighthouse.category_score("best-practices"),
            seo: lighthouse.category_score("seo"),
        },
        metrics: metrics(lighthouse),
        opportunities: opportunities(lighthouse),
        is_mock: false,
    }
}

fn metrics(lighthouse: &LighthouseResult) -> Metrics {
    let (fcp, fcp_score) = metric(lighthouse, "first-contentful-paint");
    let (lcp, lcp_score) = metric(lighthouse, "largest-contentful-paint");
    let (cls, cls_score) = metric(lighthouse, "cumulative-layout-shift");
    let (tbt, tbt_score) = metric(lighthouse, "total-blocking-time");
    let (si, si_score) = metric(lighthouse, "speed-index");

    Metrics {
        fcp,
        fcp_score,
        lcp,
        lcp_score,
        cls,
        cls_score,
        tbt,
        tbt_score,
        si,
        si_score,
    }
}

fn metric(lighthouse: &LighthouseResult, id: &str) -> (String, f64) {
    match lighthouse.audits.get(id) {
        Some(audit) => (
            audit
                .display_value
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            audit.score.unwrap_or(0.0),
        ),
        None => (NOT_AVAILABLE.to_string(), 0.0),
    }
}

/// Select failing opportunity audits, largest savings first, capped at five.
///
/// Audits are visited in key order and the sort is stable, so equal savings
/// keep alphabetical order.
fn opportunities(lighthouse: &LighthouseResult) -> Vec<Opportunity> {
    let mut selected: Vec<Opportunity> = lighthouse
        .audits
        .iter()
        .filter(|(_, audit)| is_opportunity(audit))
        .map(|(id, audit)| Opportunity {
            id: id.clone(),
            title: audit.title.clone(),
            description: audit.description.clone(),
            score: audit.score.unwrap_or(1.0),
            saving: audit
                .details
                .as_ref()
                .and_then(|d| d.overall_savings_ms)
                .unwrap_or(0.0),
        })
        .collect();

    selected.sort_by(|a, b| b.saving.total_cmp(&a.saving));
    selected.truncate(MAX_OPPORTUNITIES);
    selected
}

fn is_opportunity(audit: &LighthouseAudit) -> bool {
    let is_type = audit
        .details
        .as_ref()
        .and_then(|d| d.kind.as_deref())
        .is_some_and(|kind| kind == "opportunity");

    // A missing score counts as passing
    is_type && audit.score.unwrap_or(1.0) < OPPORTUNITY_SCORE_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{PageSpeedPayloadBuilder, full_payload};
    use serde_json::json;

    #[test]
    fn test_scores_and_metrics_from_full_payload() {
        let report = normalize("https://example.com", &full_payload().build_response());

        assert_eq!(report.url, "https://example.com");
        assert!(!report.is_mock);
        assert_eq!(report.scores.performance, 0.64);
        assert_eq!(report.scores.accessibility, 0.91);
        assert_eq!(report.scores.best_practices, 0.78);
        assert_eq!(report.scores.seo, 1.0);

        assert_eq!(report.metrics.fcp, "2.1 s");
        assert_eq!(report.metrics.fcp_score, 0.81);
        assert_eq!(report.metrics.lcp, "4.3 s");
        assert_eq!(report.metrics.lcp_score, 0.41);
        assert_eq!(report.metrics.cls, "0.012");
        assert_eq!(report.metrics.cls_score, 1.0);
        assert_eq!(report.metrics.tbt, "410 ms");
        assert_eq!(report.metrics.tbt_score, 0.66);
        assert_eq!(report.metrics.si, "5.0 s");
        assert_eq!(report.metrics.si_score, 0.63);
    }

    #[test]
    fn test_empty_payload_uses_defaults() {
        let report = normalize("https://example.com", &PageSpeedResponse::default());

        assert_eq!(report.scores.performance, 0.0);
        assert_eq!(report.scores.seo, 0.0);
        assert_eq!(report.metrics.fcp, "N/A");
        assert_eq!(report.metrics.fcp_score, 0.0);
        assert_eq!(report.metrics.si, "N/A");
        assert!(report.opportunities.is_empty());
        assert!(!report.is_mock);
    }

    #[test]
    fn test_metric_without_display_value() {
        let payload = PageSpeedPayloadBuilder::new()
            .audit("speed-index", json!({ "score": 0.5 }))
            .build_response();
        let report = normalize("https://example.com", &payload);

        assert_eq!(report.metrics.si, "N/A");
        assert_eq!(report.metrics.si_score, 0.5);
    }

    #[test]
    fn test_opportunity_selection_by_score() {
        let payload = PageSpeedPayloadBuilder::new()
            .opportunity("half", Some(0.5), 100.0)
            .opportunity("passing", Some(0.95), 900.0)
            .opportunity("low", Some(0.3), 300.0)
            .opportunity("unscored", None, 800.0)
            .build_response();

        let report = normalize("https://example.com", &payload);
        let ids: Vec<_> = report.opportunities.iter().map(|o| o.id.as_str()).collect();

        assert_eq!(ids, vec!["low", "half"]);
        assert_eq!(report.opportunities[0].saving, 300.0);
        assert_eq!(report.opportunities[0].score, 0.3);
        assert_eq!(report.opportunities[0].title, "Title for low");
        assert_eq!(report.opportunities[0].description, "Description for low");
    }

    #[test]
    fn test_score_exactly_at_ceiling_is_excluded() {
        let payload = PageSpeedPayloadBuilder::new()
            .opportunity("edge", Some(0.9), 500.0)
            .build_response();
        assert!(normalize("u", &payload).opportunities.is_empty());
    }

    #[test]
    fn test_non_opportunity_audits_ignored() {
        let payload = PageSpeedPayloadBuilder::new()
            .audit(
                "uses-long-cache-ttl",
                json!({ "score": 0.2, "details": { "type": "table", "overallSavingsMs": 999 } }),
            )
            .audit("no-details", json!({ "score": 0.1 }))
            .build_response();
        assert!(normalize("u", &payload).opportunities.is_empty());
    }

    #[test]
    fn test_missing_savings_defaults_to_zero() {
        let payload = PageSpeedPayloadBuilder::new()
            .audit(
                "render-blocking-resources",
                json!({ "title": "Eliminate render-blocking resources", "score": 0.2,
                        "details": { "type": "opportunity" } }),
            )
            .build_response();

        let report = normalize("u", &payload);
        assert_eq!(report.opportunities.len(), 1);
        assert_eq!(report.opportunities[0].saving, 0.0);
    }

    #[test]
    fn test_opportunities_sorted_and_capped_at_five() {
        let mut builder = PageSpeedPayloadBuilder::new();
        for (i, saving) in [50.0, 700.0, 10.0, 300.0, 450.0, 120.0, 900.0].iter().enumerate() {
            builder = builder.opportunity(&format!("audit-{}", i), Some(0.1), *saving);
        }

        let report = normalize("u", &builder.build_response());
        let savings: Vec<_> = report.opportunities.iter().map(|o| o.saving).collect();
        assert_eq!(savings, vec![900.0, 700.0, 450.0, 300.0, 120.0]);
    }

    #[test]
    fn test_equal_savings_keep_key_order() {
        let payload = PageSpeedPayloadBuilder::new()
            .opportunity("zeta", Some(0.2), 100.0)
            .opportunity("alpha", Some(0.2), 100.0)
            .opportunity("mid", Some(0.2), 100.0)
            .build_response();

        let report = normalize("u", &payload);
        let ids: Vec<_> = report.opportunities.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }
}
