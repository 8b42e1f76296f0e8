//! Synthetic report used when a real audit cannot be obtained

use super::{Metrics, Opportunity, Report, Scores};

/// Build the fixed mock report.
///
/// Pure and deterministic: every call returns an identical report with
/// `is_mock = true` and an empty `url`.
pub fn fallback() -> Report {
    Report {
        url: String::new(),
        scores: Scores {
            performance: 0.72,
            accessibility: 0.85,
            best_practices: 0.90,
            seo: 0.92,
        },
        metrics: Metrics {
            fcp: "1.2 s".to_string(),
            fcp_score: 0.85,
            lcp: "2.4 s".to_string(),
            lcp_score: 0.78,
            cls: "0.05".to_string(),
            cls_score: 0.98,
            tbt: "180 ms".to_string(),
            tbt_score: 0.82,
            si: "2.9 s".to_string(),
            si_score: 0.80,
        },
        opportunities: vec![
            Opportunity {
                id: "unused-javascript".to_string(),
                title: "Reduce unused JavaScript".to_string(),
                description: "Reduce unused JavaScript and defer loading scripts until they \
                              are required to decrease bytes consumed by network activity."
                    .to_string(),
                score: 0.45,
                saving: 350.0,
            },
            Opportunity {
                id: "modern-image-formats".to_string(),
                title: "Serve images in modern formats".to_string(),
                description: "Image formats like WebP and AVIF often provide better \
                              compression than PNG or JPEG, which means faster downloads \
                              and less data consumption."
                    .to_string(),
                score: 0.6,
                saving: 200.0,
            },
        ],
        is_mock: true,
    }
}

/// The mock report, stamped with the URL it stands in for.
pub fn fallback_for(url: &str) -> Report {
    Report {
        url: url.to_string(),
        ..fallback()
    }
}
