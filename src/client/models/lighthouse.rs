//! PageSpeed Insights / Lighthouse response models
//!
//! Only the fields the normalizer reads are modeled. Every field is optional
//! so a sparse payload decodes to defaults instead of failing.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Top-level `runPagespeed` response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedResponse {
    #[serde(default)]
    pub lighthouse_result: LighthouseResult,
}

/// The embedded Lighthouse run
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LighthouseResult {
    /// Category results keyed by id (`performance`, `best-practices`, ...)
    #[serde(default)]
    pub categories: HashMap<String, Category>,

    /// Audit results keyed by audit id, kept in key order
    #[serde(default)]
    pub audits: BTreeMap<String, LighthouseAudit>,
}

impl LighthouseResult {
    /// Score for a category, 0 when absent or null
    pub fn category_score(&self, id: &str) -> f64 {
        self.categories
            .get(id)
            .and_then(|c| c.score)
            .unwrap_or(0.0)
    }
}

/// A Lighthouse category result
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub score: Option<f64>,
}

/// A single Lighthouse audit result
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseAudit {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Null for informative / not-applicable audits
    #[serde(default)]
    pub score: Option<f64>,

    /// Human-readable value, e.g. "1.2 s"
    #[serde(default)]
    pub display_value: Option<String>,

    #[serde(default)]
    pub details: Option<AuditDetails>,
}

/// Audit details block; only the type tag and savings estimate are used
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetails {
    /// Details type (`opportunity`, `table`, `debugdata`, ...)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub overall_savings_ms: Option<f64>,
}
