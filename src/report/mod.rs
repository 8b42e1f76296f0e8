//! Audit report model
//!
//! The compact report shape returned to callers, whether it came from a real
//! PageSpeed run or from the fallback generator.

use serde::{Deserialize, Serialize};

pub mod fallback;
pub mod normalize;

pub use fallback::fallback_for;
pub use normalize::normalize;

/// Maximum number of opportunities kept in a report
pub const MAX_OPPORTUNITIES: usize = 5;

/// Normalized audit report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The audited URL (normalized, with scheme)
    pub url: String,

    /// Lighthouse category scores
    pub scores: Scores,

    /// Core web vitals and lab metrics
    pub metrics: Metrics,

    /// Highest-saving improvement suggestions, at most five
    pub opportunities: Vec<Opportunity>,

    /// True when the report was synthesized instead of fetched
    pub is_mock: bool,
}

/// Category scores, each in the range 0.0 to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub performance: f64,
    pub accessibility: f64,
    pub best_practices: f64,
    pub seo: f64,
}

/// Lab metrics: display value plus the metric's own score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub fcp: String,
    pub fcp_score: f64,
    pub lcp: String,
    pub lcp_score: f64,
    pub cls: String,
    pub cls_score: f64,
    pub tbt: String,
    pub tbt_score: f64,
    pub si: String,
    pub si_score: f64,
}

/// A single improvement suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Lighthouse audit key, e.g. `unused-javascript`
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: f64,
    /// Estimated savings in milliseconds
    pub saving: f64,
}
