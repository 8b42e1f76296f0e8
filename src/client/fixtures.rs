//! Test fixtures for PageSpeed payloads
//!
//! Builds `runPagespeed`-shaped JSON with only the fields a test cares about.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use serde_json::{Map, Value, json};

use super::PageSpeedResponse;

/// Builder for PageSpeed response payloads.
///
/// # Example
/// ```ignore
/// let payload = PageSpeedPayloadBuilder::new()
///     .category("performance", 0.91)
///     .opportunity("unused-css-rules", Some(0.4), 120.0)
///     .build_response();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageSpeedPayloadBuilder {
    categories: Map<String, Value>,
    audits: Map<String, Value>,
}

impl PageSpeedPayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a category score.
    pub fn category(mut self, id: &str, score: f64) -> Self {
        self.categories
            .insert(id.to_string(), json!({ "id": id, "score": score }));
        self
    }

    /// Add a metric audit with display value and score.
    pub fn metric(mut self, id: &str, display_value: &str, score: f64) -> Self {
        self.audits.insert(
            id.to_string(),
            json!({
                "id": id,
                "title": id,
                "score": score,
                "displayValue": display_value,
            }),
        );
        self
    }

    /// Add an opportunity audit. A `None` score omits the field.
    pub fn opportunity(mut self, id: &str, score: Option<f64>, savings_ms: f64) -> Self {
        let mut audit = json!({
            "id": id,
            "title": format!("Title for {}", id),
            "description": format!("Description for {}", id),
            "details": { "type": "opportunity", "overallSavingsMs": savings_ms, "items": [] },
        });
        if let Some(score) = score {
            audit["score"] = json!(score);
        }
        self.audits.insert(id.to_string(), audit);
        self
    }

    /// Add an arbitrary audit value.
    pub fn audit(mut self, id: &str, audit: Value) -> Self {
        self.audits.insert(id.to_string(), audit);
        self
    }

    /// Build the raw JSON payload.
    pub fn build(self) -> Value {
        json!({
            "id": "https://example.com/",
            "lighthouseResult": {
                "requestedUrl": "https://example.com/",
                "categories": self.categories,
                "audits": self.audits,
            }
        })
    }

    /// Build and decode into the typed response.
    pub fn build_response(self) -> PageSpeedResponse {
        serde_json::from_value(self.build()).expect("fixture payload decodes")
    }
}

/// A realistic full payload: all four categories and all five metrics.
pub fn full_payload() -> PageSpeedPayloadBuilder {
    PageSpeedPayloadBuilder::new()
        .category("performance", 0.64)
        .category("accessibility", 0.91)
        .category("best-practices", 0.78)
        .category("seo", 1.0)
        .metric("first-contentful-paint", "2.1 s", 0.81)
        .metric("largest-contentful-paint", "4.3 s", 0.41)
        .metric("cumulative-layout-shift", "0.012", 1.0)
        .metric("total-blocking-time", "410 ms", 0.66)
        .metric("speed-index", "5.0 s", 0.63)
}
