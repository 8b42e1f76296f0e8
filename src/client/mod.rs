//! PageSpeed Insights API client

use async_trait::async_trait;

use crate::error::ApiResult;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagespeed;

#[cfg(test)]
pub use mock::MockAuditProvider;
pub use models::PageSpeedResponse;
pub use pagespeed::PageSpeedClient;

/// Lighthouse categories requested on every audit
pub const CATEGORIES: [&str; 4] = ["performance", "accessibility", "best-practices", "seo"];

/// Device strategy requested on every audit
pub const STRATEGY: &str = "mobile";

/// Upstream audit provider
#[async_trait]
pub trait AuditProvider: Send + Sync {
    /// Run one audit for an already-normalized URL.
    ///
    /// A 429 must map to `ApiError::QuotaExceeded` and any other non-success
    /// status to `ApiError::Upstream`.
    async fn run_pagespeed(&self, url: &str) -> ApiResult<PageSpeedResponse>;
}
