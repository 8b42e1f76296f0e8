//! Audit orchestration
//!
//! Serves fresh cached reports, otherwise asks the provider and degrades to
//! the mock report when a real one cannot be produced.

use std::sync::Arc;

use crate::cache::{ReportCache, normalize_url};
use crate::client::{AuditProvider, PageSpeedClient};
use crate::config::{Config, UpstreamErrorPolicy};
use crate::error::{ApiError, AuditError, Result as AppResult};
use crate::report::{Report, fallback_for, normalize};

/// URLs containing this substring skip the upstream call
const BYPASS_MARKER: &str = "mock";

/// Whether a normalized URL should be answered with the mock report directly.
pub fn bypasses_upstream(url: &str) -> bool {
    url.contains(BYPASS_MARKER)
}

/// Cache-first audit pipeline over any provider.
pub struct Auditor<P: AuditProvider> {
    provider: Arc<P>,
    cache: Arc<ReportCache>,
    policy: UpstreamErrorPolicy,
}

impl<P: AuditProvider> Auditor<P> {
    pub fn new(provider: P, cache: Arc<ReportCache>, policy: UpstreamErrorPolicy) -> Self {
        Self {
            provider: Arc::new(provider),
            cache,
            policy,
        }
    }

    #[cfg(test)]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &ReportCache {
        &self.cache
    }

    /// Produce a report for a user-supplied URL.
    ///
    /// Only returns an error when the policy is `Propagate` and the provider
    /// answered with a non-429 error status. Every other outcome, including
    /// the mock report, is cached under the normalized URL.
    pub async fn audit(&self, raw_url: &str) -> Result<Report, AuditError> {
        let url = normalize_url(raw_url);

        if let Some(report) = self.cache.get(&url) {
            log::debug!("Cache hit: {}", url);
            return Ok(report);
        }

        let report = if bypasses_upstream(&url) {
            log::info!("Serving mock report for {} (bypass)", url);
            fallback_for(&url)
        } else {
            self.fetch(&url).await?
        };

        self.cache.put(&url, report.clone());
        Ok(report)
    }

    async fn fetch(&self, url: &str) -> Result<Report, AuditError> {
        match self.provider.run_pagespeed(url).await {
            Ok(payload) => Ok(normalize(url, &payload)),
            Err(ApiError::QuotaExceeded) => {
                log::warn!("Usage limit exceeded, falling back to mock data");
                Ok(fallback_for(url))
            }
            Err(ApiError::Upstream { status, body })
                if self.policy == UpstreamErrorPolicy::Propagate =>
            {
                log::warn!("PageSpeed API returned {} for {}", status, url);
                Err(AuditError::Upstream { status, body })
            }
            Err(err) => {
                log::warn!("Using mock data for {} due to: {}", url, err);
                Ok(fallback_for(url))
            }
        }
    }
}

impl Auditor<PageSpeedClient> {
    /// Wire the real PageSpeed client and a fresh cache from configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = PageSpeedClient::new(config)?;
        let cache = Arc::new(ReportCache::new(config.cache_ttl()));
        Ok(Self::new(client, cache, config.upstream_errors))
    }
}
