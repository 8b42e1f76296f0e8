//! Mock audit provider for testing
//!
//! Returns a configured payload or error without making real API calls and
//! records every URL it was asked to audit.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{AuditProvider, PageSpeedResponse};
use crate::error::{ApiError, ApiResult};

/// Mock provider for testing.
///
/// # Example
/// ```ignore
/// let mock = MockAuditProvider::new().with_error(ApiError::QuotaExceeded).await;
/// assert!(mock.run_pagespeed("https://example.com").await.is_err());
/// assert_eq!(mock.call_count().await, 1);
/// ```
#[derive(Default)]
pub struct MockAuditProvider {
    /// Payload returned on success
    response: Arc<Mutex<PageSpeedResponse>>,
    /// Error returned instead of the payload, consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// URLs requested, in call order
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockAuditProvider {
    /// Create a mock returning an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the payload to return.
    pub async fn with_response(self, response: PageSpeedResponse) -> Self {
        *self.response.lock().await = response;
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Number of upstream calls made.
    pub async fn call_count(&self) -> usize {
        self.requested.lock().await.len()
    }

    /// URLs passed to `run_pagespeed`, in call order.
    pub async fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }
}

#[async_trait]
impl AuditProvider for MockAuditProvider {
    async fn run_pagespeed(&self, url: &str) -> ApiResult<PageSpeedResponse> {
        self.requested.lock().await.push(url.to_string());

        if let Some(err) = self.error.lock().await.take() {
            return Err(err);
        }
        Ok(self.response.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::PageSpeedPayloadBuilder;

    #[tokio::test]
    async fn test_mock_default_empty_payload() {
        let mock = MockAuditProvider::new();
        let response = mock.run_pagespeed("https://example.com").await.unwrap();
        assert!(response.lighthouse_result.audits.is_empty());
        assert_eq!(mock.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_returns_configured_payload() {
        let payload = PageSpeedPayloadBuilder::new()
            .category("seo", 0.5)
            .build_response();
        let mock = MockAuditProvider::new().with_response(payload).await;

        let response = mock.run_pagespeed("https://example.com").await.unwrap();
        assert_eq!(response.lighthouse_result.category_score("seo"), 0.5);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockAuditProvider::new()
            .with_error(ApiError::QuotaExceeded)
            .await;

        assert!(mock.run_pagespeed("https://a.example").await.is_err());
        assert!(mock.run_pagespeed("https://b.example").await.is_ok());
        assert_eq!(
            mock.requested_urls().await,
            vec!["https://a.example", "https://b.example"]
        );
    }
}
