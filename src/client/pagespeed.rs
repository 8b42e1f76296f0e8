//! PageSpeed Insights API client implementation

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode, header::REFERER};

use super::{AuditProvider, CATEGORIES, PageSpeedResponse, STRATEGY};
use crate::config::Config;
use crate::error::{ApiError, ApiResult, Result};

/// PageSpeed Insights API client
pub struct PageSpeedClient {
    http: HttpClient,
    api_url: String,
    api_key: Option<String>,
    referer: String,
}

impl PageSpeedClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            referer: config.app_url.clone(),
        })
    }

    /// Query parameters for one audit; `category` repeats once per category
    fn query(&self, url: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("url", url.to_string()), ("strategy", STRATEGY.to_string())];
        params.extend(CATEGORIES.iter().map(|c| ("category", c.to_string())));
        if let Some(ref key) = self.api_key {
            params.push(("key", key.clone()));
        }
        params
    }
}

#[async_trait]
impl AuditProvider for PageSpeedClient {
    async fn run_pagespeed(&self, url: &str) -> ApiResult<PageSpeedResponse> {
        log::debug!("Requesting PageSpeed audit for {}", url);

        let response = self
            .http
            .get(&self.api_url)
            .query(&self.query(url))
            .header(REFERER, &self.referer)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::QuotaExceeded),
            status if status.is_success() => {
                response.json::<PageSpeedResponse>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Unexpected status code: {}", status));
                Err(ApiError::Upstream {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
