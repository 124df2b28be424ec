// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::fetch_result::{FailureKind, FetchResult};
use crate::domain::services::credential_service::CredentialStore;
use crate::engines::traits::{ExtractionRequest, ProviderError, ProviderResponse, ScrapeProvider};

/// 提供商未给出原因时使用的失败信息
pub const PROVIDER_FAILURE_FALLBACK: &str = "Failed to scrape website";

/// 传输错误没有可读信息时使用的失败信息
pub const TRANSPORT_FAILURE_FALLBACK: &str = "Failed to connect to scraping provider";

/// 抓取网关
///
/// 包装第三方抓取服务：每次调用最多发出一个提取请求，不重试，
/// 所有异常路径都转换为 [`FetchResult::Failure`]。
pub struct ScrapeGateway {
    credentials: Arc<CredentialStore>,
    provider: Arc<dyn ScrapeProvider>,
    wait_for_ms: u64,
}

impl ScrapeGateway {
    pub fn new(
        credentials: Arc<CredentialStore>,
        provider: Arc<dyn ScrapeProvider>,
        wait_for_ms: u64,
    ) -> Self {
        Self {
            credentials,
            provider,
            wait_for_ms,
        }
    }

    /// 抓取目标站点
    ///
    /// 未保存API密钥时直接返回 `missing credential`，不发起网络请求。
    pub async fn fetch(&self, target_url: &str) -> FetchResult {
        let Some(api_key) = self.credentials.get().await else {
            warn!(url = target_url, "No API key stored, skipping scrape");
            return FetchResult::missing_credential();
        };

        let request = ExtractionRequest::job_listing(target_url, self.wait_for_ms);
        info!(url = target_url, wait_for_ms = self.wait_for_ms, "Requesting extraction");

        let result = normalize_outcome(self.provider.scrape(&api_key, &request).await);
        match &result {
            FetchResult::Success(_) => info!(url = target_url, "Scrape successful"),
            FetchResult::Failure(failure) => warn!(
                url = target_url,
                kind = %failure.kind,
                reason = %failure.reason,
                "Scrape failed"
            ),
        }
        result
    }
}

/// 将提供商调用结果归一化为 [`FetchResult`]
pub(crate) fn normalize_outcome(outcome: Result<ProviderResponse, ProviderError>) -> FetchResult {
    match outcome {
        Ok(response) if response.success => FetchResult::Success(response.body),
        Ok(response) => {
            let kind = if response.is_unauthorized() {
                FailureKind::InvalidCredential
            } else {
                FailureKind::ProviderFailure
            };
            let reason = response
                .error
                .unwrap_or_else(|| PROVIDER_FAILURE_FALLBACK.to_string());
            FetchResult::failure(kind, reason)
        }
        Err(e) => {
            let reason = e.to_string();
            let reason = if reason.trim().is_empty() {
                TRANSPORT_FAILURE_FALLBACK.to_string()
            } else {
                reason
            };
            FetchResult::failure(FailureKind::TransportFailure, reason)
        }
    }
}
