// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::ProviderSettings;
use crate::engines::traits::{ExtractionRequest, ProviderError, ProviderResponse, ScrapeProvider};
use async_trait::async_trait;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// Firecrawl 提供商实现
///
/// 通过 `POST {base_url}/v1/scrape` 调用提供商的单页提取接口，
/// API密钥以 Bearer 令牌形式随每个请求发送。
pub struct FirecrawlEngine {
    client: reqwest::Client,
    endpoint: Url,
}

impl FirecrawlEngine {
    /// 根据配置创建引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 提供商配置
    ///
    /// # 返回值
    ///
    /// * `Ok(FirecrawlEngine)` - 创建成功
    /// * `Err(ProviderError)` - 基础地址无效或HTTP客户端构建失败
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("jobportal/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: Self::scrape_endpoint(&settings.base_url)?,
        })
    }

    fn scrape_endpoint(base_url: &str) -> Result<Url, ProviderError> {
        // Without the trailing slash `join` would replace the last path segment
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Url::parse(&base)
            .and_then(|url| url.join("v1/scrape"))
            .map_err(|e| ProviderError::InvalidEndpoint(format!("{}: {}", base_url, e)))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ScrapeProvider for FirecrawlEngine {
    async fn scrape(
        &self,
        api_key: &str,
        request: &ExtractionRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        let start = Instant::now();

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let response_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            status = status.as_u16(),
            response_time_ms,
            bytes = text.len(),
            "Provider responded"
        );

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(ProviderResponse::from_body(
                status.as_u16(),
                body,
                response_time_ms,
            )),
            // Gateways in front of the provider answer errors with HTML pages
            Err(_) if !status.is_success() => Ok(ProviderResponse {
                status_code: status.as_u16(),
                success: false,
                error: Some(format!("Provider returned HTTP {}", status)),
                body: Value::String(text),
                response_time_ms,
            }),
            Err(e) => Err(ProviderError::MalformedResponse(e.to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "firecrawl"
    }
}
