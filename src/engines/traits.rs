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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// 提取前保留的标签
const JOB_LISTING_INCLUDE_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "a", "div", "span", "table", "tr", "td", "th",
];

/// 提取前剔除的标签
const JOB_LISTING_EXCLUDE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

/// 提供商错误类型
///
/// 只表示传输层面的异常；提供商返回的业务失败放在 [`ProviderResponse`] 中
#[derive(Error, Debug)]
pub enum ProviderError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 无效的提供商地址
    #[error("Invalid provider endpoint: {0}")]
    InvalidEndpoint(String),
    /// 响应体无法解析
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 提取输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Html,
}

/// 内容提取请求
///
/// 按提供商的线上格式（camelCase）序列化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    /// 目标URL
    pub url: String,
    /// 请求的输出格式
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<OutputFormat>,
    /// 保留的HTML标签
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_tags: Vec<String>,
    /// 剔除的HTML标签
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_tags: Vec<String>,
    /// 提取前等待时间（毫秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<u64>,
}

impl ExtractionRequest {
    /// 抓取职位站点所用的固定配置
    pub fn job_listing(url: impl Into<String>, wait_for_ms: u64) -> Self {
        Self {
            url: url.into(),
            formats: vec![OutputFormat::Markdown, OutputFormat::Html],
            include_tags: JOB_LISTING_INCLUDE_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            exclude_tags: JOB_LISTING_EXCLUDE_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            wait_for: Some(wait_for_ms),
        }
    }

    /// 校验API密钥用的最简请求，使用提供商默认选项
    pub fn trial(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            formats: Vec::new(),
            include_tags: Vec::new(),
            exclude_tags: Vec::new(),
            wait_for: None,
        }
    }
}

/// 提供商响应
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 提供商是否报告成功
    pub success: bool,
    /// 提供商给出的错误信息
    pub error: Option<String>,
    /// 原始响应体
    pub body: Value,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

impl ProviderResponse {
    /// 根据状态码和响应体构造
    ///
    /// 只有 2xx 且 `success == true` 才视为成功
    pub fn from_body(status_code: u16, body: Value, response_time_ms: u64) -> Self {
        let reported = body.get("success").and_then(Value::as_bool).unwrap_or(false);
        let error = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            status_code,
            success: (200..300).contains(&status_code) && reported,
            error,
            body,
            response_time_ms,
        }
    }

    /// 提供商是否因凭据问题拒绝请求
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code, 401 | 403)
    }
}

/// 抓取服务提供商特质
#[async_trait]
pub trait ScrapeProvider: Send + Sync {
    /// 使用给定的API密钥执行一次内容提取
    async fn scrape(
        &self,
        api_key: &str,
        request: &ExtractionRequest,
    ) -> Result<ProviderResponse, ProviderError>;

    /// 提供商名称
    fn name(&self) -> &'static str;
}
