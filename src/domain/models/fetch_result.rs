// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// 缺少凭据时返回的原因字符串
pub const MISSING_CREDENTIAL: &str = "missing credential";

/// 失败类型
///
/// 所有失败都以值的形式返回给调用方，不会以 panic 或错误传播
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// 尚未保存API密钥
    MissingCredential,
    /// 提供商拒绝了API密钥
    InvalidCredential,
    /// 提供商可达但报告了错误（目标无效、限流等）
    ProviderFailure,
    /// 网络错误、超时或无法解析的响应
    TransportFailure,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::MissingCredential => "missing_credential",
            FailureKind::InvalidCredential => "invalid_credential",
            FailureKind::ProviderFailure => "provider_failure",
            FailureKind::TransportFailure => "transport_failure",
        };
        f.write_str(s)
    }
}

/// 一次抓取失败的详情
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct FetchFailure {
    /// 失败类型
    pub kind: FailureKind,
    /// 可读的失败原因，始终非空
    pub reason: String,
}

/// 一次抓取尝试的归一化结果
///
/// 成功时携带提供商的原始响应，本层不做任何解释
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    /// 抓取成功，携带原始内容
    Success(Value),
    /// 抓取失败
    Failure(FetchFailure),
}

impl FetchResult {
    pub fn failure(kind: FailureKind, reason: impl Into<String>) -> Self {
        FetchResult::Failure(FetchFailure {
            kind,
            reason: reason.into(),
        })
    }

    pub fn missing_credential() -> Self {
        Self::failure(FailureKind::MissingCredential, MISSING_CREDENTIAL)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    /// 成功时的原始内容
    pub fn raw_content(&self) -> Option<&Value> {
        match self {
            FetchResult::Success(raw) => Some(raw),
            FetchResult::Failure(_) => None,
        }
    }

    /// 失败时的原因
    pub fn reason(&self) -> Option<&str> {
        match self {
            FetchResult::Success(_) => None,
            FetchResult::Failure(failure) => Some(&failure.reason),
        }
    }

    /// 失败时的类型
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            FetchResult::Success(_) => None,
            FetchResult::Failure(failure) => Some(failure.kind),
        }
    }

    pub fn into_result(self) -> Result<Value, FetchFailure> {
        match self {
            FetchResult::Success(raw) => Ok(raw),
            FetchResult::Failure(failure) => Err(failure),
        }
    }
}

/// 序列化外层结构：`{"success": true, "data": ...}` 或 `{"success": false, "error": ...}`
#[derive(Serialize)]
struct Envelope<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<FailureKind>,
}

impl Serialize for FetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Envelope {
            success: self.is_success(),
            data: self.raw_content(),
            error: self.reason(),
            kind: self.kind(),
        }
        .serialize(serializer)
    }
}
