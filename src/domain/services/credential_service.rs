// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::models::fetch_result::{FailureKind, FetchResult};
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use crate::domain::services::scrape_gateway::normalize_outcome;
use crate::engines::traits::{ExtractionRequest, ScrapeProvider};

/// 凭据存储
///
/// 持有唯一的抓取服务API密钥。存储句柄和提供商都由调用方注入，
/// 不存在进程级的全局状态。
///
/// 校验时不区分“密钥错误”和“网络不可达”，两者都视为无效；
/// 需要区分时使用 [`CredentialStore::trial`]。
pub struct CredentialStore {
    storage: Arc<dyn StorageRepository>,
    provider: Arc<dyn ScrapeProvider>,
    storage_key: String,
    validation_url: String,
}

impl CredentialStore {
    /// 创建凭据存储
    ///
    /// # 参数
    ///
    /// * `storage` - 持久化键值存储
    /// * `provider` - 用于校验密钥的抓取服务提供商
    /// * `storage_key` - 保存密钥所用的逻辑键名
    /// * `validation_url` - 校验时试抓取的参考URL
    pub fn new(
        storage: Arc<dyn StorageRepository>,
        provider: Arc<dyn ScrapeProvider>,
        storage_key: impl Into<String>,
        validation_url: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            provider,
            storage_key: storage_key.into(),
            validation_url: validation_url.into(),
        }
    }

    /// 保存API密钥，覆盖已有值
    pub async fn save(&self, key: &str) -> Result<(), StorageError> {
        self.storage.save(&self.storage_key, key).await?;
        info!(storage_key = %self.storage_key, "API key saved");
        Ok(())
    }

    /// 读取当前API密钥
    ///
    /// 存储读取失败或值为空时按未保存处理
    pub async fn get(&self) -> Option<String> {
        match self.storage.get(&self.storage_key).await {
            Ok(value) => value.filter(|key| !key.is_empty()),
            Err(e) => {
                warn!(storage_key = %self.storage_key, error = %e, "Failed to read API key");
                None
            }
        }
    }

    pub async fn has_key(&self) -> bool {
        self.get().await.is_some()
    }

    /// 用候选密钥试抓取参考URL，返回带失败类型的结果
    pub async fn trial(&self, key: &str) -> FetchResult {
        debug!(url = %self.validation_url, "Testing API key");
        let request = ExtractionRequest::trial(self.validation_url.as_str());

        match normalize_outcome(self.provider.scrape(key, &request).await) {
            FetchResult::Failure(mut failure) => {
                // Any provider-side refusal during the trial counts against the key
                if failure.kind == FailureKind::ProviderFailure {
                    failure.kind = FailureKind::InvalidCredential;
                }
                FetchResult::Failure(failure)
            }
            success => success,
        }
    }

    /// 校验API密钥是否被提供商接受
    ///
    /// 从不返回错误：任何提供商或传输异常都得到 `false`
    pub async fn validate(&self, key: &str) -> bool {
        let result = self.trial(key).await;
        match &result {
            FetchResult::Success(_) => info!("API key accepted by provider"),
            FetchResult::Failure(failure) => warn!(
                kind = %failure.kind,
                reason = %failure.reason,
                "API key validation failed"
            ),
        }
        result.is_success()
    }
}
