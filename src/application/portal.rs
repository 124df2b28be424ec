// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::sample_jobs::illustrative_jobs;
use crate::config::settings::Settings;
use crate::domain::models::fetch_result::{FetchFailure, FetchResult};
use crate::domain::models::job_posting::JobPosting;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use crate::domain::services::credential_service::CredentialStore;
use crate::domain::services::job_parser::{JobParser, NoopJobParser};
use crate::domain::services::scrape_gateway::ScrapeGateway;
use crate::engines::traits::ScrapeProvider;

/// 提交API密钥的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySubmission {
    /// 输入为空，未发起校验
    Empty,
    /// 提供商未接受该密钥，未保存
    Rejected,
    /// 校验通过并已保存
    Saved,
}

/// 职位门户服务
///
/// 调用方只能通过这里的操作访问凭据和抓取网关：
/// `save_key`、`has_key`、`validate_key`、`fetch_site`，
/// 以及基于它们的 `submit_key` 和 `refresh_jobs` 流程。
pub struct JobPortal {
    credentials: Arc<CredentialStore>,
    gateway: ScrapeGateway,
    parser: Arc<dyn JobParser>,
    source_url: String,
}

impl JobPortal {
    pub fn new(
        credentials: Arc<CredentialStore>,
        gateway: ScrapeGateway,
        parser: Arc<dyn JobParser>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            gateway,
            parser,
            source_url: source_url.into(),
        }
    }

    /// 根据配置组装门户，使用默认的空解析器
    pub fn from_settings(
        settings: &Settings,
        storage: Arc<dyn StorageRepository>,
        provider: Arc<dyn ScrapeProvider>,
    ) -> Self {
        let credentials = Arc::new(CredentialStore::new(
            storage,
            provider.clone(),
            settings.storage.credential_key.as_str(),
            settings.provider.validation_url.as_str(),
        ));
        let gateway = ScrapeGateway::new(
            credentials.clone(),
            provider,
            settings.provider.wait_for_ms,
        );

        Self::new(
            credentials,
            gateway,
            Arc::new(NoopJobParser),
            settings.portal.source_url.as_str(),
        )
    }

    /// 替换职位解析器
    pub fn with_parser(mut self, parser: Arc<dyn JobParser>) -> Self {
        self.parser = parser;
        self
    }

    pub async fn save_key(&self, key: &str) -> Result<(), StorageError> {
        self.credentials.save(key).await
    }

    pub async fn has_key(&self) -> bool {
        self.credentials.has_key().await
    }

    pub async fn validate_key(&self, key: &str) -> bool {
        self.credentials.validate(key).await
    }

    pub async fn fetch_site(&self, url: &str) -> FetchResult {
        self.gateway.fetch(url).await
    }

    /// 提交用户输入的API密钥：去除首尾空白，校验通过后才保存
    pub async fn submit_key(&self, input: &str) -> Result<KeySubmission, StorageError> {
        let key = input.trim();
        if key.is_empty() {
            return Ok(KeySubmission::Empty);
        }

        if !self.validate_key(key).await {
            return Ok(KeySubmission::Rejected);
        }

        self.save_key(key).await?;
        Ok(KeySubmission::Saved)
    }

    /// 刷新职位列表
    ///
    /// 抓取配置的数据源站点；解析器没有产出职位时回退到示例数据集。
    /// 抓取失败时原样返回失败。
    pub async fn refresh_jobs(&self) -> Result<Vec<JobPosting>, FetchFailure> {
        let raw = self.fetch_site(&self.source_url).await.into_result()?;

        let jobs = self.parser.parse(&raw);
        if jobs.is_empty() {
            warn!(
                url = %self.source_url,
                "Parser produced no postings, using illustrative dataset"
            );
            return Ok(illustrative_jobs());
        }

        info!(url = %self.source_url, count = jobs.len(), "Parsed job postings");
        Ok(jobs)
    }
}
