// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobportal::application::portal::JobPortal;
use jobportal::config::settings::{PortalSettings, ProviderSettings, Settings, StorageSettings};
use jobportal::engines::firecrawl_engine::FirecrawlEngine;
use jobportal::infrastructure::storage::LocalStorage;
use std::sync::Arc;
use tempfile::TempDir;

pub const SOURCE_URL: &str = "https://sarkariwallahjob.com/";

/// 指向模拟提供商的测试配置
pub fn test_settings(provider_uri: &str, storage_dir: &TempDir) -> Settings {
    Settings {
        provider: ProviderSettings {
            base_url: provider_uri.to_string(),
            validation_url: "https://example.com".to_string(),
            wait_for_ms: 3000,
            timeout_secs: 5,
        },
        storage: StorageSettings {
            storage_type: "local".to_string(),
            local_path: Some(storage_dir.path().to_string_lossy().to_string()),
            credential_key: "firecrawl_api_key".to_string(),
        },
        portal: PortalSettings {
            source_url: SOURCE_URL.to_string(),
        },
    }
}

/// 使用本地文件存储和真实 HTTP 引擎组装门户
pub fn build_portal(settings: &Settings, storage_dir: &TempDir) -> JobPortal {
    let storage = Arc::new(LocalStorage::new(storage_dir.path()));
    let provider = Arc::new(FirecrawlEngine::new(&settings.provider).unwrap());
    JobPortal::from_settings(settings, storage, provider)
}
