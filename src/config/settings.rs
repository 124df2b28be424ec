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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含抓取服务提供商、凭据存储和门户数据源等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 抓取服务提供商配置
    pub provider: ProviderSettings,
    /// 凭据存储配置
    pub storage: StorageSettings,
    /// 门户配置
    pub portal: PortalSettings,
}

/// 抓取服务提供商配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    /// 提供商API基础地址
    pub base_url: String,
    /// 校验API密钥时试抓取的参考URL
    pub validation_url: String,
    /// 提取前等待页面渲染的时间（毫秒）
    pub wait_for_ms: u64,
    /// HTTP传输层超时时间（秒）
    pub timeout_secs: u64,
}

/// 凭据存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 存储类型 (local, memory)
    pub storage_type: String,
    /// 本地存储路径 (当 type=local 时使用)
    pub local_path: Option<String>,
    /// 保存API密钥所用的逻辑键名
    pub credential_key: String,
}

/// 门户配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PortalSettings {
    /// 刷新职位列表时抓取的站点
    pub source_url: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Provider defaults
            .set_default("provider.base_url", "https://api.firecrawl.dev")?
            .set_default("provider.validation_url", "https://example.com")?
            .set_default("provider.wait_for_ms", 3000)?
            .set_default("provider.timeout_secs", 60)?
            // Storage defaults
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_path", "./storage")?
            .set_default("storage.credential_key", "firecrawl_api_key")?
            // Portal defaults
            .set_default("portal.source_url", "https://sarkariwallahjob.com/")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBPORTAL").separator("__"));

        builder.build()?.try_deserialize()
    }
}
