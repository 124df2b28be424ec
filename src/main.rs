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

use clap::Parser;
use jobportal::application::portal::JobPortal;
use jobportal::cli::{self, Cli};
use jobportal::config::settings::Settings;
use jobportal::engines::firecrawl_engine::FirecrawlEngine;
use jobportal::engines::traits::ScrapeProvider;
use jobportal::infrastructure::storage::create_storage_repository;
use jobportal::utils::telemetry;
use std::sync::Arc;
use tracing::debug;

/// 主函数
///
/// 初始化日志与配置，组装门户服务后执行命令行子命令
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration
    let settings = Settings::new()?;
    debug!(provider = %settings.provider.base_url, "Configuration loaded");

    // 3. Wire storage and provider
    let storage = create_storage_repository(&settings.storage)?;
    let provider: Arc<dyn ScrapeProvider> = Arc::new(FirecrawlEngine::new(&settings.provider)?);
    debug!(provider = provider.name(), storage = %settings.storage.storage_type, "Components initialized");

    let portal = JobPortal::from_settings(&settings, storage, provider);

    cli::execute(cli, &portal).await
}
