// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 确保未提供配置文件时使用的默认值与提供商约定一致

#[cfg(test)]
mod tests {
    use jobportal::config::settings::Settings;

    #[test]
    fn test_defaults_without_config_files() {
        let settings = match Settings::new() {
            Ok(settings) => settings,
            Err(e) => panic!("✗ Failed to load configuration: {}", e),
        };

        assert_eq!(settings.provider.base_url, "https://api.firecrawl.dev");
        assert_eq!(settings.provider.validation_url, "https://example.com");
        assert_eq!(settings.provider.wait_for_ms, 3000);
        assert_eq!(settings.storage.storage_type, "local");
        assert_eq!(settings.storage.credential_key, "firecrawl_api_key");
        assert_eq!(settings.portal.source_url, "https://sarkariwallahjob.com/");
    }
}
