// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 凭据存储（credential_service）：保存、读取和校验API密钥
/// - 抓取网关（scrape_gateway）：调用抓取服务并归一化结果
/// - 职位解析（job_parser）：从原始内容中提取职位的可插拔接口
pub mod credential_service;
pub mod job_parser;
pub mod scrape_gateway;
