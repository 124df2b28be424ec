// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 对外暴露的门户服务，组合凭据存储、抓取网关与职位解析
pub mod application;

/// 命令行模块
///
/// 定义 `jobportal` 二进制的子命令及其执行逻辑
pub mod cli;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 封装第三方抓取服务提供商的调用
pub mod engines;

/// 基础设施模块
///
/// 提供凭据的持久化存储实现
pub mod infrastructure;

/// 工具模块
///
/// 提供遥测等通用辅助功能
pub mod utils;
