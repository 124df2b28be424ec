// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：抓取结果和职位信息
/// - 仓库接口（repositories）：凭据持久化抽象接口
/// - 服务（services）：凭据存储、抓取网关和职位解析
pub mod models;
pub mod repositories;
pub mod services;
