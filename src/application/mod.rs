// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// - 门户服务（portal）：调用方可使用的全部操作
/// - 示例数据（sample_jobs）：解析器缺位时展示的职位数据集
pub mod portal;
pub mod sample_jobs;
