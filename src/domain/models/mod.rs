// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 抓取结果（fetch_result）：一次抓取尝试的归一化成功/失败结果
/// - 职位信息（job_posting）：门户展示的政府招聘信息
pub mod fetch_result;
pub mod job_posting;
