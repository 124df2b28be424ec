// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 存储模块
///
/// 提供本地文件系统和内存两种键值存储实现
pub mod storage;
