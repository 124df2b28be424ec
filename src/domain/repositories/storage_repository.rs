// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 无效的存储键
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
    /// 存储错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// 存储仓库特质
///
/// 定义持久化键值存储的访问接口，值为字符串
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 使用指定键保存值，覆盖已有值
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// 根据键检索值
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
}
