// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use tracing::debug;

use crate::domain::models::job_posting::JobPosting;

/// 职位解析器特质
///
/// 把抓取网关返回的原始内容转换为职位列表。网关本身不解释内容，
/// 具体站点的解析逻辑通过实现该特质接入。
pub trait JobParser: Send + Sync {
    fn parse(&self, raw_content: &Value) -> Vec<JobPosting>;
}

/// 默认解析器，总是返回空列表
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopJobParser;

impl JobParser for NoopJobParser {
    fn parse(&self, raw_content: &Value) -> Vec<JobPosting> {
        debug!(
            has_markdown = raw_content.pointer("/data/markdown").is_some(),
            "No job parser configured, returning no postings"
        );
        Vec::new()
    }
}

impl<F> JobParser for F
where
    F: Fn(&Value) -> Vec<JobPosting> + Send + Sync,
{
    fn parse(&self, raw_content: &Value) -> Vec<JobPosting> {
        self(raw_content)
    }
}
