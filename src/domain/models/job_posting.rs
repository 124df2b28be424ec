// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// 截止日期临近的天数阈值
const DEADLINE_NEAR_DAYS: i64 = 7;

/// 职位状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// 正在接受报名
    Active,
    /// 即将开放
    Upcoming,
    /// 已过期
    Expired,
}

impl JobStatus {
    /// 展示用的状态标签
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Active => "Apply Now",
            JobStatus::Upcoming => "Coming Soon",
            JobStatus::Expired => "Expired",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Active => "active",
            JobStatus::Upcoming => "upcoming",
            JobStatus::Expired => "expired",
        };
        f.write_str(s)
    }
}

/// 政府职位招聘信息
///
/// 由解析器从抓取内容中产生；目前只来自示例数据集
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// 职位标题
    pub title: String,
    /// 招聘机构
    pub organization: String,
    /// 工作地点
    pub location: String,
    /// 报名截止日期
    pub deadline: NaiveDate,
    /// 招聘人数
    pub post_count: u32,
    /// 学历要求
    pub qualification: String,
    /// 官方链接
    pub link: Url,
    /// 状态
    pub status: JobStatus,
}

impl JobPosting {
    /// 距截止日期的天数，已过期时为负数
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    /// 截止日期是否在未来七天内（不含当天）
    pub fn is_deadline_near(&self, today: NaiveDate) -> bool {
        let days = self.days_left(today);
        days > 0 && days <= DEADLINE_NEAR_DAYS
    }

    /// 截止日期的展示文本
    pub fn deadline_label(&self, today: NaiveDate) -> String {
        match self.days_left(today) {
            d if d < 0 => "Expired".to_string(),
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            d if d <= DEADLINE_NEAR_DAYS => format!("{} days left", d),
            _ => self.deadline.format("%-d %b %Y").to_string(),
        }
    }

    /// 标题、机构或地点是否包含搜索词（不区分大小写）
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.organization.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
    }
}

/// 按搜索词过滤职位，空搜索词返回全部；搜索词按原样匹配，不去除空白
pub fn filter_jobs<'a>(jobs: &'a [JobPosting], term: &str) -> Vec<&'a JobPosting> {
    if term.is_empty() {
        return jobs.iter().collect();
    }
    jobs.iter().filter(|job| job.matches(term)).collect()
}
