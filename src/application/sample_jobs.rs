// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use url::Url;

use crate::domain::models::job_posting::{JobPosting, JobStatus};

struct SampleJob {
    title: &'static str,
    organization: &'static str,
    location: &'static str,
    deadline: (i32, u32, u32),
    post_count: u32,
    qualification: &'static str,
    link: &'static str,
    status: JobStatus,
}

const SAMPLE_JOBS: &[SampleJob] = &[
    SampleJob {
        title: "Staff Selection Commission (SSC) CGL 2024",
        organization: "Staff Selection Commission",
        location: "All India",
        deadline: (2024, 7, 15),
        post_count: 17727,
        qualification: "Bachelor's Degree",
        link: "https://ssc.nic.in",
        status: JobStatus::Active,
    },
    SampleJob {
        title: "Railway Recruitment Board (RRB) NTPC 2024",
        organization: "Railway Recruitment Board",
        location: "All India",
        deadline: (2024, 8, 20),
        post_count: 35281,
        qualification: "12th Pass/Graduate",
        link: "https://rrbcdg.gov.in",
        status: JobStatus::Active,
    },
    SampleJob {
        title: "IBPS PO Recruitment 2024",
        organization: "Institute of Banking Personnel Selection",
        location: "All India",
        deadline: (2024, 7, 30),
        post_count: 4135,
        qualification: "Bachelor's Degree",
        link: "https://ibps.in",
        status: JobStatus::Active,
    },
    SampleJob {
        title: "UPSC Civil Services Exam 2024",
        organization: "Union Public Service Commission",
        location: "All India",
        deadline: (2024, 6, 30),
        post_count: 1105,
        qualification: "Bachelor's Degree",
        link: "https://upsc.gov.in",
        status: JobStatus::Upcoming,
    },
    SampleJob {
        title: "Delhi Police Constable Recruitment 2024",
        organization: "Delhi Police",
        location: "Delhi",
        deadline: (2024, 8, 15),
        post_count: 25271,
        qualification: "12th Pass",
        link: "https://delhipolice.nic.in",
        status: JobStatus::Active,
    },
];

/// 示例职位数据集
///
/// 解析器没有产出职位时门户展示这些数据
pub fn illustrative_jobs() -> Vec<JobPosting> {
    SAMPLE_JOBS
        .iter()
        .filter_map(|job| {
            let (y, m, d) = job.deadline;
            Some(JobPosting {
                title: job.title.to_string(),
                organization: job.organization.to_string(),
                location: job.location.to_string(),
                deadline: NaiveDate::from_ymd_opt(y, m, d)?,
                post_count: job.post_count,
                qualification: job.qualification.to_string(),
                link: Url::parse(job.link).ok()?,
                status: job.status,
            })
        })
        .collect()
}
