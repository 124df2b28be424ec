// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::application::portal::{JobPortal, KeySubmission};
use crate::domain::models::job_posting::{filter_jobs, JobPosting};

/// Government job portal CLI
#[derive(Parser, Debug)]
#[command(name = "jobportal")]
#[command(version)]
#[command(about = "Scrape and browse government job postings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the scraping provider API key
    Key {
        #[command(subcommand)]
        action: KeyCommand,
    },

    /// Scrape a single site and print the raw provider response
    Fetch {
        /// Target URL
        url: String,
    },

    /// Refresh and list job postings
    Jobs {
        /// Only show postings whose title, organization or location matches
        #[arg(long, short)]
        search: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum KeyCommand {
    /// Validate and store an API key
    Set {
        /// Provider API key (fc-...)
        #[arg(env = "FIRECRAWL_API_KEY", hide_env_values = true)]
        key: String,
    },

    /// Report whether an API key is stored
    Status,
}

/// Execute CLI command
pub async fn execute(cli: Cli, portal: &JobPortal) -> Result<()> {
    match cli.command {
        Commands::Key { action } => match action {
            KeyCommand::Set { key } => set_key(portal, &key).await,
            KeyCommand::Status => {
                if portal.has_key().await {
                    println!("API key: stored");
                } else {
                    println!("API key: not set (run `jobportal key set <KEY>`)");
                }
                Ok(())
            }
        },
        Commands::Fetch { url } => {
            let result = portal.fetch_site(&url).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.is_success() {
                bail!("scrape failed");
            }
            Ok(())
        }
        Commands::Jobs { search } => list_jobs(portal, search.as_deref().unwrap_or("")).await,
    }
}

async fn set_key(portal: &JobPortal, key: &str) -> Result<()> {
    match portal.submit_key(key).await? {
        KeySubmission::Empty => bail!("Please enter your Firecrawl API key"),
        KeySubmission::Rejected => {
            bail!("Invalid API key: please check your API key and try again")
        }
        KeySubmission::Saved => {
            println!("API key saved successfully");
            Ok(())
        }
    }
}

async fn list_jobs(portal: &JobPortal, search: &str) -> Result<()> {
    if !portal.has_key().await {
        bail!("No API key stored; run `jobportal key set <KEY>` first");
    }

    let jobs = portal.refresh_jobs().await?;
    println!("Found {} government job postings", jobs.len());

    let today = Local::now().date_naive();
    let matching = filter_jobs(&jobs, search);
    if matching.is_empty() {
        println!("No postings match {:?}", search);
    }
    for job in matching {
        println!("{}", render_job(job, today));
    }
    Ok(())
}

fn render_job(job: &JobPosting, today: NaiveDate) -> String {
    let urgent = if job.is_deadline_near(today) {
        " [Urgent]"
    } else {
        ""
    };
    format!(
        "{title} [{status}]\n  {org} | {location} | {posts} Posts | {qualification}\n  Deadline: {deadline}{urgent}\n  {link}",
        title = job.title,
        status = job.status.label(),
        org = job.organization,
        location = job.location,
        posts = job.post_count,
        qualification = job.qualification,
        deadline = job.deadline_label(today),
        urgent = urgent,
        link = job.link,
    )
}
