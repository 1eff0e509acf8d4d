use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use storylight_application::use_cases::StoryAuditRequest;
use storylight_domain::Thresholds;
use tracing::{info, warn};

use super::report::{print_json, ProfileReport};
use crate::di::UseCases;

pub struct StoryArgs {
    pub file: PathBuf,
    pub story_id: String,
    pub url: String,
    pub thresholds: Thresholds,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoryReport {
    story_id: String,
    from_cache: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_to_execute: Option<f64>,
    desktop: ProfileReport,
    mobile: ProfileReport,
}

/// Exit status 1 when the desktop profile misses its thresholds.
pub async fn run(use_cases: &UseCases, args: StoryArgs) -> anyhow::Result<ExitCode> {
    let story_id = args.story_id.clone();
    let report = use_cases
        .audit_story
        .execute(StoryAuditRequest {
            source_file: args.file,
            story_id: args.story_id,
            url: args.url,
            thresholds: args.thresholds,
        })
        .await?;

    let passed = report.passed();
    if !report.result.mobile.passed {
        warn!(failures = ?report.result.mobile.failures, "Mobile thresholds not met");
    }

    print_json(&StoryReport {
        story_id,
        from_cache: report.from_cache,
        time_to_execute: report.time_to_execute,
        desktop: ProfileReport::from(&report.result.desktop),
        mobile: ProfileReport::from(&report.result.mobile),
    })?;

    info!(passed, from_cache = report.from_cache, "Story audit finished");
    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
