use serde::Serialize;
use std::process::ExitCode;
use storylight_domain::{AuditOptions, AuditResult, FormFactor, ProfileOutcome, Thresholds};
use tracing::info;

use super::report::{print_json, ProfileReport};
use crate::di::UseCases;

pub struct AuditArgs {
    pub url: String,
    pub mobile: bool,
    pub dual: bool,
    pub thresholds: Thresholds,
}

#[derive(Serialize)]
struct DualReport {
    passed: bool,
    desktop: ProfileReport,
    mobile: ProfileReport,
}

fn judge(result: AuditResult, form_factor: FormFactor, overrides: &Thresholds) -> ProfileOutcome {
    ProfileOutcome::evaluate(
        result,
        Thresholds::for_form_factor(form_factor).merge(overrides),
    )
}

/// Caller options for a single run. The mobile profile is passed explicitly
/// so it replaces the desktop defaults and becomes part of the cache key.
pub fn options_for(form_factor: FormFactor) -> AuditOptions {
    match form_factor {
        FormFactor::Desktop => AuditOptions::new(),
        FormFactor::Mobile => AuditOptions::mobile(),
    }
}

/// Exit status 1 when any evaluated profile misses its thresholds.
pub async fn run(use_cases: &UseCases, args: AuditArgs) -> anyhow::Result<ExitCode> {
    let passed = if args.dual {
        let pair = use_cases
            .run_dual_audit
            .execute(&args.url, false)
            .await?;
        let desktop = judge(pair.desktop.result, FormFactor::Desktop, &args.thresholds);
        let mobile = judge(pair.mobile.result, FormFactor::Mobile, &args.thresholds);
        let report = DualReport {
            passed: desktop.passed && mobile.passed,
            desktop: ProfileReport::from(&desktop),
            mobile: ProfileReport::from(&mobile),
        };
        print_json(&report)?;
        report.passed
    } else {
        let form_factor = if args.mobile {
            FormFactor::Mobile
        } else {
            FormFactor::Desktop
        };
        let outcome = use_cases
            .run_audit
            .execute(&args.url, options_for(form_factor), false)
            .await?;
        let judged = judge(outcome.result, form_factor, &args.thresholds);
        print_json(&ProfileReport::from(&judged))?;
        judged.passed
    };

    info!(passed, "Audit finished");
    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storylight_domain::CacheKey;

    #[test]
    fn test_mobile_options_select_mobile_profile() {
        let mobile = options_for(FormFactor::Mobile);
        assert_eq!(AuditOptions::desktop().merged(&mobile), AuditOptions::mobile());
        assert_eq!(
            AuditOptions::desktop().merged(&options_for(FormFactor::Desktop)),
            AuditOptions::desktop()
        );
    }

    #[test]
    fn test_form_factors_use_distinct_cache_keys() {
        let url = "http://localhost:6006/iframe.html?id=button--primary";
        assert_ne!(
            CacheKey::for_audit(url, &options_for(FormFactor::Desktop)),
            CacheKey::for_audit(url, &options_for(FormFactor::Mobile))
        );
    }
}
