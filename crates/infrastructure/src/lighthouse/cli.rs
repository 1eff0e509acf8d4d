use async_trait::async_trait;
use std::process::Stdio;
use storylight_application::ports::AuditEngine;
use storylight_domain::{AuditOptions, DomainError, LighthouseReport};
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use super::flags::option_flags;

/// Runs the `lighthouse` command line tool and parses its JSON report.
pub struct LighthouseCli {
    executable: String,
}

impl LighthouseCli {
    pub fn new(executable: String) -> Self {
        Self { executable }
    }

    /// Full argument list for one run, URL first.
    pub fn arguments(url: &str, port: u16, options: &AuditOptions) -> Vec<String> {
        let mut args = vec![
            url.to_string(),
            format!("--port={}", port),
            "--output=json".to_string(),
            "--output-path=stdout".to_string(),
            "--quiet".to_string(),
        ];
        args.extend(option_flags(options));
        args
    }
}

#[async_trait]
impl AuditEngine for LighthouseCli {
    #[instrument(skip(self, options))]
    async fn run(
        &self,
        url: &str,
        port: u16,
        options: &AuditOptions,
    ) -> Result<LighthouseReport, DomainError> {
        let args = Self::arguments(url, port, options);
        debug!(args = ?args, "Invoking Lighthouse");

        let output = Command::new(&self.executable)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                DomainError::AuditFailed(format!("Failed to start {}: {}", self.executable, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            warn!(status = %output.status, stderr = %stderr, "Lighthouse exited with an error");
            return Err(DomainError::AuditFailed(if stderr.is_empty() {
                format!("Lighthouse exited with {}", output.status)
            } else {
                format!("Lighthouse exited with {}: {}", output.status, stderr)
            }));
        }

        if output.stdout.is_empty() {
            return Err(DomainError::AuditFailed(
                "Lighthouse returned no results".to_string(),
            ));
        }

        LighthouseReport::from_json(&output.stdout)
    }
}
