//! # Storylight
//!
//! Lighthouse audits for Storybook stories: HTTP API and command line runner.

mod bootstrap;
mod commands;
mod di;
mod server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use storylight_domain::CliOverrides;

use bootstrap::{init_logging, load_config, log_config_summary};
use commands::audit::AuditArgs;
use commands::parse_thresholds;
use commands::story::StoryArgs;
use di::{Adapters, UseCases};

#[derive(Parser)]
#[command(name = "storylight")]
#[command(version)]
#[command(about = "Lighthouse audits for Storybook stories")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Audit a URL and check it against the default thresholds
    Audit {
        url: String,

        /// Use the mobile profile instead of desktop
        #[arg(long, conflicts_with = "dual")]
        mobile: bool,

        /// Audit desktop and mobile against one browser
        #[arg(long)]
        dual: bool,

        /// Threshold overrides as JSON, e.g. '{"performance": 80}'
        #[arg(long)]
        thresholds: Option<String>,
    },

    /// Audit a story, reusing the stored result while its source file is unchanged
    Story {
        /// Story source file whose content hash guards the stored result
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        story_id: String,

        url: String,

        /// Threshold overrides as JSON, e.g. '{"performance": 80}'
        #[arg(long)]
        thresholds: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (port, bind_address) = match &cli.command {
        Command::Serve { port, bind } => (*port, bind.clone()),
        _ => (None, None),
    };

    let config = load_config(
        cli.config.as_deref(),
        CliOverrides {
            port,
            bind_address,
            log_level: cli.log_level.clone(),
        },
    )?;

    init_logging(&config);
    log_config_summary(&config, cli.config.as_deref());

    let use_cases = UseCases::new(Adapters::new(&config));

    match cli.command {
        Command::Serve { .. } => {
            commands::serve::run(&config, &use_cases).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Audit {
            url,
            mobile,
            dual,
            thresholds,
        } => {
            let args = AuditArgs {
                url,
                mobile,
                dual,
                thresholds: parse_thresholds(thresholds.as_deref())?,
            };
            commands::audit::run(&use_cases, args).await
        }
        Command::Story {
            file,
            story_id,
            url,
            thresholds,
        } => {
            let args = StoryArgs {
                file,
                story_id,
                url,
                thresholds: parse_thresholds(thresholds.as_deref())?,
            };
            commands::story::run(&use_cases, args).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_story_arguments() {
        let cli = Cli::parse_from([
            "storylight",
            "--log-level",
            "debug",
            "story",
            "--file",
            "src/Button.stories.ts",
            "--story-id",
            "button--primary",
            "http://localhost:6006/iframe.html?id=button--primary",
        ]);

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Story { file, story_id, .. } => {
                assert_eq!(file, PathBuf::from("src/Button.stories.ts"));
                assert_eq!(story_id, "button--primary");
            }
            _ => panic!("expected story command"),
        }
    }

    #[test]
    fn test_mobile_conflicts_with_dual() {
        let parsed = Cli::try_parse_from([
            "storylight",
            "audit",
            "--mobile",
            "--dual",
            "http://localhost:6006/",
        ]);
        assert!(parsed.is_err());
    }
}
