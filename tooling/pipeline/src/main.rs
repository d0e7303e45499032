use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use pipeline::config::PipelineConfig;
use pipeline::pipeline::Pipeline;
use pipeline::runner::ShellStageRunner;
use pipeline::stage::{PipelineOutcome, Stage, StageStatus};

#[derive(Parser)]
#[command(name = "pipeline")]
#[command(version, about = "Lint, test and deploy the sales API and dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline for a pushed branch
    Run {
        /// Branch that was pushed (default: GITHUB_REF_NAME)
        #[arg(short, long)]
        branch: Option<String>,

        /// Exit non-zero when either deploy failed
        #[arg(long)]
        require_deploys: bool,
    },
    /// Print the stage graph
    Plan,
}

fn print_plan(config: &PipelineConfig) {
    println!("trigger: push to {}", config.trigger_branch);
    for stage in Stage::ALL {
        let note = match stage {
            Stage::Lint => " (advisory)",
            Stage::DeployApi | Stage::DeployDashboard => " (parallel, needs test)",
            _ => "",
        };
        println!("  {}{}", stage, note);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let cli = Cli::parse();
    let config = PipelineConfig::from_env();

    match cli.command {
        Commands::Plan => {
            print_plan(&config);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run {
            branch,
            require_deploys,
        } => {
            let branch = branch
                .or_else(|| env::var("GITHUB_REF_NAME").ok())
                .context("no branch given; pass --branch or set GITHUB_REF_NAME")?;
            let workdir = env::current_dir().context("cannot resolve working directory")?;

            let pipeline = Pipeline::new(
                Arc::new(ShellStageRunner::new(config.clone(), workdir)),
                config.trigger_branch,
            );
            let report = pipeline.run(&branch).await;

            for result in &report.stages {
                let status = match &result.status {
                    StageStatus::Passed => "passed".to_string(),
                    StageStatus::Failed(reason) => format!("failed: {reason}"),
                    StageStatus::Suppressed(reason) => format!("failed (ignored): {reason}"),
                    StageStatus::Skipped => "skipped".to_string(),
                };
                println!("{:<22} {}", result.stage.name(), status);
            }

            let deploys_passed = report.all_deploys_passed();
            let code = match report.outcome {
                PipelineOutcome::NotTriggered { branch } => {
                    println!("not triggered by branch {branch}");
                    ExitCode::SUCCESS
                }
                PipelineOutcome::Failed { stage } => {
                    println!("pipeline failed at {stage}");
                    ExitCode::FAILURE
                }
                PipelineOutcome::Succeeded if require_deploys && !deploys_passed => {
                    println!("pipeline finished with a failed deploy");
                    ExitCode::FAILURE
                }
                PipelineOutcome::Succeeded => ExitCode::SUCCESS,
            };
            Ok(code)
        }
    }
}
