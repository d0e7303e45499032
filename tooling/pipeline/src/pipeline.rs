use std::sync::Arc;

use crate::runner::StageRunner;
use crate::stage::{PipelineOutcome, PipelineReport, Stage, StageResult, StageStatus};

/// `checkout -> install_dependencies -> lint -> test -> (deploy_api || deploy_dashboard)`
///
/// Lint is advisory. Any other failure before the deploys halts the run. The two
/// deploys start together once tests pass and neither waits on nor cancels the other.
pub struct Pipeline {
    runner: Arc<dyn StageRunner>,
    trigger_branch: String,
}

impl Pipeline {
    pub fn new(runner: Arc<dyn StageRunner>, trigger_branch: impl Into<String>) -> Self {
        Self {
            runner,
            trigger_branch: trigger_branch.into(),
        }
    }

    pub async fn run(&self, branch: &str) -> PipelineReport {
        if branch != self.trigger_branch {
            tracing::info!(
                branch,
                trigger = %self.trigger_branch,
                "Branch does not trigger the pipeline"
            );
            return PipelineReport {
                outcome: PipelineOutcome::NotTriggered {
                    branch: branch.to_string(),
                },
                stages: Vec::new(),
            };
        }

        let mut stages = Vec::new();

        for stage in [Stage::Checkout, Stage::InstallDependencies, Stage::Lint, Stage::Test] {
            match self.runner.run(stage).await {
                Ok(()) => stages.push(passed(stage)),
                Err(e) if stage == Stage::Lint => {
                    tracing::warn!(%stage, "Lint failed, continuing: {e}");
                    stages.push(StageResult {
                        stage,
                        status: StageStatus::Suppressed(e.to_string()),
                    });
                }
                Err(e) => {
                    tracing::error!(%stage, "Stage failed, halting: {e}");
                    stages.push(StageResult {
                        stage,
                        status: StageStatus::Failed(e.to_string()),
                    });
                    stages.extend(
                        Stage::ALL
                            .into_iter()
                            .skip_while(|s| *s != stage)
                            .skip(1)
                            .map(|stage| StageResult {
                                stage,
                                status: StageStatus::Skipped,
                            }),
                    );
                    return PipelineReport {
                        outcome: PipelineOutcome::Failed { stage },
                        stages,
                    };
                }
            }
        }

        let (api, dashboard) = tokio::join!(
            self.runner.run(Stage::DeployApi),
            self.runner.run(Stage::DeployDashboard)
        );
        for (stage, result) in [(Stage::DeployApi, api), (Stage::DeployDashboard, dashboard)] {
            match result {
                Ok(()) => stages.push(passed(stage)),
                Err(e) => {
                    tracing::error!(%stage, "Deploy failed: {e}");
                    stages.push(StageResult {
                        stage,
                        status: StageStatus::Failed(e.to_string()),
                    });
                }
            }
        }

        PipelineReport {
            outcome: PipelineOutcome::Succeeded,
            stages,
        }
    }
}

fn passed(stage: Stage) -> StageResult {
    tracing::info!(%stage, "Stage passed");
    StageResult {
        stage,
        status: StageStatus::Passed,
    }
}
