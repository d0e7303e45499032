use std::fmt;

/// One step of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Checkout,
    InstallDependencies,
    Lint,
    Test,
    DeployApi,
    DeployDashboard,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Checkout,
        Stage::InstallDependencies,
        Stage::Lint,
        Stage::Test,
        Stage::DeployApi,
        Stage::DeployDashboard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Checkout => "checkout",
            Stage::InstallDependencies => "install_dependencies",
            Stage::Lint => "lint",
            Stage::Test => "test",
            Stage::DeployApi => "deploy_api",
            Stage::DeployDashboard => "deploy_dashboard",
        }
    }

    pub fn is_deploy(&self) -> bool {
        matches!(self, Stage::DeployApi | Stage::DeployDashboard)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageStatus {
    Passed,
    Failed(String),
    /// Failed, but the failure does not stop the pipeline.
    Suppressed(String),
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageResult {
    pub stage: Stage,
    pub status: StageStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The pushed branch is not the trigger branch; nothing ran.
    NotTriggered { branch: String },
    /// Halted at `stage`; no deploy was attempted.
    Failed { stage: Stage },
    /// Both deploys were attempted. Check the report to see whether they landed.
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub outcome: PipelineOutcome,
    pub stages: Vec<StageResult>,
}

impl PipelineReport {
    pub fn status_of(&self, stage: Stage) -> Option<&StageStatus> {
        self.stages
            .iter()
            .find(|result| result.stage == stage)
            .map(|result| &result.status)
    }

    pub fn all_deploys_passed(&self) -> bool {
        [Stage::DeployApi, Stage::DeployDashboard]
            .iter()
            .all(|stage| self.status_of(*stage) == Some(&StageStatus::Passed))
    }
}
