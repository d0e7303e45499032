use std::env;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::{
    HEROKU_API_APP_NAME, HEROKU_API_KEY, HEROKU_DASHBOARD_APP_NAME, PipelineConfig,
};
use crate::error::PipelineError;
use crate::stage::Stage;

#[async_trait]
pub trait StageRunner: Send + Sync {
    async fn run(&self, stage: Stage) -> Result<(), PipelineError>;
}

/// Fails when the Firebase configuration record is incomplete, naming every gap.
///
/// Tests build both services from the record, so they cannot pass without it.
pub fn preflight_test_secrets<F>(lookup: F) -> Result<(), PipelineError>
where
    F: Fn(&str) -> Option<String>,
{
    let missing = firebase::settings::missing_keys(lookup);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::MissingSecrets(missing))
    }
}

/// Runs each stage as `sh -lc <command>` in the workspace root.
pub struct ShellStageRunner {
    config: PipelineConfig,
    workdir: PathBuf,
}

impl ShellStageRunner {
    pub fn new(config: PipelineConfig, workdir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            workdir: workdir.into(),
        }
    }

    fn deploy_env(&self, stage: Stage) -> Result<Vec<(&'static str, String)>, PipelineError> {
        let heroku = &self.config.heroku;
        let app_key = match stage {
            Stage::DeployApi => HEROKU_API_APP_NAME,
            _ => HEROKU_DASHBOARD_APP_NAME,
        };

        match (heroku.api_key.clone(), heroku.app_name(stage)) {
            (Some(api_key), Some(app_name)) => Ok(vec![
                (HEROKU_API_KEY, api_key),
                ("HEROKU_APP_NAME", app_name.to_string()),
            ]),
            (api_key, app_name) => {
                let mut missing = Vec::new();
                if api_key.is_none() {
                    missing.push(HEROKU_API_KEY.to_string());
                }
                if app_name.is_none() {
                    missing.push(app_key.to_string());
                }
                Err(PipelineError::MissingSecrets(missing))
            }
        }
    }
}

#[async_trait]
impl StageRunner for ShellStageRunner {
    async fn run(&self, stage: Stage) -> Result<(), PipelineError> {
        if stage == Stage::Test {
            preflight_test_secrets(|key| env::var(key).ok())?;
        }

        let command_line = self.config.commands.for_stage(stage);
        let mut command = Command::new("sh");
        command
            .arg("-lc")
            .arg(command_line)
            .current_dir(&self.workdir);
        if stage.is_deploy() {
            command.envs(self.deploy_env(stage)?);
        }

        tracing::info!(%stage, command = command_line, "Running stage");
        let status = command.status().await.map_err(|e| PipelineError::Spawn {
            stage,
            reason: e.to_string(),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(PipelineError::CommandFailed {
                stage,
                code: status
                    .code()
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
            })
        }
    }
}
