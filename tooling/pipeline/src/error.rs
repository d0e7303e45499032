use crate::stage::Stage;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("pipeline.spawn_failed: {stage}: {reason}")]
    Spawn { stage: Stage, reason: String },
    #[error("pipeline.command_failed: {stage} exited with {code}")]
    CommandFailed { stage: Stage, code: String },
    #[error("pipeline.missing_secrets: {}", .0.join(", "))]
    MissingSecrets(Vec<String>),
}
