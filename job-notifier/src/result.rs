use serde::Serialize;

use std::sync::Arc;

use crate::{error::BoxError, metadata::JobMetadata};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobOutcome {
    Success,
    Failure,
    Unknown,
}

/// Terminal outcome of a single job run.
#[derive(Clone, Debug)]
pub struct JobResult {
    metadata: JobMetadata,
    outcome: JobOutcome,
    message: Option<String>,
    payload: Option<serde_json::Value>,
    error: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl JobResult {
    fn new(metadata: JobMetadata, outcome: JobOutcome) -> Self {
        Self {
            metadata,
            outcome,
            message: None,
            payload: None,
            error: None,
        }
    }

    pub fn success(metadata: JobMetadata) -> Self {
        Self::new(metadata, JobOutcome::Success)
    }

    pub fn success_with_message(metadata: JobMetadata, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(metadata)
        }
    }

    pub fn success_with_payload(
        metadata: JobMetadata,
        payload: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            payload: Some(payload.into()),
            ..Self::success(metadata)
        }
    }

    pub fn failure(metadata: JobMetadata) -> Self {
        Self::new(metadata, JobOutcome::Failure)
    }

    pub fn failure_with_message(metadata: JobMetadata, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::failure(metadata)
        }
    }

    pub fn failure_with_error(metadata: JobMetadata, error: impl Into<BoxError>) -> Self {
        let error: BoxError = error.into();
        Self {
            message: Some(error.to_string()),
            error: Some(Arc::from(error)),
            ..Self::failure(metadata)
        }
    }

    pub fn unknown(metadata: JobMetadata) -> Self {
        Self::new(metadata, JobOutcome::Unknown)
    }

    pub fn unknown_with_error(metadata: JobMetadata, error: impl Into<BoxError>) -> Self {
        let error: BoxError = error.into();
        Self {
            message: Some(error.to_string()),
            error: Some(Arc::from(error)),
            ..Self::unknown(metadata)
        }
    }

    pub fn metadata(&self) -> &JobMetadata {
        &self.metadata
    }

    pub fn job_name(&self) -> &str {
        self.metadata.name()
    }

    pub fn outcome(&self) -> JobOutcome {
        self.outcome
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    pub fn error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.outcome == JobOutcome::Success
    }

    pub fn is_failure(&self) -> bool {
        self.outcome == JobOutcome::Failure
    }

    pub fn is_unknown(&self) -> bool {
        self.outcome == JobOutcome::Unknown
    }
}

impl std::fmt::Display for JobResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.outcome, self.metadata.name())?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}
