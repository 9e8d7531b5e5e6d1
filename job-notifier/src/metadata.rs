use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::JobError;

#[derive(Builder, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[builder(build_fn(error = "JobError", validate = "Self::validate"))]
pub struct JobMetadata {
    #[builder(setter(into))]
    name: String,
    #[builder(setter(into, strip_option), default)]
    description: Option<String>,
}

impl JobMetadata {
    pub fn builder() -> JobMetadataBuilder {
        JobMetadataBuilder::default()
    }

    pub fn new(name: impl Into<String>) -> Result<Self, JobError> {
        Self::builder().name(name).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl JobMetadataBuilder {
    fn validate(&self) -> Result<(), JobError> {
        match self.name.as_deref() {
            Some(name) if name.trim().is_empty() => Err(JobError::InvalidMetadata(
                "job name must not be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
