use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("JobError - InvalidMetadata: {0}")]
    InvalidMetadata(String),
    #[error("JobError - JobPanicked: {0}")]
    JobPanicked(String),
    #[error("JobError - ObserverPanicked: {0}")]
    ObserverPanicked(String),
}

impl From<derive_builder::UninitializedFieldError> for JobError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        JobError::InvalidMetadata(e.to_string())
    }
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
