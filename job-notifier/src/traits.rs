use std::sync::Arc;

use crate::{
    error::BoxError, metadata::JobMetadata, parameters::JobParameters, registry::Registrar,
    result::JobResult,
};

pub trait Job: Send + Sync {
    fn metadata(&self) -> &JobMetadata;

    /// `Ok(None)` means the job finished without producing a result.
    fn run(&self, parameters: &JobParameters) -> Result<Option<JobResult>, BoxError>;
}

/// Observer told about a job before it runs.
///
/// A listener that wants the outcome registers a subscriber on the
/// [`Registrar`]; every subscriber is called once the job has finished.
pub trait JobListener: Send + Sync {
    fn on_job_started(
        &self,
        job_name: &str,
        parameters: &JobParameters,
        registrar: &mut Registrar<'_>,
    ) -> Result<(), BoxError>;
}

impl<F> JobListener for F
where
    F: Fn(&str, &JobParameters, &mut Registrar<'_>) -> Result<(), BoxError> + Send + Sync,
{
    fn on_job_started(
        &self,
        job_name: &str,
        parameters: &JobParameters,
        registrar: &mut Registrar<'_>,
    ) -> Result<(), BoxError> {
        self(job_name, parameters, registrar)
    }
}

pub fn listener_fn<F>(f: F) -> Arc<dyn JobListener>
where
    F: Fn(&str, &JobParameters, &mut Registrar<'_>) -> Result<(), BoxError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}
