use tracing::instrument;

use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use crate::{
    config::JobExecutorConfig,
    error::{panic_message, JobError},
    fault::{FaultBoundary, FaultReporter, NotificationPhase, TracingFaultReporter},
    parameters::JobParameters,
    registry::CompletionRegistry,
    result::JobResult,
    traits::{Job, JobListener},
};

enum Notification {
    Silent,
    Registry(CompletionRegistry),
}

#[derive(Clone)]
pub struct JobExecutor {
    config: JobExecutorConfig,
    reporter: Arc<dyn FaultReporter>,
}

impl Default for JobExecutor {
    fn default() -> Self {
        Self::new(JobExecutorConfig::default())
    }
}

impl JobExecutor {
    pub fn new(config: JobExecutorConfig) -> Self {
        Self::with_reporter(config, Arc::new(TracingFaultReporter))
    }

    pub fn with_reporter(config: JobExecutorConfig, reporter: Arc<dyn FaultReporter>) -> Self {
        Self { config, reporter }
    }

    /// Runs `job` once, notifying `listeners` before it starts and every
    /// subscriber they registered after it finishes. Never fails: job errors
    /// end up in the returned result and observer errors are reported.
    #[instrument(
        name = "job_notifier.run_and_notify",
        skip_all,
        fields(job_name = %job.metadata().name(), n_listeners = listeners.len(), n_subscribers, outcome)
    )]
    pub fn run_and_notify(
        &self,
        job: &dyn Job,
        parameters: &JobParameters,
        listeners: &[Arc<dyn JobListener>],
    ) -> JobResult {
        let span = tracing::Span::current();
        let job_name = job.metadata().name();
        let boundary =
            FaultBoundary::new(job_name, self.reporter.as_ref(), self.config.catch_panics);

        let notification = if listeners.is_empty() {
            Notification::Silent
        } else {
            let mut registry = CompletionRegistry::new();
            for listener in listeners {
                boundary.guard(NotificationPhase::JobStarted, || {
                    listener.on_job_started(job_name, parameters, &mut registry.registrar())
                });
            }
            span.record("n_subscribers", registry.len());
            Notification::Registry(registry)
        };

        let result = self.invoke(job, parameters);
        span.record("outcome", tracing::field::display(result.outcome()));

        if let Notification::Registry(registry) = notification {
            let failed = registry.deliver(&result, &boundary);
            if failed > 0 {
                tracing::warn!(failed, "some completion subscribers failed");
            }
        }
        result
    }

    fn invoke(&self, job: &dyn Job, parameters: &JobParameters) -> JobResult {
        let res = if self.config.catch_panics {
            panic::catch_unwind(AssertUnwindSafe(|| job.run(parameters))).unwrap_or_else(
                |payload| Err(JobError::JobPanicked(panic_message(payload.as_ref())).into()),
            )
        } else {
            job.run(parameters)
        };
        match res {
            Ok(Some(result)) => result,
            Ok(None) => JobResult::unknown(job.metadata().clone()),
            Err(e) => {
                tracing::debug!(error = %e, "job failed");
                JobResult::failure_with_error(job.metadata().clone(), e)
            }
        }
    }
}
