use tracing::error;

use std::panic::{self, AssertUnwindSafe};

use crate::error::{panic_message, BoxError, JobError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationPhase {
    JobStarted,
    JobCompleted,
}

/// A listener or subscriber that failed while being notified.
#[derive(Debug)]
pub struct ObserverFault {
    pub job_name: String,
    pub phase: NotificationPhase,
    pub error: BoxError,
}

impl std::fmt::Display for ObserverFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.phase {
            NotificationPhase::JobStarted => {
                write!(f, "Error invoking job listener for job: {}", self.job_name)
            }
            NotificationPhase::JobCompleted => write!(
                f,
                "Error invoking completion callback for job: {}",
                self.job_name
            ),
        }
    }
}

pub trait FaultReporter: Send + Sync {
    fn report(&self, fault: &ObserverFault);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingFaultReporter;

impl FaultReporter for TracingFaultReporter {
    fn report(&self, fault: &ObserverFault) {
        error!(
            job_name = %fault.job_name,
            phase = %fault.phase,
            error = %fault.error,
            "{fault}"
        );
    }
}

pub(crate) struct FaultBoundary<'a> {
    job_name: &'a str,
    reporter: &'a dyn FaultReporter,
    catch_panics: bool,
}

impl<'a> FaultBoundary<'a> {
    pub(crate) fn new(
        job_name: &'a str,
        reporter: &'a dyn FaultReporter,
        catch_panics: bool,
    ) -> Self {
        Self {
            job_name,
            reporter,
            catch_panics,
        }
    }

    /// Runs one observer call. Failures are reported and swallowed.
    pub(crate) fn guard<F>(&self, phase: NotificationPhase, f: F) -> bool
    where
        F: FnOnce() -> Result<(), BoxError>,
    {
        let res = if self.catch_panics {
            panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
                Err(JobError::ObserverPanicked(panic_message(payload.as_ref())).into())
            })
        } else {
            f()
        };
        match res {
            Ok(()) => true,
            Err(error) => {
                self.reporter.report(&ObserverFault {
                    job_name: self.job_name.to_string(),
                    phase,
                    error,
                });
                false
            }
        }
    }
}
