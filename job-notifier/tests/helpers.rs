#![allow(dead_code)]
use job_notifier::{error::BoxError, *};

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

#[derive(thiserror::Error, Debug)]
#[error("IllegalState: {0}")]
pub struct IllegalState(pub String);

#[derive(Default)]
pub struct RecordingReporter {
    faults: Mutex<Vec<(String, NotificationPhase, String)>>,
}

impl RecordingReporter {
    pub fn faults(&self) -> Vec<(String, NotificationPhase, String)> {
        self.faults.lock().unwrap().clone()
    }
}

impl FaultReporter for RecordingReporter {
    fn report(&self, fault: &ObserverFault) {
        self.faults.lock().unwrap().push((
            fault.job_name.clone(),
            fault.phase,
            fault.error.to_string(),
        ));
    }
}

pub fn executor_with_recorder() -> (JobExecutor, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let executor = JobExecutor::with_reporter(JobExecutorConfig::default(), reporter.clone());
    (executor, reporter)
}

pub struct FnJob<F> {
    metadata: JobMetadata,
    run: F,
}

impl<F> FnJob<F>
where
    F: Fn(&JobParameters) -> Result<Option<JobResult>, BoxError> + Send + Sync,
{
    pub fn new(name: &str, run: F) -> Self {
        Self {
            metadata: JobMetadata::new(name).unwrap(),
            run,
        }
    }
}

impl<F> Job for FnJob<F>
where
    F: Fn(&JobParameters) -> Result<Option<JobResult>, BoxError> + Send + Sync,
{
    fn metadata(&self) -> &JobMetadata {
        &self.metadata
    }

    fn run(&self, parameters: &JobParameters) -> Result<Option<JobResult>, BoxError> {
        (self.run)(parameters)
    }
}

/// Monotonic tick source shared by the jobs of one test.
#[derive(Clone, Default)]
pub struct TickClock(Arc<AtomicU64>);

impl TickClock {
    pub fn tick(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

pub struct ExecutableAtMostOnceJob {
    metadata: JobMetadata,
    clock: TickClock,
    executed: AtomicBool,
    started_at: AtomicU64,
    finished_at: AtomicU64,
    params: Mutex<Option<JobParameters>>,
}

impl ExecutableAtMostOnceJob {
    pub fn new(name: &str, clock: &TickClock) -> Self {
        Self {
            metadata: JobMetadata::new(name).unwrap(),
            clock: clock.clone(),
            executed: AtomicBool::new(false),
            started_at: AtomicU64::new(0),
            finished_at: AtomicU64::new(0),
            params: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    pub fn is_executed(&self) -> bool {
        self.executed.load(Ordering::SeqCst)
    }

    pub fn started_at(&self) -> u64 {
        self.started_at.load(Ordering::SeqCst)
    }

    pub fn finished_at(&self) -> u64 {
        self.finished_at.load(Ordering::SeqCst)
    }

    pub fn params(&self) -> Option<JobParameters> {
        self.params.lock().unwrap().clone()
    }
}

impl Job for ExecutableAtMostOnceJob {
    fn metadata(&self) -> &JobMetadata {
        &self.metadata
    }

    fn run(&self, parameters: &JobParameters) -> Result<Option<JobResult>, BoxError> {
        if self.executed.swap(true, Ordering::SeqCst) {
            return Err(IllegalState(format!("job '{}' executed twice", self.name())).into());
        }
        self.started_at.store(self.clock.tick(), Ordering::SeqCst);
        *self.params.lock().unwrap() = Some(parameters.clone());
        self.finished_at.store(self.clock.tick(), Ordering::SeqCst);
        Ok(Some(JobResult::success(self.metadata.clone())))
    }
}

pub fn execute_jobs(
    executor: &JobExecutor,
    jobs: &[&ExecutableAtMostOnceJob],
    parameters: &JobParameters,
    listeners: &[Arc<dyn JobListener>],
) -> Vec<JobResult> {
    jobs.iter()
        .map(|job| executor.run_and_notify(*job, parameters, listeners))
        .collect()
}

pub fn assert_executed(jobs: &[&ExecutableAtMostOnceJob]) {
    for job in jobs {
        assert!(job.is_executed(), "Job was not executed: {}", job.name());
    }
}

pub fn assert_executed_with_params(job: &ExecutableAtMostOnceJob, expected: &JobParameters) {
    assert_executed(&[job]);
    assert_eq!(job.params().as_ref(), Some(expected));
}

pub fn assert_executed_in_order(jobs: &[&ExecutableAtMostOnceJob]) {
    if jobs.is_empty() {
        return;
    }
    assert_executed(jobs);

    let mut sorted = jobs.to_vec();
    sorted.sort_by_key(|job| job.started_at());
    for pair in sorted.windows(2) {
        assert_ne!(
            pair[0].started_at(),
            pair[1].started_at(),
            "Jobs started at the same time: {}",
            collect_names(pair)
        );
        assert!(
            pair[0].finished_at() < pair[1].started_at(),
            "Execution of jobs overlapped: {}",
            collect_names(pair)
        );
    }
    assert_eq!(
        collect_names(jobs),
        collect_names(&sorted),
        "Expected: {}, actual: {}",
        collect_names(jobs),
        collect_names(&sorted)
    );
}

fn collect_names(jobs: &[&ExecutableAtMostOnceJob]) -> String {
    jobs.iter()
        .map(|job| job.name())
        .collect::<Vec<_>>()
        .join(",")
}
