use crate::{
    error::BoxError,
    fault::{FaultBoundary, NotificationPhase},
    result::JobResult,
};

type Subscriber = Box<dyn FnOnce(&JobResult) -> Result<(), BoxError>>;

/// Collects completion subscribers for a single run.
///
/// Populated while listeners are notified of the start, then consumed by
/// [`CompletionRegistry::deliver`] once the job has finished.
#[derive(Default)]
pub struct CompletionRegistry {
    subscribers: Vec<Subscriber>,
}

impl CompletionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, subscriber: F)
    where
        F: FnOnce(&JobResult) -> Result<(), BoxError> + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn registrar(&mut self) -> Registrar<'_> {
        Registrar { registry: self }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Calls every subscriber in registration order. Returns the number of
    /// subscribers that failed.
    pub(crate) fn deliver(self, result: &JobResult, boundary: &FaultBoundary<'_>) -> usize {
        self.subscribers
            .into_iter()
            .map(|subscriber| boundary.guard(NotificationPhase::JobCompleted, || subscriber(result)))
            .filter(|delivered| !delivered)
            .count()
    }
}

/// Write-only view of a [`CompletionRegistry`] handed to listeners.
pub struct Registrar<'a> {
    registry: &'a mut CompletionRegistry,
}

impl Registrar<'_> {
    pub fn register<F>(&mut self, subscriber: F)
    where
        F: FnOnce(&JobResult) -> Result<(), BoxError> + 'static,
    {
        self.registry.register(subscriber);
    }
}
