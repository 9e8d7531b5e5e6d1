#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

//! Runs a single job and tells interested listeners about it.
//!
//! Listeners are notified before the job starts and may register completion
//! subscribers through a [`Registrar`]. Once the job finishes, with a result,
//! without one, or with an error, every subscriber receives the same
//! [`JobResult`]. A failing listener or subscriber is reported and skipped.

mod config;
mod executor;
mod fault;
mod metadata;
mod parameters;
mod registry;
mod result;
mod traits;

pub mod error;

pub use config::*;
pub use executor::*;
pub use fault::{FaultReporter, NotificationPhase, ObserverFault, TracingFaultReporter};
pub use metadata::*;
pub use parameters::*;
pub use registry::*;
pub use result::*;
pub use traits::*;
