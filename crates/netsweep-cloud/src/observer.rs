//! Step result observation
//!
//! The orchestrator reports the outcome of every remote call to an injected
//! observer instead of logging through global state. Callers pick the
//! instrumentation they want; [`TraceObserver`] routes outcomes to `tracing`.

use tracing::{debug, warn};

use crate::error::{CloudError, StepKind};

/// Receives the outcome of each remote step the orchestrator performs
pub trait StepObserver: Send + Sync {
    fn on_step(&self, operation: StepKind, resource: &str, error: Option<&CloudError>);
}

/// Observer that discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&self, _operation: StepKind, _resource: &str, _error: Option<&CloudError>) {}
}

/// Observer that emits a `tracing` event per step
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver;

impl StepObserver for TraceObserver {
    fn on_step(&self, operation: StepKind, resource: &str, error: Option<&CloudError>) {
        match error {
            Some(e) => warn!(operation = %operation, resource = %resource, error = %e, "step failed"),
            None => debug!(operation = %operation, resource = %resource, "step completed"),
        }
    }
}
