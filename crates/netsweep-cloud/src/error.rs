//! Error types for network resource reclamation

use std::fmt;

use thiserror::Error;

/// Errors returned across the provider boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("Invalid scope: {0}")]
    InvalidScope(String),
}

pub type Result<T> = std::result::Result<T, CloudError>;

/// The remote operation a step failure originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    ListInterfaces,
    QueryAddresses,
    ReleaseAddress,
    DetachInterface,
    WaitForDetach,
    DeleteInterface,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::ListInterfaces => write!(f, "list-interfaces"),
            StepKind::QueryAddresses => write!(f, "query-addresses"),
            StepKind::ReleaseAddress => write!(f, "release-address"),
            StepKind::DetachInterface => write!(f, "detach-interface"),
            StepKind::WaitForDetach => write!(f, "wait-for-detach"),
            StepKind::DeleteInterface => write!(f, "delete-interface"),
        }
    }
}

/// A single failed teardown step, tagged with the operation and the
/// identifier of the resource it targeted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub operation: StepKind,
    pub resource: String,
    pub error: CloudError,
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.operation, self.resource, self.error)
    }
}

/// Ordered collection of step failures accumulated over a teardown run.
///
/// Failures are appended in the order they occurred and are never replaced
/// or collapsed. An empty collection means the run succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateError {
    failures: Vec<StepFailure>,
}

impl AggregateError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure, preserving every earlier one
    pub fn push(&mut self, operation: StepKind, resource: impl Into<String>, error: CloudError) {
        self.failures.push(StepFailure {
            operation,
            resource: resource.into(),
            error,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[StepFailure] {
        &self.failures
    }

    /// `Ok(())` when no failure was recorded, `Err(self)` otherwise
    pub fn into_result(self) -> std::result::Result<(), AggregateError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "no failures");
        }
        write!(f, "{} failed step(s): ", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

impl IntoIterator for AggregateError {
    type Item = StepFailure;
    type IntoIter = std::vec::IntoIter<StepFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}
