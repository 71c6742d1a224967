//! Network provider trait definition

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::resource::{AddressAllocation, NetworkInterface};

/// One page of a cursor-paged interface listing
#[derive(Debug, Clone, Default)]
pub struct InterfacePage {
    pub interfaces: Vec<NetworkInterface>,

    /// Cursor for the next page; `None` on the last page
    pub next_cursor: Option<String>,
}

/// Lifecycle state of a network interface as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceStatus {
    Available,
    InUse,
    Attaching,
    Detaching,
    Other(String),
}

/// Remote network API abstraction
///
/// Cloud providers implement this trait to expose the operations interface
/// reclamation needs. Every method is a single request/response call; retry
/// and backoff belong to the implementing transport, not to callers.
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// Provider name used in logs and error context (e.g. "aws-ec2")
    fn name(&self) -> &str;

    /// Fetch one page of the interfaces in `scope`, continuing from `cursor`
    async fn list_interfaces_page(
        &self,
        scope: &str,
        cursor: Option<&str>,
    ) -> Result<InterfacePage>;

    /// Address allocations currently associated with an interface
    async fn addresses_for_interface(
        &self,
        interface_id: &str,
    ) -> Result<Vec<AddressAllocation>>;

    /// Release a public address allocation
    async fn release_address(&self, allocation_id: &str) -> Result<()>;

    /// Request detachment of an interface from its parent resource.
    ///
    /// Returns once the request is accepted; the detachment itself completes
    /// asynchronously on the provider side.
    async fn detach_interface(&self, attachment_id: &str) -> Result<()>;

    /// Delete an interface
    async fn delete_interface(&self, interface_id: &str) -> Result<()>;

    /// Current lifecycle status of an interface
    async fn interface_status(&self, interface_id: &str) -> Result<InterfaceStatus>;
}

/// Polling configuration for waiting out asynchronous detachment
#[derive(Debug, Clone)]
pub struct DetachWait {
    /// Maximum number of status checks
    pub max_attempts: u32,

    /// Delay after the first status check
    pub initial_delay: Duration,

    /// Cap on the delay between status checks
    pub max_delay: Duration,

    /// Backoff multiplier applied per attempt
    pub backoff_multiplier: f64,
}

impl Default for DetachWait {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            backoff_multiplier: 2.0,
        }
    }
}

impl DetachWait {
    /// Delay after the given zero-based attempt, capped at `max_delay`
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = self.backoff_multiplier.powi(attempt as i32);
        let millis = (self.initial_delay.as_millis() as f64 * factor) as u64;
        Duration::from_millis(millis).min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_calculation() {
        let wait = DetachWait {
            max_attempts: 5,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(10000),
            backoff_multiplier: 2.0,
        };

        assert_eq!(wait.delay_for_attempt(0), Duration::from_millis(1000));
        assert_eq!(wait.delay_for_attempt(1), Duration::from_millis(2000));
        assert_eq!(wait.delay_for_attempt(2), Duration::from_millis(4000));
        assert_eq!(wait.delay_for_attempt(3), Duration::from_millis(8000));
        assert_eq!(wait.delay_for_attempt(4), Duration::from_millis(10000)); // capped at max
    }
}
