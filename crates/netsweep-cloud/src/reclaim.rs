//! Interface listing and teardown orchestration

use tracing::{debug, info};

use crate::error::{AggregateError, CloudError, Result, StepKind};
use crate::observer::{NoopObserver, StepObserver};
use crate::provider::{DetachWait, InterfaceStatus, NetworkProvider};
use crate::resource::{allocation_ids, NetworkInterface};

/// Orchestrates network-interface reclamation against a [`NetworkProvider`].
///
/// Teardown runs release → detach → delete per interface. Interfaces are
/// processed independently: a failed step is recorded in the aggregate and
/// never blocks the remaining interfaces. Only a failed detach cuts an
/// interface's own run short, since deleting a still-attached interface
/// would leave it in an inconsistent state.
///
/// By default the delete request follows a successful detach request
/// immediately, even though the provider detaches asynchronously; this is
/// the same race the underlying APIs expose. Configure [`DetachWait`] via
/// [`Reclaimer::with_detach_wait`] to poll the interface status until the
/// detachment has actually completed.
pub struct Reclaimer<'a> {
    provider: &'a dyn NetworkProvider,
    observer: &'a dyn StepObserver,
    detach_wait: Option<DetachWait>,
}

impl<'a> Reclaimer<'a> {
    pub fn new(provider: &'a dyn NetworkProvider) -> Self {
        Self {
            provider,
            observer: &NoopObserver,
            detach_wait: None,
        }
    }

    /// Report every step outcome to `observer`
    pub fn with_observer(mut self, observer: &'a dyn StepObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Poll until each interface is detached before deleting it
    pub fn with_detach_wait(mut self, wait: DetachWait) -> Self {
        self.detach_wait = Some(wait);
        self
    }

    /// Collect every network interface in `scope`, following the listing
    /// cursor until the provider reports no further page.
    ///
    /// All-or-nothing: a failed page fetch aborts the listing and returns no
    /// partial inventory. The returned order is the provider's.
    pub async fn list_interfaces(&self, scope: &str) -> Result<Vec<NetworkInterface>> {
        let mut interfaces = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = match self
                .provider
                .list_interfaces_page(scope, cursor.as_deref())
                .await
            {
                Ok(page) => {
                    self.observer.on_step(StepKind::ListInterfaces, scope, None);
                    page
                }
                Err(e) => {
                    self.observer
                        .on_step(StepKind::ListInterfaces, scope, Some(&e));
                    return Err(e);
                }
            };

            interfaces.extend(page.interfaces);
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(scope = %scope, count = interfaces.len(), "interface listing complete");
        Ok(interfaces)
    }

    /// Tear down every interface in `interfaces`.
    ///
    /// Failures accumulate across all interfaces and all steps; the run
    /// never stops early. Returns `Ok(())` when every step succeeded or the
    /// input was empty.
    pub async fn teardown(
        &self,
        interfaces: &[NetworkInterface],
    ) -> std::result::Result<(), AggregateError> {
        let mut failures = AggregateError::new();

        for interface in interfaces {
            // An interface without an id carries no actionable identity.
            let Some(interface_id) = interface.id.as_deref() else {
                continue;
            };
            self.teardown_interface(interface, interface_id, &mut failures)
                .await;
        }

        failures.into_result()
    }

    /// List and tear down in one call.
    ///
    /// A listing failure aborts before any teardown and is returned as the
    /// aggregate's only element. Returns the number of interfaces the
    /// listing produced.
    pub async fn reclaim(&self, scope: &str) -> std::result::Result<usize, AggregateError> {
        let interfaces = match self.list_interfaces(scope).await {
            Ok(interfaces) => interfaces,
            Err(e) => {
                let mut failures = AggregateError::new();
                failures.push(StepKind::ListInterfaces, scope, e);
                return Err(failures);
            }
        };

        let count = interfaces.len();
        info!(scope = %scope, interfaces = count, "tearing down network interfaces");
        self.teardown(&interfaces).await?;
        Ok(count)
    }

    async fn teardown_interface(
        &self,
        interface: &NetworkInterface,
        interface_id: &str,
        failures: &mut AggregateError,
    ) {
        self.release_addresses(interface_id, failures).await;

        if let Some(attachment_id) = interface.attachment_id() {
            if !self.detach(interface_id, attachment_id, failures).await {
                // Deleting an interface that failed to detach would likely
                // fail or leave it inconsistent; move to the next interface.
                return;
            }
        }

        let result = self.provider.delete_interface(interface_id).await;
        self.record(failures, StepKind::DeleteInterface, interface_id, result);
    }

    /// Release every allocation bound to the interface. A failed query is
    /// recorded but does not stop the remaining teardown steps; a failed
    /// release does not stop sibling releases.
    async fn release_addresses(&self, interface_id: &str, failures: &mut AggregateError) {
        let addresses = match self.provider.addresses_for_interface(interface_id).await {
            Ok(addresses) => {
                self.observer
                    .on_step(StepKind::QueryAddresses, interface_id, None);
                debug!(
                    interface = %interface_id,
                    allocations = ?allocation_ids(&addresses),
                    "address allocations discovered"
                );
                addresses
            }
            Err(e) => {
                self.observer
                    .on_step(StepKind::QueryAddresses, interface_id, Some(&e));
                failures.push(StepKind::QueryAddresses, interface_id, e);
                return;
            }
        };

        for address in &addresses {
            // An allocation without an id cannot be released.
            let Some(allocation_id) = address.allocation_id.as_deref() else {
                continue;
            };
            let result = self.provider.release_address(allocation_id).await;
            self.record(failures, StepKind::ReleaseAddress, allocation_id, result);
        }
    }

    /// Request detachment and, when configured, wait for it to complete.
    /// Returns whether deletion may proceed.
    async fn detach(
        &self,
        interface_id: &str,
        attachment_id: &str,
        failures: &mut AggregateError,
    ) -> bool {
        let result = self.provider.detach_interface(attachment_id).await;
        if !self.record(failures, StepKind::DetachInterface, attachment_id, result) {
            return false;
        }

        match &self.detach_wait {
            Some(wait) => self.wait_for_detach(interface_id, wait, failures).await,
            None => true,
        }
    }

    async fn wait_for_detach(
        &self,
        interface_id: &str,
        wait: &DetachWait,
        failures: &mut AggregateError,
    ) -> bool {
        for attempt in 0..wait.max_attempts {
            match self.provider.interface_status(interface_id).await {
                Ok(InterfaceStatus::Available) => {
                    self.observer
                        .on_step(StepKind::WaitForDetach, interface_id, None);
                    return true;
                }
                // Still attached, or the status read itself failed; either
                // way keep polling until the attempts run out.
                Ok(_) | Err(_) => {}
            }

            if attempt + 1 < wait.max_attempts {
                tokio::time::sleep(wait.delay_for_attempt(attempt)).await;
            }
        }

        let error = CloudError::Timeout(format!(
            "interface {} still attached after {} status checks",
            interface_id, wait.max_attempts
        ));
        self.observer
            .on_step(StepKind::WaitForDetach, interface_id, Some(&error));
        failures.push(StepKind::WaitForDetach, interface_id, error);
        false
    }

    /// Report the step to the observer and record a failure if there was
    /// one. Returns whether the step succeeded.
    fn record(
        &self,
        failures: &mut AggregateError,
        operation: StepKind,
        resource: &str,
        result: Result<()>,
    ) -> bool {
        match result {
            Ok(()) => {
                self.observer.on_step(operation, resource, None);
                true
            }
            Err(e) => {
                self.observer.on_step(operation, resource, Some(&e));
                failures.push(operation, resource, e);
                false
            }
        }
    }
}
