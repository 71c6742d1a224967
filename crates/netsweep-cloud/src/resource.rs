//! Network resource records
//!
//! Records mirror what the remote API reports: fields are independently
//! optional, and a missing field gates only the step that needs it. An
//! interface without an id has no actionable identity and is skipped
//! entirely; an attachment without an id only disables the detach step.

use serde::{Deserialize, Serialize};

/// A network interface inside a virtual network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterface {
    /// Interface identifier (e.g. `eni-0123456789abcdef0`)
    pub id: Option<String>,

    /// Attachment to a parent resource, if any
    pub attachment: Option<InterfaceAttachment>,
}

/// Attachment binding an interface to its parent resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAttachment {
    /// Attachment identifier (e.g. `eni-attach-0123456789abcdef0`)
    pub id: Option<String>,
}

/// A public address allocation, discovered by querying the provider with an
/// interface id rather than read off the interface record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressAllocation {
    /// Allocation identifier (e.g. `eipalloc-0123456789abcdef0`)
    pub allocation_id: Option<String>,

    /// The public IP bound by this allocation
    pub public_ip: Option<String>,
}

impl NetworkInterface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment_id: impl Into<String>) -> Self {
        self.attachment = Some(InterfaceAttachment {
            id: Some(attachment_id.into()),
        });
        self
    }

    /// The attachment id, when an attachment with an id exists
    pub fn attachment_id(&self) -> Option<&str> {
        self.attachment.as_ref().and_then(|a| a.id.as_deref())
    }
}

impl AddressAllocation {
    pub fn new(allocation_id: impl Into<String>, public_ip: impl Into<String>) -> Self {
        Self {
            allocation_id: Some(allocation_id.into()),
            public_ip: Some(public_ip.into()),
        }
    }
}

/// Collect the allocation ids present in a set of address allocations
pub fn allocation_ids(addresses: &[AddressAllocation]) -> Vec<&str> {
    addresses
        .iter()
        .filter_map(|a| a.allocation_id.as_deref())
        .collect()
}

/// Collect the interface ids present in a set of network interfaces
pub fn interface_ids(interfaces: &[NetworkInterface]) -> Vec<&str> {
    interfaces
        .iter()
        .filter_map(|i| i.id.as_deref())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_ids_skips_missing() {
        let addresses = vec![
            AddressAllocation::new("eipalloc-1", "198.51.100.7"),
            AddressAllocation {
                allocation_id: None,
                public_ip: Some("198.51.100.8".to_string()),
            },
            AddressAllocation::new("eipalloc-2", "198.51.100.9"),
        ];

        assert_eq!(allocation_ids(&addresses), ["eipalloc-1", "eipalloc-2"]);
    }

    #[test]
    fn test_interface_ids_skips_missing() {
        let interfaces = vec![
            NetworkInterface::new("eni-1"),
            NetworkInterface::default(),
            NetworkInterface::new("eni-2").with_attachment("eni-attach-2"),
        ];

        assert_eq!(interface_ids(&interfaces), ["eni-1", "eni-2"]);
    }

    #[test]
    fn test_attachment_id_requires_both_levels() {
        let detached = NetworkInterface::new("eni-1");
        assert_eq!(detached.attachment_id(), None);

        let half_reported = NetworkInterface {
            id: Some("eni-2".to_string()),
            attachment: Some(InterfaceAttachment { id: None }),
        };
        assert_eq!(half_reported.attachment_id(), None);

        let attached = NetworkInterface::new("eni-3").with_attachment("eni-attach-3");
        assert_eq!(attached.attachment_id(), Some("eni-attach-3"));
    }
}
