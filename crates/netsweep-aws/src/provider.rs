//! EC2-backed network provider

use async_trait::async_trait;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::{Address, Filter, NetworkInterface as Ec2NetworkInterface};
use aws_sdk_ec2::Client;
use netsweep_cloud::{
    AddressAllocation, CloudError, InterfaceAttachment, InterfacePage, InterfaceStatus,
    NetworkInterface, NetworkProvider, Result,
};
use tracing::debug;

/// Network provider backed by the EC2 API
pub struct AwsNetworkProvider {
    client: Client,
}

impl AwsNetworkProvider {
    /// Wrap an already-configured EC2 client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a provider from the default credential and region chain
    pub async fn from_env() -> Self {
        let config = aws_config::from_env().load().await;
        Self::new(Client::new(&config))
    }

    /// Build a provider with an explicit region, overriding the chain
    pub async fn with_region(region: impl Into<String>) -> Self {
        let config = aws_config::from_env()
            .region(aws_sdk_ec2::config::Region::new(region.into()))
            .load()
            .await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl NetworkProvider for AwsNetworkProvider {
    fn name(&self) -> &str {
        "aws-ec2"
    }

    async fn list_interfaces_page(
        &self,
        scope: &str,
        cursor: Option<&str>,
    ) -> Result<InterfacePage> {
        let output = self
            .client
            .describe_network_interfaces()
            .filters(Filter::builder().name("vpc-id").values(scope).build())
            .set_next_token(cursor.map(str::to_string))
            .send()
            .await
            .map_err(api_error)?;

        let interfaces: Vec<NetworkInterface> = output
            .network_interfaces
            .unwrap_or_default()
            .into_iter()
            .map(convert_interface)
            .collect();
        debug!(vpc = %scope, count = interfaces.len(), "fetched network interface page");

        Ok(InterfacePage {
            interfaces,
            next_cursor: output.next_token,
        })
    }

    async fn addresses_for_interface(
        &self,
        interface_id: &str,
    ) -> Result<Vec<AddressAllocation>> {
        let output = self
            .client
            .describe_addresses()
            .filters(
                Filter::builder()
                    .name("network-interface-id")
                    .values(interface_id)
                    .build(),
            )
            .send()
            .await
            .map_err(api_error)?;

        Ok(output
            .addresses
            .unwrap_or_default()
            .into_iter()
            .map(convert_address)
            .collect())
    }

    async fn release_address(&self, allocation_id: &str) -> Result<()> {
        self.client
            .release_address()
            .allocation_id(allocation_id)
            .send()
            .await
            .map_err(api_error)?;
        Ok(())
    }

    async fn detach_interface(&self, attachment_id: &str) -> Result<()> {
        self.client
            .detach_network_interface()
            .attachment_id(attachment_id)
            .send()
            .await
            .map_err(api_error)?;
        Ok(())
    }

    async fn delete_interface(&self, interface_id: &str) -> Result<()> {
        self.client
            .delete_network_interface()
            .network_interface_id(interface_id)
            .send()
            .await
            .map_err(api_error)?;
        Ok(())
    }

    async fn interface_status(&self, interface_id: &str) -> Result<InterfaceStatus> {
        let output = self
            .client
            .describe_network_interfaces()
            .network_interface_ids(interface_id)
            .send()
            .await
            .map_err(api_error)?;

        let status = output
            .network_interfaces
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|nic| nic.status)
            .map(|s| parse_status(s.as_str()))
            // An interface the API no longer reports cannot be attached.
            .unwrap_or(InterfaceStatus::Available);

        Ok(status)
    }
}

fn api_error<E>(err: E) -> CloudError
where
    E: std::error::Error + Send + Sync + 'static,
{
    CloudError::Api(format!("{}", DisplayErrorContext(err)))
}

fn convert_interface(nic: Ec2NetworkInterface) -> NetworkInterface {
    NetworkInterface {
        id: nic.network_interface_id,
        attachment: nic.attachment.map(|a| InterfaceAttachment {
            id: a.attachment_id,
        }),
    }
}

fn convert_address(address: Address) -> AddressAllocation {
    AddressAllocation {
        allocation_id: address.allocation_id,
        public_ip: address.public_ip,
    }
}

fn parse_status(status: &str) -> InterfaceStatus {
    match status {
        "available" => InterfaceStatus::Available,
        "in-use" | "associated" => InterfaceStatus::InUse,
        "attaching" => InterfaceStatus::Attaching,
        "detaching" => InterfaceStatus::Detaching,
        other => InterfaceStatus::Other(other.to_string()),
    }
}
