pub mod list;
pub mod sweep;

use netsweep_aws::AwsNetworkProvider;
use tracing::debug;

pub(crate) async fn connect(region: Option<&str>) -> AwsNetworkProvider {
    match region {
        Some(region) => {
            debug!(region = %region, "using region override");
            AwsNetworkProvider::with_region(region).await
        }
        None => AwsNetworkProvider::from_env().await,
    }
}
