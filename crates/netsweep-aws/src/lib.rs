//! AWS EC2 provider for netsweep
//!
//! Binds the [`netsweep_cloud::NetworkProvider`] boundary to the EC2 API:
//! `DescribeNetworkInterfaces` (paged by `NextToken`, filtered by `vpc-id`),
//! `DescribeAddresses` (filtered by `network-interface-id`),
//! `ReleaseAddress`, `DetachNetworkInterface` and `DeleteNetworkInterface`.
//!
//! Credentials and region come from the standard AWS configuration chain
//! (environment, shared config, instance metadata); see
//! [`AwsNetworkProvider::from_env`].

mod provider;

pub use provider::AwsNetworkProvider;
