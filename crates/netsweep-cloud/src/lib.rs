//! Netsweep cloud core
//!
//! This crate provides the provider abstraction and orchestration logic for
//! reclaiming network interfaces and their public address allocations from a
//! virtual network.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 netsweep CLI                     │
//! │             (netsweep list/sweep)                │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               netsweep-cloud                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          Provider Abstraction             │   │
//! │  │  trait NetworkProvider { ... }            │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────────────┐     │
//! │  │   Reclaimer  │  │   AggregateError     │     │
//! │  │ (list + tear │  │ (ordered failure     │     │
//! │  │    down)     │  │    collection)       │     │
//! │  └──────────────┘  └──────────────────────┘     │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │  netsweep-aws │
//! │  (EC2-backed  │
//! │   provider)   │
//! └───────────────┘
//! ```
//!
//! Teardown is deliberately best-effort: every failure across every
//! interface and step is collected into one [`AggregateError`] and surfaced
//! together, so a single stuck resource never hides the rest of the damage.

pub mod error;
pub mod observer;
pub mod provider;
pub mod reclaim;
pub mod resource;

// Re-exports
pub use error::{AggregateError, CloudError, Result, StepFailure, StepKind};
pub use observer::{NoopObserver, StepObserver, TraceObserver};
pub use provider::{DetachWait, InterfacePage, InterfaceStatus, NetworkProvider};
pub use reclaim::Reclaimer;
pub use resource::{
    allocation_ids, interface_ids, AddressAllocation, InterfaceAttachment, NetworkInterface,
};
