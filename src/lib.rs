//! EAI creation handler.
//!
//! Mediation flow handler that creates an `EntityAddressInfo` persistent
//! object in the remote Data Persistence Service and attaches it to the
//! managed object being added, inside the flow's open transaction.

pub mod config;
pub mod discovery;
pub mod dps;
pub mod handlers;
pub mod naming;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
