//! Networking REST API adapters
//!
//! - `NeutronClient`: `reqwest` implementation of the `NetworkClient` port
//! - `MockNetworkClient`: in-memory implementation for tests

pub mod client;
pub mod errors;
pub mod mock_client;

pub use client::{NeutronClient, NeutronClientConfig};
pub use mock_client::{MockNetworkClient, RecordedCall};
