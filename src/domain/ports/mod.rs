//! Port trait definitions (Hexagonal Architecture)
//!
//! - NetworkClient: JSON operations against the networking REST API

pub mod network_client;

pub use network_client::NetworkClient;
