//! Infrastructure layer: configuration, logging and the REST adapter.

pub mod config;
pub mod logging;
pub mod neutron;
