//! Domain layer for the LBaaS rule client
//!
//! This module contains the resource models, the error taxonomy and the
//! port the REST adapter implements.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ClientError, ClientResult};
