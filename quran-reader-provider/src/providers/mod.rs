//! Content provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod alquran_cloud;

pub use alquran_cloud::AlQuranCloudProvider;
