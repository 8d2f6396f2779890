//! Configuration types for the protocol bindings.
//!
//! This crate provides:
//! - Network configurations (devnet, testnet)
//! - Contract addresses on L1 and L2
//! - Configuration loading and validation

pub mod error;
pub mod network;

pub use error::ConfigError;
pub use network::{L1Contracts, L2Contracts, NetworkConfig, NetworkConfigBuilder, NetworkType};
