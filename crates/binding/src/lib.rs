//! Contract bindings for the Taiko protocol contracts.
//!
//! This crate consolidates all Solidity contract interfaces used across the project:
//! - L1 rollup contract (TaikoL1) and its data types
//! - L2 predeploys (TaikoL2, EtherVault)
//! - Bridging contracts (Bridge, TokenVault, SignalService)
//! - AddressManager / AddressResolver
//! - ProverPool and TaikoToken
//!
//! All bindings are generated using alloy's `sol!` macro. Each contract
//! instance covers the three usual roles: reads via `.call()`, transactions
//! via `.send()`, and event logs via the `*_filter()` builders.

pub mod abi;
pub mod address_manager;
pub mod bridge;
pub mod ether_vault;
pub mod prover_pool;
pub mod signal_service;
pub mod taiko_l1;
pub mod taiko_l2;
pub mod taiko_token;
pub mod token_vault;

pub use abi::{contract_abi, CONTRACT_NAMES};
