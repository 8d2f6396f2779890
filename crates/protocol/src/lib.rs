//! Typed views over the protocol contracts.
//!
//! This crate provides:
//! - [`ProtocolStateVariables`] and [`L1State`], reshaped from `getStateVariables()`
//! - Read providers for TaikoL1, ProverPool and TaikoToken vote checkpoints
//! - Hashing helpers matching the on-chain derivations
//! - The `verifyBlocks` transaction

pub mod hash;
pub mod prover_pool;
pub mod state;
pub mod types;
pub mod verify;
pub mod votes;

pub use prover_pool::ProverPoolProvider;
pub use state::ProtocolStateProvider;
pub use types::{L1State, ProtocolStateVariables, ProverEntry, VoteCheckpoint};
pub use votes::VotesProvider;
