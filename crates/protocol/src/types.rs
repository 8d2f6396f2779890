use alloy_primitives::{Address, U256};
use binding::{prover_pool::ProverPool, taiko_token::TaikoToken, taiko_l1::LibUtils};
use serde::{Deserialize, Serialize};

/// Every field of TaikoL1's `getStateVariables()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolStateVariables {
    pub fee_base: U256,
    pub genesis_height: u64,
    pub genesis_timestamp: u64,
    pub next_block_id: u64,
    pub last_proposed_at: u64,
    pub avg_block_time: u64,
    pub latest_verified_height: u64,
    pub latest_verified_id: u64,
    pub avg_proof_time: u64,
}

impl From<LibUtils::StateVariables> for ProtocolStateVariables {
    fn from(vars: LibUtils::StateVariables) -> Self {
        Self {
            fee_base: vars.feeBase,
            genesis_height: vars.genesisHeight,
            genesis_timestamp: vars.genesisTimestamp,
            next_block_id: vars.nextBlockId,
            last_proposed_at: vars.lastProposedAt,
            avg_block_time: vars.avgBlockTime,
            latest_verified_height: vars.latestVerifiedHeight,
            latest_verified_id: vars.latestVerifiedId,
            avg_proof_time: vars.avgProofTime,
        }
    }
}

/// The subset of the protocol state a driver needs to follow L1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct L1State {
    pub genesis_height: u64,
    pub latest_verified_height: u64,
    pub latest_verified_id: u64,
    pub next_block_id: u64,
}

impl L1State {
    /// Blocks proposed but not yet verified.
    pub const fn num_pending_blocks(&self) -> u64 {
        self.next_block_id
            .saturating_sub(self.latest_verified_id)
            .saturating_sub(1)
    }
}

impl From<&ProtocolStateVariables> for L1State {
    fn from(vars: &ProtocolStateVariables) -> Self {
        Self {
            genesis_height: vars.genesis_height,
            latest_verified_height: vars.latest_verified_height,
            latest_verified_id: vars.latest_verified_id,
            next_block_id: vars.next_block_id,
        }
    }
}

impl From<ProtocolStateVariables> for L1State {
    fn from(vars: ProtocolStateVariables) -> Self {
        Self::from(&vars)
    }
}

/// A staked prover in the ProverPool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverEntry {
    pub address: Address,
    pub staked_amount: U256,
    pub rewards: U256,
    pub health_score: u32,
    pub capacity: u32,
    pub fee_multiplier: u16,
}

impl From<ProverPool::Prover> for ProverEntry {
    fn from(prover: ProverPool::Prover) -> Self {
        Self {
            address: prover.addr,
            staked_amount: prover.stakedAmount,
            rewards: prover.rewards,
            health_score: prover.healthScore,
            capacity: prover.capacity,
            fee_multiplier: prover.feeMultiplier,
        }
    }
}

/// Vote weight of an account starting at `from_block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCheckpoint {
    pub from_block: u32,
    pub votes: U256,
}

impl From<TaikoToken::Checkpoint> for VoteCheckpoint {
    fn from(checkpoint: TaikoToken::Checkpoint) -> Self {
        Self {
            from_block: checkpoint.fromBlock,
            // uint224 and uint256 share the 4-limb layout
            votes: U256::from_limbs(*checkpoint.votes.as_limbs()),
        }
    }
}
