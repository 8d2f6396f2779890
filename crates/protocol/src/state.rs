//! Read-side access to a TaikoL1 deployment.

use crate::types::{L1State, ProtocolStateVariables};
use alloy_primitives::{Address, B256, U256};
use alloy_provider::Provider;
use binding::taiko_l1::{ProtocolConfig, TaikoData, TaikoL1};
use eyre::WrapErr;
use tracing::debug;

/// Reads protocol state from TaikoL1.
pub struct ProtocolStateProvider<P> {
    provider: P,
    taiko_l1: Address,
}

impl<P> ProtocolStateProvider<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, taiko_l1: Address) -> Self {
        Self { provider, taiko_l1 }
    }

    pub const fn address(&self) -> Address {
        self.taiko_l1
    }

    /// Fetch `getStateVariables()` as a named struct.
    pub async fn get_protocol_state_variables(&self) -> eyre::Result<ProtocolStateVariables> {
        let taiko_l1 = TaikoL1::new(self.taiko_l1, &self.provider);
        let vars = taiko_l1
            .getStateVariables()
            .call()
            .await
            .wrap_err("Failed to call TaikoL1.getStateVariables")?;

        debug!(
            next_block_id = vars.nextBlockId,
            latest_verified_id = vars.latestVerifiedId,
            "Fetched protocol state variables"
        );

        Ok(vars.into())
    }

    /// Fetch the L1 sync state.
    pub async fn get_l1_state(&self) -> eyre::Result<L1State> {
        let vars = self.get_protocol_state_variables().await?;
        Ok(L1State::from(&vars))
    }

    pub async fn get_config(&self) -> eyre::Result<ProtocolConfig> {
        let taiko_l1 = TaikoL1::new(self.taiko_l1, &self.provider);
        let words = taiko_l1
            .getConfig()
            .call()
            .await
            .wrap_err("Failed to call TaikoL1.getConfig")?;
        let config = ProtocolConfig::from_words(&words)?;
        Ok(config)
    }

    /// Get a proposed block by id from the block ring buffer.
    pub async fn get_proposed_block(&self, id: u64) -> eyre::Result<TaikoData::ProposedBlock> {
        let taiko_l1 = TaikoL1::new(self.taiko_l1, &self.provider);
        let block = taiko_l1
            .getProposedBlock(U256::from(id))
            .call()
            .await
            .wrap_err_with(|| format!("Failed to get proposed block {id}"))?;
        Ok(block)
    }

    /// Get the fork choice for (`id`, `parent_hash`).
    ///
    /// Returns `None` when no proof has been submitted for this pair.
    pub async fn get_fork_choice(
        &self,
        id: u64,
        parent_hash: B256,
    ) -> eyre::Result<Option<TaikoData::ForkChoice>> {
        let taiko_l1 = TaikoL1::new(self.taiko_l1, &self.provider);
        let fork_choice = taiko_l1
            .getForkChoice(U256::from(id), parent_hash)
            .call()
            .await
            .wrap_err_with(|| format!("Failed to get fork choice of block {id}"))?;

        if fork_choice.blockHash.is_zero() {
            Ok(None)
        } else {
            Ok(Some(fork_choice))
        }
    }

    pub async fn get_block_fee(&self) -> eyre::Result<U256> {
        let taiko_l1 = TaikoL1::new(self.taiko_l1, &self.provider);
        let fee = taiko_l1
            .getBlockFee()
            .call()
            .await
            .wrap_err("Failed to call TaikoL1.getBlockFee")?;
        Ok(fee)
    }

    pub async fn get_proof_reward(&self, proven_at: u64, proposed_at: u64) -> eyre::Result<U256> {
        let taiko_l1 = TaikoL1::new(self.taiko_l1, &self.provider);
        let reward = taiko_l1
            .getProofReward(proven_at, proposed_at)
            .call()
            .await
            .wrap_err("Failed to call TaikoL1.getProofReward")?;
        Ok(reward)
    }

    /// Latest L2 block hash synced to L1.
    pub async fn get_latest_synced_header(&self) -> eyre::Result<B256> {
        let taiko_l1 = TaikoL1::new(self.taiko_l1, &self.provider);
        let hash = taiko_l1
            .getLatestSyncedHeader()
            .call()
            .await
            .wrap_err("Failed to call TaikoL1.getLatestSyncedHeader")?;
        Ok(hash)
    }

    pub async fn get_synced_header(&self, number: u64) -> eyre::Result<B256> {
        let taiko_l1 = TaikoL1::new(self.taiko_l1, &self.provider);
        let hash = taiko_l1
            .getSyncedHeader(U256::from(number))
            .call()
            .await
            .wrap_err_with(|| format!("Failed to get synced header {number}"))?;
        Ok(hash)
    }

    pub async fn is_halted(&self) -> eyre::Result<bool> {
        let taiko_l1 = TaikoL1::new(self.taiko_l1, &self.provider);
        let halted = taiko_l1
            .isHalted()
            .call()
            .await
            .wrap_err("Failed to call TaikoL1.isHalted")?;
        Ok(halted)
    }
}
