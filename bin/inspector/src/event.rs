//! Event selection for the `scan` and `watch` commands.

use ::config::NetworkConfig;
use alloy_primitives::Address;
use alloy_rpc_types_eth::Log;
use binding::{bridge::IBridge, prover_pool::ProverPool, taiko_l1::TaikoL1, taiko_l2::TaikoL2};
use clap::ValueEnum;
use tracing::info;

/// Chain an event is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layer {
    L1,
    L2,
}

/// Events the inspector can scan and watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventKind {
    BlockCommitted,
    BlockProposed,
    BlockProven,
    BlockVerified,
    BlockInvalidated,
    HeaderSynced,
    MessageSent,
    MessageStatusChanged,
    Staked,
    Slashed,
}

impl EventKind {
    /// Solidity event name, used as the metrics label.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BlockCommitted => "BlockCommitted",
            Self::BlockProposed => "BlockProposed",
            Self::BlockProven => "BlockProven",
            Self::BlockVerified => "BlockVerified",
            Self::BlockInvalidated => "BlockInvalidated",
            Self::HeaderSynced => "HeaderSynced",
            Self::MessageSent => "MessageSent",
            Self::MessageStatusChanged => "MessageStatusChanged",
            Self::Staked => "Staked",
            Self::Slashed => "Slashed",
        }
    }

    /// Address of the contract emitting this event on `layer`.
    pub fn source(&self, layer: Layer, network: &NetworkConfig) -> eyre::Result<Address> {
        let address = match (self, layer) {
            (
                Self::BlockCommitted
                | Self::BlockProposed
                | Self::BlockProven
                | Self::BlockVerified
                | Self::HeaderSynced,
                Layer::L1,
            ) => network.l1.taiko_l1,
            (Self::BlockInvalidated | Self::HeaderSynced, Layer::L2) => network.l2.taiko_l2,
            (Self::MessageSent | Self::MessageStatusChanged, Layer::L1) => network.l1.bridge,
            (Self::MessageSent | Self::MessageStatusChanged, Layer::L2) => network.l2.bridge,
            (Self::Staked | Self::Slashed, Layer::L1) => network
                .l1
                .prover_pool
                .ok_or_else(|| eyre::eyre!("No ProverPool address configured"))?,
            (kind, layer) => {
                return Err(eyre::eyre!(
                    "{} is not emitted on {:?}",
                    kind.name(),
                    layer
                ))
            }
        };

        Ok(address)
    }
}

/// Structured log line for a decoded event.
pub trait LogEvent {
    fn log_event(&self, log: &Log);
}

impl LogEvent for TaikoL1::BlockCommitted {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            commit_slot = self.commitSlot,
            commit_hash = %self.commitHash,
            "BlockCommitted"
        );
    }
}

impl LogEvent for TaikoL1::BlockProposed {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            id = %self.id,
            l1_height = %self.meta.l1Height,
            beneficiary = %self.meta.beneficiary,
            tx_list_hash = %self.meta.txListHash,
            gas_limit = self.meta.gasLimit,
            "BlockProposed"
        );
    }
}

impl LogEvent for TaikoL1::BlockProven {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            id = %self.id,
            parent_hash = %self.parentHash,
            block_hash = %self.blockHash,
            prover = %self.prover,
            proven_at = self.provenAt,
            "BlockProven"
        );
    }
}

impl LogEvent for TaikoL1::BlockVerified {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            id = %self.id,
            block_hash = %self.blockHash,
            "BlockVerified"
        );
    }
}

impl LogEvent for TaikoL1::HeaderSynced {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            height = %self.height,
            src_height = %self.srcHeight,
            src_hash = %self.srcHash,
            "HeaderSynced"
        );
    }
}

impl LogEvent for TaikoL2::HeaderSynced {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            height = %self.height,
            src_height = %self.srcHeight,
            src_hash = %self.srcHash,
            "HeaderSynced"
        );
    }
}

impl LogEvent for TaikoL2::BlockInvalidated {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            tx_list_hash = %self.txListHash,
            "BlockInvalidated"
        );
    }
}

impl LogEvent for IBridge::MessageSent {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            msg_hash = %self.msgHash,
            id = %self.message.id,
            owner = %self.message.owner,
            dest_chain_id = %self.message.destChainId,
            deposit_value = %self.message.depositValue,
            "MessageSent"
        );
    }
}

impl LogEvent for IBridge::MessageStatusChanged {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            msg_hash = %self.msgHash,
            status = u8::from(self.status),
            transactor = %self.transactor,
            "MessageStatusChanged"
        );
    }
}

impl LogEvent for ProverPool::Staked {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            prover = %self.addr,
            amount = %self.amount,
            fee_multiplier = self.feeMultiplier,
            capacity = self.capacity,
            "Staked"
        );
    }
}

impl LogEvent for ProverPool::Slashed {
    fn log_event(&self, log: &Log) {
        info!(
            block = ?log.block_number,
            prover = %self.addr,
            amount = %self.amount,
            "Slashed"
        );
    }
}
