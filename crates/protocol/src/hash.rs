use alloy_primitives::{keccak256, Address, Bytes, B256};
use alloy_sol_types::SolValue;
use binding::taiko_l1::TaikoData::BlockMetadata;

/// Meta hash stored in `ProposedBlock.metaHash`.
pub fn hash_metadata(meta: &BlockMetadata) -> B256 {
    // LibUtils.hashMetadata: keccak256(abi.encode(meta))
    keccak256(meta.abi_encode())
}

/// Hash committed with `commitBlock` before the block is proposed.
pub fn commit_hash(beneficiary: Address, tx_list_hash: B256) -> B256 {
    // keccak256(abi.encodePacked(beneficiary, txListHash))
    keccak256((beneficiary, tx_list_hash).abi_encode_packed())
}

/// Storage slot a signal is written to by SignalService.
pub fn signal_slot(app: Address, signal: B256) -> B256 {
    keccak256((app, signal).abi_encode_packed())
}

/// Build the `inputs` argument of `proposeBlock`.
pub fn encode_propose_inputs(meta: &BlockMetadata, tx_list: Bytes) -> Vec<Bytes> {
    vec![Bytes::from(meta.abi_encode()), tx_list]
}
