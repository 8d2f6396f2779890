//! TaikoL2 predeploy bindings.
//!
//! TaikoL2 receives the anchor transaction that syncs L1 block hashes into L2
//! and lets proposers flag blocks built from an invalid tx list.

use alloy_primitives::{address, Address};
use alloy_sol_types::sol;

/// Account that signs every anchor transaction.
pub const GOLDEN_TOUCH_ADDRESS: Address = address!("0x0000777735367b36bC9B61C50022d9D0700dB4Ec");

/// Gas limit used by the anchor transaction.
pub const ANCHOR_GAS_LIMIT: u64 = 250_000;

sol! {
    library LibInvalidTxList {
        /// Why a tx list was rejected.
        enum Reason {
            OK,
            BINARY_TOO_LARGE,
            BINARY_NOT_DECODABLE,
            BLOCK_TOO_MANY_TXS,
            BLOCK_GAS_LIMIT_TOO_LARGE,
            TX_INVALID_SIG,
            TX_GAS_LIMIT_TOO_SMALL
        }
    }

    /// TaikoL2 - L2 predeploy that anchors L1 state
    #[sol(rpc, abi)]
    interface TaikoL2 {
        error L2_INVALID_CHAIN_ID();
        error L2_INVALID_GAS_PRICE();
        error L2_INVALID_SENDER();
        error L2_PUBLIC_INPUT_HASH_MISMATCH();

        event BlockInvalidated(bytes32 indexed txListHash);

        event HeaderSynced(uint256 indexed height, uint256 indexed srcHeight, bytes32 srcHash);

        /// Persist the latest L1 block height and hash, first tx of every L2 block
        function anchor(uint256 l1Height, bytes32 l1Hash) external;

        /// Invalidate an L2 block built from a bad tx list
        function invalidateBlock(
            bytes calldata txList,
            LibInvalidTxList.Reason hint,
            uint256 txIdx
        ) external;

        function getSyncedHeader(uint256 number) external view returns (bytes32);

        function getLatestSyncedHeader() external view returns (bytes32);

        function getBlockHash(uint256 number) external view returns (bytes32);

        function latestSyncedL1Height() external view returns (uint256);

        function publicInputHash() external view returns (bytes32);

        function signAnchor(bytes32 digest, uint8 k)
            external view returns (uint8 v, uint256 r, uint256 s);

        function GOLDEN_TOUCH_ADDRESS() external view returns (address);
    }
}
