//! TaikoToken (TKO) bindings.
//!
//! ERC20 with snapshots, EIP-2612 permits and ERC20Votes delegation.

use alloy_sol_types::sol;

sol! {
    /// TaikoToken - protocol token with vote checkpoints
    #[sol(rpc, abi)]
    #[allow(clippy::too_many_arguments)]
    interface TaikoToken {
        /// Vote weight of an account from `fromBlock` onwards
        #[derive(Debug, PartialEq, Eq)]
        struct Checkpoint {
            uint32 fromBlock;
            uint224 votes;
        }

        error TKO_INVALID_ADDR();
        error TKO_INVALID_PREMINT_PARAMS();
        error TKO_MINT_DISALLOWED();

        event Transfer(address indexed from, address indexed to, uint256 value);

        event Approval(address indexed owner, address indexed spender, uint256 value);

        event DelegateChanged(
            address indexed delegator,
            address indexed fromDelegate,
            address indexed toDelegate
        );

        event DelegateVotesChanged(address indexed delegate, uint256 previousBalance, uint256 newBalance);

        event Snapshot(uint256 id);

        event Paused(address account);

        event Unpaused(address account);

        event Mint(address account, uint256 amount);

        event Burn(address account, uint256 amount);

        // ERC20

        function name() external view returns (string memory);

        function symbol() external view returns (string memory);

        function decimals() external view returns (uint8);

        function totalSupply() external view returns (uint256);

        function balanceOf(address account) external view returns (uint256);

        function allowance(address owner, address spender) external view returns (uint256);

        function approve(address spender, uint256 amount) external returns (bool);

        function transfer(address to, uint256 amount) external returns (bool);

        function transferFrom(address from, address to, uint256 amount) external returns (bool);

        // Snapshots

        function snapshot() external;

        function balanceOfAt(address account, uint256 snapshotId) external view returns (uint256);

        function totalSupplyAt(uint256 snapshotId) external view returns (uint256);

        // Votes

        function checkpoints(address account, uint32 pos) external view returns (Checkpoint memory);

        function numCheckpoints(address account) external view returns (uint32);

        function delegates(address account) external view returns (address);

        function delegate(address delegatee) external;

        function delegateBySig(
            address delegatee,
            uint256 nonce,
            uint256 expiry,
            uint8 v,
            bytes32 r,
            bytes32 s
        ) external;

        function getVotes(address account) external view returns (uint256);

        function getPastVotes(address account, uint256 blockNumber) external view returns (uint256);

        function getPastTotalSupply(uint256 blockNumber) external view returns (uint256);

        // Permit

        function permit(
            address owner,
            address spender,
            uint256 value,
            uint256 deadline,
            uint8 v,
            bytes32 r,
            bytes32 s
        ) external;

        function nonces(address owner) external view returns (uint256);

        function DOMAIN_SEPARATOR() external view returns (bytes32);

        // Protocol

        /// Mint TKO, callable by the ProverPool and the DAO
        function mint(address to, uint256 amount) external;

        function burn(address from, uint256 amount) external;

        function pause() external;

        function unpause() external;

        function paused() external view returns (bool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{aliases::U224, U256};
    use alloy_sol_types::SolCall;

    #[test]
    fn test_checkpoint_decodes_uint224_votes() {
        let mut data = Vec::new();
        data.extend_from_slice(&U256::from(17_000_000u64).to_be_bytes::<32>());
        data.extend_from_slice(&U256::from(5u64 * 10u64.pow(18)).to_be_bytes::<32>());

        let checkpoint = TaikoToken::checkpointsCall::abi_decode_returns(&data).unwrap();

        assert_eq!(checkpoint.fromBlock, 17_000_000);
        assert_eq!(checkpoint.votes, U224::from(5u64 * 10u64.pow(18)));
    }

    #[test]
    fn test_transfer_selector_matches_erc20() {
        assert_eq!(TaikoToken::transferCall::SELECTOR, [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(TaikoToken::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
    }
}
