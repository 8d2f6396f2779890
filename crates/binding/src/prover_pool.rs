//! ProverPool bindings.
//!
//! Staked provers are assigned to proposed blocks; each entry carries the
//! prover's stake, accrued rewards and scheduling parameters.

use alloy_sol_types::sol;

sol! {
    /// ProverPool - staking registry of block provers
    #[sol(rpc, abi)]
    interface ProverPool {
        /// A staked prover
        #[derive(Debug, PartialEq, Eq)]
        struct Prover {
            address addr;
            uint256 stakedAmount;
            uint256 rewards;
            // 0..=10_000, reduced on missed proofs
            uint32 healthScore;
            // max number of blocks the prover can be assigned at once
            uint32 capacity;
            // percentage applied to the base proving fee
            uint16 feeMultiplier;
        }

        error POOL_CALLER_NOT_AUTHORIZED();
        error POOL_CANNOT_BE_PREFERRED();
        error POOL_INSUFFICIENT_CAPACITY();
        error POOL_INVALID_PARAMS();
        error POOL_NOT_ENOUGH_RESOURCES();
        error POOL_NOT_ENOUGH_STAKE();

        event Staked(address indexed addr, uint256 amount, uint16 feeMultiplier, uint32 capacity);

        event Exited(address indexed addr, uint256 amount);

        event Withdrawn(address indexed addr, uint256 amount);

        event Slashed(address indexed addr, uint256 amount);

        /// Stake TKO, or update an existing stake's fee multiplier and capacity
        function stake(uint256 amount, uint16 feeMultiplier, uint32 capacity) external;

        function exit() external;

        function withdraw() external;

        /// Pick a prover for `blockId`; called by TaikoL1
        function assignProver(uint64 blockId, uint32 feePerGas)
            external returns (address prover, uint32 rewardPerGas);

        function releaseProver(address prover) external;

        function slashProver(address prover) external;

        function getProvers() external view returns (Prover[] memory provers);

        function getProver(address addr) external view returns (Prover memory);

        function getCapacity() external view returns (uint256 capacity);

        function minStakeAmount() external view returns (uint256);

        function maxNumProvers() external view returns (uint256);
    }
}
