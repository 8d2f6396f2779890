//! SignalService bindings.

use alloy_sol_types::sol;

sol! {
    /// SignalService - records signals on the source chain and verifies them on the destination
    #[sol(rpc, abi)]
    interface SignalService {
        error B_NULL_APP_ADDR();
        error B_WRONG_CHAIN_ID();
        error B_ZERO_SIGNAL();

        /// Store `signal` under the caller's storage slot
        function sendSignal(bytes32 signal) external returns (bytes32 storageSlot);

        function isSignalSent(address app, bytes32 signal) external view returns (bool);

        /// Verify a signal sent on `srcChainId` with a storage proof
        function isSignalReceived(
            uint256 srcChainId,
            address app,
            bytes32 signal,
            bytes calldata proof
        ) external view returns (bool);

        function getSignalSlot(address app, bytes32 signal) external pure returns (bytes32);
    }
}
