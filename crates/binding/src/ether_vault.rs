//! EtherVault bindings.
//!
//! L2 predeploy holding the pre-minted Ether that the bridge releases.

use alloy_sol_types::sol;

sol! {
    #[sol(rpc, abi)]
    interface EtherVault {
        event Authorized(address indexed addr, bool authorized);

        event EtherReleased(address indexed to, uint256 amount);

        /// Release Ether to the caller, which must be authorized
        function releaseEther(uint256 amount) external;

        /// Release Ether to `recipient`
        function releaseEther(address recipient, uint256 amount) external;

        function authorize(address addr, bool authorized) external;

        function isAuthorized(address addr) external view returns (bool);
    }
}
