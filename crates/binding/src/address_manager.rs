//! AddressManager and AddressResolver bindings.
//!
//! Every protocol contract inherits `AddressResolver`, so `AddressResolver`
//! can be bound to any of their addresses.

use alloy_sol_types::sol;

sol! {
    /// AddressManager - name registry keyed by `"{chainId}.{name}"`
    #[sol(rpc, abi)]
    interface AddressManager {
        event AddressSet(string indexed name, address newAddress, address oldAddress);

        function setAddress(string calldata name, address newAddress) external;

        function getAddress(string calldata name) external view returns (address);

        function owner() external view returns (address);
    }

    #[sol(rpc, abi)]
    interface AddressResolver {
        error RESOLVER_DENIED();
        error RESOLVER_INVALID_ADDR();

        function addressManager() external view returns (address);

        /// Resolve `name` on the current chain
        function resolve(string calldata name, bool allowZeroAddress)
            external view returns (address payable);

        /// Resolve `name` on `chainId`
        function resolve(uint256 chainId, string calldata name, bool allowZeroAddress)
            external view returns (address payable);
    }
}

/// Registry key used by `AddressManager` for `name` on `chain_id`.
pub fn registry_key(chain_id: u64, name: &str) -> String {
    format!("{chain_id}.{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_registry_key() {
        assert_eq!(registry_key(167001, "bridge"), "167001.bridge");
    }

    #[test]
    fn test_resolve_overloads() {
        assert_eq!(AddressResolver::resolve_0Call::SIGNATURE, "resolve(string,bool)");
        assert_eq!(
            AddressResolver::resolve_1Call::SIGNATURE,
            "resolve(uint256,string,bool)"
        );
    }
}
