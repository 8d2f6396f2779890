//! TokenVault bindings: ERC20 and Ether bridging on top of `IBridge`.

use alloy_sol_types::sol;

sol! {
    /// TokenVault - locks canonical ERC20 tokens and mints their bridged copies
    #[sol(rpc, abi)]
    #[allow(clippy::too_many_arguments)]
    interface TokenVault {
        /// Identity of a token on its origin chain
        #[derive(Debug, PartialEq, Eq)]
        struct CanonicalERC20 {
            uint256 chainId;
            address addr;
            uint8 decimals;
            string symbol;
            string name;
        }

        /// Bridge message as carried by `releaseERC20`
        #[derive(Debug, PartialEq, Eq)]
        struct Message {
            uint256 id;
            address sender;
            uint256 srcChainId;
            uint256 destChainId;
            address owner;
            address to;
            address refundAddress;
            uint256 depositValue;
            uint256 callValue;
            uint256 processingFee;
            uint256 gasLimit;
            bytes data;
            string memo;
        }

        error TOKENVAULT_INVALID_TO();
        error TOKENVAULT_INVALID_VALUE();
        error TOKENVAULT_INVALID_TOKEN();
        error TOKENVAULT_INVALID_AMOUNT();
        error TOKENVAULT_CANONICAL_TOKEN_NOT_FOUND();
        error TOKENVAULT_INVALID_OWNER();
        error TOKENVAULT_INVALID_SRC_CHAIN_ID();
        error TOKENVAULT_MESSAGE_NOT_FAILED();
        error TOKENVAULT_INVALID_SENDER();

        event BridgedERC20Deployed(
            uint256 indexed srcChainId,
            address indexed canonicalToken,
            address indexed bridgedToken,
            string canonicalTokenSymbol,
            string canonicalTokenName,
            uint8 canonicalTokenDecimal
        );

        event EtherSent(
            bytes32 indexed msgHash,
            address indexed from,
            address indexed to,
            uint256 destChainId,
            uint256 amount
        );

        event ERC20Sent(
            bytes32 indexed msgHash,
            address indexed from,
            address indexed to,
            uint256 destChainId,
            address token,
            uint256 amount
        );

        event ERC20Released(
            bytes32 indexed msgHash,
            address indexed from,
            address token,
            uint256 amount
        );

        event ERC20Received(
            bytes32 indexed msgHash,
            address indexed from,
            address indexed to,
            uint256 srcChainId,
            address token,
            uint256 amount
        );

        function sendEther(
            uint256 destChainId,
            address to,
            uint256 gasLimit,
            uint256 processingFee,
            address refundAddress,
            string memory memo
        ) external payable;

        /// Lock (canonical) or burn (bridged) `amount` of `token` and message the destination chain
        function sendERC20(
            uint256 destChainId,
            address to,
            address token,
            uint256 amount,
            uint256 gasLimit,
            uint256 processingFee,
            address refundAddress,
            string memory memo
        ) external payable;

        function releaseERC20(Message calldata message, bytes calldata proof) external;

        function receiveERC20(
            CanonicalERC20 calldata canonicalToken,
            address from,
            address to,
            uint256 amount
        ) external;

        function isBridgedToken(address tokenAddress) external view returns (bool);

        function bridgedToCanonical(address bridged)
            external view returns (CanonicalERC20 memory);

        function canonicalToBridged(uint256 chainId, address canonical)
            external view returns (address);

        function messageDeposits(bytes32 msgHash)
            external view returns (address token, uint256 amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};
    use alloy_sol_types::{SolCall, SolValue};

    #[test]
    fn test_bridged_to_canonical_decodes_strings() {
        let canonical = TokenVault::CanonicalERC20 {
            chainId: U256::from(31336),
            addr: address!("0x1000777700000000000000000000000000000001"),
            decimals: 18,
            symbol: "HORSE".to_string(),
            name: "Horse Token".to_string(),
        };

        let data = canonical.abi_encode();
        let decoded = TokenVault::bridgedToCanonicalCall::abi_decode_returns(&data).unwrap();

        assert_eq!(decoded, canonical);
    }

    #[test]
    fn test_message_deposits_returns_pair() {
        let token = address!("0x00000000000000000000000000000000000000cc");
        let data = (token, U256::from(5)).abi_encode_params();

        let ret = TokenVault::messageDepositsCall::abi_decode_returns(&data).unwrap();
        assert_eq!(ret.token, token);
        assert_eq!(ret.amount, U256::from(5));
    }
}
