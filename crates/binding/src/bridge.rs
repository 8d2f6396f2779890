//! Cross-chain bridge bindings.
//!
//! The same `IBridge` interface is deployed on L1 and as an L2 predeploy.

use alloy_sol_types::sol;

sol! {
    library LibBridgeStatus {
        /// Processing status of a bridge message on its destination chain.
        enum MessageStatus {
            NEW,
            RETRIABLE,
            DONE,
            FAILED
        }
    }

    /// IBridge - sends and processes cross-chain messages
    #[sol(rpc, abi)]
    #[allow(clippy::too_many_arguments)]
    interface IBridge {
        /// Cross-chain message
        #[derive(Debug, PartialEq, Eq)]
        struct Message {
            // Message ID.
            uint256 id;
            // Message sender address (auto filled).
            address sender;
            // Source chain ID (auto filled).
            uint256 srcChainId;
            // Destination chain ID where the `to` address lives (auto filled).
            uint256 destChainId;
            // Owner address of the bridged asset.
            address owner;
            // Destination owner address.
            address to;
            // Alternate address to send any refund. If blank, defaults to owner.
            address refundAddress;
            // Deposited Ether minus the processingFee.
            uint256 depositValue;
            // callValue to invoke on the destination chain, for ERC20 transfers.
            uint256 callValue;
            // Processing fee for the relayer. Zero if owner will process themself.
            uint256 processingFee;
            // gasLimit to invoke on the destination chain, for ERC20 transfers.
            uint256 gasLimit;
            // callData to invoke on the destination chain, for ERC20 transfers.
            bytes data;
            // Optional memo.
            string memo;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct Context {
            bytes32 msgHash;
            address sender;
            uint256 srcChainId;
        }

        error B_CANNOT_RECEIVE();
        error B_DENIED();
        error B_ERC20_CANNOT_RECEIVE();
        error B_ETHER_RELEASED_ALREADY();
        error B_EV_DO_NOT_BURN();
        error B_EV_NOT_AUTHORIZED();
        error B_EV_PARAM();
        error B_FAILED_TRANSFER();
        error B_FORBIDDEN();
        error B_GAS_LIMIT();
        error B_INCORRECT_VALUE();
        error B_INIT_PARAM_ERROR();
        error B_MSG_HASH_NULL();
        error B_MSG_NON_RETRIABLE();
        error B_MSG_NOT_FAILED();
        error B_NULL_APP_ADDR();
        error B_OWNER_IS_NULL();
        error B_SIGNAL_NOT_RECEIVED();
        error B_STATUS_MISMATCH();
        error B_WRONG_CHAIN_ID();
        error B_WRONG_TO_ADDRESS();
        error B_ZERO_SIGNAL();

        event MessageSent(bytes32 indexed msgHash, Message message);

        event MessageStatusChanged(
            bytes32 indexed msgHash,
            LibBridgeStatus.MessageStatus status,
            address transactor
        );

        event DestChainEnabled(uint256 indexed chainId, bool enabled);

        event EtherReleased(bytes32 indexed msgHash, address to, uint256 amount);

        /// Send a message to the destination chain, value must cover deposit + fee
        function sendMessage(Message calldata message)
            external payable returns (bytes32 msgHash);

        function processMessage(Message calldata message, bytes calldata proof) external;

        function retryMessage(Message calldata message, bool isLastAttempt) external;

        /// Release Ether of a failed message back to its owner on the source chain
        function releaseEther(Message calldata message, bytes calldata proof) external;

        function getMessageStatus(bytes32 msgHash)
            external view returns (LibBridgeStatus.MessageStatus);

        function isMessageSent(bytes32 msgHash) external view returns (bool);

        function isMessageReceived(bytes32 msgHash, uint256 srcChainId, bytes calldata proof)
            external view returns (bool);

        function isMessageFailed(bytes32 msgHash, uint256 destChainId, bytes calldata proof)
            external view returns (bool);

        function isEtherReleased(bytes32 msgHash) external view returns (bool);

        function isDestChainEnabled(uint256 _chainId) external view returns (bool);

        function hashMessage(Message calldata message) external pure returns (bytes32);

        function context() external view returns (Context memory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use alloy_sol_types::{SolCall, SolEvent};

    #[test]
    fn test_message_status_decodes_from_uint8() {
        let data = U256::from(3).to_be_bytes::<32>();
        let status = IBridge::getMessageStatusCall::abi_decode_returns(&data).unwrap();

        assert!(matches!(status, LibBridgeStatus::MessageStatus::FAILED));
    }

    #[test]
    fn test_send_message_signature() {
        assert_eq!(
            IBridge::sendMessageCall::SIGNATURE,
            "sendMessage((uint256,address,uint256,uint256,address,address,address,uint256,uint256,uint256,uint256,bytes,string))"
        );
        assert_eq!(
            IBridge::MessageStatusChanged::SIGNATURE,
            "MessageStatusChanged(bytes32,uint8,address)"
        );
    }
}
