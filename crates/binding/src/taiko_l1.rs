//! TaikoL1 rollup contract bindings.
//!
//! Includes:
//! - `TaikoData` library structs (block metadata, evidence, fork choice)
//! - [`ProtocolConfig`], the `TaikoData.Config` tuple returned by `getConfig()`
//! - `LibUtils.StateVariables`, the tuple returned by `getStateVariables()`
//! - `TaikoL1`, the L1 contract blocks are proposed to, proven and verified on

use alloy_json_abi::{Function, InternalType, Param, StateMutability};
use alloy_primitives::U256;
use alloy_sol_types::{sol, SolCall};

sol! {
    /// Data types shared by the TaikoL1 protocol libraries.
    library TaikoData {
        /// Metadata of a proposed L2 block.
        #[derive(Debug, PartialEq, Eq)]
        struct BlockMetadata {
            uint256 id;
            uint256 l1Height;
            bytes32 l1Hash;
            address beneficiary;
            bytes32 txListHash;
            bytes32 mixHash;
            bytes extraData;
            uint64 gasLimit;
            uint64 timestamp;
            uint64 commitHeight;
            uint64 commitSlot;
        }

        /// L2 block header as submitted with a proof.
        #[derive(Debug, PartialEq, Eq)]
        struct BlockHeader {
            bytes32 parentHash;
            bytes32 ommersHash;
            address beneficiary;
            bytes32 stateRoot;
            bytes32 transactionsRoot;
            bytes32 receiptsRoot;
            bytes32[8] logsBloom;
            uint256 difficulty;
            uint128 height;
            uint64 gasLimit;
            uint64 gasUsed;
            uint64 timestamp;
            bytes extraData;
            bytes32 mixHash;
            uint64 nonce;
            uint256 baseFeePerGas;
        }

        /// Proof evidence, ABI-encoded as the first `proveBlock` input.
        #[derive(Debug, PartialEq, Eq)]
        struct Evidence {
            BlockMetadata meta;
            BlockHeader header;
            address prover;
            bytes[] proofs;
            uint16 circuitId;
        }

        /// A proposed block as stored in the block ring buffer.
        #[derive(Debug, PartialEq, Eq)]
        struct ProposedBlock {
            bytes32 metaHash;
            uint256 deposit;
            address proposer;
            uint64 proposedAt;
        }

        /// A proven (blockId, parentHash) pair.
        #[derive(Debug, PartialEq, Eq)]
        struct ForkChoice {
            bytes32 blockHash;
            uint64 provenAt;
            address[] provers;
        }
    }

    library LibUtils {
        /// Snapshot of TaikoL1's mutable state.
        #[derive(Debug, PartialEq, Eq)]
        struct StateVariables {
            uint256 feeBase;
            uint64 genesisHeight;
            uint64 genesisTimestamp;
            uint64 nextBlockId;
            uint64 lastProposedAt;
            uint64 avgBlockTime;
            uint64 latestVerifiedHeight;
            uint64 latestVerifiedId;
            uint64 avgProofTime;
        }
    }

    /// TaikoL1 - Rollup contract on L1
    #[sol(rpc, abi)]
    #[allow(clippy::too_many_arguments)]
    interface TaikoL1 {
        error L1_0_FEE_BASE();
        error L1_ALREADY_PROVEN();
        error L1_BLOCK_NUMBER();
        error L1_CANNOT_BE_FIRST_PROVER();
        error L1_COMMITTED();
        error L1_CONFLICT_PROOF();
        error L1_CONTRACT_NOT_ALLOWED();
        error L1_DUP_PROVERS();
        error L1_EXTRA_DATA();
        error L1_GAS_LIMIT();
        error L1_HALTED();
        error L1_HALT_CONDITION();
        error L1_ID();
        error L1_INPUT_SIZE();
        error L1_INVALID_CONFIG();
        error L1_INVALID_EVIDENCE();
        error L1_INVALID_PARAM();
        error L1_INVALID_PROOF();
        error L1_NOT_COMMITTED();
        error L1_NOT_ORACLE_PROVER();
        error L1_PROOF_LENGTH();
        error L1_PROVER();
        error L1_SOLO_PROVER();
        error L1_TOO_MANY_BLOCKS();
        error L1_TX_LIST();
        error L1_ZKP();

        event BlockCommitted(uint64 commitSlot, bytes32 commitHash);

        /// Emitted when a block is proposed
        event BlockProposed(uint256 indexed id, TaikoData.BlockMetadata meta);

        /// Emitted when a fork choice receives a proof
        event BlockProven(
            uint256 indexed id,
            bytes32 parentHash,
            bytes32 blockHash,
            uint64 timestamp,
            uint64 provenAt,
            address prover
        );

        /// Emitted when a block becomes final
        event BlockVerified(uint256 indexed id, bytes32 blockHash);

        event HeaderSynced(uint256 indexed height, uint256 indexed srcHeight, bytes32 srcHash);

        event Halted(bool halted);

        event Initialized(uint8 version);

        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);

        function init(address _addressManager, bytes32 _genesisBlockHash, uint256 _feeBase) external;

        /// Commit a block hash ahead of proposing (anti front-running)
        function commitBlock(uint64 commitSlot, bytes32 commitHash) external;

        /// Propose a block: inputs[0] = abi.encode(BlockMetadata), inputs[1] = txList
        function proposeBlock(bytes[] calldata inputs) external;

        /// Prove a block: inputs[0] = abi.encode(Evidence), inputs[1..] = receipts
        function proveBlock(uint256 blockId, bytes[] calldata inputs) external;

        function proveBlockInvalid(uint256 blockId, bytes[] calldata inputs) external;

        /// Verify up to `maxBlocks` proven blocks
        function verifyBlocks(uint256 maxBlocks) external;

        function withdrawBalance() external;

        function halt(bool toHalt) external;

        function isHalted() external view returns (bool);

        function balances(address addr) external view returns (uint256);

        function getBlockFee() external view returns (uint256 premiumFee);

        function getProofReward(uint64 provenAt, uint64 proposedAt)
            external view returns (uint256 reward);

        function isCommitValid(uint256 commitSlot, uint256 commitHeight, bytes32 commitHash)
            external view returns (bool);

        function getProposedBlock(uint256 id)
            external view returns (TaikoData.ProposedBlock memory);

        function getSyncedHeader(uint256 number) external view returns (bytes32);

        function getLatestSyncedHeader() external view returns (bytes32);

        /// Current protocol state snapshot
        function getStateVariables() external view returns (LibUtils.StateVariables memory);

        function signWithGoldenTouch(bytes32 hash, uint8 k)
            external view returns (uint8 v, uint256 r, uint256 s);

        function getForkChoice(uint256 id, bytes32 parentHash)
            external view returns (TaikoData.ForkChoice memory);

        function getUncleProofDelay(uint256 blockId) external view returns (uint64);

        /// Protocol constants, one word per `TaikoData.Config` field.
        ///
        /// Every field is static, so the 25-field tuple encodes exactly like
        /// `uint256[25]`. Decode with `ProtocolConfig::from_words`.
        function getConfig() external pure returns (uint256[25] memory words);

        function addressManager() external view returns (address);

        function owner() external view returns (address);

        function transferOwnership(address newOwner) external;

        function renounceOwnership() external;
    }
}

/// `TaikoData.Config` fields as `(name, solidity type)`, in ABI order.
pub const CONFIG_FIELDS: [(&str, &str); 25] = [
    ("chainId", "uint256"),
    ("maxNumBlocks", "uint256"),
    ("blockHashHistory", "uint256"),
    ("maxVerificationsPerTx", "uint256"),
    ("commitConfirmations", "uint256"),
    ("blockMaxGasLimit", "uint256"),
    ("maxTransactionsPerBlock", "uint256"),
    ("maxBytesPerTxList", "uint256"),
    ("minTxGasLimit", "uint256"),
    ("anchorTxGasLimit", "uint256"),
    ("slotSmoothingFactor", "uint256"),
    ("rewardBurnBips", "uint256"),
    ("proposerDepositPctg", "uint256"),
    ("feeBaseMAF", "uint256"),
    ("blockTimeMAF", "uint256"),
    ("proofTimeMAF", "uint256"),
    ("rewardMultiplierPctg", "uint64"),
    ("feeGracePeriodPctg", "uint64"),
    ("feeMaxPeriodPctg", "uint64"),
    ("blockTimeCap", "uint64"),
    ("proofTimeCap", "uint64"),
    ("bootstrapDiscountHalvingPeriod", "uint64"),
    ("enableTokenomics", "bool"),
    ("enablePublicInputsCheck", "bool"),
    ("enableAnchorValidation", "bool"),
];

/// Protocol constants, `TaikoData.Config`.
///
/// The tuple has more fields than `sol!` can derive a codec for, so it is
/// decoded from the raw words of `getConfig()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolConfig {
    pub chain_id: U256,
    /// Up to 2048 pending blocks
    pub max_num_blocks: U256,
    pub block_hash_history: U256,
    pub max_verifications_per_tx: U256,
    pub commit_confirmations: U256,
    pub block_max_gas_limit: U256,
    pub max_transactions_per_block: U256,
    pub max_bytes_per_tx_list: U256,
    pub min_tx_gas_limit: U256,
    pub anchor_tx_gas_limit: U256,
    pub slot_smoothing_factor: U256,
    pub reward_burn_bips: U256,
    pub proposer_deposit_pctg: U256,
    pub fee_base_maf: U256,
    pub block_time_maf: U256,
    pub proof_time_maf: U256,
    pub reward_multiplier_pctg: u64,
    pub fee_grace_period_pctg: u64,
    pub fee_max_period_pctg: u64,
    pub block_time_cap: u64,
    pub proof_time_cap: u64,
    pub bootstrap_discount_halving_period: u64,
    pub enable_tokenomics: bool,
    pub enable_public_inputs_check: bool,
    pub enable_anchor_validation: bool,
}

impl ProtocolConfig {
    /// Build from the words returned by `getConfig()`.
    ///
    /// Fails if a `uint64` word overflows or a `bool` word is not 0 or 1.
    pub fn from_words(words: &[U256; 25]) -> Result<Self, alloy_sol_types::Error> {
        Ok(Self {
            chain_id: words[0],
            max_num_blocks: words[1],
            block_hash_history: words[2],
            max_verifications_per_tx: words[3],
            commit_confirmations: words[4],
            block_max_gas_limit: words[5],
            max_transactions_per_block: words[6],
            max_bytes_per_tx_list: words[7],
            min_tx_gas_limit: words[8],
            anchor_tx_gas_limit: words[9],
            slot_smoothing_factor: words[10],
            reward_burn_bips: words[11],
            proposer_deposit_pctg: words[12],
            fee_base_maf: words[13],
            block_time_maf: words[14],
            proof_time_maf: words[15],
            reward_multiplier_pctg: word_u64(words, 16)?,
            fee_grace_period_pctg: word_u64(words, 17)?,
            fee_max_period_pctg: word_u64(words, 18)?,
            block_time_cap: word_u64(words, 19)?,
            proof_time_cap: word_u64(words, 20)?,
            bootstrap_discount_halving_period: word_u64(words, 21)?,
            enable_tokenomics: word_bool(words, 22)?,
            enable_public_inputs_check: word_bool(words, 23)?,
            enable_anchor_validation: word_bool(words, 24)?,
        })
    }

    /// Decode `getConfig()` return data.
    pub fn abi_decode(data: &[u8]) -> Result<Self, alloy_sol_types::Error> {
        let words = TaikoL1::getConfigCall::abi_decode_returns(data)?;
        Self::from_words(&words)
    }
}

fn word_u64(words: &[U256; 25], index: usize) -> Result<u64, alloy_sol_types::Error> {
    u64::try_from(words[index]).map_err(|_| {
        alloy_sol_types::Error::custom(format!(
            "TaikoData.Config.{} does not fit in uint64",
            CONFIG_FIELDS[index].0
        ))
    })
}

fn word_bool(words: &[U256; 25], index: usize) -> Result<bool, alloy_sol_types::Error> {
    match words[index] {
        w if w.is_zero() => Ok(false),
        w if w == U256::from(1) => Ok(true),
        _ => Err(alloy_sol_types::Error::custom(format!(
            "TaikoData.Config.{} is not a bool",
            CONFIG_FIELDS[index].0
        ))),
    }
}

/// JSON ABI entry of `getConfig()` with its `TaikoData.Config` output tuple.
pub fn get_config_abi() -> Function {
    let components = CONFIG_FIELDS
        .iter()
        .map(|(name, ty)| Param {
            ty: (*ty).to_string(),
            name: (*name).to_string(),
            components: Vec::new(),
            internal_type: None,
        })
        .collect();

    Function {
        name: "getConfig".to_string(),
        inputs: Vec::new(),
        outputs: vec![Param {
            ty: "tuple".to_string(),
            name: String::new(),
            components,
            internal_type: Some(InternalType::Struct {
                contract: Some("TaikoData".to_string()),
                ty: "Config".to_string(),
            }),
        }],
        state_mutability: StateMutability::Pure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, Address, B256, U256};
    use alloy_sol_types::{SolCall, SolError, SolEvent, SolInterface, SolValue};

    fn word(value: u64) -> [u8; 32] {
        U256::from(value).to_be_bytes()
    }

    #[test]
    fn test_state_variables_decode_in_declaration_order() {
        // nine static words, one per field
        let mut data = Vec::new();
        for value in [10_000u64, 100, 1_670_000_000, 42, 1_670_001_000, 12, 99, 40, 600] {
            data.extend_from_slice(&word(value));
        }

        let vars = TaikoL1::getStateVariablesCall::abi_decode_returns(&data).unwrap();

        assert_eq!(vars.feeBase, U256::from(10_000));
        assert_eq!(vars.genesisHeight, 100);
        assert_eq!(vars.genesisTimestamp, 1_670_000_000);
        assert_eq!(vars.nextBlockId, 42);
        assert_eq!(vars.lastProposedAt, 1_670_001_000);
        assert_eq!(vars.avgBlockTime, 12);
        assert_eq!(vars.latestVerifiedHeight, 99);
        assert_eq!(vars.latestVerifiedId, 40);
        assert_eq!(vars.avgProofTime, 600);
    }

    fn config_words() -> Vec<u8> {
        let mut data = Vec::new();
        // uint256 fields carry their index so ordering mistakes show up
        for index in 0..16u64 {
            data.extend_from_slice(&word(1_000 + index));
        }
        for value in [150u64, 125, 400, 4_800, 3_000, 180] {
            data.extend_from_slice(&word(value));
        }
        for value in [1u64, 0, 1] {
            data.extend_from_slice(&word(value));
        }
        data
    }

    #[test]
    fn test_config_decodes_in_declaration_order() {
        let config = ProtocolConfig::abi_decode(&config_words()).unwrap();

        assert_eq!(config.chain_id, U256::from(1_000));
        assert_eq!(config.max_num_blocks, U256::from(1_001));
        assert_eq!(config.block_hash_history, U256::from(1_002));
        assert_eq!(config.anchor_tx_gas_limit, U256::from(1_009));
        assert_eq!(config.fee_base_maf, U256::from(1_013));
        assert_eq!(config.proof_time_maf, U256::from(1_015));
        assert_eq!(config.reward_multiplier_pctg, 150);
        assert_eq!(config.fee_grace_period_pctg, 125);
        assert_eq!(config.fee_max_period_pctg, 400);
        assert_eq!(config.block_time_cap, 4_800);
        assert_eq!(config.proof_time_cap, 3_000);
        assert_eq!(config.bootstrap_discount_halving_period, 180);
        assert!(config.enable_tokenomics);
        assert!(!config.enable_public_inputs_check);
        assert!(config.enable_anchor_validation);
    }

    #[test]
    fn test_config_rejects_non_bool_flag() {
        let mut data = config_words();
        let last = data.len() - 1;
        data[last] = 2;

        let err = ProtocolConfig::abi_decode(&data).unwrap_err();
        assert!(err.to_string().contains("enableAnchorValidation"));
    }

    #[test]
    fn test_config_rejects_overflowing_uint64() {
        let mut data = config_words();
        // high byte of the rewardMultiplierPctg word
        data[16 * 32] = 1;

        let err = ProtocolConfig::abi_decode(&data).unwrap_err();
        assert!(err.to_string().contains("rewardMultiplierPctg"));
    }

    #[test]
    fn test_config_needs_all_words() {
        let data = config_words();
        assert!(ProtocolConfig::abi_decode(&data[..24 * 32]).is_err());
    }

    #[test]
    fn test_get_config_abi_entry() {
        let function = get_config_abi();

        assert_eq!(function.selector().0, TaikoL1::getConfigCall::SELECTOR);
        assert_eq!(function.signature(), "getConfig()");
        let components = &function.outputs[0].components;
        assert_eq!(components.len(), 25);
        assert_eq!(components[0].name, "chainId");
        assert_eq!(components[16].ty, "uint64");
        assert_eq!(components[24].name, "enableAnchorValidation");
    }

    #[test]
    fn test_synced_header_decodes_to_32_bytes() {
        let hash = b256!("0x8f7d3b8fe6fc05a4c0ab0f3ae6e3d4c7e9c0e3f1d2b4a6c8e0f1a3b5c7d9e1f3");
        let decoded = TaikoL1::getSyncedHeaderCall::abi_decode_returns(hash.as_slice()).unwrap();

        assert_eq!(decoded.len(), 32);
        assert_eq!(decoded, hash);
    }

    #[test]
    fn test_truncated_return_data_is_an_error() {
        let data = word(1);
        assert!(TaikoL1::getStateVariablesCall::abi_decode_returns(&data).is_err());
    }

    #[test]
    fn test_fork_choice_decodes_dynamic_provers() {
        let fork_choice = TaikoData::ForkChoice {
            blockHash: b256!("0x1111111111111111111111111111111111111111111111111111111111111111"),
            provenAt: 1_700_000_000,
            provers: vec![
                address!("0x00000000000000000000000000000000000000a1"),
                address!("0x00000000000000000000000000000000000000a2"),
            ],
        };

        // a single dynamic tuple return is encoded exactly like abi.encode(forkChoice)
        let data = fork_choice.abi_encode();
        let decoded = TaikoL1::getForkChoiceCall::abi_decode_returns(&data).unwrap();

        assert_eq!(decoded, fork_choice);
    }

    #[test]
    fn test_sign_with_golden_touch_returns_named_tuple() {
        let mut data = Vec::new();
        data.extend_from_slice(&word(27));
        data.extend_from_slice(&word(1));
        data.extend_from_slice(&word(2));

        let ret = TaikoL1::signWithGoldenTouchCall::abi_decode_returns(&data).unwrap();
        assert_eq!(ret.v, 27);
        assert_eq!(ret.r, U256::from(1));
        assert_eq!(ret.s, U256::from(2));
    }

    #[test]
    fn test_block_proven_event_topics() {
        let event = TaikoL1::BlockProven {
            id: U256::from(7),
            parentHash: b256!("0x0101010101010101010101010101010101010101010101010101010101010101"),
            blockHash: b256!("0x0202020202020202020202020202020202020202020202020202020202020202"),
            timestamp: 1,
            provenAt: 2,
            prover: Address::repeat_byte(0x33),
        };

        let log = event.encode_log_data();
        assert_eq!(log.topics()[0], TaikoL1::BlockProven::SIGNATURE_HASH);
        assert_eq!(log.topics()[1], B256::from(U256::from(7).to_be_bytes::<32>()));

        let decoded = TaikoL1::BlockProven::decode_log_data(&log).unwrap();
        assert_eq!(decoded.id, U256::from(7));
        assert_eq!(decoded.blockHash, event.blockHash);
        assert_eq!(decoded.prover, event.prover);
    }

    #[test]
    fn test_block_proposed_signature_flattens_metadata_tuple() {
        assert_eq!(
            TaikoL1::BlockProposed::SIGNATURE,
            "BlockProposed(uint256,(uint256,uint256,bytes32,address,bytes32,bytes32,bytes,uint64,uint64,uint64,uint64))"
        );
    }

    #[test]
    fn test_custom_error_decodes_from_revert_data() {
        let revert = TaikoL1::L1_TOO_MANY_BLOCKS {}.abi_encode();
        let decoded = TaikoL1::TaikoL1Errors::abi_decode(&revert).unwrap();

        assert!(matches!(
            decoded,
            TaikoL1::TaikoL1Errors::L1_TOO_MANY_BLOCKS(_)
        ));
    }
}
