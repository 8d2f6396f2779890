//! JSON ABI of every bound contract, derived from the `sol!` declarations.

use crate::{
    address_manager::{AddressManager, AddressResolver},
    bridge::IBridge,
    ether_vault::EtherVault,
    prover_pool::ProverPool,
    signal_service::SignalService,
    taiko_l1::{get_config_abi, TaikoL1},
    taiko_l2::TaikoL2,
    taiko_token::TaikoToken,
    token_vault::TokenVault,
};
use alloy_json_abi::JsonAbi;

/// Names accepted by [`contract_abi`].
pub const CONTRACT_NAMES: &[&str] = &[
    "TaikoL1",
    "TaikoL2",
    "Bridge",
    "TokenVault",
    "EtherVault",
    "SignalService",
    "AddressManager",
    "AddressResolver",
    "ProverPool",
    "TaikoToken",
];

/// Returns the JSON ABI of a bound contract, or `None` for an unknown name.
///
/// Matching is case-insensitive.
pub fn contract_abi(name: &str) -> Option<JsonAbi> {
    let abi = match name.to_ascii_lowercase().as_str() {
        "taikol1" => {
            let mut abi = TaikoL1::abi::contract();
            // replace the flat `uint256[25]` output with the `TaikoData.Config` tuple
            abi.functions.insert("getConfig".to_string(), vec![get_config_abi()]);
            abi
        }
        "taikol2" => TaikoL2::abi::contract(),
        "bridge" | "ibridge" => IBridge::abi::contract(),
        "tokenvault" => TokenVault::abi::contract(),
        "ethervault" => EtherVault::abi::contract(),
        "signalservice" => SignalService::abi::contract(),
        "addressmanager" => AddressManager::abi::contract(),
        "addressresolver" => AddressResolver::abi::contract(),
        "proverpool" => ProverPool::abi::contract(),
        "taikotoken" => TaikoToken::abi::contract(),
        _ => return None,
    };

    Some(abi)
}
