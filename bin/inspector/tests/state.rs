//! Integration tests for protocol state reads against a live deployment.
//!
//! Run with `--ignored` after creating `tests/test-config.toml`.

use crate::setup::{load_test_config, setup_l1_provider, setup_l2_provider};
use alloy_primitives::U256;
use alloy_provider::Provider;
use binding::{
    address_manager::{registry_key, AddressManager},
    taiko_l2::TaikoL2,
};
use protocol::{L1State, ProtocolStateProvider, ProverPoolProvider};


#[tokio::test]
#[ignore = "requires a live L1 endpoint"]
async fn test_state_variables_project_to_l1_state() {
    let config = load_test_config();
    let provider = setup_l1_provider(&config).await;
    let state = ProtocolStateProvider::new(provider, config.network.l1.taiko_l1);

    let vars = state.get_protocol_state_variables().await.unwrap();
    let l1_state = state.get_l1_state().await.unwrap();
    println!("{vars:#?}");

    // Blocks may be proposed between the two reads.
    assert_eq!(l1_state.genesis_height, L1State::from(&vars).genesis_height);
    assert!(l1_state.next_block_id >= vars.next_block_id);
    assert!(l1_state.next_block_id > l1_state.latest_verified_id);
}

#[tokio::test]
#[ignore = "requires a live L1 endpoint"]
async fn test_config_matches_network() {
    let config = load_test_config();
    let provider = setup_l1_provider(&config).await;
    let state = ProtocolStateProvider::new(provider, config.network.l1.taiko_l1);

    let protocol_config = state.get_config().await.unwrap();
    assert_eq!(
        protocol_config.chain_id,
        U256::from(config.network.l2_chain_id)
    );
}

#[tokio::test]
#[ignore = "requires a live L1 endpoint"]
async fn test_genesis_block_and_header() {
    let config = load_test_config();
    let provider = setup_l1_provider(&config).await;
    let state = ProtocolStateProvider::new(provider, config.network.l1.taiko_l1);

    let genesis = state.get_proposed_block(0).await.unwrap();
    println!("{genesis:#?}");

    let synced = state.get_synced_header(0).await.unwrap();
    assert!(!synced.is_zero());
}

#[tokio::test]
#[ignore = "requires a live L1 endpoint"]
async fn test_address_manager_resolves_taiko() {
    let config = load_test_config();
    let provider = setup_l1_provider(&config).await;

    let resolved = AddressManager::new(config.network.l1.address_manager, &provider)
        .getAddress(registry_key(config.network.l1_chain_id, "taiko"))
        .call()
        .await
        .unwrap();

    assert_eq!(resolved, config.network.l1.taiko_l1);
}

#[tokio::test]
#[ignore = "requires a live L2 endpoint"]
async fn test_l2_anchor_tracks_l1() {
    let config = load_test_config();
    let provider = setup_l2_provider(&config).await;
    let taiko_l2 = TaikoL2::new(config.network.l2.taiko_l2, &provider);

    let height = taiko_l2.latestSyncedL1Height().call().await.unwrap();
    let header = taiko_l2.getLatestSyncedHeader().call().await.unwrap();
    println!("L2 synced L1 height {height}, hash {header}");

    assert!(provider.get_block_number().await.unwrap() > 0);
}

#[tokio::test]
#[ignore = "requires a live L1 endpoint with a ProverPool"]
async fn test_staked_provers_have_addresses() {
    let config = load_test_config();
    let Some(prover_pool) = config.network.l1.prover_pool else {
        eprintln!("No ProverPool configured, skipping");
        return;
    };
    let provider = setup_l1_provider(&config).await;
    let pool = ProverPoolProvider::new(provider, prover_pool);

    let provers = pool.get_provers().await.unwrap();
    assert!(provers
        .iter()
        .filter(|p| !p.staked_amount.is_zero())
        .all(|p| !p.address.is_zero()));
}
