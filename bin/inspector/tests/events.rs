//! Integration tests for event scanning against a live deployment.

use crate::setup::{load_test_config, setup_l1_provider};
use alloy_provider::Provider;
use alloy_rpc_types_eth::BlockNumberOrTag;
use binding::taiko_l1::TaikoL1;
use events::EventScanner;
use inspector::{
    event::{EventKind, Layer},
    metrics::Metrics,
    scan_kind,
};


#[tokio::test]
#[ignore = "requires a live L1 endpoint"]
async fn test_scan_block_proposed_in_order() {
    let config = load_test_config();
    let provider = setup_l1_provider(&config).await;

    let latest = provider.get_block_number().await.unwrap();
    let from = latest.saturating_sub(10_000);

    let scanner = EventScanner::new(provider).with_chunk_size(1_000);
    let proposed = scanner
        .scan::<TaikoL1::BlockProposed>(
            config.network.l1.taiko_l1,
            BlockNumberOrTag::Number(from),
            BlockNumberOrTag::Number(latest),
        )
        .await
        .unwrap();

    println!("Found {} BlockProposed events", proposed.len());

    let ids: Vec<_> = proposed.iter().map(|(event, _)| event.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
#[ignore = "requires a live L1 endpoint"]
async fn test_scan_kind_counts_verified_blocks() {
    let config = load_test_config();
    let provider = setup_l1_provider(&config).await;
    let latest = provider.get_block_number().await.unwrap();

    let count = scan_kind(
        provider,
        &config.network,
        EventKind::BlockVerified,
        Layer::L1,
        BlockNumberOrTag::Number(latest.saturating_sub(1_000)),
        BlockNumberOrTag::Latest,
        &Metrics::new(),
    )
    .await
    .unwrap();

    println!("Found {count} BlockVerified events");
}
