use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::Provider;
use binding::taiko_l1::TaikoL1;
use eyre::WrapErr;
use tracing::{info, warn};

/// Send `verifyBlocks(max_blocks)` and wait for the receipt.
///
/// The provider must be able to sign, see `client::create_wallet_provider`.
pub async fn verify_blocks<P>(provider: P, taiko_l1: Address, max_blocks: u64) -> eyre::Result<TxHash>
where
    P: Provider + Clone,
{
    let contract = TaikoL1::new(taiko_l1, &provider);

    info!(max_blocks, "Sending verifyBlocks");

    let pending = contract
        .verifyBlocks(U256::from(max_blocks))
        .send()
        .await
        .wrap_err("Failed to send verifyBlocks")?;
    let receipt = pending
        .get_receipt()
        .await
        .wrap_err("Failed to get verifyBlocks receipt")?;

    ensure_success(receipt.transaction_hash(), receipt.status(), receipt.block_number())
}

/// Fail unless the receipt reports success.
fn ensure_success(tx_hash: TxHash, status: bool, block: Option<u64>) -> eyre::Result<TxHash> {
    if !status {
        warn!(tx = %tx_hash, "verifyBlocks reverted");
        return Err(eyre::eyre!("verifyBlocks transaction {} reverted", tx_hash));
    }

    info!(tx = %tx_hash, block = ?block, "verifyBlocks included");

    Ok(tx_hash)
}
