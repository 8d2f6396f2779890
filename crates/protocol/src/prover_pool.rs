use crate::types::ProverEntry;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use binding::prover_pool::ProverPool;
use eyre::WrapErr;
use tracing::debug;

/// Reads prover entries from the ProverPool.
pub struct ProverPoolProvider<P> {
    provider: P,
    prover_pool: Address,
}

impl<P> ProverPoolProvider<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, prover_pool: Address) -> Self {
        Self {
            provider,
            prover_pool,
        }
    }

    /// Every entry of `getProvers()`, in pool order.
    pub async fn get_provers(&self) -> eyre::Result<Vec<ProverEntry>> {
        let pool = ProverPool::new(self.prover_pool, &self.provider);
        let provers = pool
            .getProvers()
            .call()
            .await
            .wrap_err("Failed to call ProverPool.getProvers")?;

        debug!(count = provers.len(), "Fetched provers");

        Ok(provers.into_iter().map(ProverEntry::from).collect())
    }

    pub async fn get_prover(&self, address: Address) -> eyre::Result<Option<ProverEntry>> {
        let pool = ProverPool::new(self.prover_pool, &self.provider);
        let prover = pool
            .getProver(address)
            .call()
            .await
            .wrap_err_with(|| format!("Failed to get prover {address}"))?;

        if prover.addr.is_zero() {
            Ok(None)
        } else {
            Ok(Some(prover.into()))
        }
    }

    /// Total remaining capacity across all provers.
    pub async fn get_capacity(&self) -> eyre::Result<U256> {
        let pool = ProverPool::new(self.prover_pool, &self.provider);
        let capacity = pool
            .getCapacity()
            .call()
            .await
            .wrap_err("Failed to call ProverPool.getCapacity")?;
        Ok(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Bytes};
    use alloy_provider::ProviderBuilder;
    use alloy_sol_types::SolValue;
    use alloy_transport::mock::Asserter;

    const PROVER_POOL: Address = address!("0x6666666666666666666666666666666666666666");

    fn prover(addr: Address, staked: u64) -> ProverPool::Prover {
        ProverPool::Prover {
            addr,
            stakedAmount: U256::from(staked),
            rewards: U256::ZERO,
            healthScore: 100,
            capacity: 8,
            feeMultiplier: 150,
        }
    }

    #[tokio::test]
    async fn test_get_provers_keeps_every_entry_in_order() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        let pool = ProverPoolProvider::new(provider, PROVER_POOL);

        let first = address!("0x00000000000000000000000000000000000000a1");
        let provers = vec![prover(first, 1_000), prover(Address::ZERO, 0)];
        asserter.push_success(&Bytes::from(provers.abi_encode()));

        let entries = pool.get_provers().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].address, first);
        assert_eq!(entries[0].staked_amount, U256::from(1_000));
        assert!(entries[1].address.is_zero());
    }

    #[tokio::test]
    async fn test_unknown_prover_is_none() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        let pool = ProverPoolProvider::new(provider, PROVER_POOL);

        asserter.push_success(&Bytes::from(prover(Address::ZERO, 0).abi_encode()));

        let entry = pool
            .get_prover(address!("0x00000000000000000000000000000000000000b2"))
            .await
            .unwrap();
        assert!(entry.is_none());
    }
}
