use alloy_contract::Event;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types_eth::{BlockNumberOrTag, Log};
use alloy_sol_types::SolEvent;
use std::ops::RangeInclusive;
use tokio_retry::{strategy::ExponentialBackoff, Retry};
use tracing::{debug, warn};

/// Default number of blocks per `eth_getLogs` request.
///
/// Most providers cap ranges at 10,000 blocks; this leaves a 500 block margin.
pub const DEFAULT_CHUNK_SIZE: u64 = 9_500;

const MAX_ATTEMPTS: usize = 5;

/// Split `[from, to]` into consecutive inclusive ranges of at most `chunk_size` blocks.
///
/// Returns an empty list when `from > to`. A `chunk_size` of zero is treated as one.
pub fn chunk_ranges(from: u64, to: u64, chunk_size: u64) -> Vec<RangeInclusive<u64>> {
    let chunk_size = chunk_size.max(1);
    let mut ranges = Vec::new();
    let mut current = from;

    while current <= to {
        let end = current.saturating_add(chunk_size - 1).min(to);
        ranges.push(current..=end);

        if end == u64::MAX {
            break;
        }
        current = end + 1;
    }

    ranges
}

/// Queries decoded contract events over block ranges.
pub struct EventScanner<P> {
    provider: P,
    chunk_size: u64,
}

impl<P> EventScanner<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the number of blocks per request.
    pub const fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Get all `E` events emitted by `address` in `[from_block, to_block]`.
    ///
    /// Both ends are resolved to concrete block numbers before any log query,
    /// so every chunk sees the same snapshot even behind a load balancer.
    /// Failed chunks are retried with exponential backoff.
    pub async fn scan<E>(
        &self,
        address: Address,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> eyre::Result<Vec<(E, Log)>>
    where
        E: SolEvent,
    {
        let from = self.resolve_block_number(from_block).await?;
        let to = self.resolve_block_number(to_block).await?;

        if from > to {
            return Err(eyre::eyre!(
                "from_block ({}) must be <= to_block ({})",
                from,
                to
            ));
        }

        debug!(
            event = E::SIGNATURE,
            %address,
            from,
            to,
            "Scanning for events (snapshot taken)"
        );

        let mut all_events = Vec::new();
        for range in chunk_ranges(from, to, self.chunk_size) {
            let events = self
                .scan_chunk_with_retry::<E>(address, *range.start(), *range.end())
                .await?;
            all_events.extend(events);
        }

        Ok(all_events)
    }

    /// Resolve BlockNumberOrTag to a concrete block number.
    pub async fn resolve_block_number(&self, block: BlockNumberOrTag) -> eyre::Result<u64> {
        match block {
            BlockNumberOrTag::Number(n) => Ok(n),
            BlockNumberOrTag::Earliest => Ok(0),
            BlockNumberOrTag::Latest => {
                let block_num = self.provider.get_block_number().await?;
                Ok(block_num)
            }
            _ => Err(eyre::eyre!("Unsupported block tag: {:?}", block)),
        }
    }

    async fn scan_chunk_with_retry<E>(
        &self,
        address: Address,
        from_block: u64,
        to_block: u64,
    ) -> eyre::Result<Vec<(E, Log)>>
    where
        E: SolEvent,
    {
        // 2^n * 50ms: 100ms, 200ms, 400ms, 800ms, 1.6s
        let retry_strategy = ExponentialBackoff::from_millis(2)
            .factor(50)
            .take(MAX_ATTEMPTS);

        Retry::spawn(retry_strategy, || async {
            self.scan_chunk::<E>(address, from_block, to_block)
                .await
                .map_err(|e| {
                    warn!(
                        from = from_block,
                        to = to_block,
                        error = %e,
                        "Chunk scan failed, will retry"
                    );
                    e
                })
        })
        .await
    }

    async fn scan_chunk<E>(
        &self,
        address: Address,
        from_block: u64,
        to_block: u64,
    ) -> eyre::Result<Vec<(E, Log)>>
    where
        E: SolEvent,
    {
        debug!(from = from_block, to = to_block, "Scanning chunk");

        let events = Event::<_, E>::new_sol(&self.provider, &address)
            .from_block(from_block)
            .to_block(to_block)
            .query()
            .await?;

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256, U64};
    use alloy_provider::ProviderBuilder;
    use alloy_sol_types::sol;
    use alloy_transport::mock::Asserter;

    sol! {
        #[derive(Debug)]
        event Ping(uint256 indexed id);
    }

    const EMITTER: Address = address!("0x1111111111111111111111111111111111111111");

    fn ping_log(id: u64, block: u64) -> Log {
        let event = Ping { id: U256::from(id) };
        Log {
            inner: alloy_primitives::Log {
                address: EMITTER,
                data: event.encode_log_data(),
            },
            block_number: Some(block),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_scan_latest_across_chunks_in_order() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        let scanner = EventScanner::new(provider).with_chunk_size(10);

        // eth_blockNumber, then one eth_getLogs per chunk: 0..=9, 10..=19, 20..=25
        asserter.push_success(&U64::from(25));
        asserter.push_success(&vec![ping_log(1, 3), ping_log(2, 8)]);
        asserter.push_success(&Vec::<Log>::new());
        asserter.push_success(&vec![ping_log(3, 25)]);

        let found = scanner
            .scan::<Ping>(EMITTER, BlockNumberOrTag::Number(0), BlockNumberOrTag::Latest)
            .await
            .unwrap();

        let ids: Vec<_> = found.iter().map(|(event, _)| event.id).collect();
        assert_eq!(ids, vec![U256::from(1), U256::from(2), U256::from(3)]);
        assert_eq!(found[2].1.block_number, Some(25));
    }

    #[tokio::test]
    async fn test_scan_retries_failed_chunk() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        let scanner = EventScanner::new(provider);

        asserter.push_failure_msg("query timeout");
        asserter.push_success(&vec![ping_log(7, 50)]);

        let found = scanner
            .scan::<Ping>(
                EMITTER,
                BlockNumberOrTag::Number(40),
                BlockNumberOrTag::Number(60),
            )
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0.id, U256::from(7));
    }

    #[tokio::test]
    async fn test_scan_rejects_inverted_range() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter);
        let scanner = EventScanner::new(provider);

        let err = scanner
            .scan::<Ping>(
                EMITTER,
                BlockNumberOrTag::Number(10),
                BlockNumberOrTag::Number(5),
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "from_block (10) must be <= to_block (5)");
    }

    #[tokio::test]
    async fn test_pending_tag_is_unsupported() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter);
        let scanner = EventScanner::new(provider);

        assert!(scanner
            .resolve_block_number(BlockNumberOrTag::Pending)
            .await
            .is_err());
    }

    #[test]
    fn test_chunk_ranges_cover_range_exactly() {
        let ranges = chunk_ranges(100, 25_000, 10_000);

        assert_eq!(ranges, vec![100..=10_099, 10_100..=20_099, 20_100..=25_000]);
    }

    #[test]
    fn test_chunk_ranges_single_block() {
        assert_eq!(chunk_ranges(7, 7, DEFAULT_CHUNK_SIZE), vec![7..=7]);
    }

    #[test]
    fn test_chunk_ranges_empty_when_inverted() {
        assert!(chunk_ranges(10, 9, DEFAULT_CHUNK_SIZE).is_empty());
    }

    #[test]
    fn test_chunk_ranges_zero_chunk_size() {
        assert_eq!(chunk_ranges(1, 3, 0), vec![1..=1, 2..=2, 3..=3]);
    }

    #[test]
    fn test_chunk_ranges_end_of_u64() {
        let ranges = chunk_ranges(u64::MAX - 1, u64::MAX, 10);
        assert_eq!(ranges, vec![u64::MAX - 1..=u64::MAX]);
    }

    #[test]
    fn test_chunk_ranges_contiguous() {
        let ranges = chunk_ranges(0, 123_456, DEFAULT_CHUNK_SIZE);

        assert_eq!(*ranges[0].start(), 0);
        assert_eq!(*ranges.last().unwrap().end(), 123_456);
        for pair in ranges.windows(2) {
            assert_eq!(*pair[0].end() + 1, *pair[1].start());
            assert!(pair[0].end() - pair[0].start() < DEFAULT_CHUNK_SIZE);
        }
    }
}
