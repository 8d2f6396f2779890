pub mod config;
pub mod event;
pub mod metrics;

use crate::{
    event::{EventKind, Layer, LogEvent},
    metrics::Metrics,
};
use ::config::NetworkConfig;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types_eth::{BlockNumberOrTag, Log};
use alloy_sol_types::SolEvent;
use binding::{bridge::IBridge, prover_pool::ProverPool, taiko_l1::TaikoL1, taiko_l2::TaikoL2};
use events::EventScanner;
use protocol::ProtocolStateProvider;
use std::time::Duration;
use tokio::{sync::mpsc, time};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Buffer between the log poller and the printer.
const WATCH_CHANNEL_SIZE: usize = 256;

/// Install the global tracing subscriber, `info` unless `RUST_LOG` says otherwise.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Log every `E` emitted by `address` in `[from, to]`, returning how many were found.
pub async fn scan_events<P, E>(
    provider: P,
    address: Address,
    from: BlockNumberOrTag,
    to: BlockNumberOrTag,
    kind: EventKind,
    metrics: &Metrics,
) -> eyre::Result<usize>
where
    P: Provider + Clone,
    E: SolEvent + LogEvent,
{
    let scanner = EventScanner::new(provider);
    let found = match scanner.scan::<E>(address, from, to).await {
        Ok(found) => found,
        Err(e) => {
            metrics.record_rpc_failure("scan");
            return Err(e);
        }
    };

    for (event, log) in &found {
        metrics.record_event(kind.name());
        event.log_event(log);
    }

    info!(event = kind.name(), %address, count = found.len(), "Scan complete");

    Ok(found.len())
}

/// Log new `E` events emitted by `address` until interrupted or the subscription fails.
pub async fn watch<P, E>(
    provider: P,
    address: Address,
    kind: EventKind,
    metrics: &Metrics,
) -> eyre::Result<()>
where
    P: Provider + Clone,
    E: SolEvent + LogEvent + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel::<(E, Log)>(WATCH_CHANNEL_SIZE);

    let watcher = events::watch_events(provider, address, tx);
    tokio::pin!(watcher);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(event = kind.name(), %address, "Watching for events");

    loop {
        tokio::select! {
            Some((event, log)) = rx.recv() => {
                metrics.record_event(kind.name());
                event.log_event(&log);
            }
            result = &mut watcher => {
                while let Ok((event, log)) = rx.try_recv() {
                    metrics.record_event(kind.name());
                    event.log_event(&log);
                }
                if result.is_err() {
                    metrics.record_rpc_failure("watch");
                }
                return result.map_err(Into::into);
            }
            _ = &mut shutdown => {
                info!("Interrupted, stopping watch");
                return Ok(());
            }
        }
    }
}

/// Scan the event selected by `kind` on `layer`.
pub async fn scan_kind<P>(
    provider: P,
    network: &NetworkConfig,
    kind: EventKind,
    layer: Layer,
    from: BlockNumberOrTag,
    to: BlockNumberOrTag,
    metrics: &Metrics,
) -> eyre::Result<usize>
where
    P: Provider + Clone,
{
    let address = kind.source(layer, network)?;

    match (kind, layer) {
        (EventKind::BlockCommitted, _) => {
            scan_events::<_, TaikoL1::BlockCommitted>(provider, address, from, to, kind, metrics)
                .await
        }
        (EventKind::BlockProposed, _) => {
            scan_events::<_, TaikoL1::BlockProposed>(provider, address, from, to, kind, metrics)
                .await
        }
        (EventKind::BlockProven, _) => {
            scan_events::<_, TaikoL1::BlockProven>(provider, address, from, to, kind, metrics)
                .await
        }
        (EventKind::BlockVerified, _) => {
            scan_events::<_, TaikoL1::BlockVerified>(provider, address, from, to, kind, metrics)
                .await
        }
        (EventKind::HeaderSynced, Layer::L1) => {
            scan_events::<_, TaikoL1::HeaderSynced>(provider, address, from, to, kind, metrics)
                .await
        }
        (EventKind::HeaderSynced, Layer::L2) => {
            scan_events::<_, TaikoL2::HeaderSynced>(provider, address, from, to, kind, metrics)
                .await
        }
        (EventKind::BlockInvalidated, _) => {
            scan_events::<_, TaikoL2::BlockInvalidated>(provider, address, from, to, kind, metrics)
                .await
        }
        (EventKind::MessageSent, _) => {
            scan_events::<_, IBridge::MessageSent>(provider, address, from, to, kind, metrics).await
        }
        (EventKind::MessageStatusChanged, _) => {
            scan_events::<_, IBridge::MessageStatusChanged>(
                provider, address, from, to, kind, metrics,
            )
            .await
        }
        (EventKind::Staked, _) => {
            scan_events::<_, ProverPool::Staked>(provider, address, from, to, kind, metrics).await
        }
        (EventKind::Slashed, _) => {
            scan_events::<_, ProverPool::Slashed>(provider, address, from, to, kind, metrics).await
        }
    }
}

/// Watch the event selected by `kind` on `layer`.
pub async fn watch_kind<P>(
    provider: P,
    network: &NetworkConfig,
    kind: EventKind,
    layer: Layer,
    metrics: &Metrics,
) -> eyre::Result<()>
where
    P: Provider + Clone,
{
    let address = kind.source(layer, network)?;

    match (kind, layer) {
        (EventKind::BlockCommitted, _) => {
            watch::<_, TaikoL1::BlockCommitted>(provider, address, kind, metrics).await
        }
        (EventKind::BlockProposed, _) => {
            watch::<_, TaikoL1::BlockProposed>(provider, address, kind, metrics).await
        }
        (EventKind::BlockProven, _) => {
            watch::<_, TaikoL1::BlockProven>(provider, address, kind, metrics).await
        }
        (EventKind::BlockVerified, _) => {
            watch::<_, TaikoL1::BlockVerified>(provider, address, kind, metrics).await
        }
        (EventKind::HeaderSynced, Layer::L1) => {
            watch::<_, TaikoL1::HeaderSynced>(provider, address, kind, metrics).await
        }
        (EventKind::HeaderSynced, Layer::L2) => {
            watch::<_, TaikoL2::HeaderSynced>(provider, address, kind, metrics).await
        }
        (EventKind::BlockInvalidated, _) => {
            watch::<_, TaikoL2::BlockInvalidated>(provider, address, kind, metrics).await
        }
        (EventKind::MessageSent, _) => {
            watch::<_, IBridge::MessageSent>(provider, address, kind, metrics).await
        }
        (EventKind::MessageStatusChanged, _) => {
            watch::<_, IBridge::MessageStatusChanged>(provider, address, kind, metrics).await
        }
        (EventKind::Staked, _) => {
            watch::<_, ProverPool::Staked>(provider, address, kind, metrics).await
        }
        (EventKind::Slashed, _) => {
            watch::<_, ProverPool::Slashed>(provider, address, kind, metrics).await
        }
    }
}

/// Poll the L1 sync state every `period` and publish it to the gauges.
///
/// Read failures are logged and counted; the loop keeps going until interrupted.
pub async fn follow_state<P>(
    state: &ProtocolStateProvider<P>,
    period: Duration,
    metrics: &Metrics,
) -> eyre::Result<()>
where
    P: Provider + Clone,
{
    let mut interval = time::interval(period);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(taiko_l1 = %state.address(), ?period, "Following L1 state");

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match state.get_l1_state().await {
                    Ok(l1_state) => {
                        metrics.set_l1_state(&l1_state);
                        info!(
                            next_block_id = l1_state.next_block_id,
                            latest_verified_id = l1_state.latest_verified_id,
                            latest_verified_height = l1_state.latest_verified_height,
                            pending = l1_state.num_pending_blocks(),
                            "L1 state"
                        );
                    }
                    Err(e) => {
                        metrics.record_rpc_failure("getStateVariables");
                        warn!("Failed to read L1 state: {}", e);
                    }
                }
            }
            _ = &mut shutdown => {
                info!("Interrupted, stopping");
                return Ok(());
            }
        }
    }
}
