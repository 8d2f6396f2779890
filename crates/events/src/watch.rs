//! Live event delivery.
//!
//! Both helpers install an `eth_newFilter` log filter and poll it, so they
//! only see logs emitted after the filter is created. Use
//! [`EventScanner`](crate::EventScanner) for history.

use alloy_contract::Event;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types_eth::Log;
use alloy_sol_types::SolEvent;
use futures::{Stream, StreamExt};
use std::pin::Pin;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

type DecodedStream<E> = Pin<Box<dyn Stream<Item = alloy_sol_types::Result<(E, Log)>> + Send>>;

#[derive(Error, Debug)]
pub enum WatchError {
    /// The log filter could not be installed
    #[error("Failed to subscribe: {0}")]
    Subscribe(String),

    /// A log matched the filter but did not decode as the expected event
    #[error("Failed to decode event: {0}")]
    Decode(#[from] alloy_sol_types::Error),

    /// The underlying poller stopped
    #[error("Subscription closed")]
    Closed,
}

/// A live subscription to one event type emitted by one contract.
///
/// Events are pulled with [`next`](Self::next).
pub struct EventSubscription<P, E> {
    // keeps the RPC client alive for the poller
    _provider: P,
    stream: DecodedStream<E>,
}

impl<P, E> EventSubscription<P, E>
where
    P: Provider + Clone,
    E: SolEvent + Send + 'static,
{
    /// Install a log filter for `E` on `address`.
    pub async fn subscribe(provider: P, address: Address) -> Result<Self, WatchError> {
        let poller = Event::<_, E>::new_sol(&provider, &address)
            .watch()
            .await
            .map_err(|e| WatchError::Subscribe(e.to_string()))?;

        debug!(event = E::SIGNATURE, %address, "Subscribed to events");

        Ok(Self {
            stream: Box::pin(poller.into_stream()),
            _provider: provider,
        })
    }

    /// Wait for the next event.
    ///
    /// Returns `None` once the poller has stopped.
    pub async fn next(&mut self) -> Option<Result<(E, Log), WatchError>> {
        self.stream
            .next()
            .await
            .map(|item| item.map_err(WatchError::from))
    }
}

/// Forward every new `E` event emitted by `address` into `sink`.
///
/// Runs until the receiving half of `sink` is dropped, which returns `Ok(())`,
/// or until the subscription fails, which returns the error.
pub async fn watch_events<P, E>(
    provider: P,
    address: Address,
    sink: mpsc::Sender<(E, Log)>,
) -> Result<(), WatchError>
where
    P: Provider + Clone,
    E: SolEvent + Send + 'static,
{
    let mut subscription = EventSubscription::<P, E>::subscribe(provider, address).await?;

    loop {
        tokio::select! {
            // cancellation wins over a ready event
            biased;
            _ = sink.closed() => {
                debug!(event = E::SIGNATURE, "Sink closed, stopping watch");
                return Ok(());
            }
            next = subscription.next() => match next {
                Some(Ok(item)) => {
                    if sink.send(item).await.is_err() {
                        return Ok(());
                    }
                }
                Some(Err(e)) => return Err(e),
                None => return Err(WatchError::Closed),
            },
        }
    }
}
