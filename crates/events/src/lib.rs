//! Event log helpers on top of the generated bindings.
//!
//! - [`scan::EventScanner`]: decoded events over a historical block range
//! - [`watch::EventSubscription`]: pull new events one at a time
//! - [`watch::watch_events`]: push new events into a channel until it closes

pub mod scan;
pub mod watch;

pub use scan::{chunk_ranges, EventScanner, DEFAULT_CHUNK_SIZE};
pub use watch::{watch_events, EventSubscription, WatchError};
