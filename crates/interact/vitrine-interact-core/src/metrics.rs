//! Frame-pass bookkeeping.
//!
//! Counters that make the throttling contracts directly assertable: how many
//! scroll events arrived vs how many frame passes actually ran, how many
//! resize events were absorbed per debounce flush, and output volume.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub frames: u64,
    pub scroll_events: u64,
    pub scroll_passes: u64,
    pub resize_events: u64,
    pub resize_flushes: u64,
    pub reveals: u64,
    pub counters_completed: u64,
    pub reinitializations: u64,
    pub ops_emitted: u64,
    pub events_emitted: u64,
}

impl Metrics {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
