//! Shared ambient utilities for the WatchTrack crates.

pub mod types;
pub mod utils;
