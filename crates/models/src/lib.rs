pub mod errors;
pub mod db;
pub mod targets;
pub mod user;
pub mod movie;
pub mod series;
pub mod season;
pub mod episode;
pub mod review;
pub mod watch_history;
pub mod watchlist;

pub use targets::{ReviewTarget, WatchTarget, WatchlistTarget};

#[cfg(test)]
mod tests;
