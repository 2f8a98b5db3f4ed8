//! Mocktrade Core — watchlist model for the mock-trading page.
//!
//! - Domain types (instrument rows, groups, change direction)
//! - Watchlist with sample data and TOML loading
//! - Selection state and center-pane header resolution
//! - The fixed set of right-pane info tabs

pub mod domain;
pub mod selection;
pub mod tabs;
pub mod watchlist;

pub use domain::{Direction, StockGroup, StockItem};
pub use selection::{QuoteHeader, Selection};
pub use tabs::{InfoTab, TabParseError};
pub use watchlist::{Watchlist, WatchlistError};
