//! Mocktrade TUI — the mock-trading page as a terminal interface.
//!
//! Layout:
//! - Top bar: brand, search box, login button
//! - Left: watchlist groups with clickable rows
//! - Center: selected instrument header and chart placeholders
//! - Right: 요약 / 재무 / 이슈 tabs with placeholder cards

pub mod app;
pub mod hit_map;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use hit_map::{HitMap, HitTarget};
pub use theme::Theme;
