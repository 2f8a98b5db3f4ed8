//! Selection state and its resolution into the center-pane header.
//!
//! The selection is a bare id. It is never validated against the watchlist:
//! a stale id simply resolves to the fallback header.

use serde::Serialize;

use crate::domain::{Direction, StockItem};
use crate::watchlist::Watchlist;

/// The currently selected instrument id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    id: String,
}

impl Selection {
    /// Start on the first flattened item, or an empty id if there is none.
    pub fn initial(watchlist: &Watchlist) -> Self {
        Self {
            id: watchlist.first_id().unwrap_or_default().to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.id = id.into();
        log::debug!("selected {}", self.id);
    }

    pub fn is_selected(&self, item: &StockItem) -> bool {
        item.id == self.id
    }

    pub fn resolve<'a>(&self, watchlist: &'a Watchlist) -> Option<&'a StockItem> {
        watchlist.find(&self.id)
    }

    pub fn header(&self, watchlist: &Watchlist) -> QuoteHeader {
        QuoteHeader::from(self.resolve(watchlist))
    }

    /// Move one row down the flattened list, stopping at the last row.
    pub fn select_next(&mut self, watchlist: &Watchlist) {
        let target = match watchlist.position(&self.id) {
            Some(pos) => (pos + 1).min(watchlist.len().saturating_sub(1)),
            None => 0,
        };
        self.select_index(watchlist, target);
    }

    /// Move one row up the flattened list, stopping at the first row.
    pub fn select_prev(&mut self, watchlist: &Watchlist) {
        let target = match watchlist.position(&self.id) {
            Some(pos) => pos.saturating_sub(1),
            None => 0,
        };
        self.select_index(watchlist, target);
    }

    pub fn select_first(&mut self, watchlist: &Watchlist) {
        self.select_index(watchlist, 0);
    }

    pub fn select_last(&mut self, watchlist: &Watchlist) {
        self.select_index(watchlist, watchlist.len().saturating_sub(1));
    }

    fn select_index(&mut self, watchlist: &Watchlist, index: usize) {
        if let Some(item) = watchlist.item_at(index) {
            if item.id != self.id {
                self.select(item.id.clone());
            }
        }
    }
}

/// Display fields of the center-pane header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteHeader {
    pub name: String,
    pub code: String,
    pub market_label: String,
    pub price_text: String,
    pub change_text: String,
    pub direction: Direction,
}

impl QuoteHeader {
    /// Placeholder shown when the selected id matches nothing.
    pub fn fallback() -> Self {
        Self {
            name: "-".to_string(),
            code: String::new(),
            market_label: String::new(),
            price_text: String::new(),
            change_text: String::new(),
            direction: Direction::Flat,
        }
    }

    /// "code · market" sub-line.
    pub fn code_line(&self) -> String {
        format!("{} · {}", self.code, self.market_label)
    }
}

impl From<Option<&StockItem>> for QuoteHeader {
    fn from(item: Option<&StockItem>) -> Self {
        match item {
            Some(item) => Self {
                name: item.name.clone(),
                code: item.code.clone(),
                market_label: item.market_label.clone(),
                price_text: item.price_text.clone(),
                change_text: item.change_text.clone(),
                direction: item.direction(),
            },
            None => Self::fallback(),
        }
    }
}
