//! Watchlist — ordered groups of instruments.
//!
//! The built-in sample list stands in for server data. A watchlist can also be
//! loaded from a TOML file with `[[groups]]` tables and nested
//! `[[groups.items]]` rows. Ids must be unique across all groups.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{StockGroup, StockItem};

/// Errors from loading or saving a watchlist.
#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error("read watchlist file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse watchlist TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize watchlist: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("duplicate instrument id {0:?}")]
    DuplicateId(String),
}

/// The complete watchlist, rendered in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    #[serde(default)]
    pub groups: Vec<StockGroup>,
}

impl Watchlist {
    /// Build a watchlist, rejecting duplicate ids.
    pub fn new(groups: Vec<StockGroup>) -> Result<Self, WatchlistError> {
        let watchlist = Self { groups };
        watchlist.validate()?;
        Ok(watchlist)
    }

    /// Load a watchlist from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, WatchlistError> {
        let content = std::fs::read_to_string(path).map_err(|source| WatchlistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let watchlist = Self::from_toml(&content)?;
        log::info!(
            "loaded watchlist from {}: {} groups, {} items",
            path.display(),
            watchlist.groups.len(),
            watchlist.len()
        );
        Ok(watchlist)
    }

    /// Load from `path` when given, otherwise the built-in sample.
    pub fn load(path: Option<&Path>) -> Result<Self, WatchlistError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::sample()),
        }
    }

    /// Parse a watchlist from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, WatchlistError> {
        let watchlist: Watchlist = toml::from_str(content)?;
        watchlist.validate()?;
        Ok(watchlist)
    }

    /// Serialize the watchlist to TOML.
    pub fn to_toml(&self) -> Result<String, WatchlistError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), WatchlistError> {
        let mut seen = HashSet::new();
        for item in self.items() {
            if !seen.insert(item.id.as_str()) {
                log::warn!("rejecting watchlist: duplicate id {}", item.id);
                return Err(WatchlistError::DuplicateId(item.id.clone()));
            }
        }
        Ok(())
    }

    /// All items, group order then item order.
    pub fn items(&self) -> impl Iterator<Item = &StockItem> + '_ {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Flattened view of every item.
    pub fn flatten(&self) -> Vec<&StockItem> {
        self.items().collect()
    }

    /// Linear search by id; first match wins.
    pub fn find(&self, id: &str) -> Option<&StockItem> {
        self.items().find(|item| item.id == id)
    }

    /// Flat index of the item with this id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items().position(|item| item.id == id)
    }

    pub fn item_at(&self, index: usize) -> Option<&StockItem> {
        self.items().nth(index)
    }

    /// Id of the first flattened item, if any.
    pub fn first_id(&self) -> Option<&str> {
        self.items().next().map(|item| item.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First item whose name, code or id contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Option<&StockItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.items().find(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.code.to_lowercase().contains(&needle)
                || item.id.to_lowercase().contains(&needle)
        })
    }

    /// The sample watchlist shown until server data exists.
    pub fn sample() -> Self {
        Self {
            groups: vec![
                StockGroup::new(
                    "국내종목",
                    vec![
                        StockItem::new("005930", "삼성전자", "005930", "코스피", "107,900", "-0.46%")
                            .with_logo("S"),
                        StockItem::new("086520", "에코프로", "086520", "코스닥", "116,500", "-1.10%")
                            .with_logo("E"),
                        StockItem::new("034020", "두산에너빌리티", "034020", "코스피", "76,700", "0.00%")
                            .with_logo("D"),
                    ],
                ),
                StockGroup::new(
                    "해외종목",
                    vec![
                        StockItem::new("AAPL", "애플", "AAPL", "NASDAQ", "$277.18", "-0.26%")
                            .with_logo("A"),
                        StockItem::new("MSFT", "마이크로소프트", "MSFT", "NASDAQ", "$492.02", "+0.20%")
                            .with_logo("M"),
                        StockItem::new("TSLA", "테슬라", "TSLA", "NASDAQ", "$445.17", "+1.27%")
                            .with_logo("T"),
                    ],
                ),
                StockGroup::new(
                    "가상화폐",
                    vec![
                        StockItem::new("BTC", "비트코인", "BTC", "KRW", "137,473,000", "+0.70%")
                            .with_logo("₿"),
                    ],
                ),
            ],
        }
    }
}
