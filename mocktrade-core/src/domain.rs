//! Domain types — instruments, groups, and change direction.
//!
//! Every field is a presentation string. Prices and changes are shown exactly
//! as given; nothing here parses them into numbers.

use serde::{Deserialize, Serialize};

/// One instrument row in the watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    /// Unique across the whole watchlist.
    pub id: String,
    pub name: String,
    pub code: String,
    /// Free-text market label (코스피, NASDAQ, KRW, ...).
    pub market_label: String,
    pub price_text: String,
    /// Sign-prefixed percentage text, e.g. "-0.46%".
    pub change_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_text: Option<String>,
}

impl StockItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        market_label: impl Into<String>,
        price_text: impl Into<String>,
        change_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            market_label: market_label.into(),
            price_text: price_text.into(),
            change_text: change_text.into(),
            logo_text: None,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo_text = Some(logo.into());
        self
    }

    /// Logo glyph, falling back to the first character of the name.
    pub fn logo(&self) -> String {
        match &self.logo_text {
            Some(logo) => logo.clone(),
            None => self.name.chars().next().map(String::from).unwrap_or_default(),
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::classify(&self.change_text)
    }

    pub fn is_up(&self) -> bool {
        self.direction() == Direction::Up
    }

    pub fn is_down(&self) -> bool {
        self.direction() == Direction::Down
    }
}

/// A titled category of instruments (국내종목, 해외종목, 가상화폐).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<StockItem>,
}

impl StockGroup {
    pub fn new(title: impl Into<String>, items: Vec<StockItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Direction of a change string, decided by its leading sign only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    /// No leading sign: "0.00%", empty, or malformed text.
    Flat,
}

impl Direction {
    /// Classify by the first character of the trimmed text.
    pub fn classify(change_text: &str) -> Self {
        let trimmed = change_text.trim();
        if trimmed.starts_with('+') {
            Direction::Up
        } else if trimmed.starts_with('-') {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Flat => "flat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_leading_sign() {
        assert_eq!(Direction::classify("+1.27%"), Direction::Up);
        assert_eq!(Direction::classify("-0.46%"), Direction::Down);
        assert_eq!(Direction::classify("0.00%"), Direction::Flat);
    }

    #[test]
    fn classify_trims_whitespace() {
        assert_eq!(Direction::classify("  +0.20% "), Direction::Up);
        assert_eq!(Direction::classify("\t-1.10%"), Direction::Down);
    }

    #[test]
    fn malformed_text_is_flat() {
        assert_eq!(Direction::classify(""), Direction::Flat);
        assert_eq!(Direction::classify("n/a"), Direction::Flat);
        assert_eq!(Direction::classify("1.5%+"), Direction::Flat);
    }

    #[test]
    fn logo_falls_back_to_first_char() {
        let item = StockItem::new("AAPL", "애플", "AAPL", "NASDAQ", "$277.18", "-0.26%");
        assert_eq!(item.logo(), "애");
        let item = item.with_logo("A");
        assert_eq!(item.logo(), "A");
    }

    #[test]
    fn empty_name_has_empty_logo() {
        let item = StockItem::new("X", "", "X", "", "", "");
        assert_eq!(item.logo(), "");
    }

    #[test]
    fn up_and_down_are_exclusive() {
        let up = StockItem::new("MSFT", "마이크로소프트", "MSFT", "NASDAQ", "$492.02", "+0.20%");
        assert!(up.is_up());
        assert!(!up.is_down());
        let flat = StockItem::new("034020", "두산에너빌리티", "034020", "코스피", "76,700", "0.00%");
        assert!(!flat.is_up());
        assert!(!flat.is_down());
    }
}
