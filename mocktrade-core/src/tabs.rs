//! Right-pane info tabs — a fixed, closed set of three.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which info tab is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoTab {
    #[default]
    Summary,
    Finance,
    Issue,
}

/// Unknown tab key.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tab {0:?} (expected summary, finance or issue)")]
pub struct TabParseError(pub String);

impl InfoTab {
    pub const ALL: [InfoTab; 3] = [InfoTab::Summary, InfoTab::Finance, InfoTab::Issue];

    pub fn index(self) -> usize {
        match self {
            InfoTab::Summary => 0,
            InfoTab::Finance => 1,
            InfoTab::Issue => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Stable key: "summary", "finance", "issue".
    pub fn key(self) -> &'static str {
        match self {
            InfoTab::Summary => "summary",
            InfoTab::Finance => "finance",
            InfoTab::Issue => "issue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InfoTab::Summary => "요약",
            InfoTab::Finance => "재무",
            InfoTab::Issue => "이슈",
        }
    }

    /// Placeholder card text until server data exists.
    pub fn placeholder(self) -> &'static str {
        match self {
            InfoTab::Summary => "요약 영역(추후 서버 데이터)",
            InfoTab::Finance => "재무 영역(추후 서버 데이터)",
            InfoTab::Issue => "이슈 영역(추후 서버 데이터)",
        }
    }

    pub fn next(self) -> InfoTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> InfoTab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for InfoTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InfoTab {
    type Err = TabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TabParseError(s.to_string()))
    }
}
