//! Clickable regions recorded while rendering a frame.

use ratatui::layout::{Position, Rect};

use mocktrade_core::InfoTab;

use crate::app::PageAction;

/// What a click on a region does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// A watchlist row, by instrument id.
    Row(String),
    Tab(InfoTab),
    Search,
    Action(PageAction),
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost region containing the cell; later pushes win.
    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| target)
    }

    /// First region registered for a target.
    pub fn area_of(&self, target: &HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| t == target)
            .map(|(area, _)| *area)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
