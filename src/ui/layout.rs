//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the shell and pages ask: how wide the sidebar is, whether it
//! fits at all, and how many metric cards go on one row.

use ratatui::layout::Rect;

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Below this the sidebar is replaced by the navigation overlay
    pub const SM_WIDTH: u16 = 80;
    /// Below this metric cards wrap to two per row
    pub const MD_WIDTH: u16 = 120;
}

/// Sidebar width when expanded
pub const SIDEBAR_WIDTH: u16 = 22;

/// Sidebar width when collapsed to icons
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    /// Check if the terminal is too narrow for the sidebar (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Width taken by the sidebar, zero when it does not fit.
    pub fn sidebar_width(&self, collapsed: bool) -> u16 {
        if self.is_narrow() {
            0
        } else if collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        }
    }

    /// Metric cards per row for a content area of `content_width` columns.
    pub fn metric_columns(content_width: u16) -> usize {
        if content_width < breakpoints::SM_WIDTH - SIDEBAR_WIDTH {
            1
        } else if content_width < breakpoints::MD_WIDTH - SIDEBAR_WIDTH {
            2
        } else {
            4
        }
    }
}
