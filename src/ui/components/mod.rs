//! Reusable UI Components
//!
//! ## Components
//!
//! - `MetricCard` - Title, value and detail in a rounded card
//! - `StatusIndicator` - Loading spinner, error banner and health dots
//! - `DialogFrame` - Centered overlay with rounded borders

mod dialog_frame;
mod metric_card;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use metric_card::{render_metric_card, MetricCard};
pub use status_indicator::{health_line, render_status_indicator, StatusIndicatorType};
