//! Panic hook that puts the terminal back before the report prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal restore in front of the current panic hook.
///
/// Call after `color_eyre::install()` so its report is what gets printed.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
