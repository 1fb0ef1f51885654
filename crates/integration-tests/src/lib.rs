//! Integration tests for the Golden Fork storefront widget.
//!
//! These tests drive the full [`App`](golden_fork_widget::App) headlessly
//! against a [`RecordingTarget`](golden_fork_widget::RecordingTarget) — no
//! browser, no server. Scenarios live in `tests/`.
//!
//! # Test Categories
//!
//! - `widget_flow` - Cart, notification, and panel scenarios
//! - `catalog_fallback` - Startup behavior when the catalog fetch fails

#![cfg_attr(not(test), forbid(unsafe_code))]

use golden_fork_widget::{App, RecordingTarget, WidgetConfig};

/// A started app with the fallback catalog installed and a recording
/// target, the common fixture for scenario tests.
///
/// # Panics
///
/// Panics if the default configuration is rejected, which would be a bug.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn seeded_app() -> App<RecordingTarget> {
    let mut app = App::new(WidgetConfig::default(), RecordingTarget::new())
        .expect("default config is valid");
    app.install_catalog(golden_fork_widget::fallback_catalog());
    app
}
