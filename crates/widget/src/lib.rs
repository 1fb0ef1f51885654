//! Golden Fork storefront widget engine.
//!
//! A client-side shopping cart widget for a single-page food-ordering
//! storefront: catalog loading with a built-in fallback, an in-memory cart
//! with a per-line quantity cap, a supersession-based notification queue,
//! and mutual-exclusion coordination of five overlay panels.
//!
//! # Architecture
//!
//! - Pure state machines ([`cart`], [`panels`], [`notify`]) separated from
//!   rendering side effects
//! - Askama templates project state into full-replacement markup fragments
//! - The [`render::RenderTarget`] trait is the only seam to the document,
//!   so the whole engine runs headlessly
//! - Deferred mutations (line removal, notification expiry) are scheduled
//!   tasks with cancellation handles, not raw timers
//!
//! # Example
//!
//! ```rust,no_run
//! use golden_fork_widget::{App, RecordingTarget, WidgetConfig, Zone, dispatch};
//! use golden_fork_core::ProductId;
//!
//! # async fn run() -> Result<(), golden_fork_widget::ConfigError> {
//! let mut app = App::new(WidgetConfig::default(), RecordingTarget::new())?;
//! app.start().await;
//!
//! // A delegated click on an "Add to cart" button
//! if let Some(event) = dispatch(Zone::ProductGrid, "card-btn", Some(ProductId::new(1))) {
//!     app.handle(event);
//! }
//!
//! // Drive deferred work from the host's timer source
//! app.tick(std::time::Duration::from_millis(300));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod events;
pub mod notify;
pub mod panels;
pub mod render;
pub mod schedule;
mod state;

pub use app::App;
pub use cart::{AddOutcome, Cart, CartLine, QuantityOutcome};
pub use catalog::{CatalogError, CatalogLoader, fallback_catalog, parse_catalog};
pub use config::{CarouselConfig, ConfigError, WidgetConfig};
pub use events::{UiEvent, Zone, dispatch};
pub use notify::{Notification, NotificationId, NotificationKind, NotificationQueue, Phase};
pub use panels::{MenuIcon, Panel, PanelState};
pub use render::{RecordingTarget, Region, RenderTarget};
pub use schedule::{Scheduler, TaskId};
