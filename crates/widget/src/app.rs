//! The widget coordinator.
//!
//! [`App`] owns all state and the render target, routes [`UiEvent`]s into
//! the cart and panel state machines, manages deferred mutations through
//! the scheduler, and pushes re-renders of affected regions after every
//! change. Hosts drive it with three calls: `start` once, `handle` per
//! delegated click, `tick` from their timer source.

use std::time::Duration;

use golden_fork_core::{Product, ProductId};

use crate::cart::{AddOutcome, QuantityOutcome};
use crate::catalog::CatalogLoader;
use crate::config::{ConfigError, WidgetConfig};
use crate::events::UiEvent;
use crate::notify::NotificationKind;
use crate::panels::{Panel, PanelState};
use crate::render::{self, Region, RenderTarget};
use crate::state::{AppState, Task};

/// The storefront widget application.
pub struct App<T: RenderTarget> {
    config: WidgetConfig,
    state: AppState,
    target: T,
}

impl<T: RenderTarget> App<T> {
    /// Create the app with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: WidgetConfig, target: T) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = AppState::new(config.quantity_cap);
        Ok(Self {
            config,
            state,
            target,
        })
    }

    /// Start the session: carousel, initial render, catalog load.
    ///
    /// The catalog fetch is awaited once, bounded by the configured
    /// timeout; on any failure the fallback catalog is installed instead,
    /// so the grid is never empty.
    pub async fn start(&mut self) {
        if self.config.carousel.enabled {
            self.target.init_carousel(&self.config.carousel);
        }
        self.sync_panels();
        self.render_cart();

        let loader = CatalogLoader::new(self.config.catalog_url.clone(), self.config.fetch_timeout);
        let catalog = loader.load().await;
        self.install_catalog(catalog);
    }

    /// Replace the catalog and re-render the product grid.
    ///
    /// The previous product list is destroyed; cart lines keep the product
    /// snapshots they were created with.
    pub fn install_catalog(&mut self, catalog: Vec<Product>) {
        self.state.catalog = catalog;
        self.render_catalog();
    }

    /// Route a semantic user event.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::AddToCart(id) => self.add_to_cart(id),
            UiEvent::IncrementLine(id) => self.increment_line(id),
            UiEvent::DecrementLine(id) => self.decrement_line(id),
            UiEvent::ToggleMobileMenu => self.with_panels(PanelState::toggle_mobile_menu),
            UiEvent::MenuNavigate => self.with_panels(PanelState::close_mobile_menu),
            UiEvent::OpenAccountSidebar => self.with_panels(PanelState::open_account_sidebar),
            UiEvent::CloseAccountSidebar => self.with_panels(PanelState::close_account_sidebar),
            UiEvent::ToggleCartTray => self.with_panels(PanelState::toggle_cart_tray),
            UiEvent::CloseCartTray => self.with_panels(PanelState::close_cart_tray),
            UiEvent::OpenSignIn => self.with_panels(PanelState::open_sign_in),
            UiEvent::OpenRegister => self.with_panels(PanelState::open_register),
            UiEvent::CloseForms => self.with_panels(PanelState::close_forms),
        }
    }

    /// Advance logical time and apply every deferred mutation now due.
    pub fn tick(&mut self, elapsed: Duration) {
        for task in self.state.scheduler.advance(elapsed) {
            self.apply(task);
        }
    }

    /// Time until the next scheduled task, for a host driving `tick`.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.scheduler.next_deadline()
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &crate::cart::Cart {
        &self.state.cart
    }

    /// The current panel flags.
    #[must_use]
    pub fn panels(&self) -> &PanelState {
        &self.state.panels
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.state.catalog
    }

    /// The render target, for hosts that need to inspect it.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    // =========================================================================
    // Cart Actions
    // =========================================================================

    fn add_to_cart(&mut self, id: ProductId) {
        // Unknown product: defensive no-op, not surfaced
        let Some(product) = self
            .state
            .catalog
            .iter()
            .find(|product| product.id == id)
            .cloned()
        else {
            return;
        };

        match self.state.cart.add(&product) {
            AddOutcome::Added { quantity, revived } => {
                if revived
                    && let Some(task) = self.state.removal_tasks.remove(&id)
                {
                    self.state.scheduler.cancel(task);
                }
                self.notify_user(NotificationKind::Success {
                    quantity,
                    image: product.image,
                });
                self.render_cart();
            }
            AddOutcome::Capped => self.notify_user(NotificationKind::Error),
        }
    }

    fn increment_line(&mut self, id: ProductId) {
        match self.state.cart.increment(id) {
            QuantityOutcome::Changed(_) => self.render_cart(),
            QuantityOutcome::Capped => self.notify_user(NotificationKind::Error),
            QuantityOutcome::Emptied | QuantityOutcome::Missing => {}
        }
    }

    fn decrement_line(&mut self, id: ProductId) {
        match self.state.cart.decrement(id) {
            QuantityOutcome::Changed(_) => self.render_cart(),
            QuantityOutcome::Emptied => {
                let task = self
                    .state
                    .scheduler
                    .schedule(self.config.line_removal_delay, Task::RemoveCartLine(id));
                self.state.removal_tasks.insert(id, task);
                // Immediate re-render shows the slide-out state
                self.render_cart();
            }
            QuantityOutcome::Capped | QuantityOutcome::Missing => {}
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Issue a notification, superseding whatever is on screen.
    ///
    /// Supersession is immediate and non-blocking: the pending auto-dismiss
    /// is cancelled, displayed entries start their exit, and the new entry
    /// goes up front with a fresh lifetime.
    fn notify_user(&mut self, kind: NotificationKind) {
        if let Some(task) = self.state.dismiss_task.take() {
            self.state.scheduler.cancel(task);
        }
        for retired in self.state.notifications.begin_exit_all() {
            self.state
                .scheduler
                .schedule(self.config.notification_exit, Task::DropNotification(retired));
        }
        let id = self.state.notifications.push(kind);
        self.state.dismiss_task = Some(
            self.state
                .scheduler
                .schedule(self.config.notification_lifetime, Task::RetireNotification(id)),
        );
        self.render_notifications();
    }

    // =========================================================================
    // Deferred Tasks
    // =========================================================================

    fn apply(&mut self, task: Task) {
        match task {
            Task::RemoveCartLine(id) => {
                self.state.removal_tasks.remove(&id);
                self.state.cart.remove(id);
                self.render_cart();
            }
            Task::RetireNotification(id) => {
                self.state.dismiss_task = None;
                if self.state.notifications.begin_exit(id) {
                    self.state
                        .scheduler
                        .schedule(self.config.notification_exit, Task::DropNotification(id));
                }
                self.render_notifications();
            }
            Task::DropNotification(id) => {
                self.state.notifications.remove(id);
                self.render_notifications();
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn with_panels(&mut self, op: fn(&mut PanelState)) {
        op(&mut self.state.panels);
        self.sync_panels();
    }

    /// Push every panel class, the hamburger icon, and the derived scroll
    /// lock. One scroll-lock call per sync, computed over all five flags.
    fn sync_panels(&mut self) {
        for panel in Panel::ALL {
            self.target
                .set_panel_open(panel, self.state.panels.is_open(panel));
        }
        self.target.set_menu_icon(self.state.panels.menu_icon());
        self.target.set_scroll_lock(self.state.panels.scroll_locked());
    }

    fn render_catalog(&mut self) {
        match render::render_product_grid(&self.state.catalog) {
            Ok(html) => self.target.replace_region(Region::ProductGrid, &html),
            Err(e) => tracing::error!("product grid render failed: {e}"),
        }
    }

    fn render_cart(&mut self) {
        match render::render_cart_items(&self.state.cart) {
            Ok(html) => self.target.replace_region(Region::CartItems, &html),
            Err(e) => tracing::error!("cart render failed: {e}"),
        }
        self.target
            .set_text(Region::CartCount, &self.state.cart.total_items().to_string());
        self.target.set_text(
            Region::CartTotal,
            &render::format_amount(self.state.cart.total_price()),
        );
    }

    fn render_notifications(&mut self) {
        match render::render_notifications(&self.state.notifications, self.config.quantity_cap) {
            Ok(html) => self.target.replace_region(Region::Notifications, &html),
            Err(e) => tracing::error!("notification render failed: {e}"),
        }
    }
}
