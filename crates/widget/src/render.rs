//! Markup projection and the render-target seam.
//!
//! View structs convert domain state into template data; Askama templates
//! produce full-replacement markup for each document region. Rendering side
//! effects go through the [`RenderTarget`] trait, so the engine runs
//! headlessly against a [`RecordingTarget`] in tests and against a real
//! document adapter in a browser host.

use std::collections::HashMap;

use askama::Template;
use golden_fork_core::Product;
use rust_decimal::Decimal;

use crate::cart::{Cart, CartLine};
use crate::config::CarouselConfig;
use crate::notify::{Notification, NotificationKind, NotificationQueue, Phase};
use crate::panels::{MenuIcon, Panel};

/// Replaceable document regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The product card grid.
    ProductGrid,
    /// The cart tray's item list.
    CartItems,
    /// The cart badge showing the total item count.
    CartCount,
    /// The cart tray's total price line.
    CartTotal,
    /// The notification stack.
    Notifications,
}

/// The structured-document collaborator.
///
/// Implementations must silently skip operations whose region or element is
/// absent from the document; partial-page environments degrade to blank
/// regions instead of failing.
pub trait RenderTarget {
    /// Replace a region's markup wholesale.
    fn replace_region(&mut self, region: Region, html: &str);

    /// Assign a region's text content (cart count, cart total).
    fn set_text(&mut self, region: Region, text: &str);

    /// Toggle a panel's open class.
    fn set_panel_open(&mut self, panel: Panel, open: bool);

    /// Swap the hamburger button's icon.
    fn set_menu_icon(&mut self, icon: MenuIcon);

    /// Suspend or restore background scroll.
    fn set_scroll_lock(&mut self, locked: bool);

    /// Initialize the decorative carousel, if the host has one.
    fn init_carousel(&mut self, _config: &CarouselConfig) {}
}

// =============================================================================
// View Types
// =============================================================================

/// Product card display data.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Cart item display data.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub line_total: String,
    /// Renders the slide-out class during the removal-pending window.
    pub removing: bool,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.as_i32(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            quantity: line.quantity,
            line_total: format_amount(line.line_total()),
            removing: line.pending_removal,
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// An empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: format_amount(cart.total_price()),
            item_count: cart.total_items(),
        }
    }
}

/// Notification display data.
#[derive(Debug, Clone)]
pub struct NotificationView {
    pub success: bool,
    pub kind_class: &'static str,
    pub exiting: bool,
    pub image: Option<String>,
    pub message: String,
}

impl NotificationView {
    fn new(note: &Notification, quantity_cap: u32) -> Self {
        let exiting = note.phase == Phase::Exiting;
        match &note.kind {
            NotificationKind::Success { quantity, image } => Self {
                success: true,
                kind_class: "success",
                exiting,
                image: Some(image.clone()),
                message: format!("{quantity} added to cart!"),
            },
            NotificationKind::Error => Self {
                success: false,
                kind_class: "error",
                exiting,
                image: None,
                message: format!("The maximum order quantity is {quantity_cap} items."),
            },
        }
    }
}

/// Format a decimal amount as a display price.
pub(crate) fn format_amount(amount: Decimal) -> String {
    format!("${amount:.2}")
}

// =============================================================================
// Templates
// =============================================================================

/// Product grid fragment.
#[derive(Template)]
#[template(path = "product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductView>,
}

/// Cart items fragment, including the empty-state message.
#[derive(Template)]
#[template(path = "cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Notification stack fragment, newest first.
#[derive(Template)]
#[template(path = "notifications.html")]
pub struct NotificationsTemplate {
    pub notes: Vec<NotificationView>,
}

/// Render the product grid for a catalog.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_product_grid(catalog: &[Product]) -> askama::Result<String> {
    ProductGridTemplate {
        products: catalog.iter().map(ProductView::from).collect(),
    }
    .render()
}

/// Render the cart item list (or the empty state).
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_cart_items(cart: &Cart) -> askama::Result<String> {
    CartItemsTemplate {
        cart: CartView::from(cart),
    }
    .render()
}

/// Render the notification stack.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_notifications(
    queue: &NotificationQueue,
    quantity_cap: u32,
) -> askama::Result<String> {
    NotificationsTemplate {
        notes: queue
            .entries()
            .map(|note| NotificationView::new(note, quantity_cap))
            .collect(),
    }
    .render()
}

// =============================================================================
// Recording Target
// =============================================================================

/// A [`RenderTarget`] that records every call, for headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    /// Last markup written per region.
    pub regions: HashMap<Region, String>,
    /// Last text written per region.
    pub texts: HashMap<Region, String>,
    /// Last open/closed state pushed per panel.
    pub panels: HashMap<Panel, bool>,
    /// Last icon pushed.
    pub menu_icon: Option<MenuIcon>,
    /// Last scroll-lock state pushed.
    pub scroll_locked: Option<bool>,
    /// Carousel configurations received.
    pub carousels: Vec<CarouselConfig>,
}

impl RecordingTarget {
    /// Create an empty recording target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last markup for a region, if any was written.
    #[must_use]
    pub fn region_html(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Whether a panel was last pushed as open.
    #[must_use]
    pub fn panel_open(&self, panel: Panel) -> bool {
        self.panels.get(&panel).copied().unwrap_or(false)
    }
}

impl RenderTarget for RecordingTarget {
    fn replace_region(&mut self, region: Region, html: &str) {
        self.regions.insert(region, html.to_string());
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.texts.insert(region, text.to_string());
    }

    fn set_panel_open(&mut self, panel: Panel, open: bool) {
        self.panels.insert(panel, open);
    }

    fn set_menu_icon(&mut self, icon: MenuIcon) {
        self.menu_icon = Some(icon);
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = Some(locked);
    }

    fn init_carousel(&mut self, config: &CarouselConfig) {
        self.carousels.push(config.clone());
    }
}
