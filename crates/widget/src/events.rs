//! Click-event dispatch.
//!
//! The host observes clicks through the document interface and reports the
//! zone the click landed in, the marker class of the actionable element, and
//! the `data-id` of the enclosing card or cart item if there is one. An
//! explicit dispatch table maps those to semantic [`UiEvent`]s, so handler
//! lookup is decoupled from markup structure.

use golden_fork_core::ProductId;

/// Where a click originated, for event delegation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The page header: hamburger, cart icon, account button.
    Header,
    /// The product card grid.
    ProductGrid,
    /// The cart tray's item list and close button.
    CartList,
    /// Links and buttons inside the open mobile menu.
    MobileMenu,
    /// The account sidebar.
    AccountSidebar,
    /// The sign-in and register modal forms.
    AuthForms,
}

/// A semantic user action, produced by [`dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    AddToCart(ProductId),
    IncrementLine(ProductId),
    DecrementLine(ProductId),
    ToggleMobileMenu,
    /// A navigational link inside the mobile menu; closes the menu.
    MenuNavigate,
    OpenAccountSidebar,
    CloseAccountSidebar,
    ToggleCartTray,
    CloseCartTray,
    OpenSignIn,
    OpenRegister,
    CloseForms,
}

/// Map a delegated click to its event.
///
/// `action` is the marker class on the actionable element (`card-btn`,
/// `plus`, `hamburger`, ...); `product_id` is the `data-id` of the
/// enclosing card or cart item when present. Unknown combinations return
/// `None` and the click is ignored.
#[must_use]
pub fn dispatch(zone: Zone, action: &str, product_id: Option<ProductId>) -> Option<UiEvent> {
    match (zone, action) {
        (Zone::ProductGrid, "card-btn") => product_id.map(UiEvent::AddToCart),
        (Zone::CartList, "plus") => product_id.map(UiEvent::IncrementLine),
        (Zone::CartList, "minus") => product_id.map(UiEvent::DecrementLine),
        (Zone::CartList, "close-btn") => Some(UiEvent::CloseCartTray),
        (Zone::Header, "hamburger") => Some(UiEvent::ToggleMobileMenu),
        (Zone::Header, "cart-icon") => Some(UiEvent::ToggleCartTray),
        (Zone::Header, "account-btn") => Some(UiEvent::OpenAccountSidebar),
        // Plain nav links auto-close the menu. Buttons that open other
        // panels are dispatched as those panels' events instead; their
        // exclusivity rules close the menu on their own.
        (Zone::MobileMenu, "nav-link") => Some(UiEvent::MenuNavigate),
        (Zone::MobileMenu | Zone::AccountSidebar | Zone::Header, "sign-in-btn")
        | (Zone::AuthForms, "sign-in-link") => Some(UiEvent::OpenSignIn),
        (Zone::AccountSidebar, "close-sidebar-btn") => Some(UiEvent::CloseAccountSidebar),
        (Zone::AuthForms, "register-link") => Some(UiEvent::OpenRegister),
        (Zone::AuthForms, "close-form-btn") => Some(UiEvent::CloseForms),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_add_to_cart_needs_id() {
        let id = ProductId::new(3);
        assert_eq!(
            dispatch(Zone::ProductGrid, "card-btn", Some(id)),
            Some(UiEvent::AddToCart(id))
        );
        assert_eq!(dispatch(Zone::ProductGrid, "card-btn", None), None);
    }

    #[test]
    fn test_cart_quantity_buttons() {
        let id = ProductId::new(1);
        assert_eq!(
            dispatch(Zone::CartList, "plus", Some(id)),
            Some(UiEvent::IncrementLine(id))
        );
        assert_eq!(
            dispatch(Zone::CartList, "minus", Some(id)),
            Some(UiEvent::DecrementLine(id))
        );
    }

    #[test]
    fn test_header_buttons() {
        assert_eq!(
            dispatch(Zone::Header, "hamburger", None),
            Some(UiEvent::ToggleMobileMenu)
        );
        assert_eq!(
            dispatch(Zone::Header, "cart-icon", None),
            Some(UiEvent::ToggleCartTray)
        );
        assert_eq!(
            dispatch(Zone::Header, "account-btn", None),
            Some(UiEvent::OpenAccountSidebar)
        );
    }

    #[test]
    fn test_menu_links_and_form_buttons() {
        assert_eq!(
            dispatch(Zone::MobileMenu, "nav-link", None),
            Some(UiEvent::MenuNavigate)
        );
        assert_eq!(
            dispatch(Zone::MobileMenu, "sign-in-btn", None),
            Some(UiEvent::OpenSignIn)
        );
        assert_eq!(
            dispatch(Zone::AuthForms, "register-link", None),
            Some(UiEvent::OpenRegister)
        );
        assert_eq!(
            dispatch(Zone::AuthForms, "sign-in-link", None),
            Some(UiEvent::OpenSignIn)
        );
        assert_eq!(
            dispatch(Zone::AuthForms, "close-form-btn", None),
            Some(UiEvent::CloseForms)
        );
    }

    #[test]
    fn test_unknown_pairs_ignored() {
        assert_eq!(dispatch(Zone::Header, "nav-link", None), None);
        assert_eq!(dispatch(Zone::ProductGrid, "plus", Some(ProductId::new(1))), None);
        assert_eq!(dispatch(Zone::AuthForms, "hamburger", None), None);
    }
}
