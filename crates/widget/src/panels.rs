//! Overlay panel coordination.
//!
//! Five overlapping UI panels with exclusivity rules, modeled as one state
//! machine rather than five independent toggles. The hamburger icon and the
//! background scroll lock are derived values, never stored.
//!
//! Rules:
//! - mobile menu and account sidebar are mutually exclusive
//! - opening either of those closes the cart tray
//! - opening the cart tray closes both of those
//! - sign-in and register are mutually exclusive; opening either closes the
//!   mobile menu and the account sidebar
//! - closing a panel never opens anything

/// The five overlay panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    MobileMenu,
    AccountSidebar,
    CartTray,
    SignIn,
    Register,
}

impl Panel {
    /// All panels, for targets that sync every open/closed class.
    pub const ALL: [Self; 5] = [
        Self::MobileMenu,
        Self::AccountSidebar,
        Self::CartTray,
        Self::SignIn,
        Self::Register,
    ];
}

/// The hamburger button's icon, a pure function of the mobile menu flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Menu closed: the bars icon.
    Bars,
    /// Menu open: the cross icon.
    Cross,
}

impl MenuIcon {
    /// The icon's CSS class.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Bars => "fa-bars",
            Self::Cross => "fa-xmark",
        }
    }
}

/// Which panels are currently open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    mobile_menu: bool,
    account_sidebar: bool,
    cart_tray: bool,
    sign_in: bool,
    register: bool,
}

impl PanelState {
    /// All panels closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a panel is open.
    #[must_use]
    pub const fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::MobileMenu => self.mobile_menu,
            Panel::AccountSidebar => self.account_sidebar,
            Panel::CartTray => self.cart_tray,
            Panel::SignIn => self.sign_in,
            Panel::Register => self.register,
        }
    }

    /// The hamburger icon for the current state.
    #[must_use]
    pub const fn menu_icon(&self) -> MenuIcon {
        if self.mobile_menu {
            MenuIcon::Cross
        } else {
            MenuIcon::Bars
        }
    }

    /// Background scroll is suspended while any panel is open.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.mobile_menu
            || self.account_sidebar
            || self.cart_tray
            || self.sign_in
            || self.register
    }

    /// Open the mobile menu, closing the account sidebar and cart tray.
    pub const fn open_mobile_menu(&mut self) {
        self.mobile_menu = true;
        self.account_sidebar = false;
        self.cart_tray = false;
    }

    /// Close the mobile menu (resets the icon via `menu_icon`).
    pub const fn close_mobile_menu(&mut self) {
        self.mobile_menu = false;
    }

    /// Toggle the mobile menu from the hamburger button.
    pub const fn toggle_mobile_menu(&mut self) {
        if self.mobile_menu {
            self.close_mobile_menu();
        } else {
            self.open_mobile_menu();
        }
    }

    /// Open the account sidebar, closing the mobile menu and cart tray.
    pub const fn open_account_sidebar(&mut self) {
        self.account_sidebar = true;
        self.mobile_menu = false;
        self.cart_tray = false;
    }

    /// Close the account sidebar.
    pub const fn close_account_sidebar(&mut self) {
        self.account_sidebar = false;
    }

    /// Toggle the cart tray; opening closes the menu and sidebar.
    pub const fn toggle_cart_tray(&mut self) {
        if self.cart_tray {
            self.cart_tray = false;
        } else {
            self.cart_tray = true;
            self.mobile_menu = false;
            self.account_sidebar = false;
        }
    }

    /// Close the cart tray.
    pub const fn close_cart_tray(&mut self) {
        self.cart_tray = false;
    }

    /// Open the sign-in form, closing register, menu, and sidebar.
    pub const fn open_sign_in(&mut self) {
        self.sign_in = true;
        self.register = false;
        self.mobile_menu = false;
        self.account_sidebar = false;
    }

    /// Open the register form, closing sign-in, menu, and sidebar.
    pub const fn open_register(&mut self) {
        self.register = true;
        self.sign_in = false;
        self.mobile_menu = false;
        self.account_sidebar = false;
    }

    /// Close both auth forms.
    pub const fn close_forms(&mut self) {
        self.sign_in = false;
        self.register = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_and_sidebar_mutually_exclusive() {
        let mut panels = PanelState::new();
        panels.open_mobile_menu();
        panels.open_account_sidebar();
        assert!(!panels.is_open(Panel::MobileMenu));
        assert!(panels.is_open(Panel::AccountSidebar));
        assert_eq!(panels.menu_icon(), MenuIcon::Bars);

        panels.open_mobile_menu();
        assert!(panels.is_open(Panel::MobileMenu));
        assert!(!panels.is_open(Panel::AccountSidebar));
        assert_eq!(panels.menu_icon(), MenuIcon::Cross);
    }

    #[test]
    fn test_opening_menu_or_sidebar_closes_tray() {
        let mut panels = PanelState::new();
        panels.toggle_cart_tray();
        assert!(panels.is_open(Panel::CartTray));
        panels.open_mobile_menu();
        assert!(!panels.is_open(Panel::CartTray));

        panels.toggle_cart_tray();
        panels.open_account_sidebar();
        assert!(!panels.is_open(Panel::CartTray));
    }

    #[test]
    fn test_tray_open_closes_menu_and_sidebar() {
        let mut panels = PanelState::new();
        panels.open_mobile_menu();
        panels.toggle_cart_tray();
        assert!(panels.is_open(Panel::CartTray));
        assert!(!panels.is_open(Panel::MobileMenu));
        assert_eq!(panels.menu_icon(), MenuIcon::Bars);
    }

    #[test]
    fn test_tray_toggle_closes_without_side_effects() {
        let mut panels = PanelState::new();
        panels.toggle_cart_tray();
        panels.toggle_cart_tray();
        assert_eq!(panels, PanelState::new());
    }

    #[test]
    fn test_forms_mutually_exclusive() {
        let mut panels = PanelState::new();
        panels.open_sign_in();
        panels.open_register();
        assert!(!panels.is_open(Panel::SignIn));
        assert!(panels.is_open(Panel::Register));
        panels.open_sign_in();
        assert!(panels.is_open(Panel::SignIn));
        assert!(!panels.is_open(Panel::Register));
    }

    #[test]
    fn test_forms_close_menu_and_sidebar() {
        let mut panels = PanelState::new();
        panels.open_mobile_menu();
        panels.open_sign_in();
        assert!(!panels.is_open(Panel::MobileMenu));
        assert_eq!(panels.menu_icon(), MenuIcon::Bars);

        panels.open_account_sidebar();
        panels.open_register();
        assert!(!panels.is_open(Panel::AccountSidebar));
    }

    #[test]
    fn test_close_forms_clears_both() {
        let mut panels = PanelState::new();
        panels.open_register();
        panels.close_forms();
        assert!(!panels.is_open(Panel::SignIn));
        assert!(!panels.is_open(Panel::Register));
    }

    #[test]
    fn test_scroll_lock_tracks_any_open_panel() {
        let mut panels = PanelState::new();
        assert!(!panels.scroll_locked());
        for open in [
            PanelState::open_mobile_menu,
            PanelState::open_account_sidebar,
            PanelState::open_sign_in,
            PanelState::open_register,
        ] {
            let mut panels = PanelState::new();
            open(&mut panels);
            assert!(panels.scroll_locked());
        }
        panels.toggle_cart_tray();
        assert!(panels.scroll_locked());
        panels.close_cart_tray();
        assert!(!panels.scroll_locked());
    }

    #[test]
    fn test_icon_is_pure_function_of_menu_flag() {
        let mut panels = PanelState::new();
        assert_eq!(panels.menu_icon(), MenuIcon::Bars);
        panels.open_mobile_menu();
        assert_eq!(panels.menu_icon(), MenuIcon::Cross);
        panels.close_mobile_menu();
        assert_eq!(panels.menu_icon(), MenuIcon::Bars);
        assert_eq!(MenuIcon::Bars.class_name(), "fa-bars");
        assert_eq!(MenuIcon::Cross.class_name(), "fa-xmark");
    }
}
