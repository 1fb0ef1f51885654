//! Widget configuration.
//!
//! There are no environment variables and no CLI: hosts construct a
//! [`WidgetConfig`] in code (or take [`WidgetConfig::default`], which carries
//! the shipped storefront values) and hand it to the app. Configuration is
//! validated once, at app construction.

use std::time::Duration;

use thiserror::Error;

/// Configuration errors reported at app construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("catalog fetch timeout must be non-zero")]
    ZeroFetchTimeout,
    #[error("line quantity cap must be at least 1")]
    ZeroQuantityCap,
    #[error("notification lifetime must be non-zero")]
    ZeroNotificationLifetime,
}

/// Widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// URL of the catalog JSON resource, fetched once per session.
    pub catalog_url: String,
    /// Bounded wait for the catalog fetch; on expiry the fallback catalog
    /// is used.
    pub fetch_timeout: Duration,
    /// Maximum quantity per cart line.
    pub quantity_cap: u32,
    /// How long a notification stays up before auto-dismissing.
    pub notification_lifetime: Duration,
    /// How long a retiring notification keeps playing its exit animation
    /// before it is dropped.
    pub notification_exit: Duration,
    /// Delay between a cart line reaching quantity zero and its deletion,
    /// so the slide-out animation can play.
    pub line_removal_delay: Duration,
    /// Decorative testimonial carousel settings.
    pub carousel: CarouselConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            catalog_url: "product.json".to_string(),
            fetch_timeout: Duration::from_secs(10),
            quantity_cap: 5,
            notification_lifetime: Duration::from_secs(3),
            notification_exit: Duration::from_millis(500),
            line_removal_delay: Duration::from_millis(300),
            carousel: CarouselConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the fetch timeout, quantity cap, or
    /// notification lifetime is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::ZeroFetchTimeout);
        }
        if self.quantity_cap == 0 {
            return Err(ConfigError::ZeroQuantityCap);
        }
        if self.notification_lifetime.is_zero() {
            return Err(ConfigError::ZeroNotificationLifetime);
        }
        Ok(())
    }
}

/// Settings for the optional third-party testimonial carousel.
///
/// Entirely decorative; handed to the render target once at startup. A
/// target without a carousel ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Whether the carousel is initialized at all.
    pub enabled: bool,
    /// Loop back to the first slide after the last.
    pub loop_slides: bool,
    /// Autoplay interval.
    pub autoplay_delay: Duration,
    /// Selector for the external previous-slide control.
    pub prev_control: String,
    /// Selector for the external next-slide control.
    pub next_control: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            loop_slides: true,
            autoplay_delay: Duration::from_secs(3),
            prev_control: "#prev".to_string(),
            next_control: "#next".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(WidgetConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = WidgetConfig {
            fetch_timeout: Duration::ZERO,
            ..WidgetConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroFetchTimeout)
        ));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = WidgetConfig {
            quantity_cap: 0,
            ..WidgetConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroQuantityCap)));
    }

    #[test]
    fn test_default_carousel_matches_storefront() {
        let carousel = CarouselConfig::default();
        assert!(carousel.loop_slides);
        assert_eq!(carousel.autoplay_delay, Duration::from_secs(3));
        assert_eq!(carousel.prev_control, "#prev");
        assert_eq!(carousel.next_control, "#next");
    }
}
