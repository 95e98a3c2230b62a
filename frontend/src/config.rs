use log::Level;
use serde::{Deserialize, Serialize};

use crate::reveal::{CarouselConfig, ParallaxConfig, RevealConfig};

pub const CONFIG_STORAGE_KEY: &str = "futurecore.site-config";

/// Motion tuning shared through a `ContextProvider`. Every field has a
/// default, so a partial JSON document only overrides what it names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub carousel: CarouselConfig,
    pub services_parallax: ParallaxConfig,
    pub about_parallax: ParallaxConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            carousel: CarouselConfig::default(),
            services_parallax: ParallaxConfig {
                min_factor: 0.05,
                max_factor: 0.2,
            },
            about_parallax: ParallaxConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load() -> Self {
        stored_override().unwrap_or_default()
    }
}

#[cfg(debug_assertions)]
fn stored_override() -> Option<SiteConfig> {
    use log::{info, warn};

    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(CONFIG_STORAGE_KEY).ok()??;
    match SiteConfig::from_json(&raw) {
        Ok(config) => {
            info!("Using site config override from localStorage");
            Some(config)
        }
        Err(err) => {
            warn!("Ignoring invalid site config override: {}", err);
            None
        }
    }
}

#[cfg(not(debug_assertions))]
fn stored_override() -> Option<SiteConfig> {
    None  // Overrides are a development aid only
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{Easing, RevealStyle};

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{"carousel": {"interval_ms": 3000}, "reveal": {"style": "slide-left", "stagger": {"easing": "smooth"}}}"#,
        )
        .unwrap();
        assert_eq!(config.carousel.interval_ms, 3000.0);
        assert_eq!(config.carousel.breakpoint_px, 768.0);
        assert_eq!(config.reveal.style, RevealStyle::SlideLeft);
        assert_eq!(config.reveal.stagger.easing, Easing::Smooth);
        assert_eq!(config.reveal.stagger.step_ms, 100.0);
        assert_eq!(config.services_parallax.min_factor, 0.05);
    }

    #[test]
    fn zero_threshold_override_is_clamped_before_reaching_the_browser() {
        use crate::reveal::{Capability, RevealEngine};

        let config =
            SiteConfig::from_json(r#"{"reveal": {"observe": {"threshold": 0.0}}}"#).unwrap();
        assert_eq!(config.reveal.observe.threshold, 0.0);

        let engine = RevealEngine::new(config.reveal.observe, Capability::Available);
        assert_eq!(engine.options().threshold, 0.1);
        assert!(engine.options().once);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(SiteConfig::from_json("{\"carousel\": 5}").is_err());
        assert!(SiteConfig::from_json("not json").is_err());
    }

    #[test]
    fn parallax_ranges() {
        let config = SiteConfig::default();
        assert_eq!(config.services_parallax.max_factor, 0.2);
        assert_eq!(config.about_parallax.min_factor, 0.0);
    }
}
