//! Site configuration with built-in defaults.
//!
//! DESIGN
//! ======
//! Every tunable the page script used to hard-code lives here. Host pages can
//! override any subset by defining a `window.siteConfig` object before the
//! module boots; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

pub const DEFAULT_STORAGE_KEY: &str = "tp_favourites";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3500;
pub const DEFAULT_KHR_PER_USD: u64 = 4100;
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1617469767053-d3b523a0b982?w=600&q=80";
pub const DEFAULT_FEATURED_COUNT: usize = 6;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Name of the optional global holding config overrides.
pub const CONFIG_GLOBAL: &str = "siteConfig";

/// Typed site settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key holding the favourites array.
    pub storage_key: String,
    /// How long a toast stays visible.
    pub toast_duration_ms: u32,
    /// Riel per US dollar for the secondary price figure.
    pub khr_per_usd: u64,
    /// Image shown when a vehicle photo fails to load.
    pub placeholder_image: String,
    /// Make prefixed to every model name.
    pub brand: String,
    /// Page that shows a single vehicle, addressed by `?id=`.
    pub detail_page: String,
    /// Cards rendered when the caller gives no count.
    pub featured_count: usize,
    /// Scroll offset (px) above which the header uses the raised shadow.
    pub header_shadow_threshold_px: f64,
    pub header_shadow_raised: String,
    pub header_shadow_resting: String,
    /// Elements that fade in when scrolled into view.
    pub reveal_selectors: Vec<String>,
    /// Visible fraction that triggers the reveal.
    pub reveal_threshold: f64,
    /// Global variable holding the vehicle collection.
    pub inventory_global: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            khr_per_usd: DEFAULT_KHR_PER_USD,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            brand: "Toyota".to_owned(),
            detail_page: "car-detail.html".to_owned(),
            featured_count: DEFAULT_FEATURED_COUNT,
            header_shadow_threshold_px: 10.0,
            header_shadow_raised: "0 2px 20px rgba(0,0,0,0.12)".to_owned(),
            header_shadow_resting: "0 2px 12px rgba(0,0,0,0.09)".to_owned(),
            reveal_selectors: [".why-card", ".car-card", ".testimonial-card", ".feature-item"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            inventory_global: "carsData".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw).map_err(SiteError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.storage_key.trim().is_empty() {
            return Err(SiteError::ConfigInvalid { field: "storage_key", reason: "must not be empty".into() });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SiteError::ConfigInvalid {
                field: "reveal_threshold",
                reason: format!("{} is outside 0.0..=1.0", self.reveal_threshold),
            });
        }
        if !self.header_shadow_threshold_px.is_finite() {
            return Err(SiteError::ConfigInvalid {
                field: "header_shadow_threshold_px",
                reason: "must be finite".into(),
            });
        }
        Ok(())
    }

    /// Comma-joined reveal selectors for `querySelectorAll`.
    #[must_use]
    pub fn reveal_selector_list(&self) -> String {
        self.reveal_selectors.join(", ")
    }

    /// Read overrides from `window.siteConfig`, falling back to defaults.
    #[cfg(feature = "csr")]
    pub fn from_window() -> Self {
        match crate::util::dom::global_json(CONFIG_GLOBAL) {
            Ok(Some(raw)) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring {CONFIG_GLOBAL}: {e}");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("could not read {CONFIG_GLOBAL}: {e}");
                Self::default()
            }
        }
    }
}
