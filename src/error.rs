//! Crate error type.
//!
//! Failures never reach the visitor; the browser layer logs them and falls
//! back to defaults. Loaders return `Result<_, SiteError>` so the recovery
//! decision stays with the caller.

/// Errors produced while loading configuration, data or storage.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The site configuration JSON could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// The site configuration parsed but holds an unusable value.
    #[error("invalid config value for {field}: {reason}")]
    ConfigInvalid { field: &'static str, reason: String },

    /// The vehicle collection was not a JSON array.
    #[error("inventory parse failed: {0}")]
    InventoryParse(#[source] serde_json::Error),

    /// A value could not be encoded for storage.
    #[error("storage encode failed: {0}")]
    StorageEncode(#[source] serde_json::Error),

    /// The backing key-value store rejected a write.
    #[error("storage write failed for key {key}: {reason}")]
    StorageWrite { key: String, reason: String },

    /// A browser API call threw.
    #[error("javascript interop failed: {0}")]
    Js(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
