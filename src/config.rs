use crate::model::{DEFAULT_DRIFT_PX, DEFAULT_HOLD_MS, HoldConfig};
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "longpress_shim_config";

/// Shim settings, optionally overridden from localStorage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    pub hold_ms: u32,
    pub drift_px: f64,
    /// Log gesture decisions to the console.
    pub debug: bool,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            hold_ms: DEFAULT_HOLD_MS,
            drift_px: DEFAULT_DRIFT_PX,
            debug: false,
        }
    }
}

impl ShimConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the stored override, falling back to defaults when storage is
    /// unavailable or the value does not parse.
    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    if let Ok(cfg) = Self::from_json(&raw) {
                        return cfg;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    let _ = store.set_item(STORAGE_KEY, &s);
                }
            }
        }
    }

    pub fn hold(&self) -> HoldConfig {
        HoldConfig {
            hold_ms: self.hold_ms,
            // Negative or NaN drift would make every move cancel.
            drift_px: if self.drift_px.is_finite() {
                self.drift_px.abs()
            } else {
                DEFAULT_DRIFT_PX
            },
        }
    }
}
