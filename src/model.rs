//! Core data types for the long-press shim.
//! Coordinates are kept as `f64` the way the host reads touch positions.

use std::time::Duration;

/// One active touch contact, in viewport and screen space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ContactPoint {
    pub client_x: f64,
    pub client_y: f64,
    pub screen_x: f64,
    pub screen_y: f64,
}

impl ContactPoint {
    pub fn new(client_x: f64, client_y: f64, screen_x: f64, screen_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            screen_x,
            screen_y,
        }
    }

    /// Squared viewport distance to `other`.
    pub fn distance_sq(&self, other: &ContactPoint) -> f64 {
        let dx = self.client_x - other.client_x;
        let dy = self.client_y - other.client_y;
        dx * dx + dy * dy
    }
}

pub const DEFAULT_HOLD_MS: u32 = 500;
pub const DEFAULT_DRIFT_PX: f64 = 10.0;

/// Timing and distance policy for a hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoldConfig {
    pub hold_ms: u32,
    pub drift_px: f64,
}

impl Default for HoldConfig {
    fn default() -> Self {
        Self {
            hold_ms: DEFAULT_HOLD_MS,
            drift_px: DEFAULT_DRIFT_PX,
        }
    }
}

impl HoldConfig {
    pub fn hold_duration(&self) -> Duration {
        Duration::from_millis(self.hold_ms as u64)
    }

    pub fn drift_sq(&self) -> f64 {
        self.drift_px * self.drift_px
    }
}
