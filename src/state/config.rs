use serde::{Deserialize, Serialize};

/// Gesture and bound tunables for the responsive viewport.
///
/// The dead-zone, response and damping constants are felt-UX tunables rather
/// than mathematical invariants, so they live here instead of being hardcoded
/// in the gesture math.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Lower clamp bound for the zoom factor.
    pub min_zoom_scale: f64,
    /// Upper clamp bound for the zoom factor.
    pub max_zoom_scale: f64,
    /// Vertical bound scaling factor for content whose aspect ratio differs
    /// from the viewport (e.g. a scaled background image).
    pub background_ratio: f64,
    /// Minimum |delta zoom| before a pinch sample changes the zoom at all.
    pub zoom_dead_zone: f64,
    /// How fast the perceived zoom responds to a pinch delta.
    pub zoom_response: f64,
    /// Base of the damping denominator `zoom_damping - (zoom - 1)`; higher
    /// values make the pinch less sensitive overall.
    pub zoom_damping: f64,
    /// Snap-back animation duration in milliseconds.
    pub snap_duration_ms: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom_scale: 0.2,
            max_zoom_scale: 2.0,
            background_ratio: 1.0,
            zoom_dead_zone: 0.1,
            zoom_response: 0.15,
            zoom_damping: 4.0,
            snap_duration_ms: 200.0,
        }
    }
}

impl ViewportConfig {
    /// Returns a copy with unusable fields replaced by defaults and the zoom
    /// bounds ordered. Non-finite and non-positive values never survive.
    pub fn normalized(self) -> Self {
        let d = Self::default();
        let pick = |v: f64, fallback: f64| {
            if v.is_finite() && v > 0.0 { v } else { fallback }
        };
        let mut min = pick(self.min_zoom_scale, d.min_zoom_scale);
        let mut max = pick(self.max_zoom_scale, d.max_zoom_scale);
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        let dead_zone = if self.zoom_dead_zone.is_finite() && self.zoom_dead_zone >= 0.0 {
            self.zoom_dead_zone
        } else {
            d.zoom_dead_zone
        };
        Self {
            min_zoom_scale: min,
            max_zoom_scale: max,
            background_ratio: pick(self.background_ratio, d.background_ratio),
            zoom_dead_zone: dead_zone,
            zoom_response: pick(self.zoom_response, d.zoom_response),
            zoom_damping: pick(self.zoom_damping, d.zoom_damping),
            snap_duration_ms: pick(self.snap_duration_ms, d.snap_duration_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_normalization() {
        let cfg = ViewportConfig::default();
        assert_eq!(cfg.normalized(), cfg);
    }

    #[test]
    fn swapped_bounds_are_reordered() {
        let cfg = ViewportConfig {
            min_zoom_scale: 3.0,
            max_zoom_scale: 0.5,
            ..ViewportConfig::default()
        }
        .normalized();
        assert_eq!(cfg.min_zoom_scale, 0.5);
        assert_eq!(cfg.max_zoom_scale, 3.0);
    }

    #[test]
    fn garbage_fields_fall_back_to_defaults() {
        let cfg = ViewportConfig {
            min_zoom_scale: f64::NAN,
            max_zoom_scale: -1.0,
            background_ratio: 0.0,
            zoom_dead_zone: f64::INFINITY,
            zoom_response: -0.5,
            zoom_damping: f64::NAN,
            snap_duration_ms: 0.0,
        }
        .normalized();
        assert_eq!(cfg, ViewportConfig::default());
    }

    #[test]
    fn zero_dead_zone_is_allowed() {
        let cfg = ViewportConfig {
            zoom_dead_zone: 0.0,
            ..ViewportConfig::default()
        }
        .normalized();
        assert_eq!(cfg.zoom_dead_zone, 0.0);
    }

    #[test]
    fn settings_round_trip_as_json() {
        let cfg = ViewportConfig {
            max_zoom_scale: 3.5,
            ..ViewportConfig::default()
        };
        let raw = serde_json::to_string(&cfg).unwrap();
        let back: ViewportConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, cfg);
    }
}
