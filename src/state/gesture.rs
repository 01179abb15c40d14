use super::config::ViewportConfig;

/// One touch point in view-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// A two-finger touch sample produced per touch-move event, never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub first: TouchPoint,
    pub second: TouchPoint,
}

impl GestureSample {
    /// Euclidean distance between the two touch points.
    pub fn distance(&self) -> f64 {
        let dx = self.first.x - self.second.x;
        let dy = self.first.y - self.second.y;
        dx.hypot(dy)
    }

    /// Midpoint of the two touches; pan deltas are measured between centroids.
    pub fn centroid(&self) -> TouchPoint {
        TouchPoint {
            x: (self.first.x + self.second.x) * 0.5,
            y: (self.first.y + self.second.y) * 0.5,
        }
    }
}

/// One pinch sample worth of zoom change.
///
/// The raw pinch ratio is damped by `zoom_damping - (zoom - 1)` so sensitivity
/// drops as the zoom grows, gated by the dead zone to ignore finger jitter,
/// scaled by the response factor and clamped to the configured bounds.
/// Degenerate inputs (non-positive baseline, zero damping denominator) leave
/// the zoom unchanged.
pub fn zoom_step(zoom: f64, init_distance: f64, distance: f64, config: &ViewportConfig) -> f64 {
    if !(init_distance > 0.0) {
        return zoom;
    }
    let damping = config.zoom_damping - (zoom - 1.0);
    if damping.abs() < 1e-9 {
        return zoom;
    }
    let delta = (distance / init_distance - 1.0) / damping;
    if delta.abs() <= config.zoom_dead_zone {
        return zoom;
    }
    (zoom + delta * config.zoom_response).clamp(config.min_zoom_scale, config.max_zoom_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let sample = GestureSample {
            first: TouchPoint { x: 0.0, y: 0.0 },
            second: TouchPoint { x: 3.0, y: 4.0 },
        };
        assert!((sample.distance() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn centroid_is_midpoint() {
        let sample = GestureSample {
            first: TouchPoint { x: 10.0, y: 20.0 },
            second: TouchPoint { x: 30.0, y: 60.0 },
        };
        let c = sample.centroid();
        assert_eq!(c, TouchPoint { x: 20.0, y: 40.0 });
    }

    #[test]
    fn unchanged_distance_leaves_zoom_untouched() {
        let cfg = ViewportConfig::default();
        assert_eq!(zoom_step(1.3, 100.0, 100.0, &cfg), 1.3);
    }

    #[test]
    fn deltas_inside_the_dead_zone_are_ignored() {
        let cfg = ViewportConfig::default();
        // 130/100 - 1 = 0.3, damped by 4 => 0.075, below the 0.1 dead zone.
        assert_eq!(zoom_step(1.0, 100.0, 130.0, &cfg), 1.0);
    }

    #[test]
    fn spread_past_the_dead_zone_zooms_in() {
        let cfg = ViewportConfig::default();
        // 210/100 - 1 = 1.1, damped by 4 => 0.275, response 0.15.
        let next = zoom_step(1.0, 100.0, 210.0, &cfg);
        assert!((next - 1.04125).abs() < 1e-9);
        assert!(next > 1.0 && next <= cfg.max_zoom_scale);
    }

    #[test]
    fn pinch_in_past_the_dead_zone_zooms_out() {
        let cfg = ViewportConfig::default();
        let zoomed = zoom_step(1.0, 100.0, 210.0, &cfg);
        let back = zoom_step(zoomed, 100.0, 60.0, &cfg);
        assert!(back < zoomed);
        assert!(back >= cfg.min_zoom_scale);
    }

    #[test]
    fn result_is_clamped_to_configured_bounds() {
        let cfg = ViewportConfig::default();
        let mut zoom = 1.9;
        for _ in 0..50 {
            zoom = zoom_step(zoom, 10.0, 400.0, &cfg);
            assert!(zoom <= cfg.max_zoom_scale);
        }
        assert_eq!(zoom, cfg.max_zoom_scale);

        let mut zoom = 0.3;
        for _ in 0..50 {
            zoom = zoom_step(zoom, 400.0, 10.0, &cfg);
            assert!(zoom >= cfg.min_zoom_scale);
        }
        assert_eq!(zoom, cfg.min_zoom_scale);
    }

    #[test]
    fn degenerate_baseline_is_a_no_op() {
        let cfg = ViewportConfig::default();
        assert_eq!(zoom_step(1.5, 0.0, 200.0, &cfg), 1.5);
        assert_eq!(zoom_step(1.5, -1.0, 200.0, &cfg), 1.5);
    }

    #[test]
    fn zero_damping_denominator_is_a_no_op() {
        let cfg = ViewportConfig {
            zoom_damping: 1.0,
            max_zoom_scale: 4.0,
            ..ViewportConfig::default()
        };
        // zoom_damping - (zoom - 1) == 0 when zoom == 2.
        assert_eq!(zoom_step(2.0, 100.0, 300.0, &cfg), 2.0);
    }
}
