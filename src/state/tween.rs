/// Cubic ease-in-out over `t` in [0, 1].
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Timed interpolation of the pan position towards a snap-back target.
///
/// Clock-agnostic: callers feed wall-clock milliseconds into `sample`, the
/// animation frame loop in the viewport component uses `js_sys::Date::now()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: (f64, f64),
    to: (f64, f64),
    start_ms: f64,
    duration_ms: f64,
}

impl Tween {
    pub fn new(from: (f64, f64), to: (f64, f64), start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1.0),
        }
    }

    /// Eased position at `now_ms` plus whether the tween has finished.
    pub fn sample(&self, now_ms: f64) -> ((f64, f64), bool) {
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        let k = ease_in_out(t);
        let x = self.from.0 + (self.to.0 - self.from.0) * k;
        let y = self.from.1 + (self.to.1 - self.from.1) * k;
        ((x, y), t >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_the_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn sample_starts_at_from_and_ends_at_to() {
        let tw = Tween::new((200.0, 50.0), (150.0, 50.0), 1000.0, 200.0);
        let ((x, y), done) = tw.sample(1000.0);
        assert_eq!((x, y), (200.0, 50.0));
        assert!(!done);

        let ((x, y), done) = tw.sample(1200.0);
        assert_eq!((x, y), (150.0, 50.0));
        assert!(done);
    }

    #[test]
    fn sample_clamps_outside_the_window() {
        let tw = Tween::new((0.0, 0.0), (10.0, -10.0), 1000.0, 200.0);
        let ((x, y), done) = tw.sample(900.0);
        assert_eq!((x, y), (0.0, 0.0));
        assert!(!done);

        let ((x, y), done) = tw.sample(5000.0);
        assert_eq!((x, y), (10.0, -10.0));
        assert!(done);
    }

    #[test]
    fn midpoint_is_halfway_for_symmetric_easing() {
        let tw = Tween::new((100.0, 0.0), (0.0, 40.0), 0.0, 200.0);
        let ((x, y), _) = tw.sample(100.0);
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_is_widened_to_avoid_division_blowups() {
        let tw = Tween::new((0.0, 0.0), (10.0, 10.0), 0.0, 0.0);
        let ((x, y), done) = tw.sample(1.0);
        assert_eq!((x, y), (10.0, 10.0));
        assert!(done);
    }
}
