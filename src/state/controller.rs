use super::config::ViewportConfig;
use super::gesture::{GestureSample, TouchPoint, zoom_step};
use super::pan::PanState;

/// Session data recorded while two fingers are down. Both baselines stay
/// unset until the first move sample arrives; zoom is never updated before
/// that, so two fingers landing on a scrollable surface do not zoom at once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PinchSession {
    init_distance: Option<f64>,
    anchor: Option<TouchPoint>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum PinchPhase {
    #[default]
    Idle,
    Active(PinchSession),
}

/// What a gesture release decided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseOutcome {
    /// Zoom committed for this gesture, already clamped.
    pub zoom: f64,
    /// Snap-back target when the flattened pan ended out of bounds.
    pub snap: Option<(f64, f64)>,
}

/// Converts a live sequence of two-finger touch samples into a bounded visual
/// transform (translation + scale) for one wrapped content view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportController {
    pub config: ViewportConfig,
    pub pan: PanState,
    pub zoom: f64,
    width: f64,
    height: f64,
    phase: PinchPhase,
}

impl ViewportController {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config: config.normalized(),
            pan: PanState::default(),
            zoom: 1.0,
            width: 0.0,
            height: 0.0,
            phase: PinchPhase::Idle,
        }
    }

    /// Records the measured viewport size; bounds are computed against it.
    pub fn on_layout(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, PinchPhase::Active(_))
    }

    /// Enters a pinch session iff exactly two touches are active. The current
    /// pan value becomes the offset baseline so deltas compose additively.
    pub fn on_gesture_start(&mut self, touch_count: u32) {
        if touch_count == 2 && self.phase == PinchPhase::Idle {
            self.pan.set_offset();
            self.phase = PinchPhase::Active(PinchSession::default());
        }
    }

    /// Feeds one two-finger move sample. Returns true when the transform
    /// changed and needs to be re-applied.
    pub fn on_gesture_move(&mut self, sample: GestureSample) -> bool {
        let PinchPhase::Active(session) = &mut self.phase else {
            return false;
        };
        let distance = sample.distance();
        let centroid = sample.centroid();
        let Some(init) = session.init_distance else {
            // First sample of the session only records baselines.
            session.init_distance = Some(distance);
            session.anchor = Some(centroid);
            return false;
        };
        let anchor = session.anchor.unwrap_or(centroid);
        self.zoom = zoom_step(self.zoom, init, distance, &self.config);
        self.pan.x = centroid.x - anchor.x;
        self.pan.y = centroid.y - anchor.y;
        true
    }

    /// Ends the pinch session: flattens the pan offset, decides whether a
    /// snap-back is needed and reports the committed zoom. Returns None when
    /// no session was active.
    pub fn on_gesture_end(&mut self) -> Option<ReleaseOutcome> {
        if !self.is_pinching() {
            return None;
        }
        self.phase = PinchPhase::Idle;
        self.pan.flatten_offset();
        let snap = snap_back_target(
            self.pan.x,
            self.pan.y,
            self.zoom,
            self.width,
            self.height,
            self.config.background_ratio,
        );
        Some(ReleaseOutcome {
            zoom: self.zoom,
            snap,
        })
    }

    /// Writes an animated pan position; used by the snap-back tween driver.
    pub fn apply_snap(&mut self, x: f64, y: f64) {
        self.pan.x = x;
        self.pan.y = y;
        self.pan.offset_x = 0.0;
        self.pan.offset_y = 0.0;
    }

    /// CSS transform for the wrapped content element.
    pub fn transform_style(&self) -> String {
        format!(
            "transform: translate({:.3}px, {:.3}px) scale({:.4});",
            self.pan.translate_x(),
            self.pan.translate_y(),
            self.zoom
        )
    }
}

/// Bound-clamp decision with the viewport center as origin. Axes are
/// independent; a violated axis is clamped to the signed bound. Negative raw
/// bounds (zoom below 1) collapse to zero so release always recenters.
pub fn snap_back_target(
    x: f64,
    y: f64,
    zoom: f64,
    width: f64,
    height: f64,
    background_ratio: f64,
) -> Option<(f64, f64)> {
    let x_max = (width * (zoom - 1.0) / 2.0).max(0.0);
    let y_max = (height * (zoom - 1.0) * background_ratio / 2.0).max(0.0);
    let mut violated = false;
    let mut to_x = x;
    let mut to_y = y;
    if x.abs() > x_max {
        violated = true;
        to_x = x_max.copysign(x);
    }
    if y.abs() > y_max {
        violated = true;
        to_y = y_max.copysign(y);
    }
    violated.then_some((to_x, to_y))
}
