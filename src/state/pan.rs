/// Accumulated translation plus the offset baseline captured at gesture start.
///
/// During an active gesture `x`/`y` hold the session-relative delta while the
/// offset carries everything committed by earlier gestures; the rendered
/// translation is always their sum.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanState {
    pub x: f64,
    pub y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl PanState {
    /// Folds the live value into the offset baseline so the next gesture's
    /// deltas compose additively.
    pub fn set_offset(&mut self) {
        self.offset_x += self.x;
        self.offset_y += self.y;
        self.x = 0.0;
        self.y = 0.0;
    }

    /// Merges the offset back into the value, ending relative tracking.
    pub fn flatten_offset(&mut self) {
        self.x += self.offset_x;
        self.y += self.offset_y;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    pub fn translate_x(&self) -> f64 {
        self.x + self.offset_x
    }

    pub fn translate_y(&self) -> f64 {
        self.y + self.offset_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_compose_across_gestures() {
        let mut pan = PanState::default();
        pan.x = 40.0;
        pan.y = -10.0;
        pan.set_offset();
        assert_eq!((pan.x, pan.y), (0.0, 0.0));
        assert_eq!((pan.translate_x(), pan.translate_y()), (40.0, -10.0));

        pan.x = 5.0;
        pan.y = 5.0;
        assert_eq!((pan.translate_x(), pan.translate_y()), (45.0, -5.0));
    }

    #[test]
    fn flatten_preserves_the_rendered_translation() {
        let mut pan = PanState {
            x: 12.0,
            y: -3.0,
            offset_x: 30.0,
            offset_y: 8.0,
        };
        let before = (pan.translate_x(), pan.translate_y());
        pan.flatten_offset();
        assert_eq!((pan.translate_x(), pan.translate_y()), before);
        assert_eq!((pan.offset_x, pan.offset_y), (0.0, 0.0));
        assert_eq!((pan.x, pan.y), (42.0, 5.0));
    }
}
