// Zoom/pan state shared by the image modal and the gallery modal.

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 5.0;
const STEP: f64 = 1.2;

/// Active pointer gesture. A session is either drag-panning with one
/// pointer or pinch-zooming with two; the variants make the two modes
/// mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    Dragging { anchor_x: f64, anchor_y: f64 },
    Pinching { start_dist: f64, start_scale: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub gesture: Gesture,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            gesture: Gesture::Idle,
        }
    }
}

impl ZoomState {
    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.translate_x = 0.0;
        self.translate_y = 0.0;
        self.gesture = Gesture::Idle;
    }

    /// Wheel zoom: scroll down shrinks, scroll up grows. The caller is
    /// responsible for `prevent_default()` so the page does not scroll.
    pub fn on_wheel(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Begin a drag-pan. Only effective once zoomed in; at scale 1 the
    /// image fills its frame and there is nothing to pan.
    pub fn drag_start(&mut self, x: f64, y: f64) {
        if self.scale > 1.0 {
            self.gesture = Gesture::Dragging {
                anchor_x: x - self.translate_x,
                anchor_y: y - self.translate_y,
            };
        }
    }

    pub fn drag_move(&mut self, x: f64, y: f64) {
        if let Gesture::Dragging { anchor_x, anchor_y } = self.gesture {
            self.translate_x = x - anchor_x;
            self.translate_y = y - anchor_y;
        }
    }

    pub fn drag_end(&mut self) {
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Record the two-finger baseline; later pinch moves scale relative
    /// to this distance.
    pub fn pinch_start(&mut self, dist: f64) {
        self.gesture = Gesture::Pinching {
            start_dist: dist,
            start_scale: self.scale,
        };
    }

    /// Ignored without an active baseline. A zero start distance maps to
    /// a neutral ratio instead of dividing by zero.
    pub fn pinch_move(&mut self, dist: f64) {
        if let Gesture::Pinching {
            start_dist,
            start_scale,
        } = self.gesture
        {
            let ratio = if start_dist > 0.0 { dist / start_dist } else { 1.0 };
            self.scale = (start_scale * ratio).clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    pub fn pinch_end(&mut self) {
        if matches!(self.gesture, Gesture::Pinching { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    /// CSS transform, scale first then translate. Translate is expressed
    /// in post-scale units; swapping the order changes pan speed when
    /// zoomed, so this must stay `scale(..) translate(..)`.
    pub fn transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale, self.translate_x, self.translate_y
        )
    }

    /// Cursor hint for the image element.
    pub fn cursor(&self) -> &'static str {
        if self.is_dragging() {
            "grabbing"
        } else if self.scale > 1.0 {
            "grab"
        } else {
            "default"
        }
    }
}

/// Euclidean distance between two touch points.
pub fn touch_distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_buttons_clamp_to_bounds() {
        let mut z = ZoomState::default();
        for _ in 0..50 {
            z.zoom_in();
            assert!(z.scale <= MAX_SCALE);
        }
        assert_eq!(z.scale, MAX_SCALE);
        for _ in 0..50 {
            z.zoom_out();
            assert!(z.scale >= MIN_SCALE);
        }
        assert_eq!(z.scale, MIN_SCALE);
    }

    #[test]
    fn wheel_zoom_clamps_in_both_directions() {
        let mut z = ZoomState::default();
        for _ in 0..200 {
            z.on_wheel(-1.0);
            assert!(z.scale <= MAX_SCALE);
        }
        for _ in 0..400 {
            z.on_wheel(1.0);
            assert!(z.scale >= MIN_SCALE);
        }
    }

    #[test]
    fn mixed_mutations_stay_in_bounds() {
        let mut z = ZoomState::default();
        z.pinch_start(100.0);
        for i in 0..100 {
            match i % 4 {
                0 => z.zoom_in(),
                1 => z.on_wheel(1.0),
                2 => z.pinch_move(900.0),
                _ => z.zoom_out(),
            }
            assert!((MIN_SCALE..=MAX_SCALE).contains(&z.scale));
        }
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut z = ZoomState::default();
        z.zoom_in();
        z.drag_start(10.0, 10.0);
        z.drag_move(30.0, 45.0);
        z.reset();
        assert_eq!(z, ZoomState::default());
    }

    #[test]
    fn drag_is_gated_on_zoomed_in() {
        let mut z = ZoomState::default();
        z.drag_start(5.0, 5.0);
        assert!(!z.is_dragging());
        z.drag_move(50.0, 50.0);
        assert_eq!((z.translate_x, z.translate_y), (0.0, 0.0));

        z.zoom_in();
        z.drag_start(5.0, 5.0);
        assert!(z.is_dragging());
        z.drag_move(50.0, 70.0);
        assert_eq!((z.translate_x, z.translate_y), (45.0, 65.0));
        z.drag_end();
        assert!(!z.is_dragging());
        // Further moves are ignored once the drag has ended.
        z.drag_move(500.0, 500.0);
        assert_eq!((z.translate_x, z.translate_y), (45.0, 65.0));
    }

    #[test]
    fn drag_anchor_accounts_for_existing_translate() {
        let mut z = ZoomState::default();
        z.zoom_in();
        z.drag_start(10.0, 10.0);
        z.drag_move(20.0, 20.0);
        z.drag_end();
        z.drag_start(0.0, 0.0);
        z.drag_move(5.0, 5.0);
        assert_eq!((z.translate_x, z.translate_y), (15.0, 15.0));
    }

    #[test]
    fn pinch_scales_by_distance_ratio() {
        let mut z = ZoomState::default();
        z.pinch_start(100.0);
        z.pinch_move(150.0);
        assert_eq!(z.scale, 1.5);
        z.pinch_move(50.0);
        assert_eq!(z.scale, 0.5);
    }

    #[test]
    fn pinch_without_baseline_is_ignored() {
        let mut z = ZoomState::default();
        z.pinch_move(150.0);
        assert_eq!(z.scale, 1.0);
    }

    #[test]
    fn zero_baseline_distance_is_neutral() {
        let mut z = ZoomState::default();
        z.zoom_in();
        let before = z.scale;
        z.pinch_start(0.0);
        z.pinch_move(120.0);
        assert_eq!(z.scale, before);
    }

    #[test]
    fn pinch_replaces_drag() {
        let mut z = ZoomState::default();
        z.zoom_in();
        z.drag_start(10.0, 10.0);
        z.pinch_start(80.0);
        assert!(!z.is_dragging());
        z.drag_move(100.0, 100.0);
        assert_eq!((z.translate_x, z.translate_y), (0.0, 0.0));
    }

    #[test]
    fn transform_composes_scale_then_translate() {
        let mut z = ZoomState::default();
        z.zoom_in();
        z.drag_start(0.0, 0.0);
        z.drag_move(12.0, -4.0);
        assert_eq!(z.transform(), "scale(1.2) translate(12px, -4px)");
    }

    #[test]
    fn cursor_hint_follows_state() {
        let mut z = ZoomState::default();
        assert_eq!(z.cursor(), "default");
        z.zoom_in();
        assert_eq!(z.cursor(), "grab");
        z.drag_start(0.0, 0.0);
        assert_eq!(z.cursor(), "grabbing");
        z.drag_end();
        assert_eq!(z.cursor(), "grab");
    }

    #[test]
    fn touch_distance_is_euclidean() {
        assert_eq!(touch_distance(0.0, 0.0, 3.0, 4.0), 5.0);
    }
}
