use glam::Vec2;
use web_sys as web;

/// Single pointer tracked over the backdrop, in CSS pixels relative to the canvas.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub press_x: f32,
    pub press_y: f32,
    pub dragging: bool,
}

impl PointerState {
    pub fn press(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
        self.press_x = pos.x;
        self.press_y = pos.y;
        self.down = true;
        self.dragging = false;
    }

    /// Record a move; returns the delta to orbit by when the press has become a drag.
    pub fn move_to(&mut self, pos: Vec2, threshold: f32) -> Option<Vec2> {
        let delta = Vec2::new(pos.x - self.x, pos.y - self.y);
        self.x = pos.x;
        self.y = pos.y;
        if !self.down {
            return None;
        }
        if !self.dragging
            && exceeds_drag_threshold(pos.x - self.press_x, pos.y - self.press_y, threshold)
        {
            self.dragging = true;
        }
        self.dragging.then_some(delta)
    }

    /// End the press. True when it counts as a click rather than a drag.
    pub fn release(&mut self) -> bool {
        let was_click = self.down && !self.dragging;
        self.down = false;
        self.dragging = false;
        was_click
    }
}

#[inline]
pub fn exceeds_drag_threshold(dx: f32, dy: f32, threshold: f32) -> bool {
    dx * dx + dy * dy > threshold * threshold
}

/// CSS-pixel position to normalized device coordinates (y up).
#[inline]
pub fn css_px_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((2.0 * x / w) - 1.0, 1.0 - (2.0 * y / h))
}

#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

// ---------------- Screen mapping helpers ----------------
/// NDC (y up) back to CSS pixels (y down).
#[inline]
pub fn ndc_to_css_px(ndc_x: f32, ndc_y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((ndc_x * 0.5 + 0.5) * width, (0.5 - ndc_y * 0.5) * height)
}

/// On-screen height in CSS pixels of a world-space length seen at `distance`.
#[inline]
pub fn world_size_to_css_px(size: f32, distance: f32, fovy_radians: f32, height: f32) -> f32 {
    let visible = 2.0 * (fovy_radians * 0.5).tan() * distance.max(1e-3);
    size * height / visible
}
