use crate::input;
use portfolio_core::{Camera, Ray};
use web_sys as web;

/// Canvas CSS size and the aspect ratio the renderer uses for it.
#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width() as f32 / canvas.height().max(1) as f32
}

/// World-space ray through a point given in canvas CSS pixels.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    camera: &Camera,
    css_x: f32,
    css_y: f32,
) -> Ray {
    let (w, h) = canvas_css_size(canvas);
    let ndc = input::css_px_to_ndc(css_x, css_y, w, h);
    camera.ray_from_ndc(ndc.x, ndc.y)
}
