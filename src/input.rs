use cards_core::{TouchPoint, Touches};
use glam::Vec2;
use web_sys as web;

/// Backing-store size for a canvas shown at `css_w` x `css_h` CSS pixels.
#[inline]
pub fn backing_size(css_w: f32, css_h: f32, dpr: f32) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_w.max(0.0) * dpr) as u32;
    let h = (css_h.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Client coordinates relative to the canvas' top-left corner, CSS pixels.
#[inline]
pub fn client_to_canvas(client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client_x - rect_left, client_y - rect_top)
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}

/// Convert a DOM touch list into canvas-relative touch points.
pub fn touch_points(list: &web::TouchList, canvas: &web::HtmlCanvasElement) -> Touches {
    let rect = canvas.get_bounding_client_rect();
    let (left, top) = (rect.left() as f32, rect.top() as f32);
    let mut out = Touches::new();
    for i in 0..list.length() {
        if let Some(t) = list.item(i) {
            let p = client_to_canvas(t.client_x() as f32, t.client_y() as f32, left, top);
            out.push(TouchPoint::new(t.identifier(), p.x, p.y));
        }
    }
    out
}

/// Clamp a raw frame delta into a usable step.
#[inline]
pub fn clamp_dt(dt_sec: f32, max_dt: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, max_dt)
    } else {
        0.0
    }
}
