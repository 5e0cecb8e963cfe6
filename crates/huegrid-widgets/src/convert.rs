//! Conversions from core color and geometry types to egui.

use egui::{Color32, Pos2, Rect, Vec2};

/// Convert a core color to an egui color.
pub fn to_color32(color: peniko::Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Convert a size to an egui vector.
pub fn to_egui_vec(size: kurbo::Size) -> Vec2 {
    Vec2::new(size.width as f32, size.height as f32)
}

/// Convert a rect relative to `origin` into screen space.
pub fn to_egui_rect(rect: kurbo::Rect, origin: Pos2) -> Rect {
    Rect::from_min_max(
        origin + Vec2::new(rect.x0 as f32, rect.y0 as f32),
        origin + Vec2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

/// Convert a screen position into a point relative to `origin`.
pub fn to_local_point(pos: Pos2, origin: Pos2) -> kurbo::Point {
    let local = pos - origin;
    kurbo::Point::new(f64::from(local.x), f64::from(local.y))
}
