//! Swatch painting.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Stroke, StrokeKind};
use huegrid_core::BorderStyle;

use crate::theme;

/// Paint a swatch fill and border into `rect`.
pub fn paint_swatch(painter: &Painter, rect: Rect, fill: Color32, border: BorderStyle) {
    painter.rect_filled(rect, CornerRadius::ZERO, fill);

    match border {
        BorderStyle::Line { width } => {
            painter.rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(width as f32, theme::BORDER),
                StrokeKind::Inside,
            );
        }
        BorderStyle::LoweredBevel => paint_lowered_bevel(painter, rect),
    }
}

/// Two pixel lowered bevel: shadow on the top and left, highlight on the
/// bottom and right.
fn paint_lowered_bevel(painter: &Painter, rect: Rect) {
    let outer = rect.shrink(0.5);
    let inner = rect.shrink(1.5);

    bevel_edges(painter, outer, theme::BEVEL_SHADOW_OUTER, theme::BEVEL_HIGHLIGHT_OUTER);
    bevel_edges(painter, inner, theme::BEVEL_SHADOW_INNER, theme::BEVEL_HIGHLIGHT_INNER);
}

fn bevel_edges(painter: &Painter, rect: Rect, shadow: Color32, highlight: Color32) {
    let shadow = Stroke::new(1.0, shadow);
    let highlight = Stroke::new(1.0, highlight);

    let top_left = rect.min;
    let top_right = Pos2::new(rect.max.x, rect.min.y);
    let bottom_left = Pos2::new(rect.min.x, rect.max.y);
    let bottom_right = rect.max;

    painter.line_segment([top_left, top_right], shadow);
    painter.line_segment([top_left, bottom_left], shadow);
    painter.line_segment([bottom_left, bottom_right], highlight);
    painter.line_segment([top_right, bottom_right], highlight);
}
