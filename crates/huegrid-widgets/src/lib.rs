//! egui rendering for the HueGrid color chooser panel.
//!
//! This crate draws a [`huegrid_core::ColorGridPanel`] and turns pointer input
//! into swatch events:
//!
//! - **Panel**: [`ColorGridView`], the interactive grid widget
//! - **Swatch**: painting of a single swatch with its line or bevel border
//! - **Convert**: color and geometry conversions between core and egui types

pub mod convert;
pub mod panel;
pub mod swatch;

pub use convert::{to_color32, to_egui_rect, to_egui_vec};
pub use panel::{ColorGridResponse, ColorGridView};
pub use swatch::paint_swatch;

/// Standard colors used by the grid.
pub mod theme {
    use egui::Color32;

    /// Line border color
    pub const BORDER: Color32 = Color32::BLACK;
    /// Outer shadow edge of a lowered bevel
    pub const BEVEL_SHADOW_OUTER: Color32 = Color32::from_gray(64);
    /// Inner shadow edge of a lowered bevel
    pub const BEVEL_SHADOW_INNER: Color32 = Color32::from_gray(128);
    /// Outer highlight edge of a lowered bevel
    pub const BEVEL_HIGHLIGHT_OUTER: Color32 = Color32::WHITE;
    /// Inner highlight edge of a lowered bevel
    pub const BEVEL_HIGHLIGHT_INNER: Color32 = Color32::from_gray(220);
}
