//! HueGrid Core Library
//!
//! Toolkit-agnostic logic for a color chooser panel that shows a grid of
//! evenly spaced hues: configuration, layout math, swatch colors, and the
//! hover/selection state machine.

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod host;
pub mod layout;
pub mod panel;
pub mod selection;
pub mod swatch;

pub use color::{Hsb, hsb_to_rgb, hue_fraction};
pub use config::{DEFAULT_CELL_SIZE, DEFAULT_SWATCH_COUNT, PanelConfig};
pub use error::{PanelError, PanelResult};
pub use grid::{GridState, SwatchEvent, dispatch, on_hover_enter, on_hover_exit, on_press};
pub use host::{ChooserPanel, ColorSelectionModel, DefaultSelectionModel, Icon};
pub use layout::{GridCell, GridLayout, border_width};
pub use panel::{ColorGridPanel, DISPLAY_NAME};
pub use selection::Selection;
pub use swatch::{BorderStyle, Swatch, SwatchState};
