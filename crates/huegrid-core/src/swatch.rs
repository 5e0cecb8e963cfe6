//! Swatch records and their visual state.

use peniko::Color;

use crate::color::Hsb;
use crate::layout::GridCell;

/// Visual state of a swatch. Selection takes priority over hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwatchState {
    /// No interaction.
    #[default]
    Normal,
    /// Pointer is over the swatch.
    Hovered,
    /// Swatch is the selected color.
    Selected,
}

impl SwatchState {
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected)
    }

    pub fn is_hovered(&self) -> bool {
        matches!(self, Self::Hovered)
    }
}

/// Border drawn around a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Solid black line of the given width in pixels.
    Line { width: u32 },
    /// Lowered bevel used for the selected swatch.
    LoweredBevel,
}

/// One selectable cell of the grid.
#[derive(Debug, Clone)]
pub struct Swatch {
    /// Position in fill order.
    pub index: usize,
    /// Grid cell the swatch occupies.
    pub cell: GridCell,
    /// Hue/saturation/brightness the color was generated from.
    pub hsb: Hsb,
    /// Fill color.
    pub color: Color,
    /// Current visual state.
    pub state: SwatchState,
}

impl Swatch {
    /// Create an unselected swatch.
    pub fn new(index: usize, cell: GridCell, hsb: Hsb) -> Self {
        Self {
            index,
            cell,
            hsb,
            color: hsb.to_color(),
            state: SwatchState::Normal,
        }
    }

    /// Whether this swatch is the selected one.
    pub fn is_selected(&self) -> bool {
        self.state.is_selected()
    }

    /// Border for the current state, given the panel's default border width.
    pub fn border(&self, border_width: u32) -> BorderStyle {
        match self.state {
            SwatchState::Normal => BorderStyle::Line {
                width: border_width,
            },
            SwatchState::Hovered => BorderStyle::Line {
                width: border_width * 2,
            },
            SwatchState::Selected => BorderStyle::LoweredBevel,
        }
    }
}
