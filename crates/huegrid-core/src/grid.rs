//! Grid state and the swatch interaction handlers.
//!
//! Swatches are plain records indexed by fill order. Pointer events are
//! routed through [`dispatch`] to free functions that mutate [`GridState`].

use crate::color::{Hsb, hue_fraction};
use crate::config::PanelConfig;
use crate::host::ColorSelectionModel;
use crate::layout::GridLayout;
use crate::selection::Selection;
use crate::swatch::{Swatch, SwatchState};

/// Pointer event targeting a single swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchEvent {
    /// Primary button pressed over the swatch.
    Press,
    /// Pointer entered the swatch.
    HoverEnter,
    /// Pointer left the swatch.
    HoverExit,
}

/// Built contents of a panel: placed swatches plus selection.
#[derive(Debug, Clone)]
pub struct GridState {
    layout: GridLayout,
    swatches: Vec<Swatch>,
    selection: Selection,
    dropped: usize,
}

impl GridState {
    /// Lay out the swatches for a configuration.
    ///
    /// Swatches past the last grid cell are not placed.
    pub fn build(config: &PanelConfig) -> Self {
        let layout = GridLayout::compute(config);
        let count = config.swatch_count();

        let swatches: Vec<Swatch> = (0..count as usize)
            .map_while(|i| {
                let cell = layout.cell_of(i)?;
                Some(Swatch::new(i, cell, Hsb::pure(hue_fraction(i, count))))
            })
            .collect();

        let dropped = count as usize - swatches.len();
        if dropped > 0 {
            log::warn!(
                "{} of {} swatches do not fit the {}x{} grid and are not shown",
                dropped,
                count,
                layout.rows,
                layout.cols
            );
        }
        log::debug!(
            "Built {}x{} color grid, border width {}",
            layout.rows,
            layout.cols,
            layout.border_width
        );

        Self {
            layout,
            swatches,
            selection: Selection::new(),
            dropped,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Placed swatches in fill order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn swatch(&self, index: usize) -> Option<&Swatch> {
        self.swatches.get(index)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Number of swatches that did not fit the grid.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    /// Whether the selected index and the swatch states name the same swatch.
    pub fn selection_matches_swatches(&self) -> bool {
        let mut selected = self.swatches.iter().filter(|s| s.is_selected());
        match (self.selection.get(), selected.next(), selected.next()) {
            (None, None, _) => true,
            (Some(index), Some(swatch), None) => swatch.index == index,
            _ => false,
        }
    }
}

/// Route an event to its handler. Returns whether any state changed.
pub fn dispatch(
    event: SwatchEvent,
    index: usize,
    state: &mut GridState,
    model: &mut dyn ColorSelectionModel,
) -> bool {
    log::debug!("Swatch {} received {:?}", index, event);
    match event {
        SwatchEvent::Press => on_press(index, state, model),
        SwatchEvent::HoverEnter => on_hover_enter(index, state),
        SwatchEvent::HoverExit => on_hover_exit(index, state),
    }
}

/// Select a swatch, clear every other swatch back to its default border, and
/// push the color to the model.
pub fn on_press(
    index: usize,
    state: &mut GridState,
    model: &mut dyn ColorSelectionModel,
) -> bool {
    let Some(color) = state.swatches.get(index).map(|s| s.color) else {
        log::debug!("Ignoring press on unplaced swatch {}", index);
        return false;
    };

    for swatch in &mut state.swatches {
        swatch.state = SwatchState::Normal;
    }
    state.swatches[index].state = SwatchState::Selected;
    state.selection.select(index);
    debug_assert!(state.selection_matches_swatches());

    model.set_selected_color(color);
    true
}

/// Emphasize the border of an unselected swatch.
pub fn on_hover_enter(index: usize, state: &mut GridState) -> bool {
    set_hover(index, state, SwatchState::Hovered)
}

/// Restore the default border of an unselected swatch.
pub fn on_hover_exit(index: usize, state: &mut GridState) -> bool {
    set_hover(index, state, SwatchState::Normal)
}

fn set_hover(index: usize, state: &mut GridState, new_state: SwatchState) -> bool {
    match state.swatches.get_mut(index) {
        Some(swatch) if !swatch.is_selected() && swatch.state != new_state => {
            log::trace!("Swatch {}: {:?} -> {:?}", index, swatch.state, new_state);
            swatch.state = new_state;
            debug_assert!(state.selection_matches_swatches());
            true
        }
        _ => false,
    }
}
