//! Interactive grid widget.

use egui::{CursorIcon, Id, Pos2, Rect, Response, Sense, Ui};
use huegrid_core::{ColorGridPanel, ColorSelectionModel, GridLayout, SwatchEvent};

use crate::convert::{to_color32, to_egui_rect, to_egui_vec, to_local_point};
use crate::swatch::paint_swatch;

/// Result of showing a [`ColorGridView`].
pub struct ColorGridResponse {
    /// Response covering the whole grid.
    pub response: Response,
    /// Swatch under the pointer this frame.
    pub hovered: Option<usize>,
    /// Swatch pressed this frame.
    pub pressed: Option<usize>,
}

/// Shows a [`ColorGridPanel`] and feeds pointer input back into it.
///
/// egui has no enter/exit callbacks, so the swatch hovered on the previous
/// frame is kept in temp memory and compared against the current one.
pub struct ColorGridView<'a> {
    panel: &'a mut ColorGridPanel,
    model: &'a mut dyn ColorSelectionModel,
    id_salt: Id,
}

impl<'a> ColorGridView<'a> {
    /// Create a view writing selections into `model`.
    pub fn new(panel: &'a mut ColorGridPanel, model: &'a mut dyn ColorSelectionModel) -> Self {
        Self {
            panel,
            model,
            id_salt: Id::new("huegrid_panel"),
        }
    }

    /// Distinguish several grids in the same ui.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(salt);
        self
    }

    /// Show the grid. Builds the panel on first use.
    pub fn show(mut self, ui: &mut Ui) -> ColorGridResponse {
        self.panel.build();

        let layout = *self.panel.layout();
        let id = ui.make_persistent_id(self.id_salt);
        let (rect, response) =
            ui.allocate_exact_size(to_egui_vec(layout.preferred_size()), Sense::click());

        let (hover_pos, primary_pressed) =
            ui.input(|i| (i.pointer.hover_pos(), i.pointer.primary_pressed()));
        let hovered = hover_pos
            .and_then(|pos| swatch_at(&layout, rect, pos))
            .filter(|&index| self.panel.swatch(index).is_some());
        let previous = ui.data_mut(|d| d.get_temp::<Option<usize>>(id)).flatten();

        if previous != hovered {
            if let Some(index) = previous {
                self.panel
                    .handle_event(SwatchEvent::HoverExit, index, &mut *self.model);
            }
            if let Some(index) = hovered {
                self.panel
                    .handle_event(SwatchEvent::HoverEnter, index, &mut *self.model);
            }
            ui.data_mut(|d| d.insert_temp(id, hovered));
        }

        let pressed = hovered.filter(|_| primary_pressed);
        if let Some(index) = pressed {
            self.panel
                .handle_event(SwatchEvent::Press, index, &mut *self.model);
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            for swatch in self.panel.visible_swatches() {
                let cell = to_egui_rect(layout.cell_rect(swatch.cell), rect.min);
                paint_swatch(
                    &painter,
                    cell,
                    to_color32(swatch.color),
                    swatch.border(layout.border_width),
                );
            }
        }

        let response = if hovered.is_some() {
            response.on_hover_cursor(CursorIcon::PointingHand)
        } else {
            response
        };

        ColorGridResponse {
            response,
            hovered,
            pressed,
        }
    }
}

/// Index of the swatch under a screen position.
fn swatch_at(layout: &GridLayout, rect: Rect, pos: Pos2) -> Option<usize> {
    if !rect.contains(pos) {
        return None;
    }
    let cell = layout.hit_test(to_local_point(pos, rect.min))?;
    layout.index_of(cell)
}
