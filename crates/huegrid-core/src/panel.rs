//! The color grid chooser panel.

use kurbo::Size;
use peniko::Color;

use crate::config::PanelConfig;
use crate::error::PanelResult;
use crate::grid::{GridState, SwatchEvent, dispatch};
use crate::host::{ChooserPanel, ColorSelectionModel, Icon};
use crate::layout::GridLayout;
use crate::swatch::Swatch;

/// Name shown by the host for this panel.
pub const DISPLAY_NAME: &str = "Simplified Color Panel";

/// A chooser panel showing a grid of evenly spaced, fully saturated hues.
///
/// The swatches are created the first time the host builds the panel. Until
/// then the panel only knows its configuration and layout.
#[derive(Debug, Clone)]
pub struct ColorGridPanel {
    config: PanelConfig,
    layout: GridLayout,
    grid: Option<GridState>,
}

impl ColorGridPanel {
    /// Create a panel with `swatch_count` colors of `cell_size_px` pixels.
    pub fn new(swatch_count: i64, cell_size_px: i64) -> PanelResult<Self> {
        Ok(Self::from_config(PanelConfig::new(swatch_count, cell_size_px)?))
    }

    /// Create a panel from an already validated configuration.
    pub fn from_config(config: PanelConfig) -> Self {
        Self {
            layout: GridLayout::compute(&config),
            config,
            grid: None,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Preferred pixel size of the panel.
    pub fn preferred_size(&self) -> Size {
        self.layout.preferred_size()
    }

    /// Create the swatches. Does nothing if already built.
    pub fn build(&mut self) {
        if self.grid.is_none() {
            self.grid = Some(GridState::build(&self.config));
        }
    }

    pub fn is_built(&self) -> bool {
        self.grid.is_some()
    }

    /// Built grid state, if any.
    pub fn grid(&self) -> Option<&GridState> {
        self.grid.as_ref()
    }

    /// Swatches shown in the grid, in fill order. Empty before build.
    pub fn visible_swatches(&self) -> &[Swatch] {
        self.grid.as_ref().map(GridState::swatches).unwrap_or(&[])
    }

    pub fn swatch(&self, index: usize) -> Option<&Swatch> {
        self.grid.as_ref()?.swatch(index)
    }

    /// Number of configured swatches left out of the grid.
    pub fn dropped_count(&self) -> usize {
        self.grid.as_ref().map_or(0, GridState::dropped_count)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.grid.as_ref()?.selection().get()
    }

    /// Color of the selected swatch.
    pub fn selected_color(&self) -> Option<Color> {
        let index = self.selected_index()?;
        self.swatch(index).map(|s| s.color)
    }

    /// Apply a pointer event to a swatch. Returns whether anything changed.
    pub fn handle_event(
        &mut self,
        event: SwatchEvent,
        index: usize,
        model: &mut dyn ColorSelectionModel,
    ) -> bool {
        match self.grid.as_mut() {
            Some(grid) => dispatch(event, index, grid, model),
            None => {
                log::debug!("Ignoring {:?} on swatch {}: panel not built", event, index);
                false
            }
        }
    }
}

impl Default for ColorGridPanel {
    fn default() -> Self {
        Self::from_config(PanelConfig::default())
    }
}

impl ChooserPanel for ColorGridPanel {
    fn display_name(&self) -> &str {
        DISPLAY_NAME
    }

    fn small_display_icon(&self) -> Option<&Icon> {
        None
    }

    fn large_display_icon(&self) -> Option<&Icon> {
        None
    }

    fn build_chooser(&mut self) {
        self.build();
    }

    fn update_chooser(&mut self) {
        // The panel's own selection is authoritative; external changes are not mirrored.
    }
}
