//! Adapter traits for the host color chooser.

use peniko::Color;

/// The host's "currently chosen color" model. The panel only writes to it.
pub trait ColorSelectionModel {
    /// Set the selected color.
    fn set_selected_color(&mut self, color: Color);
}

/// Opaque handle to an icon the host shows next to a panel's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon(());

/// Extension point for panels hosted in a color chooser dialog.
pub trait ChooserPanel {
    /// Name shown on the panel's tab.
    fn display_name(&self) -> &str;

    /// Small icon for the panel's tab.
    fn small_display_icon(&self) -> Option<&Icon>;

    /// Large icon for the panel's tab.
    fn large_display_icon(&self) -> Option<&Icon>;

    /// Populate the panel's contents. Called once, lazily, by the host.
    fn build_chooser(&mut self);

    /// Called by the host when the selection model changed externally.
    fn update_chooser(&mut self);
}

/// In-memory selection model for hosts without their own.
#[derive(Debug, Clone, Default)]
pub struct DefaultSelectionModel {
    selected: Option<Color>,
    changes: usize,
}

impl DefaultSelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last color pushed to the model.
    pub fn selected_color(&self) -> Option<Color> {
        self.selected
    }

    /// Number of times a color was pushed.
    pub fn change_count(&self) -> usize {
        self.changes
    }
}

impl ColorSelectionModel for DefaultSelectionModel {
    fn set_selected_color(&mut self, color: Color) {
        self.selected = Some(color);
        self.changes += 1;
    }
}
