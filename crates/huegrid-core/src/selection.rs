//! Exclusive single-swatch selection.

/// Holds the index of the selected swatch, if any.
///
/// There is no way back to "nothing selected" once a swatch was chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected index.
    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Select `index`, returning the previously selected index.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        self.selected.replace(index)
    }
}
