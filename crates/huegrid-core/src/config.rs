//! Panel configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, PanelResult};

/// Default number of swatches.
pub const DEFAULT_SWATCH_COUNT: u32 = 16;

/// Default swatch size in pixels. Also the cell size per unit of border width.
pub const DEFAULT_CELL_SIZE: u32 = 35;

/// Validated, immutable panel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPanelConfig")]
pub struct PanelConfig {
    swatch_count: u32,
    cell_size_px: u32,
}

impl PanelConfig {
    /// Create a configuration, rejecting non-positive values.
    pub fn new(swatch_count: i64, cell_size_px: i64) -> PanelResult<Self> {
        let invalid = PanelError::InvalidConfiguration {
            swatch_count,
            cell_size_px,
        };
        if swatch_count < 1 || cell_size_px < 1 {
            return Err(invalid);
        }
        let swatch_count = u32::try_from(swatch_count).map_err(|_| invalid.clone())?;
        let cell_size_px = u32::try_from(cell_size_px).map_err(|_| invalid)?;
        Ok(Self {
            swatch_count,
            cell_size_px,
        })
    }

    /// Number of selectable colors.
    pub fn swatch_count(&self) -> u32 {
        self.swatch_count
    }

    /// Side length of each square swatch in pixels.
    pub fn cell_size_px(&self) -> u32 {
        self.cell_size_px
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            swatch_count: DEFAULT_SWATCH_COUNT,
            cell_size_px: DEFAULT_CELL_SIZE,
        }
    }
}

/// Unvalidated shape of a config as it appears in a settings file.
#[derive(Deserialize)]
struct RawPanelConfig {
    #[serde(default = "default_swatch_count")]
    swatch_count: i64,
    #[serde(default = "default_cell_size")]
    cell_size_px: i64,
}

fn default_swatch_count() -> i64 {
    DEFAULT_SWATCH_COUNT as i64
}

fn default_cell_size() -> i64 {
    DEFAULT_CELL_SIZE as i64
}

impl TryFrom<RawPanelConfig> for PanelConfig {
    type Error = PanelError;

    fn try_from(raw: RawPanelConfig) -> PanelResult<Self> {
        Self::new(raw.swatch_count, raw.cell_size_px)
    }
}
