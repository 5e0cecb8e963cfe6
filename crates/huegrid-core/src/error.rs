//! Error types for panel construction.

use thiserror::Error;

/// Errors raised while configuring a color grid panel.
///
/// Construction is the only fallible step: layout and interaction operate on
/// already validated state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error(
        "Invalid panel configuration: swatch count ({swatch_count}) and cell size ({cell_size_px}) must both be bigger than zero"
    )]
    InvalidConfiguration { swatch_count: i64, cell_size_px: i64 },
}

/// Result type for panel operations.
pub type PanelResult<T> = Result<T, PanelError>;
