//! Grid layout math: rows, columns, border width and cell geometry.

use kurbo::{Point, Rect, Size};

use crate::config::{DEFAULT_CELL_SIZE, PanelConfig};

/// Row and column of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

/// Grid dimensions derived from a [`PanelConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of rows (`floor(sqrt(swatch_count))`).
    pub rows: u32,
    /// Number of columns (`swatch_count / rows`).
    pub cols: u32,
    /// Default border width of a swatch.
    pub border_width: u32,
    /// Side length of a swatch in pixels.
    pub cell_size_px: u32,
}

impl GridLayout {
    /// Compute the layout for a configuration.
    pub fn compute(config: &PanelConfig) -> Self {
        let rows = isqrt(config.swatch_count());
        Self {
            rows,
            cols: config.swatch_count() / rows,
            border_width: border_width(config.cell_size_px()),
            cell_size_px: config.cell_size_px(),
        }
    }

    /// Number of cells in the grid.
    pub fn capacity(&self) -> u32 {
        self.rows * self.cols
    }

    /// Number of swatches that fit, out of `swatch_count`.
    pub fn visible_count(&self, swatch_count: u32) -> u32 {
        swatch_count.min(self.capacity())
    }

    /// Cell for a swatch index in row-major fill order, or `None` if the
    /// index is past the last cell.
    pub fn cell_of(&self, index: usize) -> Option<GridCell> {
        let index = u32::try_from(index).ok()?;
        if index >= self.capacity() {
            return None;
        }
        Some(GridCell {
            row: index / self.cols,
            col: index % self.cols,
        })
    }

    /// Swatch index occupying a cell.
    pub fn index_of(&self, cell: GridCell) -> Option<usize> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }
        Some((cell.row * self.cols + cell.col) as usize)
    }

    /// Preferred size of the whole grid.
    pub fn preferred_size(&self) -> Size {
        Size::new(
            f64::from(self.cols) * f64::from(self.cell_size_px),
            f64::from(self.rows) * f64::from(self.cell_size_px),
        )
    }

    /// Rectangle of a cell relative to the grid origin.
    pub fn cell_rect(&self, cell: GridCell) -> Rect {
        let size = f64::from(self.cell_size_px);
        let origin = Point::new(f64::from(cell.col) * size, f64::from(cell.row) * size);
        Rect::from_origin_size(origin, Size::new(size, size))
    }

    /// Hit test a point relative to the grid origin.
    pub fn hit_test(&self, point: Point) -> Option<GridCell> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let size = f64::from(self.cell_size_px);
        let col = (point.x / size).floor() as u32;
        let row = (point.y / size).floor() as u32;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(GridCell { row, col })
    }
}

/// Default border width for a cell size: one pixel per 35 pixels, at least one.
pub fn border_width(cell_size_px: u32) -> u32 {
    if cell_size_px < DEFAULT_CELL_SIZE {
        1
    } else {
        cell_size_px / DEFAULT_CELL_SIZE
    }
}

/// Integer square root, rounding down.
fn isqrt(n: u32) -> u32 {
    let mut root = f64::from(n).sqrt() as u32;
    // Correct for float rounding near perfect squares.
    while u64::from(root) * u64::from(root) > u64::from(n) {
        root -= 1;
    }
    while u64::from(root + 1) * u64::from(root + 1) <= u64::from(n) {
        root += 1;
    }
    root
}
