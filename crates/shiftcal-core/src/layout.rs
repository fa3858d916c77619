//! Band tiling for month grids
//!
//! Places twelve month grids on a sheet, four per horizontal band. Each month
//! spans 7 grid columns plus one spacer column (no spacer after the last
//! month of a band). A month occupies a merged title row, a weekday row, and
//! its day rows; the next band starts below the tallest grid of the current
//! band with a fixed gap.
//!
//! The cursor is an explicit fold value rather than mutable sheet-global
//! state: [`LayoutCursor::place`] consumes a position and returns the origin
//! for the current grid together with the cursor for the next one.

use crate::MonthGrid;

/// Months per horizontal band
pub const MONTHS_PER_BAND: usize = 4;

/// Sheet rows above the day cells: merged month title + weekday labels
pub const HEADER_ROWS: u32 = 2;

/// Blank rows between bands
pub const BAND_GAP_ROWS: u32 = 2;

/// Columns a month occupies including its trailing spacer
pub const MONTH_STRIDE_COLS: u16 = crate::GRID_COLS as u16 + 1;

/// Top-left sheet cell of one month grid (0-based row/column)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridOrigin {
    pub row: u32,
    pub col: u16,
}

/// Fold state for band tiling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutCursor {
    row: u32,
    col: u16,
    /// Tallest grid placed so far in the current band, headers included
    band_height: u32,
}

impl LayoutCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a grid with `grid_rows` day rows at the cursor.
    ///
    /// Returns the grid's origin and the cursor for the next month: one
    /// stride to the right within a band, or below the band's tallest grid
    /// after its fourth month.
    pub fn place(self, month_index: usize, grid_rows: u32) -> (GridOrigin, Self) {
        let origin = GridOrigin { row: self.row, col: self.col };
        let band_height = self.band_height.max(HEADER_ROWS + grid_rows);

        let next = if (month_index + 1) % MONTHS_PER_BAND == 0 {
            Self {
                row: self.row + band_height + BAND_GAP_ROWS,
                col: 0,
                band_height: 0,
            }
        } else {
            Self {
                row: self.row,
                col: self.col + MONTH_STRIDE_COLS,
                band_height,
            }
        };

        (origin, next)
    }
}

/// Compute the origin of every grid, in month order
pub fn tile_months(grids: &[MonthGrid]) -> Vec<GridOrigin> {
    let mut cursor = LayoutCursor::new();
    grids
        .iter()
        .enumerate()
        .map(|(index, grid)| {
            let (origin, next) = cursor.place(index, grid.rows());
            cursor = next;
            origin
        })
        .collect()
}
