//! Day grid layout engine.
//!
//! # Responsibility
//! - Arrange one cell per day of the year in row-major order.
//! - Classify each cell as past, today or future relative to one day ordinal.
//!
//! # Invariants
//! - Total cell count equals `total_days`.
//! - Cell order equals day order (left-to-right, top-to-bottom).
//! - At most one cell is `Today`: the one at index `current_day_ordinal - 1`.
//! - Only the last row may be partial.

use serde::{Deserialize, Serialize};

/// Position of one day relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    Past,
    Today,
    Future,
}

/// One day of the year inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// 0-based day index within the year.
    pub index: u32,
    pub state: DayState,
}

/// Row-major dot grid. Recomputed, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub column_count: u32,
    pub rows: Vec<Vec<DayCell>>,
}

impl Grid {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Iterates cells in day order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.rows.iter().flatten()
    }

    /// Returns the cell for the current day, if it falls inside the grid.
    pub fn today(&self) -> Option<&DayCell> {
        self.cells().find(|cell| cell.state == DayState::Today)
    }

    /// Returns `(row, column)` of a 0-based day index.
    pub fn position_of(&self, index: u32) -> Option<(usize, usize)> {
        if index as usize >= self.cell_count() {
            return None;
        }
        let columns = self.column_count.max(1);
        Some(((index / columns) as usize, (index % columns) as usize))
    }
}

/// Classifies a 0-based day index against a 1-based current day ordinal.
pub fn classify_day(index: u32, current_day_ordinal: u32) -> DayState {
    let today_index = i64::from(current_day_ordinal) - 1;
    let index = i64::from(index);
    if index == today_index {
        DayState::Today
    } else if index < today_index {
        DayState::Past
    } else {
        DayState::Future
    }
}

/// Lays out `total_days` cells into rows of `column_count`.
///
/// Inputs are expected to be validated by the caller; a zero `column_count`
/// is treated as one column.
pub fn layout_grid(total_days: u32, current_day_ordinal: u32, column_count: u32) -> Grid {
    let columns = column_count.max(1);
    let row_count = total_days.div_ceil(columns) as usize;
    let mut rows: Vec<Vec<DayCell>> = Vec::with_capacity(row_count);

    for index in 0..total_days {
        if index % columns == 0 {
            rows.push(Vec::with_capacity(columns as usize));
        }
        let cell = DayCell {
            index,
            state: classify_day(index, current_day_ordinal),
        };
        if let Some(row) = rows.last_mut() {
            row.push(cell);
        }
    }

    Grid {
        column_count: columns,
        rows,
    }
}
