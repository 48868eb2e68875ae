use yeardots_core::{layout_grid, DayState, GridLayout};

fn assert_grid_invariants(total_days: u32, current: u32, columns: u32) {
    let grid = layout_grid(total_days, current, columns);

    assert_eq!(grid.cell_count(), total_days as usize);
    assert_eq!(grid.row_count(), total_days.div_ceil(columns) as usize);
    for row in &grid.rows[..grid.row_count() - 1] {
        assert_eq!(row.len(), columns as usize);
    }

    for (expected_index, cell) in grid.cells().enumerate() {
        assert_eq!(cell.index, expected_index as u32);
        let expected = if cell.index + 1 == current {
            DayState::Today
        } else if cell.index + 1 < current {
            DayState::Past
        } else {
            DayState::Future
        };
        assert_eq!(cell.state, expected, "index {}", cell.index);
    }

    let today_count = grid
        .cells()
        .filter(|cell| cell.state == DayState::Today)
        .count();
    assert_eq!(today_count, 1);
    assert_eq!(grid.today().map(|cell| cell.index), Some(current - 1));
}

#[test]
fn invariants_hold_for_every_layout_and_sampled_days() {
    for layout in GridLayout::ALL {
        for total in [365, 366] {
            for current in [1, 2, 59, 60, 183, total - 1, total] {
                assert_grid_invariants(total, current, layout.columns());
            }
        }
    }
}

#[test]
fn standard_layout_has_22_rows_with_partial_last_row() {
    let grid = layout_grid(365, 100, 17);

    assert_eq!(grid.row_count(), 22);
    assert_eq!(grid.rows.last().map(Vec::len), Some(10));
}

#[test]
fn exact_multiple_ends_with_full_row() {
    let grid = layout_grid(364, 1, 7);

    assert_eq!(grid.row_count(), 52);
    assert_eq!(grid.rows.last().map(Vec::len), Some(7));
}

#[test]
fn first_day_has_no_past_cells() {
    let grid = layout_grid(366, 1, 25);

    assert_eq!(grid.rows[0][0].state, DayState::Today);
    assert!(grid.cells().skip(1).all(|cell| cell.state == DayState::Future));
}

#[test]
fn last_day_has_no_future_cells() {
    let grid = layout_grid(366, 366, 21);

    assert!(grid
        .cells()
        .take(365)
        .all(|cell| cell.state == DayState::Past));
    assert_eq!(grid.today().map(|cell| cell.index), Some(365));
}
