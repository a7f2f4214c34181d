use crate::types::{AlignedTable, Cell};

/// Apply the fixed gap-fill policy to every column of a joined table.
///
/// Per column, independently:
/// 1. missing cells between two known numeric values are filled by linear
///    interpolation (positional across rows, so a fill never overshoots its
///    boundary values);
/// 2. missing cells after the last known value are forward-filled from it.
///
/// Cells before a column's first known value stay missing, and a column with
/// no known values anywhere remains entirely empty. Text cells are left
/// untouched; only cells passing strict numeric coercion serve as anchors.
pub fn interpolate_then_ffill(table: &mut AlignedTable) {
    for column in &mut table.columns {
        fill_cells(&mut column.cells);
    }
}

fn fill_cells(cells: &mut [Cell]) {
    let anchors: Vec<(usize, f64)> = cells
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.as_numeric().map(|v| (i, v)))
        .collect();
    let Some(&(last_idx, last_val)) = anchors.last() else {
        return;
    };

    for pair in anchors.windows(2) {
        let (i0, v0) = pair[0];
        let (i1, v1) = pair[1];
        if i1 - i0 <= 1 {
            continue;
        }
        let span = (i1 - i0) as f64;
        for i in (i0 + 1)..i1 {
            if cells[i].is_missing() {
                let t = (i - i0) as f64 / span;
                cells[i] = Cell::Number(v0 + (v1 - v0) * t);
            }
        }
    }

    for cell in &mut cells[last_idx + 1..] {
        if cell.is_missing() {
            *cell = Cell::Number(last_val);
        }
    }
}
