use rand::Rng;

use crate::grid::{Cell, Grid};

/// Draws a uniformly random grid-aligned cell.
///
/// Each axis is drawn independently. Occupied cells are not excluded, so
/// food may land under the body.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Cell {
    let column = rng.gen_range(0..grid.columns().max(1));
    let row = rng.gen_range(0..grid.rows().max(1));

    Cell {
        x: column * grid.cell_size,
        y: row * grid.cell_size,
    }
}
