use crate::heading::Heading;

/// Grid-aligned position in logical surface units.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the cell one `step` away in the given heading.
    #[must_use]
    pub fn offset(self, heading: Heading, step: i32) -> Self {
        match heading {
            Heading::Up => Self {
                x: self.x,
                y: self.y - step,
            },
            Heading::Down => Self {
                x: self.x,
                y: self.y + step,
            },
            Heading::Left => Self {
                x: self.x - step,
                y: self.y,
            },
            Heading::Right => Self {
                x: self.x + step,
                y: self.y,
            },
        }
    }
}

/// Bounded coordinate space of the playing surface.
///
/// `width` and `height` are in logical units; a cell covers `cell_size`
/// units on each axis, so a 500×500 surface with 20-unit cells is a 25×25
/// grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    #[must_use]
    pub const fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Number of cell columns.
    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows.
    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Returns true when `cell` lies inside `[0, width) × [0, height)`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Returns true when `cell` sits on a multiple of the cell size.
    #[must_use]
    pub fn is_aligned(self, cell: Cell) -> bool {
        cell.x % self.cell_size == 0 && cell.y % self.cell_size == 0
    }

    /// Converts a cell into zero-based (column, row) indices.
    ///
    /// Returns `None` for cells outside the grid.
    #[must_use]
    pub fn column_row(self, cell: Cell) -> Option<(u16, u16)> {
        if !self.contains(cell) {
            return None;
        }

        let column = u16::try_from(cell.x / self.cell_size).ok()?;
        let row = u16::try_from(cell.y / self.cell_size).ok()?;
        Some((column, row))
    }
}
