use crate::grid::{Cell, Grid};
use crate::snake::Body;

/// Classification of one tick's resulting head position.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Safe,
    BoundaryViolation,
    SelfCollision,
}

impl Collision {
    /// Returns true for outcomes that end the session.
    #[must_use]
    pub fn is_fatal(self) -> bool {
        !matches!(self, Self::Safe)
    }
}

/// Classifies `head` against the grid, then against the post-move body.
///
/// `body` is the body after the move (grown or shifted) with `head` at its
/// front; only its non-head segments count. On a shifted move the old tail
/// is already gone, so following it into its vacated cell is safe.
/// Boundary is always evaluated first.
#[must_use]
pub fn check(head: Cell, body: &Body, grid: Grid) -> Collision {
    if !grid.contains(head) {
        return Collision::BoundaryViolation;
    }

    if body.segments().skip(1).any(|segment| *segment == head) {
        return Collision::SelfCollision;
    }

    Collision::Safe
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, Grid};
    use crate::snake::Body;

    use super::{Collision, check};

    const GRID: Grid = Grid::new(500, 500, 20);

    fn body(cells: &[(i32, i32)]) -> Body {
        Body::from_segments(cells.iter().map(|&(x, y)| Cell::new(x, y)).collect())
            .expect("test body should be non-empty")
    }

    #[test]
    fn head_inside_grid_with_free_body_is_safe() {
        let head = Cell::new(120, 100);

        assert_eq!(
            check(head, &body(&[(120, 100), (100, 100)]), GRID),
            Collision::Safe
        );
    }

    #[test]
    fn head_outside_any_edge_is_boundary_violation() {
        for head in [
            Cell::new(-20, 100),
            Cell::new(500, 100),
            Cell::new(100, -20),
            Cell::new(100, 500),
        ] {
            assert_eq!(
                check(head, &Body::new(head), GRID),
                Collision::BoundaryViolation
            );
        }
    }

    #[test]
    fn boundary_is_checked_before_self_collision() {
        let head = Cell::new(-20, 0);
        let overlapping = body(&[(-20, 0), (0, 0), (-20, 0)]);

        assert_eq!(check(head, &overlapping, GRID), Collision::BoundaryViolation);
    }

    #[test]
    fn head_on_non_head_segment_is_self_collision() {
        let head = Cell::new(40, 40);
        let looped = body(&[(40, 40), (40, 60), (60, 60), (60, 40), (40, 40)]);

        assert_eq!(check(head, &looped, GRID), Collision::SelfCollision);
        assert!(Collision::SelfCollision.is_fatal());
        assert!(!Collision::Safe.is_fatal());
    }

    #[test]
    fn head_on_vacated_tail_cell_is_safe() {
        // Post-move body of a 4-cell loop whose head followed the tail.
        let head = Cell::new(40, 40);
        let shifted = body(&[(40, 40), (40, 60), (60, 60), (60, 40)]);

        assert_eq!(check(head, &shifted, GRID), Collision::Safe);
    }
}
