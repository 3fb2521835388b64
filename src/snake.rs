use std::collections::VecDeque;

use crate::grid::Cell;
use crate::heading::Heading;

/// Ordered body segments, head first. Never empty.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Body {
    segments: VecDeque<Cell>,
}

impl Body {
    /// Creates a one-cell body at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(start);

        Self { segments }
    }

    /// Creates a body from explicit segments (front is head).
    ///
    /// Returns `None` when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            segments: VecDeque::from(segments),
        })
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        // `Body` is constructed non-empty and no operation removes the head.
        self.segments[0]
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.segments.iter()
    }

    /// Copies segments into a plain vector, head first.
    #[must_use]
    pub fn to_cells(&self) -> Vec<Cell> {
        self.segments.iter().copied().collect()
    }

    /// Returns `[head]` followed by the whole current body.
    #[must_use]
    pub fn grown(&self, head: Cell) -> Self {
        let mut segments = self.segments.clone();
        segments.push_front(head);

        Self { segments }
    }
}

/// Result of one movement step before growth is decided.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Advance {
    /// Head cell after the step.
    pub head: Cell,
    /// Body after the step when no food was eaten: tail dropped.
    pub shifted: Body,
}

/// Computes the next head and the tail-dropped body for one step.
///
/// Pure: the input body is left untouched.
#[must_use]
pub fn advance(body: &Body, heading: Heading, cell_size: i32) -> Advance {
    let head = body.head().offset(heading, cell_size);

    let mut segments = body.segments.clone();
    segments.push_front(head);
    segments.pop_back();

    Advance {
        head,
        shifted: Body { segments },
    }
}
