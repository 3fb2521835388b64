/// Canonical movement headings.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// All headings, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Outcome of one direction request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Verdict {
    /// The request becomes the pending heading.
    Accepted(Heading),
    /// The request reversed the current heading; `retained` stays in effect.
    Rejected { retained: Heading },
}

impl Verdict {
    /// Heading that will apply on the next tick if nothing else arrives.
    #[must_use]
    pub fn effective(self) -> Heading {
        match self {
            Self::Accepted(heading) => heading,
            Self::Rejected { retained } => retained,
        }
    }
}

/// Returns whether a heading change is legal (no immediate 180° turns).
#[must_use]
pub fn heading_change_is_valid(current: Heading, next: Heading) -> bool {
    next != current.opposite()
}

/// Stateless reversal veto for raw direction requests.
///
/// `current` must be the heading applied on the last tick, not whatever is
/// pending; otherwise two quick turns could reverse the body in one tick.
#[must_use]
pub fn request(requested: Heading, current: Heading) -> Verdict {
    if heading_change_is_valid(current, requested) {
        Verdict::Accepted(requested)
    } else {
        Verdict::Rejected { retained: current }
    }
}
