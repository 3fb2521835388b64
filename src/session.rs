use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::food;
use crate::grid::{Cell, Grid};
use crate::heading::{self, Heading, Verdict};
use crate::scheduler::TickScheduler;
use crate::snake::{self, Body};

/// Heading applied whenever the session enters `Running`.
pub const START_HEADING: Heading = Heading::Right;

/// Lifecycle state of one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionState {
    /// Never started.
    Idle,
    /// Ticks are scheduled.
    Running,
    /// Ticks halted; the board is held in the snapshot.
    Paused,
    /// Ended by a collision; only `resume` leaves this state.
    Over,
}

/// Board captured when the session last left `Running`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub body: Body,
    pub food: Cell,
}

/// What the rendering side draws for one published state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderFrame {
    pub cells: Vec<Cell>,
    pub food: Cell,
    /// When set, draw the end-of-game marker instead of cells and food.
    pub terminal: bool,
}

/// Latest published view of the session.
///
/// `sequence` increases by one on every publish, so a consumer can redraw
/// only when it changes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Published {
    pub sequence: u64,
    pub frame: RenderFrame,
    pub state: SessionState,
    pub score: u32,
    pub death: Option<Collision>,
}

/// Owns the board, score and lifecycle of one game session.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    grid: Grid,
    start_cell: Cell,
    default_food: Cell,
    body: Body,
    food: Cell,
    heading: Heading,
    pending_heading: Heading,
    score: u32,
    state: SessionState,
    death: Option<Collision>,
    tick_count: u64,
    snapshot: Option<Snapshot>,
    scheduler: TickScheduler,
    published: Published,
    rng: R,
}

impl Session<StdRng> {
    /// Creates an idle session seeded from the operating system.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Creates an idle session showing the default board.
    #[must_use]
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        let start_cell = Cell::from(config.start_cell);
        let default_food = Cell::from(config.default_food);
        let body = Body::new(start_cell);

        let published = Published {
            sequence: 0,
            frame: RenderFrame {
                cells: body.to_cells(),
                food: default_food,
                terminal: false,
            },
            state: SessionState::Idle,
            score: 0,
            death: None,
        };

        Self {
            grid: config.grid(),
            start_cell,
            default_food,
            body,
            food: default_food,
            heading: START_HEADING,
            pending_heading: START_HEADING,
            score: 0,
            state: SessionState::Idle,
            death: None,
            tick_count: 0,
            snapshot: None,
            scheduler: TickScheduler::new(config.tick_interval()),
            published,
            rng,
        }
    }

    /// Idle/Paused -> Running. Returns false from any other state.
    ///
    /// Restores the snapshot when one was captured by an earlier pause,
    /// otherwise the default board. The snapshot is copied, not taken.
    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    /// Same as [`Session::start`], arming the first tick relative to `now`.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if !matches!(self.state, SessionState::Idle | SessionState::Paused) {
            debug!(state = ?self.state, "start ignored");
            return false;
        }

        let (body, food) = match self.snapshot.clone() {
            Some(snapshot) => (snapshot.body, snapshot.food),
            None => (Body::new(self.start_cell), self.default_food),
        };

        info!(
            from = ?self.state,
            restored = self.snapshot.is_some(),
            length = body.len(),
            "session started"
        );
        self.enter_running(body, food, now);
        true
    }

    /// Running -> Paused. Returns false from any other state.
    pub fn stop(&mut self) -> bool {
        if self.state != SessionState::Running {
            debug!(state = ?self.state, "stop ignored");
            return false;
        }

        self.halt();
        self.state = SessionState::Paused;
        info!(score = self.score, length = self.body.len(), "session paused");
        self.publish();
        true
    }

    /// Over -> Running on a fresh random board. Returns false from any other
    /// state. The snapshot is ignored.
    pub fn resume(&mut self) -> bool {
        self.resume_at(Instant::now())
    }

    /// Same as [`Session::resume`], arming the first tick relative to `now`.
    pub fn resume_at(&mut self, now: Instant) -> bool {
        if self.state != SessionState::Over {
            debug!(state = ?self.state, "resume ignored");
            return false;
        }

        let start = food::spawn(&mut self.rng, self.grid);
        let fresh_food = food::spawn(&mut self.rng, self.grid);

        info!(x = start.x, y = start.y, "session restarted on fresh board");
        self.enter_running(Body::new(start), fresh_food, now);
        true
    }

    /// Records a raw direction request against the heading applied last tick.
    ///
    /// Accepted requests overwrite the pending heading. Requests outside
    /// `Running` are still arbitrated, but every entry into `Running` resets
    /// the heading.
    pub fn request_heading(&mut self, requested: Heading) -> Verdict {
        let verdict = heading::request(requested, self.heading);
        if let Verdict::Accepted(next) = verdict {
            self.pending_heading = next;
        }

        trace!(?requested, current = ?self.heading, ?verdict, "heading request");
        verdict
    }

    /// Fires a tick if one is due at `now`.
    pub fn poll_tick(&mut self, now: Instant) -> Option<Collision> {
        if self.scheduler.poll(now) {
            self.tick()
        } else {
            None
        }
    }

    /// Advances the simulation by one step. No-op unless `Running`.
    pub fn tick(&mut self) -> Option<Collision> {
        if self.state != SessionState::Running {
            return None;
        }

        self.tick_count += 1;
        self.heading = self.pending_heading;

        let step = snake::advance(&self.body, self.heading, self.grid.cell_size);

        if step.head == self.food {
            self.score += 1;
            self.body = self.body.grown(step.head);
            self.food = food::spawn(&mut self.rng, self.grid);
            debug!(
                score = self.score,
                length = self.body.len(),
                food_x = self.food.x,
                food_y = self.food.y,
                "food eaten"
            );
        } else {
            self.body = step.shifted;
        }

        let outcome = collision::check(step.head, &self.body, self.grid);
        if outcome.is_fatal() {
            self.halt();
            self.state = SessionState::Over;
            self.death = Some(outcome);
            info!(
                ?outcome,
                score = self.score,
                ticks = self.tick_count,
                "session over"
            );
        }

        self.publish();
        Some(outcome)
    }

    /// Replaces the live board and heading, keeping the current state.
    ///
    /// Used to script exact positions; publishes the new board.
    pub fn arrange(&mut self, body: Body, food: Cell, heading: Heading) {
        self.body = body;
        self.food = food;
        self.heading = heading;
        self.pending_heading = heading;
        self.publish();
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Heading applied on the most recent tick.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Heading that the next tick will apply.
    #[must_use]
    pub fn pending_heading(&self) -> Heading {
        self.pending_heading
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn published(&self) -> &Published {
        &self.published
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    fn enter_running(&mut self, body: Body, food: Cell, now: Instant) {
        self.body = body;
        self.food = food;
        self.heading = START_HEADING;
        self.pending_heading = START_HEADING;
        self.score = 0;
        self.death = None;
        self.state = SessionState::Running;
        self.scheduler.arm(now);
        self.publish();
    }

    fn halt(&mut self) {
        self.scheduler.disarm();
        self.snapshot = Some(Snapshot {
            body: self.body.clone(),
            food: self.food,
        });
    }

    fn publish(&mut self) {
        self.published = Published {
            sequence: self.published.sequence + 1,
            frame: RenderFrame {
                cells: self.body.to_cells(),
                food: self.food,
                terminal: self.state == SessionState::Over,
            },
            state: self.state,
            score: self.score,
            death: self.death,
        };
    }
}
