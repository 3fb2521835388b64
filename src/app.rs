use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::config::{FRAME_INTERVAL_MS, PALETTE};
use crate::error::AppError;
use crate::input::{ControlInput, InputHandler};
use crate::renderer;
use crate::session::Session;
use crate::terminal_runtime::TerminalSession;
use crate::ui::hud::HudInfo;

/// Whether the loop should keep running after one input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes one control input to the session.
///
/// Lifecycle buttons that are not offered in the current state are no-ops.
pub fn handle_input<R: Rng>(session: &mut Session<R>, input: ControlInput, now: Instant) -> Flow {
    match input {
        ControlInput::Quit => return Flow::Quit,
        ControlInput::Heading(heading) => {
            session.request_heading(heading);
        }
        ControlInput::Start => {
            session.start_at(now);
        }
        ControlInput::Stop => {
            session.stop();
        }
        ControlInput::Resume => {
            session.resume_at(now);
        }
    }

    Flow::Continue
}

/// Runs the draw/input/tick loop until the player quits.
///
/// Ticks come only from the session's scheduler; the loop redraws whenever
/// the published sequence moves or the terminal is resized.
pub fn run<R: Rng>(terminal: &mut TerminalSession, mut session: Session<R>) -> Result<u32, AppError> {
    let mut input = InputHandler::new();
    let mut best_score = 0_u32;
    let mut drawn_sequence = None;
    let mut drawn_size = None;
    let frame_cap = Duration::from_millis(FRAME_INTERVAL_MS);

    info!(
        interval_ms = u64::try_from(session.scheduler().interval().as_millis()).unwrap_or(u64::MAX),
        "game loop started"
    );

    loop {
        let published = session.published();
        best_score = best_score.max(published.score);

        let size = terminal.terminal_mut().size()?;
        if drawn_sequence != Some(published.sequence) || drawn_size != Some(size) {
            let grid = session.grid();
            terminal.terminal_mut().draw(|frame| {
                renderer::render(
                    frame,
                    published,
                    grid,
                    HudInfo {
                        best_score,
                        palette: &PALETTE,
                    },
                )
            })?;
            drawn_sequence = Some(published.sequence);
            drawn_size = Some(size);
        }

        let timeout = session
            .scheduler()
            .time_until_next(Instant::now())
            .map_or(frame_cap, |remaining| remaining.min(frame_cap));

        if let Some(control) = input.poll_input(timeout)? {
            debug!(?control, "control input");
            if handle_input(&mut session, control, Instant::now()) == Flow::Quit {
                break;
            }
        }

        session.poll_tick(Instant::now());
    }

    info!(best_score, "game loop finished");
    Ok(best_score)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::config::GameConfig;
    use crate::heading::Heading;
    use crate::input::ControlInput;
    use crate::session::{Session, SessionState};

    use super::{Flow, handle_input};

    #[test]
    fn lifecycle_inputs_drive_the_session() {
        let mut session = Session::new_with_seed(&GameConfig::default(), 1);
        let now = Instant::now();

        assert_eq!(handle_input(&mut session, ControlInput::Start, now), Flow::Continue);
        assert_eq!(session.state(), SessionState::Running);

        handle_input(&mut session, ControlInput::Heading(Heading::Down), now);
        assert_eq!(session.pending_heading(), Heading::Down);

        handle_input(&mut session, ControlInput::Stop, now);
        assert_eq!(session.state(), SessionState::Paused);

        handle_input(&mut session, ControlInput::Resume, now);
        assert_eq!(session.state(), SessionState::Paused);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut session = Session::new_with_seed(&GameConfig::default(), 2);

        assert_eq!(
            handle_input(&mut session, ControlInput::Quit, Instant::now()),
            Flow::Quit
        );
    }
}
