use grid_snake::collision::Collision;
use grid_snake::config::GameConfig;
use grid_snake::grid::Cell;
use grid_snake::heading::Heading;
use grid_snake::session::{Session, SessionState};
use grid_snake::snake::Body;

fn session(seed: u64) -> Session {
    Session::new_with_seed(&GameConfig::default(), seed)
}

#[test]
fn fresh_start_moves_right_one_cell() {
    let mut state = session(1);

    assert!(state.start());
    assert_eq!(state.body().to_cells(), vec![Cell::new(100, 100)]);
    assert_eq!(state.food(), Cell::new(200, 200));

    state.tick();

    assert_eq!(state.body().to_cells(), vec![Cell::new(120, 100)]);
    assert_eq!(state.food(), Cell::new(200, 200));
    assert_eq!(state.score(), 0);
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = session(42);
    state.start();
    state.arrange(Body::new(Cell::new(180, 100)), Cell::new(200, 100), Heading::Right);

    assert_eq!(state.tick(), Some(Collision::Safe));
    assert_eq!(state.score(), 1);
    assert_eq!(state.body().len(), 2);
    assert_eq!(state.body().head(), Cell::new(200, 100));
    assert!(state.grid().contains(state.food()));
    assert!(state.grid().is_aligned(state.food()));

    state.arrange(state.body().clone(), Cell::new(0, 480), Heading::Right);
    state.request_heading(Heading::Up);
    for _ in 0..5 {
        assert_eq!(state.tick(), Some(Collision::Safe));
    }
    assert_eq!(state.body().head(), Cell::new(200, 0));

    assert_eq!(state.tick(), Some(Collision::BoundaryViolation));
    assert_eq!(state.state(), SessionState::Over);
    assert_eq!(state.score(), 1);
    assert!(state.published().frame.terminal);
}

#[test]
fn left_edge_exit_is_a_boundary_violation() {
    let mut state = session(5);
    state.start();
    state.arrange(Body::new(Cell::new(0, 100)), Cell::new(200, 200), Heading::Left);

    assert_eq!(state.tick(), Some(Collision::BoundaryViolation));
    assert_eq!(state.state(), SessionState::Over);
}

#[test]
fn turning_into_own_body_is_a_self_collision() {
    let mut state = session(6);
    state.start();
    let coiled = Body::from_segments(vec![
        Cell::new(100, 100),
        Cell::new(120, 100),
        Cell::new(120, 120),
        Cell::new(100, 120),
        Cell::new(80, 120),
    ])
    .expect("coiled body should be non-empty");
    state.arrange(coiled, Cell::new(400, 400), Heading::Left);

    state.request_heading(Heading::Down);

    assert_eq!(state.tick(), Some(Collision::SelfCollision));
    assert_eq!(state.state(), SessionState::Over);
}

#[test]
fn pause_and_start_restore_the_snapshot() {
    let mut state = session(7);
    state.start();
    state.tick();
    state.request_heading(Heading::Down);
    state.tick();
    state.tick();

    assert!(state.stop());
    let held_body = state.body().clone();
    let held_food = state.food();

    assert!(!state.stop());
    assert_eq!(state.snapshot().map(|s| &s.body), Some(&held_body));

    assert!(state.start());
    assert_eq!(state.body(), &held_body);
    assert_eq!(state.food(), held_food);
    assert_eq!(state.score(), 0);
    assert_eq!(state.heading(), Heading::Right);

    state.tick();
    assert_eq!(state.body().head(), Cell::new(140, 140));
}

#[test]
fn play_again_after_game_over_starts_fresh() {
    let mut state = session(8);
    state.start();
    state.arrange(Body::new(Cell::new(480, 240)), Cell::new(0, 0), Heading::Right);
    state.tick();
    assert_eq!(state.state(), SessionState::Over);

    assert!(state.resume());

    assert_eq!(state.state(), SessionState::Running);
    assert_eq!(state.body().len(), 1);
    assert!(state.grid().contains(state.body().head()));
    assert!(state.grid().is_aligned(state.body().head()));
    assert!(state.grid().contains(state.food()));
    assert_eq!(state.score(), 0);
    assert_eq!(state.heading(), Heading::Right);
}
