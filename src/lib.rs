pub mod app;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod grid;
pub mod heading;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
