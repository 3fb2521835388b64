use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::config::{COLUMNS_PER_CELL, GLYPH_CELL, Palette};
use crate::grid::{Cell, Grid};
use crate::session::{Published, SessionState};
use crate::ui::hud::{HUD_HEIGHT, HudInfo, render_hud};
use crate::ui::menu::{render_game_over, render_pause_menu, render_start_menu};

/// Terminal size (columns, rows) needed to draw `grid` plus border and HUD.
#[must_use]
pub fn required_size(grid: Grid) -> (u16, u16) {
    let columns = u16::try_from(grid.columns()).unwrap_or(u16::MAX);
    let rows = u16::try_from(grid.rows()).unwrap_or(u16::MAX);

    (
        columns.saturating_mul(COLUMNS_PER_CELL).saturating_add(2),
        rows.saturating_add(2).saturating_add(HUD_HEIGHT),
    )
}

/// Renders the latest published frame.
pub fn render(frame: &mut Frame<'_>, published: &Published, grid: Grid, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let (min_width, min_height) = required_size(grid);
    if area.width < min_width || area.height < min_height {
        render_too_small(frame, area, min_width, min_height);
        return;
    }

    let play_area = render_hud(frame, area, published, &hud_info);
    let board_area = centered_board(play_area, min_width, min_height - HUD_HEIGHT);
    let palette = hud_info.palette;

    let block = Block::bordered()
        .border_style(Style::new().fg(palette.border))
        .style(Style::new().bg(palette.surface_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    if published.frame.terminal {
        render_game_over(frame, inner, published.score, published.death, palette);
        return;
    }

    render_food(frame, inner, grid, published.frame.food, palette);
    render_cells(frame, inner, grid, &published.frame.cells, palette);

    match published.state {
        SessionState::Idle => render_start_menu(frame, inner),
        SessionState::Paused => render_pause_menu(frame, inner),
        SessionState::Running | SessionState::Over => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, grid: Grid, food: Cell, palette: &Palette) {
    let Some((x, y)) = logical_to_terminal(inner, grid, food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(
        x,
        y,
        GLYPH_CELL,
        Style::new().fg(palette.food).bg(palette.surface_bg),
    );
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, grid: Grid, cells: &[Cell], palette: &Palette) {
    let style = Style::new().fg(palette.snake).bg(palette.surface_bg);

    let buffer = frame.buffer_mut();
    for cell in cells {
        let Some((x, y)) = logical_to_terminal(inner, grid, *cell) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, min_width: u16, min_height: u16) {
    let message = format!(
        "Terminal too small: need {min_width}x{min_height}, have {}x{}",
        area.width, area.height
    );
    frame.render_widget(
        Paragraph::new(Line::from(message))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn centered_board(area: Rect, width: u16, height: u16) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, board, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);

    board
}

fn logical_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    let (column, row) = grid.column_row(cell)?;

    let x = inner
        .x
        .saturating_add(column.saturating_mul(COLUMNS_PER_CELL));
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use crate::config::{GameConfig, PALETTE};
    use crate::grid::{Cell, Grid};
    use crate::heading::Heading;
    use crate::session::Session;
    use crate::snake::Body;
    use crate::ui::hud::HudInfo;

    use super::{render, required_size};

    fn draw(session: &Session, width: u16, height: u16) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal should build");
        terminal
            .draw(|frame| {
                render(
                    frame,
                    session.published(),
                    session.grid(),
                    HudInfo {
                        best_score: 0,
                        palette: &PALETTE,
                    },
                )
            })
            .expect("draw should succeed");
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn default_grid_needs_52_by_29() {
        assert_eq!(required_size(Grid::new(500, 500, 20)), (52, 29));
    }

    #[test]
    fn small_terminal_shows_notice() {
        let session = Session::new_with_seed(&GameConfig::default(), 1);

        let text = buffer_text(&draw(&session, 30, 10));

        assert!(text.contains("Terminal"));
    }

    #[test]
    fn running_frame_draws_body_and_score() {
        let mut session = Session::new_with_seed(&GameConfig::default(), 2);
        session.start();

        let buffer = draw(&session, 60, 32);
        let text = buffer_text(&buffer);

        assert!(text.contains("██"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Stop"));
    }

    #[test]
    fn terminal_frame_draws_game_over_marker() {
        let mut session = Session::new_with_seed(&GameConfig::default(), 3);
        session.start();
        session.arrange(Body::new(Cell::new(0, 0)), Cell::new(200, 200), Heading::Left);
        session.tick();

        let text = buffer_text(&draw(&session, 60, 32));

        assert!(text.contains("Game Over"));
        assert!(text.contains("Play Again"));
        assert!(!text.contains("██"));
    }
}
