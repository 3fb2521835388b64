use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Palette;
use crate::session::{Published, SessionState};

const HUD_MARGIN_X: u16 = 1;

/// Rows reserved below the play area.
pub const HUD_HEIGHT: u16 = 2;

/// Supplemental values displayed by the HUD rows.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Best score reached during this process.
    pub best_score: u32,
    pub palette: &'a Palette,
}

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    published: &Published,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, score_area, controls_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(published, info)).alignment(Alignment::Center),
        inset_horizontal(score_area, HUD_MARGIN_X),
    );

    frame.render_widget(
        Paragraph::new(Line::from(controls_hint(published.state)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(info.palette.hud_muted)),
        inset_horizontal(controls_area, HUD_MARGIN_X),
    );

    play_area
}

/// Buttons offered for `state`: Stop while running, Start from idle or
/// paused, Play Again once over.
#[must_use]
pub fn controls_hint(state: SessionState) -> &'static str {
    match state {
        SessionState::Running => "[Space] Stop   [Arrows/WASD] Move   [Q] Quit",
        SessionState::Idle | SessionState::Paused => "[Enter] Start   [Q] Quit",
        SessionState::Over => "[R] Play Again   [Q] Quit",
    }
}

fn score_line(published: &Published, info: &HudInfo<'_>) -> Line<'static> {
    let value_style = Style::default()
        .fg(info.palette.hud_text)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(info.palette.hud_muted);

    Line::from(vec![
        Span::styled("Score: ", label_style),
        Span::styled(published.score.to_string(), value_style),
        Span::styled("   Best: ", label_style),
        Span::styled(info.best_score.max(published.score).to_string(), value_style),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
