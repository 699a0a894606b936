use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CollisionType, GameState, Position};
use crate::metrics::GameMetrics;

/// Terminal columns used per grid cell
const CELL_WIDTH: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let (header, body, footer) = Self::split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), header);

        let game_area = Self::board_area(body, state);
        frame.render_widget(self.render_grid(state), game_area);

        frame.render_widget(self.render_controls(), footer);
    }

    pub fn render_game_over(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let (header, body, footer) = Self::split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), header);

        let [panel] = Layout::horizontal([Constraint::Length(44)])
            .flex(Flex::Center)
            .areas(body);
        let [panel] = Layout::vertical([Constraint::Length(9)])
            .flex(Flex::Center)
            .areas(panel);
        frame.render_widget(self.game_over_panel(state, metrics), panel);

        frame.render_widget(self.render_exit_hint(), footer);
    }

    fn split(area: Rect) -> (Rect, Rect, Rect) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(1), // Footer
        ])
        .areas(area);
        (header, body, footer)
    }

    /// Center the board, clamped to the available space
    fn board_area(area: Rect, state: &GameState) -> Rect {
        let width = (state.grid.width as u16).saturating_mul(CELL_WIDTH) + 2;
        let height = state.grid.height as u16 + 2;

        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [board] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);
        board
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'static> {
        let head = state.snake.head();
        let power_up = state.power_up.position();
        let mut lines = Vec::with_capacity(state.grid.height as usize);

        for y in 0..state.grid.height {
            let mut spans = Vec::with_capacity(state.grid.width as usize);

            for x in 0..state.grid.width {
                let pos = Position::new(x, y);

                let cell = if pos == head {
                    Span::styled(
                        "██",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.is_occupied_by_snake(pos) {
                    Span::styled("▓▓", Style::default().fg(Color::White))
                } else if power_up == Some(pos) {
                    Span::styled(
                        "◆ ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if pos == state.food.position() {
                    Span::styled("● ", Style::default().fg(Color::Green))
                } else {
                    Span::raw("  ")
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("x{:.2}", state.snake.speed()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn game_over_panel(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let cause = match Self::cause(state) {
            Some(CollisionType::Wall) => "You left the board",
            Some(CollisionType::SelfCollision) => "You ran into yourself",
            None => "Round ended",
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Length: ", Style::default().fg(Color::Yellow)),
                Span::raw(state.snake.len().to_string()),
                Span::raw("   "),
                Span::styled("Boosts: ", Style::default().fg(Color::Yellow)),
                Span::raw(metrics.power_ups_collected.to_string()),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    /// Rebuild the cause from the final snake position
    fn cause(state: &GameState) -> Option<CollisionType> {
        if state.snake.is_out_of_bounds(state.grid) {
            Some(CollisionType::Wall)
        } else if state.snake.collides_with_self() {
            Some(CollisionType::SelfCollision)
        } else {
            None
        }
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_exit_hint(&self) -> Paragraph<'static> {
        Paragraph::new(Line::from(Span::styled(
            "Press any key to exit",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
