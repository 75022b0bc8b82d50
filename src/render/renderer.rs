use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::scene::Scene;
use crate::game::{Difficulty, GameState, Position};

/// Everything one frame shows
pub struct View<'a> {
    pub scene: &'a Scene,
    pub state: GameState,
    pub difficulty: Option<Difficulty>,
    pub grid_width: i32,
    pub grid_height: i32,
    /// Background cue active
    pub music: bool,
    /// End-of-game notice waiting for a key press
    pub notice: Option<&'a str>,
}

/// Clickable direction buttons along the bottom, left to right
const CONTROLS: [(&str, &str); 4] = [("up", "▲"), ("down", "▼"), ("left", "◀"), ("right", "▶")];

/// Header, game area and button row
fn regions(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Buttons
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn control_buttons(footer: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(footer)
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &View) {
        let (header, game, footer) = regions(frame.area());

        frame.render_widget(self.render_stats(view), header);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(game)[1];

        let body = if let Some(notice) = view.notice {
            self.render_notice(notice, view.scene.score())
        } else if view.state == GameState::NotStarted {
            self.render_menu()
        } else {
            self.render_grid(view)
        };
        frame.render_widget(body, game_area);

        for (area, (name, arrow)) in control_buttons(footer).iter().zip(CONTROLS) {
            frame.render_widget(self.render_button(name, arrow), *area);
        }
    }

    /// Name of the on-screen control under a mouse click, if any
    pub fn control_at(&self, screen: Rect, column: u16, row: u16) -> Option<&'static str> {
        let (_, _, footer) = regions(screen);

        control_buttons(footer)
            .iter()
            .zip(CONTROLS)
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(_, (name, _))| name)
    }

    fn render_grid(&self, view: &View) -> Paragraph<'_> {
        let (body, food) = match view.scene.snapshot() {
            Some(snapshot) => (snapshot.body.as_slice(), Some(snapshot.food)),
            None => (&[][..], None),
        };
        let head = body.first().copied();

        let mut lines = Vec::new();

        for y in 1..=view.grid_height {
            let mut spans = Vec::new();

            for x in 1..=view.grid_width {
                let pos = Position::new(x, y);

                let cell = if Some(pos) == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if body.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if Some(pos) == food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, view: &View) -> Paragraph<'_> {
        let difficulty = view.difficulty.map(|d| d.as_str()).unwrap_or("-");

        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.scene.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Difficulty: ", Style::default().fg(Color::Yellow)),
            Span::styled(difficulty, Style::default().fg(Color::White)),
        ];
        if view.music {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("♪", Style::default().fg(Color::Magenta)));
        }

        Paragraph::new(vec![Line::from(spans), self.render_help()])
            .alignment(Alignment::Center)
    }

    fn render_menu(&self) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Choose a difficulty to start",
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
        ];

        for (key, difficulty) in ["1", "2", "3"].into_iter().zip(Difficulty::ALL) {
            text.push(Line::from(vec![
                Span::styled(
                    key,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  {:<6} ({}ms)",
                    difficulty.as_str(),
                    difficulty.tick_interval().as_millis()
                )),
            ]));
        }

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Snake "),
        )
    }

    fn render_notice<'a>(&self, notice: &'a str, score: u32) -> Paragraph<'a> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                notice,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press any key", Style::default().fg(Color::Green)),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_help(&self) -> Line<'_> {
        Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("1-3", Style::default().fg(Color::Cyan)),
            Span::raw(" difficulty | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])
    }

    fn render_button(&self, name: &'static str, arrow: &'static str) -> Paragraph<'_> {
        let label = Line::from(vec![
            Span::styled(arrow, Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::raw(name),
        ]);

        Paragraph::new(label).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
