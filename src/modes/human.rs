use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use super::shell::TerminalShell;
use crate::audio::Speaker;
use crate::game::{Difficulty, GameConfig, GameLoop};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Renderer, Scene, View};
use crate::scheduler::{IntervalScheduler, TickReceiver};

type TerminalLoop = GameLoop<IntervalScheduler, Scene, Speaker, TerminalShell>;

/// Options that outlive a single session
#[derive(Debug, Clone, Default)]
pub struct HumanOptions {
    /// Start every session at this difficulty instead of showing the menu
    pub difficulty: Option<Difficulty>,
    pub muted: bool,
}

pub struct HumanMode {
    config: GameConfig,
    options: HumanOptions,
    game_loop: TerminalLoop,
    ticks: Option<TickReceiver>,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Size of the last drawn frame, for mouse hit tests
    screen: Rect,
    notice: Option<String>,
    should_quit: bool,
    reload_requested: bool,
}

impl HumanMode {
    /// Must be called inside a tokio runtime when a difficulty is preset
    pub fn new(config: GameConfig, options: HumanOptions) -> Self {
        let (game_loop, ticks) = Self::new_session(&config, &options);

        Self {
            config,
            options,
            game_loop,
            ticks: Some(ticks),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            screen: Rect::default(),
            notice: None,
            should_quit: false,
            reload_requested: false,
        }
    }

    fn new_session(config: &GameConfig, options: &HumanOptions) -> (TerminalLoop, TickReceiver) {
        let (scheduler, ticks) = IntervalScheduler::new();
        let mut game_loop = GameLoop::new(
            config.clone(),
            scheduler,
            Scene::new(),
            Speaker::open(options.muted),
            TerminalShell::new(),
        );

        if let Some(difficulty) = options.difficulty {
            game_loop.select_difficulty(difficulty);
        }

        (game_loop, ticks)
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticks = self
            .ticks
            .take()
            .context("Session tick channel already in use")?;

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick, at whatever cadence the difficulty set
                Some(tick) = ticks.recv() => {
                    if self.game_loop.scheduler().is_current(tick) {
                        self.on_tick();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| self.draw(frame)).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            if self.reload_requested {
                ticks = self.reload();
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let action = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.renderer.control_at(self.screen, mouse.column, mouse.row) {
                    Some(control) => self.input_handler.handle_control(control),
                    None => return,
                }
            }
            _ => return,
        };

        // The game-over notice swallows everything but quit
        if self.notice.is_some() {
            match action {
                KeyAction::Quit => self.should_quit = true,
                _ => self.reload_requested = true,
            }
            return;
        }

        match action {
            KeyAction::Turn(direction) => {
                self.game_loop.set_direction(direction);
            }
            KeyAction::SelectDifficulty(difficulty) => {
                self.game_loop.select_difficulty(difficulty);
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn on_tick(&mut self) {
        self.game_loop.tick();

        if let Some(notice) = self.game_loop.shell_mut().take_restart() {
            self.notice = Some(notice);
        }
    }

    /// Throw the whole session away and build a new one
    fn reload(&mut self) -> TickReceiver {
        info!("reloading session");
        let (game_loop, ticks) = Self::new_session(&self.config, &self.options);
        self.game_loop = game_loop;
        self.notice = None;
        self.reload_requested = false;
        ticks
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.screen = frame.area();
        let view = View {
            scene: self.game_loop.presenter(),
            state: self.game_loop.state(),
            difficulty: self.game_loop.difficulty(),
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
            music: self.game_loop.audio().is_background_playing(),
            notice: self.notice.as_deref(),
        };
        self.renderer.render(frame, &view);
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Velocity};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn muted() -> HumanOptions {
        HumanOptions {
            difficulty: None,
            muted: true,
        }
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), muted());
        assert_eq!(mode.game_loop.state(), GameState::NotStarted);
        assert_eq!(mode.game_loop.score(), 0);
        assert!(mode.notice.is_none());
    }

    #[test]
    fn test_turns_ignored_on_menu() {
        let mut mode = HumanMode::new(GameConfig::default(), muted());
        mode.handle_event(key(KeyCode::Right));
        assert!(mode.game_loop.board().velocity.is_still());
    }

    #[tokio::test]
    async fn test_menu_starts_game() {
        let mut mode = HumanMode::new(GameConfig::default(), muted());

        mode.handle_event(key(KeyCode::Char('2')));
        assert_eq!(mode.game_loop.state(), GameState::Running);
        assert_eq!(mode.game_loop.difficulty(), Some(Difficulty::Medium));

        mode.handle_event(key(KeyCode::Char('d')));
        assert_eq!(mode.game_loop.board().velocity, Velocity::new(1, 0));
    }

    #[tokio::test]
    async fn test_clicking_direction_buttons() {
        let mut mode = HumanMode::new(GameConfig::default(), muted());
        mode.screen = Rect::new(0, 0, 80, 40);
        mode.handle_event(key(KeyCode::Char('2')));

        // Off the button row
        mode.handle_event(click(45, 10));
        assert!(mode.game_loop.board().velocity.is_still());

        mode.handle_event(click(45, 38));
        assert_eq!(mode.game_loop.board().velocity, Velocity::new(-1, 0));

        mode.handle_event(click(5, 38));
        assert_eq!(mode.game_loop.board().velocity, Velocity::new(0, -1));
    }

    #[tokio::test]
    async fn test_preset_difficulty_starts_each_session() {
        let options = HumanOptions {
            difficulty: Some(Difficulty::Easy),
            muted: true,
        };
        let mut mode = HumanMode::new(GameConfig::default(), options);
        assert_eq!(mode.game_loop.state(), GameState::Running);

        mode.reload();
        assert_eq!(mode.game_loop.state(), GameState::Running);
        assert_eq!(mode.game_loop.difficulty(), Some(Difficulty::Easy));
    }

    #[tokio::test]
    async fn test_game_over_notice_then_reload() {
        let config = GameConfig {
            spawn: crate::game::Position::new(30, 15),
            seed: Some(1),
            ..GameConfig::default()
        };
        let mut mode = HumanMode::new(config, muted());
        mode.handle_event(key(KeyCode::Char('3')));
        mode.handle_event(key(KeyCode::Right));

        mode.on_tick(); // crash into the right wall
        assert!(mode.notice.is_none());
        mode.on_tick(); // game-over handling
        assert!(mode.notice.as_deref().unwrap().starts_with("Game Over!"));
        assert!(!mode.game_loop.scheduler().is_active());

        // Any key leaves the notice
        mode.handle_event(key(KeyCode::Char('x')));
        assert!(mode.reload_requested);
        assert!(!mode.should_quit);

        mode.reload();
        assert_eq!(mode.game_loop.state(), GameState::NotStarted);
        assert!(mode.notice.is_none());
        assert!(!mode.reload_requested);
    }

    #[test]
    fn test_quit_from_notice() {
        let mut mode = HumanMode::new(GameConfig::default(), muted());
        mode.notice = Some("Game Over!".to_string());
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
        assert!(!mode.reload_requested);
    }
}
