//! The session state machine: `NotStarted` -> `Running` -> `Over`.

use std::time::Duration;

use tracing::{debug, info, trace};

use super::{
    action::Direction,
    config::{Difficulty, GameConfig},
    engine::GameEngine,
    ports::{AudioNotifier, HostShell, Presenter, Scheduler, SoundCue},
    state::{Board, Collision, GameState},
};

/// What a call to [`GameLoop::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game has not been started yet
    Idle,
    /// One step was applied and rendered
    Moved { ate_food: bool },
    /// The step ended the game; handling happens on the next tick
    Crashed(Collision),
    /// Game-over handling ran
    GameOver,
    /// Game over was already handled
    Halted,
}

/// One game session and the collaborators it drives.
///
/// A session is never reset in place: after game over the host is asked to
/// build a new one.
pub struct GameLoop<S, P, A, H> {
    engine: GameEngine,
    board: Board,
    state: GameState,
    difficulty: Option<Difficulty>,
    over_handled: bool,
    scheduler: S,
    presenter: P,
    audio: A,
    shell: H,
}

impl<S, P, A, H> GameLoop<S, P, A, H>
where
    S: Scheduler,
    P: Presenter,
    A: AudioNotifier,
    H: HostShell,
{
    pub fn new(config: GameConfig, scheduler: S, presenter: P, audio: A, shell: H) -> Self {
        let mut engine = GameEngine::new(config);
        let board = engine.reset();
        Self::with_board(engine, board, scheduler, presenter, audio, shell)
    }

    /// Build a session around an existing board
    pub fn with_board(
        engine: GameEngine,
        board: Board,
        scheduler: S,
        presenter: P,
        audio: A,
        shell: H,
    ) -> Self {
        Self {
            engine,
            board,
            state: GameState::NotStarted,
            difficulty: None,
            over_handled: false,
            scheduler,
            presenter,
            audio,
            shell,
        }
    }

    /// Start ticking every `tick_interval`. Only valid before the first start.
    pub fn start(&mut self, tick_interval: Duration) -> bool {
        if self.state != GameState::NotStarted {
            return false;
        }

        self.state = GameState::Running;
        self.install_schedule(tick_interval);
        info!(interval_ms = tick_interval.as_millis() as u64, "game started");
        true
    }

    /// Difficulty menu: starts the game, or changes speed if already running
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        match self.state {
            GameState::NotStarted => {
                self.difficulty = Some(difficulty);
                self.start(difficulty.tick_interval())
            }
            GameState::Running => {
                self.difficulty = Some(difficulty);
                self.install_schedule(difficulty.tick_interval());
                info!(%difficulty, "difficulty changed");
                true
            }
            GameState::Over => false,
        }
    }

    /// Returns true if the velocity changed
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state != GameState::Running {
            return false;
        }

        self.audio.cue(SoundCue::Turn);
        let turned = self.engine.turn(&mut self.board, direction);
        trace!(%direction, turned, "direction requested");
        turned
    }

    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            GameState::NotStarted => TickOutcome::Idle,
            GameState::Over if self.over_handled => TickOutcome::Halted,
            GameState::Over => {
                self.handle_game_over();
                TickOutcome::GameOver
            }
            GameState::Running => self.advance(),
        }
    }

    fn advance(&mut self) -> TickOutcome {
        let info = self.engine.step(&mut self.board);

        if info.ate_food {
            debug!(score = self.board.score, food = ?self.board.food, "food eaten");
            self.audio.cue(SoundCue::FoodEaten);
            self.presenter.show_score(self.board.score);
        }

        if let Some(collision) = info.collision {
            debug!(?collision, head = ?self.board.head(), "collision");
            self.state = GameState::Over;
            return TickOutcome::Crashed(collision);
        }

        trace!(head = ?self.board.head(), len = self.board.len(), "tick");
        self.presenter.render(&self.board.snapshot());
        TickOutcome::Moved {
            ate_food: info.ate_food,
        }
    }

    fn handle_game_over(&mut self) {
        self.over_handled = true;
        self.audio.stop_background();
        self.audio.cue(SoundCue::GameOver);
        self.scheduler.cancel();
        info!(score = self.board.score, "game over");
        self.shell.announce_game_over(self.board.score);
        self.shell.request_restart();
    }

    fn install_schedule(&mut self, tick_interval: Duration) {
        self.scheduler.cancel();
        self.scheduler.schedule(tick_interval);
        self.audio.start_background();
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.board.score
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn shell(&self) -> &H {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut H {
        &mut self.shell
    }
}
