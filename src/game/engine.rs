use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::{Direction, Velocity},
    config::GameConfig,
    state::{Board, Collision, Position},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the head was on the food when the step began
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<Collision>,
}

/// Pure grid rules: movement, growth, food placement and collisions.
///
/// The engine never looks at the session lifecycle; `GameLoop` decides when
/// a step is allowed to happen.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh board: one segment at the spawn cell, at rest, food anywhere
    pub fn reset(&mut self) -> Board {
        let food = self.random_cell();
        Board::new(self.config.spawn, food)
    }

    /// Apply the turn rule. Returns true if the velocity was updated.
    pub fn turn(&self, board: &mut Board, direction: Direction) -> bool {
        if board.velocity.reverses(direction) {
            return false;
        }
        board.velocity = Velocity::from(direction);
        true
    }

    /// Execute one step of the game
    pub fn step(&mut self, board: &mut Board) -> StepInfo {
        let old_head = board.head();

        // Eat before moving: the copy of the old head pushed here is
        // overwritten by the shift, so the old tail survives as growth.
        let ate_food = old_head == board.food;
        if ate_food {
            board.food = self.random_cell();
            board.body.push(old_head);
            board.score += 1;
        }

        for i in (1..board.body.len()).rev() {
            board.body[i] = board.body[i - 1];
        }
        board.body[0] = old_head.stepped(board.velocity);

        StepInfo {
            ate_food,
            collision: self.check_collision(board),
        }
    }

    /// Check the moved head against the walls and the shifted body
    fn check_collision(&self, board: &Board) -> Option<Collision> {
        let head = board.head();

        if !self.config.contains(head) {
            return Some(Collision::Wall);
        }

        // A snake at rest only overlaps itself through growth at the spawn cell
        if !board.velocity.is_still() && board.tail_segments().contains(&head) {
            return Some(Collision::SelfCollision);
        }

        None
    }

    /// Uniform cell inside the grid. Does not avoid the snake.
    pub fn random_cell(&mut self) -> Position {
        let x = self.rng.gen_range(1..=self.config.grid_width);
        let y = self.rng.gen_range(1..=self.config.grid_height);
        Position::new(x, y)
    }
}
