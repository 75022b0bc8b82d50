use serde::{Deserialize, Serialize};

use super::action::Velocity;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by one velocity step
    pub fn stepped(&self, velocity: Velocity) -> Self {
        Self {
            x: self.x + velocity.dx,
            y: self.y + velocity.dy,
        }
    }
}

/// Lifecycle of a session. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    NotStarted,
    Running,
    Over,
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the grid
    Wall,
    /// Head landed on another segment
    SelfCollision,
}

/// Everything that lives on the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    pub food: Position,
    pub velocity: Velocity,
    pub score: u32,
}

impl Board {
    /// A single-segment snake at rest
    pub fn new(head: Position, food: Position) -> Self {
        Self {
            body: vec![head],
            food,
            velocity: Velocity::STILL,
            score: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Body segments excluding the head
    pub fn tail_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// The body always holds at least the head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            food: self.food,
            body: self.body.clone(),
        }
    }
}

/// What the presenter needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub food: Position,
    /// Head first
    pub body: Vec<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_step() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.stepped(Velocity::new(1, 0)), Position::new(6, 5));
        assert_eq!(pos.stepped(Velocity::new(0, -1)), Position::new(5, 4));
        assert_eq!(pos.stepped(Velocity::STILL), pos);
    }

    #[test]
    fn test_new_board() {
        let board = Board::new(Position::new(20, 14), Position::new(5, 5));
        assert_eq!(board.len(), 1);
        assert_eq!(board.head(), Position::new(20, 14));
        assert!(board.tail_segments().is_empty());
        assert!(board.velocity.is_still());
        assert_eq!(board.score, 0);
    }

    #[test]
    fn test_snapshot_keeps_body_order() {
        let mut board = Board::new(Position::new(3, 3), Position::new(9, 9));
        board.body.push(Position::new(2, 3));
        board.body.push(Position::new(1, 3));

        let snapshot = board.snapshot();
        assert_eq!(snapshot.food, Position::new(9, 9));
        assert_eq!(
            snapshot.body,
            vec![Position::new(3, 3), Position::new(2, 3), Position::new(1, 3)]
        );
    }
}
