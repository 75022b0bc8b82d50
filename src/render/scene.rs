use crate::game::{Presenter, RenderSnapshot};

/// Latest picture handed over by the game loop.
///
/// The loop pushes into this on its own cadence; the renderer reads it on the
/// frame timer.
#[derive(Debug, Default)]
pub struct Scene {
    snapshot: Option<RenderSnapshot>,
    score: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&RenderSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Presenter for Scene {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        self.snapshot = Some(snapshot.clone());
    }

    fn show_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_keeps_latest_snapshot() {
        let mut scene = Scene::new();
        assert!(scene.snapshot().is_none());

        let first = RenderSnapshot {
            food: Position::new(1, 1),
            body: vec![Position::new(5, 5)],
        };
        let second = RenderSnapshot {
            food: Position::new(1, 1),
            body: vec![Position::new(6, 5)],
        };
        scene.render(&first);
        scene.render(&second);
        scene.show_score(4);

        assert_eq!(scene.snapshot(), Some(&second));
        assert_eq!(scene.score(), 4);
    }
}
