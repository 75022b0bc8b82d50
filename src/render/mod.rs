pub mod renderer;
pub mod scene;

pub use renderer::{Renderer, View};
pub use scene::Scene;
