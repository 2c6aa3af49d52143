pub mod color;
pub mod constants;
pub mod parameters;
mod particle;
pub mod presets;
mod render;
mod sim;
pub mod surface;
pub mod ui;

pub use color::Hsl;
pub use parameters::{Parameters, PlacementStrategy};
pub use particle::Particle;
pub use render::PainterSurface;
pub use sim::{FrameStats, Simulation};
pub use surface::{DrawSurface, RecordingSurface};

/// The area particles live in, in pixels. Expected to be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
