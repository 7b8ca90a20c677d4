//! Pursuit Field - a small pursuit/evasion simulation on a 2D field
//!
//! Core modules:
//! - `sim`: Simulation (agents, steering, collisions, spawning)
//! - `renderer`: WebGPU rendering pipeline and scene building
//! - `driver`: Fixed-rate loop driver and simulation context
//! - `settings`: Match configuration

pub mod driver;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{LoopState, SimulationContext};
pub use error::SimError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Display surface size in screen pixels
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Fixed frame rate cap
    pub const TARGET_FPS: u32 = 60;

    /// Field rectangle (screen coordinates, y grows downward)
    pub const FIELD_LEFT: f32 = 300.0;
    pub const FIELD_TOP: f32 = 100.0;
    pub const FIELD_WIDTH: f32 = 680.0;
    pub const FIELD_HEIGHT: f32 = 520.0;
    /// Field border line width
    pub const FIELD_BORDER: f32 = 3.0;

    /// Collision radius shared by every agent
    pub const AGENT_RADIUS: f32 = 10.0;
    /// Distance covered per frame along the unit velocity
    pub const AGENT_SPEED: f32 = 2.0;
    /// Heading marker dot radius
    pub const HEADING_MARKER_RADIUS: f32 = 3.0;

    /// Default roster shape
    pub const AGENTS_PER_TEAM: usize = 2;
    pub const TEAM_COUNT: usize = 2;
}
