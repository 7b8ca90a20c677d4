//! Simulation module
//!
//! All match logic lives here:
//! - Fixed per-frame speeds, no wall-clock scaling
//! - Seeded RNG for spawning
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod agent;
pub mod collision;
pub mod field;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use agent::{Agent, BallState, Role, SteeringMode, nearest_opponent, steer};
pub use collision::{PairOrder, integrate, resolve_agent_collisions, resolve_boundary_collisions};
pub use field::Field;
pub use spawn::spawn_agents;
pub use state::{Match, RngState, Team};
pub use tick::tick;
