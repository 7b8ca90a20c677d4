//! Simulation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("agent {agent_id} has no opponent to steer against")]
    NoOpponent { agent_id: u32 },

    #[error("match has no agents")]
    EmptyRoster,

    #[error("team {team_id} has no color (palette holds {palette_len})")]
    TeamOutOfPalette { team_id: u32, palette_len: usize },

    #[error("invalid spawn request: {0}")]
    InvalidSpawn(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl SimError {
    /// Whether the error comes from how the match was set up rather than
    /// from something that happened during a frame
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            SimError::InvalidSpawn(_) | SimError::InvalidSettings(_)
        )
    }
}
