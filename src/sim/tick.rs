//! Fixed-rate simulation tick
//!
//! One tick is one frame: steering, then movement and collisions. Speeds are
//! per frame, so the simulation runs at whatever rate the loop driver caps
//! ticks to.

use super::state::Match;
use crate::error::SimError;

/// Advance the match by one frame.
///
/// A steering failure aborts the tick before anything moves.
pub fn tick(m: &mut Match) -> Result<(), SimError> {
    m.step()?;
    m.advance();

    if log::log_enabled!(log::Level::Debug) {
        for agent in &m.agents {
            log::debug!(
                "frame {} agent {} pos ({}, {})",
                m.frame,
                agent.id,
                agent.pos.x,
                agent.pos.y
            );
        }
    }
    Ok(())
}
