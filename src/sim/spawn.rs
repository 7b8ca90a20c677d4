//! Initial agent placement
//!
//! Even teams start in the left half of the field, odd teams in the right
//! half. One draw per agent: spawns may overlap, and the first frame's
//! collision pass sorts that out as well as it can.

use glam::Vec2;
use rand::Rng;

use super::agent::Agent;
use super::state::{Match, Team};
use crate::error::SimError;

/// Half-open spawn box `[min, max)` for a team, keeping a margin of `radius`
/// from the field edges and the center line
fn spawn_bounds(m: &Match, team_id: u32, radius: f32) -> (Vec2, Vec2) {
    let field = &m.field;
    let (x_min, x_max) = if team_id % 2 == 0 {
        (field.left() + radius, field.center_x() - radius)
    } else {
        (field.center_x() + radius, field.right() - radius)
    };
    (
        Vec2::new(x_min, field.top() + radius),
        Vec2::new(x_max, field.bottom() - radius),
    )
}

/// Spawn `per_team` agents for each of `team_count` teams into `m`.
///
/// Agent ids are `slot + per_team * team`. Spawning is one-shot: a match
/// that already has agents or teams is rejected, keeping ids unique.
pub fn spawn_agents<R: Rng>(
    m: &mut Match,
    per_team: usize,
    team_count: usize,
    rng: &mut R,
) -> Result<(), SimError> {
    if per_team == 0 {
        return Err(SimError::InvalidSpawn("per-team count is zero".into()));
    }
    if team_count == 0 {
        return Err(SimError::InvalidSpawn("team count is zero".into()));
    }
    if !m.agents.is_empty() || !m.teams.is_empty() {
        return Err(SimError::InvalidSpawn("match already has a roster".into()));
    }

    for team in 0..team_count {
        let team_id = team as u32;
        let mut members = Vec::with_capacity(per_team);
        for slot in 0..per_team {
            let id = (slot + per_team * team) as u32;
            let mut agent = Agent::new(id, team_id, Vec2::ZERO, m.mode);
            let (min, max) = spawn_bounds(m, team_id, agent.radius);
            if min.x >= max.x || min.y >= max.y {
                return Err(SimError::InvalidSpawn(format!(
                    "field too small to spawn team {} with radius {}",
                    team_id, agent.radius
                )));
            }

            let x = rng.random_range(min.x..max.x).ceil();
            let y = rng.random_range(min.y..max.y).ceil();
            agent.pos = Vec2::new(x, y);
            log::debug!(
                "Spawned agent {} (team {}) at ({}, {})",
                id,
                team_id,
                x,
                y
            );

            members.push(id);
            m.agents.push(agent);
        }
        m.teams.push(Team { id: team_id, members });
    }

    log::info!(
        "Spawned {} agents across {} teams",
        per_team * team_count,
        team_count
    );
    Ok(())
}
