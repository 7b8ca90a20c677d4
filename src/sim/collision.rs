//! Movement integration and collision resolution
//!
//! Each frame runs, in order: integrate, agent-agent push-out, boundary clamp.
//! Both collision passes are single-shot; there is no iterative relaxation, so
//! a push that fixes one pair may create a new overlap that stays until the
//! next frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::field::Field;
use super::geometry::{ceil_to_grid, distance, round_away_from, unit};

/// Which agent pairs the push-out pass visits.
///
/// Each individual push strictly shrinks the overlap of the pair it resolves.
/// The pass as a whole promises nothing per pair: a later push can move an
/// agent back into one it was already pushed away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PairOrder {
    /// Every ordered pair `(i, j)`, `i != j`. Each pair is visited from both
    /// sides, so a pair fixed early may be pushed again from the other side
    /// after a later push disturbs it.
    #[default]
    Ordered,
    /// Each unordered pair once, `i < j`. A pair is never revisited, so one
    /// undone by a later push can end the pass closer than it started.
    Unordered,
}

/// Move every agent along its velocity by its speed, rounding up to the grid
pub fn integrate(agents: &mut [Agent]) {
    for agent in agents.iter_mut() {
        agent.pos = ceil_to_grid(agent.pos + agent.vel * agent.speed);
    }
}

/// Push `second` out of `first` if they overlap. Only `second` moves.
///
/// Returns true if a push happened.
pub fn push_apart(first: &Agent, second: &mut Agent) -> bool {
    let allowed = first.radius + second.radius;
    let dist = distance(first.pos, second.pos);
    if dist >= allowed {
        return false;
    }

    let deficit = allowed - dist;
    // Coincident centers have no separating direction; push along +x
    let direction = unit(second.pos - first.pos).unwrap_or(Vec2::X);
    let pushed = second.pos + direction * deficit;
    second.pos = round_away_from(pushed, first.pos);
    true
}

/// Agent-agent pass. Returns the number of pushes applied.
pub fn resolve_agent_collisions(agents: &mut [Agent], order: PairOrder) -> usize {
    let n = agents.len();
    let mut pushes = 0;
    for i in 0..n {
        let start = match order {
            PairOrder::Ordered => 0,
            PairOrder::Unordered => i + 1,
        };
        for j in start..n {
            if i == j {
                continue;
            }
            let first = agents[i].clone();
            if push_apart(&first, &mut agents[j]) {
                pushes += 1;
            }
        }
    }
    pushes
}

/// Boundary pass: clamp each agent center into the field
pub fn resolve_boundary_collisions(agents: &mut [Agent], field: &Field) {
    for agent in agents.iter_mut() {
        agent.pos = field.clamp_point(agent.pos);
    }
}
