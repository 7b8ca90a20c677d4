//! Agents and the steering rules that pick their heading each frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{distance, unit};
use crate::consts::*;
use crate::error::SimError;

/// Control rule applied to every agent of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SteeringMode {
    /// Even teams chase their nearest opponent, odd teams flee from theirs
    #[default]
    Pursuit,
}

/// Role derived from team parity under the pursuit rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Pursuer,
    Evader,
}

impl Role {
    pub fn for_team(team_id: u32) -> Self {
        if team_id % 2 == 0 {
            Role::Pursuer
        } else {
            Role::Evader
        }
    }
}

/// Ball state handed to steering. Never populated: there is no ball physics
/// yet, so both fields stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Option<Vec2>,
    pub vel: Option<Vec2>,
}

/// A simulated player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    pub team_id: u32,
    /// Center position, whole pixels after every update
    pub pos: Vec2,
    /// Heading angle (radians); carried in state, not read by any rule
    pub theta: f32,
    /// Direction of travel, unit length once steered
    pub vel: Vec2,
    /// Pixels travelled per frame
    pub speed: f32,
    pub radius: f32,
    pub mode: SteeringMode,
}

impl Agent {
    pub fn new(id: u32, team_id: u32, pos: Vec2, mode: SteeringMode) -> Self {
        Self {
            id,
            team_id,
            pos,
            theta: 0.0,
            vel: Vec2::ONE,
            speed: AGENT_SPEED,
            radius: AGENT_RADIUS,
            mode,
        }
    }

    pub fn role(&self) -> Role {
        Role::for_team(self.team_id)
    }

    /// Unit heading for rendering, `None` while the velocity is zero
    pub fn heading(&self) -> Option<Vec2> {
        unit(self.vel)
    }
}

/// Nearest agent of another team. Ties go to the first one in roster order.
pub fn nearest_opponent<'a>(agent: &Agent, roster: &'a [Agent]) -> Option<&'a Agent> {
    let mut best: Option<(&Agent, f32)> = None;
    for other in roster {
        if other.id == agent.id || other.team_id == agent.team_id {
            continue;
        }
        let dist = distance(agent.pos, other.pos);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((other, dist)),
        }
    }
    best.map(|(other, _)| other)
}

/// Compute the agent's next velocity.
///
/// Returns `Ok(None)` when the opponent sits exactly on the agent and no
/// direction can be derived; the caller keeps the previous velocity.
pub fn steer(agent: &Agent, roster: &[Agent], _ball: &BallState) -> Result<Option<Vec2>, SimError> {
    match agent.mode {
        SteeringMode::Pursuit => {
            let opponent = nearest_opponent(agent, roster)
                .ok_or(SimError::NoOpponent { agent_id: agent.id })?;
            let toward = opponent.pos - agent.pos;
            let direction = match agent.role() {
                Role::Pursuer => toward,
                Role::Evader => -toward,
            };
            Ok(unit(direction))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: u32, team_id: u32, x: f32, y: f32) -> Agent {
        Agent::new(id, team_id, Vec2::new(x, y), SteeringMode::Pursuit)
    }

    #[test]
    fn test_pursuer_points_at_opponent() {
        let roster = vec![agent(0, 0, 100.0, 100.0), agent(1, 1, 130.0, 140.0)];
        let vel = steer(&roster[0], &roster, &BallState::default())
            .unwrap()
            .unwrap();
        assert!((vel.length() - 1.0).abs() < 1e-6);
        assert!((vel.x - 0.6).abs() < 1e-6);
        assert!((vel.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_evader_is_negated_pursuer() {
        let pursuer = agent(0, 0, 100.0, 100.0);
        let evader = agent(1, 1, 100.0, 100.0);
        let opponent_of_pursuer = agent(2, 1, 60.0, 130.0);
        let opponent_of_evader = agent(3, 0, 60.0, 130.0);

        let chase = steer(
            &pursuer,
            &[pursuer.clone(), opponent_of_pursuer],
            &BallState::default(),
        )
        .unwrap()
        .unwrap();
        let flee = steer(
            &evader,
            &[evader.clone(), opponent_of_evader],
            &BallState::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(flee, -chase);
    }

    #[test]
    fn test_nearest_opponent_skips_teammates() {
        let roster = vec![
            agent(0, 0, 0.0, 0.0),
            agent(1, 0, 1.0, 0.0),
            agent(2, 1, 50.0, 0.0),
            agent(3, 1, 20.0, 0.0),
        ];
        let nearest = nearest_opponent(&roster[0], &roster).unwrap();
        assert_eq!(nearest.id, 3);
    }

    #[test]
    fn test_nearest_opponent_first_minimum_wins() {
        let roster = vec![
            agent(0, 0, 0.0, 0.0),
            agent(1, 1, 10.0, 0.0),
            agent(2, 1, -10.0, 0.0),
        ];
        assert_eq!(nearest_opponent(&roster[0], &roster).unwrap().id, 1);
    }

    #[test]
    fn test_single_team_has_no_opponent() {
        let roster = vec![agent(0, 0, 0.0, 0.0), agent(1, 0, 30.0, 0.0)];
        let result = steer(&roster[0], &roster, &BallState::default());
        assert_eq!(result, Err(SimError::NoOpponent { agent_id: 0 }));
    }

    #[test]
    fn test_coincident_opponent_yields_no_direction() {
        let roster = vec![agent(0, 0, 10.0, 10.0), agent(1, 1, 10.0, 10.0)];
        let result = steer(&roster[0], &roster, &BallState::default()).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_role_by_parity() {
        assert_eq!(Role::for_team(0), Role::Pursuer);
        assert_eq!(Role::for_team(1), Role::Evader);
        assert_eq!(Role::for_team(4), Role::Pursuer);
    }

    #[test]
    fn test_heading_guards_zero_velocity() {
        let mut a = agent(0, 0, 0.0, 0.0);
        a.vel = Vec2::ZERO;
        assert_eq!(a.heading(), None);
    }
}
