//! Match state and the per-frame update steps

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agent::{Agent, BallState, SteeringMode, steer};
use super::collision::{
    PairOrder, integrate, resolve_agent_collisions, resolve_boundary_collisions,
};
use super::field::Field;
use super::spawn::spawn_agents;
use crate::error::SimError;

/// Agent ids belonging to one team. A view over `Match::agents`, which owns
/// the agents themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub members: Vec<u32>,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// A running match: the field, every agent, and the frame counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub field: Field,
    /// All agents, in spawn order
    pub agents: Vec<Agent>,
    pub teams: Vec<Team>,
    /// Steering mode applied to every agent
    pub mode: SteeringMode,
    /// Placeholder; no ball physics, never populated
    pub ball: BallState,
    pub pair_order: PairOrder,
    pub rng_state: RngState,
    /// Frames advanced so far
    pub frame: u64,
}

impl Match {
    /// Create an empty match on the default field
    pub fn new(mode: SteeringMode, seed: u64) -> Self {
        Self {
            field: Field::default(),
            agents: Vec::new(),
            teams: Vec::new(),
            mode,
            ball: BallState::default(),
            pair_order: PairOrder::default(),
            rng_state: RngState::new(seed),
            frame: 0,
        }
    }

    /// Spawn the roster using the match seed. Fails if already spawned.
    pub fn spawn(&mut self, per_team: usize, team_count: usize) -> Result<(), SimError> {
        let mut rng = self.rng_state.to_rng();
        spawn_agents(self, per_team, team_count, &mut rng)
    }

    pub fn agent(&self, id: u32) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Steering pass: pick every agent's velocity for this frame.
    ///
    /// An agent whose direction cannot be computed keeps its previous velocity.
    pub fn step(&mut self) -> Result<(), SimError> {
        if self.agents.is_empty() {
            return Err(SimError::EmptyRoster);
        }
        // The placeholder ball is reset every frame, like the rest of the
        // environment handed to steering
        self.ball = BallState::default();

        for i in 0..self.agents.len() {
            if let Some(vel) = steer(&self.agents[i], &self.agents, &self.ball)? {
                self.agents[i].vel = vel;
            }
        }
        Ok(())
    }

    /// Movement pass: integrate positions, then resolve agent-agent and
    /// boundary collisions in that order
    pub fn advance(&mut self) {
        integrate(&mut self.agents);
        resolve_agent_collisions(&mut self.agents, self.pair_order);
        resolve_boundary_collisions(&mut self.agents, &self.field);
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_step_empty_roster_fails() {
        let mut m = Match::new(SteeringMode::Pursuit, 1);
        assert_eq!(m.step(), Err(SimError::EmptyRoster));
    }

    #[test]
    fn test_spawn_is_seeded() {
        let mut a = Match::new(SteeringMode::Pursuit, 42);
        let mut b = Match::new(SteeringMode::Pursuit, 42);
        a.spawn(2, 2).unwrap();
        b.spawn(2, 2).unwrap();
        let pos_a: Vec<Vec2> = a.agents.iter().map(|x| x.pos).collect();
        let pos_b: Vec<Vec2> = b.agents.iter().map(|x| x.pos).collect();
        assert_eq!(pos_a, pos_b);
    }

    #[test]
    fn test_step_sets_unit_velocities() {
        let mut m = Match::new(SteeringMode::Pursuit, 3);
        m.spawn(2, 2).unwrap();
        m.step().unwrap();
        for a in &m.agents {
            assert!((a.vel.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_step_keeps_velocity_when_stacked() {
        let mut m = Match::new(SteeringMode::Pursuit, 3);
        m.agents.push(Agent::new(0, 0, Vec2::new(400.0, 400.0), m.mode));
        m.agents.push(Agent::new(1, 1, Vec2::new(400.0, 400.0), m.mode));
        m.step().unwrap();
        assert_eq!(m.agents[0].vel, Vec2::ONE);
        assert_eq!(m.agents[1].vel, Vec2::ONE);
    }

    #[test]
    fn test_single_team_step_reports_no_opponent() {
        let mut m = Match::new(SteeringMode::Pursuit, 3);
        m.spawn(2, 1).unwrap();
        assert_eq!(m.step(), Err(SimError::NoOpponent { agent_id: 0 }));
    }

    #[test]
    fn test_respawn_keeps_ids_unique() {
        let mut m = Match::new(SteeringMode::Pursuit, 42);
        m.spawn(2, 2).unwrap();
        assert!(matches!(m.spawn(2, 2), Err(SimError::InvalidSpawn(_))));
        assert_eq!(m.agents.len(), 4);
        assert_eq!(m.teams.len(), 2);
    }

    #[test]
    fn test_advance_counts_frames() {
        let mut m = Match::new(SteeringMode::Pursuit, 3);
        m.spawn(1, 2).unwrap();
        m.advance();
        m.advance();
        assert_eq!(m.frame, 2);
    }
}
