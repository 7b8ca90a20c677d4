//! Scene building: turns a match into colored triangles in screen space
//!
//! Draw order is back to front: field fill, field border, agent bodies, then
//! heading markers.

use glam::Vec2;

use super::shapes::{circle, rect, rect_outline};
use super::vertex::{Vertex, colors};
use crate::consts::{FIELD_BORDER, HEADING_MARKER_RADIUS};
use crate::error::SimError;
use crate::sim::{Agent, Field, Match};

const AGENT_SEGMENTS: u32 = 24;
const MARKER_SEGMENTS: u32 = 8;

/// Field fill and border
pub fn field_vertices(field: &Field) -> Vec<Vertex> {
    let mut vertices = rect(field.top_left, field.size, colors::FIELD);
    vertices.extend(rect_outline(
        field.top_left,
        field.size,
        FIELD_BORDER,
        colors::FIELD_LINE,
    ));
    vertices
}

/// Where the heading dot goes: on the rim, along the unit velocity, snapped
/// to whole pixels. `None` while the agent has no direction.
pub fn heading_marker(agent: &Agent) -> Option<Vec2> {
    agent
        .heading()
        .map(|dir| (agent.pos + dir * agent.radius).trunc())
}

/// Build the full frame for a match
pub fn build_scene(m: &Match, show_heading: bool) -> Result<Vec<Vertex>, SimError> {
    if m.agents.is_empty() {
        return Err(SimError::EmptyRoster);
    }

    let mut vertices = field_vertices(&m.field);

    for agent in &m.agents {
        let color = colors::team_color(agent.team_id)?;
        vertices.extend(circle(agent.pos, agent.radius, color, AGENT_SEGMENTS));
    }

    if show_heading {
        for marker in m.agents.iter().filter_map(heading_marker) {
            vertices.extend(circle(
                marker,
                HEADING_MARKER_RADIUS,
                colors::HEADING_MARKER,
                MARKER_SEGMENTS,
            ));
        }
    }

    Ok(vertices)
}
