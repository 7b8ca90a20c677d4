//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for match elements
pub mod colors {
    use crate::error::SimError;

    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: [f32; 4] = rgb(128, 128, 128);
    pub const FIELD: [f32; 4] = rgb(28, 92, 51);
    pub const FIELD_LINE: [f32; 4] = rgb(255, 255, 255);
    pub const HEADING_MARKER: [f32; 4] = rgb(0, 0, 0);

    pub const RED: [f32; 4] = rgb(180, 20, 20);
    pub const BLUE: [f32; 4] = rgb(11, 150, 230);
    pub const YELLOW: [f32; 4] = rgb(185, 200, 20);
    pub const ORANGE: [f32; 4] = rgb(200, 140, 20);
    pub const PINK: [f32; 4] = rgb(180, 30, 200);

    /// Team colors, indexed by team id
    pub const TEAM_PALETTE: [[f32; 4]; 5] = [RED, BLUE, YELLOW, ORANGE, PINK];

    /// Color for a team, or an error past the end of the palette
    pub fn team_color(team_id: u32) -> Result<[f32; 4], SimError> {
        TEAM_PALETTE
            .get(team_id as usize)
            .copied()
            .ok_or(SimError::TeamOutOfPalette {
                team_id,
                palette_len: TEAM_PALETTE.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::colors::*;
    use crate::error::SimError;

    #[test]
    fn test_team_color_lookup() {
        assert_eq!(team_color(0), Ok(RED));
        assert_eq!(team_color(4), Ok(PINK));
        assert_eq!(
            team_color(5),
            Err(SimError::TeamOutOfPalette {
                team_id: 5,
                palette_len: 5
            })
        );
    }
}
