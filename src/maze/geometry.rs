//! Mesh synthesis: turns a finished grid into renderable triangle batches.
//!
//! Synthesis is a pure function of the grid: cells are visited in row-major
//! order and every emitted quad has a fixed vertex order, so identical grids
//! always produce identical vertex and index sequences. All output is in
//! world space with counter-clockwise winding (for back-face culling),
//! outward-facing normals, and per-quad UVs in `[0, 1]`.
//!
//! Per-cell rules:
//! - **Wall cell**: one vertical quad per exposed face - a face is exposed
//!   when the adjacent cell is walkable or lies outside the grid - plus a
//!   horizontal top cap so gaps never reveal an open-topped wall.
//! - **Path cell**: a floor quad at ground level (normal +Y) and a ceiling
//!   quad at wall height facing down into the corridor (normal -Y).

use std::f32::consts::TAU;

use super::coords::{CELL_SIZE, WALL_HEIGHT};
use super::grid::{CellKind, Grid};
use crate::math::Vec3;
use crate::render::Vertex;

/// A caller-owned vertex/index batch, ready for GPU upload.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex sequence in emission order.
    pub vertices: Vec<Vertex>,
    /// Triangle list indexing into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Drops all geometry, keeping allocations for re-synthesis on reset.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Appends four vertices as two CCW triangles (0-1-2, 0-2-3).
    fn push_quad(&mut self, quad: [Vertex; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&quad);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Tunable portal tessellation. Not derived from grid state; the defaults
/// match the game's exit structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalParams {
    /// Cylinder height in world units.
    pub height: f32,
    /// Cylinder radius. The top cap disc uses 0.3x this radius.
    pub radius: f32,
    /// Radius of the circular ground platform.
    pub platform_radius: f32,
    /// Radial segments of the cylinder. The top cap uses half as many.
    pub segments: u32,
    /// Radial segments of the ground platform.
    pub platform_segments: u32,
}

impl Default for PortalParams {
    fn default() -> Self {
        Self {
            height: 2.5,
            radius: 0.8,
            platform_radius: 1.2,
            segments: 32,
            platform_segments: 24,
        }
    }
}

/// Fills the three level meshes from the grid. Buffers are cleared first so
/// the same objects can be reused across level resets.
pub(crate) fn build_level_meshes(
    grid: &Grid,
    walls: &mut MeshData,
    floor: &mut MeshData,
    ceiling: &mut MeshData,
) {
    walls.clear();
    floor.clear();
    ceiling.clear();

    for z in 0..grid.height() as isize {
        for x in 0..grid.width() as isize {
            let wx = x as f32 * CELL_SIZE;
            let wz = z as f32 * CELL_SIZE;

            // Ground-level corners of the cell.
            let c00 = Vec3::new(wx, 0.0, wz);
            let c10 = Vec3::new(wx + CELL_SIZE, 0.0, wz);
            let c01 = Vec3::new(wx, 0.0, wz + CELL_SIZE);
            let c11 = Vec3::new(wx + CELL_SIZE, 0.0, wz + CELL_SIZE);

            if grid.get(x, z) == CellKind::Wall {
                // A face is exposed when its neighbor opens into walkable
                // space or the grid boundary.
                let exposed = |nx: isize, nz: isize| {
                    !grid.contains(nx, nz) || grid.get(nx, nz) == CellKind::Path
                };

                // North face (-Z), generated left to right.
                if exposed(x, z - 1) {
                    push_wall_face(walls, c10, c00, Vec3::new(0.0, 0.0, -1.0));
                }
                // South face (+Z).
                if exposed(x, z + 1) {
                    push_wall_face(walls, c01, c11, Vec3::new(0.0, 0.0, 1.0));
                }
                // West face (-X).
                if exposed(x - 1, z) {
                    push_wall_face(walls, c00, c01, Vec3::new(-1.0, 0.0, 0.0));
                }
                // East face (+X).
                if exposed(x + 1, z) {
                    push_wall_face(walls, c11, c10, Vec3::new(1.0, 0.0, 0.0));
                }

                push_wall_cap(walls, wx, wz);
            } else {
                push_floor_quad(floor, wx, wz);
                push_ceiling_quad(ceiling, wx, wz);
            }
        }
    }
}

/// Emits one vertical wall face from its two bottom corners.
fn push_wall_face(mesh: &mut MeshData, bottom_left: Vec3, bottom_right: Vec3, normal: Vec3) {
    let up = Vec3::new(0.0, 1.0, 0.0) * WALL_HEIGHT;
    mesh.push_quad([
        Vertex::new(bottom_left, normal, 0.0, 0.0),
        Vertex::new(bottom_right, normal, 1.0, 0.0),
        Vertex::new(bottom_right + up, normal, 1.0, 1.0),
        Vertex::new(bottom_left + up, normal, 0.0, 1.0),
    ]);
}

/// Caps a wall cell at wall height so open-topped walls cannot be seen
/// through from above or across gaps.
fn push_wall_cap(mesh: &mut MeshData, x: f32, z: f32) {
    let normal = Vec3::new(0.0, 1.0, 0.0);
    let y = WALL_HEIGHT;
    mesh.push_quad([
        Vertex::new(Vec3::new(x, y, z), normal, 0.0, 0.0),
        Vertex::new(Vec3::new(x + CELL_SIZE, y, z), normal, 1.0, 0.0),
        Vertex::new(Vec3::new(x + CELL_SIZE, y, z + CELL_SIZE), normal, 1.0, 1.0),
        Vertex::new(Vec3::new(x, y, z + CELL_SIZE), normal, 0.0, 1.0),
    ]);
}

// CCW when viewed from above.
fn push_floor_quad(mesh: &mut MeshData, x: f32, z: f32) {
    let normal = Vec3::new(0.0, 1.0, 0.0);
    mesh.push_quad([
        Vertex::new(Vec3::new(x, 0.0, z), normal, 0.0, 0.0),
        Vertex::new(Vec3::new(x + CELL_SIZE, 0.0, z), normal, 1.0, 0.0),
        Vertex::new(Vec3::new(x + CELL_SIZE, 0.0, z + CELL_SIZE), normal, 1.0, 1.0),
        Vertex::new(Vec3::new(x, 0.0, z + CELL_SIZE), normal, 0.0, 1.0),
    ]);
}

// CCW when viewed from below; the normal faces down into the corridor.
fn push_ceiling_quad(mesh: &mut MeshData, x: f32, z: f32) {
    let normal = Vec3::new(0.0, -1.0, 0.0);
    let y = WALL_HEIGHT;
    mesh.push_quad([
        Vertex::new(Vec3::new(x, y, z), normal, 0.0, 0.0),
        Vertex::new(Vec3::new(x, y, z + CELL_SIZE), normal, 0.0, 1.0),
        Vertex::new(Vec3::new(x + CELL_SIZE, y, z + CELL_SIZE), normal, 1.0, 1.0),
        Vertex::new(Vec3::new(x + CELL_SIZE, y, z), normal, 1.0, 0.0),
    ]);
}

/// Builds the decorative exit portal centered on `center`: an open cylinder
/// with a circular ground platform and a smaller disc capping the top.
pub(crate) fn build_portal_mesh(center: Vec3, params: &PortalParams, mesh: &mut MeshData) {
    mesh.clear();

    let cx = center.x();
    let cz = center.z();
    let segments = params.segments;

    // Cylinder side: paired bottom/top vertices around the ring, UVs
    // wrapping once horizontally.
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let x = theta.cos() * params.radius;
        let z = theta.sin() * params.radius;
        let u = i as f32 / segments as f32;

        let normal = Vec3::new(x, 0.0, z).normalize();
        mesh.vertices
            .push(Vertex::new(Vec3::new(cx + x, 0.0, cz + z), normal, u, 1.0));
        mesh.vertices.push(Vertex::new(
            Vec3::new(cx + x, params.height, cz + z),
            normal,
            u,
            0.0,
        ));
    }

    for i in 0..segments {
        let bottom1 = i * 2;
        let top1 = bottom1 + 1;
        let bottom2 = (i + 1) * 2;
        let top2 = bottom2 + 1;

        mesh.indices
            .extend_from_slice(&[bottom1, top1, bottom2, top1, top2, bottom2]);
    }

    let up = Vec3::new(0.0, 1.0, 0.0);

    // Ground platform: a triangle fan lifted slightly to avoid z-fighting
    // with the floor.
    let lift = 0.01;
    let center_index = mesh.vertices.len() as u32;
    mesh.vertices
        .push(Vertex::new(Vec3::new(cx, lift, cz), up, 0.5, 0.5));

    let platform_start = mesh.vertices.len() as u32;
    for i in 0..=params.platform_segments {
        let theta = i as f32 / params.platform_segments as f32 * TAU;
        let x = theta.cos() * params.platform_radius;
        let z = theta.sin() * params.platform_radius;

        // UVs radiate from the disc center.
        let u = 0.5 + 0.5 * theta.cos();
        let v = 0.5 + 0.5 * theta.sin();
        mesh.vertices
            .push(Vertex::new(Vec3::new(cx + x, lift, cz + z), up, u, v));
    }
    for i in 0..params.platform_segments {
        mesh.indices
            .extend_from_slice(&[center_index, platform_start + i, platform_start + i + 1]);
    }

    // Top cap: a smaller fan at the cylinder's mouth.
    let cap_segments = segments / 2;
    let cap_radius = params.radius * 0.3;
    let cap_center_index = mesh.vertices.len() as u32;
    mesh.vertices
        .push(Vertex::new(Vec3::new(cx, params.height, cz), up, 0.5, 0.5));

    let cap_start = mesh.vertices.len() as u32;
    for i in 0..=cap_segments {
        let theta = i as f32 / cap_segments as f32 * TAU;
        let x = theta.cos() * cap_radius;
        let z = theta.sin() * cap_radius;

        let u = 0.5 + 0.5 * theta.cos();
        let v = 0.5 + 0.5 * theta.sin();
        mesh.vertices.push(Vertex::new(
            Vec3::new(cx + x, params.height, cz + z),
            up,
            u,
            v,
        ));
    }
    for i in 0..cap_segments {
        mesh.indices
            .extend_from_slice(&[cap_center_index, cap_start + i, cap_start + i + 1]);
    }
}
