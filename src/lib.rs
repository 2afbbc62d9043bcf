//! Warren - procedural maze core for a first-person maze crawler.
//!
//! This crate owns everything between "give me a maze" and "here are the
//! triangles": procedural generation, the grid data model, collision queries
//! for FPS-style movement, mesh synthesis for walls/floor/ceiling plus the
//! exit portal, and collectible placement. Windowing, shaders, textures,
//! audio, and input live in the surrounding application and call into this
//! crate through [`Maze`].
//!
//! # Features
//! - **Procedural Generation**: Randomized depth-first carving with a
//!   guaranteed path from spawn to exit, seedable for reproducible levels
//! - **Collision**: Allocation-free circle-vs-grid queries plus a wall-sliding
//!   movement resolver
//! - **Geometry**: World-space vertex/index batches ready for GPU upload
//! - **Placement**: Well-spaced collectible and spawn siting on open cells
//!
//! # Architecture
//! - `maze/`: Grid model, generator, collision, geometry, and placement
//! - `math/`: Vector math shared with the rendering layer
//! - `render/`: Vertex layout consumed by the GPU pipeline
//!
//! # Usage
//! ```
//! use warren::Maze;
//!
//! let maze = Maze::from_seed(15, 15, 42);
//! let (mut walls, mut floor, mut ceiling) = Default::default();
//! maze.generate_meshes(&mut walls, &mut floor, &mut ceiling);
//! assert!(!maze.check_collision(maze.start_position(), 0.35));
//! ```

pub mod math;
pub mod maze;
pub mod render;

pub use math::Vec3;
pub use maze::{CELL_SIZE, Cell, CellKind, Grid, Maze, MeshData, PortalParams, WALL_HEIGHT};
pub use render::Vertex;
