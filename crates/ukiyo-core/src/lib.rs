pub mod activity;
pub mod constants;
pub mod grid;
pub mod types;

pub use grid::VoxelGrid;
pub use types::{Pulse, PulseGroups, Rgb, Voxel, VoxelModel};
