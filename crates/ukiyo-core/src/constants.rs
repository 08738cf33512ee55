//! Single source of truth for shared scene constants.
//! Voxel edge lengths are what `center` is scaled by; an external renderer
//! must use the same value when placing instances.

/// Voxel edge length for the ramen bowl scene.
pub const RAMEN_VOXEL_SIZE: f32 = 0.16;

/// Voxel edge length for the bonsai scene.
pub const BONSAI_VOXEL_SIZE: f32 = 0.12;

/// Voxel edge length for the cassette scene.
pub const CASSETTE_VOXEL_SIZE: f32 = 0.15;

/// Default generation seed shared by all stock scenes.
pub const DEFAULT_SEED: u32 = 20251221;
