use ukiyo_core::types::{Pulse, Voxel};

/// Magic bytes identifying a ukiyo model file.
pub const MAGIC: [u8; 4] = *b"UKYO";

/// Current model format version.
pub const FORMAT_VERSION: u16 = 1;

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 48;

/// Size of one voxel record in bytes.
pub const RECORD_SIZE: usize = 28;

/// Pulse tag encoding in `VoxelRecord::pulse`.
pub const PULSE_NONE: u32 = 0;
pub const PULSE_RED: u32 = 1;
pub const PULSE_GREEN: u32 = 2;

/// Model file header. Fixed 48 bytes, repr(C) for byte-level serialization.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelHeader {
    pub magic: [u8; 4],
    pub version: u16,
    pub _pad0: u16,
    pub seed: u32,
    pub voxel_count: u32,
    pub voxel_size: f32,
    pub center: [f32; 3],
    pub red_count: u32,
    pub green_count: u32,
    pub _pad1: [u32; 2],
}

/// One voxel as stored on disk. Record order equals model voxel order, so
/// pulse index groups survive a roundtrip unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VoxelRecord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub pulse: u32,
}

impl VoxelRecord {
    pub fn from_voxel(voxel: &Voxel) -> Self {
        Self {
            x: voxel.pos.x,
            y: voxel.pos.y,
            z: voxel.pos.z,
            r: voxel.color.r,
            g: voxel.color.g,
            b: voxel.color.b,
            pulse: match voxel.pulse {
                None => PULSE_NONE,
                Some(Pulse::Red) => PULSE_RED,
                Some(Pulse::Green) => PULSE_GREEN,
            },
        }
    }
}
