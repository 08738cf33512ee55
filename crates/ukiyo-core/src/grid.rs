use std::collections::HashMap;

use glam::{IVec3, Vec3};

use crate::types::{Pulse, PulseGroups, Rgb, Voxel, VoxelModel};

/// Bits per axis in a packed coordinate key. 21 bits signed covers
/// ±1,048,575 — far beyond any scene's extent.
const AXIS_BITS: u32 = 21;
const AXIS_MASK: i64 = (1 << AXIS_BITS) - 1;

/// Pack a lattice coordinate into a single i64 key.
pub fn pack_key(pos: IVec3) -> i64 {
    ((pos.x as i64 & AXIS_MASK) << (2 * AXIS_BITS))
        | ((pos.y as i64 & AXIS_MASK) << AXIS_BITS)
        | (pos.z as i64 & AXIS_MASK)
}

/// Invert `pack_key`, sign-extending each 21-bit field.
pub fn unpack_key(key: i64) -> IVec3 {
    let extend = |v: i64| -> i32 {
        let shifted = v & AXIS_MASK;
        if shifted & (1 << (AXIS_BITS - 1)) != 0 {
            (shifted - (1 << AXIS_BITS)) as i32
        } else {
            shifted as i32
        }
    };
    IVec3::new(
        extend(key >> (2 * AXIS_BITS)),
        extend(key >> AXIS_BITS),
        extend(key),
    )
}

/// Round a fractional pass coordinate onto the lattice.
/// Half values round toward +inf on every axis, so negative coordinates land
/// on the same cells the thresholds were tuned against.
pub fn round_coord(x: f64, y: f64, z: f64) -> IVec3 {
    IVec3::new(
        (x + 0.5).floor() as i32,
        (y + 0.5).floor() as i32,
        (z + 0.5).floor() as i32,
    )
}

/// Sparse voxel accumulator with first-writer-wins semantics.
///
/// The first pass to claim a lattice coordinate owns it; later writes to the
/// same coordinate are silently dropped. This lets cheap fill passes run
/// after detail passes without clobbering them. Pulse-group membership is
/// recorded at insertion, as the index the voxel receives in the final
/// ordered list.
pub struct VoxelGrid {
    index_by_key: HashMap<i64, u32>,
    voxels: Vec<Voxel>,
    red: Vec<u32>,
    green: Vec<u32>,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelGrid {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index_by_key: HashMap::with_capacity(capacity),
            voxels: Vec::with_capacity(capacity),
            red: Vec::new(),
            green: Vec::new(),
        }
    }

    /// Place a voxel. Returns false (and changes nothing) when the
    /// coordinate is already occupied.
    pub fn insert(&mut self, pos: IVec3, color: Rgb, pulse: Option<Pulse>) -> bool {
        let key = pack_key(pos);
        if self.index_by_key.contains_key(&key) {
            return false;
        }
        let index = self.voxels.len() as u32;
        self.index_by_key.insert(key, index);
        self.voxels.push(Voxel { pos, color, pulse });
        match pulse {
            Some(Pulse::Red) => self.red.push(index),
            Some(Pulse::Green) => self.green.push(index),
            None => {}
        }
        true
    }

    /// Round a fractional coordinate onto the lattice, then `insert`.
    pub fn insert_rounded(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        color: Rgb,
        pulse: Option<Pulse>,
    ) -> bool {
        self.insert(round_coord(x, y, z), color, pulse)
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Finish the build: compute the scaled bounding-box midpoint and hand
    /// out the ordered voxel list with its pulse groups.
    pub fn into_model(self, voxel_size: f32) -> VoxelModel {
        let center = if self.voxels.is_empty() {
            Vec3::ZERO
        } else {
            let mut min = self.voxels[0].pos;
            let mut max = self.voxels[0].pos;
            for voxel in &self.voxels {
                min = min.min(voxel.pos);
                max = max.max(voxel.pos);
            }
            (min + max).as_vec3() / 2.0 * voxel_size
        };

        VoxelModel {
            voxels: self.voxels,
            voxel_size,
            center,
            pulse_groups: PulseGroups {
                red: self.red,
                green: self.green,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pulse;

    fn any_color() -> Rgb {
        Rgb::from_hex(0x336699)
    }

    #[test]
    fn test_key_roundtrip() {
        let coords = [
            IVec3::ZERO,
            IVec3::new(1, 2, 3),
            IVec3::new(-1, -2, -3),
            IVec3::new(-7, 0, 7),
            IVec3::new(1_048_575, -1_048_576, 12),
        ];
        for pos in coords {
            assert_eq!(unpack_key(pack_key(pos)), pos, "roundtrip failed for {pos}");
        }
    }

    #[test]
    fn test_keys_distinct_across_axes() {
        // A negative z must not bleed into the y field.
        let a = pack_key(IVec3::new(0, 0, -1));
        let b = pack_key(IVec3::new(0, -1, 0));
        let c = pack_key(IVec3::new(-1, 0, 0));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_round_coord_half_up() {
        assert_eq!(round_coord(0.5, 1.4, -0.5), IVec3::new(1, 1, 0));
        assert_eq!(round_coord(-2.5, -1.6, 2.5), IVec3::new(-2, -2, 3));
    }

    #[test]
    fn test_first_writer_wins() {
        let mut grid = VoxelGrid::new();
        let first = Rgb::from_hex(0xFF0000);
        let second = Rgb::from_hex(0x00FF00);
        assert!(grid.insert(IVec3::new(1, 1, 1), first, None));
        assert!(!grid.insert(IVec3::new(1, 1, 1), second, Some(Pulse::Red)));
        let model = grid.into_model(1.0);
        assert_eq!(model.voxels.len(), 1);
        assert_eq!(model.voxels[0].color, first);
        assert!(model.pulse_groups.is_empty(), "losing write must not tag a pulse");
    }

    #[test]
    fn test_pulse_indices_recorded_in_order() {
        let mut grid = VoxelGrid::new();
        grid.insert(IVec3::new(0, 0, 0), any_color(), None);
        grid.insert(IVec3::new(1, 0, 0), any_color(), Some(Pulse::Red));
        grid.insert(IVec3::new(2, 0, 0), any_color(), Some(Pulse::Green));
        grid.insert(IVec3::new(3, 0, 0), any_color(), Some(Pulse::Red));
        let model = grid.into_model(1.0);
        assert_eq!(model.pulse_groups.red, vec![1, 3]);
        assert_eq!(model.pulse_groups.green, vec![2]);
        for &i in model.pulse_groups.group(Pulse::Red) {
            assert_eq!(model.voxels[i as usize].pulse, Some(Pulse::Red));
        }
    }

    #[test]
    fn test_center_is_scaled_midpoint() {
        let mut grid = VoxelGrid::new();
        grid.insert(IVec3::new(-2, 0, 4), any_color(), None);
        grid.insert(IVec3::new(6, 10, 8), any_color(), None);
        let model = grid.into_model(0.5);
        assert_eq!(model.center, Vec3::new(1.0, 2.5, 3.0));
    }

    #[test]
    fn test_empty_grid_centers_at_origin() {
        let model = VoxelGrid::new().into_model(0.25);
        assert!(model.is_empty());
        assert_eq!(model.center, Vec3::ZERO);
    }
}
