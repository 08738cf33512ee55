use glam::{IVec3, Vec3};

/// Linear RGB color, one f32 per channel. Channels above 1.0 are legal and
/// denote HDR emissive colors for bloom-capable renderers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a 0xRRGGBB hex literal.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Multiply all channels by `k` (emissive boost).
    pub fn scaled(self, k: f32) -> Self {
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
        }
    }
}

/// Pulse tag for voxels animated as a group by the renderer.
/// Only the bonsai builder emits these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pulse {
    Red,
    Green,
}

/// A unit cube on the integer lattice with an assigned color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voxel {
    pub pos: IVec3,
    pub color: Rgb,
    pub pulse: Option<Pulse>,
}

/// Ordered voxel indices per pulse tag. Indices refer to positions within
/// `VoxelModel::voxels` and are recorded in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PulseGroups {
    pub red: Vec<u32>,
    pub green: Vec<u32>,
}

impl PulseGroups {
    /// Index list for one pulse tag.
    pub fn group(&self, pulse: Pulse) -> &[u32] {
        match pulse {
            Pulse::Red => &self.red,
            Pulse::Green => &self.green,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_empty() && self.green.is_empty()
    }
}

/// Output of a scene builder: insertion-ordered voxels, the voxel edge
/// length, the scaled bounding-box midpoint, and the pulse index groups.
///
/// A renderer uploads `voxels` as one instance per entry, translates the
/// whole group by `-center` to recenter it at the origin, and drives pulse
/// colors per frame onto exactly the indices listed in `pulse_groups`.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelModel {
    pub voxels: Vec<Voxel>,
    pub voxel_size: f32,
    pub center: Vec3,
    pub pulse_groups: PulseGroups,
}

impl VoxelModel {
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_channels() {
        let c = Rgb::from_hex(0xFF8000);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_extremes() {
        assert_eq!(Rgb::from_hex(0x000000), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(Rgb::from_hex(0xFFFFFF), Rgb::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_scaled_exceeds_unit_range() {
        let c = Rgb::from_hex(0xAA00FF).scaled(3.0);
        assert!(c.r > 1.0, "emissive boost should exceed 1.0, got {}", c.r);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn test_pulse_group_lookup() {
        let groups = PulseGroups {
            red: vec![3, 9],
            green: vec![1],
        };
        assert_eq!(groups.group(Pulse::Red), &[3, 9]);
        assert_eq!(groups.group(Pulse::Green), &[1]);
        assert!(!groups.is_empty());
        assert!(PulseGroups::default().is_empty());
    }
}
