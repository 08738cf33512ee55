use ukiyo_core::types::VoxelModel;

use crate::format::*;

/// Serialize a model into the ukiyo binary format.
///
/// Layout: header (48B) + LZ4-compressed record block (28B × N, size
/// prepended by the compressor).
pub fn save(model: &VoxelModel, seed: u32) -> Vec<u8> {
    let records: Vec<VoxelRecord> = model.voxels.iter().map(VoxelRecord::from_voxel).collect();
    let compressed = lz4_flex::compress_prepend_size(bytemuck::cast_slice(&records));

    let header = ModelHeader {
        magic: MAGIC,
        version: FORMAT_VERSION,
        _pad0: 0,
        seed,
        voxel_count: model.voxels.len() as u32,
        voxel_size: model.voxel_size,
        center: model.center.to_array(),
        red_count: model.pulse_groups.red.len() as u32,
        green_count: model.pulse_groups.green.len() as u32,
        _pad1: [0; 2],
    };

    let mut output = Vec::with_capacity(HEADER_SIZE + compressed.len());
    output.extend_from_slice(bytemuck::bytes_of(&header));
    output.extend_from_slice(&compressed);

    log::debug!(
        "saved model: {} voxels, {} bytes ({} compressed)",
        model.voxels.len(),
        output.len(),
        compressed.len()
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec3, Vec3};
    use ukiyo_core::types::{Pulse, PulseGroups, Rgb, Voxel};

    fn tiny_model() -> VoxelModel {
        VoxelModel {
            voxels: vec![
                Voxel {
                    pos: IVec3::new(0, 0, 0),
                    color: Rgb::new(1.0, 0.0, 0.0),
                    pulse: Some(Pulse::Red),
                },
                Voxel {
                    pos: IVec3::new(2, 4, 6),
                    color: Rgb::new(0.0, 1.0, 0.0),
                    pulse: None,
                },
            ],
            voxel_size: 0.5,
            center: Vec3::new(0.5, 1.0, 1.5),
            pulse_groups: PulseGroups {
                red: vec![0],
                green: vec![],
            },
        }
    }

    #[test]
    fn test_save_writes_header() {
        let data = save(&tiny_model(), 77);

        assert_eq!(&data[0..4], b"UKYO");
        let version = u16::from_le_bytes([data[4], data[5]]);
        assert_eq!(version, FORMAT_VERSION);
        let seed = u32::from_le_bytes(data[8..12].try_into().expect("slice"));
        assert_eq!(seed, 77);
        let count = u32::from_le_bytes(data[12..16].try_into().expect("slice"));
        assert_eq!(count, 2);
    }

    #[test]
    fn test_save_is_deterministic() {
        let model = tiny_model();
        assert_eq!(save(&model, 1), save(&model, 1));
    }
}
