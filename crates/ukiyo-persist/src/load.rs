use glam::{IVec3, Vec3};
use ukiyo_core::types::{Pulse, PulseGroups, Rgb, Voxel, VoxelModel};

use crate::error::PersistError;
use crate::format::*;

/// A model parsed from disk, with the seed it was generated from.
pub struct LoadedModel {
    pub seed: u32,
    pub model: VoxelModel,
}

/// Parse a model file from raw bytes.
pub fn load(bytes: &[u8]) -> Result<LoadedModel, PersistError> {
    if bytes.len() < HEADER_SIZE {
        return Err(PersistError::FileTooSmall(bytes.len(), HEADER_SIZE));
    }

    // pod_read_unaligned: the input buffer carries no alignment guarantee.
    let header: ModelHeader = bytemuck::pod_read_unaligned(&bytes[..HEADER_SIZE]);

    if header.magic != MAGIC {
        return Err(PersistError::InvalidMagic);
    }
    if header.version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(header.version));
    }

    let record_bytes = lz4_flex::decompress_size_prepended(&bytes[HEADER_SIZE..])
        .map_err(|e| PersistError::DecompressError(e.to_string()))?;

    let expected = header.voxel_count as usize * RECORD_SIZE;
    if record_bytes.len() != expected {
        return Err(PersistError::InvalidRecordBlock {
            expected,
            actual: record_bytes.len(),
        });
    }

    let mut voxels = Vec::with_capacity(header.voxel_count as usize);
    let mut pulse_groups = PulseGroups::default();

    for (i, chunk) in record_bytes.chunks_exact(RECORD_SIZE).enumerate() {
        let record: VoxelRecord = bytemuck::pod_read_unaligned(chunk);
        let pulse = match record.pulse {
            PULSE_NONE => None,
            PULSE_RED => {
                pulse_groups.red.push(i as u32);
                Some(Pulse::Red)
            }
            PULSE_GREEN => {
                pulse_groups.green.push(i as u32);
                Some(Pulse::Green)
            }
            other => return Err(PersistError::InvalidPulseTag(other, i)),
        };
        voxels.push(Voxel {
            pos: IVec3::new(record.x, record.y, record.z),
            color: Rgb::new(record.r, record.g, record.b),
            pulse,
        });
    }

    if pulse_groups.red.len() as u32 != header.red_count
        || pulse_groups.green.len() as u32 != header.green_count
    {
        return Err(PersistError::PulseCountMismatch {
            red_header: header.red_count,
            red_actual: pulse_groups.red.len() as u32,
            green_header: header.green_count,
            green_actual: pulse_groups.green.len() as u32,
        });
    }

    Ok(LoadedModel {
        seed: header.seed,
        model: VoxelModel {
            voxels,
            voxel_size: header.voxel_size,
            center: Vec3::from_array(header.center),
            pulse_groups,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::save;

    fn sample_model() -> VoxelModel {
        let mut voxels = Vec::new();
        let mut red = Vec::new();
        let mut green = Vec::new();
        for i in 0..50i32 {
            let pulse = match i % 10 {
                0 => {
                    red.push(voxels.len() as u32);
                    Some(Pulse::Red)
                }
                5 => {
                    green.push(voxels.len() as u32);
                    Some(Pulse::Green)
                }
                _ => None,
            };
            voxels.push(Voxel {
                pos: IVec3::new(i, -i, i * 2),
                color: Rgb::new(i as f32 * 0.02, 1.0 - i as f32 * 0.01, 0.5),
                pulse,
            });
        }
        VoxelModel {
            voxels,
            voxel_size: 0.12,
            center: Vec3::new(2.94, -2.94, 5.88),
            pulse_groups: PulseGroups { red, green },
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let model = sample_model();
        let bytes = save(&model, 20251221);
        let loaded = load(&bytes).expect("roundtrip load should succeed");
        assert_eq!(loaded.seed, 20251221);
        assert_eq!(loaded.model, model);
    }

    #[test]
    fn test_load_rejects_bad_magic() {
        let mut bytes = save(&sample_model(), 1);
        bytes[0] = b'X';
        assert!(matches!(load(&bytes), Err(PersistError::InvalidMagic)));
    }

    #[test]
    fn test_load_rejects_future_version() {
        let mut bytes = save(&sample_model(), 1);
        bytes[4] = 0xFF;
        assert!(matches!(
            load(&bytes),
            Err(PersistError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_load_rejects_truncated_file() {
        let bytes = save(&sample_model(), 1);
        assert!(matches!(
            load(&bytes[..HEADER_SIZE - 8]),
            Err(PersistError::FileTooSmall(_, _))
        ));
        // Cutting into the record block corrupts the LZ4 stream.
        assert!(load(&bytes[..bytes.len() - 4]).is_err());
    }

    #[test]
    fn test_load_rejects_bad_pulse_tag() {
        let model = VoxelModel {
            voxels: vec![Voxel {
                pos: IVec3::ZERO,
                color: Rgb::new(0.0, 0.0, 0.0),
                pulse: None,
            }],
            voxel_size: 1.0,
            center: Vec3::ZERO,
            pulse_groups: PulseGroups::default(),
        };
        let mut records = vec![VoxelRecord::from_voxel(&model.voxels[0])];
        records[0].pulse = 9;
        let compressed = lz4_flex::compress_prepend_size(bytemuck::cast_slice(&records));

        let mut bytes = save(&model, 1);
        bytes.truncate(HEADER_SIZE);
        bytes.extend_from_slice(&compressed);
        assert!(matches!(
            load(&bytes),
            Err(PersistError::InvalidPulseTag(9, 0))
        ));
    }

    #[test]
    fn test_load_rejects_pulse_count_mismatch() {
        let model = sample_model();
        let mut bytes = save(&model, 1);
        // Header red_count lives at offset 32.
        bytes[32] = bytes[32].wrapping_add(1);
        assert!(matches!(
            load(&bytes),
            Err(PersistError::PulseCountMismatch { .. })
        ));
    }
}
