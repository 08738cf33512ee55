//! Shared model checks used by every builder's test module.

use std::collections::HashSet;

use ukiyo_core::types::{Pulse, VoxelModel};

/// Assert the structural invariants every built model must satisfy:
/// unique coordinates, in-range pulse indices with matching tags, and a
/// center equal to the scaled bounding-box midpoint.
pub fn assert_model_invariants(model: &VoxelModel) {
    assert!(!model.is_empty(), "builder produced an empty model");

    let mut seen = HashSet::with_capacity(model.voxels.len());
    for voxel in &model.voxels {
        assert!(
            seen.insert((voxel.pos.x, voxel.pos.y, voxel.pos.z)),
            "duplicate coordinate {}",
            voxel.pos
        );
    }

    for (pulse, indices) in [
        (Pulse::Red, &model.pulse_groups.red),
        (Pulse::Green, &model.pulse_groups.green),
    ] {
        for &index in indices {
            let voxel = model
                .voxels
                .get(index as usize)
                .unwrap_or_else(|| panic!("pulse index {index} out of range"));
            assert_eq!(
                voxel.pulse,
                Some(pulse),
                "voxel {index} listed under the wrong pulse group"
            );
        }
    }

    let mut min = model.voxels[0].pos;
    let mut max = model.voxels[0].pos;
    for voxel in &model.voxels {
        min = min.min(voxel.pos);
        max = max.max(voxel.pos);
    }
    let expected = (min + max).as_vec3() / 2.0 * model.voxel_size;
    assert!(
        (model.center - expected).length() < 1e-5,
        "center {} does not match recomputed midpoint {expected}",
        model.center
    );
}
