use std::path::Path;

use ukiyo_core::types::VoxelModel;

/// Summary of one generated model, for manifests and the terminal table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ModelStats {
    pub scene: String,
    pub seed: u32,
    pub voxels: u32,
    pub red_pulse: u32,
    pub green_pulse: u32,
    pub min: [i32; 3],
    pub max: [i32; 3],
    pub center: [f32; 3],
}

impl ModelStats {
    pub fn from_model(scene: &str, seed: u32, model: &VoxelModel) -> Self {
        let mut min = [i32::MAX; 3];
        let mut max = [i32::MIN; 3];
        for voxel in &model.voxels {
            let p = [voxel.pos.x, voxel.pos.y, voxel.pos.z];
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        if model.voxels.is_empty() {
            min = [0; 3];
            max = [0; 3];
        }

        Self {
            scene: scene.to_string(),
            seed,
            voxels: model.voxels.len() as u32,
            red_pulse: model.pulse_groups.red.len() as u32,
            green_pulse: model.pulse_groups.green.len() as u32,
            min,
            max,
            center: model.center.to_array(),
        }
    }
}

/// Save a stats manifest to a JSON file.
pub fn save_manifest(path: &Path, stats: &[ModelStats]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(stats).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Load a stats manifest from a JSON file. Returns None if the file doesn't
/// exist or fails to parse.
pub fn load_manifest(path: &Path) -> Option<Vec<ModelStats>> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Format stats as a markdown summary table.
pub fn format_markdown(stats: &[ModelStats]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Seed | Voxels | Red pulse | Green pulse | Extent |\n");
    out.push_str("|-------|------|--------|-----------|-------------|--------|\n");

    for s in stats {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {}×{}×{} |\n",
            s.scene,
            s.seed,
            s.voxels,
            s.red_pulse,
            s.green_pulse,
            s.max[0] - s.min[0] + 1,
            s.max[1] - s.min[1] + 1,
            s.max[2] - s.min[2] + 1,
        ));
    }

    out
}
