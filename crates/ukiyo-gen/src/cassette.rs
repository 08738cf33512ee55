//! Cassette tape scene builder.
//!
//! Mostly closed-form lattice membership tests over a 64×40×8 box: shell
//! borders and faces, recessed label areas with a dual-sine waveform print,
//! reel hole cutouts with a gear lattice, and internal structure rails. The
//! PRNG pass (label wear) runs first so its cells survive the fill passes.

use glam::IVec3;
use ukiyo_core::constants::CASSETTE_VOXEL_SIZE;
use ukiyo_core::grid::VoxelGrid;
use ukiyo_core::types::{Rgb, VoxelModel};

use crate::palette::CassettePalette;
use crate::rng::SeededRng;

const TAPE_WIDTH: i32 = 64;
const TAPE_HEIGHT: i32 = 40;
const TAPE_DEPTH: i32 = 8;
const HOLE_RADIUS: f64 = 6.0;
const GEAR_RADIUS: f64 = 4.0;
const WEAR_SPECKLES: u32 = 64;

/// Build the cassette model. No pulse groups; the neon waveform is lit by
/// color alone.
pub fn build_cassette(seed: u32) -> VoxelModel {
    let mut builder = CassetteBuilder {
        rng: SeededRng::new(seed),
        grid: VoxelGrid::with_capacity(8192),
        palette: CassettePalette::new(),
    };

    builder.label_wear();
    builder.body();

    let model = builder.grid.into_model(CASSETTE_VOXEL_SIZE);
    log::debug!("cassette seed {seed}: {} voxels", model.len());
    model
}

struct CassetteBuilder {
    rng: SeededRng,
    grid: VoxelGrid,
    palette: CassettePalette,
}

impl CassetteBuilder {
    /// Worn speckles on the label faces. Runs before the body fill so the
    /// speckled cells keep their color under first-writer-wins.
    fn label_wear(&mut self) {
        for _ in 0..WEAR_SPECKLES {
            let x = 6 + (self.rng.next() * 53.0).floor() as i32;
            let y = 9 + (self.rng.next() * 23.0).floor() as i32;
            let z = if self.rng.next() > 0.5 {
                TAPE_DEPTH - 1
            } else {
                0
            };
            let color = if self.rng.next() > 0.5 {
                self.palette.label_worn
            } else {
                self.palette.dark
            };
            self.grid.insert(IVec3::new(x, y, z), color, None);
        }
    }

    fn body(&mut self) {
        let left_reel_x = TAPE_WIDTH as f64 * 0.3;
        let right_reel_x = TAPE_WIDTH as f64 * 0.7;
        let center_y = TAPE_HEIGHT as f64 / 2.0;

        for x in 0..TAPE_WIDTH {
            for y in 0..TAPE_HEIGHT {
                for z in 0..TAPE_DEPTH {
                    let dist_left = (x as f64 - left_reel_x).hypot(y as f64 - center_y);
                    let dist_right = (x as f64 - right_reel_x).hypot(y as f64 - center_y);

                    // Reel hole cutouts with a sparse gear lattice inside.
                    if dist_left < HOLE_RADIUS || dist_right < HOLE_RADIUS {
                        if (dist_left > GEAR_RADIUS || dist_right > GEAR_RADIUS)
                            && z > 1
                            && z < TAPE_DEPTH - 2
                            && (x % 2 == 0 || y % 2 == 0)
                        {
                            self.grid
                                .insert(IVec3::new(x, y, z), self.palette.dark, None);
                        }
                        continue;
                    }

                    let is_label_area = x > 5
                        && x < TAPE_WIDTH - 5
                        && y > 8
                        && y < TAPE_HEIGHT - 8
                        && (z == 0 || z == TAPE_DEPTH - 1);

                    if is_label_area {
                        if let Some(color) = self.waveform_color(x, y) {
                            self.grid.insert(IVec3::new(x, y, z), color, None);
                        } else {
                            self.grid
                                .insert(IVec3::new(x, y, z), self.palette.label, None);
                        }
                        continue;
                    }

                    let is_border =
                        x == 0 || x == TAPE_WIDTH - 1 || y == 0 || y == TAPE_HEIGHT - 1;
                    let is_face = z == 0 || z == TAPE_DEPTH - 1;
                    let is_structure = (y < 4 && z > 1 && z < TAPE_DEPTH - 2)
                        || ((x == 2 || x == TAPE_WIDTH - 3) && (y == 2 || y == TAPE_HEIGHT - 3));

                    if is_border || is_face {
                        self.grid
                            .insert(IVec3::new(x, y, z), self.palette.plastic, None);
                    } else if is_structure {
                        self.grid
                            .insert(IVec3::new(x, y, z), self.palette.dark, None);
                    }
                }
            }
        }
    }

    /// Two superposed sine waves, amplitude-modulated by a fast third, give
    /// the label print its audio-waveform look. Columns alternate cyan/pink.
    fn waveform_color(&self, x: i32, y: i32) -> Option<Rgb> {
        let wx = (x - TAPE_WIDTH / 2) as f64 * 0.2;
        let wave1 = (wx * 2.5).sin() * 4.0;
        let wave2 = (wx * 3.0).cos() * 3.0;
        let combined = (wave1 + wave2) * (x as f64 * 132.1).sin();
        let dist_y = (y as f64 - TAPE_HEIGHT as f64 / 2.0).abs();

        if dist_y < combined.abs() {
            Some(if x % 2 == 0 {
                self.palette.cyan
            } else {
                self.palette.pink
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_model_invariants;
    use ukiyo_core::constants::DEFAULT_SEED;

    #[test]
    fn test_cassette_deterministic() {
        let a = build_cassette(DEFAULT_SEED);
        let b = build_cassette(DEFAULT_SEED);
        assert_eq!(a, b, "same seed must rebuild the identical model");
    }

    #[test]
    fn test_cassette_invariants() {
        assert_model_invariants(&build_cassette(DEFAULT_SEED));
        assert_model_invariants(&build_cassette(99));
    }

    #[test]
    fn test_cassette_has_no_pulse_groups() {
        let model = build_cassette(DEFAULT_SEED);
        assert!(model.pulse_groups.is_empty());
    }

    #[test]
    fn test_cassette_spans_full_shell() {
        let model = build_cassette(DEFAULT_SEED);
        let max_x = model.voxels.iter().map(|v| v.pos.x).max().unwrap();
        let max_y = model.voxels.iter().map(|v| v.pos.y).max().unwrap();
        let max_z = model.voxels.iter().map(|v| v.pos.z).max().unwrap();
        assert_eq!(max_x, TAPE_WIDTH - 1);
        assert_eq!(max_y, TAPE_HEIGHT - 1);
        assert_eq!(max_z, TAPE_DEPTH - 1);
    }

    #[test]
    fn test_cassette_contains_waveform_colors() {
        let model = build_cassette(DEFAULT_SEED);
        let palette = CassettePalette::new();
        let has_cyan = model.voxels.iter().any(|v| v.color == palette.cyan);
        let has_pink = model.voxels.iter().any(|v| v.color == palette.pink);
        assert!(has_cyan && has_pink, "label waveform should print both colors");
    }

    #[test]
    fn test_cassette_voxel_size() {
        assert_eq!(build_cassette(DEFAULT_SEED).voxel_size, CASSETTE_VOXEL_SIZE);
    }
}
