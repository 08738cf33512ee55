//! Neon bonsai scene builder.
//!
//! Pass order is load-bearing: the pot claims its cells before the trunk,
//! the trunk and its branches before the floor reflection. Within a pass the
//! PRNG draw order is fixed — see `rng`.

use glam::IVec3;
use ukiyo_core::constants::BONSAI_VOXEL_SIZE;
use ukiyo_core::grid::VoxelGrid;
use ukiyo_core::types::{Pulse, Rgb, VoxelModel};

use crate::palette::BonsaiPalette;
use crate::rng::SeededRng;

const POT_WIDTH: i32 = 14;
const POT_HEIGHT: i32 = 6;
const POT_Y_OFFSET: i32 = -5;
const TRUNK_STEPS: i32 = 22;
const LEAF_CLUSTER_RADIUS: f64 = 5.0;
const REFLECTION_STREAKS: u32 = 60;
const REFLECTION_Y: f64 = -8.0;

/// Build the bonsai model. The red and green pot rim bands and one branch's
/// accent leaves are pulse-tagged for renderer-side emissive animation.
pub fn build_bonsai(seed: u32) -> VoxelModel {
    let mut builder = BonsaiBuilder {
        rng: SeededRng::new(seed),
        grid: VoxelGrid::with_capacity(4096),
        palette: BonsaiPalette::new(),
    };

    builder.pot();
    builder.trunk();
    builder.reflection();

    let model = builder.grid.into_model(BONSAI_VOXEL_SIZE);
    log::debug!(
        "bonsai seed {seed}: {} voxels, {} red / {} green pulse",
        model.len(),
        model.pulse_groups.red.len(),
        model.pulse_groups.green.len()
    );
    model
}

struct BonsaiBuilder {
    rng: SeededRng,
    grid: VoxelGrid,
    palette: BonsaiPalette,
}

impl BonsaiBuilder {
    /// Square pot with chamfered corners. Three rim bands: pulse-green at the
    /// base, pulse-red at mid height, static gold at the top.
    fn pot(&mut self) {
        let half = POT_WIDTH / 2;
        for y in 0..POT_HEIGHT {
            for x in -half..=half {
                for z in -half..=half {
                    let dist = x.abs().max(z.abs());
                    let corner_dist = x.abs() + z.abs();
                    if dist > 7 || corner_dist > 9 {
                        continue;
                    }

                    let on_edge = dist == 7 || corner_dist >= 9 || x.abs() == 7 || z.abs() == 7;
                    let mut color = self.palette.pot_dark;
                    let mut pulse = None;

                    if y == 0 {
                        if on_edge {
                            color = self.palette.pot_green;
                            pulse = Some(Pulse::Green);
                        }
                    } else if y == POT_HEIGHT / 2 {
                        if on_edge {
                            color = self.palette.pot_neon;
                            pulse = Some(Pulse::Red);
                        }
                    } else if y == POT_HEIGHT - 1 && on_edge {
                        color = self.palette.pot_rim;
                    }

                    self.grid
                        .insert(IVec3::new(x, y + POT_Y_OFFSET, z), color, pulse);
                }
            }
        }
    }

    /// S-curved trunk, thinning with height. Branches leave the trunk at
    /// fixed heights; the y=15 branch carries the pulse-green accent leaves.
    fn trunk(&mut self) {
        for y in 0..TRUNK_STEPS {
            let x = (y as f64 * 0.2).sin() * 4.0;
            let z = (y as f64 * 0.15).cos() * 2.0;

            let thickness = (2.5 - y as f64 * 0.08).max(0.8);
            let r = thickness.ceil() as i32;

            for tx in -r..=r {
                for tz in -r..=r {
                    if (tx * tx + tz * tz) as f64 > thickness * thickness + 0.5 {
                        continue;
                    }

                    let noise = self.rng.next();
                    let color = if noise > 0.7 {
                        self.palette.wood_light
                    } else if noise > 0.4 {
                        self.palette.wood_mid
                    } else {
                        self.palette.wood_dark
                    };
                    self.grid
                        .insert_rounded(x + tx as f64, y as f64, z + tz as f64, color, None);
                }
            }

            let leaf_purple = self.palette.leaf_purple;
            let leaf_pink = self.palette.leaf_pink;
            let leaf_lime = self.palette.leaf_lime;
            let leaf_neon_green = self.palette.leaf_neon_green;
            match y {
                6 => self.branch(x, y as f64, z, -1.0, 0.5, 7, leaf_purple, None),
                9 => self.branch(x, y as f64, z, 1.0, -0.5, 6, leaf_pink, None),
                12 => self.branch(x, y as f64, z, -0.5, 1.0, 5, leaf_lime, None),
                15 => self.branch(x, y as f64, z, 0.8, 0.2, 5, leaf_neon_green, Some(Pulse::Green)),
                21 => self.branch(x, y as f64, z, 0.0, 0.0, 4, leaf_pink, None),
                _ => {}
            }
        }
    }

    /// Jittered walk away from the trunk; the last three steps sprout a leaf
    /// cluster each.
    #[allow(clippy::too_many_arguments)]
    fn branch(
        &mut self,
        start_x: f64,
        start_y: f64,
        start_z: f64,
        dir_x: f64,
        dir_z: f64,
        length: i32,
        leaf_color: Rgb,
        pulse: Option<Pulse>,
    ) {
        let mut bx = start_x;
        let mut by = start_y;
        let mut bz = start_z;

        for i in 0..length {
            bx += dir_x + (self.rng.next() - 0.5);
            by += 0.8 + self.rng.next() * 0.4;
            bz += dir_z + (self.rng.next() - 0.5);

            let wood_mid = self.palette.wood_mid;
            let wood_dark = self.palette.wood_dark;
            self.grid.insert_rounded(bx, by, bz, wood_mid, None);
            self.grid.insert_rounded(bx + 1.0, by, bz, wood_dark, None);

            if i > length - 3 {
                self.leaf_cluster(bx, by, bz, LEAF_CLUSTER_RADIUS, leaf_color, pulse);
            }
        }
    }

    /// Flattened ellipsoid of foliage. Each candidate cell draws once for
    /// dropout and once for color; the primary color carries the pulse tag.
    fn leaf_cluster(
        &mut self,
        cx: f64,
        cy: f64,
        cz: f64,
        radius: f64,
        primary: Rgb,
        pulse: Option<Pulse>,
    ) {
        let mut x = -radius;
        while x <= radius {
            let mut y = -radius / 2.0;
            while y <= radius / 2.0 {
                let mut z = -radius;
                while z <= radius {
                    let nx = (x * x) / (radius * radius);
                    let ny = (y * y) / ((radius / 2.0) * (radius / 2.0));
                    let nz = (z * z) / (radius * radius);
                    if nx + ny + nz > 1.0 {
                        z += 1.0;
                        continue;
                    }

                    if self.rng.next() <= 0.3 {
                        z += 1.0;
                        continue;
                    }

                    let r = self.rng.next();
                    let mut color = self.palette.leaf_pink;
                    let mut tag = None;

                    if r > 0.85 {
                        color = primary;
                        tag = pulse;
                    } else if r > 0.6 {
                        color = self.palette.leaf_highlight;
                    }

                    self.grid.insert_rounded(cx + x, cy + y, cz + z, color, tag);
                    z += 1.0;
                }
                y += 1.0;
            }
            x += 1.0;
        }
    }

    /// Scattered horizontal streaks under the pot, as if on wet pavement.
    fn reflection(&mut self) {
        for _ in 0..REFLECTION_STREAKS {
            let x = (self.rng.next() - 0.5) * 20.0;
            let z = (self.rng.next() - 0.5) * 20.0;
            if x * x + z * z >= 100.0 {
                continue;
            }

            let length = (self.rng.next() * 4.0).floor() as i32 + 2;
            let color = if self.rng.next() > 0.7 {
                self.palette.reflection_b
            } else {
                self.palette.reflection_a
            };
            for l in 0..length {
                self.grid
                    .insert_rounded(x + l as f64, REFLECTION_Y, z, color, None);
            }
        }
    }
}
