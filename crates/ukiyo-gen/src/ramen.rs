//! Ramen bowl scene builder (the hero asset).
//!
//! Detail passes run before fill passes so first-writer-wins keeps them: the
//! rim and the floating toppings claim their cells, then the broth disk and
//! the bowl shell fill in around them.

use glam::IVec3;
use std::f64::consts::TAU;
use ukiyo_core::constants::RAMEN_VOXEL_SIZE;
use ukiyo_core::grid::VoxelGrid;
use ukiyo_core::types::VoxelModel;

use crate::palette::RamenPalette;
use crate::rng::SeededRng;

/// Bowl radius at the rim, in voxels.
const BOWL_RADIUS: f64 = 12.0;
/// Lattice height of the rim ring.
const RIM_Y: i32 = 8;
/// Lattice height of the broth surface.
const BROTH_Y: i32 = 7;
const BROTH_RADIUS: f64 = 11.0;
const NOODLE_STRANDS: u32 = 7;
const NOODLE_STEPS: u32 = 16;
const SCALLION_SCATTER: u32 = 24;

pub fn build_ramen_bowl(seed: u32) -> VoxelModel {
    let mut builder = RamenBuilder {
        rng: SeededRng::new(seed),
        grid: VoxelGrid::with_capacity(4096),
        palette: RamenPalette::new(),
    };

    builder.rim();
    builder.noodles();
    builder.egg();
    builder.chashu();
    builder.narutomaki();
    builder.nori();
    builder.scallions();
    builder.broth();
    builder.shell();
    builder.foot();
    builder.chopsticks();

    let model = builder.grid.into_model(RAMEN_VOXEL_SIZE);
    log::debug!("ramen seed {seed}: {} voxels", model.len());
    model
}

struct RamenBuilder {
    rng: SeededRng,
    grid: VoxelGrid,
    palette: RamenPalette,
}

impl RamenBuilder {
    /// Rim ring at the bowl lip. Runs first so the broth and shell fills
    /// cannot claim lip cells.
    fn rim(&mut self) {
        let limit = BOWL_RADIUS.ceil() as i32 + 1;
        for x in -limit..=limit {
            for z in -limit..=limit {
                let dist = ((x * x + z * z) as f64).sqrt();
                if !(BROTH_RADIUS..=BOWL_RADIUS + 0.4).contains(&dist) {
                    continue;
                }
                let color = if dist >= BOWL_RADIUS - 0.2 {
                    self.palette.bowl_red
                } else {
                    self.palette.bowl_white
                };
                self.grid.insert(IVec3::new(x, RIM_Y, z), color, None);
            }
        }
    }

    /// Parametric strand walks spiraling outward across the broth surface.
    /// Each step draws jitter for angle and radius; a strand ends early when
    /// it reaches the bowl wall.
    fn noodles(&mut self) {
        for _ in 0..NOODLE_STRANDS {
            let mut theta = self.rng.next() * TAU;
            let mut rad = 1.5 + self.rng.next() * 1.5;

            for step in 0..NOODLE_STEPS {
                theta += 0.32 + (self.rng.next() - 0.5) * 0.18;
                rad += 0.45 + (self.rng.next() - 0.5) * 0.3;
                if rad > BROTH_RADIUS - 0.8 {
                    break;
                }

                let y = BROTH_Y as f64 + (step as f64 * 0.9).sin() * 0.35;
                let noodle = self.palette.noodle;
                self.grid
                    .insert_rounded(theta.cos() * rad, y, theta.sin() * rad, noodle, None);
            }
        }
    }

    /// Soft-boiled egg half: white ellipsoid with a yolk core.
    fn egg(&mut self) {
        let (cx, cy, cz) = (-4.0, 7.5, 2.0);
        let (rx, ry, rz) = (2.3, 1.5, 1.9);

        for x in -7..=-1 {
            for y in BROTH_Y..=BROTH_Y + 2 {
                for z in -1..=5 {
                    let nx = (x as f64 - cx) / rx;
                    let ny = (y as f64 - cy) / ry;
                    let nz = (z as f64 - cz) / rz;
                    let d = nx * nx + ny * ny + nz * nz;
                    if d > 1.0 {
                        continue;
                    }
                    let color = if d < 0.28 {
                        self.palette.egg_yolk
                    } else {
                        self.palette.egg_white
                    };
                    self.grid.insert(IVec3::new(x, y, z), color, None);
                }
            }
        }
    }

    /// Braised pork slab with a darker edge ring and drawn marbling inside.
    fn chashu(&mut self) {
        for x in 2..=7 {
            for z in -6..=-2 {
                let on_edge = x == 2 || x == 7 || z == -6 || z == -2;
                let color = if on_edge {
                    self.palette.chashu_edge
                } else if self.rng.next() > 0.78 {
                    self.palette.chashu_edge
                } else {
                    self.palette.chashu
                };
                self.grid.insert(IVec3::new(x, RIM_Y, z), color, None);
            }
        }
    }

    /// Fish cake disk with a sine-band spiral.
    fn narutomaki(&mut self) {
        let (cx, cz) = (5.0, 4.0);
        let radius = 2.2;

        for x in 2..=8 {
            for z in 1..=7 {
                let dx = x as f64 - cx;
                let dz = z as f64 - cz;
                let d = (dx * dx + dz * dz).sqrt();
                if d > radius {
                    continue;
                }
                let angle = dz.atan2(dx);
                let color = if (angle * 2.0 + d * 2.6).sin() > 0.55 {
                    self.palette.naruto_pink
                } else {
                    self.palette.naruto_white
                };
                self.grid.insert(IVec3::new(x, RIM_Y, z), color, None);
            }
        }
    }

    /// Nori sheet standing against the far rim.
    fn nori(&mut self) {
        for x in -3..=1 {
            for y in BROTH_Y..=BROTH_Y + 5 {
                self.grid
                    .insert(IVec3::new(x, y, 8), self.palette.nori, None);
            }
        }
    }

    /// Scattered scallion rings on the broth. Draws for both coordinates are
    /// consumed even when a sample lands outside the bowl.
    fn scallions(&mut self) {
        for _ in 0..SCALLION_SCATTER {
            let x = (self.rng.next() - 0.5) * 18.0;
            let z = (self.rng.next() - 0.5) * 18.0;
            if x * x + z * z > 81.0 {
                continue;
            }
            let scallion = self.palette.scallion;
            self.grid
                .insert_rounded(x, RIM_Y as f64, z, scallion, None);
        }
    }

    /// Broth disk fill. One glint draw per cell, occupied or not, keeps the
    /// draw order independent of what the detail passes claimed.
    fn broth(&mut self) {
        let limit = BROTH_RADIUS as i32;
        for x in -limit..=limit {
            for z in -limit..=limit {
                if ((x * x + z * z) as f64).sqrt() > BROTH_RADIUS {
                    continue;
                }
                let glint = self.rng.next();
                let color = if glint > 0.92 {
                    self.palette.broth_glint
                } else {
                    self.palette.broth
                };
                self.grid.insert(IVec3::new(x, BROTH_Y, z), color, None);
            }
        }
    }

    /// Flared bowl wall: a radial band around the height-dependent profile
    /// radius, with a red stripe band and a solid base disk.
    fn shell(&mut self) {
        let limit = BOWL_RADIUS.ceil() as i32 + 1;
        for y in 0..=RIM_Y {
            let profile = Self::wall_profile(y);
            for x in -limit..=limit {
                for z in -limit..=limit {
                    let dist = ((x * x + z * z) as f64).sqrt();
                    let on_wall = (dist - profile).abs() <= 0.6;
                    let on_base = y == 0 && dist < profile;
                    if !on_wall && !on_base {
                        continue;
                    }
                    let color = if on_wall && (5..=6).contains(&y) {
                        self.palette.bowl_red
                    } else {
                        self.palette.bowl_white
                    };
                    self.grid.insert(IVec3::new(x, y, z), color, None);
                }
            }
        }
    }

    /// Wall radius at a given lattice height: narrow at the base, flaring to
    /// the rim radius.
    fn wall_profile(y: i32) -> f64 {
        3.5 + (y as f64 / RIM_Y as f64).powf(0.7) * (BOWL_RADIUS - 3.5)
    }

    /// Dark foot ring under the base.
    fn foot(&mut self) {
        for x in -5..=5 {
            for z in -5..=5 {
                let dist = ((x * x + z * z) as f64).sqrt();
                if (3.2..=4.6).contains(&dist) {
                    self.grid
                        .insert(IVec3::new(x, -1, z), self.palette.bowl_dark, None);
                }
            }
        }
    }

    /// Two parallel chopsticks resting across the rim.
    fn chopsticks(&mut self) {
        let start = (-11.0, 12.5, -3.0);
        let dir = (0.8, -0.14, 0.18);

        for stick in 0..2 {
            let z_offset = stick as f64 * 2.2;
            for t in 0..28 {
                let t = t as f64;
                let chopstick = self.palette.chopstick;
                self.grid.insert_rounded(
                    start.0 + dir.0 * t,
                    start.1 + dir.1 * t,
                    start.2 + dir.2 * t + z_offset,
                    chopstick,
                    None,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_model_invariants;
    use ukiyo_core::constants::DEFAULT_SEED;

    #[test]
    fn test_ramen_deterministic() {
        let a = build_ramen_bowl(DEFAULT_SEED);
        let b = build_ramen_bowl(DEFAULT_SEED);
        assert_eq!(a, b, "same seed must rebuild the identical model");
    }

    #[test]
    fn test_ramen_invariants() {
        assert_model_invariants(&build_ramen_bowl(DEFAULT_SEED));
        assert_model_invariants(&build_ramen_bowl(3));
    }

    #[test]
    fn test_ramen_has_no_pulse_groups() {
        assert!(build_ramen_bowl(DEFAULT_SEED).pulse_groups.is_empty());
    }

    #[test]
    fn test_rim_survives_broth_fill() {
        // The lip cell at (12, 8, 0) is written by the rim pass; nothing may
        // overwrite it later.
        let model = build_ramen_bowl(DEFAULT_SEED);
        let palette = RamenPalette::new();
        let lip = model
            .voxels
            .iter()
            .find(|v| v.pos == IVec3::new(12, RIM_Y, 0))
            .expect("rim lip voxel missing");
        assert_eq!(lip.color, palette.bowl_red);
    }

    #[test]
    fn test_broth_disk_is_filled() {
        let model = build_ramen_bowl(DEFAULT_SEED);
        let broth_cells = model
            .voxels
            .iter()
            .filter(|v| v.pos.y == BROTH_Y)
            .count();
        // Disk of radius 11 has ~380 cells; toppings claim some but the
        // surface must remain essentially covered.
        assert!(broth_cells > 300, "broth surface too sparse: {broth_cells}");
    }

    #[test]
    fn test_ramen_voxel_size() {
        assert_eq!(build_ramen_bowl(DEFAULT_SEED).voxel_size, RAMEN_VOXEL_SIZE);
    }
}
