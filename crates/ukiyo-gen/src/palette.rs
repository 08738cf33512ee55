//! Per-scene color sets. Scale factors above 1.0 push colors into HDR for
//! bloom; renderers without bloom clamp them.

use ukiyo_core::types::Rgb;

pub struct BonsaiPalette {
    pub pot_dark: Rgb,
    pub pot_rim: Rgb,
    pub pot_neon: Rgb,
    pub pot_green: Rgb,
    pub wood_dark: Rgb,
    pub wood_mid: Rgb,
    pub wood_light: Rgb,
    pub leaf_pink: Rgb,
    pub leaf_highlight: Rgb,
    pub leaf_neon_green: Rgb,
    pub leaf_purple: Rgb,
    pub leaf_lime: Rgb,
    pub reflection_a: Rgb,
    pub reflection_b: Rgb,
}

impl BonsaiPalette {
    pub fn new() -> Self {
        Self {
            pot_dark: Rgb::from_hex(0x101010),
            pot_rim: Rgb::from_hex(0xFFD700),
            pot_neon: Rgb::from_hex(0xFF0033),
            pot_green: Rgb::from_hex(0x00FF00),
            wood_dark: Rgb::from_hex(0x2D1B18),
            wood_mid: Rgb::from_hex(0x4E342E),
            wood_light: Rgb::from_hex(0x6D4C41),
            leaf_pink: Rgb::from_hex(0xFF4081).scaled(1.5),
            leaf_highlight: Rgb::from_hex(0xFF80AB).scaled(2.0),
            leaf_neon_green: Rgb::from_hex(0x39FF14),
            leaf_purple: Rgb::from_hex(0xAA00FF).scaled(3.0),
            leaf_lime: Rgb::from_hex(0xCCFF00).scaled(2.5),
            reflection_a: Rgb::from_hex(0x442233).scaled(0.5),
            reflection_b: Rgb::from_hex(0x113344).scaled(0.5),
        }
    }
}

impl Default for BonsaiPalette {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CassettePalette {
    pub plastic: Rgb,
    pub label: Rgb,
    pub label_worn: Rgb,
    pub dark: Rgb,
    pub cyan: Rgb,
    pub pink: Rgb,
}

impl CassettePalette {
    pub fn new() -> Self {
        Self {
            plastic: Rgb::from_hex(0x8A2BE2),
            label: Rgb::from_hex(0xE0E0E0),
            label_worn: Rgb::from_hex(0xBDBDBD),
            dark: Rgb::from_hex(0x1A1A1A),
            cyan: Rgb::from_hex(0x00FFFF),
            pink: Rgb::from_hex(0xFF00CC),
        }
    }
}

impl Default for CassettePalette {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RamenPalette {
    pub bowl_white: Rgb,
    pub bowl_red: Rgb,
    pub bowl_dark: Rgb,
    pub broth: Rgb,
    pub broth_glint: Rgb,
    pub noodle: Rgb,
    pub egg_white: Rgb,
    pub egg_yolk: Rgb,
    pub chashu: Rgb,
    pub chashu_edge: Rgb,
    pub nori: Rgb,
    pub scallion: Rgb,
    pub naruto_white: Rgb,
    pub naruto_pink: Rgb,
    pub chopstick: Rgb,
}

impl RamenPalette {
    pub fn new() -> Self {
        Self {
            bowl_white: Rgb::from_hex(0xF5F5F0),
            bowl_red: Rgb::from_hex(0xD32F2F),
            bowl_dark: Rgb::from_hex(0x1A1A1A),
            broth: Rgb::from_hex(0xE8A33D),
            broth_glint: Rgb::from_hex(0xFFD180).scaled(1.6),
            noodle: Rgb::from_hex(0xF7D794),
            egg_white: Rgb::from_hex(0xFFFEF0),
            egg_yolk: Rgb::from_hex(0xFFB300).scaled(1.5),
            chashu: Rgb::from_hex(0xC98A5E),
            chashu_edge: Rgb::from_hex(0x8D5A3B),
            nori: Rgb::from_hex(0x102418),
            scallion: Rgb::from_hex(0x43A047).scaled(1.3),
            naruto_white: Rgb::from_hex(0xFFF0F5),
            naruto_pink: Rgb::from_hex(0xFF6090).scaled(1.4),
            chopstick: Rgb::from_hex(0x7B4F2C),
        }
    }
}

impl Default for RamenPalette {
    fn default() -> Self {
        Self::new()
    }
}
