//! Scene catalog: which scenes exist, their display metadata, and the
//! dispatch from scene kind to builder. Catalog data lives in
//! `data/scenes.ron`, embedded at compile time and validated on parse.

use serde::Deserialize;
use thiserror::Error;
use ukiyo_core::types::{Rgb, VoxelModel};

use crate::{bonsai, cassette, ramen};

const STOCK_SCENES_RON: &str = include_str!("../../../data/scenes.ron");

/// The three deterministic scene generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SceneKind {
    RamenBowl,
    Bonsai,
    Cassette,
}

/// Access tier a scene is gated behind. The gating itself is the caller's
/// concern; the catalog only records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Tier {
    Free,
    Premium,
}

/// One catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDefinition {
    pub id: String,
    pub kind: SceneKind,
    pub tier: Tier,
    pub title: String,
    pub chips: Vec<String>,
    /// Accent color as "#rrggbb"; drives the scene's neon light rig.
    pub neon: String,
    pub default_seed: u32,
}

impl SceneDefinition {
    /// Parsed accent color. Validated at catalog load, so this is total for
    /// definitions obtained from a `Catalog`.
    pub fn neon_color(&self) -> Option<Rgb> {
        parse_hex_color(&self.neon)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse scene catalog RON: {0}")]
    Parse(String),

    #[error("duplicate scene id {0:?}")]
    DuplicateId(String),

    #[error("scene {0:?} has an empty title")]
    EmptyTitle(String),

    #[error("scene {0:?} has an invalid neon accent {1:?} (expected #rrggbb)")]
    InvalidNeon(String, String),

    #[error("unknown scene id {0:?}")]
    UnknownId(String),
}

/// Validated scene catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<SceneDefinition>,
}

impl Catalog {
    /// Parse and validate the embedded stock catalog.
    pub fn stock() -> Result<Self, CatalogError> {
        Self::from_ron(STOCK_SCENES_RON)
    }

    /// Parse and validate a catalog from a RON string.
    pub fn from_ron(ron_str: &str) -> Result<Self, CatalogError> {
        let options = ron::Options::default();
        let definitions: Vec<SceneDefinition> = options
            .from_str(ron_str)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        validate(&definitions)?;
        log::debug!("loaded scene catalog with {} entries", definitions.len());
        Ok(Self { definitions })
    }

    pub fn definitions(&self) -> &[SceneDefinition] {
        &self.definitions
    }

    /// Look up a definition by its catalog id.
    pub fn by_id(&self, id: &str) -> Result<&SceneDefinition, CatalogError> {
        self.definitions
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CatalogError::UnknownId(id.to_string()))
    }

    /// First definition for a scene kind, if the catalog carries one.
    pub fn by_kind(&self, kind: SceneKind) -> Option<&SceneDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }
}

fn validate(definitions: &[SceneDefinition]) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for def in definitions {
        if !seen.insert(def.id.as_str()) {
            return Err(CatalogError::DuplicateId(def.id.clone()));
        }
        if def.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle(def.id.clone()));
        }
        if parse_hex_color(&def.neon).is_none() {
            return Err(CatalogError::InvalidNeon(def.id.clone(), def.neon.clone()));
        }
    }
    Ok(())
}

fn parse_hex_color(text: &str) -> Option<Rgb> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Rgb::from_hex(value))
}

/// Build the model for a scene kind. Pure dispatch; every kind is total.
pub fn build_scene(kind: SceneKind, seed: u32) -> VoxelModel {
    match kind {
        SceneKind::RamenBowl => ramen::build_ramen_bowl(seed),
        SceneKind::Bonsai => bonsai::build_bonsai(seed),
        SceneKind::Cassette => cassette::build_cassette(seed),
    }
}
