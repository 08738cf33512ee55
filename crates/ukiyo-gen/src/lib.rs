pub mod bonsai;
pub mod cassette;
pub mod catalog;
pub mod ramen;
pub mod rng;

mod palette;

#[cfg(test)]
mod test_support;

pub use bonsai::build_bonsai;
pub use cassette::build_cassette;
pub use catalog::{build_scene, Catalog, CatalogError, SceneDefinition, SceneKind, Tier};
pub use ramen::build_ramen_bowl;
pub use rng::SeededRng;
