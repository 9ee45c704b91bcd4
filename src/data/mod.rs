//! Bundled static reference data: the HPO-lite vocabulary and the curated
//! evaluation vignettes. Loaded once at startup, never mutated.

pub mod hpo;
pub mod vignettes;

pub use vignettes::Vignette;
