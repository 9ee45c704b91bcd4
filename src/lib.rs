pub mod config;
pub mod data; // bundled HPO-lite vocabulary + evaluation vignettes
pub mod engine; // differential builder, action catalog, recommender
pub mod eval; // offline evaluation harness
pub mod models;

pub use engine::catalog::ActionCatalog;
pub use engine::differential::build_differential;
pub use engine::recommender::{recommend_next_steps, recommend_next_steps_at};
pub use engine::EngineError;
pub use models::{DifferentialItem, PatientCase, RecommendedAction};
