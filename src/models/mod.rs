pub mod action;
pub mod case;
pub mod differential;
pub mod enums;

pub use action::{Confidence, RecommendedAction};
pub use case::{FamilyHistory, HpoTerm, PatientCase, PriorTesting};
pub use differential::DifferentialItem;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
