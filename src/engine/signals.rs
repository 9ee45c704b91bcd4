//! Phenotype presence signals keyed to fixed HPO term ids.
//!
//! No ontology traversal happens here: a signal is a plain membership test of
//! one or two fixed ids in the case's phenotype list. Both the differential
//! and the recommender read the same signal set, so the two engines stay
//! consistent about what "seizures present" means.

use crate::models::PatientCase;

pub const HP_SEIZURES: &str = "HP:0001250";
pub const HP_GLOBAL_DEV_DELAY: &str = "HP:0001263";
pub const HP_MUSCULAR_HYPOTONIA: &str = "HP:0004322";
pub const HP_GENERALIZED_HYPOTONIA: &str = "HP:0001290";
pub const HP_EPISODIC_DECOMPENSATION: &str = "HP:0002376";
pub const HP_HYPOGLYCEMIA: &str = "HP:0001943";
pub const HP_INCREASED_LACTATE: &str = "HP:0002151";
pub const HP_ATAXIA: &str = "HP:0001276";
pub const HP_REGRESSION: &str = "HP:0001268";
pub const HP_SKELETAL_ABNORMALITY: &str = "HP:0000924";
pub const HP_EYE_ABNORMALITY: &str = "HP:0000478";
pub const HP_DYSPHAGIA: &str = "HP:0002015";
pub const HP_GROWTH_DELAY: &str = "HP:0001510";

/// Boolean phenotype signals extracted once per pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhenotypeSignals {
    pub seizures: bool,
    pub developmental_delay: bool,
    /// Either muscular or generalized hypotonia.
    pub hypotonia: bool,
    pub episodic_decompensation: bool,
    pub hypoglycemia: bool,
    pub increased_lactate: bool,
    pub ataxia: bool,
    pub regression: bool,
    pub skeletal: bool,
    pub eye: bool,
    pub dysphagia: bool,
    pub growth_delay: bool,
}

impl PhenotypeSignals {
    pub fn from_case(case: &PatientCase) -> Self {
        Self {
            seizures: case.has_term(HP_SEIZURES),
            developmental_delay: case.has_term(HP_GLOBAL_DEV_DELAY),
            hypotonia: case.has_term(HP_MUSCULAR_HYPOTONIA)
                || case.has_term(HP_GENERALIZED_HYPOTONIA),
            episodic_decompensation: case.has_term(HP_EPISODIC_DECOMPENSATION),
            hypoglycemia: case.has_term(HP_HYPOGLYCEMIA),
            increased_lactate: case.has_term(HP_INCREASED_LACTATE),
            ataxia: case.has_term(HP_ATAXIA),
            regression: case.has_term(HP_REGRESSION),
            skeletal: case.has_term(HP_SKELETAL_ABNORMALITY),
            eye: case.has_term(HP_EYE_ABNORMALITY),
            dysphagia: case.has_term(HP_DYSPHAGIA),
            growth_delay: case.has_term(HP_GROWTH_DELAY),
        }
    }
}
