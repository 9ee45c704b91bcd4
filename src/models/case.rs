use serde::{Deserialize, Serialize};

use super::enums::{InheritanceHint, PriorTestResult, PriorTestType, Severity};

/// An immutable phenotype identifier/label pair from the HPO-lite vocabulary.
/// Identity is by `id`; the label is display text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpoTerm {
    pub id: String,
    pub label: String,
}

impl HpoTerm {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyHistory {
    pub consanguinity: bool,
    pub affected_relatives: bool,
    pub inheritance_hint: InheritanceHint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorTesting {
    #[serde(rename = "type")]
    pub test_type: PriorTestType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub result: PriorTestResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The unit of engine input. Field names serialize camelCase so a case
/// exported by the interactive editor reloads losslessly.
///
/// The engine never mutates a case; every derived value is freshly built
/// per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientCase {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Absence is meaningful: it feeds the missingness signal, zero does not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onset_age_years: Option<f64>,
    pub phenotypes: Vec<HpoTerm>,
    pub family_history: FamilyHistory,
    pub prior_testing: PriorTesting,
}

impl PatientCase {
    /// Phenotype membership test by term id. Duplicates are tolerated;
    /// order never affects the result.
    pub fn has_term(&self, term_id: &str) -> bool {
        self.phenotypes.iter().any(|p| p.id == term_id)
    }

    /// Labels of the case's phenotypes whose ids appear in `term_ids`,
    /// in case order.
    pub fn labels_for(&self, term_ids: &[&str]) -> Vec<String> {
        self.phenotypes
            .iter()
            .filter(|p| term_ids.contains(&p.id.as_str()))
            .map(|p| p.label.clone())
            .collect()
    }
}
