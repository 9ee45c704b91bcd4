use serde::{Deserialize, Serialize};

use super::enums::DomainId;

/// One ranked candidate diagnostic domain, built fresh per case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferentialItem {
    pub id: DomainId,
    pub title: String,
    /// 0..=100 after clamping.
    pub score: u8,
    /// Labels of the case's phenotypes in this domain's signal set.
    pub supporting: Vec<String>,
    /// Fixed clarifying questions for this domain, independent of input.
    pub missing_discriminators: Vec<String>,
    pub notes: Vec<String>,
}
