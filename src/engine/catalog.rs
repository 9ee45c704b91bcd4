//! Static registry of every action the recommender may emit.

use serde::{Deserialize, Serialize};

use super::EngineError;
use crate::models::enums::{ActionCategory, ActionId};

/// Static metadata for one recommendable action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: ActionId,
    pub title: String,
    pub category: ActionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_notes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_questions: Option<Vec<String>>,
}

/// Ordered action registry, loaded once at startup and never mutated.
/// Declaration order doubles as the ranking tie-break key.
pub struct ActionCatalog {
    entries: Vec<CatalogEntry>,
}

fn entry(
    id: ActionId,
    title: &str,
    category: ActionCategory,
    safety_notes: &[&str],
    suggested_questions: &[&str],
) -> CatalogEntry {
    let to_vec = |items: &[&str]| -> Option<Vec<String>> {
        if items.is_empty() {
            None
        } else {
            Some(items.iter().map(|s| s.to_string()).collect())
        }
    };
    CatalogEntry {
        id,
        title: title.into(),
        category,
        safety_notes: to_vec(safety_notes),
        suggested_questions: to_vec(suggested_questions),
    }
}

impl ActionCatalog {
    /// The bundled registry.
    pub fn bundled() -> Self {
        use ActionCategory::*;
        use ActionId::*;

        Self {
            entries: vec![
                entry(
                    RefineTargetedPhenotyping,
                    "Refine phenotyping: confirm key discriminating findings",
                    RefinePhenotyping,
                    &[],
                    &[
                        "Any regression (loss of previously acquired skills)?",
                        "Any episodic worsening with illness/fasting?",
                        "Any vision, hearing, or swallowing concerns?",
                    ],
                ),
                entry(
                    ClarifyPriorTesting,
                    "Clarify prior testing (what was done, when, and what was covered)",
                    RefinePhenotyping,
                    &[],
                    &[
                        "Was testing panel vs exome vs genome?",
                        "Were CNVs assessed?",
                        "Was trio sequencing performed (parents)?",
                    ],
                ),
                entry(
                    GeneticTestExome,
                    "Genetic testing: consider exome sequencing as the next test",
                    GeneticTesting,
                    &["Confirm consent and counseling for secondary findings and limitations."],
                    &[],
                ),
                entry(
                    GeneticTestPanel,
                    "Genetic testing: consider a targeted panel if phenotype is narrow and specific",
                    GeneticTesting,
                    &["Ensure the panel matches the phenotype and is up to date."],
                    &[],
                ),
                entry(
                    GenTrioExome,
                    "Genetic testing: trio exome sequencing (add parental samples if possible)",
                    GeneticTesting,
                    &["Trio improves interpretation for de novo and inheritance analysis."],
                    &[],
                ),
                entry(
                    ReanalysisExomeIfDone,
                    "Sequencing reanalysis: updated pipeline + updated phenotype review",
                    Reanalysis,
                    &[],
                    &[
                        "Any new phenotypes since the original test?",
                        "Was CNV/mtDNA/coverage review included previously?",
                    ],
                ),
                entry(
                    GenCnvFocus,
                    "Review/ensure CNV analysis (a common gap depending on lab/pipeline)",
                    GeneticTesting,
                    &[],
                    &[],
                ),
                entry(
                    UrgentMetabolicWorkup,
                    "Urgent action: metabolic risk features present — do not delay assessment",
                    Urgent,
                    &["If acutely ill, use an urgent care pathway."],
                    &[],
                ),
                entry(
                    LabMetabolicScreen,
                    "Order basic metabolic screening labs (high-yield first pass)",
                    LabOrImaging,
                    &[],
                    &["Any lactate/ammonia/ketone abnormalities?"],
                ),
                entry(RefMetabolic, "Referral: metabolic genetics clinic", Referral, &[], &[]),
                entry(
                    RefNeurogenetics,
                    "Referral: neurogenetics / epilepsy genetics clinic",
                    Referral,
                    &[],
                    &[],
                ),
            ],
        }
    }

    /// Look up an entry by id. A miss is a catalog/engine mismatch and fails
    /// loudly; it is never a recoverable user condition.
    pub fn get(&self, id: ActionId) -> Result<&CatalogEntry, EngineError> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or(EngineError::UnknownAction(id))
    }

    /// Declaration-order index, used as the secondary sort key for equal
    /// scores. Ids absent from the catalog sort last (get() already guards
    /// against them reaching output).
    pub fn rank_index(&self, id: ActionId) -> usize {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .unwrap_or(usize::MAX)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
