//! Curated evaluation vignettes: real-looking cases paired with the action
//! ids a clinician would accept as correct next steps. Used only by the
//! evaluation harness, never by the engine itself.

use serde::{Deserialize, Serialize};

use crate::models::enums::{ActionId, InheritanceHint, PriorTestResult, PriorTestType};
use crate::models::{FamilyHistory, HpoTerm, PatientCase, PriorTesting};

/// A gold-labeled case. `gold_next_action_ids` lists every acceptable
/// correct action, not a single canonical one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vignette {
    pub case_data: PatientCase,
    pub gold_next_action_ids: Vec<ActionId>,
}

fn term(id: &str, label: &str) -> HpoTerm {
    HpoTerm::new(id, label)
}

/// The bundled vignette set.
pub fn bundled() -> Vec<Vignette> {
    vec![
        Vignette {
            case_data: PatientCase {
                id: "v1".into(),
                title: "Neurodevelopmental delay + seizures, prior panel negative".into(),
                severity: None,
                onset_age_years: Some(1.0),
                phenotypes: vec![
                    term("HP:0001263", "Global developmental delay"),
                    term("HP:0001250", "Seizures"),
                    term("HP:0004322", "Muscular hypotonia"),
                ],
                family_history: FamilyHistory {
                    consanguinity: false,
                    affected_relatives: false,
                    inheritance_hint: InheritanceHint::DeNovo,
                },
                prior_testing: PriorTesting {
                    test_type: PriorTestType::Panel,
                    year: Some(2022),
                    result: PriorTestResult::Negative,
                    notes: Some("Epilepsy panel negative; no CNV analysis reported".into()),
                },
            },
            gold_next_action_ids: vec![ActionId::GenTrioExome, ActionId::ReanalysisExomeIfDone],
        },
        Vignette {
            case_data: PatientCase {
                id: "v2".into(),
                title: "Episodic decompensation + hypoglycemia".into(),
                severity: None,
                onset_age_years: Some(2.0),
                phenotypes: vec![
                    term("HP:0002376", "Episodic decompensation"),
                    term("HP:0001943", "Hypoglycemia"),
                ],
                family_history: FamilyHistory {
                    consanguinity: false,
                    affected_relatives: false,
                    inheritance_hint: InheritanceHint::Unknown,
                },
                prior_testing: PriorTesting {
                    test_type: PriorTestType::None,
                    year: None,
                    result: PriorTestResult::Na,
                    notes: None,
                },
            },
            gold_next_action_ids: vec![ActionId::UrgentMetabolicWorkup, ActionId::RefMetabolic],
        },
        Vignette {
            case_data: PatientCase {
                id: "v3".into(),
                title: "Negative exome from years ago + new phenotype (ataxia)".into(),
                severity: None,
                onset_age_years: Some(5.0),
                phenotypes: vec![
                    term("HP:0001263", "Global developmental delay"),
                    term("HP:0001276", "Ataxia"),
                ],
                family_history: FamilyHistory {
                    consanguinity: false,
                    affected_relatives: false,
                    inheritance_hint: InheritanceHint::Unknown,
                },
                prior_testing: PriorTesting {
                    test_type: PriorTestType::Exome,
                    year: Some(2019),
                    result: PriorTestResult::Negative,
                    notes: Some("Singleton exome; no reanalysis since ordering".into()),
                },
            },
            gold_next_action_ids: vec![ActionId::ReanalysisExomeIfDone],
        },
        Vignette {
            case_data: PatientCase {
                id: "v4".into(),
                title: "Hypotonia and dysphagia in infancy, no prior testing".into(),
                severity: None,
                onset_age_years: Some(0.5),
                phenotypes: vec![
                    term("HP:0004322", "Muscular hypotonia"),
                    term("HP:0002015", "Dysphagia"),
                ],
                family_history: FamilyHistory {
                    consanguinity: true,
                    affected_relatives: false,
                    inheritance_hint: InheritanceHint::Ar,
                },
                prior_testing: PriorTesting {
                    test_type: PriorTestType::None,
                    year: None,
                    result: PriorTestResult::Na,
                    notes: None,
                },
            },
            gold_next_action_ids: vec![ActionId::GeneticTestPanel, ActionId::ClarifyPriorTesting],
        },
        Vignette {
            case_data: PatientCase {
                id: "v5".into(),
                title: "Episodic decompensation + lactate elevation over a VUS exome".into(),
                severity: None,
                onset_age_years: Some(3.0),
                phenotypes: vec![
                    term("HP:0001268", "Mental deterioration"),
                    term("HP:0002151", "Increased serum lactate"),
                    term("HP:0002376", "Episodic decompensation"),
                ],
                family_history: FamilyHistory {
                    consanguinity: false,
                    affected_relatives: true,
                    inheritance_hint: InheritanceHint::Unknown,
                },
                prior_testing: PriorTesting {
                    test_type: PriorTestType::Exome,
                    year: Some(2021),
                    result: PriorTestResult::Vus,
                    notes: Some("Singleton exome with two VUS; no reanalysis since".into()),
                },
            },
            gold_next_action_ids: vec![
                ActionId::ReanalysisExomeIfDone,
                ActionId::UrgentMetabolicWorkup,
            ],
        },
    ]
}
