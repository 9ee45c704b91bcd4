//! Differential builder: maps a case's phenotype set to ranked candidate
//! diagnostic domains with supporting evidence.

use super::signals::{self, PhenotypeSignals};
use crate::models::enums::DomainId;
use crate::models::{DifferentialItem, PatientCase};

/// Domains scoring below this are near-baseline noise and are dropped.
const MIN_DIFFERENTIAL_SCORE: u8 = 20;

/// Every domain starts here before signal increments.
const BASE_DOMAIN_SCORE: i32 = 10;

fn clamp_score(n: i32) -> u8 {
    n.clamp(0, 100) as u8
}

struct DomainProfile {
    id: DomainId,
    title: &'static str,
    /// Full signal term set for the domain, not just the terms that
    /// contributed a bonus.
    signal_terms: &'static [&'static str],
    missing_discriminators: &'static [&'static str],
    notes: &'static [&'static str],
}

/// Fixed declaration order; doubles as the tie-break key for equal scores.
const DOMAIN_PROFILES: [DomainProfile; 5] = [
    DomainProfile {
        id: DomainId::Neurodevelopmental,
        title: "Neurodevelopmental / epilepsy genetics",
        signal_terms: &[
            signals::HP_GLOBAL_DEV_DELAY,
            signals::HP_SEIZURES,
            signals::HP_ATAXIA,
            signals::HP_REGRESSION,
            signals::HP_MUSCULAR_HYPOTONIA,
            signals::HP_GENERALIZED_HYPOTONIA,
        ],
        missing_discriminators: &[
            "Regression vs static course",
            "Seizure semiology and EEG summary",
            "Head growth pattern (micro/macrocephaly)",
        ],
        notes: &[
            "Prioritizes when developmental delay, seizures, ataxia, or regression features are present.",
        ],
    },
    DomainProfile {
        id: DomainId::MetabolicMito,
        title: "Metabolic / mitochondrial",
        signal_terms: &[
            signals::HP_EPISODIC_DECOMPENSATION,
            signals::HP_HYPOGLYCEMIA,
            signals::HP_INCREASED_LACTATE,
            signals::HP_REGRESSION,
        ],
        missing_discriminators: &[
            "Triggers (fasting/illness/exertion)",
            "Ammonia, lactate, ketones, acylcarnitine/urine organic acids",
            "Episodic vs progressive pattern",
        ],
        notes: &[
            "Prioritizes when episodic decompensation, hypoglycemia, or lactate abnormalities are present.",
        ],
    },
    DomainProfile {
        id: DomainId::Neuromuscular,
        title: "Neuromuscular",
        signal_terms: &[
            signals::HP_MUSCULAR_HYPOTONIA,
            signals::HP_GENERALIZED_HYPOTONIA,
            signals::HP_DYSPHAGIA,
            signals::HP_ATAXIA,
        ],
        missing_discriminators: &[
            "Weakness distribution (proximal/distal)",
            "CK level and EMG/NCS summary (if done)",
            "Respiratory/bulbar involvement",
        ],
        notes: &["Prioritizes when hypotonia, weakness, dysphagia, or motor concerns cluster."],
    },
    DomainProfile {
        id: DomainId::ConnectiveSkeletal,
        title: "Connective tissue / skeletal dysplasia",
        signal_terms: &[signals::HP_SKELETAL_ABNORMALITY, signals::HP_GROWTH_DELAY],
        missing_discriminators: &[
            "Joint hypermobility, fractures, scoliosis",
            "Radiology summary (skeletal survey if indicated)",
            "Cardiac findings (echo if connective tissue concern)",
        ],
        notes: &["Prioritizes when skeletal system findings or growth delay are prominent."],
    },
    DomainProfile {
        id: DomainId::Ophthalmologic,
        title: "Ophthalmologic / syndromic",
        signal_terms: &[signals::HP_EYE_ABNORMALITY],
        missing_discriminators: &[
            "Retina/optic nerve findings",
            "Hearing status",
            "Any syndromic features across systems",
        ],
        notes: &["Prioritizes when eye findings are part of the presentation."],
    },
];

fn domain_score(id: DomainId, s: &PhenotypeSignals) -> i32 {
    let mut score = BASE_DOMAIN_SCORE;
    match id {
        DomainId::Neurodevelopmental => {
            if s.developmental_delay {
                score += 30;
            }
            if s.seizures {
                score += 25;
            }
            if s.ataxia {
                score += 15;
            }
            if s.regression {
                score += 15;
            }
            if s.hypotonia {
                score += 10;
            }
        }
        DomainId::MetabolicMito => {
            if s.episodic_decompensation {
                score += 30;
            }
            if s.hypoglycemia {
                score += 30;
            }
            if s.increased_lactate {
                score += 20;
            }
            if s.regression {
                score += 10;
            }
        }
        DomainId::Neuromuscular => {
            if s.hypotonia {
                score += 25;
            }
            if s.dysphagia {
                score += 20;
            }
            if s.ataxia {
                score += 10;
            }
        }
        DomainId::ConnectiveSkeletal => {
            if s.skeletal {
                score += 35;
            }
            if s.growth_delay {
                score += 10;
            }
        }
        DomainId::Ophthalmologic => {
            if s.eye {
                score += 35;
            }
        }
    }
    score
}

/// Build the ranked differential for a case. Deterministic and total: absent
/// data yields lower scores, never a failure.
pub fn build_differential(case: &PatientCase) -> Vec<DifferentialItem> {
    let signals = PhenotypeSignals::from_case(case);

    let mut items: Vec<DifferentialItem> = DOMAIN_PROFILES
        .iter()
        .map(|profile| DifferentialItem {
            id: profile.id,
            title: profile.title.into(),
            score: clamp_score(domain_score(profile.id, &signals)),
            supporting: case.labels_for(profile.signal_terms),
            missing_discriminators: profile
                .missing_discriminators
                .iter()
                .map(|s| s.to_string())
                .collect(),
            notes: profile.notes.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    // Stable sort keeps declaration order on ties, so output is reproducible.
    items.sort_by(|a, b| b.score.cmp(&a.score));
    items.retain(|item| item.score >= MIN_DIFFERENTIAL_SCORE);
    items
}
