use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Wire values are snake_case so the persisted case JSON round-trips.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Severity {
    Unknown => "unknown",
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(InheritanceHint {
    Unknown => "unknown",
    DeNovo => "de_novo",
    Ad => "ad",
    Ar => "ar",
    XLinked => "x_linked",
    Mitochondrial => "mitochondrial",
});

str_enum!(PriorTestType {
    None => "none",
    Panel => "panel",
    Exome => "exome",
    Genome => "genome",
});

str_enum!(PriorTestResult {
    Na => "na",
    Negative => "negative",
    Vus => "vus",
    Positive => "positive",
});

str_enum!(ActionCategory {
    RefinePhenotyping => "refine_phenotyping",
    LabOrImaging => "lab_or_imaging",
    GeneticTesting => "genetic_testing",
    Reanalysis => "reanalysis",
    Referral => "referral",
    Urgent => "urgent",
});

str_enum!(ActionId {
    RefineTargetedPhenotyping => "refine_targeted_phenotyping",
    ClarifyPriorTesting => "clarify_prior_testing",
    GeneticTestExome => "genetic_test_exome",
    GeneticTestPanel => "genetic_test_panel",
    GenTrioExome => "gen_trio_exome",
    ReanalysisExomeIfDone => "reanalysis_exome_if_done",
    GenCnvFocus => "gen_cnv_focus",
    UrgentMetabolicWorkup => "urgent_metabolic_workup",
    LabMetabolicScreen => "lab_metabolic_screen",
    RefMetabolic => "ref_metabolic",
    RefNeurogenetics => "ref_neurogenetics",
});

str_enum!(DomainId {
    Neurodevelopmental => "neurodevelopmental",
    MetabolicMito => "metabolic_mito",
    Neuromuscular => "neuromuscular",
    ConnectiveSkeletal => "connective_skeletal",
    Ophthalmologic => "ophthalmologic",
});
