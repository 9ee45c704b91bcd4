//! HPO-lite: the fixed phenotype vocabulary offered by the case editor.
//! A flat id/label list, no hierarchy.

use crate::models::HpoTerm;

pub fn hpo_lite() -> Vec<HpoTerm> {
    [
        ("HP:0001250", "Seizures"),
        ("HP:0001263", "Global developmental delay"),
        ("HP:0004322", "Muscular hypotonia"),
        ("HP:0001249", "Intellectual disability"),
        ("HP:0001290", "Generalized hypotonia"),
        ("HP:0000729", "Autistic behavior"),
        ("HP:0002015", "Dysphagia"),
        ("HP:0001276", "Ataxia"),
        ("HP:0002151", "Increased serum lactate"),
        ("HP:0001943", "Hypoglycemia"),
        ("HP:0001268", "Mental deterioration"),
        ("HP:0002376", "Episodic decompensation"),
        ("HP:0001608", "Hoarse cry"),
        ("HP:0001510", "Growth delay"),
        ("HP:0000924", "Abnormality of the skeletal system"),
        ("HP:0000478", "Abnormality of the eye"),
    ]
    .into_iter()
    .map(|(id, label)| HpoTerm::new(id, label))
    .collect()
}

/// Look up a vocabulary term by id.
pub fn find(term_id: &str) -> Option<HpoTerm> {
    hpo_lite().into_iter().find(|t| t.id == term_id)
}
