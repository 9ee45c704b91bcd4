//! Next-step recommender: an ordered chain of independent rule blocks, each
//! mapping one clinical pattern to scored draft actions, followed by a keyed
//! merge, a minimum-coverage fallback, and finalization against the catalog.

use chrono::Datelike;

use super::catalog::ActionCatalog;
use super::signals::PhenotypeSignals;
use super::EngineError;
use crate::models::enums::{ActionId, InheritanceHint, PriorTestResult, PriorTestType};
use crate::models::{Confidence, PatientCase, RecommendedAction};

/// The prior test must be at least this many whole years old before the
/// reanalysis score gets the aging bonus.
const REANALYSIS_AGE_YEARS: i32 = 2;

/// Every result list carries at least this many distinct actions.
const MIN_ACTIONS: usize = 3;

/// Inserted in order when fewer than MIN_ACTIONS drafts survive the merge.
const FALLBACK_IDS: [ActionId; 3] = [
    ActionId::RefineTargetedPhenotyping,
    ActionId::ClarifyPriorTesting,
    ActionId::GeneticTestExome,
];

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// A rule block's argument for one action: an id, a score floor, and the
/// explanation that goes with it. Catalog metadata is hydrated later.
#[derive(Debug, Clone)]
struct Draft {
    id: ActionId,
    score: i32,
    reasons: Vec<String>,
    what_would_change: Vec<String>,
    /// Overrides the catalog default when set.
    safety_notes: Option<Vec<String>>,
    suggested_questions: Option<Vec<String>>,
}

fn draft(id: ActionId, score: i32, reasons: Vec<String>, what_would_change: Vec<String>) -> Draft {
    Draft {
        id,
        score,
        reasons,
        what_would_change,
        safety_notes: None,
        suggested_questions: None,
    }
}

// ---------------------------------------------------------------------------
// Rule blocks — each independent and testable in isolation
// ---------------------------------------------------------------------------

/// [1] Phenotype refinement is always on the table; missing key information
/// raises its priority rather than failing.
fn rule_refine_phenotyping(case: &PatientCase) -> Vec<Draft> {
    let mut missing: Vec<&str> = Vec::new();
    if case.onset_age_years.is_none() {
        missing.push("onset age");
    }
    if case.phenotypes.len() < 2 {
        missing.push("additional phenotypes");
    }
    if case.prior_testing.test_type == PriorTestType::None {
        missing.push("prior testing details");
    }

    let reason = if missing.is_empty() {
        "Improves discrimination and reduces unnecessary testing.".to_string()
    } else {
        format!("Key information missing ({}).", missing.join(", "))
    };

    vec![draft(
        ActionId::RefineTargetedPhenotyping,
        55 + if missing.is_empty() { 0 } else { 10 },
        vec![reason],
        vec![
            "If key features are confirmed or explicitly excluded, testing and referral can be more targeted."
                .into(),
        ],
    )]
}

/// [2] Unknown prior testing blocks everything downstream; clarify it first.
fn rule_clarify_prior_testing(case: &PatientCase) -> Vec<Draft> {
    if case.prior_testing.test_type != PriorTestType::None {
        return Vec::new();
    }
    vec![draft(
        ActionId::ClarifyPriorTesting,
        75,
        vec!["The next best step depends strongly on what has already been tested and how.".into()],
        vec![
            "If exome/genome has already been done, reanalysis may be higher value than repeating testing."
                .into(),
        ],
    )]
}

/// [3] Baseline test selection when nothing has been done: broad or
/// multisystem presentations get exome, narrow ones get a targeted panel.
fn rule_baseline_test_selection(case: &PatientCase, s: &PhenotypeSignals) -> Vec<Draft> {
    if case.prior_testing.test_type != PriorTestType::None {
        return Vec::new();
    }

    let broad_case = case.phenotypes.len() >= 3
        || s.developmental_delay
        || s.regression
        || s.ataxia
        || s.seizures;

    if broad_case {
        vec![draft(
            ActionId::GeneticTestExome,
            70,
            vec!["Broad or multisystem presentations often benefit from a broader genetic test.".into()],
            vec!["If phenotype becomes narrow and specific, a targeted panel may be sufficient.".into()],
        )]
    } else {
        vec![draft(
            ActionId::GeneticTestPanel,
            62,
            vec!["If the phenotype is narrow and well-defined, a targeted panel can be efficient.".into()],
            vec![
                "If additional features emerge or the phenotype broadens, exome may become a better next test."
                    .into(),
            ],
        )]
    }
}

/// [4] Episodic decompensation or hypoglycemia opens the urgent metabolic
/// pathway: workup, screening labs, and specialty referral in one block.
fn rule_urgent_metabolic(s: &PhenotypeSignals) -> Vec<Draft> {
    if !s.episodic_decompensation && !s.hypoglycemia {
        return Vec::new();
    }

    let mut reasons = Vec::new();
    if s.episodic_decompensation {
        reasons.push("Episodic decompensation can indicate time-sensitive metabolic risk.".into());
    }
    if s.hypoglycemia {
        reasons.push("Hypoglycemia increases concern for metabolic/endocrine emergencies.".into());
    }

    vec![
        draft(
            ActionId::UrgentMetabolicWorkup,
            if s.episodic_decompensation && s.hypoglycemia {
                95
            } else {
                85
            },
            reasons,
            vec![
                "If there are current acute symptoms, escalate immediately.".into(),
                "Screening lab results strongly influence next steps.".into(),
            ],
        ),
        draft(
            ActionId::LabMetabolicScreen,
            78,
            vec!["A targeted screening set can quickly support or reduce metabolic concern.".into()],
            vec!["Abnormal results increase priority for metabolic genetics and focused analysis.".into()],
        ),
        draft(
            ActionId::RefMetabolic,
            70,
            vec!["Specialty input is high-yield when episodic/metabolic features are suspected.".into()],
            vec!["If screening labs are normal and episodes are not metabolic-like, urgency decreases.".into()],
        ),
    ]
}

/// [5] Neurodevelopmental features plus seizures: trio exome, stronger when a
/// targeted panel already came back negative or a de novo event is suspected.
fn rule_neurodev_seizures(case: &PatientCase, s: &PhenotypeSignals) -> Vec<Draft> {
    if !((s.developmental_delay || s.regression) && s.seizures) {
        return Vec::new();
    }

    let mut score = 72;
    let mut reasons =
        vec!["Neurodevelopmental features with seizures often benefit from broader genetic testing.".to_string()];

    if case.prior_testing.test_type == PriorTestType::Panel
        && case.prior_testing.result == PriorTestResult::Negative
    {
        score += 10;
        reasons.push("Prior targeted panel was negative; broader sequencing is a common next step.".into());
    }

    if case.family_history.inheritance_hint == InheritanceHint::DeNovo {
        score += 8;
        reasons.push("Trio sequencing increases interpretability for suspected de novo events.".into());
    }

    vec![
        draft(
            ActionId::GenTrioExome,
            score,
            reasons,
            vec![
                "If parents are not available, consider alternative strategies or careful singleton interpretation."
                    .into(),
            ],
        ),
        draft(
            ActionId::RefNeurogenetics,
            65,
            vec!["Specialty clinics can refine phenotype and interpret complex results faster.".into()],
            vec!["If symptoms are mild/stable with comprehensive workup, urgency may be lower.".into()],
        ),
    ]
}

/// [6] A prior exome/genome makes reanalysis the cheapest high-yield move,
/// more so as the test ages, the phenotype evolves, or a VUS list exists.
fn rule_reanalysis(case: &PatientCase, s: &PhenotypeSignals, current_year: i32) -> Vec<Draft> {
    let prior = &case.prior_testing;
    if prior.test_type != PriorTestType::Exome && prior.test_type != PriorTestType::Genome {
        return Vec::new();
    }

    let age_years = prior.year.map(|y| current_year - y);
    let mut score = 65;
    let mut reasons =
        vec!["Reanalysis can convert past negatives as knowledge and pipelines improve.".to_string()];

    if let Some(age) = age_years {
        if age >= REANALYSIS_AGE_YEARS {
            score += 10;
            reasons.push(format!("Original test is {age} years old; yield increases over time."));
        }
    }
    if s.ataxia || s.regression {
        score += 10;
        reasons.push("Evolving phenotype increases reanalysis value.".into());
    }
    if prior.result == PriorTestResult::Vus {
        score += 5;
        reasons.push("Existing VUS list is a strong reanalysis target.".into());
    }

    vec![
        draft(
            ActionId::ReanalysisExomeIfDone,
            score,
            reasons,
            vec![
                "If a recent reanalysis was already done with updated phenotype, value is lower.".into(),
                "If CNV/mtDNA review was not included, broaden scope.".into(),
            ],
        ),
        draft(
            ActionId::GenCnvFocus,
            55,
            vec!["CNV analysis is a common gap depending on lab/pipeline.".into()],
            vec!["If CNV calling was already performed and reviewed, deprioritize.".into()],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Merge + fallback + finalization
// ---------------------------------------------------------------------------

/// Fold drafts into an ordered keyed accumulator. Same id: the strongest
/// score wins (each block argues a floor, not a summand), explanation lists
/// are set-unioned in first-seen order, and later non-empty overrides replace
/// stored safety notes / suggested questions.
fn merge_drafts(drafts: Vec<Draft>) -> Vec<Draft> {
    let mut merged: Vec<Draft> = Vec::new();
    for d in drafts {
        match merged.iter_mut().find(|m| m.id == d.id) {
            None => merged.push(d),
            Some(m) => {
                m.score = m.score.max(d.score);
                for reason in d.reasons {
                    if !m.reasons.contains(&reason) {
                        m.reasons.push(reason);
                    }
                }
                for change in d.what_would_change {
                    if !m.what_would_change.contains(&change) {
                        m.what_would_change.push(change);
                    }
                }
                if d.safety_notes.is_some() {
                    m.safety_notes = d.safety_notes;
                }
                if d.suggested_questions.is_some() {
                    m.suggested_questions = d.suggested_questions;
                }
            }
        }
    }
    merged
}

/// Pad with fixed fallbacks until MIN_ACTIONS distinct ids exist.
fn ensure_minimum_coverage(merged: &mut Vec<Draft>) {
    for id in FALLBACK_IDS {
        if merged.len() >= MIN_ACTIONS {
            break;
        }
        if !merged.iter().any(|m| m.id == id) {
            merged.push(draft(
                id,
                50,
                vec!["Baseline recommendation when limited information is available.".into()],
                vec!["Providing additional clinical detail will refine recommendations.".into()],
            ));
        }
    }
}

/// Hydrate catalog metadata, clamp scores, derive confidence, and rank.
fn finalize(
    merged: Vec<Draft>,
    catalog: &ActionCatalog,
) -> Result<Vec<RecommendedAction>, EngineError> {
    let mut actions = merged
        .into_iter()
        .map(|d| {
            let entry = catalog.get(d.id)?;
            let score = d.score.clamp(0, 100) as u8;
            Ok(RecommendedAction {
                id: d.id,
                title: entry.title.clone(),
                category: entry.category,
                score,
                confidence: Confidence::from_score(score),
                reasons: d.reasons,
                what_would_change: d.what_would_change,
                safety_notes: d.safety_notes.or_else(|| entry.safety_notes.clone()),
                suggested_questions: d
                    .suggested_questions
                    .or_else(|| entry.suggested_questions.clone()),
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    // Catalog declaration order breaks score ties so output is reproducible.
    actions.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| catalog.rank_index(a.id).cmp(&catalog.rank_index(b.id)))
    });

    Ok(actions)
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Recommend next steps for a case, aging prior tests against the current
/// UTC year. Deterministic, total over well-formed cases, at least three
/// distinct actions, never two entries with the same id.
pub fn recommend_next_steps(
    case: &PatientCase,
    catalog: &ActionCatalog,
) -> Result<Vec<RecommendedAction>, EngineError> {
    recommend_next_steps_at(case, catalog, chrono::Utc::now().year())
}

/// Same as [`recommend_next_steps`] with an injected clock year, so the
/// reanalysis aging rule stays reproducible in tests and replays.
pub fn recommend_next_steps_at(
    case: &PatientCase,
    catalog: &ActionCatalog,
    current_year: i32,
) -> Result<Vec<RecommendedAction>, EngineError> {
    let signals = PhenotypeSignals::from_case(case);

    let mut drafts = Vec::new();
    drafts.extend(rule_refine_phenotyping(case));
    drafts.extend(rule_clarify_prior_testing(case));
    drafts.extend(rule_baseline_test_selection(case, &signals));
    drafts.extend(rule_urgent_metabolic(&signals));
    drafts.extend(rule_neurodev_seizures(case, &signals));
    drafts.extend(rule_reanalysis(case, &signals, current_year));

    let draft_count = drafts.len();
    let mut merged = merge_drafts(drafts);
    ensure_minimum_coverage(&mut merged);
    let actions = finalize(merged, catalog)?;

    tracing::debug!(
        case_id = %case.id,
        drafts = draft_count,
        actions = actions.len(),
        "recommendation pass complete"
    );

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::signals;
    use crate::models::enums::ActionCategory;
    use crate::models::{FamilyHistory, HpoTerm, PriorTesting};

    const YEAR: i32 = 2026;

    fn base_case() -> PatientCase {
        PatientCase {
            id: "t".into(),
            title: "test".into(),
            severity: None,
            onset_age_years: Some(1.0),
            phenotypes: Vec::new(),
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
        }
    }

    fn with_terms(mut case: PatientCase, terms: &[(&str, &str)]) -> PatientCase {
        case.phenotypes = terms
            .iter()
            .map(|(id, label)| HpoTerm::new(*id, *label))
            .collect();
        case
    }

    fn recommend(case: &PatientCase) -> Vec<RecommendedAction> {
        recommend_next_steps_at(case, &ActionCatalog::bundled(), YEAR).unwrap()
    }

    fn find(actions: &[RecommendedAction], id: ActionId) -> Option<&RecommendedAction> {
        actions.iter().find(|a| a.id == id)
    }

    // -- rule blocks in isolation --------------------------------------------

    #[test]
    fn refine_rule_scores_missingness() {
        let mut complete = with_terms(
            base_case(),
            &[
                (signals::HP_SEIZURES, "Seizures"),
                (signals::HP_ATAXIA, "Ataxia"),
            ],
        );
        complete.prior_testing.test_type = PriorTestType::Panel;
        let drafts = rule_refine_phenotyping(&complete);
        assert_eq!(drafts[0].score, 55);

        let sparse = base_case(); // no phenotypes, no prior testing
        let drafts = rule_refine_phenotyping(&sparse);
        assert_eq!(drafts[0].score, 65);
        assert!(drafts[0].reasons[0].contains("additional phenotypes"));
        assert!(drafts[0].reasons[0].contains("prior testing details"));
    }

    #[test]
    fn clarify_rule_only_without_prior_testing() {
        assert_eq!(rule_clarify_prior_testing(&base_case()).len(), 1);

        let mut tested = base_case();
        tested.prior_testing.test_type = PriorTestType::Exome;
        assert!(rule_clarify_prior_testing(&tested).is_empty());
    }

    #[test]
    fn baseline_rule_broad_vs_narrow() {
        let narrow = with_terms(base_case(), &[(signals::HP_DYSPHAGIA, "Dysphagia")]);
        let drafts =
            rule_baseline_test_selection(&narrow, &PhenotypeSignals::from_case(&narrow));
        assert_eq!(drafts[0].id, ActionId::GeneticTestPanel);
        assert_eq!(drafts[0].score, 62);

        let broad = with_terms(base_case(), &[(signals::HP_SEIZURES, "Seizures")]);
        let drafts = rule_baseline_test_selection(&broad, &PhenotypeSignals::from_case(&broad));
        assert_eq!(drafts[0].id, ActionId::GeneticTestExome);
        assert_eq!(drafts[0].score, 70);
    }

    #[test]
    fn urgent_rule_both_signals_outrank_one() {
        let one = with_terms(
            base_case(),
            &[(signals::HP_HYPOGLYCEMIA, "Hypoglycemia")],
        );
        let drafts = rule_urgent_metabolic(&PhenotypeSignals::from_case(&one));
        assert_eq!(drafts[0].id, ActionId::UrgentMetabolicWorkup);
        assert_eq!(drafts[0].score, 85);

        let both = with_terms(
            base_case(),
            &[
                (signals::HP_HYPOGLYCEMIA, "Hypoglycemia"),
                (signals::HP_EPISODIC_DECOMPENSATION, "Episodic decompensation"),
            ],
        );
        let drafts = rule_urgent_metabolic(&PhenotypeSignals::from_case(&both));
        assert_eq!(drafts[0].score, 95);
        assert_eq!(drafts.len(), 3); // workup + lab screen + referral
        assert_eq!(drafts[1].score, 78);
        assert_eq!(drafts[2].score, 70);
    }

    #[test]
    fn reanalysis_rule_aging_bonus() {
        let mut old = with_terms(base_case(), &[]);
        old.prior_testing = PriorTesting {
            test_type: PriorTestType::Exome,
            year: Some(YEAR - 3),
            result: PriorTestResult::Negative,
            notes: None,
        };
        let drafts = rule_reanalysis(&old, &PhenotypeSignals::default(), YEAR);
        assert_eq!(drafts[0].score, 75); // 65 + 10 age

        let mut recent = old.clone();
        recent.prior_testing.year = Some(YEAR - 1);
        let drafts = rule_reanalysis(&recent, &PhenotypeSignals::default(), YEAR);
        assert_eq!(drafts[0].score, 65);

        let mut undated = old.clone();
        undated.prior_testing.year = None;
        let drafts = rule_reanalysis(&undated, &PhenotypeSignals::default(), YEAR);
        assert_eq!(drafts[0].score, 65); // no year recorded, no aging bonus
    }

    // -- merge / fallback ----------------------------------------------------

    #[test]
    fn merge_takes_max_score_and_unions_reasons() {
        let merged = merge_drafts(vec![
            draft(
                ActionId::GeneticTestExome,
                70,
                vec!["a".into(), "shared".into()],
                vec!["w1".into()],
            ),
            draft(
                ActionId::GeneticTestExome,
                50,
                vec!["shared".into(), "b".into()],
                vec!["w1".into(), "w2".into()],
            ),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].score, 70);
        assert_eq!(merged[0].reasons, vec!["a", "shared", "b"]);
        assert_eq!(merged[0].what_would_change, vec!["w1", "w2"]);
    }

    #[test]
    fn sparse_case_padded_to_three_actions() {
        // Prior panel testing suppresses the clarify and baseline-test rules,
        // and with no phenotype patterns only the refine draft survives.
        let mut case = base_case();
        case.prior_testing.test_type = PriorTestType::Panel;
        case.prior_testing.result = PriorTestResult::Negative;

        let actions = recommend(&case);
        assert!(actions.len() >= 3);
        let fallback = find(&actions, ActionId::ClarifyPriorTesting).unwrap();
        assert_eq!(fallback.score, 50);
        assert!(fallback.reasons[0].contains("limited information"));
    }

    // -- whole-engine properties ---------------------------------------------

    #[test]
    fn results_are_deterministic() {
        let case = with_terms(
            base_case(),
            &[
                (signals::HP_GLOBAL_DEV_DELAY, "Global developmental delay"),
                (signals::HP_SEIZURES, "Seizures"),
                (signals::HP_HYPOGLYCEMIA, "Hypoglycemia"),
            ],
        );
        let a = recommend(&case);
        let b = recommend(&case);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn no_duplicate_ids_and_scores_bounded() {
        let case = with_terms(
            base_case(),
            &[
                (signals::HP_EPISODIC_DECOMPENSATION, "Episodic decompensation"),
                (signals::HP_HYPOGLYCEMIA, "Hypoglycemia"),
                (signals::HP_GLOBAL_DEV_DELAY, "Global developmental delay"),
                (signals::HP_SEIZURES, "Seizures"),
            ],
        );
        let actions = recommend(&case);
        let mut ids: Vec<ActionId> = actions.iter().map(|a| a.id).collect();
        ids.sort_by_key(|id| id.as_str());
        ids.dedup();
        assert_eq!(ids.len(), actions.len(), "duplicate action ids in output");
        for a in &actions {
            assert!(a.score <= 100);
            assert_eq!(a.confidence, Confidence::from_score(a.score));
        }
    }

    #[test]
    fn output_sorted_descending_with_catalog_tiebreak() {
        let case = with_terms(
            base_case(),
            &[
                (signals::HP_EPISODIC_DECOMPENSATION, "Episodic decompensation"),
                (signals::HP_GLOBAL_DEV_DELAY, "Global developmental delay"),
                (signals::HP_SEIZURES, "Seizures"),
            ],
        );
        let actions = recommend(&case);
        let catalog = ActionCatalog::bundled();
        for pair in actions.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(catalog.rank_index(pair[0].id) < catalog.rank_index(pair[1].id));
            }
        }
    }

    #[test]
    fn catalog_metadata_hydrated() {
        let case = with_terms(
            base_case(),
            &[(signals::HP_HYPOGLYCEMIA, "Hypoglycemia")],
        );
        let actions = recommend(&case);
        let urgent = find(&actions, ActionId::UrgentMetabolicWorkup).unwrap();
        assert_eq!(urgent.category, ActionCategory::Urgent);
        assert!(urgent
            .safety_notes
            .as_ref()
            .is_some_and(|n| n[0].contains("urgent care")));
    }

    // -- end-to-end scenarios ------------------------------------------------

    /// Delay + seizures + hypotonia over a stale negative panel with a de
    /// novo hint: trio exome leads at high confidence, and no
    /// reanalysis-class action appears (prior test was a panel).
    #[test]
    fn scenario_trio_exome_after_negative_panel() {
        let mut case = with_terms(
            base_case(),
            &[
                (signals::HP_GLOBAL_DEV_DELAY, "Global developmental delay"),
                (signals::HP_SEIZURES, "Seizures"),
                (signals::HP_MUSCULAR_HYPOTONIA, "Muscular hypotonia"),
            ],
        );
        case.family_history.inheritance_hint = InheritanceHint::DeNovo;
        case.prior_testing = PriorTesting {
            test_type: PriorTestType::Panel,
            year: Some(YEAR - 3),
            result: PriorTestResult::Negative,
            notes: None,
        };

        let actions = recommend(&case);
        assert_eq!(actions[0].id, ActionId::GenTrioExome);
        assert_eq!(actions[0].score, 90); // 72 + 10 panel-negative + 8 de novo
        assert_eq!(actions[0].confidence, Confidence::High);
        assert!(find(&actions, ActionId::ReanalysisExomeIfDone).is_none());
        assert!(find(&actions, ActionId::GenCnvFocus).is_none());
    }

    /// Episodic decompensation + hypoglycemia, untested: urgent workup 95,
    /// then lab screen 78 and metabolic referral 70, in descending order.
    #[test]
    fn scenario_urgent_metabolic_ordering() {
        let case = with_terms(
            base_case(),
            &[
                (signals::HP_EPISODIC_DECOMPENSATION, "Episodic decompensation"),
                (signals::HP_HYPOGLYCEMIA, "Hypoglycemia"),
            ],
        );
        let actions = recommend(&case);

        assert_eq!(actions[0].id, ActionId::UrgentMetabolicWorkup);
        assert_eq!(actions[0].score, 95);

        let lab = find(&actions, ActionId::LabMetabolicScreen).unwrap();
        let referral = find(&actions, ActionId::RefMetabolic).unwrap();
        assert_eq!(lab.score, 78);
        assert_eq!(referral.score, 70);

        let pos = |id| actions.iter().position(|a| a.id == id).unwrap();
        assert!(pos(ActionId::UrgentMetabolicWorkup) < pos(ActionId::LabMetabolicScreen));
        assert!(pos(ActionId::LabMetabolicScreen) < pos(ActionId::RefMetabolic));
    }

    /// Delay + ataxia over a stale negative exome: reanalysis at 85
    /// (65 + 10 age + 10 evolving phenotype) plus the CNV-gap action at 55.
    #[test]
    fn scenario_reanalysis_of_stale_exome() {
        let mut case = with_terms(
            base_case(),
            &[
                (signals::HP_GLOBAL_DEV_DELAY, "Global developmental delay"),
                (signals::HP_ATAXIA, "Ataxia"),
            ],
        );
        case.prior_testing = PriorTesting {
            test_type: PriorTestType::Exome,
            year: Some(YEAR - 7),
            result: PriorTestResult::Negative,
            notes: None,
        };

        let actions = recommend(&case);
        let reanalysis = find(&actions, ActionId::ReanalysisExomeIfDone).unwrap();
        assert!(reanalysis.score >= 75);
        assert_eq!(reanalysis.score, 85);
        assert_eq!(reanalysis.confidence, Confidence::High);

        let cnv = find(&actions, ActionId::GenCnvFocus).unwrap();
        assert_eq!(cnv.score, 55);
    }

    /// Two otherwise-identical cases differing only in prior-test year: the
    /// older test's reanalysis score is at least 10 points higher.
    #[test]
    fn reanalysis_aging_monotonicity() {
        let mut newer = base_case();
        newer.prior_testing = PriorTesting {
            test_type: PriorTestType::Genome,
            year: Some(YEAR - 1),
            result: PriorTestResult::Negative,
            notes: None,
        };
        let mut older = newer.clone();
        older.prior_testing.year = Some(YEAR - 2);

        let newer_score = find(&recommend(&newer), ActionId::ReanalysisExomeIfDone)
            .unwrap()
            .score;
        let older_score = find(&recommend(&older), ActionId::ReanalysisExomeIfDone)
            .unwrap()
            .score;
        assert!(older_score >= newer_score + 10);
    }
}
