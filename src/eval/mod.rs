//! Offline evaluation harness: replays the curated vignettes through a
//! pluggable recommendation policy and aggregates accuracy, stepwise
//! discovery, dropout robustness, and confidence calibration into one report.
//!
//! Pure reporting: vignette data is never mutated and nothing is cached
//! between runs.

use std::fmt::Write as _;
use std::time::Instant;

use serde::Serialize;

use crate::data::Vignette;
use crate::engine::catalog::ActionCatalog;
use crate::engine::recommender::recommend_next_steps;
use crate::engine::EngineError;
use crate::models::enums::ActionId;
use crate::models::{Confidence, PatientCase};

/// Dropout rates exercised by the robustness metric.
const DROPOUT_RATES: [f64; 2] = [0.3, 0.6];

/// A Top-K hit anywhere in the first 3 ranks counts as discovery.
const DISCOVERY_K: usize = 3;

// ---------------------------------------------------------------------------
// Policy seam
// ---------------------------------------------------------------------------

/// A recommendation policy: case in, ranked action ids out. The same replay
/// logic runs the real engine and trivial baselines through this seam.
pub trait Policy {
    fn action_ids(&self, case: &PatientCase) -> Result<Vec<ActionId>, EngineError>;
}

/// The real recommendation engine.
pub struct EnginePolicy<'a> {
    pub catalog: &'a ActionCatalog,
}

impl Policy for EnginePolicy<'_> {
    fn action_ids(&self, case: &PatientCase) -> Result<Vec<ActionId>, EngineError> {
        Ok(recommend_next_steps(case, self.catalog)?
            .into_iter()
            .map(|a| a.id)
            .collect())
    }
}

/// Non-adaptive baseline: always emits one generic action regardless of the
/// case. Exists to contrast the engine's responsiveness to evidence.
pub struct FixedBaseline;

impl Policy for FixedBaseline {
    fn action_ids(&self, _case: &PatientCase) -> Result<Vec<ActionId>, EngineError> {
        Ok(vec![ActionId::RefineTargetedPhenotyping])
    }
}

// ---------------------------------------------------------------------------
// Replay primitives
// ---------------------------------------------------------------------------

/// True if any gold action appears among the first `k` recommended ids.
/// Order-sensitive prefix, not full-set membership.
pub fn top_k_hit(ids: &[ActionId], gold: &[ActionId], k: usize) -> bool {
    ids.iter().take(k).any(|id| gold.contains(id))
}

/// Reveal the case's phenotypes one at a time and report the smallest prefix
/// length at which a Top-K hit first occurs, or None if even the full list
/// never hits.
pub fn steps_until_hit(
    case: &PatientCase,
    gold: &[ActionId],
    k: usize,
    policy: &dyn Policy,
) -> Result<Option<usize>, EngineError> {
    let max_step = case.phenotypes.len().max(1);
    for step in 1..=max_step {
        let mut partial = case.clone();
        partial.phenotypes = case.phenotypes.iter().take(step).cloned().collect();
        let ids = policy.action_ids(&partial)?;
        if top_k_hit(&ids, gold, k) {
            return Ok(Some(step));
        }
    }
    Ok(None)
}

/// Case variant with a deterministic phenotype subset: sort a clone by term
/// id, then keep `max(1, round(len * (1 - drop_rate)))` terms.
pub fn drop_phenotypes(case: &PatientCase, drop_rate: f64) -> PatientCase {
    let mut phenotypes = case.phenotypes.clone();
    phenotypes.sort_by(|a, b| a.id.cmp(&b.id));

    let keep = ((phenotypes.len() as f64) * (1.0 - drop_rate)).round().max(1.0) as usize;
    phenotypes.truncate(keep);

    let mut variant = case.clone();
    variant.phenotypes = phenotypes;
    variant
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StepStats {
    pub total_steps: usize,
    /// Cases where a hit occurred at any prefix length.
    pub hit_cases: usize,
}

impl StepStats {
    fn record(&mut self, steps: Option<usize>) {
        if let Some(s) = steps {
            self.total_steps += s;
            self.hit_cases += 1;
        }
    }

    /// Average steps over cases where a hit occurred at all.
    pub fn average(&self) -> Option<f64> {
        if self.hit_cases == 0 {
            None
        } else {
            Some(self.total_steps as f64 / self.hit_cases as f64)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CalibrationBin {
    pub correct: usize,
    pub total: usize,
}

impl CalibrationBin {
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CalibrationBins {
    pub low: CalibrationBin,
    pub medium: CalibrationBin,
    pub high: CalibrationBin,
}

impl CalibrationBins {
    fn bin_mut(&mut self, confidence: Confidence) -> &mut CalibrationBin {
        match confidence {
            Confidence::Low => &mut self.low,
            Confidence::Medium => &mut self.medium,
            Confidence::High => &mut self.high,
        }
    }
}

/// Aggregate evaluation results over one vignette set.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub case_count: usize,
    pub top1_hits: usize,
    pub top3_hits: usize,
    pub top5_hits: usize,
    pub engine_steps: StepStats,
    pub baseline_steps: StepStats,
    pub drop30_hits: usize,
    pub drop60_hits: usize,
    pub calibration: CalibrationBins,
}

impl EvalReport {
    /// Printable report, one metric block per line group.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let n = self.case_count;

        let fmt_avg = |stats: &StepStats| match stats.average() {
            Some(avg) => format!("{avg:.2}"),
            None => "n/a".to_string(),
        };

        let _ = writeln!(out, "== NextGene evaluation ==");
        let _ = writeln!(out, "Cases: {n}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Top-1 hit: {}/{n}", self.top1_hits);
        let _ = writeln!(out, "Top-3 hit: {}/{n}", self.top3_hits);
        let _ = writeln!(out, "Top-5 hit: {}/{n}", self.top5_hits);
        let _ = writeln!(out);
        let _ = writeln!(out, "Stepwise replay (steps until a gold action appears in Top-3):");
        let _ = writeln!(out, "Engine avg steps:   {}", fmt_avg(&self.engine_steps));
        let _ = writeln!(out, "Baseline avg steps: {}", fmt_avg(&self.baseline_steps));
        let _ = writeln!(out);
        let _ = writeln!(out, "Robustness (Top-3 hit after phenotype dropout):");
        let _ = writeln!(out, "Drop 30%: {}/{n}", self.drop30_hits);
        let _ = writeln!(out, "Drop 60%: {}/{n}", self.drop60_hits);
        let _ = writeln!(out);
        let _ = writeln!(out, "Calibration (Top-1 correctness by confidence tier):");
        for (label, bin) in [
            ("low", self.calibration.low),
            ("medium", self.calibration.medium),
            ("high", self.calibration.high),
        ] {
            let _ = writeln!(
                out,
                "{label}: {}/{} ({:.1}%)",
                bin.correct,
                bin.total,
                bin.rate() * 100.0
            );
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Batch entry point
// ---------------------------------------------------------------------------

/// Replay every vignette through the engine (and the fixed baseline for the
/// stepwise contrast) and aggregate all metrics in one pass per vignette.
pub fn run_evaluation(
    vignettes: &[Vignette],
    catalog: &ActionCatalog,
) -> Result<EvalReport, EngineError> {
    let start = Instant::now();
    let engine = EnginePolicy { catalog };
    let baseline = FixedBaseline;

    let mut report = EvalReport {
        case_count: vignettes.len(),
        top1_hits: 0,
        top3_hits: 0,
        top5_hits: 0,
        engine_steps: StepStats::default(),
        baseline_steps: StepStats::default(),
        drop30_hits: 0,
        drop60_hits: 0,
        calibration: CalibrationBins::default(),
    };

    for v in vignettes {
        let case = &v.case_data;
        let gold = &v.gold_next_action_ids;

        let actions = recommend_next_steps(case, catalog)?;
        let ids: Vec<ActionId> = actions.iter().map(|a| a.id).collect();

        if top_k_hit(&ids, gold, 1) {
            report.top1_hits += 1;
        }
        if top_k_hit(&ids, gold, 3) {
            report.top3_hits += 1;
        }
        if top_k_hit(&ids, gold, 5) {
            report.top5_hits += 1;
        }

        report
            .engine_steps
            .record(steps_until_hit(case, gold, DISCOVERY_K, &engine)?);
        report
            .baseline_steps
            .record(steps_until_hit(case, gold, DISCOVERY_K, &baseline)?);

        for rate in DROPOUT_RATES {
            let dropped = drop_phenotypes(case, rate);
            let dropped_ids = engine.action_ids(&dropped)?;
            if top_k_hit(&dropped_ids, gold, DISCOVERY_K) {
                if rate == DROPOUT_RATES[0] {
                    report.drop30_hits += 1;
                } else {
                    report.drop60_hits += 1;
                }
            }
        }

        // Calibration: does the top-1 confidence tier predict correctness?
        if let Some(top) = actions.first() {
            let bin = report.calibration.bin_mut(top.confidence);
            bin.total += 1;
            if top_k_hit(&ids, gold, 1) {
                bin.correct += 1;
            }
        }
    }

    tracing::info!(
        cases = report.case_count,
        top3_hits = report.top3_hits,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "evaluation run complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vignettes;
    use crate::models::HpoTerm;

    fn catalog() -> ActionCatalog {
        ActionCatalog::bundled()
    }

    /// Policy that parrots the gold labels; exercises the replay seam.
    struct GoldParrot(Vec<ActionId>);

    impl Policy for GoldParrot {
        fn action_ids(&self, _case: &PatientCase) -> Result<Vec<ActionId>, EngineError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn top_k_hit_is_prefix_sensitive() {
        let ids = [
            ActionId::RefineTargetedPhenotyping,
            ActionId::ClarifyPriorTesting,
            ActionId::GenTrioExome,
        ];
        let gold = [ActionId::GenTrioExome];
        assert!(!top_k_hit(&ids, &gold, 1));
        assert!(!top_k_hit(&ids, &gold, 2));
        assert!(top_k_hit(&ids, &gold, 3));
        assert!(top_k_hit(&ids, &gold, 5));
    }

    #[test]
    fn drop_phenotypes_is_deterministic_and_keeps_at_least_one() {
        let v = &vignettes::bundled()[0];
        let a = drop_phenotypes(&v.case_data, 0.6);
        let b = drop_phenotypes(&v.case_data, 0.6);
        assert_eq!(a.phenotypes, b.phenotypes);
        assert_eq!(a.phenotypes.len(), 1); // round(3 * 0.4) = 1

        let mut tiny = v.case_data.clone();
        tiny.phenotypes = vec![HpoTerm::new("HP:0001250", "Seizures")];
        assert_eq!(drop_phenotypes(&tiny, 0.9).phenotypes.len(), 1);
    }

    #[test]
    fn drop_phenotypes_sorts_by_term_id() {
        let v = &vignettes::bundled()[0]; // HP:0001263, HP:0001250, HP:0004322
        let dropped = drop_phenotypes(&v.case_data, 0.3);
        assert_eq!(dropped.phenotypes.len(), 2); // round(3 * 0.7) = 2
        assert_eq!(dropped.phenotypes[0].id, "HP:0001250");
        assert_eq!(dropped.phenotypes[1].id, "HP:0001263");
    }

    #[test]
    fn steps_until_hit_finds_earliest_prefix() {
        let v = &vignettes::bundled()[0];
        let cat = catalog();
        let engine = EnginePolicy { catalog: &cat };
        // First phenotype alone (delay, panel already done) cannot surface
        // the trio exome recommendation; the seizure term at step 2 can.
        let steps = steps_until_hit(&v.case_data, &v.gold_next_action_ids, 3, &engine).unwrap();
        assert_eq!(steps, Some(2));
    }

    #[test]
    fn steps_until_hit_none_when_policy_never_hits() {
        let v = &vignettes::bundled()[0];
        let steps =
            steps_until_hit(&v.case_data, &v.gold_next_action_ids, 3, &FixedBaseline).unwrap();
        assert_eq!(steps, None);
    }

    #[test]
    fn replay_seam_accepts_any_policy() {
        let v = &vignettes::bundled()[2];
        let parrot = GoldParrot(v.gold_next_action_ids.clone());
        let steps = steps_until_hit(&v.case_data, &v.gold_next_action_ids, 3, &parrot).unwrap();
        assert_eq!(steps, Some(1));
    }

    #[test]
    fn evaluation_over_bundled_vignettes() {
        let report = run_evaluation(&vignettes::bundled(), &catalog()).unwrap();

        assert_eq!(report.case_count, 5);
        assert_eq!(report.top1_hits, 5);
        assert_eq!(report.top3_hits, 5);
        assert_eq!(report.top5_hits, 5);

        // The engine discovers gold actions from short phenotype prefixes;
        // the non-adaptive baseline never does.
        let engine_avg = report.engine_steps.average().unwrap();
        assert!((engine_avg - 1.2).abs() < 1e-9);
        assert!(report.baseline_steps.average().is_none());
    }

    #[test]
    fn dropout_degradation_is_monotonic() {
        let report = run_evaluation(&vignettes::bundled(), &catalog()).unwrap();
        assert!(report.drop30_hits >= report.drop60_hits);
        assert_eq!(report.drop30_hits, 5);
        assert_eq!(report.drop60_hits, 4);
    }

    #[test]
    fn calibration_counts_top1_by_tier() {
        let report = run_evaluation(&vignettes::bundled(), &catalog()).unwrap();
        let total = report.calibration.low.total
            + report.calibration.medium.total
            + report.calibration.high.total;
        assert_eq!(total, report.case_count);
        // Every bundled vignette's top action sits in the high tier and is
        // correct, so stated confidence tracks correctness on this set.
        assert_eq!(report.calibration.high.correct, 5);
        assert_eq!(report.calibration.high.total, 5);
    }

    #[test]
    fn render_contains_every_metric_block() {
        let report = run_evaluation(&vignettes::bundled(), &catalog()).unwrap();
        let text = report.render();
        assert!(text.contains("Cases: 5"));
        assert!(text.contains("Top-3 hit: 5/5"));
        assert!(text.contains("Baseline avg steps: n/a"));
        assert!(text.contains("Drop 60%: 4/5"));
        assert!(text.contains("high: 5/5 (100.0%)"));
    }
}
