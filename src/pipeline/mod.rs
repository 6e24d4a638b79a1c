//! Analysis pipeline
//!
//! Orchestrates a full classification run:
//! 1. Deduplicate languages by glottocode
//! 2. Detect colexifications and score base systems (parallel, per language)
//! 3. Classify against gold annotations (parallel, per language)
//! 4. Fold accuracy figures and error evidence (serial, in selection order)
//!
//! Per-language work shares only read-only inputs, so results are identical
//! for any number of workers.

mod select;

pub use select::select_languages;

use anyhow::Result;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

use crate::classifier::{
    format_rate, Accumulator, AnalysisReport, BaseClassifier, Classification, CoverageStats,
};
use crate::concepts::ConceptList;
use crate::config::{ConfigResult, ProjectConfig};
use crate::detectors::ColexificationDetector;
use crate::labels::CanonicalLabelMap;
use crate::models::Language;
use crate::relations::RelationTable;
use crate::scoring::BaseSystemScorer;

/// Worker threads when neither the CLI nor the config sets them
pub const DEFAULT_WORKERS: usize = 8;

/// Progress callback: (language id, completed, total)
pub type ProgressCallback = Box<dyn Fn(&str, usize, usize) + Send + Sync>;

/// A configured classification run
pub struct Analysis {
    config: ProjectConfig,
    labels: CanonicalLabelMap,
    relations: RelationTable,
    concepts: ConceptList,
    workers: usize,
    progress_callback: Option<ProgressCallback>,
}

impl Analysis {
    /// Fails when a system of the relation table has no canonical label.
    pub fn new(
        config: ProjectConfig,
        relations: RelationTable,
        concepts: ConceptList,
    ) -> ConfigResult<Self> {
        let labels = config.labels.label_map();
        labels.validate(&relations)?;
        let workers = config.defaults.workers.unwrap_or(DEFAULT_WORKERS);
        Ok(Self {
            config,
            labels,
            relations,
            concepts,
            workers,
            progress_callback: None,
        })
    }

    /// Set number of worker threads
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set progress callback
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Classify all languages and fold the results into a report
    pub fn run(&self, languages: Vec<Language>) -> Result<AnalysisReport> {
        self.check_relations();

        let candidates = languages.len();
        let selected = select_languages(languages, &self.concepts);
        info!(
            "Analyzing {} languages ({} candidates) with {} workers",
            selected.len(),
            candidates,
            self.workers
        );

        let detector = ColexificationDetector::with_options(self.config.detection.options());
        let scorer = BaseSystemScorer::new(&self.labels, &self.config.thresholds);
        let classifier = BaseClassifier::new(
            &self.labels,
            &self.config.thresholds,
            &self.config.gating,
            &self.concepts,
            &self.config.report.evidence_systems,
        );

        let completed = AtomicUsize::new(0);
        let total = selected.len();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;

        // collect() keeps dispatch order
        let classifications: Vec<Classification> = pool.install(|| {
            selected
                .par_iter()
                .map(|language| {
                    let scores = detector.detect(language, &self.relations);
                    let scored = scorer.score(&scores);
                    let coverage =
                        CoverageStats::compute(language, &self.concepts, &self.config.gating);
                    let result = classifier.classify(language, &scores, &scored, coverage);
                    debug!(
                        "{} [{}]: {} -> {} ({}), gold {}",
                        language.id,
                        language.dataset,
                        scored.summary,
                        scored.best_system,
                        scored.canonical_base,
                        result.record.base
                    );

                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    if let Some(ref callback) = self.progress_callback {
                        callback(&language.id, done, total);
                    }

                    result
                })
                .collect()
        });

        let mut accumulator = Accumulator::new();
        for classification in classifications {
            accumulator.absorb(classification);
        }

        let report = accumulator.into_report(self.config.report.evidence_systems.clone());
        log_summary(&report);
        Ok(report)
    }

    fn check_relations(&self) {
        if self.relations.is_empty() {
            warn!("Relation table is empty; every language will be classified as unknown");
            return;
        }
        for (system, triples) in self.relations.iter() {
            let ignored = triples.len() - self.relations.partial_count(system);
            if ignored > 0 {
                warn!(
                    "{}: ignoring {} non-partial relation(s)",
                    system, ignored
                );
            }
            if triples.len() == ignored {
                warn!("{}: no partial relations, score will be 0", system);
            }
        }
    }
}

fn log_summary(report: &AnalysisReport) {
    let acc = &report.accuracy;
    info!("Exact base system accuracy");
    info!("Tests: {}", acc.compared);
    info!("Hits:  {}", acc.exact_hits);
    info!("Fails: {}", acc.exact_fails);
    info!("Props: {}", format_rate(acc.exact_rate));
    info!("Mixed base system accuracy");
    info!("Tests: {}", acc.compared);
    info!("Hits:  {:.2}", acc.mixed_credit);
    info!("Fails: {}", acc.mixed_fails);
    info!("Props: {}", format_rate(acc.mixed_rate));

    for group in &report.errors {
        info!(
            "{:10} / {:10} : {}",
            group.gold,
            group.predicted,
            group.entries.len()
        );
    }
}
