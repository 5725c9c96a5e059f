//! The detect-then-score pipeline.

use std::path::Path;

use crate::detector::RoleDetector;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::obs::{self, AnalysisSpan};
use crate::scorer::{CompletenessReport, CompletenessScorer, CoreWeights};

/// Composes a [`RoleDetector`] and a [`CompletenessScorer`].
///
/// Both halves are immutable after construction, so one analyzer can be
/// shared freely between callers.
#[derive(Debug, Clone)]
pub struct StructuralAnalyzer {
    detector: RoleDetector,
    scorer: CompletenessScorer,
}

impl StructuralAnalyzer {
    pub fn new(detector: RoleDetector, scorer: CompletenessScorer) -> Self {
        Self { detector, scorer }
    }

    /// Analyzer over the built-in lexicon and weights.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(
            RoleDetector::standard()?,
            CompletenessScorer::standard()?,
        ))
    }

    /// Build from optional JSON config files, falling back to the built-ins
    /// for whichever path is `None`.
    pub fn from_config_files(lexicon: Option<&Path>, weights: Option<&Path>) -> Result<Self> {
        let lexicon = match lexicon {
            Some(path) => Lexicon::from_json_file(path).inspect_err(|e| {
                obs::emit_config_rejected(&path.display().to_string(), e);
            })?,
            None => Lexicon::builtin(),
        };
        let weights = match weights {
            Some(path) => CoreWeights::from_json_file(path).inspect_err(|e| {
                obs::emit_config_rejected(&path.display().to_string(), e);
            })?,
            None => CoreWeights::builtin(),
        };
        Ok(Self::new(
            RoleDetector::new(lexicon)?,
            CompletenessScorer::new(weights)?,
        ))
    }

    /// `score(detect(text))`.
    pub fn analyze(&self, text: &str) -> CompletenessReport {
        let _span = AnalysisSpan::enter(text.len());
        let roles = self.detector.detect(text);
        self.scorer.score(&roles)
    }

    pub fn detector(&self) -> &RoleDetector {
        &self.detector
    }

    pub fn scorer(&self) -> &CompletenessScorer {
        &self.scorer
    }
}
