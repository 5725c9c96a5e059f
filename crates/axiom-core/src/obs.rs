//! Structured observability hooks for the analysis pipeline.
//!
//! This module provides:
//! - An analysis-scoped tracing span via the `AnalysisSpan` RAII guard
//! - Emission functions for lexicon loading, detection, scoring and rejected configuration
//!
//! Per-call events are emitted at `debug!` so that interactive use stays quiet
//! unless `RUST_LOG=debug` (or `--verbose`) is set.

use tracing::{debug, info};

use crate::role::{render_glyphs, Role};

/// RAII guard that enters an analysis-scoped span for the duration of one call.
///
/// # Example
///
/// ```ignore
/// let _span = AnalysisSpan::enter(text.len());
/// // detection and scoring events are now nested under `axiom.analysis`
/// ```
pub struct AnalysisSpan {
    _span: tracing::span::EnteredSpan,
}

impl AnalysisSpan {
    /// Create and enter a span tagged with the input length in bytes.
    pub fn enter(text_len: usize) -> Self {
        let span = tracing::debug_span!("axiom.analysis", text_len = text_len);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a lexicon was compiled into a detector.
pub fn emit_lexicon_loaded(roles: usize, keywords: usize, suffixes: usize) {
    info!(
        event = "lexicon.loaded",
        roles = roles,
        keywords = keywords,
        suffixes = suffixes,
    );
}

/// Emit event: roles detected in a text.
pub fn emit_roles_detected(text_len: usize, roles: &[Role]) {
    debug!(
        event = "roles.detected",
        text_len = text_len,
        count = roles.len(),
        glyphs = %render_glyphs(roles),
    );
}

/// Emit event: a completeness report was produced.
pub fn emit_report_scored(present: usize, missing: usize, score: f64) {
    debug!(
        event = "report.scored",
        present = present,
        missing = missing,
        score = score,
    );
}

/// Emit event: user-supplied configuration was rejected (warning level).
pub fn emit_config_rejected(source: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "config.rejected", source = %source, error = %error);
}
