//! AXIOM Core Library
//!
//! Detects structural roles (initiation, flow, processing, imprint, emergence,
//! containment, recurrence, return, …) in free-form system descriptions and
//! scores how structurally complete a description is against a weighted set
//! of core roles.
//!
//! ```ignore
//! let analyzer = StructuralAnalyzer::standard()?;
//! let report = analyzer.analyze("Neurons process information to form memories");
//! assert_eq!(report.glyphs(), "█┴┬");
//! ```

pub mod analyzer;
pub mod corpus;
pub mod detector;
pub mod error;
pub mod lexicon;
pub mod obs;
pub mod role;
pub mod scorer;
pub mod telemetry;

pub use analyzer::StructuralAnalyzer;
pub use corpus::SAMPLE_DESCRIPTIONS;
pub use detector::{order_canonically, MatchTier, RoleDetector, RoleEvidence};
pub use error::{AxiomError, Result};
pub use lexicon::{Lexicon, RoleKeywords, DEFAULT_SUFFIXES};
pub use obs::{
    emit_config_rejected, emit_lexicon_loaded, emit_report_scored, emit_roles_detected,
    AnalysisSpan,
};
pub use role::{render_glyphs, Role, CANONICAL_FLOW};
pub use scorer::{CompletenessReport, CompletenessScorer, CoreWeight, CoreWeights};
pub use telemetry::init_tracing;

/// AXIOM version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
