//! Weighted structural completeness scoring.
//!
//! A [`CompletenessScorer`] compares a detected role sequence with a fixed
//! table of core roles and weights. Absent high-weight roles cost more than
//! absent low-weight ones.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AxiomError, Result};
use crate::obs;
use crate::role::{render_glyphs, Role};

/// Weight of one core role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreWeight {
    pub role: Role,
    pub weight: f64,
}

/// The reference table of core roles and their weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreWeights {
    pub weights: Vec<CoreWeight>,
}

impl CoreWeights {
    /// The built-in weighting over the eight canonical-flow roles (total 9.3).
    pub fn builtin() -> Self {
        let table = [
            (Role::Initiation, 1.0),
            (Role::Flow, 1.2),
            (Role::Processing, 1.5),
            (Role::Imprint, 1.1),
            (Role::Emergence, 1.4),
            (Role::Containment, 1.0),
            (Role::Recurrence, 1.1),
            (Role::Return, 1.0),
        ];
        Self {
            weights: table
                .iter()
                .map(|(role, weight)| CoreWeight {
                    role: *role,
                    weight: *weight,
                })
                .collect(),
        }
    }

    /// Parse a weight table from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let weights: CoreWeights = serde_json::from_str(json)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Read a weight table from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The table must be non-empty, name each role once, and carry finite
    /// positive weights.
    pub fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(AxiomError::InvalidWeights(
                "at least one core role is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for entry in &self.weights {
            if !seen.insert(entry.role) {
                return Err(AxiomError::InvalidWeights(format!(
                    "role {} weighted more than once",
                    entry.role
                )));
            }
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(AxiomError::InvalidWeights(format!(
                    "weight for {} must be finite and positive, got {}",
                    entry.role, entry.weight
                )));
            }
        }
        Ok(())
    }

    /// Weight of `role`, or `None` when it is not a core role.
    pub fn weight_of(&self, role: Role) -> Option<f64> {
        self.weights
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| entry.weight)
    }

    /// Core roles in table order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.weights.iter().map(|entry| entry.role)
    }

    /// Sum of all core weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().map(|entry| entry.weight).sum()
    }
}

impl Default for CoreWeights {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Outcome of scoring one detected role sequence.
///
/// # Invariants
///
/// `present_core_roles` and `missing_core_roles` are disjoint and together
/// equal the scorer's core-role set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Roles as detected, in detection order.
    pub symbols: Vec<Role>,
    pub present_core_roles: BTreeSet<Role>,
    pub missing_core_roles: BTreeSet<Role>,
    /// Weighted completeness in `[0.0, 1.0]`, rounded to three decimals.
    pub score: f64,
}

impl CompletenessReport {
    /// Whether every core role is present.
    pub fn is_complete(&self) -> bool {
        self.missing_core_roles.is_empty()
    }

    /// Glyph string for the detected symbols.
    pub fn glyphs(&self) -> String {
        render_glyphs(&self.symbols)
    }
}

/// Scores role sequences against a fixed [`CoreWeights`] table.
#[derive(Debug, Clone)]
pub struct CompletenessScorer {
    weights: CoreWeights,
    total_weight: f64,
}

impl CompletenessScorer {
    /// Validate `weights` and build a scorer over them.
    pub fn new(weights: CoreWeights) -> Result<Self> {
        weights.validate()?;
        let total_weight = weights.total();
        Ok(Self {
            weights,
            total_weight,
        })
    }

    /// Scorer over [`CoreWeights::builtin`].
    pub fn standard() -> Result<Self> {
        Self::new(CoreWeights::builtin())
    }

    pub fn weights(&self) -> &CoreWeights {
        &self.weights
    }

    /// Score `roles`; duplicates and non-core roles are ignored for the score
    /// but kept verbatim in `symbols`.
    pub fn score(&self, roles: &[Role]) -> CompletenessReport {
        let mut present_core_roles = BTreeSet::new();
        let mut missing_core_roles = BTreeSet::new();
        let mut missing_weight = 0.0;

        // Summed in table order so that "nothing present" reproduces the total exactly.
        for entry in &self.weights.weights {
            if roles.contains(&entry.role) {
                present_core_roles.insert(entry.role);
            } else {
                missing_core_roles.insert(entry.role);
                missing_weight += entry.weight;
            }
        }

        let score = round3(1.0 - missing_weight / self.total_weight).clamp(0.0, 1.0);
        obs::emit_report_scored(present_core_roles.len(), missing_core_roles.len(), score);

        CompletenessReport {
            symbols: roles.to_vec(),
            present_core_roles,
            missing_core_roles,
            score,
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
