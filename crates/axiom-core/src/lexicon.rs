//! Keyword lexicon: which surface words signal which structural role.
//!
//! A [`Lexicon`] is plain configuration data. It is validated once when a
//! [`RoleDetector`](crate::detector::RoleDetector) is built from it and is
//! never mutated afterwards.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AxiomError, Result};
use crate::role::Role;

/// Suffixes appended to every keyword when generating morphological variants.
pub const DEFAULT_SUFFIXES: [&str; 7] = ["s", "ing", "ed", "ion", "al", "ive", "ment"];

/// Keywords registered for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleKeywords {
    pub role: Role,
    pub keywords: Vec<String>,
}

/// The full keyword table.
///
/// `roles` keeps registration order; roles outside the canonical flow are
/// reported in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub roles: Vec<RoleKeywords>,
    /// Irregular surface forms keyed by canonical keyword.
    #[serde(default)]
    pub variations: BTreeMap<String, Vec<String>>,
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
}

fn default_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect()
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn builtin() -> Self {
        let table: [(Role, &[&str]); 11] = [
            (
                Role::Initiation,
                &[
                    "start", "begin", "initiate", "source", "origin", "create", "generate",
                    "big bang", "birth", "formation", "emit",
                ],
            ),
            (
                Role::Flow,
                &[
                    "flow", "transfer", "move", "current", "propagate", "travel", "transmit",
                    "orbit", "revolve", "circulate", "stream",
                ],
            ),
            (
                Role::Processing,
                &[
                    "process", "transform", "compute", "convert", "calculate", "change", "react",
                    "metabolize", "digest", "analyze",
                ],
            ),
            (
                Role::Imprint,
                &[
                    "store", "remember", "imprint", "encode", "memorize", "save", "record",
                    "learn", "retain", "capture", "memory",
                ],
            ),
            (
                Role::Emergence,
                &[
                    "emerge", "create", "form", "generate", "arise", "become", "develop",
                    "consciousness", "intelligence", "life",
                ],
            ),
            (
                Role::Containment,
                &[
                    "contain", "bound", "limit", "restrict", "constrain", "within", "stable",
                    "attract", "hold", "capture", "orbit",
                ],
            ),
            (
                Role::Recurrence,
                &[
                    "repeat", "cycle", "oscillate", "recur", "periodic", "rhythm", "pattern",
                    "loop", "heartbeat", "seasonal",
                ],
            ),
            (
                Role::Return,
                &["return", "restore", "revert", "recover", "rebound"],
            ),
            (
                Role::Identity,
                &[
                    "identity", "self", "essence", "unique", "distinct", "individual",
                    "character", "nature",
                ],
            ),
            (
                Role::Potential,
                &[
                    "potential", "capacity", "ability", "capability", "possibility", "quantum",
                    "probability", "latent",
                ],
            ),
            (
                Role::Connection,
                &[
                    "connect", "bond", "link", "relationship", "network", "synapse",
                    "chemical bond", "interact",
                ],
            ),
        ];

        let variations: [(&str, &[&str]); 9] = [
            ("memory", &["memories", "memorization", "memorize"]),
            ("cycle", &["cycles", "cycling", "cyclical"]),
            ("flow", &["flows", "flowing", "flowed"]),
            ("process", &["processes", "processing", "processed"]),
            ("transform", &["transforms", "transforming", "transformation"]),
            ("orbit", &["orbits", "orbiting", "orbital"]),
            ("create", &["creates", "creating", "creation", "created"]),
            ("form", &["forms", "forming", "formation", "formed"]),
            ("measure", &["measures", "measuring", "measurement", "measured"]),
        ];

        Self {
            roles: table
                .iter()
                .map(|(role, kws)| RoleKeywords {
                    role: *role,
                    keywords: words(kws),
                })
                .collect(),
            variations: variations
                .iter()
                .map(|(k, forms)| (k.to_string(), words(forms)))
                .collect(),
            suffixes: default_suffixes(),
        }
    }

    /// Parse a lexicon from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Read a lexicon from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check structural rules the detector relies on.
    ///
    /// Each role may be registered once. Keywords, variations and suffixes
    /// must be non-empty, free of surrounding whitespace and lowercase, since
    /// matching runs against lowercased text.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.roles {
            if !seen.insert(entry.role) {
                return Err(AxiomError::InvalidLexicon(format!(
                    "role {} registered more than once",
                    entry.role
                )));
            }
            for kw in &entry.keywords {
                check_term(kw, &format!("keyword for role {}", entry.role))?;
            }
        }

        for (keyword, forms) in &self.variations {
            check_term(keyword, "variation key")?;
            for form in forms {
                check_term(form, &format!("variation of {keyword:?}"))?;
            }
        }

        for suffix in &self.suffixes {
            check_term(suffix, "suffix")?;
        }

        Ok(())
    }

    /// Keywords registered for `role` (empty when the role has none).
    pub fn keywords_for(&self, role: Role) -> &[String] {
        self.roles
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| entry.keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Irregular surface forms registered for `keyword`.
    pub fn variations_of(&self, keyword: &str) -> &[String] {
        self.variations
            .get(keyword)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// SHA-256 hex digest of the lexicon's JSON form.
    pub fn digest(&self) -> Result<String> {
        use sha2::Digest as _;
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(sha2::Sha256::digest(&bytes)))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_term(term: &str, what: &str) -> Result<()> {
    if term.trim().is_empty() {
        return Err(AxiomError::InvalidLexicon(format!("{what} is empty")));
    }
    if term.trim() != term {
        return Err(AxiomError::InvalidLexicon(format!(
            "{what} {term:?} has surrounding whitespace"
        )));
    }
    if term.to_lowercase() != term {
        return Err(AxiomError::InvalidLexicon(format!(
            "{what} {term:?} must be lowercase"
        )));
    }
    Ok(())
}
