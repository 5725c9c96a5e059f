//! Role detection: maps free text onto the ordered set of structural roles it
//! mentions.
//!
//! Every keyword is matched in three tiers, any one of which is sufficient:
//!
//! 1. the keyword itself as a whole word;
//! 2. any irregular surface form registered for it in the lexicon;
//! 3. the keyword followed by one of the lexicon suffixes.
//!
//! All patterns are compiled once in [`RoleDetector::new`]. Detection itself
//! is a pure function of the input text.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::obs;
use crate::role::{Role, CANONICAL_FLOW};

/// Which matching tier recognised a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Variation,
    Suffix,
}

/// Why a role was detected: the first keyword that matched and the surface
/// form found in the (lowercased) text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEvidence {
    pub role: Role,
    pub keyword: String,
    pub tier: MatchTier,
    pub surface: String,
}

/// Compiled whole-word patterns for one keyword.
#[derive(Debug, Clone)]
struct KeywordMatcher {
    keyword: String,
    exact: Regex,
    variation: Option<Regex>,
    suffixed: Option<Regex>,
}

impl KeywordMatcher {
    fn compile(keyword: &str, lexicon: &Lexicon) -> Result<Self> {
        let variations: Vec<String> = lexicon.variations_of(keyword).to_vec();
        let suffixed: Vec<String> = lexicon
            .suffixes
            .iter()
            .map(|suffix| format!("{keyword}{suffix}"))
            .collect();

        Ok(Self {
            keyword: keyword.to_string(),
            exact: whole_word_pattern(&[keyword.to_string()])?,
            variation: optional_pattern(&variations)?,
            suffixed: optional_pattern(&suffixed)?,
        })
    }

    fn is_match(&self, text: &str) -> bool {
        self.exact.is_match(text)
            || self.variation.as_ref().is_some_and(|re| re.is_match(text))
            || self.suffixed.as_ref().is_some_and(|re| re.is_match(text))
    }

    fn find(&self, text: &str) -> Option<(MatchTier, String)> {
        let tiers = [
            (MatchTier::Exact, Some(&self.exact)),
            (MatchTier::Variation, self.variation.as_ref()),
            (MatchTier::Suffix, self.suffixed.as_ref()),
        ];
        tiers.into_iter().find_map(|(tier, re)| {
            re.and_then(|re| re.find(text))
                .map(|m| (tier, m.as_str().to_string()))
        })
    }
}

/// `\b(?:a|b|c)\b` over the escaped alternatives.
fn whole_word_pattern(alternatives: &[String]) -> Result<Regex> {
    let body = alternatives
        .iter()
        .map(|alt| regex::escape(alt))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Regex::new(&format!(r"\b(?:{body})\b"))?)
}

fn optional_pattern(alternatives: &[String]) -> Result<Option<Regex>> {
    if alternatives.is_empty() {
        Ok(None)
    } else {
        whole_word_pattern(alternatives).map(Some)
    }
}

#[derive(Debug, Clone)]
struct RoleMatchers {
    role: Role,
    keywords: Vec<KeywordMatcher>,
}

/// Detects structural roles in free text.
#[derive(Debug, Clone)]
pub struct RoleDetector {
    entries: Vec<RoleMatchers>,
    lexicon: Lexicon,
}

impl RoleDetector {
    /// Validate `lexicon` and compile its keyword patterns.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        lexicon.validate()?;

        let entries = lexicon
            .roles
            .iter()
            .map(|entry| -> Result<RoleMatchers> {
                let keywords = entry
                    .keywords
                    .iter()
                    .map(|kw| KeywordMatcher::compile(kw, &lexicon))
                    .collect::<Result<Vec<_>>>()?;
                Ok(RoleMatchers {
                    role: entry.role,
                    keywords,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let keyword_count = entries.iter().map(|e| e.keywords.len()).sum();
        obs::emit_lexicon_loaded(entries.len(), keyword_count, lexicon.suffixes.len());

        Ok(Self { entries, lexicon })
    }

    /// Detector over [`Lexicon::builtin`].
    pub fn standard() -> Result<Self> {
        Self::new(Lexicon::builtin())
    }

    /// The lexicon this detector was built from.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Detect the roles present in `text`.
    ///
    /// The result holds each role at most once: canonical-flow roles first in
    /// canonical order, then any other detected roles in lexicon registration
    /// order. Text without any recognised keyword yields an empty vector.
    pub fn detect(&self, text: &str) -> Vec<Role> {
        let lowered = text.to_lowercase();
        let found: Vec<Role> = self
            .entries
            .iter()
            .filter(|entry| entry.keywords.iter().any(|kw| kw.is_match(&lowered)))
            .map(|entry| entry.role)
            .collect();

        let ordered = order_canonically(&found);
        obs::emit_roles_detected(text.len(), &ordered);
        ordered
    }

    /// Like [`detect`](Self::detect), but reports which keyword triggered each
    /// role. Evidence is returned in the same order as `detect`.
    pub fn explain(&self, text: &str) -> Vec<RoleEvidence> {
        let lowered = text.to_lowercase();
        let evidence: Vec<RoleEvidence> = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry.keywords.iter().find_map(|kw| {
                    kw.find(&lowered).map(|(tier, surface)| RoleEvidence {
                        role: entry.role,
                        keyword: kw.keyword.clone(),
                        tier,
                        surface,
                    })
                })
            })
            .collect();

        let roles: Vec<Role> = evidence.iter().map(|e| e.role).collect();
        order_canonically(&roles)
            .into_iter()
            .filter_map(|role| evidence.iter().find(|e| e.role == role).cloned())
            .collect()
    }
}

/// Reorder `roles`: members of [`CANONICAL_FLOW`] first in canonical order,
/// then the rest in their given order. Duplicates are dropped.
pub fn order_canonically(roles: &[Role]) -> Vec<Role> {
    let mut ordered: Vec<Role> = CANONICAL_FLOW
        .iter()
        .copied()
        .filter(|role| roles.contains(role))
        .collect();

    for role in roles {
        if role.canonical_rank().is_none() && !ordered.contains(role) {
            ordered.push(*role);
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::RoleKeywords;

    fn detector() -> RoleDetector {
        RoleDetector::standard().unwrap()
    }

    #[test]
    fn test_exact_whole_word_match() {
        assert_eq!(detector().detect("the current"), vec![Role::Flow]);
    }

    #[test]
    fn test_substring_is_not_a_match() {
        // "information" contains "form" but is a different word.
        assert!(detector().detect("information").is_empty());
        assert!(detector().detect("reformed").is_empty());
    }

    #[test]
    fn test_variation_match() {
        assert_eq!(detector().detect("memories"), vec![Role::Imprint]);
        assert_eq!(detector().detect("cyclical"), vec![Role::Recurrence]);
    }

    #[test]
    fn test_suffix_match() {
        assert_eq!(detector().detect("streaming"), vec![Role::Flow]);
        assert_eq!(detector().detect("restricted"), vec![Role::Containment]);
        assert_eq!(detector().detect("developments"), Vec::<Role>::new());
        assert_eq!(detector().detect("development"), vec![Role::Emergence]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(detector().detect("FLOW"), vec![Role::Flow]);
        assert_eq!(detector().detect("Big Bang"), vec![Role::Initiation]);
    }

    #[test]
    fn test_punctuation_is_a_word_boundary() {
        assert_eq!(detector().detect("(loop)."), vec![Role::Recurrence]);
    }

    #[test]
    fn test_shared_keyword_signals_multiple_roles() {
        assert_eq!(
            detector().detect("orbit"),
            vec![Role::Flow, Role::Containment]
        );
    }

    #[test]
    fn test_canonical_roles_precede_others() {
        let roles = detector().detect("a unique network that starts");
        assert_eq!(
            roles,
            vec![Role::Initiation, Role::Identity, Role::Connection]
        );
    }

    #[test]
    fn test_empty_text_detects_nothing() {
        assert!(detector().detect("").is_empty());
    }

    #[test]
    fn test_order_canonically_dedups_and_sorts() {
        let ordered = order_canonically(&[
            Role::Connection,
            Role::Return,
            Role::Initiation,
            Role::Connection,
            Role::Identity,
        ]);
        assert_eq!(
            ordered,
            vec![
                Role::Initiation,
                Role::Return,
                Role::Connection,
                Role::Identity
            ]
        );
    }

    #[test]
    fn test_custom_lexicon_registration_order_drives_tail() {
        let lexicon = Lexicon {
            roles: vec![
                RoleKeywords {
                    role: Role::Synchronization,
                    keywords: vec!["sync".to_string()],
                },
                RoleKeywords {
                    role: Role::Focus,
                    keywords: vec!["focus".to_string()],
                },
            ],
            variations: Default::default(),
            suffixes: vec![],
        };
        let detector = RoleDetector::new(lexicon).unwrap();
        assert_eq!(
            detector.detect("focus then sync"),
            vec![Role::Synchronization, Role::Focus]
        );
        // No suffixes configured, so inflected forms do not match.
        assert!(detector.detect("syncing").is_empty());
    }

    #[test]
    fn test_explain_reports_tier_and_surface() {
        let evidence = detector().explain("Neurons process information to form memories");
        let imprint = evidence
            .iter()
            .find(|e| e.role == Role::Imprint)
            .expect("imprint detected");
        assert_eq!(imprint.keyword, "memory");
        assert_eq!(imprint.tier, MatchTier::Variation);
        assert_eq!(imprint.surface, "memories");

        let processing = evidence
            .iter()
            .find(|e| e.role == Role::Processing)
            .expect("processing detected");
        assert_eq!(processing.tier, MatchTier::Exact);
    }

    #[test]
    fn test_explain_agrees_with_detect() {
        let d = detector();
        let text = "Electrons orbit nucleus creating stable atoms";
        let from_explain: Vec<Role> = d.explain(text).iter().map(|e| e.role).collect();
        assert_eq!(from_explain, d.detect(text));
    }

    #[test]
    fn test_suffix_tier_evidence() {
        let evidence = detector().explain("heartbeats");
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].tier, MatchTier::Suffix);
        assert_eq!(evidence[0].surface, "heartbeats");
    }
}
