//! Core role vocabulary: the closed set of structural roles and the canonical
//! flow sequence.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AxiomError;

/// A structural role a system description can exhibit.
///
/// The first eight variants are declared in canonical-flow order, so the
/// derived `Ord` agrees with [`CANONICAL_FLOW`] for those roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Initiation,
    Flow,
    Processing,
    Imprint,
    Emergence,
    Containment,
    Recurrence,
    Return,
    Potential,
    RawForce,
    Focus,
    Manifestation,
    Domain,
    Emission,
    Guidance,
    Connection,
    Synchronization,
    Identity,
}

/// Canonical order in which flow roles are reported.
pub const CANONICAL_FLOW: [Role; 8] = [
    Role::Initiation,
    Role::Flow,
    Role::Processing,
    Role::Imprint,
    Role::Emergence,
    Role::Containment,
    Role::Recurrence,
    Role::Return,
];

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 18] = [
        Role::Initiation,
        Role::Flow,
        Role::Processing,
        Role::Imprint,
        Role::Emergence,
        Role::Containment,
        Role::Recurrence,
        Role::Return,
        Role::Potential,
        Role::RawForce,
        Role::Focus,
        Role::Manifestation,
        Role::Domain,
        Role::Emission,
        Role::Guidance,
        Role::Connection,
        Role::Synchronization,
        Role::Identity,
    ];

    /// Display glyph for this role.
    pub fn glyph(self) -> &'static str {
        match self {
            Role::Initiation => "│",
            Role::Potential => "¬",
            Role::Flow => "⌒",
            Role::Processing => "█",
            Role::RawForce => "┼",
            Role::Imprint => "┴",
            Role::Containment => "—",
            Role::Recurrence => "┘",
            Role::Emergence => "┬",
            Role::Return => "⌑",
            Role::Focus => "◆",
            Role::Manifestation => "┌",
            Role::Domain => "└",
            Role::Emission => "┐",
            Role::Guidance => "├",
            Role::Connection => "┤",
            Role::Synchronization => "≡",
            Role::Identity => "⟦⟧",
        }
    }

    /// Stable snake_case name, identical to the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Role::Initiation => "initiation",
            Role::Flow => "flow",
            Role::Processing => "processing",
            Role::Imprint => "imprint",
            Role::Emergence => "emergence",
            Role::Containment => "containment",
            Role::Recurrence => "recurrence",
            Role::Return => "return",
            Role::Potential => "potential",
            Role::RawForce => "raw_force",
            Role::Focus => "focus",
            Role::Manifestation => "manifestation",
            Role::Domain => "domain",
            Role::Emission => "emission",
            Role::Guidance => "guidance",
            Role::Connection => "connection",
            Role::Synchronization => "synchronization",
            Role::Identity => "identity",
        }
    }

    /// Position in [`CANONICAL_FLOW`], or `None` for roles outside it.
    pub fn canonical_rank(self) -> Option<usize> {
        CANONICAL_FLOW.iter().position(|r| *r == self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Role {
    type Err = AxiomError;

    /// Accepts a role name (case-insensitive, `-` or `_` separated) or its glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_lowercase().replace('-', "_");
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.name() == normalized || r.glyph() == trimmed)
            .ok_or_else(|| AxiomError::UnknownRole(s.to_string()))
    }
}

/// Concatenate the glyphs of `roles` in order.
pub fn render_glyphs(roles: &[Role]) -> String {
    roles.iter().map(|r| r.glyph()).collect()
}
