//! Exhaustive checks of the completeness score over every subset of the
//! built-in core roles.

use std::collections::BTreeSet;

use axiom_core::{CompletenessScorer, CoreWeights, Role};

fn core_roles() -> Vec<Role> {
    CoreWeights::builtin().roles().collect()
}

/// Roles selected by the bits of `mask`.
fn subset(mask: u32) -> Vec<Role> {
    core_roles()
        .into_iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, r)| r)
        .collect()
}

const FULL: u32 = (1 << 8) - 1;

#[test]
fn score_is_bounded_for_every_subset() {
    let scorer = CompletenessScorer::standard().unwrap();
    for mask in 0..=FULL {
        let score = scorer.score(&subset(mask)).score;
        assert!((0.0..=1.0).contains(&score), "mask {mask:#b} → {score}");
    }
}

#[test]
fn present_and_missing_partition_the_core_set() {
    let scorer = CompletenessScorer::standard().unwrap();
    let core: BTreeSet<Role> = core_roles().into_iter().collect();
    for mask in 0..=FULL {
        let report = scorer.score(&subset(mask));
        assert!(report
            .present_core_roles
            .is_disjoint(&report.missing_core_roles));
        let union: BTreeSet<Role> = report
            .present_core_roles
            .union(&report.missing_core_roles)
            .copied()
            .collect();
        assert_eq!(union, core);
    }
}

#[test]
fn score_is_one_exactly_when_nothing_is_missing() {
    let scorer = CompletenessScorer::standard().unwrap();
    for mask in 0..=FULL {
        let report = scorer.score(&subset(mask));
        assert_eq!(report.score == 1.0, mask == FULL, "mask {mask:#b}");
    }
}

#[test]
fn score_is_zero_exactly_when_no_core_role_is_present() {
    let scorer = CompletenessScorer::standard().unwrap();
    for mask in 0..=FULL {
        let report = scorer.score(&subset(mask));
        assert_eq!(report.score == 0.0, mask == 0, "mask {mask:#b}");
    }
}

#[test]
fn missing_more_never_scores_higher() {
    let scorer = CompletenessScorer::standard().unwrap();
    // Missing sets are complements of present sets: missing(a) ⊂ missing(b)
    // iff present(b) ⊂ present(a).
    for a in 0..=FULL {
        for b in 0..=FULL {
            if b & !a == 0 {
                let score_a = scorer.score(&subset(a)).score;
                let score_b = scorer.score(&subset(b)).score;
                assert!(
                    score_b <= score_a,
                    "present {b:#b} ⊆ {a:#b} but {score_b} > {score_a}"
                );
            }
        }
    }
}

#[test]
fn input_order_does_not_change_the_score() {
    let scorer = CompletenessScorer::standard().unwrap();
    let mut roles = subset(0b1011_0101);
    let forward = scorer.score(&roles);
    roles.reverse();
    let backward = scorer.score(&roles);
    assert_eq!(forward.score, backward.score);
    assert_eq!(forward.present_core_roles, backward.present_core_roles);
    assert_eq!(forward.missing_core_roles, backward.missing_core_roles);
}
