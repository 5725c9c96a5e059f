//! End-to-end detection and scoring over the sample descriptions.

use axiom_core::{Role, StructuralAnalyzer, SAMPLE_DESCRIPTIONS};

fn analyzer() -> StructuralAnalyzer {
    StructuralAnalyzer::standard().expect("built-in configuration is valid")
}

#[test]
fn neurons_form_memories() {
    let report = analyzer().analyze("Neurons process information to form memories");
    assert_eq!(
        report.symbols,
        vec![Role::Processing, Role::Imprint, Role::Emergence]
    );
    assert_eq!(report.score, 0.43);
    assert_eq!(report.glyphs(), "█┴┬");
}

#[test]
fn empty_text_yields_empty_report() {
    let report = analyzer().analyze("");
    assert!(report.symbols.is_empty());
    assert!(report.present_core_roles.is_empty());
    assert_eq!(report.missing_core_roles.len(), 8);
    assert_eq!(report.score, 0.0);
}

#[test]
fn all_core_keywords_are_structurally_complete() {
    let report = analyzer().analyze(
        "Start the flow, process and store the signal, form a shell to contain it, cycle and return",
    );
    assert_eq!(
        report.symbols,
        vec![
            Role::Initiation,
            Role::Flow,
            Role::Processing,
            Role::Imprint,
            Role::Emergence,
            Role::Containment,
            Role::Recurrence,
            Role::Return,
        ]
    );
    assert!(report.is_complete());
    assert_eq!(report.score, 1.0);
}

#[test]
fn big_bang_detects_initiation_and_emergence() {
    let report = analyzer().analyze("The big bang created the universe which evolved life");
    // "evolved" is not covered by the built-in lexicon.
    assert_eq!(report.symbols, vec![Role::Initiation, Role::Emergence]);
    assert_eq!(report.score, 0.258);
}

#[test]
fn energy_flows_through_ecosystems() {
    let report = analyzer().analyze(SAMPLE_DESCRIPTIONS[1]);
    assert_eq!(report.symbols, vec![Role::Flow, Role::Processing]);
    assert_eq!(report.score, 0.29);
}

#[test]
fn electrons_orbit_nucleus() {
    let report = analyzer().analyze(SAMPLE_DESCRIPTIONS[2]);
    assert_eq!(
        report.symbols,
        vec![
            Role::Initiation,
            Role::Flow,
            Role::Emergence,
            Role::Containment
        ]
    );
    assert_eq!(report.score, 0.495);
}

#[test]
fn water_cycles() {
    let report = analyzer().analyze(SAMPLE_DESCRIPTIONS[3]);
    assert_eq!(report.symbols, vec![Role::Recurrence]);
    assert_eq!(report.score, 0.118);
}

#[test]
fn quantum_potential_has_no_core_roles() {
    let report = analyzer().analyze(SAMPLE_DESCRIPTIONS[5]);
    assert_eq!(report.symbols, vec![Role::Potential]);
    assert!(report.present_core_roles.is_empty());
    assert_eq!(report.score, 0.0);
}

#[test]
fn chemical_bonds_put_non_canonical_role_last() {
    let report = analyzer().analyze(SAMPLE_DESCRIPTIONS[6]);
    assert_eq!(report.symbols, vec![Role::Emergence, Role::Connection]);
    assert_eq!(report.score, 0.151);
}

#[test]
fn detection_is_deterministic() {
    let a = analyzer();
    for text in SAMPLE_DESCRIPTIONS {
        let first = a.detector().detect(text);
        for _ in 0..5 {
            assert_eq!(a.detector().detect(text), first);
        }
    }
}

#[test]
fn detection_never_repeats_a_role() {
    let a = analyzer();
    // Several keywords per role, all present.
    let text = "start begin initiate source origin flow stream move travel loop cycle repeat";
    let roles = a.detector().detect(text);
    let mut deduped = roles.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(roles.len(), deduped.len());
    assert_eq!(roles, vec![Role::Initiation, Role::Flow, Role::Recurrence]);
}

#[test]
fn canonical_order_ignores_word_order() {
    let a = analyzer();
    let forward = a.detector().detect("begin then flow then recover");
    let backward = a.detector().detect("recover then flow then begin");
    assert_eq!(forward, backward);
    assert_eq!(forward, vec![Role::Initiation, Role::Flow, Role::Return]);
}

#[test]
fn unknown_vocabulary_is_a_silent_false_negative() {
    let report = analyzer().analyze("Glaciers grind valleys over millennia");
    assert!(report.symbols.is_empty());
    assert_eq!(report.score, 0.0);
}
