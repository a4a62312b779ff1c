// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Specification sentences of the built-in catalog, and the verifier's failure reporting.

use attune_aria::{ActionName, AttrName, Key, KeyAction, Slot};
use attune_behavior::catalog::{self, CatalogEntry};
use attune_behavior::{ActionMap, AttributeMap, BehaviorProps, ResolvedBehavior};
use attune_conformance::{LineOutcome, Verifier, VerifyError};
use pretty_assertions::assert_eq;

fn entry(
    behavior: fn(&BehaviorProps) -> ResolvedBehavior,
    specification: &'static [&'static str],
) -> CatalogEntry {
    CatalogEntry {
        name: "fixture_behavior",
        behavior,
        description: &["A fixture."],
        specification,
    }
}

fn errors(outcome: LineOutcome) -> Vec<VerifyError> {
    match outcome {
        LineOutcome::Failed(errors) => errors,
        other => panic!("expected a failure, got {other:?}"),
    }
}

#[test]
fn every_catalog_sentence_holds() {
    let verifier = Verifier::new().unwrap();
    let mut failed = Vec::new();
    let mut sentences = 0;
    for entry in catalog::entries() {
        let report = verifier.verify(entry);
        sentences += report.lines.len();
        if !report.is_success() {
            failed.push(report.to_string());
        }
    }
    assert!(failed.is_empty(), "{}", failed.join("\n"));
    assert!(sentences > 100, "only {sentences} sentences checked");
}

#[test]
fn catalog_sentences_are_all_recognized() {
    let verifier = Verifier::new().unwrap();
    for entry in catalog::entries() {
        let report = verifier.verify(entry);
        let untested: Vec<_> = report.untested().map(|line| line.sentence).collect();
        assert!(untested.is_empty(), "{}: {untested:?}", entry.name);
    }
}

fn plain_menu(_: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_attributes(
        Slot::ROOT,
        AttributeMap::new().with(AttrName::ROLE, "menu"),
    )
}

#[test]
fn wrong_role_is_a_mismatch() {
    let verifier = Verifier::new().unwrap();
    let fixture = entry(plain_menu, &[]);
    let errors = errors(verifier.verify_sentence(&fixture, "Adds role='listbox'."));
    assert_eq!(errors.len(), 1);
    assert!(
        matches!(
            &errors[0],
            VerifyError::Mismatch { expected, actual, .. } if expected == "'listbox'" && actual == "'menu'"
        ),
        "{errors:?}"
    );
}

#[test]
fn unrecognized_sentence_fails_the_report() {
    let verifier = Verifier::new().unwrap();
    let fixture = entry(plain_menu, &["Adds role='menu'.", "Makes the menu pleasant."]);
    let report = verifier.verify(&fixture);
    assert!(!report.is_success());
    assert_eq!(report.failures().count(), 0);
    let untested: Vec<_> = report.untested().map(|line| line.sentence).collect();
    assert_eq!(untested, ["Makes the menu pleasant."]);
}

#[test]
fn missing_slot_and_zone_are_reported() {
    let verifier = Verifier::new().unwrap();
    let fixture = entry(plain_menu, &[]);

    let errors_slot = errors(verifier.verify_sentence(
        &fixture,
        "Adds attribute 'tabIndex=0' to 'anchor' slot.",
    ));
    assert!(
        matches!(&errors_slot[0], VerifyError::MissingSlot { slot, .. } if slot == "anchor"),
        "{errors_slot:?}"
    );

    let errors_zone = errors(verifier.verify_sentence(&fixture, "Embeds component into FocusZone."));
    assert!(
        matches!(errors_zone[0], VerifyError::MissingFocusZone { .. }),
        "{errors_zone:?}"
    );
}

fn clicky(_: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_key_actions(
        Slot::ROOT,
        ActionMap::new().with(
            ActionName::PERFORM_CLICK,
            KeyAction::on([Key::SPACEBAR, Key::ENTER]),
        ),
    )
}

#[test]
fn key_order_and_names_are_checked() {
    let verifier = Verifier::new().unwrap();
    let fixture = entry(clicky, &[]);

    let swapped = errors(verifier.verify_sentence(
        &fixture,
        "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'root'.",
    ));
    assert!(matches!(swapped[0], VerifyError::Mismatch { .. }), "{swapped:?}");

    let unknown = errors(verifier.verify_sentence(
        &fixture,
        "Triggers 'performClick' action with 'Return' on 'root'.",
    ));
    assert!(
        matches!(&unknown[0], VerifyError::UnknownKey(name) if name == "Return"),
        "{unknown:?}"
    );

    let missing = errors(verifier.verify_sentence(
        &fixture,
        "Triggers 'closeAllMenus' action with 'Escape' on 'root'.",
    ));
    assert!(
        matches!(&missing[0], VerifyError::MissingKeyAction { action, .. } if action == "closeAllMenus"),
        "{missing:?}"
    );

    assert!(
        verifier
            .verify_sentence(
                &fixture,
                "Triggers 'performClick' action with 'Spacebar' or 'Enter' on 'root'.",
            )
            .is_passed()
    );
}

/// Escape always bound on the wrapper, even with the submenu closed.
fn never_disabled(_: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_key_actions(
        Slot::WRAPPER,
        ActionMap::new().with(
            ActionName::from_static("closeMenuAndFocusTrigger"),
            KeyAction::on([Key::ESCAPE]),
        ),
    )
}

#[test]
fn closed_submenu_needs_the_disabled_sentinel() {
    let verifier = Verifier::new().unwrap();
    let fixture = entry(never_disabled, &[]);
    let errors = errors(verifier.verify_sentence(
        &fixture,
        "Triggers 'closeMenuAndFocusTrigger' action with 'Escape' on 'wrapper', when toolbar button has submenu and it is opened.",
    ));
    assert!(
        matches!(&errors[0], VerifyError::Mismatch { expected, .. } if expected == "disabled"),
        "{errors:?}"
    );
}

/// Reports `aria-expanded` whether or not there is a submenu.
fn always_expanded(props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_attributes(
        Slot::ROOT,
        AttributeMap::new().with(AttrName::ARIA_EXPANDED, props.flag("menuOpen")),
    )
}

#[test]
fn precondition_prop_must_gate_the_attribute() {
    let verifier = Verifier::new().unwrap();
    let fixture = entry(always_expanded, &[]);
    let errors = errors(verifier.verify_sentence(
        &fixture,
        "Adds attribute 'aria-expanded=true' based on the property 'menuOpen' if the component has 'menu' property to 'root' slot.",
    ));
    assert!(
        matches!(&errors[0], VerifyError::Mismatch { expected, .. } if expected == "undefined"),
        "{errors:?}"
    );
}

#[test]
fn numeric_literals_match_fractional_values() {
    let verifier = Verifier::new().unwrap();
    let slider = catalog::find("slider_behavior").unwrap();
    assert!(
        verifier
            .verify_sentence(
                slider,
                "Adds attribute 'aria-valuenow=5' based on the property 'value' to 'input' slot.",
            )
            .is_passed()
    );
}
