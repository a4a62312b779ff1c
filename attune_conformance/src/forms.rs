// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sentence grammar: one pattern per sentence form, each with the check it stands for.
//!
//! Quoted names in a sentence are the prop, slot, attribute, action and key names the check
//! evaluates the behavior with. Values quoted after `=` go through [`literal`].

use attune_aria::AttrValue;
use attune_behavior::{BehaviorProps, PropValue};
use attune_focus::{FocusZoneDirection, FocusZoneMode, FocusZoneTabbableElements};
use regex::Captures;

use crate::error::VerifyError;
use crate::subject::Subject;
use crate::value::{literal, negated, prop_value};

pub(crate) type Check = fn(&Subject<'_>, &Captures<'_>) -> Result<(), VerifyError>;

/// A sentence form.
#[derive(Debug)]
pub(crate) struct Form {
    pub(crate) name: &'static str,
    pub(crate) pattern: &'static str,
    pub(crate) check: Check,
}

const fn form(name: &'static str, pattern: &'static str, check: Check) -> Form {
    Form {
        name,
        pattern,
        check,
    }
}

pub(crate) const FORMS: &[Form] = &[
    form(
        "attribute-from-prop",
        r"Adds attribute '([\w-]+)=(\w+)' based on the property '(\w+)'\.",
        attribute_from_prop,
    ),
    form("role", r"Adds role='(\w+)'\.", role),
    form("slot-role", r"Adds role '(\w+)' to '([\w-]+)' slot", slot_role),
    form(
        "slot-attribute",
        r"Adds attribute '([\w-]+)=([\w\d]+)' to '([\w-]+)' slot\.",
        slot_attribute,
    ),
    form(
        "attribute-from-prop-if-present",
        r"Adds attribute '([\w-]+)=([\w\d]+)' based on the property '([\w-]+)' if the component has '([\w-]+)' property to '([\w-]+)' slot\.",
        attribute_from_prop_if_present,
    ),
    form(
        "slot-attribute-from-prop",
        r"Adds attribute '([\w-]+)=*([\w-]*)' based on the property '([\w-]+)' to '([\w-]+)' slot\.",
        slot_attribute_from_prop,
    ),
    form(
        "overridable-slot-attribute",
        r"Adds attribute '([\w-]+)=([\w\d]+)' to '([\w-]+)' slot based on the property '([\w-]+)'\. This can be overriden by providing '[\w-]+' property directly to the component\.",
        overridable_slot_attribute,
    ),
    form(
        "overridable-attribute",
        r"Adds attribute '([\w-]+)=([\w\d]+)' based on the property '([\w-]+)'\. This can be overriden by providing '[\w-]+' property directly to the component\.",
        overridable_attribute,
    ),
    form(
        "attribute-if-true",
        r"Adds attribute '([\w-]+)=([\w\d]+)' to '([\w-]+)' slot if '([\w-]+)' property is true\. Does not set the attribute otherwise\.",
        attribute_if_true,
    ),
    form(
        "attribute-if-true-else",
        r"Adds attribute '([\w-]+)=([\w\d]+)' to '([\w-]+)' slot if '([\w-]+)' property is true\. Sets the attribute to '([\w\d]+)' otherwise\.",
        attribute_if_true_else,
    ),
    form(
        "attribute-if-set",
        r"Adds attribute '([\w-]+)=([\w\d]+)' to '([\w-]+)' slot if '([\w-]+)' property is set\.",
        attribute_if_set,
    ),
    form(
        "attribute-unless-provided",
        r"Adds attribute '([\w-]+)=(\w+)', if there is no '([\w-]+)' property provided\.",
        attribute_unless_provided,
    ),
    form(
        "attribute-from-prop-with",
        r"Adds attribute '([\w-]+)=(\w+)' based on the property '(\w+)' if the component has '(\w+)' property\.",
        attribute_from_prop_with,
    ),
    form(
        "role-unless-element",
        r"Adds role='(\w+)' if element type is other than '(\w+)'\.",
        role_unless_element,
    ),
    form(
        "attribute-unless-element",
        r"Adds attribute '([\w-]+)=([\w\d]+)' if element type is other than '(\w+)'\.",
        attribute_unless_element,
    ),
    form("zone-embed", r"Embeds component into FocusZone\.", zone_embed),
    form("zone-wrap", r"Wraps component in FocusZone\.", zone_wrap),
    form(
        "zone-horizontal",
        r"arrow key navigation in horizontal direction",
        zone_horizontal,
    ),
    form(
        "zone-vertical",
        r"arrow key navigation in vertical direction",
        zone_vertical,
    ),
    form(
        "zone-bidirectional",
        r"arrow key navigation in bidirectional direction",
        zone_bidirectional,
    ),
    form(
        "zone-bidirectional-dom-order",
        r"arrow key navigation in bidirectionalDomOrder direction",
        zone_bidirectional_dom_order,
    ),
    form("zone-circular", r"Keyboard navigation is circular", zone_circular),
    form(
        "zone-vertical-prop",
        r".'vertical' prop is used.*vertical direction",
        zone_vertical_prop,
    ),
    form(
        "zone-reset-on-tab",
        r"Focused active element of the component is reset when TAB from the component",
        zone_reset_on_tab,
    ),
    form(
        "zone-default-tabbable",
        r"Focus is set initially on the specified default tabbable element",
        zone_default_tabbable,
    ),
    form(
        "zone-enter-inner",
        r"Focus can be moved inside a child component with embeded inner FocusZone by pressing a specified key",
        zone_enter_inner,
    ),
    form(
        "zone-tab-key",
        r"Focus is moved within the focusable children of the component using TAB key",
        zone_tab_key,
    ),
    form(
        "zone-focus-on-mount",
        r"Component will get focus when mounted",
        zone_focus_on_mount,
    ),
    form(
        "zone-focus-inner",
        r".container element receives focus.*focus .*set .*default focusable child element",
        zone_focus_inner,
    ),
    form(
        "keys-pair",
        r"Triggers '(\w+)' action with '(\S+)' or '(\S+)' on '(\w+)'\.",
        keys_pair,
    ),
    form(
        "keys",
        r"Triggers '(\w+)' action with '(\S+)' on '(\w+)'\.",
        keys,
    ),
    form(
        "keys-horizontal",
        r"Triggers '(\w+)' action with '(\w+)' on '([\w-]+)', when orientation is horizontal\.",
        keys_horizontal,
    ),
    form(
        "keys-vertical",
        r"Triggers '(\w+)' action with '(\w+)' on '([\w-]+)', when orientation is vertical\.",
        keys_vertical,
    ),
    form(
        "keys-opened-subtree",
        r"Triggers '(\w+)' action with '(\w+)' on '([\w-]+)', when has an opened subtree\.",
        keys_opened_subtree,
    ),
    form(
        "keys-closed-subtree",
        r"Triggers '(\w+)' action with '(\w+)' on '([\w-]+)', when has a closed subtree\.",
        keys_closed_subtree,
    ),
    form(
        "keys-open-submenu",
        r"Triggers '(\w+)' action with '(\w+)' on '([\w-]+)', when toolbar button has submenu and it is opened\.",
        keys_open_submenu,
    ),
    form(
        "keys-pair-open-submenu",
        r"Triggers '(\w+)' action with '(\w+)' or '(\w+)' on '([\w-]+)', when toolbar button has submenu and it is opened\.",
        keys_pair_open_submenu,
    ),
    form("roving-tab-index", r"Implements roving tabIndex\.", roving_tab_index),
];

/// The first `N` capture groups; a group that did not participate reads as empty.
fn groups<'h, const N: usize>(caps: &Captures<'h>) -> [&'h str; N] {
    core::array::from_fn(|i| caps.get(i + 1).map_or("", |m| m.as_str()))
}

fn props_with(name: &str, value: impl Into<PropValue>) -> BehaviorProps {
    BehaviorProps::new().with(name.to_owned(), value)
}

fn text(value: &str) -> AttrValue {
    AttrValue::from(value.to_owned())
}

fn attribute_from_prop(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [attribute, value, prop] = groups::<3>(caps);
    let expected = literal(value);
    let props = props_with(prop, prop_value(&expected));
    subject.expect_attribute(&props, "root", attribute, Some(&expected))
}

fn role(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [role] = groups::<1>(caps);
    subject.expect_attribute(&BehaviorProps::new(), "root", "role", Some(&text(role)))
}

fn slot_role(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [role, slot] = groups::<2>(caps);
    subject.expect_attribute(&BehaviorProps::new(), slot, "role", Some(&text(role)))
}

fn slot_attribute(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [attribute, value, slot] = groups::<3>(caps);
    subject.expect_attribute(&BehaviorProps::new(), slot, attribute, Some(&literal(value)))
}

/// The attribute follows `based_on` while `depends_on` is present, is undefined without
/// `depends_on`, and reads `false` when only `based_on` is missing.
fn attribute_from_prop_if_present(
    subject: &Subject<'_>,
    caps: &Captures<'_>,
) -> Result<(), VerifyError> {
    let [attribute, value, based_on, depends_on, slot] = groups::<5>(caps);
    let items = || PropValue::List(vec![PropValue::object(), PropValue::object()]);

    let mut props = props_with(depends_on, items()).with(based_on.to_owned(), true);
    subject.expect_attribute(&props, slot, attribute, Some(&literal(value)))?;

    props.remove(depends_on);
    subject.expect_attribute(&props, slot, attribute, None)?;

    props.set(depends_on.to_owned(), items());
    props.remove(based_on);
    subject.expect_attribute(&props, slot, attribute, Some(&AttrValue::Bool(false)))
}

fn slot_attribute_from_prop(
    subject: &Subject<'_>,
    caps: &Captures<'_>,
) -> Result<(), VerifyError> {
    let [attribute, value, prop, slot] = groups::<4>(caps);
    let expected = if value.is_empty() {
        AttrValue::from("value of property")
    } else {
        literal(value)
    };
    let props = props_with(prop, prop_value(&expected));
    subject.expect_attribute(&props, slot, attribute, Some(&expected))
}

fn overridable_slot_attribute(
    subject: &Subject<'_>,
    caps: &Captures<'_>,
) -> Result<(), VerifyError> {
    let [attribute, value, slot, prop] = groups::<4>(caps);
    let expected = literal(value);
    let props = props_with(prop, prop_value(&expected));
    subject.expect_attribute(&props, slot, attribute, Some(&expected))
}

fn overridable_attribute(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [attribute, value, prop] = groups::<3>(caps);
    let expected = literal(value);
    let props = props_with(prop, prop_value(&expected));
    subject.expect_attribute(&props, "root", attribute, Some(&expected))
}

/// Without `prop` the attribute reads `otherwise`; with `prop` set to `driver` it reads
/// `value`.
fn conditional_attribute(
    subject: &Subject<'_>,
    slot: &str,
    attribute: &str,
    prop: &str,
    driver: PropValue,
    value: &str,
    otherwise: Option<&AttrValue>,
) -> Result<(), VerifyError> {
    subject.expect_attribute(&BehaviorProps::new(), slot, attribute, otherwise)?;
    let props = props_with(prop, driver);
    subject.expect_attribute(&props, slot, attribute, Some(&literal(value)))
}

fn attribute_if_true(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [attribute, value, slot, prop] = groups::<4>(caps);
    conditional_attribute(subject, slot, attribute, prop, true.into(), value, None)
}

fn attribute_if_true_else(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [attribute, value, slot, prop, otherwise] = groups::<5>(caps);
    let otherwise = literal(otherwise);
    conditional_attribute(
        subject,
        slot,
        attribute,
        prop,
        true.into(),
        value,
        Some(&otherwise),
    )
}

fn attribute_if_set(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [attribute, value, slot, prop] = groups::<4>(caps);
    conditional_attribute(
        subject,
        slot,
        attribute,
        prop,
        "custom-value".into(),
        value,
        None,
    )
}

fn attribute_unless_provided(
    subject: &Subject<'_>,
    caps: &Captures<'_>,
) -> Result<(), VerifyError> {
    let [attribute, value, prop] = groups::<3>(caps);
    subject.expect_attribute(
        &BehaviorProps::new(),
        "root",
        attribute,
        Some(&literal(value)),
    )?;
    subject.expect_attribute(&props_with(prop, "mockText"), "root", attribute, None)
}

/// The attribute follows `first` in both directions while `second` is present and is
/// undefined without `second`.
fn attribute_from_prop_with(
    subject: &Subject<'_>,
    caps: &Captures<'_>,
) -> Result<(), VerifyError> {
    let [attribute, value, first, second] = groups::<4>(caps);
    let expected = literal(value);
    let props = props_with(first, prop_value(&expected)).with(second.to_owned(), true);
    subject.expect_attribute(&props, "root", attribute, Some(&expected))?;

    let flipped = negated(&expected);
    let props = props_with(first, prop_value(&flipped)).with(second.to_owned(), true);
    subject.expect_attribute(&props, "root", attribute, Some(&flipped))?;

    subject.expect_attribute(&props_with(first, true), "root", attribute, None)
}

fn role_unless_element(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [role, element] = groups::<2>(caps);
    subject.expect_attribute(&BehaviorProps::new(), "root", "role", Some(&text(role)))?;
    subject.expect_attribute(&props_with("as", element.to_owned()), "root", "role", None)
}

fn attribute_unless_element(
    subject: &Subject<'_>,
    caps: &Captures<'_>,
) -> Result<(), VerifyError> {
    let [attribute, value, element] = groups::<3>(caps);
    subject.expect_attribute(
        &BehaviorProps::new(),
        "root",
        attribute,
        Some(&literal(value)),
    )?;
    subject.expect_attribute(
        &props_with("as", element.to_owned()),
        "root",
        attribute,
        None,
    )
}

fn zone_mode(subject: &Subject<'_>, mode: FocusZoneMode) -> Result<(), VerifyError> {
    subject.expect_zone(&BehaviorProps::new(), "mode", mode, |zone| zone.mode)
}

fn zone_embed(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    zone_mode(subject, FocusZoneMode::Embed)
}

fn zone_wrap(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    zone_mode(subject, FocusZoneMode::Wrap)
}

fn zone_direction(
    subject: &Subject<'_>,
    props: &BehaviorProps,
    direction: FocusZoneDirection,
) -> Result<(), VerifyError> {
    subject.expect_zone(props, "direction", direction, |zone| {
        zone.props.direction.unwrap_or_default()
    })
}

fn zone_horizontal(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    zone_direction(subject, &BehaviorProps::new(), FocusZoneDirection::Horizontal)
}

fn zone_vertical(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    zone_direction(subject, &BehaviorProps::new(), FocusZoneDirection::Vertical)
}

fn zone_bidirectional(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    zone_direction(
        subject,
        &BehaviorProps::new(),
        FocusZoneDirection::Bidirectional,
    )
}

fn zone_bidirectional_dom_order(
    subject: &Subject<'_>,
    _: &Captures<'_>,
) -> Result<(), VerifyError> {
    zone_direction(
        subject,
        &BehaviorProps::new(),
        FocusZoneDirection::BidirectionalDomOrder,
    )
}

fn zone_vertical_prop(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    zone_direction(
        subject,
        &props_with("vertical", true),
        FocusZoneDirection::Vertical,
    )
}

fn zone_circular(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    subject.expect_zone(&BehaviorProps::new(), "circular navigation", Some(true), |zone| {
        zone.props.is_circular_navigation
    })
}

fn zone_reset_on_tab(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    subject.expect_zone(&BehaviorProps::new(), "reset on Tab", Some(true), |zone| {
        zone.props.should_reset_active_element_when_tab_from_zone
    })
}

fn zone_default_tabbable(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    subject.expect_zone(
        &BehaviorProps::new(),
        "default tabbable element",
        true,
        |zone| zone.props.default_tabbable_element.is_some(),
    )
}

fn zone_enter_inner(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    subject.expect_zone(&BehaviorProps::new(), "inner zone key", true, |zone| {
        zone.props.should_enter_inner_zone.is_some()
    })
}

fn zone_tab_key(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    subject.expect_zone(
        &BehaviorProps::new(),
        "Tab handling",
        FocusZoneTabbableElements::All,
        |zone| zone.props.handle_tab_key.unwrap_or_default(),
    )
}

fn zone_focus_on_mount(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    subject.expect_zone(&BehaviorProps::new(), "focus on mount", Some(true), |zone| {
        zone.props.should_focus_on_mount
    })
}

fn zone_focus_inner(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    subject.expect_zone(
        &BehaviorProps::new(),
        "focus forwarding",
        Some(true),
        |zone| zone.props.should_focus_inner_element_when_received_focus,
    )
}

fn keys_pair(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [action, first, second, slot] = groups::<4>(caps);
    subject.expect_keys(&BehaviorProps::new(), slot, action, &[first, second])
}

fn keys(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [action, key, slot] = groups::<3>(caps);
    subject.expect_keys(&BehaviorProps::new(), slot, action, &[key])
}

fn keys_horizontal(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [action, key, slot] = groups::<3>(caps);
    subject.expect_keys(&BehaviorProps::new(), slot, action, &[key])
}

fn keys_vertical(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [action, key, slot] = groups::<3>(caps);
    subject.expect_keys(&props_with("vertical", true), slot, action, &[key])
}

fn keys_opened_subtree(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [action, key, slot] = groups::<3>(caps);
    let props = props_with("open", true).with("items", vec![PropValue::object()]);
    subject.expect_keys(&props, slot, action, &[key])
}

fn keys_closed_subtree(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [action, key, slot] = groups::<3>(caps);
    subject.expect_keys(&props_with("open", false), slot, action, &[key])
}

/// Enabled on `keys` while the submenu is open, the disabled sentinel once it closes.
fn keys_while_submenu_open(
    subject: &Subject<'_>,
    slot: &str,
    action: &str,
    keys: &[&str],
) -> Result<(), VerifyError> {
    let mut props = props_with("menu", PropValue::object()).with("menuOpen", true);
    subject.expect_keys(&props, slot, action, keys)?;
    props.set("menuOpen", false);
    subject.expect_disabled(&props, slot, action)
}

fn keys_open_submenu(subject: &Subject<'_>, caps: &Captures<'_>) -> Result<(), VerifyError> {
    let [action, key, slot] = groups::<3>(caps);
    keys_while_submenu_open(subject, slot, action, &[key])
}

fn keys_pair_open_submenu(
    subject: &Subject<'_>,
    caps: &Captures<'_>,
) -> Result<(), VerifyError> {
    let [action, first, second, slot] = groups::<4>(caps);
    keys_while_submenu_open(subject, slot, action, &[first, second])
}

fn roving_tab_index(subject: &Subject<'_>, _: &Captures<'_>) -> Result<(), VerifyError> {
    subject.expect_attribute(
        &props_with("checked", true),
        "root",
        "tabIndex",
        Some(&AttrValue::Int(0)),
    )?;
    subject.expect_attribute(
        &props_with("checked", false),
        "root",
        "tabIndex",
        Some(&AttrValue::Int(-1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn matching(sentence: &str) -> Vec<&'static str> {
        FORMS
            .iter()
            .filter(|form| Regex::new(form.pattern).is_ok_and(|re| re.is_match(sentence)))
            .map(|form| form.name)
            .collect()
    }

    #[test]
    fn every_pattern_compiles() {
        for form in FORMS {
            assert!(Regex::new(form.pattern).is_ok(), "{} does not compile", form.name);
        }
    }

    #[test]
    fn sentences_pick_exactly_their_form() {
        assert_eq!(matching("Adds role='menu'."), ["role"]);
        assert_eq!(
            matching("Adds role='button' if element type is other than 'button'."),
            ["role-unless-element"]
        );
        assert_eq!(
            matching("Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'root'."),
            ["keys-pair"]
        );
        assert_eq!(
            matching("Triggers 'openMenu' action with 'ArrowDown' on 'root', when orientation is horizontal."),
            ["keys-horizontal"]
        );
        assert_eq!(
            matching("Adds attribute 'aria-label' based on the property 'aria-label' to 'root' slot."),
            ["slot-attribute-from-prop"]
        );
        assert_eq!(
            matching("If 'vertical' prop is used, provides keyboard navigation in vertical direction."),
            ["zone-vertical-prop"]
        );
    }

    #[test]
    fn direction_names_do_not_overlap() {
        assert_eq!(
            matching("Provides arrow key navigation in bidirectionalDomOrder direction."),
            ["zone-bidirectional-dom-order"]
        );
        assert_eq!(
            matching("Provides arrow key navigation in bidirectional direction."),
            ["zone-bidirectional"]
        );
    }

    #[test]
    fn groups_pad_missing_captures() {
        let re = Regex::new(r"Adds attribute '([\w-]+)=*([\w-]*)'").unwrap();
        let caps = re.captures("Adds attribute 'aria-label'").unwrap();
        assert_eq!(groups::<2>(&caps), ["aria-label", ""]);
    }
}
