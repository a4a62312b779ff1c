// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output of a behavior.

use attune_aria::{ActionName, AttrName, AttrValue, KeyAction, Slot};
use attune_focus::FocusZone;

use crate::map::OrderedMap;

/// Attributes of one slot. A `None` value is declared but undefined: it is not rendered.
pub type AttributeMap = OrderedMap<AttrName, Option<AttrValue>>;

/// Key actions of one slot.
pub type ActionMap = OrderedMap<ActionName, KeyAction>;

/// Attribute maps per slot.
pub type SlotAttributes = OrderedMap<Slot, AttributeMap>;

/// Action maps per slot.
pub type SlotKeyActions = OrderedMap<Slot, ActionMap>;

impl AttributeMap {
    /// Add a present attribute.
    #[must_use]
    pub fn with(mut self, name: AttrName, value: impl Into<AttrValue>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    /// Add an attribute that is undefined when `value` is `None`.
    #[must_use]
    pub fn with_optional<V>(mut self, name: AttrName, value: Option<V>) -> Self
    where
        V: Into<AttrValue>,
    {
        self.insert(name, value.map(Into::into));
        self
    }

    /// The rendered value of `name`; `None` both when undeclared and when undefined.
    pub fn value(&self, name: &str) -> Option<&AttrValue> {
        self.get(name).and_then(Option::as_ref)
    }

    /// Present attributes only, in declaration order.
    pub fn present(&self) -> impl Iterator<Item = (&AttrName, &AttrValue)> {
        self.iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name, v)))
    }
}

impl ActionMap {
    /// Add an action.
    #[must_use]
    pub fn with(mut self, name: ActionName, action: KeyAction) -> Self {
        self.insert(name, action);
        self
    }
}

/// A behavior's complete output: attributes per slot, focus zone, key actions per slot.
///
/// Slots a behavior does not mention have no entry in either map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedBehavior {
    /// Attribute maps per slot.
    pub attributes: SlotAttributes,
    /// Focus-zone declaration; `None` renders the component without a zone.
    pub focus_zone: Option<FocusZone>,
    /// Key actions per slot.
    pub key_actions: SlotKeyActions,
}

impl ResolvedBehavior {
    /// An output with nothing in it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attribute map of `slot`.
    #[must_use]
    pub fn with_attributes(mut self, slot: Slot, attributes: AttributeMap) -> Self {
        self.attributes.insert(slot, attributes);
        self
    }

    /// Set the focus zone.
    #[must_use]
    pub fn with_focus_zone(mut self, zone: FocusZone) -> Self {
        self.focus_zone = Some(zone);
        self
    }

    /// Set the action map of `slot`.
    #[must_use]
    pub fn with_key_actions(mut self, slot: Slot, actions: ActionMap) -> Self {
        self.key_actions.insert(slot, actions);
        self
    }

    /// The attribute map of `slot`.
    pub fn slot_attributes(&self, slot: &str) -> Option<&AttributeMap> {
        self.attributes.get(slot)
    }

    /// The rendered value of attribute `name` on `slot`.
    pub fn attribute(&self, slot: &str, name: &str) -> Option<&AttrValue> {
        self.slot_attributes(slot)?.value(name)
    }

    /// The declared entry of attribute `name` on `slot`.
    ///
    /// `Some(None)` is a declared-but-undefined attribute; `None` means it was never declared.
    pub fn attribute_entry(&self, slot: &str, name: &str) -> Option<&Option<AttrValue>> {
        self.slot_attributes(slot)?.get(name)
    }

    /// The action map of `slot`.
    pub fn slot_key_actions(&self, slot: &str) -> Option<&ActionMap> {
        self.key_actions.get(slot)
    }

    /// Action `name` on `slot`.
    pub fn key_action(&self, slot: &str, name: &str) -> Option<&KeyAction> {
        self.slot_key_actions(slot)?.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use attune_aria::Key;

    fn sample() -> ResolvedBehavior {
        ResolvedBehavior::new()
            .with_attributes(
                Slot::ROOT,
                AttributeMap::new()
                    .with(AttrName::ROLE, "menuitem")
                    .with_optional(AttrName::ARIA_EXPANDED, None::<bool>)
                    .with(AttrName::ARIA_PRESSED, false),
            )
            .with_key_actions(
                Slot::ROOT,
                ActionMap::new().with(ActionName::PERFORM_CLICK, KeyAction::on([Key::ENTER])),
            )
    }

    #[test]
    fn undefined_and_false_are_distinct() {
        let r = sample();
        assert_eq!(r.attribute("root", "aria-expanded"), None);
        assert_eq!(r.attribute_entry("root", "aria-expanded"), Some(&None));
        assert_eq!(r.attribute("root", "aria-pressed"), Some(&AttrValue::Bool(false)));
        assert_eq!(r.attribute_entry("root", "aria-label"), None);
    }

    #[test]
    fn unmentioned_slots_have_no_maps() {
        let r = sample();
        assert!(r.slot_attributes("trigger").is_none());
        assert!(r.slot_key_actions("popup").is_none());
        assert!(r.focus_zone.is_none());
    }

    #[test]
    fn present_skips_undefined() {
        let r = sample();
        let names: Vec<&str> = r
            .slot_attributes("root")
            .into_iter()
            .flat_map(AttributeMap::present)
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, ["role", "aria-pressed"]);
    }

    #[test]
    fn resolved_behavior_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolvedBehavior>();
    }
}
