// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatch table: key actions indexed by key code.

use alloc::vec::Vec;

use attune_aria::{ActionName, Key, KeyCombinations, KeyEvent, Slot};
use attune_behavior::SlotKeyActions;
use attune_focus::TextDirection;
use hashbrown::HashMap;
use smallvec::SmallVec;

/// One enabled action of one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// The slot the action was declared on.
    pub slot: Slot,
    /// The action name.
    pub action: ActionName,
    /// Combinations that trigger the action, already mirrored for the text direction.
    pub combinations: KeyCombinations,
}

/// Key actions of a resolved behavior, ready for matching key events.
///
/// Bindings keep declaration order (slot by slot, action by action), which is also the order
/// in which [`DispatchTable::matching`] reports actions.
#[derive(Clone, Debug, Default)]
pub struct DispatchTable {
    bindings: Vec<Binding>,
    disabled: Vec<(Slot, ActionName)>,
    by_key: HashMap<Key, SmallVec<[usize; 4]>>,
}

impl DispatchTable {
    /// Build a table from a behavior's key actions.
    ///
    /// - Actions carrying the disabled sentinel are recorded (see [`Self::disabled`]) and
    ///   never bind.
    /// - Actions with an empty combination sequence bind nothing.
    /// - With [`TextDirection::Rtl`], combinations on `ArrowLeft`/`ArrowRight` are mirrored.
    pub fn build(key_actions: &SlotKeyActions, text_direction: TextDirection) -> Self {
        let mut table = Self::default();
        for (slot, actions) in key_actions.iter() {
            for (action, key_action) in actions.iter() {
                let Some(combinations) = key_action.key_combinations.as_ref() else {
                    tracing::debug!(%slot, %action, "action disabled; not bound");
                    table.disabled.push((slot.clone(), action.clone()));
                    continue;
                };
                if combinations.is_empty() {
                    continue;
                }
                let combinations: KeyCombinations = match text_direction {
                    TextDirection::Ltr => combinations.clone(),
                    TextDirection::Rtl => combinations.iter().map(|c| c.mirrored()).collect(),
                };
                let index = table.bindings.len();
                for combination in &combinations {
                    let slots = table.by_key.entry(combination.key_code).or_default();
                    // Two combinations of one action may share a key code.
                    if slots.last() != Some(&index) {
                        slots.push(index);
                    }
                }
                table.bindings.push(Binding {
                    slot: slot.clone(),
                    action: action.clone(),
                    combinations,
                });
            }
        }
        tracing::trace!(
            bound = table.bindings.len(),
            disabled = table.disabled.len(),
            "dispatch table built"
        );
        table
    }

    /// Enabled bindings in declaration order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Actions that were declared with the disabled sentinel.
    pub fn disabled(&self) -> &[(Slot, ActionName)] {
        &self.disabled
    }

    /// Whether `action` on `slot` is declared but disabled.
    pub fn is_disabled(&self, slot: &str, action: &str) -> bool {
        self.disabled
            .iter()
            .any(|(s, a)| s.as_str() == slot && a.as_str() == action)
    }

    /// The bindings on `slot` triggered by `event`, in declaration order.
    ///
    /// Each action appears at most once, however many of its combinations match.
    pub fn matching_bindings<'a>(
        &'a self,
        slot: &str,
        event: &KeyEvent,
    ) -> impl Iterator<Item = &'a Binding> {
        let event = *event;
        self.by_key
            .get(&event.key)
            .into_iter()
            .flatten()
            .map(|&index| &self.bindings[index])
            .filter(move |binding| {
                binding.slot.as_str() == slot
                    && binding.combinations.iter().any(|c| c.matches(&event))
            })
    }

    /// The names of the actions on `slot` triggered by `event`, in declaration order.
    pub fn matching(&self, slot: &str, event: &KeyEvent) -> SmallVec<[&ActionName; 2]> {
        self.matching_bindings(slot, event)
            .map(|binding| &binding.action)
            .collect()
    }

    /// Number of enabled bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_aria::{KeyAction, KeyCombination, Modifiers};
    use attune_behavior::{ActionMap, BehaviorProps, behaviors};
    use pretty_assertions::assert_eq;

    fn names<'a>(found: SmallVec<[&'a ActionName; 2]>) -> Vec<&'a str> {
        found.into_iter().map(ActionName::as_str).collect()
    }

    #[test]
    fn menu_item_keys_resolve_to_actions() {
        let item = behaviors::menu_item_behavior(&BehaviorProps::new());
        let table = DispatchTable::build(&item.key_actions, TextDirection::Ltr);

        let enter = KeyEvent::new(Key::ENTER);
        assert_eq!(names(table.matching("root", &enter)), ["performClick"]);
        let escape = KeyEvent::new(Key::ESCAPE);
        assert_eq!(names(table.matching("root", &escape)), ["closeAllMenus"]);
        // Horizontal menus open submenus with ArrowDown.
        let down = KeyEvent::new(Key::ARROW_DOWN);
        assert_eq!(names(table.matching("root", &down)), ["openMenu"]);
        // Wrong slot.
        assert!(table.matching("wrapper", &enter).is_empty());
    }

    #[test]
    fn disabled_actions_are_recorded_but_never_bound() {
        let closed = behaviors::toolbar_item_behavior(&BehaviorProps::new());
        let table = DispatchTable::build(&closed.key_actions, TextDirection::Ltr);
        assert!(table.is_disabled("wrapper", "closeMenuAndFocusTrigger"));
        assert!(table.matching("wrapper", &KeyEvent::new(Key::ESCAPE)).is_empty());
    }

    #[test]
    fn empty_sequences_bind_nothing() {
        let mut actions = SlotKeyActions::new();
        actions.insert(
            Slot::ROOT,
            ActionMap::new().with(ActionName::from_static("noop"), KeyAction::on([] as [Key; 0])),
        );
        let table = DispatchTable::build(&actions, TextDirection::Ltr);
        assert!(table.is_empty());
        assert!(table.disabled().is_empty());
    }

    #[test]
    fn one_event_triggers_each_action_once() {
        let mut actions = SlotKeyActions::new();
        actions.insert(
            Slot::ROOT,
            ActionMap::new()
                .with(
                    ActionName::from_static("select"),
                    KeyAction::on([
                        KeyCombination::new(Key::ENTER),
                        KeyCombination::new(Key::ENTER).with(Modifiers::SHIFT),
                    ]),
                )
                .with(ActionName::from_static("log"), KeyAction::on([Key::ENTER])),
        );
        let table = DispatchTable::build(&actions, TextDirection::Ltr);
        let shift_enter = KeyEvent::new(Key::ENTER).with_modifiers(Modifiers::SHIFT);
        assert_eq!(names(table.matching("root", &shift_enter)), ["select", "log"]);
    }

    #[test]
    fn modifiers_are_tri_state() {
        let mut actions = SlotKeyActions::new();
        actions.insert(
            Slot::ROOT,
            ActionMap::new()
                .with(
                    ActionName::from_static("next"),
                    KeyAction::on([KeyCombination::new(Key::TAB).without(Modifiers::SHIFT)]),
                )
                .with(
                    ActionName::from_static("prev"),
                    KeyAction::on([KeyCombination::new(Key::TAB).with(Modifiers::SHIFT)]),
                )
                .with(ActionName::from_static("any"), KeyAction::on([Key::TAB])),
        );
        let table = DispatchTable::build(&actions, TextDirection::Ltr);
        let tab = KeyEvent::new(Key::TAB);
        let shift_tab = tab.with_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
        assert_eq!(names(table.matching("root", &tab)), ["next", "any"]);
        assert_eq!(names(table.matching("root", &shift_tab)), ["prev", "any"]);
    }

    #[test]
    fn rtl_mirrors_horizontal_arrows() {
        let item = behaviors::menu_item_behavior(&BehaviorProps::new().with("vertical", true));
        let table = DispatchTable::build(&item.key_actions, TextDirection::Rtl);
        // openMenu is declared on ArrowRight; in RTL the submenu opens to the left.
        let left = KeyEvent::new(Key::ARROW_LEFT);
        assert_eq!(names(table.matching("root", &left)), ["openMenu"]);
        assert!(table.matching("root", &KeyEvent::new(Key::ARROW_RIGHT)).is_empty());
    }
}
