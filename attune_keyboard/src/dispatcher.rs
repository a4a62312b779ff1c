// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run the handlers of the actions a key event triggers on one slot.
//!
//! Handlers are looked up by action name and called in the order the behavior declared the
//! actions. A handler's [`Outcome`] decides whether the walk goes on to the next matching
//! action. Actions nobody registered a handler for are skipped, so a renderer only wires up
//! the actions it implements. Anything richer than stop/continue, such as "default
//! prevented", belongs in the state passed to [`run`].
//!
//! ## Example
//!
//! ```
//! use attune_aria::{Key, KeyEvent};
//! use attune_behavior::{BehaviorProps, behaviors};
//! use attune_focus::TextDirection;
//! use attune_keyboard::{DispatchTable, Handlers, Outcome, dispatcher};
//!
//! #[derive(Default)]
//! struct Menu {
//!     clicked: u32,
//!     open: bool,
//! }
//!
//! let item = behaviors::menu_item_behavior(&BehaviorProps::new());
//! let table = DispatchTable::build(&item.key_actions, TextDirection::Ltr);
//!
//! let mut handlers = Handlers::new()
//!     .on("performClick", |_, menu: &mut Menu| {
//!         menu.clicked += 1;
//!         Outcome::Continue
//!     })
//!     .on("closeAllMenus", |_, menu: &mut Menu| {
//!         menu.open = false;
//!         Outcome::Stop
//!     });
//!
//! let mut menu = Menu { clicked: 0, open: true };
//! let stopped = dispatcher::run(&table, "root", &KeyEvent::new(Key::ENTER), &mut handlers, &mut menu);
//! assert!(stopped.is_none());
//! assert_eq!(menu.clicked, 1);
//!
//! let stopped = dispatcher::run(&table, "root", &KeyEvent::new(Key::ESCAPE), &mut handlers, &mut menu);
//! assert_eq!(stopped.map(|a| a.as_str()), Some("closeAllMenus"));
//! assert!(!menu.open);
//! ```

use alloc::boxed::Box;
use core::fmt;

use attune_aria::{ActionName, KeyEvent};
use hashbrown::HashMap;

use crate::table::DispatchTable;

/// Whether the dispatcher keeps running handlers after the current one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Run the handler of the next matching action.
    #[default]
    Continue,
    /// Do not run any further handlers for this event.
    Stop,
}

/// A boxed action handler.
pub type Handler<'h, S> = Box<dyn FnMut(&KeyEvent, &mut S) -> Outcome + 'h>;

/// Action handlers by action name.
pub struct Handlers<'h, S> {
    by_action: HashMap<ActionName, Handler<'h, S>>,
}

impl<S> Default for Handlers<'_, S> {
    fn default() -> Self {
        Self {
            by_action: HashMap::new(),
        }
    }
}

impl<S> fmt::Debug for Handlers<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.by_action.keys()).finish()
    }
}

impl<'h, S> Handlers<'h, S> {
    /// No handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `action`, replacing any earlier one.
    #[must_use]
    pub fn on(
        mut self,
        action: impl Into<ActionName>,
        handler: impl FnMut(&KeyEvent, &mut S) -> Outcome + 'h,
    ) -> Self {
        self.insert(action, handler);
        self
    }

    /// Register `handler` for `action`, replacing any earlier one.
    pub fn insert(
        &mut self,
        action: impl Into<ActionName>,
        handler: impl FnMut(&KeyEvent, &mut S) -> Outcome + 'h,
    ) {
        self.by_action.insert(action.into(), Box::new(handler));
    }

    /// Remove the handler of `action`.
    pub fn remove(&mut self, action: &str) -> bool {
        self.by_action.remove(action).is_some()
    }

    /// Whether `action` has a handler.
    pub fn contains(&self, action: &str) -> bool {
        self.by_action.contains_key(action)
    }
}

/// Run the handlers of the actions `event` triggers on `slot`.
///
/// - Matching actions are visited in declaration order; each runs at most once.
/// - [`Outcome::Stop`] ends the walk immediately.
/// - Returns the action whose handler stopped the walk, or `None` if every matching action
///   was visited.
pub fn run<'t, S>(
    table: &'t DispatchTable,
    slot: &str,
    event: &KeyEvent,
    handlers: &mut Handlers<'_, S>,
    state: &mut S,
) -> Option<&'t ActionName> {
    for binding in table.matching_bindings(slot, event) {
        let Some(handler) = handlers.by_action.get_mut(binding.action.as_str()) else {
            tracing::trace!(action = %binding.action, "no handler registered");
            continue;
        };
        tracing::debug!(%slot, action = %binding.action, key = %event.key, "key action");
        match handler(event, state) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(&binding.action),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use attune_aria::{Key, KeyAction, Slot};
    use attune_behavior::{ActionMap, SlotKeyActions};
    use attune_focus::TextDirection;

    fn enter_table() -> DispatchTable {
        let mut actions = SlotKeyActions::new();
        actions.insert(
            Slot::ROOT,
            ActionMap::new()
                .with(ActionName::from_static("first"), KeyAction::on([Key::ENTER]))
                .with(ActionName::from_static("second"), KeyAction::on([Key::ENTER]))
                .with(ActionName::from_static("third"), KeyAction::on([Key::ENTER])),
        );
        DispatchTable::build(&actions, TextDirection::Ltr)
    }

    fn recorder<'h>(stop_at: &'static str) -> Handlers<'h, Vec<&'static str>> {
        let mut handlers = Handlers::new();
        for name in ["first", "second", "third"] {
            handlers.insert(name, move |_: &KeyEvent, seen: &mut Vec<&'static str>| {
                seen.push(name);
                if name == stop_at {
                    Outcome::Stop
                } else {
                    Outcome::Continue
                }
            });
        }
        handlers
    }

    #[test]
    fn continue_through_all() {
        let table = enter_table();
        let mut seen = Vec::new();
        let stopped = run(
            &table,
            "root",
            &KeyEvent::new(Key::ENTER),
            &mut recorder(""),
            &mut seen,
        );
        assert!(stopped.is_none());
        assert_eq!(seen, vec!["first", "second", "third"]);
    }

    #[test]
    fn stop_aborts_remaining_handlers() {
        let table = enter_table();
        let mut seen = Vec::new();
        let stopped = run(
            &table,
            "root",
            &KeyEvent::new(Key::ENTER),
            &mut recorder("second"),
            &mut seen,
        );
        assert_eq!(stopped.map(ActionName::as_str), Some("second"));
        assert_eq!(seen, vec!["first", "second"]);
    }

    #[test]
    fn actions_without_handlers_are_skipped() {
        let table = enter_table();
        let mut handlers = recorder("");
        assert!(handlers.remove("first"));
        assert!(!handlers.contains("first"));
        let mut seen = Vec::new();
        run(&table, "root", &KeyEvent::new(Key::ENTER), &mut handlers, &mut seen);
        assert_eq!(seen, vec!["second", "third"]);
    }

    #[test]
    fn unmatched_keys_run_nothing() {
        let table = enter_table();
        let mut seen = Vec::new();
        let stopped = run(
            &table,
            "root",
            &KeyEvent::new(Key::ESCAPE),
            &mut recorder("first"),
            &mut seen,
        );
        assert!(stopped.is_none());
        assert!(seen.is_empty());
    }
}
