// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog of the built-in behaviors and their documentation.
//!
//! Each entry pairs a behavior with free-text `description` lines and with `specification`
//! lines. Specification lines are sentences in a fixed grammar ("Adds role='menu'.",
//! "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'root'.", ...) that tooling
//! turns into assertions against the behavior's output, so every one of them is a checked
//! claim.

use core::fmt;

use crate::behaviors;
use crate::props::BehaviorProps;
use crate::resolved::ResolvedBehavior;

/// A catalog entry.
#[derive(Copy, Clone)]
pub struct CatalogEntry {
    /// Function name of the behavior, e.g. `menu_behavior`.
    pub name: &'static str,
    /// The behavior.
    pub behavior: fn(&BehaviorProps) -> ResolvedBehavior,
    /// Free-text documentation.
    pub description: &'static [&'static str],
    /// Verifiable specification sentences.
    pub specification: &'static [&'static str],
}

impl CatalogEntry {
    /// Evaluate the behavior.
    pub fn resolve(&self, props: &BehaviorProps) -> ResolvedBehavior {
        (self.behavior)(props)
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("specification", &self.specification)
            .finish_non_exhaustive()
    }
}

const FAMILIES: &[&[CatalogEntry]] = &[
    behaviors::BUTTON,
    behaviors::MEDIA,
    behaviors::MENU,
    behaviors::TOOLBAR,
    behaviors::POPUP,
    behaviors::CHAT,
    behaviors::INPUT,
    behaviors::LIST,
    behaviors::TABS,
    behaviors::TREE,
    behaviors::ACCORDION,
    behaviors::GRID,
];

/// All catalog entries, grouped by family.
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    FAMILIES.iter().flat_map(|family| family.iter())
}

/// The entry called `name`.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    entries().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{ElementDescriptor, PropValue};
    use alloc::collections::BTreeSet;
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    fn prop_sets() -> Vec<BehaviorProps> {
        vec![
            BehaviorProps::new(),
            BehaviorProps::new()
                .with("disabled", true)
                .with("vertical", true)
                .with("open", true)
                .with("items", PropValue::List(vec![PropValue::object()])),
            BehaviorProps::new()
                .with("menu", PropValue::object())
                .with("menuOpen", true)
                .with("active", true)
                .with("checked", false)
                .with("selection", true),
            BehaviorProps::new()
                .with("trigger", ElementDescriptor::tag("span"))
                .with("on", "hover")
                .with("min", 0)
                .with("max", 100)
                .with("value", 30),
        ]
    }

    #[test]
    fn names_are_unique() {
        let mut seen = BTreeSet::new();
        for entry in entries() {
            assert!(seen.insert(entry.name), "duplicate entry {}", entry.name);
        }
        assert!(seen.len() >= 32, "catalog has {} entries", seen.len());
    }

    #[test]
    fn every_entry_is_documented() {
        for entry in entries() {
            assert!(!entry.description.is_empty(), "{} lacks a description", entry.name);
            assert!(
                !entry.specification.is_empty(),
                "{} lacks specification lines",
                entry.name
            );
        }
    }

    #[test]
    fn behaviors_are_deterministic() {
        for entry in entries() {
            for props in prop_sets() {
                let snapshot = props.clone();
                let first = entry.resolve(&props);
                let second = entry.resolve(&props);
                assert_eq!(first, second, "{} is not deterministic", entry.name);
                assert_eq!(props, snapshot, "{} changed its props", entry.name);
            }
        }
    }

    #[test]
    fn circular_zones_stay_circular_under_any_props() {
        let circular: Vec<&CatalogEntry> = entries()
            .filter(|entry| {
                entry
                    .resolve(&BehaviorProps::new())
                    .focus_zone
                    .is_some_and(|zone| zone.props.is_circular_navigation == Some(true))
            })
            .collect();
        let names: BTreeSet<&str> = circular.iter().map(|entry| entry.name).collect();
        for name in [
            "menu_behavior",
            "chat_message_behavior",
            "tab_list_behavior",
            "toolbar_menu_behavior",
        ] {
            assert!(names.contains(name), "{name} does not declare a circular zone");
        }

        for entry in circular {
            for props in prop_sets() {
                let zone = entry.resolve(&props).focus_zone;
                assert_eq!(
                    zone.map(|zone| zone.props.is_circular_navigation),
                    Some(Some(true)),
                    "{} lost circular navigation under {props:?}",
                    entry.name
                );
            }
        }
    }

    #[test]
    fn find_by_name() {
        assert!(find("slider_behavior").is_some());
        assert!(find("no_such_behavior").is_none());
    }
}
