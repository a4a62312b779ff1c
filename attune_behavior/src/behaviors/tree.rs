// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, Key, KeyAction, Slot};
use attune_focus::{FocusZone, FocusZoneDirection, FocusZoneProps};

use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// `role="tree"` in a vertical zone.
pub fn tree_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with(AttrName::ROLE, "tree")
                .with_optional(AttrName::ARIA_LABELLEDBY, props.attr_value("aria-labelledby")),
        )
        .with_focus_zone(FocusZone::embed(FocusZoneProps {
            direction: Some(FocusZoneDirection::Vertical),
            ..FocusZoneProps::default()
        }))
}

/// Props read by [`tree_item_behavior`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeItemProps {
    /// `open`. Defaults to `false`.
    pub open: bool,
    /// Whether the item has children: `hasSubtree`, or a non-empty `items` list.
    pub has_subtree: bool,
}

impl TreeItemProps {
    /// Read the tree-item props out of `props`.
    pub fn from_props(props: &BehaviorProps) -> Self {
        let has_items = props.list("items").is_some_and(|items| !items.is_empty());
        Self {
            open: props.flag("open"),
            has_subtree: has_items || props.flag("hasSubtree"),
        }
    }

    /// Whether the item shows its children.
    pub fn subtree_expanded(&self) -> bool {
        self.has_subtree && self.open
    }
}

/// A tree item.
///
/// `aria-expanded` is only declared for items with children. ArrowLeft and ArrowRight
/// depend on the expansion state: an expanded item collapses and steps into its first child,
/// anything else expands and steps out to its parent. Only the pair that applies is declared.
pub fn tree_item_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let item = TreeItemProps::from_props(props);
    let actions = ActionMap::new()
        .with(
            ActionName::PERFORM_CLICK,
            KeyAction::on([Key::ENTER, Key::SPACEBAR]),
        )
        .with(
            ActionName::from_static("expandSiblings"),
            KeyAction::on([Key::ASTERISK]),
        );
    let actions = if item.subtree_expanded() {
        actions
            .with(ActionName::from_static("collapse"), KeyAction::on([Key::ARROW_LEFT]))
            .with(
                ActionName::from_static("focusFirstChild"),
                KeyAction::on([Key::ARROW_RIGHT]),
            )
    } else {
        actions
            .with(ActionName::from_static("expand"), KeyAction::on([Key::ARROW_RIGHT]))
            .with(
                ActionName::from_static("focusParent"),
                KeyAction::on([Key::ARROW_LEFT]),
            )
    };
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with(AttrName::ROLE, "treeitem")
                .with(AttrName::TAB_INDEX, -1)
                .with_optional(AttrName::ARIA_EXPANDED, item.has_subtree.then_some(item.open))
                .with(AttrName::DATA_IS_FOCUSABLE, true),
        )
        .with_key_actions(Slot::ROOT, actions)
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "tree_behavior",
        behavior: tree_behavior,
        description: &["A hierarchical list navigated with Up and Down arrows."],
        specification: &[
            "Adds role='tree'.",
            "Adds attribute 'aria-labelledby' based on the property 'aria-labelledby' to 'root' slot.",
            "Embeds component into FocusZone.",
            "Provides arrow key navigation in vertical direction.",
        ],
    },
    CatalogEntry {
        name: "tree_item_behavior",
        behavior: tree_item_behavior,
        description: &[
            "Items take part in the zone navigation but are not Tab stops (tabIndex='-1').",
            "Asterisk expands all siblings of the focused item.",
        ],
        specification: &[
            "Adds role='treeitem'.",
            "Adds attribute 'data-is-focusable=true' to 'root' slot.",
            "Adds attribute 'aria-expanded=true' based on the property 'open' if the component has 'items' property to 'root' slot.",
            "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'root'.",
            "Triggers 'collapse' action with 'ArrowLeft' on 'root', when has an opened subtree.",
            "Triggers 'focusFirstChild' action with 'ArrowRight' on 'root', when has an opened subtree.",
            "Triggers 'expand' action with 'ArrowRight' on 'root', when has a closed subtree.",
            "Triggers 'focusParent' action with 'ArrowLeft' on 'root', when has a closed subtree.",
        ],
    },
];
