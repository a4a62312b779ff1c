// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, Key, KeyAction, Slot};
use attune_focus::{FocusZone, FocusZoneDirection, FocusZoneProps, TabbableSelector, selectors};

use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// A list: [`selectable_list_behavior`] when `selection` is set, [`basic_list_behavior`]
/// otherwise.
pub fn list_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    if props.flag("selection") {
        selectable_list_behavior(props)
    } else {
        basic_list_behavior(props)
    }
}

/// A list item, dispatching on `selection` like [`list_behavior`].
pub fn list_item_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    if props.flag("selection") {
        selectable_list_item_behavior(props)
    } else {
        basic_list_item_behavior(props)
    }
}

/// `role="list"`.
pub fn basic_list_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_attributes(
        Slot::ROOT,
        AttributeMap::new().with(AttrName::ROLE, "list"),
    )
}

/// `role="listitem"`.
pub fn basic_list_item_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_attributes(
        Slot::ROOT,
        AttributeMap::new().with(AttrName::ROLE, "listitem"),
    )
}

/// `role="listbox"` in a vertical zone. Focus entering the list goes to the selected option.
pub fn selectable_list_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new().with(AttrName::ROLE, "listbox"),
        )
        .with_focus_zone(FocusZone::embed(FocusZoneProps {
            direction: Some(FocusZoneDirection::Vertical),
            default_tabbable_element: Some(TabbableSelector(selectors::first_selected)),
            should_focus_inner_element_when_received_focus: Some(true),
            ..FocusZoneProps::default()
        }))
}

/// `role="option"`; `aria-selected` is always declared.
pub fn selectable_list_item_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with(AttrName::ROLE, "option")
                .with(AttrName::ARIA_SELECTED, props.flag("selected"))
                .with(AttrName::DATA_IS_FOCUSABLE, true),
        )
        .with_key_actions(
            Slot::ROOT,
            ActionMap::new().with(
                ActionName::PERFORM_CLICK,
                KeyAction::on([Key::ENTER, Key::SPACEBAR]),
            ),
        )
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "list_behavior",
        behavior: list_behavior,
        description: &[
            "Uses the selectable list behavior when 'selection' is set and the basic list behavior otherwise.",
        ],
        specification: &["Adds role='list'."],
    },
    CatalogEntry {
        name: "list_item_behavior",
        behavior: list_item_behavior,
        description: &[
            "Uses the selectable list item behavior when 'selection' is set and the basic list item behavior otherwise.",
        ],
        specification: &["Adds role='listitem'."],
    },
    CatalogEntry {
        name: "basic_list_behavior",
        behavior: basic_list_behavior,
        description: &["A static list."],
        specification: &["Adds role='list'."],
    },
    CatalogEntry {
        name: "basic_list_item_behavior",
        behavior: basic_list_item_behavior,
        description: &["An item of a static list."],
        specification: &["Adds role='listitem'."],
    },
    CatalogEntry {
        name: "selectable_list_behavior",
        behavior: selectable_list_behavior,
        description: &[
            "A list whose items can be selected.",
            "Arrow keys move between options; focus entering the list lands on the selected option.",
        ],
        specification: &[
            "Adds role='listbox'.",
            "Embeds component into FocusZone.",
            "Provides arrow key navigation in vertical direction.",
            "Focus is set initially on the specified default tabbable element.",
            "When the container element receives focus, then focus will be set to the default focusable child element.",
        ],
    },
    CatalogEntry {
        name: "selectable_list_item_behavior",
        behavior: selectable_list_item_behavior,
        description: &["An option of a selectable list."],
        specification: &[
            "Adds role='option'.",
            "Adds attribute 'aria-selected=true' based on the property 'selected'.",
            "Adds attribute 'data-is-focusable=true' to 'root' slot.",
            "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'root'.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use attune_aria::{AttrValue, KeyEvent};
    use attune_focus::{FocusZoneSetup, Subtree, SubtreeElement, TextDirection};
    use pretty_assertions::assert_eq;

    #[test]
    fn selection_switches_the_variant() {
        let basic = list_behavior(&BehaviorProps::new());
        assert_eq!(basic.attribute("root", "role"), Some(&AttrValue::from("list")));
        assert!(basic.focus_zone.is_none());

        let selectable = list_behavior(&BehaviorProps::new().with("selection", true));
        assert_eq!(
            selectable.attribute("root", "role"),
            Some(&AttrValue::from("listbox"))
        );

        let item = list_item_behavior(&BehaviorProps::new().with("selection", true));
        assert_eq!(item.attribute("root", "aria-selected"), Some(&AttrValue::Bool(false)));
    }

    #[test]
    fn focus_starts_on_selected_option() {
        let selected = [(AttrName::ARIA_SELECTED, AttrValue::Bool(true))];
        let unselected = [(AttrName::ARIA_SELECTED, AttrValue::Bool(false))];
        let elements = [
            SubtreeElement {
                focusable: true,
                attributes: &unselected,
            },
            SubtreeElement {
                focusable: true,
                attributes: &selected,
            },
        ];
        let subtree = Subtree {
            elements: &elements,
        };

        let r = selectable_list_behavior(&BehaviorProps::new());
        let setup = FocusZoneSetup::translate(r.focus_zone.as_ref(), TextDirection::Ltr);
        let params = setup.params();
        assert_eq!(params.and_then(|p| p.initial_focus(&subtree)), Some(1));
        // Vertical zones leave horizontal arrows to the host.
        assert_eq!(
            params.and_then(|p| p.navigation_for(&KeyEvent::new(Key::ARROW_RIGHT), false)),
            None
        );
    }
}
