// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, Key, KeyAction, Slot};
use attune_focus::{FocusZone, FocusZoneDirection, FocusZoneProps};

use super::button::button_behavior;
use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// `role="toolbar"`, with arrow keys following DOM order so wrapped toolbars navigate in
/// reading order.
pub fn toolbar_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new().with(AttrName::ROLE, "toolbar"),
        )
        .with_focus_zone(FocusZone::embed(FocusZoneProps {
            direction: Some(FocusZoneDirection::BidirectionalDomOrder),
            ..FocusZoneProps::default()
        }))
}

/// A toolbar button, optionally owning a submenu.
///
/// Extends [`button_behavior`]. While the submenu is open, the `wrapper` slot takes over
/// Escape (close and return focus) and ArrowLeft/ArrowRight (keep the toolbar from moving on).
/// Both actions carry the disabled sentinel otherwise.
pub fn toolbar_item_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let has_menu = props.flag("menu");
    let submenu_open = has_menu && props.flag("menuOpen");

    let mut resolved = button_behavior(props);
    if let Some(root) = resolved.attributes.get_mut(Slot::ROOT.as_str()) {
        root.insert(
            AttrName::ARIA_HASPOPUP,
            has_menu.then_some(true.into()),
        );
        root.insert(
            AttrName::ARIA_EXPANDED,
            has_menu.then_some(props.flag("menuOpen").into()),
        );
    }
    resolved.with_key_actions(
        Slot::WRAPPER,
        ActionMap::new()
            .with(
                ActionName::from_static("closeMenuAndFocusTrigger"),
                KeyAction::on_if(submenu_open, [Key::ESCAPE]),
            )
            .with(
                ActionName::from_static("doNotNavigateNextParentItem"),
                KeyAction::on_if(submenu_open, [Key::ARROW_LEFT, Key::ARROW_RIGHT]),
            ),
    )
}

/// The submenu of a toolbar item: a vertical circular menu that takes focus when it opens.
pub fn toolbar_menu_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(Slot::ROOT, AttributeMap::new().with(AttrName::ROLE, "menu"))
        .with_focus_zone(FocusZone::wrap(FocusZoneProps {
            direction: Some(FocusZoneDirection::Vertical),
            is_circular_navigation: Some(true),
            should_focus_on_mount: Some(true),
            ..FocusZoneProps::default()
        }))
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "toolbar_behavior",
        behavior: toolbar_behavior,
        description: &[
            "Identifies the container as a toolbar.",
            "Arrow keys move between items in DOM order, which keeps navigation predictable when items wrap to several rows.",
        ],
        specification: &[
            "Adds role='toolbar'.",
            "Embeds component into FocusZone.",
            "Provides arrow key navigation in bidirectionalDomOrder direction.",
        ],
    },
    CatalogEntry {
        name: "toolbar_item_behavior",
        behavior: toolbar_item_behavior,
        description: &[
            "A button inside a toolbar.",
            "When the item has an opened submenu, Escape closes it and returns focus to the item.",
        ],
        specification: &[
            "Adds role='button' if element type is other than 'button'.",
            "Adds attribute 'aria-disabled=true' based on the property 'disabled'.",
            "Adds attribute 'aria-haspopup=true' to 'root' slot if 'menu' property is set.",
            "Adds attribute 'aria-expanded=true' based on the property 'menuOpen' if the component has 'menu' property to 'root' slot.",
            "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'root'.",
            "Triggers 'closeMenuAndFocusTrigger' action with 'Escape' on 'wrapper', when toolbar button has submenu and it is opened.",
            "Triggers 'doNotNavigateNextParentItem' action with 'ArrowLeft' or 'ArrowRight' on 'wrapper', when toolbar button has submenu and it is opened.",
        ],
    },
    CatalogEntry {
        name: "toolbar_menu_behavior",
        behavior: toolbar_menu_behavior,
        description: &["The popup menu of a toolbar item."],
        specification: &[
            "Adds role='menu'.",
            "Wraps component in FocusZone.",
            "Provides arrow key navigation in vertical direction.",
            "Keyboard navigation is circular.",
            "Component will get focus when mounted.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropValue;
    use attune_aria::AttrValue;

    #[test]
    fn wrapper_keys_need_an_open_submenu() {
        let closed = toolbar_item_behavior(
            &BehaviorProps::new()
                .with("menu", PropValue::object())
                .with("menuOpen", false),
        );
        let escape = closed.key_action("wrapper", "closeMenuAndFocusTrigger");
        assert_eq!(escape.map(KeyAction::is_disabled), Some(true));

        // menuOpen without a menu does not count.
        let no_menu = toolbar_item_behavior(&BehaviorProps::new().with("menuOpen", true));
        let arrows = no_menu.key_action("wrapper", "doNotNavigateNextParentItem");
        assert_eq!(arrows.map(KeyAction::is_disabled), Some(true));

        let open = toolbar_item_behavior(
            &BehaviorProps::new()
                .with("menu", PropValue::object())
                .with("menuOpen", true),
        );
        let arrows = open
            .key_action("wrapper", "doNotNavigateNextParentItem")
            .and_then(|a| a.key_combinations.as_ref())
            .map(|c| c.len());
        assert_eq!(arrows, Some(2));
    }

    #[test]
    fn item_keeps_button_semantics() {
        let r = toolbar_item_behavior(&BehaviorProps::new());
        assert_eq!(r.attribute("root", "role"), Some(&AttrValue::from("button")));
        assert_eq!(r.attribute_entry("root", "aria-haspopup"), Some(&None));
        assert!(r.key_action("root", "performClick").is_some());
    }
}
