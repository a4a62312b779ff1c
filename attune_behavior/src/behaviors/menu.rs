// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, AttrValue, Key, KeyAction, Slot};
use attune_focus::{FocusZone, FocusZoneProps};

use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// A menu: `role="menu"`, focusable, embedded in a circular focus zone.
pub fn menu_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with(AttrName::ROLE, "menu")
                .with(AttrName::DATA_IS_FOCUSABLE, true),
        )
        .with_focus_zone(FocusZone::embed(FocusZoneProps {
            is_circular_navigation: Some(true),
            prevent_default_when_handled: Some(true),
            ..FocusZoneProps::default()
        }))
}

/// Props read by [`menu_item_behavior`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuItemProps {
    /// Whether the item owns a submenu (`menu` is set).
    pub has_menu: bool,
    /// `menuOpen`. Defaults to `false`.
    pub menu_open: bool,
    /// `disabled`. Defaults to `false`.
    pub disabled: bool,
    /// `vertical`: the parent menu's orientation. Defaults to horizontal.
    pub vertical: bool,
    /// `aria-label`, passed through.
    pub aria_label: Option<AttrValue>,
    /// `aria-labelledby`, passed through.
    pub aria_labelledby: Option<AttrValue>,
    /// `aria-describedby`, passed through.
    pub aria_describedby: Option<AttrValue>,
}

impl MenuItemProps {
    /// Read the menu-item props out of `props`.
    pub fn from_props(props: &BehaviorProps) -> Self {
        Self {
            has_menu: props.flag("menu"),
            menu_open: props.flag("menuOpen"),
            disabled: props.flag("disabled"),
            vertical: props.flag("vertical"),
            aria_label: props.attr_value("aria-label"),
            aria_labelledby: props.attr_value("aria-labelledby"),
            aria_describedby: props.attr_value("aria-describedby"),
        }
    }
}

/// A menu item, possibly owning a submenu.
///
/// `aria-expanded` and `aria-haspopup` are undefined for items without a submenu;
/// `aria-expanded` is an explicit `false` for a closed submenu. `aria-disabled` is undefined
/// unless disabled, while `data-is-focusable` is always declared.
pub fn menu_item_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let item = MenuItemProps::from_props(props);
    let open_key = if item.vertical {
        Key::ARROW_RIGHT
    } else {
        Key::ARROW_DOWN
    };
    ResolvedBehavior::new()
        .with_attributes(
            Slot::WRAPPER,
            AttributeMap::new().with(AttrName::ROLE, "presentation"),
        )
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with(AttrName::ROLE, "menuitem")
                .with(AttrName::TAB_INDEX, 0)
                .with_optional(
                    AttrName::ARIA_EXPANDED,
                    item.has_menu.then_some(item.menu_open),
                )
                .with_optional(AttrName::ARIA_HASPOPUP, item.has_menu.then_some(true))
                .with_optional(AttrName::ARIA_LABEL, item.aria_label)
                .with_optional(AttrName::ARIA_LABELLEDBY, item.aria_labelledby)
                .with_optional(AttrName::ARIA_DESCRIBEDBY, item.aria_describedby)
                .with_optional(AttrName::ARIA_DISABLED, item.disabled.then_some(true))
                .with(AttrName::DATA_IS_FOCUSABLE, !item.disabled),
        )
        .with_key_actions(
            Slot::ROOT,
            ActionMap::new()
                .with(
                    ActionName::PERFORM_CLICK,
                    KeyAction::on([Key::ENTER, Key::SPACEBAR]),
                )
                .with(
                    ActionName::from_static("closeAllMenus"),
                    KeyAction::on([Key::ESCAPE]),
                )
                .with(ActionName::from_static("openMenu"), KeyAction::on([open_key])),
        )
}

/// A separator between menu items, hidden from the item sequence.
pub fn menu_divider_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_attributes(
        Slot::ROOT,
        AttributeMap::new().with(AttrName::ROLE, "presentation"),
    )
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "menu_behavior",
        behavior: menu_behavior,
        description: &[
            "The 'menu' role is used to identify an element that creates a list of common actions or functions that a user can invoke.",
            "Embeds the component in a focus zone allowing circular arrow key navigation through its children.",
        ],
        specification: &[
            "Adds role='menu'.",
            "Adds attribute 'data-is-focusable=true' to 'root' slot.",
            "Embeds component into FocusZone.",
            "Keyboard navigation is circular.",
        ],
    },
    CatalogEntry {
        name: "menu_item_behavior",
        behavior: menu_item_behavior,
        description: &[
            "The 'wrapper' slot holds the list item, the 'root' slot is the focusable menu item itself.",
            "A submenu opens with ArrowDown in horizontal menus and with ArrowRight in vertical menus.",
        ],
        specification: &[
            "Adds role 'presentation' to 'wrapper' slot.",
            "Adds role 'menuitem' to 'root' slot.",
            "Adds attribute 'tabIndex=0' to 'root' slot.",
            "Adds attribute 'aria-expanded=true' based on the property 'menuOpen' if the component has 'menu' property to 'root' slot.",
            "Adds attribute 'aria-haspopup=true' to 'root' slot if 'menu' property is set.",
            "Adds attribute 'aria-label' based on the property 'aria-label' to 'root' slot.",
            "Adds attribute 'aria-labelledby' based on the property 'aria-labelledby' to 'root' slot.",
            "Adds attribute 'aria-describedby' based on the property 'aria-describedby' to 'root' slot.",
            "Adds attribute 'aria-disabled=true' to 'root' slot if 'disabled' property is true. Does not set the attribute otherwise.",
            "Adds attribute 'data-is-focusable=false' to 'root' slot if 'disabled' property is true. Sets the attribute to 'true' otherwise.",
            "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'root'.",
            "Triggers 'closeAllMenus' action with 'Escape' on 'root'.",
            "Triggers 'openMenu' action with 'ArrowDown' on 'root', when orientation is horizontal.",
            "Triggers 'openMenu' action with 'ArrowRight' on 'root', when orientation is vertical.",
        ],
    },
    CatalogEntry {
        name: "menu_divider_behavior",
        behavior: menu_divider_behavior,
        description: &["Separates groups of menu items without becoming a menu item itself."],
        specification: &["Adds role='presentation'."],
    },
];
