// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, AttrValue, Key, KeyAction, Slot};

use crate::catalog::CatalogEntry;
use crate::props::{BehaviorProps, ElementDescriptor, PropValue};
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// Trigger interactions that open a popup (`on`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PopupOn {
    /// Click (and Enter/Space) toggles the popup.
    pub click: bool,
    /// Hover (and Enter/Space) opens the popup.
    pub hover: bool,
    /// Focus opens the popup.
    pub focus: bool,
    /// The context menu opens the popup.
    pub context: bool,
}

impl Default for PopupOn {
    fn default() -> Self {
        Self {
            click: true,
            hover: false,
            focus: false,
            context: false,
        }
    }
}

impl PopupOn {
    fn from_prop(value: Option<&PropValue>) -> Self {
        let mut on = Self {
            click: false,
            ..Self::default()
        };
        match value {
            Some(PropValue::Str(name)) => on.add(name),
            Some(PropValue::List(items)) => {
                for item in items {
                    if let PropValue::Str(name) = item {
                        on.add(name);
                    }
                }
            }
            _ => return Self::default(),
        }
        on
    }

    fn add(&mut self, name: &str) {
        match name {
            "click" => self.click = true,
            "hover" => self.hover = true,
            "focus" => self.focus = true,
            "context" => self.context = true,
            _ => {}
        }
    }
}

/// Props read by the popup family.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupProps<'a> {
    /// The trigger element, if any.
    pub trigger: Option<&'a ElementDescriptor>,
    /// `shouldTriggerBeTabbable`. Defaults to `true`.
    pub should_trigger_be_tabbable: bool,
    /// `on`. Defaults to click.
    pub on: PopupOn,
    /// `disabled`. Defaults to `false`.
    pub disabled: bool,
}

impl<'a> PopupProps<'a> {
    /// Read the popup props out of `props`.
    pub fn from_props(props: &'a BehaviorProps) -> Self {
        Self {
            trigger: props.element("trigger"),
            should_trigger_be_tabbable: props.bool("shouldTriggerBeTabbable").unwrap_or(true),
            on: PopupOn::from_prop(props.get("on")),
            disabled: props.flag("disabled"),
        }
    }

    /// The `tabIndex` the trigger needs.
    ///
    /// An explicit `tabIndex` on the trigger is kept. Otherwise a trigger the host does not
    /// already put in the Tab order gets `0`, unless `shouldTriggerBeTabbable` is off. Without
    /// a trigger there is nothing to set.
    pub fn trigger_tab_index(&self) -> Option<i64> {
        let trigger = self.trigger?;
        if let Some(explicit) = trigger.tab_index {
            return Some(explicit);
        }
        if !self.should_trigger_be_tabbable || trigger.is_natively_tabbable() {
            return None;
        }
        Some(0)
    }
}

/// A popup opened from a trigger element.
///
/// The trigger gets a `tabIndex` per [`PopupProps::trigger_tab_index`] and `aria-disabled`
/// only when disabled. Escape closes the popup from either side. Enter and Space toggle the
/// popup when it opens on click and open it when it opens on hover; the action for the
/// interaction not in use carries the disabled sentinel.
pub fn popup_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let popup = PopupProps::from_props(props);
    ResolvedBehavior::new()
        .with_attributes(
            Slot::TRIGGER,
            AttributeMap::new()
                .with_optional(AttrName::TAB_INDEX, popup.trigger_tab_index())
                .with_optional(AttrName::ARIA_DISABLED, popup.disabled.then_some(true)),
        )
        .with_key_actions(
            Slot::POPUP,
            ActionMap::new().with(
                ActionName::from_static("closeAndFocusTrigger"),
                KeyAction::on([Key::ESCAPE]),
            ),
        )
        .with_key_actions(
            Slot::TRIGGER,
            ActionMap::new()
                .with(ActionName::from_static("close"), KeyAction::on([Key::ESCAPE]))
                .with(
                    ActionName::from_static("toggle"),
                    KeyAction::on_if(popup.on.click, [Key::ENTER, Key::SPACEBAR]),
                )
                .with(
                    ActionName::from_static("open"),
                    KeyAction::on_if(popup.on.hover, [Key::ENTER, Key::SPACEBAR]),
                ),
        )
}

/// A modal dialog: [`popup_behavior`] plus dialog semantics on the `popup` slot.
///
/// `aria-labelledby` and `aria-describedby` come from the `headerId` and `contentId` props,
/// which the component resolves from its header and content shorthands.
pub fn dialog_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let mut resolved = popup_behavior(props);
    if let Some(trigger) = resolved.attributes.get_mut(Slot::TRIGGER.as_str()) {
        trigger.insert(AttrName::ARIA_HASPOPUP, Some(AttrValue::from("dialog")));
    }
    resolved.with_attributes(
        Slot::POPUP,
        AttributeMap::new()
            .with(AttrName::ROLE, "dialog")
            .with(AttrName::ARIA_MODAL, true)
            .with_optional(AttrName::ARIA_LABELLEDBY, props.attr_value("headerId"))
            .with_optional(AttrName::ARIA_DESCRIBEDBY, props.attr_value("contentId")),
    )
}

/// A tooltip describing its trigger.
pub fn tooltip_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let content_id = props.attr_value("contentId");
    ResolvedBehavior::new()
        .with_attributes(
            Slot::TRIGGER,
            AttributeMap::new().with_optional(AttrName::ARIA_DESCRIBEDBY, content_id.clone()),
        )
        .with_attributes(
            Slot::CONTENT,
            AttributeMap::new()
                .with(AttrName::ROLE, "tooltip")
                .with_optional(AttrName::ID, content_id),
        )
        .with_key_actions(
            Slot::TRIGGER,
            ActionMap::new().with(ActionName::from_static("close"), KeyAction::on([Key::ESCAPE])),
        )
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "popup_behavior",
        behavior: popup_behavior,
        description: &[
            "Adds tabIndex='0' to 'trigger' slot, if it is not tabbable element and no tabIndex attribute provided.",
            "Escape closes the popup and moves focus back to the trigger.",
        ],
        specification: &[
            "Adds attribute 'aria-disabled=true' to 'trigger' slot if 'disabled' property is true. Does not set the attribute otherwise.",
            "Triggers 'closeAndFocusTrigger' action with 'Escape' on 'popup'.",
            "Triggers 'close' action with 'Escape' on 'trigger'.",
            "Triggers 'toggle' action with 'Enter' or 'Spacebar' on 'trigger'.",
        ],
    },
    CatalogEntry {
        name: "dialog_behavior",
        behavior: dialog_behavior,
        description: &[
            "A popup with modal dialog semantics.",
            "Focus is trapped inside the dialog while it is open.",
        ],
        specification: &[
            "Adds role 'dialog' to 'popup' slot.",
            "Adds attribute 'aria-modal=true' to 'popup' slot.",
            "Adds attribute 'aria-haspopup=dialog' to 'trigger' slot.",
            "Adds attribute 'aria-labelledby' based on the property 'headerId' to 'popup' slot.",
            "Adds attribute 'aria-describedby' based on the property 'contentId' to 'popup' slot.",
            "Triggers 'closeAndFocusTrigger' action with 'Escape' on 'popup'.",
        ],
    },
    CatalogEntry {
        name: "tooltip_behavior",
        behavior: tooltip_behavior,
        description: &["The trigger is described by the tooltip content."],
        specification: &[
            "Adds role 'tooltip' to 'content' slot.",
            "Adds attribute 'aria-describedby' based on the property 'contentId' to 'trigger' slot.",
            "Adds attribute 'id' based on the property 'contentId' to 'content' slot.",
            "Triggers 'close' action with 'Escape' on 'trigger'.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn trigger_tab_index(props: BehaviorProps) -> Option<AttrValue> {
        popup_behavior(&props).attribute("trigger", "tabIndex").cloned()
    }

    #[test]
    fn non_tabbable_trigger_becomes_tabbable() {
        let props = BehaviorProps::new()
            .with("trigger", ElementDescriptor::tag("div"))
            .with("shouldTriggerBeTabbable", true);
        assert_eq!(trigger_tab_index(props), Some(AttrValue::Int(0)));
    }

    #[test]
    fn opting_out_leaves_tab_index_undefined() {
        let props = BehaviorProps::new()
            .with("trigger", ElementDescriptor::tag("div"))
            .with("shouldTriggerBeTabbable", false);
        assert_eq!(trigger_tab_index(props), None);
    }

    #[test]
    fn explicit_tab_index_is_kept() {
        let props = BehaviorProps::new()
            .with("trigger", ElementDescriptor::tag("div").with_tab_index(-1))
            .with("shouldTriggerBeTabbable", true);
        assert_eq!(trigger_tab_index(props), Some(AttrValue::Int(-1)));
    }

    #[test]
    fn tabbable_trigger_is_left_alone_regardless_of_flag() {
        for flag in [true, false] {
            let props = BehaviorProps::new()
                .with("trigger", ElementDescriptor::component("Button"))
                .with("shouldTriggerBeTabbable", flag);
            assert_eq!(trigger_tab_index(props), None);
        }
        let anchor = BehaviorProps::new().with(
            "trigger",
            ElementDescriptor::tag("a").with_href("/settings"),
        );
        assert_eq!(trigger_tab_index(anchor), None);
    }

    #[test]
    fn flag_defaults_to_tabbable_and_no_trigger_means_undefined() {
        let props = BehaviorProps::new().with("trigger", ElementDescriptor::tag("span"));
        assert_eq!(trigger_tab_index(props), Some(AttrValue::Int(0)));
        assert_eq!(trigger_tab_index(BehaviorProps::new()), None);
    }

    #[test]
    fn open_interaction_selects_enabled_keys() {
        let click = popup_behavior(&BehaviorProps::new());
        assert!(!click.key_action("trigger", "toggle").is_some_and(KeyAction::is_disabled));
        assert!(click.key_action("trigger", "open").is_some_and(KeyAction::is_disabled));

        let both = popup_behavior(
            &BehaviorProps::new().with("on", PropValue::List(vec!["hover".into(), "click".into()])),
        );
        assert!(!both.key_action("trigger", "toggle").is_some_and(KeyAction::is_disabled));
        assert!(!both.key_action("trigger", "open").is_some_and(KeyAction::is_disabled));

        let hover = popup_behavior(&BehaviorProps::new().with("on", "hover"));
        assert!(hover.key_action("trigger", "toggle").is_some_and(KeyAction::is_disabled));
    }

    #[test]
    fn dialog_labels_come_from_ids() {
        let r = dialog_behavior(
            &BehaviorProps::new()
                .with("headerId", "dialog-header-1")
                .with("contentId", "dialog-content-1"),
        );
        assert_eq!(r.attribute("popup", "role"), Some(&AttrValue::from("dialog")));
        assert_eq!(
            r.attribute("popup", "aria-labelledby"),
            Some(&AttrValue::from("dialog-header-1"))
        );
        assert_eq!(
            r.attribute("popup", "aria-describedby"),
            Some(&AttrValue::from("dialog-content-1"))
        );
        assert_eq!(
            r.attribute("trigger", "aria-haspopup"),
            Some(&AttrValue::from("dialog"))
        );
    }
}
