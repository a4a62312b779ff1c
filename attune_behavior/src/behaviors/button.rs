// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, Key, KeyAction, Slot};

use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// Props read by [`button_behavior`] and [`toggle_button_behavior`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonProps<'a> {
    /// `as`: the element type the button renders as.
    pub element_as: Option<&'a str>,
    /// `disabled`, passed through to `aria-disabled`.
    pub disabled: Option<bool>,
    /// `active`, the pressed state of toggle buttons. Defaults to `false`.
    pub active: bool,
}

impl<'a> ButtonProps<'a> {
    /// Read the button props out of `props`.
    pub fn from_props(props: &'a BehaviorProps) -> Self {
        Self {
            element_as: props.string("as"),
            disabled: props.bool("disabled"),
            active: props.flag("active"),
        }
    }

    /// Whether the button renders as a native `button`, which brings role, focusability
    /// and click keys along.
    pub fn is_native(&self) -> bool {
        self.element_as == Some("button")
    }
}

/// A clickable element.
///
/// - `role="button"` and `tabIndex=0` unless rendered as a native `button` (then undefined).
/// - `aria-disabled` mirrors `disabled`; undefined when `disabled` is not given.
/// - `performClick` on Enter or Space; disabled for native buttons, which click on their own.
pub fn button_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let button = ButtonProps::from_props(props);
    let emulated = !button.is_native();
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with_optional(AttrName::ROLE, emulated.then_some("button"))
                .with_optional(AttrName::TAB_INDEX, emulated.then_some(0))
                .with_optional(AttrName::ARIA_DISABLED, button.disabled),
        )
        .with_key_actions(
            Slot::ROOT,
            ActionMap::new().with(
                ActionName::PERFORM_CLICK,
                KeyAction::on_if(emulated, [Key::ENTER, Key::SPACEBAR]),
            ),
        )
}

/// A button with a pressed state: [`button_behavior`] plus `aria-pressed`, which is an
/// explicit `false` when `active` is not set.
pub fn toggle_button_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let active = ButtonProps::from_props(props).active;
    let mut resolved = button_behavior(props);
    if let Some(root) = resolved.attributes.get_mut(Slot::ROOT.as_str()) {
        root.insert(AttrName::ARIA_PRESSED, Some(active.into()));
    }
    resolved
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "button_behavior",
        behavior: button_behavior,
        description: &[
            "Adds role 'button' and makes the element focusable, unless it already is a native button.",
            "Activates the button with Enter and Space.",
        ],
        specification: &[
            "Adds role='button' if element type is other than 'button'.",
            "Adds attribute 'tabIndex=0' if element type is other than 'button'.",
            "Adds attribute 'aria-disabled=true' based on the property 'disabled'.",
            "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'root'.",
        ],
    },
    CatalogEntry {
        name: "toggle_button_behavior",
        behavior: toggle_button_behavior,
        description: &[
            "A button whose pressed state is exposed through 'aria-pressed'.",
        ],
        specification: &[
            "Adds role='button' if element type is other than 'button'.",
            "Adds attribute 'aria-pressed=true' based on the property 'active'.",
            "Adds attribute 'aria-disabled=true' based on the property 'disabled'.",
            "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'root'.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use attune_aria::AttrValue;

    #[test]
    fn native_button_omits_role_and_click_keys() {
        let props = BehaviorProps::new().with("as", "button");
        let r = button_behavior(&props);
        assert_eq!(r.attribute_entry("root", "role"), Some(&None));
        assert_eq!(r.attribute_entry("root", "tabIndex"), Some(&None));
        assert!(
            r.key_action("root", "performClick")
                .is_some_and(KeyAction::is_disabled)
        );
    }

    #[test]
    fn disabled_is_omitted_when_absent() {
        let r = button_behavior(&BehaviorProps::new());
        assert_eq!(r.attribute_entry("root", "aria-disabled"), Some(&None));
        assert_eq!(r.attribute("root", "role"), Some(&AttrValue::from("button")));
    }

    #[test]
    fn toggle_pressed_is_explicit_false() {
        let r = toggle_button_behavior(&BehaviorProps::new());
        assert_eq!(r.attribute("root", "aria-pressed"), Some(&AttrValue::Bool(false)));
        let r = toggle_button_behavior(&BehaviorProps::new().with("active", true));
        assert_eq!(r.attribute("root", "aria-pressed"), Some(&AttrValue::Bool(true)));
    }
}
