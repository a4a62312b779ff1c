// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, AttrValue, Key, KeyAction, Slot};

use crate::catalog::CatalogEntry;
use crate::props::{BehaviorProps, ValueTextFn};
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// Props read by [`slider_behavior`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliderProps {
    /// `disabled`, passed through to `aria-disabled`.
    pub disabled: Option<bool>,
    /// `min`, passed through to `aria-valuemin`.
    pub min: Option<AttrValue>,
    /// `max`, passed through to `aria-valuemax`.
    pub max: Option<AttrValue>,
    /// `value`, passed through to `aria-valuenow`.
    pub value: Option<AttrValue>,
    /// `vertical`. Defaults to a horizontal slider.
    pub vertical: bool,
    /// `getA11yValueMessageOnChange`: formats the current value for `aria-valuetext`.
    pub value_text: Option<ValueTextFn>,
}

impl SliderProps {
    /// Read the slider props out of `props`.
    pub fn from_props(props: &BehaviorProps) -> Self {
        Self {
            disabled: props.bool("disabled"),
            min: props.attr_value("min"),
            max: props.attr_value("max"),
            value: props.attr_value("value"),
            vertical: props.flag("vertical"),
            value_text: props.value_text("getA11yValueMessageOnChange"),
        }
    }
}

/// A range input.
///
/// The `root` slot carries `aria-disabled`; the range semantics go on the `input` slot, which
/// is the element that actually receives focus.
pub fn slider_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let slider = SliderProps::from_props(props);
    let orientation = if slider.vertical {
        "vertical"
    } else {
        "horizontal"
    };
    let value_text = slider.value_text.map(|f| f.call(props));
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new().with_optional(AttrName::ARIA_DISABLED, slider.disabled),
        )
        .with_attributes(
            Slot::INPUT,
            AttributeMap::new()
                .with(AttrName::ARIA_ORIENTATION, orientation)
                .with_optional(AttrName::ARIA_VALUEMIN, slider.min)
                .with_optional(AttrName::ARIA_VALUEMAX, slider.max)
                .with_optional(AttrName::ARIA_VALUENOW, slider.value)
                .with_optional(AttrName::ARIA_VALUETEXT, value_text),
        )
}

/// A text input. Escape clears it.
pub fn input_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(
            Slot::INPUT,
            AttributeMap::new()
                .with_optional(AttrName::ARIA_DISABLED, props.flag("disabled").then_some(true)),
        )
        .with_key_actions(
            Slot::INPUT,
            ActionMap::new().with(ActionName::from_static("clear"), KeyAction::on([Key::ESCAPE])),
        )
}

/// `role="checkbox"`; `aria-checked` is always declared, `false` when `checked` is unset.
pub fn checkbox_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with(AttrName::ROLE, "checkbox")
                .with(AttrName::ARIA_CHECKED, props.flag("checked"))
                .with_optional(AttrName::ARIA_DISABLED, props.bool("disabled"))
                .with(AttrName::TAB_INDEX, 0),
        )
        .with_key_actions(
            Slot::ROOT,
            ActionMap::new().with(ActionName::PERFORM_CLICK, KeyAction::on([Key::SPACEBAR])),
        )
}

/// `role="radiogroup"`. Arrow keys move the selection along the group.
pub fn radio_group_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new().with(AttrName::ROLE, "radiogroup"),
        )
        .with_key_actions(
            Slot::ROOT,
            ActionMap::new()
                .with(
                    ActionName::from_static("nextItem"),
                    KeyAction::on([Key::ARROW_DOWN, Key::ARROW_RIGHT]),
                )
                .with(
                    ActionName::from_static("prevItem"),
                    KeyAction::on([Key::ARROW_UP, Key::ARROW_LEFT]),
                ),
        )
}

/// A radio button in a group. Only the checked radio is in the Tab order.
pub fn radio_group_item_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let checked = props.flag("checked");
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with(AttrName::ROLE, "radio")
                .with(AttrName::TAB_INDEX, if checked { 0 } else { -1 })
                .with(AttrName::ARIA_CHECKED, checked)
                .with_optional(AttrName::ARIA_DISABLED, props.bool("disabled")),
        )
        .with_key_actions(
            Slot::ROOT,
            ActionMap::new().with(ActionName::PERFORM_CLICK, KeyAction::on([Key::SPACEBAR])),
        )
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "slider_behavior",
        behavior: slider_behavior,
        description: &[
            "Exposes the range, the current value and the orientation of the slider on its input.",
            "The value text announced to screen readers can be customized with 'getA11yValueMessageOnChange'.",
        ],
        specification: &[
            "Adds attribute 'aria-disabled=true' based on the property 'disabled'.",
            "Adds attribute 'aria-valuemin' based on the property 'min' to 'input' slot.",
            "Adds attribute 'aria-valuemax' based on the property 'max' to 'input' slot.",
            "Adds attribute 'aria-valuenow' based on the property 'value' to 'input' slot.",
            "Adds attribute 'aria-orientation=vertical' to 'input' slot if 'vertical' property is true. Sets the attribute to 'horizontal' otherwise.",
        ],
    },
    CatalogEntry {
        name: "input_behavior",
        behavior: input_behavior,
        description: &["Escape clears the input."],
        specification: &[
            "Adds attribute 'aria-disabled=true' to 'input' slot if 'disabled' property is true. Does not set the attribute otherwise.",
            "Triggers 'clear' action with 'Escape' on 'input'.",
        ],
    },
    CatalogEntry {
        name: "checkbox_behavior",
        behavior: checkbox_behavior,
        description: &["A focusable checkbox toggled with Space."],
        specification: &[
            "Adds role='checkbox'.",
            "Adds attribute 'aria-checked=true' based on the property 'checked'.",
            "Adds attribute 'aria-disabled=true' based on the property 'disabled'.",
            "Adds attribute 'tabIndex=0' to 'root' slot.",
            "Triggers 'performClick' action with 'Spacebar' on 'root'.",
        ],
    },
    CatalogEntry {
        name: "radio_group_behavior",
        behavior: radio_group_behavior,
        description: &["Groups radio items; arrow keys select the next or previous item."],
        specification: &[
            "Adds role='radiogroup'.",
            "Triggers 'nextItem' action with 'ArrowDown' or 'ArrowRight' on 'root'.",
            "Triggers 'prevItem' action with 'ArrowUp' or 'ArrowLeft' on 'root'.",
        ],
    },
    CatalogEntry {
        name: "radio_group_item_behavior",
        behavior: radio_group_item_behavior,
        description: &[
            "Only the checked item is tabbable; the others get tabIndex='-1'.",
        ],
        specification: &[
            "Adds role='radio'.",
            "Adds attribute 'aria-checked=true' based on the property 'checked'.",
            "Adds attribute 'aria-disabled=true' based on the property 'disabled'.",
            "Implements roving tabIndex.",
            "Triggers 'performClick' action with 'Spacebar' on 'root'.",
        ],
    },
];
