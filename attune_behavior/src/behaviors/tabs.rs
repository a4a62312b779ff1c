// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, Key, KeyAction, Slot};
use attune_focus::{FocusZone, FocusZoneDirection, FocusZoneProps};

use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// `role="tablist"` in a circular zone along the list's orientation.
pub fn tab_list_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let direction = if props.flag("vertical") {
        FocusZoneDirection::Vertical
    } else {
        FocusZoneDirection::Horizontal
    };
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new().with(AttrName::ROLE, "tablist"),
        )
        .with_focus_zone(FocusZone::embed(FocusZoneProps {
            direction: Some(direction),
            is_circular_navigation: Some(true),
            ..FocusZoneProps::default()
        }))
}

/// A tab. The `anchor` slot is the focusable tab; `wrapper` is presentational.
///
/// `aria-selected` follows `active` unless the component is given `aria-selected` itself.
pub fn tab_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let selected = props
        .attr_value("aria-selected")
        .unwrap_or_else(|| props.flag("active").into());
    ResolvedBehavior::new()
        .with_attributes(
            Slot::WRAPPER,
            AttributeMap::new().with(AttrName::ROLE, "presentation"),
        )
        .with_attributes(
            Slot::ANCHOR,
            AttributeMap::new()
                .with(AttrName::ROLE, "tab")
                .with(AttrName::TAB_INDEX, 0)
                .with(AttrName::DATA_IS_FOCUSABLE, true)
                .with(AttrName::ARIA_SELECTED, selected)
                .with_optional(AttrName::ARIA_LABEL, props.attr_value("aria-label"))
                .with_optional(AttrName::ARIA_LABELLEDBY, props.attr_value("aria-labelledby"))
                .with_optional(
                    AttrName::ARIA_DESCRIBEDBY,
                    props.attr_value("aria-describedby"),
                )
                .with_optional(AttrName::ARIA_CONTROLS, props.attr_value("aria-controls")),
        )
        .with_key_actions(
            Slot::ANCHOR,
            ActionMap::new().with(
                ActionName::PERFORM_CLICK,
                KeyAction::on([Key::ENTER, Key::SPACEBAR]),
            ),
        )
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "tab_list_behavior",
        behavior: tab_list_behavior,
        description: &[
            "Holds the tabs of a tabbed interface.",
            "Arrow keys move between tabs and wrap around at either end.",
        ],
        specification: &[
            "Adds role='tablist'.",
            "Embeds component into FocusZone.",
            "Provides arrow key navigation in horizontal direction.",
            "Keyboard navigation is circular.",
            "If 'vertical' prop is used, provides keyboard navigation in vertical direction.",
        ],
    },
    CatalogEntry {
        name: "tab_behavior",
        behavior: tab_behavior,
        description: &[
            "The 'anchor' slot is the focusable tab, the 'wrapper' slot is hidden from the accessibility tree.",
            "Enter and Space activate the tab.",
        ],
        specification: &[
            "Adds role 'presentation' to 'wrapper' slot.",
            "Adds role 'tab' to 'anchor' slot.",
            "Adds attribute 'tabIndex=0' to 'anchor' slot.",
            "Adds attribute 'data-is-focusable=true' to 'anchor' slot.",
            "Adds attribute 'aria-selected=true' to 'anchor' slot based on the property 'active'. This can be overriden by providing 'aria-selected' property directly to the component.",
            "Adds attribute 'aria-label' based on the property 'aria-label' to 'anchor' slot.",
            "Adds attribute 'aria-labelledby' based on the property 'aria-labelledby' to 'anchor' slot.",
            "Adds attribute 'aria-describedby' based on the property 'aria-describedby' to 'anchor' slot.",
            "Adds attribute 'aria-controls' based on the property 'aria-controls' to 'anchor' slot.",
            "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'anchor'.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use attune_aria::AttrValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn orientation_picks_the_zone_direction() {
        let direction = |props: &BehaviorProps| {
            tab_list_behavior(props)
                .focus_zone
                .and_then(|z| z.props.direction)
        };
        assert_eq!(
            direction(&BehaviorProps::new()),
            Some(FocusZoneDirection::Horizontal)
        );
        assert_eq!(
            direction(&BehaviorProps::new().with("vertical", true)),
            Some(FocusZoneDirection::Vertical)
        );
    }

    #[test]
    fn explicit_selection_overrides_active() {
        let active = tab_behavior(&BehaviorProps::new().with("active", true));
        assert_eq!(
            active.attribute("anchor", "aria-selected"),
            Some(&AttrValue::Bool(true))
        );

        let overridden = tab_behavior(
            &BehaviorProps::new()
                .with("active", true)
                .with("aria-selected", false),
        );
        assert_eq!(
            overridden.attribute("anchor", "aria-selected"),
            Some(&AttrValue::Bool(false))
        );

        let inactive = tab_behavior(&BehaviorProps::new());
        assert_eq!(
            inactive.attribute("anchor", "aria-selected"),
            Some(&AttrValue::Bool(false))
        );
    }
}
