// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, AttrValue, Key, KeyAction, Slot};
use attune_focus::{FocusZone, FocusZoneDirection, FocusZoneProps};

use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// An accordion: its titles form a vertical zone.
pub fn accordion_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_focus_zone(FocusZone::embed(FocusZoneProps {
        direction: Some(FocusZoneDirection::Vertical),
        ..FocusZoneProps::default()
    }))
}

/// Props read by [`accordion_title_behavior`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccordionTitleProps {
    /// `active`: the panel is expanded. Defaults to `false`.
    pub active: bool,
    /// `canBeCollapsed`: an expanded panel may be closed again. Defaults to `false`.
    pub can_be_collapsed: bool,
    /// `contentId`, the id of the panel this title controls.
    pub content_id: Option<AttrValue>,
}

impl AccordionTitleProps {
    /// Read the title props out of `props`.
    pub fn from_props(props: &BehaviorProps) -> Self {
        Self {
            active: props.flag("active"),
            can_be_collapsed: props.flag("canBeCollapsed"),
            content_id: props.attr_value("contentId"),
        }
    }
}

/// The title of an accordion panel.
///
/// The `root` slot is the heading; the `content` slot is the button that toggles the panel.
/// An expanded panel that cannot be collapsed reports its button as disabled.
pub fn accordion_title_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let title = AccordionTitleProps::from_props(props);
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with(AttrName::ROLE, "heading")
                .with(AttrName::ARIA_LEVEL, 3),
        )
        .with_attributes(
            Slot::CONTENT,
            AttributeMap::new()
                .with(AttrName::ROLE, "button")
                .with(AttrName::TAB_INDEX, 0)
                .with(AttrName::ARIA_EXPANDED, title.active)
                .with(
                    AttrName::ARIA_DISABLED,
                    title.active && !title.can_be_collapsed,
                )
                .with_optional(AttrName::ARIA_CONTROLS, title.content_id),
        )
        .with_key_actions(
            Slot::CONTENT,
            ActionMap::new().with(
                ActionName::PERFORM_CLICK,
                KeyAction::on([Key::ENTER, Key::SPACEBAR]),
            ),
        )
}

/// The panel of an accordion, labelled by its title.
pub fn accordion_content_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_attributes(
        Slot::ROOT,
        AttributeMap::new()
            .with(AttrName::ROLE, "region")
            .with_optional(AttrName::ARIA_LABELLEDBY, props.attr_value("titleId")),
    )
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "accordion_behavior",
        behavior: accordion_behavior,
        description: &["Up and Down arrows move between the titles of the accordion."],
        specification: &[
            "Embeds component into FocusZone.",
            "Provides arrow key navigation in vertical direction.",
        ],
    },
    CatalogEntry {
        name: "accordion_title_behavior",
        behavior: accordion_title_behavior,
        description: &[
            "The 'root' slot is a level 3 heading, the 'content' slot is the button toggling the panel.",
            "Adds aria-disabled='true' to 'content' slot when the panel is expanded and cannot be collapsed.",
        ],
        specification: &[
            "Adds role 'heading' to 'root' slot.",
            "Adds attribute 'aria-level=3' to 'root' slot.",
            "Adds role 'button' to 'content' slot.",
            "Adds attribute 'tabIndex=0' to 'content' slot.",
            "Adds attribute 'aria-expanded=true' based on the property 'active' to 'content' slot.",
            "Adds attribute 'aria-controls' based on the property 'contentId' to 'content' slot.",
            "Triggers 'performClick' action with 'Enter' or 'Spacebar' on 'content'.",
        ],
    },
    CatalogEntry {
        name: "accordion_content_behavior",
        behavior: accordion_content_behavior,
        description: &["The panel is a region labelled by its title."],
        specification: &[
            "Adds role='region'.",
            "Adds attribute 'aria-labelledby' based on the property 'titleId' to 'root' slot.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expanded_title_that_cannot_collapse_is_disabled() {
        let pinned = accordion_title_behavior(&BehaviorProps::new().with("active", true));
        assert_eq!(
            pinned.attribute("content", "aria-disabled"),
            Some(&AttrValue::Bool(true))
        );

        let collapsible = accordion_title_behavior(
            &BehaviorProps::new()
                .with("active", true)
                .with("canBeCollapsed", true),
        );
        assert_eq!(
            collapsible.attribute("content", "aria-disabled"),
            Some(&AttrValue::Bool(false))
        );
    }

    #[test]
    fn title_controls_its_panel() {
        let r = accordion_title_behavior(&BehaviorProps::new().with("contentId", "panel-1"));
        assert_eq!(r.attribute("root", "aria-level"), Some(&AttrValue::Int(3)));
        assert_eq!(
            r.attribute("content", "aria-controls"),
            Some(&AttrValue::from("panel-1"))
        );
        assert_eq!(
            r.attribute("content", "aria-expanded"),
            Some(&AttrValue::Bool(false))
        );
    }
}
