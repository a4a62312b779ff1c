// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{ActionName, AttrName, Key, KeyAction, Slot};
use attune_focus::{
    FocusZone, FocusZoneDirection, FocusZoneProps, FocusZoneTabbableElements,
    InnerZonePredicate, TabbableSelector, predicates, selectors,
};

use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// The chat list: a vertical zone that starts on the newest message and lets Enter step into
/// a message.
pub fn chat_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_focus_zone(FocusZone::wrap(FocusZoneProps {
        direction: Some(FocusZoneDirection::Vertical),
        should_reset_active_element_when_tab_from_zone: Some(true),
        default_tabbable_element: Some(TabbableSelector(selectors::last_focusable)),
        should_enter_inner_zone: Some(InnerZonePredicate(predicates::enter_key)),
        ..FocusZoneProps::default()
    }))
}

/// A chat message. Inside a message Tab moves between focusable children; arrow keys are
/// swallowed (`preventDefault`) so they do not leak to the chat list, and Escape hands focus
/// back to the message itself.
pub fn chat_message_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new()
        .with_attributes(
            Slot::ROOT,
            AttributeMap::new().with(AttrName::DATA_IS_FOCUSABLE, true),
        )
        .with_focus_zone(FocusZone::embed(FocusZoneProps {
            handle_tab_key: Some(FocusZoneTabbableElements::All),
            is_circular_navigation: Some(true),
            direction: Some(FocusZoneDirection::Vertical),
            ..FocusZoneProps::default()
        }))
        .with_key_actions(
            Slot::ROOT,
            ActionMap::new()
                .with(
                    ActionName::from_static("preventDefault"),
                    KeyAction::on([Key::ARROW_UP, Key::ARROW_DOWN]),
                )
                .with(ActionName::from_static("focus"), KeyAction::on([Key::ESCAPE])),
        )
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "chat_behavior",
        behavior: chat_behavior,
        description: &[
            "Wraps the chat in a vertical focus zone.",
            "Initial focus lands on the last message; Enter moves focus into the focused message.",
        ],
        specification: &[
            "Wraps component in FocusZone.",
            "Provides arrow key navigation in vertical direction.",
            "Focused active element of the component is reset when TAB from the component.",
            "Focus is set initially on the specified default tabbable element.",
            "Focus can be moved inside a child component with embeded inner FocusZone by pressing a specified key.",
        ],
    },
    CatalogEntry {
        name: "chat_message_behavior",
        behavior: chat_message_behavior,
        description: &[
            "Sets the message to be a focusable element.",
            "Adds a vertical circular focus zone navigation where a user navigates using a Tab key.",
            "Adds a key action which prevents up and down arrow keys from navigating in FocusZone, we only want a Tab key to navigate.",
            "Adds an escape key action which focuses the chat message, i.e., moves key handling from inside a message back to the chat list.",
        ],
        specification: &[
            "Adds attribute 'data-is-focusable=true' to 'root' slot.",
            "Embeds component into FocusZone.",
            "Provides arrow key navigation in vertical direction.",
            "Keyboard navigation is circular.",
            "Focus is moved within the focusable children of the component using TAB key.",
            "Triggers 'preventDefault' action with 'ArrowUp' or 'ArrowDown' on 'root'.",
            "Triggers 'focus' action with 'Escape' on 'root'.",
        ],
    },
];
