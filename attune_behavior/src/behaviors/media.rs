// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_aria::{AttrName, Slot};

use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::{AttributeMap, ResolvedBehavior};

/// Decorative unless described: `aria-hidden=true` when neither `alt` nor `aria-label` is
/// given, undefined otherwise.
pub fn image_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let described = props.flag("alt") || props.flag("aria-label");
    ResolvedBehavior::new().with_attributes(
        Slot::ROOT,
        AttributeMap::new().with_optional(AttrName::ARIA_HIDDEN, (!described).then_some(true)),
    )
}

/// Icons are hidden from assistive technology unless labelled, in which case they become
/// images (`role="img"`).
pub fn icon_behavior(props: &BehaviorProps) -> ResolvedBehavior {
    let labelled = props.flag("aria-label");
    ResolvedBehavior::new().with_attributes(
        Slot::ROOT,
        AttributeMap::new()
            .with_optional(AttrName::ROLE, labelled.then_some("img"))
            .with_optional(AttrName::ARIA_HIDDEN, (!labelled).then_some(true)),
    )
}

/// `role="progressbar"`.
pub fn loader_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_attributes(
        Slot::ROOT,
        AttributeMap::new().with(AttrName::ROLE, "progressbar"),
    )
}

/// Announces its content politely: `role="alert"` and `aria-live="polite"` on `content`.
pub fn alert_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_attributes(
        Slot::CONTENT,
        AttributeMap::new()
            .with(AttrName::ROLE, "alert")
            .with(AttrName::ARIA_LIVE, "polite"),
    )
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "image_behavior",
        behavior: image_behavior,
        description: &[
            "Hides decorative images from assistive technology.",
            "An image with 'alt' or 'aria-label' is announced normally.",
        ],
        specification: &["Adds attribute 'aria-hidden=true', if there is no 'alt' property provided."],
    },
    CatalogEntry {
        name: "icon_behavior",
        behavior: icon_behavior,
        description: &["Hides icons from assistive technology unless they carry a label."],
        specification: &[
            "Adds attribute 'aria-hidden=true', if there is no 'aria-label' property provided.",
        ],
    },
    CatalogEntry {
        name: "loader_behavior",
        behavior: loader_behavior,
        description: &[
            "Identifies the loader as a progress indicator.",
            "The rendering layer may delay showing the loader; the delay timer is owned by the component instance.",
        ],
        specification: &["Adds role='progressbar'."],
    },
    CatalogEntry {
        name: "alert_behavior",
        behavior: alert_behavior,
        description: &["Announces the alert content as soon as it changes, without interrupting the user."],
        specification: &[
            "Adds role 'alert' to 'content' slot.",
            "Adds attribute 'aria-live=polite' to 'content' slot.",
        ],
    },
];
