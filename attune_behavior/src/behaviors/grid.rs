// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attune_focus::{FocusZone, FocusZoneDirection, FocusZoneProps};

use crate::catalog::CatalogEntry;
use crate::props::BehaviorProps;
use crate::resolved::ResolvedBehavior;

/// A grid of focusable cells in its own zone. Arrows follow DOM order, and focus reaching the
/// grid container is forwarded to a cell.
pub fn grid_behavior(_props: &BehaviorProps) -> ResolvedBehavior {
    ResolvedBehavior::new().with_focus_zone(FocusZone::wrap(FocusZoneProps {
        direction: Some(FocusZoneDirection::BidirectionalDomOrder),
        should_focus_inner_element_when_received_focus: Some(true),
        ..FocusZoneProps::default()
    }))
}

pub(crate) const ENTRIES: &[CatalogEntry] = &[CatalogEntry {
    name: "grid_behavior",
    behavior: grid_behavior,
    description: &["Arrow keys move between the cells of the grid in reading order."],
    specification: &[
        "Wraps component in FocusZone.",
        "Provides arrow key navigation in bidirectionalDomOrder direction.",
        "When the container element receives focus, then focus will be set to the default focusable child element.",
    ],
}];
