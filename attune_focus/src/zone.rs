// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus-zone declarations as written by behaviors.
//!
//! Every field of [`FocusZoneProps`] is optional so that a declared value can be told apart
//! from a default one; [`crate::FocusZoneParams`] applies the defaults.

use core::fmt;

use attune_aria::{AttrName, AttrValue, KeyEvent};

/// How a component relates to a focus-traversal region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusZoneMode {
    /// No region: the component renders without focus-zone handling.
    #[default]
    None,
    /// The component root joins a region owned by an ancestor.
    Embed,
    /// A new region is created at the component root.
    Wrap,
}

/// Which arrow keys move focus inside a zone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusZoneDirection {
    /// Up and Down.
    Vertical,
    /// Left and Right.
    Horizontal,
    /// All four arrows, following the visual layout.
    #[default]
    Bidirectional,
    /// All four arrows, following DOM order instead of visual position.
    BidirectionalDomOrder,
}

/// Which elements take part in Tab traversal inside a zone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusZoneTabbableElements {
    /// Tab is not intercepted; the host handles it.
    #[default]
    None,
    /// Tab cycles through every focusable descendant.
    All,
    /// Tab is intercepted only while focus is inside an input.
    InputOnly,
}

/// One rendered element inside a zone, as seen by a [`TabbableSelector`].
#[derive(Clone, Copy, Debug)]
pub struct SubtreeElement<'a> {
    /// Whether the traversal engine may move focus to this element.
    pub focusable: bool,
    /// The element's rendered attributes.
    pub attributes: &'a [(AttrName, AttrValue)],
}

impl SubtreeElement<'_> {
    /// The value of attribute `name`, if rendered.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Whether attribute `name` is rendered as `true` (boolean or string form).
    pub fn attribute_is_true(&self, name: &str) -> bool {
        match self.attribute(name) {
            Some(AttrValue::Bool(b)) => *b,
            Some(AttrValue::Str(s)) => s == "true",
            _ => false,
        }
    }
}

/// The rendered elements of a zone, in DOM order.
#[derive(Clone, Copy, Debug)]
pub struct Subtree<'a> {
    /// Elements in DOM order.
    pub elements: &'a [SubtreeElement<'a>],
}

/// Chooses the element that receives focus when a zone mounts.
///
/// Returns an index into [`Subtree::elements`]; `None` means no focus is forced.
#[derive(Copy, Clone)]
pub struct TabbableSelector(pub fn(&Subtree<'_>) -> Option<usize>);

impl TabbableSelector {
    /// Evaluate the selector, discarding indices that do not name a focusable element.
    pub fn select(&self, subtree: &Subtree<'_>) -> Option<usize> {
        (self.0)(subtree).filter(|&i| subtree.elements.get(i).is_some_and(|e| e.focusable))
    }
}

impl PartialEq for TabbableSelector {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::fn_addr_eq(self.0, other.0)
    }
}

impl fmt::Debug for TabbableSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TabbableSelector(..)")
    }
}

/// Decides whether a key event moves focus into a nested zone.
#[derive(Copy, Clone)]
pub struct InnerZonePredicate(pub fn(&KeyEvent) -> bool);

impl InnerZonePredicate {
    /// Evaluate the predicate.
    pub fn test(&self, event: &KeyEvent) -> bool {
        (self.0)(event)
    }
}

impl PartialEq for InnerZonePredicate {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::fn_addr_eq(self.0, other.0)
    }
}

impl fmt::Debug for InnerZonePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InnerZonePredicate(..)")
    }
}

/// The configuration bag of a focus zone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusZoneProps {
    /// Arrow-key axes; defaults to [`FocusZoneDirection::Bidirectional`].
    pub direction: Option<FocusZoneDirection>,
    /// Whether moving past either end wraps around; defaults to `false`.
    pub is_circular_navigation: Option<bool>,
    /// Tab participation; defaults to [`FocusZoneTabbableElements::None`].
    pub handle_tab_key: Option<FocusZoneTabbableElements>,
    /// Focus the zone as soon as it mounts.
    pub should_focus_on_mount: Option<bool>,
    /// Forget the last active element when Tab leaves the zone.
    pub should_reset_active_element_when_tab_from_zone: Option<bool>,
    /// Initial focus target.
    pub default_tabbable_element: Option<TabbableSelector>,
    /// Key predicate for entering a nested zone.
    pub should_enter_inner_zone: Option<InnerZonePredicate>,
    /// Forward focus from the container to its default child.
    pub should_focus_inner_element_when_received_focus: Option<bool>,
    /// Prevent the host's default handling of keys the zone consumed.
    pub prevent_default_when_handled: Option<bool>,
}

/// A focus-zone declaration: a mode plus its configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusZone {
    /// How the component relates to the traversal region.
    pub mode: FocusZoneMode,
    /// Region configuration.
    pub props: FocusZoneProps,
}

impl FocusZone {
    /// A zone that joins the ancestor's region.
    pub fn embed(props: FocusZoneProps) -> Self {
        Self {
            mode: FocusZoneMode::Embed,
            props,
        }
    }

    /// A zone that creates its own region.
    pub fn wrap(props: FocusZoneProps) -> Self {
        Self {
            mode: FocusZoneMode::Wrap,
            props,
        }
    }
}

/// Ready-made [`TabbableSelector`] functions.
pub mod selectors {
    use super::Subtree;

    /// The last focusable element.
    pub fn last_focusable(subtree: &Subtree<'_>) -> Option<usize> {
        subtree.elements.iter().rposition(|e| e.focusable)
    }

    /// The first focusable element rendered with `aria-selected=true`.
    pub fn first_selected(subtree: &Subtree<'_>) -> Option<usize> {
        subtree
            .elements
            .iter()
            .position(|e| e.focusable && e.attribute_is_true("aria-selected"))
    }

    /// The first focusable element rendered with `aria-checked=true`.
    pub fn first_checked(subtree: &Subtree<'_>) -> Option<usize> {
        subtree
            .elements
            .iter()
            .position(|e| e.focusable && e.attribute_is_true("aria-checked"))
    }
}

/// Ready-made [`InnerZonePredicate`] functions.
pub mod predicates {
    use attune_aria::{Key, KeyEvent};

    /// Enter without modifiers.
    pub fn enter_key(event: &KeyEvent) -> bool {
        event.key == Key::ENTER && event.modifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn selector_rejects_non_focusable_picks() {
        fn always_first(_: &Subtree<'_>) -> Option<usize> {
            Some(0)
        }
        let elements = vec![
            SubtreeElement {
                focusable: false,
                attributes: &[],
            },
            SubtreeElement {
                focusable: true,
                attributes: &[],
            },
        ];
        let subtree = Subtree {
            elements: &elements,
        };
        assert_eq!(TabbableSelector(always_first).select(&subtree), None);
        assert_eq!(
            TabbableSelector(selectors::last_focusable).select(&subtree),
            Some(1)
        );
    }

    #[test]
    fn selected_selector_accepts_string_and_bool_forms() {
        let as_string = [(AttrName::ARIA_SELECTED, AttrValue::from("true"))];
        let as_bool = [(AttrName::ARIA_SELECTED, AttrValue::from(true))];
        let elements = vec![
            SubtreeElement {
                focusable: true,
                attributes: &[],
            },
            SubtreeElement {
                focusable: true,
                attributes: &as_string,
            },
            SubtreeElement {
                focusable: true,
                attributes: &as_bool,
            },
        ];
        let subtree = Subtree {
            elements: &elements,
        };
        assert_eq!(selectors::first_selected(&subtree), Some(1));
        assert_eq!(selectors::first_checked(&subtree), None);
    }

    #[test]
    fn selectors_compare_by_function() {
        let a = TabbableSelector(selectors::last_focusable);
        let b = TabbableSelector(selectors::last_focusable);
        let c = TabbableSelector(selectors::first_selected);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
