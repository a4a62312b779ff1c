// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation of focus-zone declarations into traversal-engine parameters.
//!
//! Behaviors declare zones loosely: every property is optional and the whole zone may be
//! absent. [`FocusZoneSetup::translate`] settles all of that once, so the traversal engine only
//! ever sees complete [`FocusZoneParams`].
//!
//! ## Defaults
//!
//! | Declaration | Default |
//! |---|---|
//! | zone absent or `mode: None` | [`FocusZoneSetup::Unwrapped`] |
//! | `direction` | [`FocusZoneDirection::Bidirectional`] |
//! | `is_circular_navigation` | `false` ([`WrapMode::Never`]) |
//! | `handle_tab_key` | [`FocusZoneTabbableElements::None`] |
//! | boolean switches | `false` |
//! | selector / predicate | none: no forced focus, no inner-zone entry |

use attune_aria::{Key, KeyEvent, Modifiers};

use crate::policy::{Navigation, WrapMode, ZonePolicy};
use crate::zone::{
    FocusZone, FocusZoneDirection, FocusZoneMode, FocusZoneProps, FocusZoneTabbableElements,
    InnerZonePredicate, Subtree, TabbableSelector,
};

/// Reading direction of the surrounding content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// How the rendering layer wraps a component root.
#[derive(Clone, Debug, PartialEq)]
pub enum FocusZoneSetup {
    /// Render without a focus-traversal region.
    Unwrapped,
    /// Join the region owned by an ancestor, contributing these parameters.
    Embed(FocusZoneParams),
    /// Create a new region with these parameters.
    Wrap(FocusZoneParams),
}

impl FocusZoneSetup {
    /// Translate an optional zone declaration.
    ///
    /// ```rust
    /// use attune_focus::{
    ///     FocusZone, FocusZoneProps, FocusZoneSetup, TextDirection, WrapMode,
    /// };
    ///
    /// assert_eq!(
    ///     FocusZoneSetup::translate(None, TextDirection::Ltr),
    ///     FocusZoneSetup::Unwrapped,
    /// );
    ///
    /// let zone = FocusZone::embed(FocusZoneProps {
    ///     is_circular_navigation: Some(true),
    ///     ..FocusZoneProps::default()
    /// });
    /// let setup = FocusZoneSetup::translate(Some(&zone), TextDirection::Ltr);
    /// assert_eq!(setup.params().map(|p| p.wrap), Some(WrapMode::Scope));
    /// assert!(!setup.creates_region());
    /// ```
    pub fn translate(zone: Option<&FocusZone>, text_direction: TextDirection) -> Self {
        let Some(zone) = zone else {
            tracing::trace!("no focus zone declared");
            return Self::Unwrapped;
        };
        match zone.mode {
            FocusZoneMode::None => {
                tracing::trace!("focus zone declared with mode none");
                Self::Unwrapped
            }
            FocusZoneMode::Embed => {
                Self::Embed(FocusZoneParams::from_props(&zone.props, text_direction))
            }
            FocusZoneMode::Wrap => {
                Self::Wrap(FocusZoneParams::from_props(&zone.props, text_direction))
            }
        }
    }

    /// The translated parameters, unless the component is unwrapped.
    pub fn params(&self) -> Option<&FocusZoneParams> {
        match self {
            Self::Unwrapped => None,
            Self::Embed(params) | Self::Wrap(params) => Some(params),
        }
    }

    /// Whether a new region is instantiated at the component root.
    pub fn creates_region(&self) -> bool {
        matches!(self, Self::Wrap(_))
    }
}

/// Complete focus-zone parameters, every default applied.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusZoneParams {
    /// Arrow-key axes and ordering model.
    pub direction: FocusZoneDirection,
    /// Whether traversal wraps around at the ends.
    pub wrap: WrapMode,
    /// Tab participation.
    pub handle_tab_key: FocusZoneTabbableElements,
    /// Focus the zone when it mounts.
    pub focus_on_mount: bool,
    /// Forget the active element when Tab leaves the zone.
    pub reset_active_element_on_tab_out: bool,
    /// Forward container focus to the default child.
    pub focus_inner_element_on_receive: bool,
    /// Prevent host default handling of consumed keys.
    pub prevent_default_when_handled: bool,
    /// Initial focus target.
    pub default_tabbable_element: Option<TabbableSelector>,
    /// Key predicate for entering a nested zone.
    pub enter_inner_zone: Option<InnerZonePredicate>,
    /// Reading direction of the surrounding content.
    pub text_direction: TextDirection,
}

impl FocusZoneParams {
    /// Apply defaults to a declared property bag.
    pub fn from_props(props: &FocusZoneProps, text_direction: TextDirection) -> Self {
        let params = Self {
            direction: props.direction.unwrap_or_default(),
            wrap: if props.is_circular_navigation.unwrap_or(false) {
                WrapMode::Scope
            } else {
                WrapMode::Never
            },
            handle_tab_key: props.handle_tab_key.unwrap_or_default(),
            focus_on_mount: props.should_focus_on_mount.unwrap_or(false),
            reset_active_element_on_tab_out: props
                .should_reset_active_element_when_tab_from_zone
                .unwrap_or(false),
            focus_inner_element_on_receive: props
                .should_focus_inner_element_when_received_focus
                .unwrap_or(false),
            prevent_default_when_handled: props.prevent_default_when_handled.unwrap_or(false),
            default_tabbable_element: props.default_tabbable_element,
            enter_inner_zone: props.should_enter_inner_zone,
            text_direction,
        };
        tracing::debug!(
            direction = ?params.direction,
            wrap = ?params.wrap,
            tab = ?params.handle_tab_key,
            "translated focus zone"
        );
        params
    }

    /// The traversal policy these parameters configure.
    pub fn policy(&self) -> ZonePolicy {
        ZonePolicy {
            wrap: self.wrap,
            direction: self.direction,
            text_direction: self.text_direction,
        }
    }

    /// The element to focus when the zone mounts, as an index into `subtree`.
    ///
    /// `None` when no selector is declared or the selector matches nothing focusable; the
    /// engine then leaves focus where it is.
    pub fn initial_focus(&self, subtree: &Subtree<'_>) -> Option<usize> {
        let selected = self.default_tabbable_element?.select(subtree);
        if selected.is_none() {
            tracing::trace!("default tabbable selector matched nothing");
        }
        selected
    }

    /// Whether `event` transfers focus into a nested zone.
    pub fn should_enter_inner_zone(&self, event: &KeyEvent) -> bool {
        self.enter_inner_zone.is_some_and(|p| p.test(event))
    }

    /// The navigation intent this zone derives from `event`.
    ///
    /// `from_input` tells whether focus currently sits in a text input, which matters for
    /// [`FocusZoneTabbableElements::InputOnly`]. Returns `None` for keys the zone leaves to
    /// the host.
    ///
    /// Arrow keys on a visual axis map to geometric intents, so right-to-left layouts need no
    /// remapping there. Under [`FocusZoneDirection::BidirectionalDomOrder`] arrows map to
    /// `Next`/`Prev`, and `ArrowLeft`/`ArrowRight` swap in right-to-left content.
    pub fn navigation_for(&self, event: &KeyEvent, from_input: bool) -> Option<Navigation> {
        if self.should_enter_inner_zone(event) {
            return Some(Navigation::EnterScope);
        }
        let dom_order = self.direction == FocusZoneDirection::BidirectionalDomOrder;
        let vertical = self.direction != FocusZoneDirection::Horizontal;
        let horizontal = self.direction != FocusZoneDirection::Vertical;
        let key = match self.text_direction {
            TextDirection::Ltr => event.key,
            TextDirection::Rtl if dom_order => event.key.mirrored(),
            TextDirection::Rtl => event.key,
        };

        let navigation = match key {
            Key::TAB => {
                let handled = match self.handle_tab_key {
                    FocusZoneTabbableElements::None => false,
                    FocusZoneTabbableElements::All => true,
                    FocusZoneTabbableElements::InputOnly => from_input,
                };
                if !handled {
                    return None;
                }
                if event.modifiers.contains(Modifiers::SHIFT) {
                    Navigation::Prev
                } else {
                    Navigation::Next
                }
            }
            Key::ARROW_UP if vertical => {
                if dom_order {
                    Navigation::Prev
                } else {
                    Navigation::Up
                }
            }
            Key::ARROW_DOWN if vertical => {
                if dom_order {
                    Navigation::Next
                } else {
                    Navigation::Down
                }
            }
            Key::ARROW_LEFT if horizontal => {
                if dom_order {
                    Navigation::Prev
                } else {
                    Navigation::Left
                }
            }
            Key::ARROW_RIGHT if horizontal => {
                if dom_order {
                    Navigation::Next
                } else {
                    Navigation::Right
                }
            }
            Key::HOME => Navigation::First,
            Key::END => Navigation::Last,
            _ => return None,
        };
        tracing::trace!(key = %event.key, ?navigation, "zone navigation");
        Some(navigation)
    }
}
