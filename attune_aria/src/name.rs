// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! String-backed names for slots, attributes, and actions.

use alloc::borrow::Cow;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// A name backed by a static string.
            pub const fn from_static(name: &'static str) -> Self {
                Self(Cow::Borrowed(name))
            }

            /// A name backed by an owned string.
            pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
                Self(name.into())
            }

            /// The name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&'static str> for $name {
            fn from(name: &'static str) -> Self {
                Self::from_static(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(Cow::Owned(name))
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

name_type!(
    /// A named sub-element of a component.
    ///
    /// Slots key both the attribute map and the key-action map of a resolved behavior, so the
    /// rendering layer knows which element receives which output.
    Slot
);

name_type!(
    /// An ARIA or DOM attribute name, spelled exactly as rendered (`aria-expanded`, `tabIndex`).
    AttrName
);

name_type!(
    /// A semantic action name such as `performClick` or `closeAllMenus`.
    ///
    /// The rendering layer maps action names to its own handlers.
    ActionName
);

impl Slot {
    /// The component's outermost element.
    pub const ROOT: Self = Self::from_static("root");
    /// The element that opens a popup.
    pub const TRIGGER: Self = Self::from_static("trigger");
    /// The popup surface itself.
    pub const POPUP: Self = Self::from_static("popup");
    /// A native input element.
    pub const INPUT: Self = Self::from_static("input");
    /// An anchor inside an item.
    pub const ANCHOR: Self = Self::from_static("anchor");
    /// A wrapper around an item.
    pub const WRAPPER: Self = Self::from_static("wrapper");
    /// A nested button.
    pub const BUTTON: Self = Self::from_static("button");
    /// The content region of a composite component.
    pub const CONTENT: Self = Self::from_static("content");
    /// A header region.
    pub const HEADER: Self = Self::from_static("header");
    /// A visual indicator.
    pub const INDICATOR: Self = Self::from_static("indicator");
    /// A text label.
    pub const LABEL: Self = Self::from_static("label");
    /// An inline SVG.
    pub const SVG: Self = Self::from_static("svg");
}

impl AttrName {
    /// `role`.
    pub const ROLE: Self = Self::from_static("role");
    /// `tabIndex`.
    pub const TAB_INDEX: Self = Self::from_static("tabIndex");
    /// `id`.
    pub const ID: Self = Self::from_static("id");
    /// `dir`.
    pub const DIR: Self = Self::from_static("dir");
    /// `data-is-focusable`, read by the focus-traversal engine.
    pub const DATA_IS_FOCUSABLE: Self = Self::from_static("data-is-focusable");
    /// `aria-checked`.
    pub const ARIA_CHECKED: Self = Self::from_static("aria-checked");
    /// `aria-controls`.
    pub const ARIA_CONTROLS: Self = Self::from_static("aria-controls");
    /// `aria-describedby`.
    pub const ARIA_DESCRIBEDBY: Self = Self::from_static("aria-describedby");
    /// `aria-disabled`.
    pub const ARIA_DISABLED: Self = Self::from_static("aria-disabled");
    /// `aria-expanded`.
    pub const ARIA_EXPANDED: Self = Self::from_static("aria-expanded");
    /// `aria-haspopup`.
    pub const ARIA_HASPOPUP: Self = Self::from_static("aria-haspopup");
    /// `aria-hidden`.
    pub const ARIA_HIDDEN: Self = Self::from_static("aria-hidden");
    /// `aria-label`.
    pub const ARIA_LABEL: Self = Self::from_static("aria-label");
    /// `aria-labelledby`.
    pub const ARIA_LABELLEDBY: Self = Self::from_static("aria-labelledby");
    /// `aria-level`.
    pub const ARIA_LEVEL: Self = Self::from_static("aria-level");
    /// `aria-live`.
    pub const ARIA_LIVE: Self = Self::from_static("aria-live");
    /// `aria-modal`.
    pub const ARIA_MODAL: Self = Self::from_static("aria-modal");
    /// `aria-orientation`.
    pub const ARIA_ORIENTATION: Self = Self::from_static("aria-orientation");
    /// `aria-pressed`.
    pub const ARIA_PRESSED: Self = Self::from_static("aria-pressed");
    /// `aria-selected`.
    pub const ARIA_SELECTED: Self = Self::from_static("aria-selected");
    /// `aria-valuemax`.
    pub const ARIA_VALUEMAX: Self = Self::from_static("aria-valuemax");
    /// `aria-valuemin`.
    pub const ARIA_VALUEMIN: Self = Self::from_static("aria-valuemin");
    /// `aria-valuenow`.
    pub const ARIA_VALUENOW: Self = Self::from_static("aria-valuenow");
    /// `aria-valuetext`.
    pub const ARIA_VALUETEXT: Self = Self::from_static("aria-valuetext");
}

impl ActionName {
    /// Activate the element as if clicked.
    pub const PERFORM_CLICK: Self = Self::from_static("performClick");
}
