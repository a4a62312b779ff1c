// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune Focus: focus-zone configuration and traversal.
//!
//! A focus zone is a region of the UI within which arrow-key and Tab navigation follow a
//! declared set of rules. This crate models zones in three layers:
//!
//! - **Declarations** ([`FocusZone`], [`FocusZoneProps`]) as written by behaviors. Everything
//!   is optional.
//! - **Translation** ([`FocusZoneSetup::translate`]) into complete [`FocusZoneParams`]: mode
//!   resolution, defaults, key-to-[`Navigation`] mapping, initial-focus selection, and
//!   inner-zone entry.
//! - A **reference traversal policy** ([`ZonePolicy`], implementing [`FocusPolicy`]) that
//!   moves focus across a [`FocusSpace`] of candidates the way a host traversal engine would.
//!
//! ## Minimal example
//!
//! A circular horizontal toolbar of two buttons:
//!
//! ```rust
//! use attune_aria::{Key, KeyEvent};
//! use attune_focus::{
//!     FocusEntry, FocusPolicy, FocusSpace, FocusZone, FocusZoneDirection, FocusZoneProps,
//!     FocusZoneSetup, TextDirection,
//! };
//! use kurbo::Rect;
//!
//! let zone = FocusZone::wrap(FocusZoneProps {
//!     direction: Some(FocusZoneDirection::Horizontal),
//!     is_circular_navigation: Some(true),
//!     ..FocusZoneProps::default()
//! });
//! let setup = FocusZoneSetup::translate(Some(&zone), TextDirection::Ltr);
//! let params = setup.params().unwrap();
//!
//! let entries = vec![
//!     FocusEntry::new(1_u32, Rect::new(0.0, 0.0, 10.0, 10.0)),
//!     FocusEntry::new(2_u32, Rect::new(20.0, 0.0, 30.0, 10.0)),
//! ];
//! let space = FocusSpace { nodes: &entries };
//!
//! let right = params.navigation_for(&KeyEvent::new(Key::ARROW_RIGHT), false).unwrap();
//! assert_eq!(params.policy().next(1, right, &space), Some(2));
//! // Circular: past the last button focus returns to the first.
//! assert_eq!(params.policy().next(2, right, &space), Some(1));
//! // Vertical arrows are not handled by a horizontal zone.
//! assert_eq!(params.navigation_for(&KeyEvent::new(Key::ARROW_DOWN), false), None);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod policy;
mod translate;
mod zone;

pub use policy::{FocusEntry, FocusPolicy, FocusSpace, Navigation, WrapMode, ZonePolicy};
pub use translate::{FocusZoneParams, FocusZoneSetup, TextDirection};
pub use zone::{
    FocusZone, FocusZoneDirection, FocusZoneMode, FocusZoneProps, FocusZoneTabbableElements,
    InnerZonePredicate, Subtree, SubtreeElement, TabbableSelector, predicates, selectors,
};
