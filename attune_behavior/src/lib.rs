// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune Behavior: accessibility behaviors for UI components.
//!
//! A behavior is a pure function from a component's props to the accessibility contract of
//! its rendered output:
//!
//! - per-slot ARIA attributes (`role`, `tabIndex`, `aria-*`, ...),
//! - an optional focus-zone declaration,
//! - per-slot key actions binding action names to key combinations.
//!
//! The rendering layer applies the attributes, hands the focus zone to the traversal engine
//! (see [`attune_focus`]) and registers key handlers for the actions it implements.
//!
//! ## Layout
//!
//! - [`BehaviorProps`] / [`PropValue`]: the props snapshot, with truthiness helpers.
//! - [`ResolvedBehavior`]: the output. Attribute maps keep `None` entries so "declared but
//!   undefined" stays distinguishable from "not mentioned".
//! - [`behaviors`]: the catalog functions, grouped by family.
//! - [`catalog`]: every behavior paired with its documentation and verifiable
//!   specification sentences.
//! - [`resolve`] / [`RenderPlan`]: override selection and explicit-attribute precedence.
//! - [`compose`]: shorthand ids, explicit-attribute merging, RTL text attributes.
//!
//! ## Minimal example
//!
//! ```rust
//! use attune_aria::AttrValue;
//! use attune_behavior::{AttributeMap, BehaviorProps, RenderPlan, behaviors};
//! use attune_focus::FocusZoneMode;
//!
//! let props = BehaviorProps::new().with("disabled", true);
//! let explicit = AttributeMap::new();
//! let plan = RenderPlan::new(&behaviors::menu_item_behavior, None, &props, &explicit);
//!
//! let root: Vec<_> = plan.attributes("root").unwrap().collect();
//! assert!(root.contains(&("role", &AttrValue::from("menuitem"))));
//! assert!(root.contains(&("aria-disabled", &AttrValue::Bool(true))));
//! // Items without a submenu never render aria-expanded.
//! assert!(root.iter().all(|(name, _)| *name != "aria-expanded"));
//!
//! let menu = behaviors::menu_behavior(&BehaviorProps::new());
//! assert_eq!(menu.focus_zone.map(|z| z.mode), Some(FocusZoneMode::Embed));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` on the attribute and key primitives.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod behaviors;
pub mod catalog;
pub mod compose;
mod map;
mod props;
mod resolved;
mod resolver;

pub use compose::merge_explicit;
pub use map::OrderedMap;
pub use props::{BehaviorProps, ElementDescriptor, ElementType, PropValue, ValueTextFn};
pub use resolved::{ActionMap, AttributeMap, ResolvedBehavior, SlotAttributes, SlotKeyActions};
pub use resolver::{Behavior, RenderPlan, resolve};
