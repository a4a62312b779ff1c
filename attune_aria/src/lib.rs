// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune ARIA: the shared vocabulary of accessibility behaviors.
//!
//! Every other Attune crate speaks in terms of the primitives defined here:
//!
//! - [`Key`]: numeric key codes. Behaviors declare key combinations with these codes and the
//!   dispatcher compares events against the same table, so the two can never disagree about
//!   what "Enter" means.
//! - [`Modifiers`] and [`KeyCombination`]: a key code plus tri-state modifier requirements
//!   (must be pressed, must be released, or ignored).
//! - [`KeyEvent`]: the keyboard event snapshot handed to the core by the host.
//! - [`KeyAction`]: a named action's key combinations, or the disabled sentinel.
//! - [`Slot`], [`AttrName`], [`ActionName`]: string-backed names with constants for the
//!   common cases.
//! - [`AttrValue`]: the value of a rendered attribute.
//!
//! ## Minimal example
//!
//! ```rust
//! use attune_aria::{Key, KeyCombination, KeyEvent, Modifiers};
//!
//! let plain_enter = KeyCombination::new(Key::ENTER);
//! let ctrl_enter = KeyCombination::new(Key::ENTER).with(Modifiers::CTRL);
//!
//! let event = KeyEvent::new(Key::ENTER).with_modifiers(Modifiers::CTRL);
//! // Modifiers the combination does not mention are ignored.
//! assert!(plain_enter.matches(&event));
//! assert!(ctrl_enter.matches(&event));
//! assert!(!ctrl_enter.matches(&KeyEvent::new(Key::ENTER)));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` on the plain-data types so hosts can snapshot
//!   resolved behaviors.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod key;
mod name;
mod value;

pub use key::{Key, KeyAction, KeyCombination, KeyCombinations, KeyEvent, Modifiers};
pub use name::{ActionName, AttrName, Slot};
pub use value::AttrValue;
