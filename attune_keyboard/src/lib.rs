// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune Keyboard: key-action dispatch for resolved behaviors.
//!
//! A behavior declares, per slot, which named actions fire on which key combinations. This
//! crate turns those declarations into a [`DispatchTable`] indexed by key code and runs the
//! host's handlers for a key event.
//!
//! - [`DispatchTable::build`] binds every enabled action of every slot. Disabled actions (the
//!   `None` sentinel) are recorded but never bound; empty sequences bind nothing. Right-to-left
//!   tables mirror `ArrowLeft`/`ArrowRight`.
//! - [`DispatchTable::matching`] lists the actions one key event triggers on a slot, each at
//!   most once, in declaration order.
//! - [`dispatcher::run`] invokes [`Handlers`] for those actions and honors [`Outcome::Stop`].
//!
//! Matching compares numeric key codes. Modifiers are tri-state per combination: required,
//! forbidden, or ignored (see [`attune_aria::KeyCombination`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
mod table;

pub use dispatcher::{Handler, Handlers, Outcome};
pub use table::{Binding, DispatchTable};
