// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune Lifecycle: the context object of a component instance.
//!
//! Behaviors are pure, but the components around them are not: a loader shows itself after a
//! delay, a popup listens for clicks on the whole document, a dialog generates ids for its
//! header and content. [`InstanceContext`] owns all of that state for one instance and ties
//! it to an explicit `mount → render* → unmount` order:
//!
//! - [`InstanceContext::render`] resolves the behavior (override precedence and explicit
//!   attributes included) and fails with [`LifecycleError`] outside the mounted phase.
//! - Timers ([`TimerHandle`]) and document listeners ([`ListenerHandle`]) are registered on
//!   the context, and [`InstanceContext::unmount`] cancels and removes whatever is left,
//!   reporting it as a [`Cleanup`].
//! - Shorthand ids come from the instance's own [`IdGenerator`], never from process-wide
//!   state, and stay stable across renders.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod ids;
mod instance;

pub use error::LifecycleError;
pub use ids::IdGenerator;
pub use instance::{
    Cleanup, DocumentListener, InstanceContext, InstancePhase, ListenerHandle, Timer, TimerHandle,
};
