// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-instance context: lifecycle ordering, timers, document listeners and ids.
//!
//! ## Ordering
//!
//! 1. [`InstanceContext::mount`] once.
//! 2. [`InstanceContext::render`] any number of times; timers and listeners may be registered
//!    while mounted.
//! 3. [`InstanceContext::unmount`] once. Every pending timer is cancelled and every listener
//!    removed; the returned [`Cleanup`] lists them.
//!
//! Calls out of this order return a [`LifecycleError`] and leave the context unchanged.
//!
//! Time is supplied by the host in milliseconds; the context never reads a clock.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use attune_behavior::compose::resolve_shorthand_id;
use attune_behavior::{AttributeMap, Behavior, BehaviorProps, PropValue, RenderPlan};
use hashbrown::HashMap;

use crate::error::LifecycleError;
use crate::ids::IdGenerator;

/// Where an instance is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InstancePhase {
    /// Constructed, not mounted yet.
    #[default]
    Created,
    /// Mounted; may render and own resources.
    Mounted,
    /// Unmounted; every further call fails.
    Unmounted,
}

/// Handle of a timer owned by an instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// Handle of a document-level listener registered by an instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerHandle(u64);

/// A pending timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    /// What the timer is for, e.g. `"loader-visible"`.
    pub label: Cow<'static, str>,
    /// When it fires, in host milliseconds.
    pub deadline: u64,
}

/// A document-level listener registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentListener {
    /// The DOM event type, e.g. `"keydown"`.
    pub event: Cow<'static, str>,
    /// What the listener is for, e.g. `"close-on-outside-click"`.
    pub label: Cow<'static, str>,
}

/// What [`InstanceContext::unmount`] cleaned up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cleanup {
    /// Timers that were still pending, in handle order.
    pub timers_cancelled: Vec<TimerHandle>,
    /// Listeners that were still registered, in handle order.
    pub listeners_removed: Vec<ListenerHandle>,
}

impl Cleanup {
    /// Whether nothing needed cleaning up.
    pub fn is_empty(&self) -> bool {
        self.timers_cancelled.is_empty() && self.listeners_removed.is_empty()
    }
}

/// The context object of one component instance.
///
/// ```rust
/// use attune_behavior::{AttributeMap, BehaviorProps, behaviors};
/// use attune_lifecycle::{InstanceContext, LifecycleError};
///
/// let mut loader = InstanceContext::default();
/// assert_eq!(
///     loader
///         .render(&behaviors::loader_behavior, None, &BehaviorProps::new(), &AttributeMap::new())
///         .unwrap_err(),
///     LifecycleError::RenderBeforeMount,
/// );
///
/// loader.mount().unwrap();
/// let show = loader.set_timeout(0, 300, "loader-visible").unwrap();
/// assert!(loader.expire(299).unwrap().is_empty());
///
/// let cleanup = loader.unmount().unwrap();
/// assert_eq!(cleanup.timers_cancelled, [show]);
/// ```
#[derive(Debug, Default)]
pub struct InstanceContext {
    phase: InstancePhase,
    renders: u64,
    ids: IdGenerator,
    shorthand_ids: HashMap<Cow<'static, str>, Cow<'static, str>>,
    timers: HashMap<TimerHandle, Timer>,
    listeners: HashMap<ListenerHandle, DocumentListener>,
    next_handle: u64,
}

impl InstanceContext {
    /// A fresh instance drawing ids from `ids`.
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> InstancePhase {
        self.phase
    }

    /// Number of successful renders.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Mount the instance.
    pub fn mount(&mut self) -> Result<(), LifecycleError> {
        match self.phase {
            InstancePhase::Created => {
                self.phase = InstancePhase::Mounted;
                tracing::debug!("instance mounted");
                Ok(())
            }
            InstancePhase::Mounted => Err(LifecycleError::DoubleMount),
            InstancePhase::Unmounted => Err(LifecycleError::UseAfterUnmount),
        }
    }

    /// Resolve the behavior for this render and apply explicit root attributes.
    pub fn render(
        &mut self,
        default: &dyn Behavior,
        user: Option<&dyn Behavior>,
        props: &BehaviorProps,
        explicit: &AttributeMap,
    ) -> Result<RenderPlan, LifecycleError> {
        self.ensure_mounted()?;
        self.renders += 1;
        tracing::trace!(render = self.renders, "instance render");
        Ok(RenderPlan::new(default, user, props, explicit))
    }

    /// The id of the element rendered for shorthand prop `prop`.
    ///
    /// Element and object shorthands keep their own id. Other shorthands get an id from this
    /// instance's [`IdGenerator`] the first time and keep it on later renders.
    pub fn shorthand_id(
        &mut self,
        prop: &'static str,
        value: Option<&PropValue>,
        kind: &str,
    ) -> Result<Option<Cow<'static, str>>, LifecycleError> {
        self.ensure_mounted()?;
        let ids = &mut self.ids;
        let current = self.shorthand_ids.get(prop).map(|id| &**id);
        let id = resolve_shorthand_id(value, current, || ids.next_id(kind));
        match &id {
            Some(id) => {
                self.shorthand_ids.insert(Cow::Borrowed(prop), id.clone());
            }
            None => {
                self.shorthand_ids.remove(prop);
            }
        }
        Ok(id)
    }

    /// Start a timer firing `delay` milliseconds after `now`.
    pub fn set_timeout(
        &mut self,
        now: u64,
        delay: u64,
        label: impl Into<Cow<'static, str>>,
    ) -> Result<TimerHandle, LifecycleError> {
        self.ensure_mounted()?;
        let handle = TimerHandle(self.next_handle());
        let timer = Timer {
            label: label.into(),
            deadline: now.saturating_add(delay),
        };
        tracing::debug!(label = %timer.label, deadline = timer.deadline, "timer set");
        self.timers.insert(handle, timer);
        Ok(handle)
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn clear_timeout(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle).is_some()
    }

    /// Remove and return every timer due at `now`, earliest deadline first.
    pub fn expire(&mut self, now: u64) -> Result<Vec<(TimerHandle, Timer)>, LifecycleError> {
        self.ensure_mounted()?;
        let due: Vec<TimerHandle> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(handle, _)| *handle)
            .collect();
        let mut fired: Vec<(TimerHandle, Timer)> = due
            .into_iter()
            .filter_map(|handle| self.timers.remove(&handle).map(|timer| (handle, timer)))
            .collect();
        fired.sort_by_key(|(handle, timer)| (timer.deadline, *handle));
        for (_, timer) in &fired {
            tracing::trace!(label = %timer.label, "timer fired");
        }
        Ok(fired)
    }

    /// Number of pending timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Register a document-level listener for `event`.
    pub fn add_document_listener(
        &mut self,
        event: impl Into<Cow<'static, str>>,
        label: impl Into<Cow<'static, str>>,
    ) -> Result<ListenerHandle, LifecycleError> {
        self.ensure_mounted()?;
        let handle = ListenerHandle(self.next_handle());
        let listener = DocumentListener {
            event: event.into(),
            label: label.into(),
        };
        tracing::debug!(event = %listener.event, label = %listener.label, "document listener added");
        self.listeners.insert(handle, listener);
        Ok(handle)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove_document_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(&handle).is_some()
    }

    /// The registered listener behind `handle`.
    pub fn document_listener(&self, handle: ListenerHandle) -> Option<&DocumentListener> {
        self.listeners.get(&handle)
    }

    /// Number of registered listeners.
    pub fn document_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Unmount the instance, cancelling every timer and removing every listener.
    pub fn unmount(&mut self) -> Result<Cleanup, LifecycleError> {
        match self.phase {
            InstancePhase::Mounted => {}
            InstancePhase::Created => return Err(LifecycleError::UnmountBeforeMount),
            InstancePhase::Unmounted => return Err(LifecycleError::UseAfterUnmount),
        }
        self.phase = InstancePhase::Unmounted;
        let mut cleanup = Cleanup {
            timers_cancelled: self.timers.drain().map(|(handle, _)| handle).collect(),
            listeners_removed: self.listeners.drain().map(|(handle, _)| handle).collect(),
        };
        cleanup.timers_cancelled.sort_unstable();
        cleanup.listeners_removed.sort_unstable();
        self.shorthand_ids.clear();
        tracing::debug!(
            timers = cleanup.timers_cancelled.len(),
            listeners = cleanup.listeners_removed.len(),
            "instance unmounted"
        );
        Ok(cleanup)
    }

    fn ensure_mounted(&self) -> Result<(), LifecycleError> {
        match self.phase {
            InstancePhase::Mounted => Ok(()),
            InstancePhase::Created => Err(LifecycleError::RenderBeforeMount),
            InstancePhase::Unmounted => Err(LifecycleError::UseAfterUnmount),
        }
    }

    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}
