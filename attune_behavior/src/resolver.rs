// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing the behavior to run and preparing its output for rendering.
//!
//! ## Precedence
//!
//! 1. A user-supplied override behavior replaces the component's default behavior outright.
//!    No merge happens between the two; an override that wants to extend the default calls it.
//! 2. Attributes passed directly to the component win over the behavior's `root` attributes.
//!    This is applied after evaluation (see [`crate::compose::merge_explicit`]).

use attune_aria::AttrValue;
use attune_focus::{FocusZone, FocusZoneSetup, TextDirection};

use crate::compose::merge_explicit;
use crate::props::BehaviorProps;
use crate::resolved::{ActionMap, AttributeMap, ResolvedBehavior};

/// A pure mapping from props to a [`ResolvedBehavior`].
///
/// Implemented for every `Fn(&BehaviorProps) -> ResolvedBehavior`, so catalog functions and
/// closures are behaviors as-is.
pub trait Behavior {
    /// Evaluate the behavior for `props`.
    fn resolve(&self, props: &BehaviorProps) -> ResolvedBehavior;
}

impl<F> Behavior for F
where
    F: Fn(&BehaviorProps) -> ResolvedBehavior,
{
    fn resolve(&self, props: &BehaviorProps) -> ResolvedBehavior {
        self(props)
    }
}

/// Evaluate `user` if supplied, `default` otherwise.
///
/// ```rust
/// use attune_behavior::{BehaviorProps, ResolvedBehavior, behaviors, resolve};
///
/// let silent = |_: &BehaviorProps| ResolvedBehavior::new();
/// let props = BehaviorProps::new();
///
/// let default = resolve(&behaviors::menu_behavior, None, &props);
/// assert!(default.attribute("root", "role").is_some());
///
/// let replaced = resolve(&behaviors::menu_behavior, Some(&silent), &props);
/// assert_eq!(replaced, ResolvedBehavior::new());
/// ```
pub fn resolve(
    default: &dyn Behavior,
    user: Option<&dyn Behavior>,
    props: &BehaviorProps,
) -> ResolvedBehavior {
    match user {
        Some(user) => {
            tracing::debug!("override behavior replaces the default");
            user.resolve(props)
        }
        None => default.resolve(props),
    }
}

/// A resolved behavior with explicit attributes applied, ready for the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    behavior: ResolvedBehavior,
}

impl RenderPlan {
    /// Resolve the behavior and apply `explicit` root attributes.
    pub fn new(
        default: &dyn Behavior,
        user: Option<&dyn Behavior>,
        props: &BehaviorProps,
        explicit: &AttributeMap,
    ) -> Self {
        Self::from_resolved(resolve(default, user, props), explicit)
    }

    /// Apply `explicit` root attributes to an already resolved behavior.
    pub fn from_resolved(resolved: ResolvedBehavior, explicit: &AttributeMap) -> Self {
        Self {
            behavior: merge_explicit(resolved, explicit),
        }
    }

    /// Attributes to render on `slot`, present values only.
    ///
    /// `None` when the behavior does not mention the slot, so the rendering layer can skip it
    /// entirely.
    pub fn attributes(&self, slot: &str) -> Option<impl Iterator<Item = (&str, &AttrValue)>> {
        self.behavior
            .slot_attributes(slot)
            .map(|attrs| attrs.present().map(|(name, value)| (name.as_str(), value)))
    }

    /// Key actions to bind on `slot`.
    pub fn key_actions(&self, slot: &str) -> Option<&ActionMap> {
        self.behavior.slot_key_actions(slot)
    }

    /// The focus-zone declaration.
    pub fn focus_zone(&self) -> Option<&FocusZone> {
        self.behavior.focus_zone.as_ref()
    }

    /// The focus-zone setup for the traversal engine.
    pub fn focus_zone_setup(&self, text_direction: TextDirection) -> FocusZoneSetup {
        FocusZoneSetup::translate(self.focus_zone(), text_direction)
    }

    /// The merged behavior.
    pub fn behavior(&self) -> &ResolvedBehavior {
        &self.behavior
    }

    /// Take the merged behavior.
    pub fn into_behavior(self) -> ResolvedBehavior {
        self.behavior
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors;
    use alloc::vec::Vec;
    use attune_aria::{AttrName, Slot};
    use pretty_assertions::assert_eq;

    fn labelled(_: &BehaviorProps) -> ResolvedBehavior {
        ResolvedBehavior::new().with_attributes(
            Slot::ROOT,
            AttributeMap::new()
                .with(AttrName::ROLE, "region")
                .with_optional(AttrName::ARIA_LABEL, None::<&'static str>),
        )
    }

    #[test]
    fn override_fully_replaces_default() {
        let props = BehaviorProps::new();
        let resolved = resolve(&behaviors::menu_behavior, Some(&labelled), &props);
        assert_eq!(resolved, labelled(&props));
        assert!(resolved.focus_zone.is_none());
    }

    #[test]
    fn override_may_extend_the_default() {
        let extended = |props: &BehaviorProps| {
            let mut r = behaviors::menu_behavior(props);
            if let Some(root) = r.attributes.get_mut("root") {
                root.insert(AttrName::ARIA_LABEL, Some(AttrValue::from("Actions")));
            }
            r
        };
        let props = BehaviorProps::new();
        let resolved = resolve(&behaviors::menu_behavior, Some(&extended), &props);
        assert_eq!(resolved.attribute("root", "role"), Some(&AttrValue::from("menu")));
        assert_eq!(
            resolved.attribute("root", "aria-label"),
            Some(&AttrValue::from("Actions"))
        );
    }

    #[test]
    fn render_plan_omits_undefined_and_unmentioned() {
        let explicit = AttributeMap::new().with(AttrName::ID, "main");
        let plan = RenderPlan::new(&labelled, None, &BehaviorProps::new(), &explicit);

        let root: Vec<(&str, &AttrValue)> = plan.attributes("root").into_iter().flatten().collect();
        assert_eq!(
            root,
            [
                ("role", &AttrValue::from("region")),
                ("id", &AttrValue::from("main")),
            ]
        );
        assert!(plan.attributes("trigger").is_none());
        assert!(plan.key_actions("root").is_none());
        assert_eq!(
            plan.focus_zone_setup(TextDirection::Ltr),
            FocusZoneSetup::Unwrapped
        );
    }

    #[test]
    fn explicit_attributes_apply_to_the_override_too() {
        let explicit = AttributeMap::new().with(AttrName::ROLE, "navigation");
        let plan = RenderPlan::new(
            &behaviors::menu_behavior,
            Some(&labelled),
            &BehaviorProps::new(),
            &explicit,
        );
        assert_eq!(
            plan.behavior().attribute("root", "role"),
            Some(&AttrValue::from("navigation"))
        );
    }
}
