// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities shared by component construction routines.
//!
//! Components call these explicitly instead of inheriting them: shorthand id resolution,
//! explicit-attribute merging, and RTL text attribute injection.

use alloc::borrow::Cow;
use alloc::string::String;

use attune_aria::{AttrName, Slot};

use crate::props::PropValue;
use crate::resolved::{AttributeMap, ResolvedBehavior};

/// The id of the element a shorthand prop renders.
///
/// - Absent shorthand: no id.
/// - Element or object shorthand: its own `id`, which may be absent.
/// - Any other shorthand (a string, a number): `current` when known, otherwise a fresh id
///   from `generate`.
///
/// ```rust
/// use attune_behavior::{ElementDescriptor, PropValue, compose::resolve_shorthand_id};
///
/// let header = PropValue::from("Settings");
/// let id = resolve_shorthand_id(Some(&header), None, || "dialog-header-1".into());
/// assert_eq!(id.as_deref(), Some("dialog-header-1"));
///
/// let element = PropValue::from(ElementDescriptor::tag("h2").with_id("title"));
/// let id = resolve_shorthand_id(Some(&element), Some("stale"), || unreachable!());
/// assert_eq!(id.as_deref(), Some("title"));
/// ```
pub fn resolve_shorthand_id<F>(
    value: Option<&PropValue>,
    current: Option<&str>,
    generate: F,
) -> Option<Cow<'static, str>>
where
    F: FnOnce() -> String,
{
    match value? {
        PropValue::Element(element) => element.id.clone(),
        PropValue::Object { id } => id.clone(),
        _ => Some(match current {
            Some(current) if !current.is_empty() => Cow::Owned(String::from(current)),
            _ => Cow::Owned(generate()),
        }),
    }
}

/// Apply attributes passed directly to the component over the behavior's `root` attributes.
///
/// Explicit entries win, including explicit `None` entries, which clear the behavior value.
/// A behavior without `root` attributes gains a `root` map only when `explicit` is non-empty.
pub fn merge_explicit(mut resolved: ResolvedBehavior, explicit: &AttributeMap) -> ResolvedBehavior {
    if explicit.is_empty() {
        return resolved;
    }
    if !resolved.attributes.contains_key(Slot::ROOT.as_str()) {
        resolved.attributes.insert(Slot::ROOT, AttributeMap::new());
    }
    if let Some(root) = resolved.attributes.get_mut(Slot::ROOT.as_str()) {
        for (name, value) in explicit.iter() {
            let replaced = root.insert(name.clone(), value.clone());
            if replaced.as_ref().is_some_and(|old| old != value) {
                tracing::debug!(attribute = %name, "explicit prop overrides behavior attribute");
            }
        }
    }
    resolved
}

/// `dir="auto"` for a container whose content is plain text, so the host picks the text
/// direction from the content itself.
///
/// `content` lists the container's content props; absent entries are skipped. The attribute is
/// added when `condition` holds, at least one entry is present, and every present entry is a
/// string or a number. Otherwise the map is empty.
pub fn rtl_text_attributes(content: &[Option<&PropValue>], condition: bool) -> AttributeMap {
    let mut present = content.iter().flatten().peekable();
    if condition
        && present.peek().is_some()
        && present.all(|value| matches!(value, PropValue::Str(_) | PropValue::Number(_)))
    {
        tracing::trace!("text-only content, adding dir=auto");
        AttributeMap::new().with(AttrName::DIR, "auto")
    } else {
        AttributeMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::ElementDescriptor;
    use attune_aria::AttrValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn shorthand_ids() {
        let fresh = || String::from("generated");
        assert_eq!(resolve_shorthand_id(None, Some("x"), fresh), None);

        let object = PropValue::Object {
            id: Some("object-id".into()),
        };
        assert_eq!(
            resolve_shorthand_id(Some(&object), None, fresh).as_deref(),
            Some("object-id")
        );

        let bare = PropValue::object();
        assert_eq!(resolve_shorthand_id(Some(&bare), None, fresh), None);

        let element = PropValue::from(ElementDescriptor::tag("div"));
        assert_eq!(resolve_shorthand_id(Some(&element), None, fresh), None);

        let text = PropValue::from("Title");
        assert_eq!(
            resolve_shorthand_id(Some(&text), Some("kept"), fresh).as_deref(),
            Some("kept")
        );
        assert_eq!(
            resolve_shorthand_id(Some(&text), None, fresh).as_deref(),
            Some("generated")
        );
    }

    #[test]
    fn explicit_attributes_win_on_root() {
        let resolved = ResolvedBehavior::new()
            .with_attributes(
                Slot::ROOT,
                AttributeMap::new()
                    .with(AttrName::ROLE, "button")
                    .with(AttrName::TAB_INDEX, 0)
                    .with(AttrName::ARIA_LABEL, "behavior"),
            )
            .with_attributes(
                Slot::ANCHOR,
                AttributeMap::new().with(AttrName::ARIA_LABEL, "anchor"),
            );
        let explicit = AttributeMap::new()
            .with(AttrName::ARIA_LABEL, "explicit")
            .with_optional(AttrName::TAB_INDEX, None::<i64>);

        let merged = merge_explicit(resolved, &explicit);
        assert_eq!(
            merged.attribute("root", "aria-label"),
            Some(&AttrValue::from("explicit"))
        );
        assert_eq!(merged.attribute_entry("root", "tabIndex"), Some(&None));
        assert_eq!(merged.attribute("root", "role"), Some(&AttrValue::from("button")));
        // Other slots are untouched.
        assert_eq!(
            merged.attribute("anchor", "aria-label"),
            Some(&AttrValue::from("anchor"))
        );
    }

    #[test]
    fn empty_explicit_map_does_not_create_root() {
        let merged = merge_explicit(ResolvedBehavior::new(), &AttributeMap::new());
        assert!(merged.slot_attributes("root").is_none());

        let explicit = AttributeMap::new().with(AttrName::ID, "x");
        let merged = merge_explicit(ResolvedBehavior::new(), &explicit);
        assert_eq!(merged.attribute("root", "id"), Some(&AttrValue::from("x")));
    }

    #[test]
    fn rtl_attributes_require_text_only_content() {
        let text = PropValue::from("hello");
        let count = PropValue::from(3);
        let element = PropValue::from(ElementDescriptor::tag("span"));

        let auto = rtl_text_attributes(&[Some(&text), None, Some(&count)], true);
        assert_eq!(auto.value("dir"), Some(&AttrValue::from("auto")));

        assert!(rtl_text_attributes(&[Some(&text)], false).is_empty());
        assert!(rtl_text_attributes(&[Some(&text), Some(&element)], true).is_empty());
        assert!(rtl_text_attributes(&[None, None], true).is_empty());
        assert!(rtl_text_attributes(&[], true).is_empty());
    }
}
