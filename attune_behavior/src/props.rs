// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The props snapshot handed to behaviors.
//!
//! [`BehaviorProps`] is an open-ended bag: the rendering layer fills it with whatever the
//! component currently knows, and each behavior reads the keys it documents. Lookups follow
//! the truthiness rules UI authors expect, so a missing key, `false`, `0` and `""` all read as
//! "not set" through [`BehaviorProps::flag`].

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use attune_aria::AttrValue;

/// The kind of element a prop refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementType {
    /// A host element such as `div` or `button`.
    Tag(Cow<'static, str>),
    /// A library component such as `Button`.
    Component(Cow<'static, str>),
}

/// An element passed as a prop, reduced to what behaviors inspect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementDescriptor {
    /// Host tag or component name.
    pub element_type: ElementType,
    /// Explicit `tabIndex` prop on the element.
    pub tab_index: Option<i64>,
    /// `href` prop, relevant for anchors.
    pub href: Option<Cow<'static, str>>,
    /// Explicit `id` prop.
    pub id: Option<Cow<'static, str>>,
}

impl ElementDescriptor {
    fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            tab_index: None,
            href: None,
            id: None,
        }
    }

    /// A host element with tag `name`.
    pub fn tag(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ElementType::Tag(name.into()))
    }

    /// A library component called `name`.
    pub fn component(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ElementType::Component(name.into()))
    }

    /// Set the explicit `tabIndex`.
    #[must_use]
    pub fn with_tab_index(mut self, tab_index: i64) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Set `href`.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<Cow<'static, str>>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the explicit `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<Cow<'static, str>>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether the host puts this element in the Tab order without a `tabIndex`.
    ///
    /// True for `button`, `input`, `select`, `textarea`, anchors with an `href`, and the
    /// library `Button` component.
    pub fn is_natively_tabbable(&self) -> bool {
        match &self.element_type {
            ElementType::Tag(tag) => match tag.as_ref() {
                "button" | "input" | "select" | "textarea" => true,
                "a" => self.href.is_some(),
                _ => false,
            },
            ElementType::Component(name) => name == "Button",
        }
    }
}

/// Formats the spoken value of a slider-like control from the current props.
#[derive(Copy, Clone)]
pub struct ValueTextFn(pub fn(&BehaviorProps) -> String);

impl ValueTextFn {
    /// Produce the value text.
    pub fn call(&self, props: &BehaviorProps) -> String {
        (self.0)(props)
    }
}

impl PartialEq for ValueTextFn {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::fn_addr_eq(self.0, other.0)
    }
}

impl fmt::Debug for ValueTextFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueTextFn(..)")
    }
}

/// A single prop value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Str(Cow<'static, str>),
    /// A list, such as `items`.
    List(Vec<PropValue>),
    /// A plain shorthand object, reduced to its optional `id`.
    Object {
        /// The object's `id` key.
        id: Option<Cow<'static, str>>,
    },
    /// An element.
    Element(ElementDescriptor),
    /// A value-text formatter callback.
    ValueText(ValueTextFn),
}

impl PropValue {
    /// An object shorthand without an `id`.
    pub const fn object() -> Self {
        Self::Object { id: None }
    }

    /// Truthiness: `false`, `0`, `NaN` and `""` are falsy; lists, objects and callbacks are
    /// truthy even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::List(_) | Self::Object { .. } | Self::Element(_) | Self::ValueText(_) => true,
        }
    }

    /// The value as a rendered attribute, for props passed through unchanged.
    ///
    /// Only scalars convert; structured values yield `None`.
    pub fn to_attr_value(&self) -> Option<AttrValue> {
        match self {
            Self::Bool(b) => Some(AttrValue::Bool(*b)),
            Self::Number(n) => Some(AttrValue::Number(*n)),
            Self::Str(s) => Some(AttrValue::Str(s.clone())),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&'static str> for PropValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Vec<Self>> for PropValue {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<ElementDescriptor> for PropValue {
    fn from(value: ElementDescriptor) -> Self {
        Self::Element(value)
    }
}

impl From<ValueTextFn> for PropValue {
    fn from(value: ValueTextFn) -> Self {
        Self::ValueText(value)
    }
}

/// A component's props snapshot.
///
/// ```rust
/// use attune_behavior::{BehaviorProps, PropValue};
///
/// let props = BehaviorProps::new()
///     .with("disabled", true)
///     .with("items", PropValue::List(Vec::new()))
///     .with("label", "");
///
/// assert!(props.flag("disabled"));
/// // Empty lists are truthy, empty strings are not.
/// assert!(props.flag("items"));
/// assert!(!props.flag("label"));
/// assert!(props.is_set("label"));
/// assert!(!props.is_set("open"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BehaviorProps {
    values: BTreeMap<Cow<'static, str>, PropValue>,
}

impl BehaviorProps {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace `name` in place.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Remove `name`, making it undefined.
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        self.values.remove(name)
    }

    /// The raw value of `name`.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    /// Whether `name` is present at all, whatever its value.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether `name` is present and truthy.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(PropValue::is_truthy)
    }

    /// The boolean value of `name`, if it holds a boolean.
    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric value of `name`, if it holds a number.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string value of `name`, if it holds a string.
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The element value of `name`, if it holds an element.
    pub fn element(&self, name: &str) -> Option<&ElementDescriptor> {
        match self.get(name)? {
            PropValue::Element(e) => Some(e),
            _ => None,
        }
    }

    /// The list value of `name`, if it holds a list.
    pub fn list(&self, name: &str) -> Option<&[PropValue]> {
        match self.get(name)? {
            PropValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The value-text formatter stored under `name`.
    pub fn value_text(&self, name: &str) -> Option<ValueTextFn> {
        match self.get(name)? {
            PropValue::ValueText(f) => Some(*f),
            _ => None,
        }
    }

    /// The scalar value of `name` as an attribute value, for pass-through attributes.
    pub fn attr_value(&self, name: &str) -> Option<AttrValue> {
        self.get(name).and_then(PropValue::to_attr_value)
    }

    /// Iterate over all props in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for BehaviorProps
where
    K: Into<Cow<'static, str>>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn truthiness_follows_ui_conventions() {
        assert!(!PropValue::from(0).is_truthy());
        assert!(!PropValue::from(f64::NAN).is_truthy());
        assert!(PropValue::from(-1).is_truthy());
        assert!(!PropValue::from("").is_truthy());
        assert!(PropValue::from("false").is_truthy());
        assert!(PropValue::List(vec![]).is_truthy());
        assert!(PropValue::object().is_truthy());
    }

    #[test]
    fn typed_accessors_reject_other_kinds() {
        let props = BehaviorProps::new()
            .with("min", 0)
            .with("label", "volume")
            .with("open", true);
        assert_eq!(props.number("min"), Some(0.0));
        assert_eq!(props.number("label"), None);
        assert_eq!(props.string("label"), Some("volume"));
        assert_eq!(props.bool("open"), Some(true));
        assert_eq!(props.bool("min"), None);
        assert_eq!(props.element("open"), None);
    }

    #[test]
    fn removal_makes_a_prop_undefined() {
        let mut props = BehaviorProps::new().with("menu", PropValue::object());
        assert!(props.is_set("menu"));
        props.remove("menu");
        assert!(!props.is_set("menu"));
        assert!(!props.flag("menu"));
    }

    #[test]
    fn native_tabbability() {
        assert!(ElementDescriptor::tag("button").is_natively_tabbable());
        assert!(ElementDescriptor::tag("textarea").is_natively_tabbable());
        assert!(!ElementDescriptor::tag("a").is_natively_tabbable());
        assert!(
            ElementDescriptor::tag("a")
                .with_href("#top")
                .is_natively_tabbable()
        );
        assert!(!ElementDescriptor::tag("div").is_natively_tabbable());
        assert!(ElementDescriptor::component("Button").is_natively_tabbable());
        assert!(!ElementDescriptor::component("Icon").is_natively_tabbable());
    }

    #[test]
    fn only_scalars_pass_through_as_attributes() {
        let props = BehaviorProps::new()
            .with("aria-label", "Close")
            .with("items", PropValue::List(vec![]));
        assert_eq!(props.attr_value("aria-label"), Some(AttrValue::from("Close")));
        assert_eq!(props.attr_value("items"), None);
        assert_eq!(props.attr_value("missing"), None);
    }
}
