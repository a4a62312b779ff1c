// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// The value of a rendered attribute.
///
/// "Undefined" is not a variant: attribute maps store `Option<AttrValue>` and `None` means the
/// attribute is omitted. `Bool(false)` is a present attribute whose value is `false`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    /// A boolean value, rendered as `"true"` / `"false"`.
    Bool(bool),
    /// An integer value such as a tab index or ARIA level.
    Int(i64),
    /// A fractional numeric value such as a slider position.
    Number(f64),
    /// A string value such as a role or an element id.
    Str(Cow<'static, str>),
}

impl AttrValue {
    /// The boolean payload, if this is a `Bool`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an `Int`.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&'static str> for AttrValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn renders_like_dom_attributes() {
        assert_eq!(AttrValue::from(true).to_string(), "true");
        assert_eq!(AttrValue::from(-1).to_string(), "-1");
        assert_eq!(AttrValue::from(2.5).to_string(), "2.5");
        assert_eq!(AttrValue::from("menu").to_string(), "menu");
    }

    #[test]
    fn accessors_are_variant_specific() {
        assert_eq!(AttrValue::from(false).as_bool(), Some(false));
        assert_eq!(AttrValue::from("false").as_bool(), None);
        assert_eq!(AttrValue::from(0).as_int(), Some(0));
        assert_eq!(AttrValue::from("x").as_str(), Some("x"));
    }
}
