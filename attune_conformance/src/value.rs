// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Literal values quoted in sentences.

use attune_aria::AttrValue;
use attune_behavior::PropValue;

/// The value a sentence literal stands for: `true` and `false` are booleans, integers are
/// numbers, anything else is a string.
pub(crate) fn literal(text: &str) -> AttrValue {
    match text {
        "true" => AttrValue::Bool(true),
        "false" => AttrValue::Bool(false),
        _ => text
            .parse::<i64>()
            .map_or_else(|_| AttrValue::from(text.to_owned()), AttrValue::Int),
    }
}

/// The prop that carries `value` into a behavior.
pub(crate) fn prop_value(value: &AttrValue) -> PropValue {
    match value {
        AttrValue::Bool(b) => PropValue::Bool(*b),
        AttrValue::Int(i) => PropValue::Number(*i as f64),
        AttrValue::Number(n) => PropValue::Number(*n),
        AttrValue::Str(s) => PropValue::Str(s.clone()),
    }
}

/// Boolean negation of a literal. Only `false` negates to `true`.
pub(crate) fn negated(value: &AttrValue) -> AttrValue {
    AttrValue::Bool(value.as_bool() == Some(false))
}

fn numeric(value: &AttrValue) -> Option<f64> {
    match value {
        AttrValue::Int(i) => Some(*i as f64),
        AttrValue::Number(n) => Some(*n),
        _ => None,
    }
}

/// Whether a rendered attribute equals the expected one. Integers and fractional numbers
/// compare by value.
pub(crate) fn same(actual: Option<&AttrValue>, expected: Option<&AttrValue>) -> bool {
    match (actual, expected) {
        (None, None) => true,
        (Some(a), Some(b)) => match (numeric(a), numeric(b)) {
            (Some(x), Some(y)) => x == y,
            _ => a == b,
        },
        _ => false,
    }
}

/// How an attribute value reads in a report.
pub(crate) fn show(value: Option<&AttrValue>) -> String {
    match value {
        Some(value) => format!("'{value}'"),
        None => "undefined".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literals_convert() {
        assert_eq!(literal("true"), AttrValue::Bool(true));
        assert_eq!(literal("false"), AttrValue::Bool(false));
        assert_eq!(literal("3"), AttrValue::Int(3));
        assert_eq!(literal("polite"), AttrValue::from("polite"));
        assert_eq!(literal("True"), AttrValue::from("True"));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(same(Some(&AttrValue::Number(0.0)), Some(&AttrValue::Int(0))));
        assert!(!same(Some(&AttrValue::Number(0.5)), Some(&AttrValue::Int(0))));
        assert!(!same(Some(&AttrValue::Bool(false)), None));
        assert!(same(None, None));
    }

    #[test]
    fn props_carry_literals() {
        assert_eq!(prop_value(&literal("true")), PropValue::Bool(true));
        assert_eq!(prop_value(&literal("10")), PropValue::Number(10.0));
        assert_eq!(negated(&literal("true")), AttrValue::Bool(false));
        assert_eq!(show(None), "undefined");
        assert_eq!(show(Some(&literal("menu"))), "'menu'");
    }
}
