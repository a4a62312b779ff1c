// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use attune_aria::{AttrValue, Key, KeyAction};
use attune_behavior::BehaviorProps;
use attune_behavior::catalog::CatalogEntry;
use attune_focus::FocusZone;

use crate::error::VerifyError;
use crate::value::{same, show};

/// The behavior under verification, with the lookups sentence checks need.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Subject<'a> {
    entry: &'a CatalogEntry,
}

impl<'a> Subject<'a> {
    pub(crate) fn new(entry: &'a CatalogEntry) -> Self {
        Self { entry }
    }

    /// Attribute `name` on `slot` must render as `expected`; `None` expects it undefined.
    pub(crate) fn expect_attribute(
        &self,
        props: &BehaviorProps,
        slot: &str,
        name: &str,
        expected: Option<&AttrValue>,
    ) -> Result<(), VerifyError> {
        let resolved = self.entry.resolve(props);
        let attributes = resolved
            .slot_attributes(slot)
            .ok_or_else(|| VerifyError::MissingSlot {
                behavior: self.entry.name,
                slot: slot.to_owned(),
            })?;
        let actual = attributes.value(name);
        if same(actual, expected) {
            return Ok(());
        }
        Err(self.mismatch(
            props,
            format!("`{name}` on `{slot}`"),
            show(expected),
            show(actual),
        ))
    }

    /// A property of the focus zone, read by `read`, must equal `expected`.
    pub(crate) fn expect_zone<T>(
        &self,
        props: &BehaviorProps,
        what: &str,
        expected: T,
        read: impl FnOnce(&FocusZone) -> T,
    ) -> Result<(), VerifyError>
    where
        T: PartialEq + fmt::Debug,
    {
        let resolved = self.entry.resolve(props);
        let zone = resolved
            .focus_zone
            .as_ref()
            .ok_or(VerifyError::MissingFocusZone {
                behavior: self.entry.name,
            })?;
        let actual = read(zone);
        if actual == expected {
            return Ok(());
        }
        Err(self.mismatch(
            props,
            format!("focus zone {what}"),
            format!("{expected:?}"),
            format!("{actual:?}"),
        ))
    }

    /// Action `action` on `slot` must be enabled, with its first combinations on `keys` in
    /// order. Further combinations are not checked.
    pub(crate) fn expect_keys(
        &self,
        props: &BehaviorProps,
        slot: &str,
        action: &str,
        keys: &[&str],
    ) -> Result<(), VerifyError> {
        let expected = keys
            .iter()
            .map(|name| {
                Key::from_name(name).ok_or_else(|| VerifyError::UnknownKey((*name).to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let key_action = self.key_action(props, slot, action)?;
        let subject = || format!("`{action}` on `{slot}`");
        let Some(combinations) = &key_action.key_combinations else {
            return Err(self.mismatch(
                props,
                subject(),
                keys.join(" or "),
                "disabled".to_owned(),
            ));
        };
        for (index, key) in expected.iter().enumerate() {
            let actual = combinations.get(index).map(|c| c.key_code);
            if actual != Some(*key) {
                return Err(self.mismatch(
                    props,
                    format!("key {} of {}", index + 1, subject()),
                    key.to_string(),
                    actual.map_or_else(|| "nothing".to_owned(), |k| k.to_string()),
                ));
            }
        }
        Ok(())
    }

    /// Action `action` on `slot` must carry the disabled sentinel.
    pub(crate) fn expect_disabled(
        &self,
        props: &BehaviorProps,
        slot: &str,
        action: &str,
    ) -> Result<(), VerifyError> {
        let key_action = self.key_action(props, slot, action)?;
        if key_action.is_disabled() {
            return Ok(());
        }
        Err(self.mismatch(
            props,
            format!("`{action}` on `{slot}`"),
            "disabled".to_owned(),
            format!("{:?}", key_action.key_combinations),
        ))
    }

    fn key_action(
        &self,
        props: &BehaviorProps,
        slot: &str,
        action: &str,
    ) -> Result<KeyAction, VerifyError> {
        self.entry
            .resolve(props)
            .key_action(slot, action)
            .cloned()
            .ok_or_else(|| VerifyError::MissingKeyAction {
                behavior: self.entry.name,
                slot: slot.to_owned(),
                action: action.to_owned(),
            })
    }

    fn mismatch(
        &self,
        props: &BehaviorProps,
        subject: String,
        expected: String,
        actual: String,
    ) -> VerifyError {
        VerifyError::Mismatch {
            behavior: self.entry.name,
            props: describe(props),
            subject,
            expected,
            actual,
        }
    }
}

fn describe(props: &BehaviorProps) -> String {
    let fields: Vec<String> = props
        .iter()
        .map(|(name, value)| format!("{name}: {value:?}"))
        .collect();
    if fields.is_empty() {
        "no props".to_owned()
    } else {
        format!("{{{}}}", fields.join(", "))
    }
}
