// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

/// Generates unique element ids for shorthand elements.
///
/// The counter belongs to the generator, not to the process: two generators never share
/// state, so ids are deterministic per rendering context.
///
/// ```rust
/// use attune_lifecycle::IdGenerator;
///
/// let mut ids = IdGenerator::new("attune-");
/// assert_eq!(ids.next_id("dialog-header-"), "attune-dialog-header-1");
/// assert_eq!(ids.next_id("dialog-content-"), "attune-dialog-content-2");
/// ```
#[derive(Clone, Debug)]
pub struct IdGenerator {
    prefix: Cow<'static, str>,
    issued: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("")
    }
}

impl IdGenerator {
    /// A generator whose ids all start with `prefix`.
    pub fn new(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
        }
    }

    /// The next id, `{prefix}{kind}{n}` with `n` counting from 1.
    pub fn next_id(&mut self, kind: &str) -> String {
        self.issued += 1;
        format!("{}{kind}{}", self.prefix, self.issued)
    }

    /// How many ids this generator has issued.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_do_not_share_counters() {
        let mut a = IdGenerator::default();
        let mut b = IdGenerator::default();
        assert_eq!(a.next_id("tooltip-"), "tooltip-1");
        assert_eq!(a.next_id("tooltip-"), "tooltip-2");
        assert_eq!(b.next_id("tooltip-"), "tooltip-1");
        assert_eq!(a.issued(), 2);
    }
}
