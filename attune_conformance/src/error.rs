// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Why a specification sentence does not hold for a behavior.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A sentence names a key the key table does not know.
    #[error("unknown key name `{0}`")]
    UnknownKey(String),
    /// The behavior declares no attribute map for a slot the sentence talks about.
    #[error("`{behavior}` declares no attributes for slot `{slot}`")]
    MissingSlot {
        /// Catalog name of the behavior.
        behavior: &'static str,
        /// The slot.
        slot: String,
    },
    /// The sentence describes a focus zone but the behavior declares none.
    #[error("`{behavior}` declares no focus zone")]
    MissingFocusZone {
        /// Catalog name of the behavior.
        behavior: &'static str,
    },
    /// The sentence names a key action the behavior does not declare.
    #[error("`{behavior}` declares no `{action}` action on slot `{slot}`")]
    MissingKeyAction {
        /// Catalog name of the behavior.
        behavior: &'static str,
        /// The slot.
        slot: String,
        /// The action.
        action: String,
    },
    /// The behavior's output differs from the sentence.
    #[error("`{behavior}` with {props}: expected {subject} to be {expected}, got {actual}")]
    Mismatch {
        /// Catalog name of the behavior.
        behavior: &'static str,
        /// The props the behavior was evaluated with.
        props: String,
        /// What was compared, e.g. "`role` on `root`".
        subject: String,
        /// The value the sentence promises.
        expected: String,
        /// The value the behavior produced.
        actual: String,
    },
    /// A sentence pattern failed to compile.
    #[error("invalid sentence pattern: {0}")]
    Pattern(#[from] regex::Error),
}
