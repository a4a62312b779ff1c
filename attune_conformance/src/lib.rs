// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune Conformance: checks behaviors against their specification sentences.
//!
//! Every [`CatalogEntry`] carries `specification` lines written in a small fixed grammar,
//! for example:
//!
//! - `Adds role='menu'.`
//! - `Adds attribute 'aria-expanded=true' based on the property 'menuOpen' if the component
//!   has 'menu' property to 'root' slot.`
//! - `Embeds component into FocusZone.`
//! - `Triggers 'openMenu' action with 'ArrowRight' on 'root', when orientation is vertical.`
//!
//! A [`Verifier`] recognizes each sentence form with a regular expression, evaluates the
//! behavior with the props the sentence implies, and compares the output against what the
//! sentence promises. Quoted `true`, `false` and integer literals are compared as booleans
//! and numbers, so `'aria-level=3'` holds for an attribute rendered as `3` or `3.0`.
//!
//! Every form whose pattern matches a sentence is checked. A sentence that no form matches is
//! reported as untested, and an untested sentence fails the [`Report`].
//!
//! ```rust
//! use attune_behavior::catalog;
//!
//! let entry = catalog::find("menu_behavior").unwrap();
//! let report = attune_conformance::verify(entry).unwrap();
//! assert!(report.is_success(), "{report}");
//! ```

mod error;
mod forms;
mod report;
mod subject;
mod value;

use attune_behavior::catalog::CatalogEntry;
use regex::Regex;

pub use error::VerifyError;
pub use report::{LineOutcome, LineReport, Report};

use forms::{FORMS, Form};
use subject::Subject;

/// Compiled sentence forms.
///
/// Compile once and reuse when verifying many behaviors.
#[derive(Debug)]
pub struct Verifier {
    forms: Vec<(Regex, &'static Form)>,
}

impl Verifier {
    /// Compile every sentence form.
    pub fn new() -> Result<Self, VerifyError> {
        let forms = FORMS
            .iter()
            .map(|form| Ok((Regex::new(form.pattern)?, form)))
            .collect::<Result<Vec<_>, VerifyError>>()?;
        Ok(Self { forms })
    }

    /// Check one sentence against `entry`'s behavior.
    pub fn verify_sentence(&self, entry: &CatalogEntry, sentence: &str) -> LineOutcome {
        let subject = Subject::new(entry);
        let mut matched = Vec::new();
        let mut errors = Vec::new();
        for (pattern, form) in &self.forms {
            for caps in pattern.captures_iter(sentence) {
                matched.push(form.name);
                if let Err(error) = (form.check)(&subject, &caps) {
                    tracing::debug!(
                        behavior = entry.name,
                        form = form.name,
                        %error,
                        "sentence does not hold"
                    );
                    errors.push(error);
                }
            }
        }
        if matched.is_empty() {
            tracing::warn!(behavior = entry.name, sentence, "no sentence form matches");
            LineOutcome::Untested
        } else if errors.is_empty() {
            LineOutcome::Passed(matched)
        } else {
            LineOutcome::Failed(errors)
        }
    }

    /// Check every specification sentence of `entry`.
    pub fn verify(&self, entry: &CatalogEntry) -> Report {
        let lines = entry
            .specification
            .iter()
            .map(|&sentence| LineReport {
                sentence,
                outcome: self.verify_sentence(entry, sentence),
            })
            .collect();
        let report = Report {
            behavior: entry.name,
            lines,
        };
        tracing::debug!(
            behavior = entry.name,
            sentences = report.lines.len(),
            success = report.is_success(),
            "verified behavior"
        );
        report
    }
}

/// Check every specification sentence of `entry` with a freshly compiled [`Verifier`].
pub fn verify(entry: &CatalogEntry) -> Result<Report, VerifyError> {
    Ok(Verifier::new()?.verify(entry))
}
