// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::error::VerifyError;

/// What happened to one specification sentence.
#[derive(Debug)]
pub enum LineOutcome {
    /// Every form matching the sentence held. Holds the names of those forms.
    Passed(Vec<&'static str>),
    /// At least one matching form did not hold.
    Failed(Vec<VerifyError>),
    /// No form matched, so nothing was checked.
    Untested,
}

impl LineOutcome {
    /// Whether the sentence was checked and held.
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed(_))
    }
}

/// One specification sentence and its outcome.
#[derive(Debug)]
pub struct LineReport {
    /// The sentence.
    pub sentence: &'static str,
    /// The outcome.
    pub outcome: LineOutcome,
}

/// The outcome of verifying every specification sentence of one behavior.
#[derive(Debug)]
pub struct Report {
    /// Catalog name of the behavior.
    pub behavior: &'static str,
    /// One entry per sentence, in catalog order.
    pub lines: Vec<LineReport>,
}

impl Report {
    /// Whether every sentence was checked and held. Untested sentences count as failures.
    pub fn is_success(&self) -> bool {
        self.lines.iter().all(|line| line.outcome.is_passed())
    }

    /// Sentences that were checked and did not hold.
    pub fn failures(&self) -> impl Iterator<Item = &LineReport> {
        self.lines
            .iter()
            .filter(|line| matches!(line.outcome, LineOutcome::Failed(_)))
    }

    /// Sentences no form matched.
    pub fn untested(&self) -> impl Iterator<Item = &LineReport> {
        self.lines
            .iter()
            .filter(|line| matches!(line.outcome, LineOutcome::Untested))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.behavior)?;
        for line in &self.lines {
            match &line.outcome {
                LineOutcome::Passed(_) => writeln!(f, "  ok        {}", line.sentence)?,
                LineOutcome::Untested => writeln!(f, "  untested  {}", line.sentence)?,
                LineOutcome::Failed(errors) => {
                    writeln!(f, "  FAILED    {}", line.sentence)?;
                    for error in errors {
                        writeln!(f, "            {error}")?;
                    }
                }
            }
        }
        Ok(())
    }
}
