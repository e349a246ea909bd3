use crate::artifacts::analysis::outcome::AnalysisOutcome;
use crate::artifacts::diff::line_differ::{BlankLinePolicy, compute_line_diff_with};
use crate::artifacts::diff::line_record::DiffResult;
use std::cell::{RefCell, RefMut};

/// State of one comparison workflow.
///
/// A session holds the two query revisions being edited, the diff computed
/// from them once they are compared, and the slot for an analysis of the
/// change. The diff is only ever derived from the current inputs: editing an
/// input hides it and comparing again replaces it.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    policy: BlankLinePolicy,
    original: String,
    updated: String,
    diff: Option<DiffResult>,
    analysis: Option<AnalysisOutcome>,
}

impl Session {
    pub fn new(writer: Box<dyn std::io::Write>) -> Self {
        Session {
            writer: RefCell::new(writer),
            policy: BlankLinePolicy::default(),
            original: String::new(),
            updated: String::new(),
            diff: None,
            analysis: None,
        }
    }

    pub fn with_policy(mut self, policy: BlankLinePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn updated(&self) -> &str {
        &self.updated
    }

    pub fn set_original(&mut self, text: impl Into<String>) {
        self.original = text.into();
        self.diff = None;
    }

    pub fn set_updated(&mut self, text: impl Into<String>) {
        self.updated = text.into();
        self.diff = None;
    }

    /// Both revisions must hold more than whitespace before they can be compared.
    pub fn can_compare(&self) -> bool {
        !self.original.trim().is_empty() && !self.updated.trim().is_empty()
    }

    /// Computes a fresh diff of the current inputs and clears any previous
    /// analysis.
    pub fn run_comparison(&mut self) -> anyhow::Result<&DiffResult> {
        if !self.can_compare() {
            anyhow::bail!("both the original and the updated query must be non-empty");
        }

        self.analysis = None;
        let diff = compute_line_diff_with(&self.original, &self.updated, self.policy);
        tracing::info!(lines = diff.len(), changed = diff.has_changes(), "compared queries");

        Ok(self.diff.insert(diff))
    }

    pub fn diff(&self) -> Option<&DiffResult> {
        self.diff.as_ref()
    }

    pub fn analysis(&self) -> Option<&AnalysisOutcome> {
        self.analysis.as_ref()
    }

    pub fn set_analysis(&mut self, outcome: AnalysisOutcome) {
        self.analysis = Some(outcome);
    }

    /// Hides the diff and keeps the inputs for further editing.
    pub fn back_to_edit(&mut self) {
        self.diff = None;
    }

    /// Clears inputs, diff and analysis.
    pub fn reset(&mut self) {
        self.original.clear();
        self.updated.clear();
        self.diff = None;
        self.analysis = None;
    }
}
