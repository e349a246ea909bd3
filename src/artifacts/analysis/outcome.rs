use crate::artifacts::analysis::FAILED_ANALYSIS_MESSAGE;
use crate::artifacts::analysis::prompt::build_prompt;
use crate::artifacts::analysis::sections::{Section, segment_sections};
use crate::artifacts::analysis::summarizer::Summarizer;

/// Result slot of a change analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Completed {
        text: String,
        sections: Vec<Section>,
    },
    /// The summarizer could not produce an analysis. `reason` is kept for
    /// logs; users see [`FAILED_ANALYSIS_MESSAGE`].
    Failed { reason: String },
}

impl AnalysisOutcome {
    pub fn completed(text: String) -> Self {
        // an unsegmentable text is still a completed analysis
        let sections = segment_sections(&text).unwrap_or_default();
        AnalysisOutcome::Completed { text, sections }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        AnalysisOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AnalysisOutcome::Failed { .. })
    }

    pub fn sections(&self) -> &[Section] {
        match self {
            AnalysisOutcome::Completed { sections, .. } => sections,
            AnalysisOutcome::Failed { .. } => &[],
        }
    }
}

impl std::fmt::Display for AnalysisOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisOutcome::Completed { text, .. } => write!(f, "{text}"),
            AnalysisOutcome::Failed { .. } => write!(f, "{FAILED_ANALYSIS_MESSAGE}"),
        }
    }
}

/// Asks `summarizer` to analyze the change from `original` to `updated`.
///
/// Never fails: every summarizer error becomes [`AnalysisOutcome::Failed`].
pub async fn run_analysis<S: Summarizer>(
    summarizer: &S,
    original: &str,
    updated: &str,
) -> AnalysisOutcome {
    let prompt = build_prompt(original, updated);

    match summarizer.summarize(&prompt).await {
        Ok(text) => {
            tracing::info!(bytes = text.len(), "analysis completed");
            AnalysisOutcome::completed(text)
        }
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "analysis failed");
            AnalysisOutcome::failed(format!("{err:#}"))
        }
    }
}
