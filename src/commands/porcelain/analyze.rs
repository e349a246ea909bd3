use crate::areas::session::Session;
use crate::artifacts::analysis::outcome::run_analysis;
use crate::artifacts::analysis::summarizer::Summarizer;
use crate::artifacts::render::ViewOptions;
use crate::artifacts::render::analysis_view::AnalysisView;

impl Session {
    /// Runs the summarizer over the compared revisions and renders its
    /// outcome.
    ///
    /// A summarizer failure is rendered as a failed analysis and is not an
    /// error of this command; the diff stays as it was.
    pub async fn analyze<S: Summarizer>(
        &mut self,
        summarizer: &S,
        view: &ViewOptions,
    ) -> anyhow::Result<()> {
        if self.diff().is_none() {
            anyhow::bail!("nothing to analyze, compare the queries first");
        }

        let outcome = run_analysis(summarizer, self.original(), self.updated()).await;
        let lines = AnalysisView::new(&outcome, view).render();
        self.set_analysis(outcome);

        writeln!(self.writer())?;
        for line in lines {
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
