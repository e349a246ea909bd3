use crate::areas::session::Session;
use crate::artifacts::render::ViewOptions;
use crate::artifacts::render::diff_view::DiffView;

impl Session {
    /// Compares the current revisions and renders the diff.
    pub fn compare(&mut self, view: &ViewOptions) -> anyhow::Result<()> {
        let diff = self.run_comparison()?;
        let lines = DiffView::new(diff, view).render();

        for line in lines {
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
