use crate::areas::session::Session;
use crate::artifacts::analysis::sections::segment_sections;

impl Session {
    /// Prints the sections found in an analysis text, one title per line
    /// followed by its indented content.
    pub fn sections(&self, text: &str) -> anyhow::Result<()> {
        let sections = segment_sections(text)?;

        for (idx, section) in sections.iter().enumerate() {
            writeln!(self.writer(), "[{}] {}", idx + 1, section.title())?;
            for line in section.content().lines() {
                writeln!(self.writer(), "{}", format!("    {line}").trim_end())?;
            }
        }

        Ok(())
    }
}
