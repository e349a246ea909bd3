use crate::areas::session::Session;
use crate::artifacts::diff::char_aligner::{CharUnit, align};

impl Session {
    /// Prints both strings with a caret under every character the aligner
    /// marked as changed.
    pub fn align(&self, original: &str, updated: &str) -> anyhow::Result<()> {
        let alignment = align(original, updated);

        for (sign, text, units) in [
            ('-', original, alignment.original()),
            ('+', updated, alignment.updated()),
        ] {
            writeln!(self.writer(), "{sign} {text}")?;
            if units.iter().any(CharUnit::is_changed) {
                writeln!(self.writer(), "  {}", caret_line(units))?;
            }
        }

        Ok(())
    }
}

fn caret_line(units: &[CharUnit]) -> String {
    units
        .iter()
        .map(|unit| if unit.is_changed() { '^' } else { ' ' })
        .collect::<String>()
        .trim_end()
        .to_string()
}
