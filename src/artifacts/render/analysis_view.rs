use crate::artifacts::analysis::outcome::AnalysisOutcome;
use crate::artifacts::render::ViewOptions;
use colored::Colorize;
use derive_new::new;

const INDENT: &str = "    ";

#[derive(Debug, new)]
pub struct AnalysisView<'v> {
    outcome: &'v AnalysisOutcome,
    options: &'v ViewOptions,
}

impl AnalysisView<'_> {
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![self.heading("Analysis")];

        match self.outcome {
            AnalysisOutcome::Failed { .. } => {
                let message = self.outcome.to_string();
                lines.push(if self.options.color {
                    message.color(self.options.theme.removed).to_string()
                } else {
                    message
                });
            }
            AnalysisOutcome::Completed { text, sections } if sections.is_empty() => {
                lines.extend(text.lines().map(str::to_string));
            }
            AnalysisOutcome::Completed { sections, .. } => {
                for (idx, section) in sections.iter().enumerate() {
                    if idx > 0 {
                        lines.push(String::new());
                    }
                    lines.push(self.heading(section.title()));
                    lines.extend(
                        section
                            .content()
                            .lines()
                            .map(|line| format!("{INDENT}{line}").trim_end().to_string()),
                    );
                }
            }
        }

        lines
    }

    fn heading(&self, text: &str) -> String {
        if self.options.color {
            text.color(self.options.theme.heading).bold().to_string()
        } else {
            text.to_string()
        }
    }
}
