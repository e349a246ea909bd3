use crate::ViewMode;
use crate::artifacts::diff::char_aligner::CharUnit;
use crate::artifacts::diff::line_record::{DiffResult, LineKind, LineRecord};
use crate::artifacts::render::{MIN_WIDTH, ViewOptions};
use colored::Colorize;
use derive_new::new;

const SEPARATOR: &str = " | ";
const TAB: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Updated,
}

impl Side {
    fn title(&self) -> &'static str {
        match self {
            Side::Original => "Original",
            Side::Updated => "Updated",
        }
    }
}

/// A run of consecutive units sharing the same changed flag.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Span {
    pub text: String,
    pub changed: bool,
}

pub fn spans(units: &[CharUnit]) -> Vec<Span> {
    units.iter().fold(Vec::<Span>::new(), |mut spans, unit| {
        match spans.last_mut() {
            Some(span) if span.changed == unit.is_changed() => {
                push_visible(&mut span.text, unit.character())
            }
            _ => {
                let mut text = String::new();
                push_visible(&mut text, unit.character());
                spans.push(Span::new(text, unit.is_changed()));
            }
        }
        spans
    })
}

/// Appends `c` so that it occupies exactly the columns it is counted for.
/// Tabs become spaces and other control characters their Unicode control
/// picture (`\r` shows as `␍`).
fn push_visible(text: &mut String, c: char) {
    match c {
        '\t' => text.push_str(TAB),
        '\u{7f}' => text.push('␡'),
        c if c.is_ascii_control() => {
            text.push(char::from_u32(0x2400 + u32::from(c)).unwrap_or('\u{fffd}'))
        }
        c => text.push(c),
    }
}

fn visible(text: &str) -> String {
    let mut shown = String::with_capacity(text.len());
    for c in text.chars() {
        push_visible(&mut shown, c);
    }
    shown
}

#[derive(Debug, new)]
pub struct DiffView<'v> {
    result: &'v DiffResult,
    options: &'v ViewOptions,
}

impl DiffView<'_> {
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if self.options.legend {
            lines.push(self.legend());
            lines.push(String::new());
        }

        match self.options.mode {
            ViewMode::SideBySide => self.render_side_by_side(&mut lines),
            ViewMode::Stacked => self.render_stacked(&mut lines),
        }

        lines.push(String::new());
        lines.push(self.footer());

        lines
    }

    fn render_side_by_side(&self, lines: &mut Vec<String>) {
        let pane_width = (self.options.width.max(MIN_WIDTH) - SEPARATOR.len()) / 2;
        // "<number> <marker> "
        let text_width = pane_width.saturating_sub(self.number_width() + 3).max(1);

        lines.push(format!(
            "{}{SEPARATOR}{}",
            self.heading(&pad(Side::Original.title(), pane_width)),
            self.heading(Side::Updated.title())
        ));
        lines.push("=".repeat(pane_width * 2 + SEPARATOR.len()));

        for record in self.result {
            lines.push(format!(
                "{}{SEPARATOR}{}",
                self.row(record, Side::Original, Some(text_width)),
                self.row(record, Side::Updated, Some(text_width))
            ));
        }
    }

    fn render_stacked(&self, lines: &mut Vec<String>) {
        for side in [Side::Original, Side::Updated] {
            if side == Side::Updated {
                lines.push(String::new());
            }
            lines.push(self.heading(side.title()));
            lines.push("=".repeat(side.title().len()));

            for record in self.result {
                lines.push(self.row(record, side, None));
            }
        }
    }

    /// One pane row: line number, kind marker and text. With a width the text
    /// is truncated and padded to exactly that many characters.
    fn row(&self, record: &LineRecord, side: Side, width: Option<usize>) -> String {
        let number = format!("{:>pad$}", record.line_number(), pad = self.number_width());
        let marker = record.kind().marker().to_string();

        let segments = match record.kind() {
            LineKind::Modified(alignment) => match side {
                Side::Original => spans(alignment.original()),
                Side::Updated => spans(alignment.updated()),
            },
            _ => {
                let text = match side {
                    Side::Original => record.original(),
                    Side::Updated => record.updated(),
                };
                // an empty side still occupies its row
                let text = if text.is_empty() { " ".to_string() } else { visible(text) };
                vec![Span::new(text, false)]
            }
        };

        let mut remaining = width.unwrap_or(usize::MAX);
        let mut body = String::new();
        for span in segments {
            if remaining == 0 {
                break;
            }
            let visible = span.text.chars().take(remaining).collect::<String>();
            remaining -= visible.chars().count();
            body.push_str(&self.paint(&visible, record.kind(), side, span.changed));
        }
        if width.is_some() {
            body.push_str(&" ".repeat(remaining));
        }

        format!(
            "{} {} {}",
            self.dim(&number),
            self.paint(&marker, record.kind(), side, false),
            body
        )
    }

    fn paint(&self, text: &str, kind: &LineKind, side: Side, changed: bool) -> String {
        if !self.options.color {
            return text.to_string();
        }

        let theme = &self.options.theme;
        match kind {
            LineKind::Unchanged => text.to_string(),
            LineKind::Added => text.color(theme.added).to_string(),
            LineKind::Removed => text.color(theme.removed).to_string(),
            LineKind::Modified(_) if changed => {
                let highlight = match side {
                    Side::Original => theme.removed_highlight,
                    Side::Updated => theme.added_highlight,
                };
                text.black().on_color(highlight).to_string()
            }
            LineKind::Modified(_) => text.color(theme.modified).to_string(),
        }
    }

    fn legend(&self) -> String {
        let theme = &self.options.theme;
        let entries = [
            ("+ Added", theme.added),
            ("- Removed", theme.removed),
            ("~ Modified", theme.modified),
        ];

        entries
            .iter()
            .map(|(label, color)| {
                if self.options.color {
                    label.color(*color).to_string()
                } else {
                    label.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn footer(&self) -> String {
        let stats = self.result.stats();
        let lines = match self.result.len() {
            1 => "1 line".to_string(),
            n => format!("{n} lines"),
        };

        if stats.total_changes() == 0 {
            return format!("{lines}, no differences");
        }

        format!(
            "{lines}: {} added, {} removed, {} modified",
            stats.added,
            stats.removed,
            stats.modified
        )
    }

    fn heading(&self, text: &str) -> String {
        if self.options.color {
            text.color(self.options.theme.heading).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.options.color {
            text.color(self.options.theme.line_number).to_string()
        } else {
            text.to_string()
        }
    }

    fn number_width(&self) -> usize {
        self.result.len().max(1).to_string().len()
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
