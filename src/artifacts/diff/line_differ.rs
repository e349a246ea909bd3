use crate::artifacts::diff::char_aligner::align;
use crate::artifacts::diff::line_record::{DiffResult, LineKind, LineRecord};

/// How a line that is present but empty relates to a line that is missing
/// because its text ran out of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLinePolicy {
    /// Missing lines read as `""`, so an empty line facing a non-empty one is
    /// reported as added/removed exactly like a missing line.
    #[default]
    Collapse,
    /// Missing lines are tracked separately. Only a missing line yields
    /// added/removed; an empty line facing a non-empty one is modified.
    Distinct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineSlot<'t> {
    Present(&'t str),
    Absent,
}

impl<'t> LineSlot<'t> {
    fn at(lines: &[&'t str], idx: usize) -> Self {
        lines
            .get(idx)
            .copied()
            .map_or(LineSlot::Absent, LineSlot::Present)
    }

    fn text(&self) -> &'t str {
        match self {
            LineSlot::Present(line) => *line,
            LineSlot::Absent => "",
        }
    }
}

/// Positional line diff of two texts.
///
/// Both texts are split on `'\n'` without trimming, so an empty text is one
/// empty line. The result holds one record per position up to the longer of
/// the two line sequences.
pub fn compute_line_diff(original: &str, updated: &str) -> DiffResult {
    compute_line_diff_with(original, updated, BlankLinePolicy::Collapse)
}

pub fn compute_line_diff_with(
    original: &str,
    updated: &str,
    policy: BlankLinePolicy,
) -> DiffResult {
    let original_lines = original.split('\n').collect::<Vec<_>>();
    let updated_lines = updated.split('\n').collect::<Vec<_>>();
    let line_count = original_lines.len().max(updated_lines.len());

    let records = (0..line_count)
        .map(|idx| {
            let orig = LineSlot::at(&original_lines, idx);
            let upd = LineSlot::at(&updated_lines, idx);

            LineRecord::new(
                idx + 1,
                classify(orig, upd, policy),
                orig.text().to_string(),
                upd.text().to_string(),
            )
        })
        .collect::<Vec<_>>();

    let result = DiffResult::new(records);
    tracing::debug!(
        original_lines = original_lines.len(),
        updated_lines = updated_lines.len(),
        ?policy,
        stats = ?result.stats(),
        "computed line diff"
    );

    result
}

fn classify(orig: LineSlot, upd: LineSlot, policy: BlankLinePolicy) -> LineKind {
    match policy {
        BlankLinePolicy::Collapse => {
            let (orig, upd) = (orig.text(), upd.text());
            if orig == upd {
                LineKind::Unchanged
            } else if orig.is_empty() {
                LineKind::Added
            } else if upd.is_empty() {
                LineKind::Removed
            } else {
                LineKind::Modified(align(orig, upd))
            }
        }
        BlankLinePolicy::Distinct => match (orig, upd) {
            (LineSlot::Present(orig), LineSlot::Present(upd)) if orig == upd => LineKind::Unchanged,
            (LineSlot::Absent, _) => LineKind::Added,
            (_, LineSlot::Absent) => LineKind::Removed,
            (LineSlot::Present(orig), LineSlot::Present(upd)) => {
                LineKind::Modified(align(orig, upd))
            }
        },
    }
}
