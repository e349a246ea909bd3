use crate::artifacts::diff::char_aligner::CharAlignment;
use derive_new::new;

/// Classification of a line pair.
///
/// Only `Modified` carries a character alignment, so a record can never hold
/// an alignment for a line that did not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Unchanged,
    Added,
    Removed,
    Modified(CharAlignment),
}

impl LineKind {
    pub fn label(&self) -> &'static str {
        match self {
            LineKind::Unchanged => "unchanged",
            LineKind::Added => "added",
            LineKind::Removed => "removed",
            LineKind::Modified(_) => "modified",
        }
    }

    pub fn marker(&self) -> char {
        match self {
            LineKind::Unchanged => ' ',
            LineKind::Added => '+',
            LineKind::Removed => '-',
            LineKind::Modified(_) => '~',
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, LineKind::Unchanged)
    }

    pub fn alignment(&self) -> Option<&CharAlignment> {
        match self {
            LineKind::Modified(alignment) => Some(alignment),
            _ => None,
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One aligned line pair of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LineRecord {
    line_number: usize,
    kind: LineKind,
    original: String,
    updated: String,
}

impl LineRecord {
    /// 1-based position of the pair in both texts.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn kind(&self) -> &LineKind {
        &self.kind
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn updated(&self) -> &str {
        &self.updated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn total_changes(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// Ordered line records of one comparison, one per line position.
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct DiffResult {
    records: Vec<LineRecord>,
}

impl DiffResult {
    pub fn records(&self) -> &[LineRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        self.records.iter().any(|record| record.kind().is_change())
    }

    pub fn stats(&self) -> DiffStats {
        self.records
            .iter()
            .fold(DiffStats::default(), |mut stats, record| {
                match record.kind() {
                    LineKind::Unchanged => stats.unchanged += 1,
                    LineKind::Added => stats.added += 1,
                    LineKind::Removed => stats.removed += 1,
                    LineKind::Modified(_) => stats.modified += 1,
                }
                stats
            })
    }
}

impl<'r> IntoIterator for &'r DiffResult {
    type Item = &'r LineRecord;
    type IntoIter = std::slice::Iter<'r, LineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
