use derive_new::new;

/// Upper bound on the resynchronization window, in characters.
pub const LOOKAHEAD_LIMIT: usize = 20;

/// A single code point of one side of an aligned line pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct CharUnit {
    character: char,
    changed: bool,
}

impl CharUnit {
    pub fn matched(character: char) -> Self {
        Self::new(character, false)
    }

    pub fn changed(character: char) -> Self {
        Self::new(character, true)
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }
}

/// Character-level alignment of a line pair.
///
/// Each side is index-aligned to its own input, so `original().len()` is the
/// number of code points of the original line and `updated().len()` the number
/// of code points of the updated line. The two sides are not aligned to each
/// other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharAlignment {
    original: Vec<CharUnit>,
    updated: Vec<CharUnit>,
}

impl CharAlignment {
    pub fn original(&self) -> &[CharUnit] {
        &self.original
    }

    pub fn updated(&self) -> &[CharUnit] {
        &self.updated
    }

    pub fn changed_count(&self) -> (usize, usize) {
        let count = |units: &[CharUnit]| units.iter().filter(|unit| unit.is_changed()).count();
        (count(&self.original), count(&self.updated))
    }

    pub fn is_identical(&self) -> bool {
        self.changed_count() == (0, 0)
    }
}

/// Greedy streaming character aligner.
///
/// Walks both strings with one cursor each. Equal characters are matched
/// immediately; on divergence the aligner searches windows of up to
/// [`LOOKAHEAD_LIMIT`] characters for a point where both strings agree again,
/// and otherwise steps past the divergent character on every side that still
/// has input. This trades optimality on reordered lines for `O(n * 20)` cost
/// with no auxiliary matrix.
#[derive(Debug, Clone, new)]
pub struct CharAligner<'a> {
    a: &'a str,
    b: &'a str,
}

impl CharAligner<'_> {
    pub fn align(&self) -> CharAlignment {
        let a = self.a.chars().collect::<Vec<_>>();
        let b = self.b.chars().collect::<Vec<_>>();

        let mut original = Vec::with_capacity(a.len());
        let mut updated = Vec::with_capacity(b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() || j < b.len() {
            if i < a.len() && j < b.len() && a[i] == b[j] {
                original.push(CharUnit::matched(a[i]));
                updated.push(CharUnit::matched(b[j]));
                i += 1;
                j += 1;
                continue;
            }

            // A window starting at (i, j) opens with a[i] == b[j], which the
            // equal-prefix case above already consumes.
            if resync_window(&a[i..], &b[j..]).is_some() {
                while i < a.len() && a[i] != b[j] {
                    original.push(CharUnit::changed(a[i]));
                    i += 1;
                }

                let anchor = a[i.saturating_sub(1)];
                while j < b.len() && b[j] != anchor {
                    updated.push(CharUnit::changed(b[j]));
                    j += 1;
                }

                continue;
            }

            if i < a.len() {
                original.push(CharUnit::changed(a[i]));
                i += 1;
            }
            if j < b.len() {
                updated.push(CharUnit::changed(b[j]));
                j += 1;
            }
        }

        CharAlignment { original, updated }
    }
}

/// Aligns `a` against `b` character by character.
pub fn align(a: &str, b: &str) -> CharAlignment {
    CharAligner::new(a, b).align()
}

/// Smallest window length `k` for which both remainders share their first `k`
/// characters, bounded by [`LOOKAHEAD_LIMIT`] and the shorter remainder.
fn resync_window(a: &[char], b: &[char]) -> Option<usize> {
    let limit = LOOKAHEAD_LIMIT.min(a.len()).min(b.len());
    (1..=limit).find(|&k| a[..k] == b[..k])
}
