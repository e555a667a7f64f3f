use std::ops::Range;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes combining marks after canonical decomposition, e.g. `"Général"` to
/// `"General"`.
pub fn fold_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// An accent-folded copy of a source string that remembers where each folded
/// byte came from, so matches found in the folded text can be applied to the
/// source.
#[derive(Debug)]
pub struct AccentFoldedText<'a> {
    source: &'a str,
    folded: String,
    // Per folded byte: byte range of the source char it was decomposed from
    source_starts: Vec<usize>,
    source_ends: Vec<usize>,
}

impl<'a> AccentFoldedText<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut folded = String::with_capacity(source.len());
        let mut source_starts = Vec::with_capacity(source.len());
        let mut source_ends = Vec::with_capacity(source.len());

        for (start, c) in source.char_indices() {
            let end = start + c.len_utf8();

            for decomposed in std::iter::once(c).nfd() {
                if is_combining_mark(decomposed) {
                    continue;
                }

                folded.push(decomposed);
                for _ in 0..decomposed.len_utf8() {
                    source_starts.push(start);
                    source_ends.push(end);
                }
            }
        }

        Self {
            source,
            folded,
            source_starts,
            source_ends,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Maps a byte range of the folded text to the smallest byte range of the
    /// source covering every char it was derived from.
    pub fn source_range(&self, range: Range<usize>) -> Range<usize> {
        let start = self
            .source_starts
            .get(range.start)
            .copied()
            .unwrap_or(self.source.len());

        if range.end <= range.start {
            return start..start;
        }

        let end = self
            .source_ends
            .get(range.end - 1)
            .copied()
            .unwrap_or(self.source.len());

        start..end
    }
}
