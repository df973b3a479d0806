use jvav_span::Span;

/// Line index over a source text, for turning byte offsets into
/// line/column positions.
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));

        Self { text, line_starts }
    }

    /// Zero-based line containing `pos`.
    pub fn line_index(&self, pos: usize) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    /// One-based line and column of `pos`. Columns count characters.
    pub fn line_col(&self, pos: usize) -> (usize, usize) {
        let line = self.line_index(pos);
        let start = self.line_starts[line];
        let col = self.text[start..pos].chars().count();

        (line + 1, col + 1)
    }

    /// The text of `line` without its line break.
    pub fn line(&self, line: usize) -> &'a str {
        let start = self.line_starts[line];
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.text.len(), |&next| next - 1);

        self.text[start..end].trim_end_matches('\r')
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Splits `span` into the part before it, the part it covers and the
    /// part after it, all clipped to the span's first line.
    pub fn split_line(&self, span: Span) -> (&'a str, &'a str, &'a str) {
        let line = self.line_index(span.pos());
        let start = self.line_starts[line];
        let text = self.line(line);

        let lo = (span.pos() - start).min(text.len());
        let hi = (span.end() - start).clamp(lo, text.len());

        (&text[..lo], &text[lo..hi], &text[hi..])
    }
}
