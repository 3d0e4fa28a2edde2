use std::ops::Range;

/// A byte offset range into a source text.
pub type Span = Range<usize>;

/// A zero-based line and byte column.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Converts between byte offsets and line/column positions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineIndex {
    /// The offset at which every line begins. The first entry is always `0`.
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(line_starts: Vec<usize>, len: usize) -> Self {
        debug_assert_eq!(Some(&0), line_starts.first());
        debug_assert!(line_starts.windows(2).all(|pair| pair[0] < pair[1]));
        Self { line_starts, len }
    }

    pub fn num_lines(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the line and column of the given offset. Offsets past the end of
    /// the text are clamped.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|start| *start <= offset) - 1;
        Position::new(line, offset - self.line_starts[line])
    }

    /// Get the offset of the given position, clamping the column to the end of
    /// its line and the line to the end of the text.
    pub fn offset(&self, position: Position) -> usize {
        let Some(start) = self.line_starts.get(position.line) else {
            return self.len;
        };

        let end = self.line_starts.get(position.line + 1).copied().unwrap_or(self.len);
        (start + position.col).min(end)
    }
}
