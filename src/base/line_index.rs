use text_size::TextSize;

use super::Position;

/// Maps byte offsets in a source text to 1-based line/column positions.
///
/// Columns count characters, not bytes, so multi-byte text before an
/// offset on the same line advances the column by one per character.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of each line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(clamp_offset(offset + 1)));
            }
        }
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of `offset` within `text`; offsets past the end clamp to it.
    pub fn position(&self, text: &str, offset: TextSize) -> Position {
        let offset = offset.min(TextSize::new(clamp_offset(text.len())));
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset);
        let column = text
            .get(start..end)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(end - start);
        Position::new(line as u32 + 1, column as u32 + 1)
    }
}

/// Offsets beyond `u32` clamp to `u32::MAX`.
pub(crate) fn clamp_offset(offset: impl TryInto<u32>) -> u32 {
    offset.try_into().unwrap_or(u32::MAX)
}
