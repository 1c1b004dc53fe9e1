//=====================================================================
// Position in the line sequence of an LXCat file. Parsing steps take
// a cursor and hand back a new one, so every step can be exercised on
// a plain slice of lines without a live reader.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LineCursor {
    pub position: usize, // Zero-indexed
}

impl LineCursor {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    // One-indexed line number, for error messages
    pub fn line_number(&self) -> usize {
        self.position + 1
    }

    pub fn advance(self, num_lines: usize) -> Self {
        Self { position: self.position + num_lines }
    }

    pub fn next(self) -> Self {
        self.advance(1)
    }

    // The line under the cursor, or None once the input is exhausted
    pub fn peek<'a>(&self, lines: &[&'a str]) -> Option<&'a str> {
        lines.get(self.position).copied()
    }

    // Lines from the cursor to the end of input
    pub fn remaining<'a, 'b>(&self, lines: &'b [&'a str]) -> &'b [&'a str] {
        lines.get(self.position..).unwrap_or(&[])
    }
}
