use core::fmt::{self, Write};

const INDENT: &str = "    ";

/// Line-oriented text builder with brace-block indentation.
#[derive(Debug, Default)]
pub(crate) struct SourceWriter {
    out: String,
    depth: usize,
}

impl SourceWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth. Empty input writes a bare newline.
    pub(crate) fn line(&mut self, text: impl fmt::Display) -> fmt::Result {
        let start = self.out.len();
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        write!(self.out, "{}", text)?;
        if self.out.len() == start + self.depth * INDENT.len() {
            self.out.truncate(start);
        }
        self.out.push('\n');
        Ok(())
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    /// `{` on its own line, then indent.
    pub(crate) fn open(&mut self) -> fmt::Result {
        self.line("{")?;
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn close(&mut self) -> fmt::Result {
        self.depth = self.depth.saturating_sub(1);
        self.line("}")
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
