//! Human-readable assembly listing.

use std::fmt;

/// The assembly log recorded alongside a program, one line per instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyListing {
    lines: Vec<String>,
}

impl AssemblyListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one instruction line.
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for AssemblyListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
