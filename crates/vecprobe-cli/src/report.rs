use crate::RunError;
use std::fmt::Display;
use std::io::{self, Write};

/// Human-readable status lines. Not meant to be parsed.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn ok(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "✓ {msg}")?;
        self.out.flush()
    }

    pub fn passed(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n✅ All tests passed!")?;
        self.out.flush()
    }

    pub fn failure(&mut self, err: &RunError) -> io::Result<()> {
        if err.is_connection() {
            writeln!(self.out, "❌ Connection Error: {err}")?;
        } else {
            writeln!(self.out, "❌ Error: {err}")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
