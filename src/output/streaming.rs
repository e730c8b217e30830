//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines as they
//! are produced by `TreePrinter`, one line at a time.

use std::io::{self, Stdout, Write};
use std::path::Path;
use std::time::Duration;

use crate::tree::{StreamingOutput, VisitedNode};

use super::utils::{elapsed_line, node_line, summary_line};

/// Streaming output formatter over any writer.
pub struct StreamingFormatter<W: Write> {
    out: W,
}

impl StreamingFormatter<Stdout> {
    /// Formatter writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StreamingFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Blank line written after each root's block when roots are named explicitly.
    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn elapsed(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "{}", elapsed_line(elapsed))?;
        self.out.flush()
    }
}

impl<W: Write> StreamingOutput for StreamingFormatter<W> {
    fn output_node(&mut self, node: &VisitedNode<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", node_line(node))
    }

    fn finish(&mut self, file_count: usize, root: &Path) -> io::Result<()> {
        writeln!(self.out, "{}", summary_line(file_count, root))?;
        self.out.flush()
    }
}
