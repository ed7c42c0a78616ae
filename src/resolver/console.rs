//! Line-oriented operator channel.
//!
//! The resolver and session never touch the process's stdin/stdout
//! directly. They talk to a [`Console`], which [`LineConsole`] implements
//! for any buffered reader and writer pair: the real terminal in the
//! binary, in-memory buffers in tests.

use std::io::{self, BufRead, Write};

/// Bidirectional text channel to the operator.
pub trait Console {
    /// Read one line, without its terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted. The resolver maps that
    /// to [`Decision::Abort`](super::Decision::Abort), since no further
    /// response can arrive. Bytes that are not valid UTF-8 are replaced
    /// rather than reported as an error.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write text and make it visible immediately.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// [`Console`] over a buffered reader and a writer.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Wrap an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream, e.g. to inspect captured text.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl LineConsole<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Console bound to the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }
}
