//! Console I/O used by the interactive workflows.

use std::{io, time::Duration};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};

/// What the workflows need from whatever is rendering them.
pub trait Console {
    /// Write text without a trailing newline and flush it, e.g. a prompt.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O failure.
    async fn write(&mut self, text: &str) -> io::Result<()>;

    /// Read one line of input without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O failure.
    async fn read_line(&mut self) -> io::Result<Option<String>>;

    /// # Errors
    ///
    /// Returns the underlying I/O failure.
    async fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write(&format!("{line}\n")).await
    }

    /// Read a yes/no style answer.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O failure.
    async fn read_confirmation(&mut self) -> io::Result<Option<String>> {
        self.read_line().await
    }

    async fn pause(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Console backed by the process's stdin and stdout.
#[derive(Debug)]
pub struct TerminalConsole {
    reader: BufReader<Stdin>,
    writer: Stdout,
}

impl TerminalConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            writer: tokio::io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }

    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();

        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);

        Ok(Some(line))
    }
}
