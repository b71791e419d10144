//! Terminal output.

use std::io::{self, Write};

use crate::qr::{render, QrFormat, RenderConfig, RenderError};

use super::Output;

/// Renders the QR code as ASCII art and writes it to a terminal.
///
/// Returns the art as a string so callers can reuse it.
#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
    config: RenderConfig,
}

impl ConsoleOutput<io::Stdout> {
    /// Creates an adapter writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// Creates an adapter writing to any writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            config: RenderConfig::default(),
        }
    }

    /// Overrides the rendering configuration.
    pub fn with_config(writer: W, config: RenderConfig) -> Self {
        Self { writer, config }
    }
}

impl<W: Write> Output for ConsoleOutput<W> {
    type Product = String;

    fn write(&mut self, payload: &str) -> Result<String, RenderError> {
        let rendered = render(payload, QrFormat::Console, &self.config)?;
        let ascii = match rendered.as_str() {
            Some(s) => s.to_string(),
            None => unreachable!("console rendering always yields text"),
        };

        writeln!(self.writer, "{ascii}")?;
        Ok(ascii)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str =
        "00020101021129370016A000000677010111011300668999999995802TH53037646304FE29";

    #[test]
    fn test_writes_ascii_art() {
        let mut buffer = Vec::new();
        let art = {
            let mut output = ConsoleOutput::new(&mut buffer);
            output.write(PAYLOAD).unwrap()
        };

        assert!(!art.is_empty());
        let written = String::from_utf8(buffer).unwrap();
        assert!(written.contains(&art));
    }
}
