//! QR code value object and image rendering.
//!
//! [`QrCode`] wraps a finished payload string and hands it to output
//! adapters; [`render`] turns a payload into image bytes, SVG, or ASCII art
//! via the `qrcode` crate. The payload modules never touch rendering.

mod render;

pub use render::{render, render_to_file, QrFormat, RenderConfig, RenderError, Rendered};

use std::fmt;

use crate::output::Output;

/// An immutable, generated PromptPay QR code.
///
/// Holds the payload string and nothing else; rendering and delivery are
/// the output adapters' concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    payload: String,
}

impl QrCode {
    /// Wraps a finished payload string.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Returns the payload exactly as generated.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Sends the payload to an output adapter and returns its product.
    pub fn write_to<O: Output>(&self, output: &mut O) -> Result<O::Product, RenderError> {
        output.write(&self.payload)
    }
}

impl fmt::Display for QrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::StringOutput;

    #[test]
    fn test_payload_passes_through_unchanged() {
        let qr = QrCode::new("000201010211");
        assert_eq!(qr.payload(), "000201010211");
        assert_eq!(qr.to_string(), "000201010211");
    }

    #[test]
    fn test_write_to_string_output() {
        let qr = QrCode::new("payload-under-test");
        let mut output = StringOutput;
        let written = qr.write_to(&mut output).unwrap();
        assert_eq!(written, "payload-under-test");
    }
}
