//! High-level entry points: the [`PromptPay`] facade and the immutable
//! [`PromptPayBuilder`].
//!
//! ```
//! use promptpay::PromptPay;
//!
//! let qr = PromptPay::to("089-999-9999").amount(100.0).build().unwrap();
//! assert!(qr.payload().starts_with("000201"));
//! ```

use std::path::{Path, PathBuf};

use http::Response;
use thiserror::Error;

use crate::output::{ConsoleOutput, DataUriOutput, FileOutput, HttpResponseOutput};
use crate::payload::{self, PayloadError};
use crate::qr::{QrCode, QrFormat, RenderConfig, RenderError};

/// Any failure while building or delivering a QR code.
#[derive(Error, Debug)]
pub enum PromptPayError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Convenience entry points for common use cases.
pub struct PromptPay;

impl PromptPay {
    /// Generates a QR code in one call.
    pub fn create(recipient: &str, amount: Option<f64>) -> Result<QrCode, PayloadError> {
        let payload = payload::generate(recipient, amount)?;
        Ok(QrCode::new(payload))
    }

    /// Starts a fluent builder for the given recipient.
    pub fn to(recipient: &str) -> PromptPayBuilder {
        PromptPayBuilder {
            recipient: recipient.to_string(),
            amount: None,
            config: RenderConfig::default(),
        }
    }
}

/// Immutable fluent builder; every setter returns a new builder.
///
/// Validation happens at the terminal operations, so an invalid recipient
/// or amount surfaces when the QR code is actually built.
#[derive(Debug, Clone)]
pub struct PromptPayBuilder {
    recipient: String,
    amount: Option<f64>,
    config: RenderConfig,
}

impl PromptPayBuilder {
    /// Sets a fixed amount, making the QR dynamic.
    pub fn amount(self, amount: f64) -> Self {
        Self {
            amount: Some(amount),
            ..self
        }
    }

    /// Clears the amount, making the QR static.
    pub fn no_amount(self) -> Self {
        Self {
            amount: None,
            ..self
        }
    }

    /// Sets the rendering configuration used by the output operations.
    pub fn config(self, config: RenderConfig) -> Self {
        Self { config, ..self }
    }

    /// Returns the recipient this builder targets.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the configured amount, if any.
    pub fn amount_value(&self) -> Option<f64> {
        self.amount
    }

    /// Builds the QR code value object.
    pub fn build(&self) -> Result<QrCode, PayloadError> {
        PromptPay::create(&self.recipient, self.amount)
    }

    /// Builds and returns the raw payload string.
    pub fn to_payload(&self) -> Result<String, PayloadError> {
        Ok(self.build()?.payload().to_string())
    }

    /// Builds and writes the QR image to a file; the format follows the
    /// path's extension.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, PromptPayError> {
        let qr = self.build()?;
        let mut output = FileOutput::with_config(path, self.config);
        Ok(qr.write_to(&mut output)?)
    }

    /// Builds and returns a base64 data URI in the given format.
    pub fn to_data_uri(&self, format: QrFormat) -> Result<String, PromptPayError> {
        let qr = self.build()?;
        let mut output = DataUriOutput::with_config(format, self.config);
        Ok(qr.write_to(&mut output)?)
    }

    /// Builds and returns an HTTP response carrying the rendered image.
    pub fn to_response(&self, format: QrFormat) -> Result<Response<Vec<u8>>, PromptPayError> {
        let qr = self.build()?;
        let mut output = HttpResponseOutput::with_config(format, self.config);
        Ok(qr.write_to(&mut output)?)
    }

    /// Builds and prints the QR code to stdout as ASCII art; returns the art.
    pub fn to_console(&self) -> Result<String, PromptPayError> {
        let qr = self.build()?;
        let mut output = ConsoleOutput::with_config(std::io::stdout(), self.config);
        Ok(qr.write_to(&mut output)?)
    }
}
