//! Base64 data URI output.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::qr::{render, QrFormat, RenderConfig, RenderError};

use super::Output;

/// Renders the QR code and wraps it in a `data:` URI for direct embedding
/// in HTML `img` tags.
#[derive(Debug, Clone, Copy)]
pub struct DataUriOutput {
    format: QrFormat,
    config: RenderConfig,
}

impl DataUriOutput {
    /// Creates an adapter for the given image format with default rendering.
    pub fn new(format: QrFormat) -> Self {
        Self {
            format,
            config: RenderConfig::default(),
        }
    }

    /// Overrides the rendering configuration.
    pub fn with_config(format: QrFormat, config: RenderConfig) -> Self {
        Self { format, config }
    }
}

impl Output for DataUriOutput {
    type Product = String;

    fn write(&mut self, payload: &str) -> Result<String, RenderError> {
        // ASCII art has no place in a data URI
        if self.format == QrFormat::Console {
            return Err(RenderError::UnsupportedFormat("console".to_string()));
        }

        let rendered = render(payload, self.format, &self.config)?;
        let encoded = BASE64.encode(rendered.into_bytes());

        Ok(format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            encoded
        ))
    }
}
