//! HTTP response output.

use http::header::{HeaderValue, CONTENT_TYPE};
use http::Response;

use crate::qr::{render, QrFormat, RenderConfig, RenderError};

use super::Output;

/// Renders the QR code into an [`http::Response`] body with the matching
/// `Content-Type` header.
///
/// This produces a response value; serving it over a socket is the caller's
/// framework's job.
#[derive(Debug, Clone, Copy)]
pub struct HttpResponseOutput {
    format: QrFormat,
    config: RenderConfig,
}

impl HttpResponseOutput {
    /// Creates an adapter for the given format with default rendering.
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

impl Output for HttpResponseOutput {
    type Product = Response<Vec<u8>>;

    fn write(&mut self, payload: &str) -> Result<Response<Vec<u8>>, RenderError> {
        let rendered = render(payload, self.format, &self.config)?;

        let mut response = Response::new(rendered.into_bytes());
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(self.format.mime_type()));

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str =
        "00020101021129370016A000000677010111011300668999999995802TH53037646304FE29";

    #[test]
    fn test_png_response() {
        let mut output = HttpResponseOutput::new(QrFormat::Png);
        let response = output.write(PAYLOAD).unwrap();

        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "image/png"
        );
        assert!(!response.body().is_empty());
    }

    #[test]
    fn test_svg_response_content_type() {
        let mut output = HttpResponseOutput::new(QrFormat::Svg);
        let response = output.write(PAYLOAD).unwrap();
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
    }

    #[test]
    fn test_invalid_config_propagates() {
        let config = RenderConfig::with_size(1);
        let mut output = HttpResponseOutput::with_config(QrFormat::Png, config);
        assert!(matches!(
            output.write(PAYLOAD),
            Err(RenderError::SizeTooSmall { .. })
        ));
    }
}
