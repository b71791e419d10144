//! Filesystem output.

use std::path::{Path, PathBuf};

use crate::qr::{render_to_file, RenderConfig, RenderError};

use super::Output;

/// Renders the QR code to a file; the format is inferred from the path's
/// extension (`.png`, `.svg`, `.gif`, `.txt` for ASCII art).
#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
    config: RenderConfig,
}

impl FileOutput {
    /// Creates an adapter writing to `path` with default rendering.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config: RenderConfig::default(),
        }
    }

    /// Overrides the rendering configuration.
    pub fn with_config<P: AsRef<Path>>(path: P, config: RenderConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }
}

impl Output for FileOutput {
    type Product = PathBuf;

    fn write(&mut self, payload: &str) -> Result<PathBuf, RenderError> {
        render_to_file(payload, &self.path, &self.config)?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str =
        "00020101021129370016A000000677010111011300668999999995802TH53037646304FE29";

    #[test]
    fn test_writes_png_file() {
        let path = std::env::temp_dir().join("promptpay_file_output_test.png");
        let mut output = FileOutput::new(&path);

        let written = output.write(PAYLOAD).unwrap();
        assert_eq!(written, path);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_extension_rejected() {
        let path = std::env::temp_dir().join("promptpay_file_output_test");
        let mut output = FileOutput::new(&path);
        assert!(matches!(
            output.write(PAYLOAD),
            Err(RenderError::MissingExtension(_))
        ));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let path = std::env::temp_dir().join("promptpay_file_output_test.bmp");
        let mut output = FileOutput::new(&path);
        assert!(matches!(
            output.write(PAYLOAD),
            Err(RenderError::UnsupportedFormat(_))
        ));
    }
}
