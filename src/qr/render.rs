//! QR image rendering on top of the `qrcode` crate.
//!
//! This is the only module that knows how QR modules become pixels. It
//! takes a payload string and returns encoded image bytes, an SVG document,
//! or ASCII art for terminals.

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode as QrMatrix};
use thiserror::Error;

const MIN_SIZE: u32 = 50;
const MAX_SIZE: u32 = 2000;
const MAX_MARGIN: u32 = 100;

/// Errors that can occur while rendering a QR code.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The requested output format is not supported by this renderer.
    #[error("Unsupported format \"{0}\". Supported formats: png, svg, gif, console")]
    UnsupportedFormat(String),

    /// Configured size is below the renderable minimum.
    #[error("QR code size {size}px is too small. Minimum size is {min}px; recommended 200-1000px")]
    SizeTooSmall {
        /// Rejected size.
        size: u32,
        /// Smallest allowed size.
        min: u32,
    },

    /// Configured size is above the renderable maximum.
    #[error("QR code size {size}px is too large. Maximum size is {max}px; recommended 200-1000px")]
    SizeTooLarge {
        /// Rejected size.
        size: u32,
        /// Largest allowed size.
        max: u32,
    },

    /// Configured margin is above the allowed maximum.
    #[error("QR code margin {margin}px is too large. Maximum margin is {max}px")]
    MarginTooLarge {
        /// Rejected margin.
        margin: u32,
        /// Largest allowed margin.
        max: u32,
    },

    /// The output path has no file extension to infer a format from.
    #[error("Invalid path \"{0}\": no file extension found (use e.g. qr.png)")]
    MissingExtension(String),

    /// The payload could not be encoded as a QR symbol.
    #[error("QR code generation failed: {0}")]
    Generation(String),

    /// Encoding the rendered image to bytes failed.
    #[error("Image encoding failed: {0}")]
    ImageEncode(String),

    /// Filesystem error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output format for rendered QR codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    /// PNG image (default).
    #[default]
    Png,
    /// SVG vector document.
    Svg,
    /// GIF image.
    Gif,
    /// ASCII art for terminal display.
    Console,
}

impl QrFormat {
    /// Parses a format name, case-insensitively.
    ///
    /// `ascii` and `txt` are accepted aliases for `console`.
    pub fn from_str(format: &str) -> Result<Self, RenderError> {
        match format.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "gif" => Ok(Self::Gif),
            "console" | "ascii" | "txt" => Ok(Self::Console),
            _ => Err(RenderError::UnsupportedFormat(format.to_string())),
        }
    }

    /// Infers the format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| RenderError::MissingExtension(path.display().to_string()))?;

        Self::from_str(extension)
    }

    /// Returns the MIME type for data URIs and HTTP responses.
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
            Self::Gif => "image/gif",
            Self::Console => "text/plain",
        }
    }
}

impl fmt::Display for QrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Gif => "gif",
            Self::Console => "console",
        };
        f.write_str(name)
    }
}

/// Configuration for QR code rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Minimum output dimensions in pixels (default: 300).
    pub size: u32,
    /// Quiet zone margin in pixels; 0 disables it (default: 10).
    pub margin: u32,
    /// Error correction level (default: L, per the PromptPay convention).
    pub ec_level: EcLevel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 300,
            margin: 10,
            ec_level: EcLevel::L,
        }
    }
}

impl RenderConfig {
    /// Creates a config with the given size and default margin and EC level.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Checks size and margin bounds.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.size < MIN_SIZE {
            return Err(RenderError::SizeTooSmall {
                size: self.size,
                min: MIN_SIZE,
            });
        }
        if self.size > MAX_SIZE {
            return Err(RenderError::SizeTooLarge {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        if self.margin > MAX_MARGIN {
            return Err(RenderError::MarginTooLarge {
                margin: self.margin,
                max: MAX_MARGIN,
            });
        }
        Ok(())
    }
}

/// A rendered QR code.
#[derive(Debug)]
pub enum Rendered {
    /// Encoded image bytes (PNG or GIF).
    Image(Vec<u8>),
    /// SVG document.
    Svg(String),
    /// ASCII art.
    Ascii(String),
}

impl Rendered {
    /// Returns true for encoded image output.
    pub fn is_image(&self) -> bool {
        matches!(self, Rendered::Image(_))
    }

    /// Returns the textual content for SVG or ASCII output.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Rendered::Svg(s) | Rendered::Ascii(s) => Some(s),
            _ => None,
        }
    }

    /// Consumes the output into raw bytes, whatever the format.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Rendered::Image(bytes) => bytes,
            Rendered::Svg(s) | Rendered::Ascii(s) => s.into_bytes(),
        }
    }
}

/// Renders a payload string as a QR code in the requested format.
pub fn render(
    payload: &str,
    format: QrFormat,
    config: &RenderConfig,
) -> Result<Rendered, RenderError> {
    config.validate()?;

    let qr = QrMatrix::with_error_correction_level(payload, config.ec_level)
        .map_err(|e| RenderError::Generation(e.to_string()))?;

    match format {
        QrFormat::Png => {
            let image = render_image(&qr, config);
            Ok(Rendered::Image(encode_image(image, ImageFormat::Png)?))
        }
        QrFormat::Gif => {
            // The GIF encoder wants RGBA frames
            let image = DynamicImage::ImageRgba8(render_image(&qr, config).to_rgba8());
            Ok(Rendered::Image(encode_image(image, ImageFormat::Gif)?))
        }
        QrFormat::Svg => {
            let svg_string = qr
                .render()
                .min_dimensions(config.size, config.size)
                .quiet_zone(config.margin > 0)
                .dark_color(svg::Color("#000000"))
                .light_color(svg::Color("#ffffff"))
                .build();

            Ok(Rendered::Svg(svg_string))
        }
        QrFormat::Console => {
            let ascii = qr
                .render::<char>()
                .quiet_zone(config.margin > 0)
                .module_dimensions(2, 1)
                .build();

            Ok(Rendered::Ascii(ascii))
        }
    }
}

/// Renders a payload and writes it to a file, inferring the format from the
/// path's extension.
pub fn render_to_file<P: AsRef<Path>>(
    payload: &str,
    path: P,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    let format = QrFormat::from_path(path)?;
    let output = render(payload, format, config)?;

    std::fs::write(path, output.into_bytes())?;
    Ok(())
}

fn render_image(qr: &QrMatrix, config: &RenderConfig) -> DynamicImage {
    let buffer = qr
        .render::<Luma<u8>>()
        .min_dimensions(config.size, config.size)
        .quiet_zone(config.margin > 0)
        .build();

    DynamicImage::ImageLuma8(buffer)
}

fn encode_image(image: DynamicImage, format: ImageFormat) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .map_err(|e| RenderError::ImageEncode(e.to_string()))?;
    Ok(bytes)
}
