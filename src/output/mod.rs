//! Output adapters for generated QR codes.
//!
//! Each adapter is a separate module implementing the [`Output`] trait.
//! A [`crate::QrCode`] hands its payload to an adapter, which decides how
//! to render and deliver it: as-is, a data URI, a file, a terminal dump,
//! or an HTTP response.

mod console;
mod data_uri;
mod file;
mod http_response;
mod string;

pub use console::ConsoleOutput;
pub use data_uri::DataUriOutput;
pub use file::FileOutput;
pub use http_response::HttpResponseOutput;
pub use string::StringOutput;

use crate::qr::RenderError;

/// Sink contract for QR code payloads.
///
/// Adapters receive the payload string and return their own product: the
/// payload itself, a data URI, a written path, an HTTP response.
pub trait Output {
    /// What this adapter produces on success.
    type Product;

    /// Consumes the payload and produces the adapter's output.
    fn write(&mut self, payload: &str) -> Result<Self::Product, RenderError>;
}
