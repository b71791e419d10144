//! # PromptPay - Thai QR payment code generator
//!
//! Generates EMV QRCPS payload strings for Thailand's PromptPay scheme and
//! renders them as QR code images.
//!
//! ## Overview
//!
//! A PromptPay QR code is a short ASCII string of tag-length-value fields:
//! a format indicator, a point-of-initiation method, a merchant template
//! carrying the recipient, country and currency codes, an optional amount,
//! and a trailing CRC-16 checksum. Scanning wallets parse this string per
//! the EMVCo / Bank of Thailand specification, so every tag, the field
//! order, and the checksum must be byte-exact.
//!
//! Recipients are phone numbers (10 digits), tax or national IDs
//! (13 digits), or e-wallet IDs (15 digits); formatting characters are
//! stripped before validation. A QR without an amount is **static** (the
//! payer enters one); with an amount it is **dynamic** (the amount is
//! fixed).
//!
//! ## Example Usage
//!
//! ```rust
//! use promptpay::{PromptPay, QrFormat};
//!
//! // Raw payload for a static QR (any amount)
//! let payload = promptpay::generate("089-999-9999", None).unwrap();
//! assert!(payload.ends_with("FE29"));
//!
//! // Fluent builder for a fixed-amount QR as a data URI
//! let uri = PromptPay::to("089-999-9999")
//!     .amount(100.0)
//!     .to_data_uri(QrFormat::Png)
//!     .unwrap();
//! assert!(uri.starts_with("data:image/png;base64,"));
//! ```
//!
//! ## Modules
//!
//! - [`payload`]: payload assembly, the heart of the crate
//! - [`recipient`]: recipient validation and classification
//! - [`amount`]: amount validation and formatting
//! - [`crc`]: CRC-16/CCITT-FALSE checksum
//! - [`field`]: TLV encoding and EMV tag identifiers
//! - [`qr`]: QR code value object and image rendering
//! - [`output`]: output adapters (string, data URI, file, console, HTTP)
//! - [`builder`]: the `PromptPay` facade and fluent builder

pub mod amount;
pub mod builder;
pub mod crc;
pub mod field;
pub mod output;
pub mod payload;
pub mod qr;
pub mod recipient;

// Re-export commonly used types at the crate root
pub use amount::{Amount, AmountError};
pub use builder::{PromptPay, PromptPayBuilder, PromptPayError};
pub use output::{
    ConsoleOutput, DataUriOutput, FileOutput, HttpResponseOutput, Output, StringOutput,
};
pub use payload::{generate, PayloadError};
pub use qr::{QrCode, QrFormat, RenderConfig, RenderError};
pub use recipient::{Recipient, RecipientError, RecipientType};
