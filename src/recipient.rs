//! Recipient identifier validation and classification.
//!
//! A PromptPay recipient is a phone number (10 digits), a tax or national
//! ID (13 digits), or an e-wallet ID (15 digits). Input is normalized by
//! stripping every non-digit character, so `089-999-9999` and `0899999999`
//! are the same recipient.

use std::fmt;

use thiserror::Error;

use crate::field::MerchantInfoField;

const MIN_LENGTH: usize = 10;
const MAX_LENGTH: usize = 15;
const PHONE_LENGTH: usize = 10;
const TAX_ID_LENGTH: usize = 13;
const EWALLET_LENGTH: usize = 15;

/// Errors raised while validating a recipient identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipientError {
    /// The input was empty or whitespace.
    #[error("Recipient cannot be empty. Provide a phone number (10 digits), tax ID (13 digits), or e-wallet ID (15 digits)")]
    Empty,

    /// Nothing remained after stripping non-digit characters.
    #[error("Recipient \"{0}\" contains no digits. Provide a phone number, tax ID, or e-wallet ID")]
    EmptyAfterNormalization(String),

    /// The normalized value contains non-digit characters.
    #[error("Recipient \"{0}\" must contain only digits")]
    NotNumeric(String),

    /// The normalized value has an unsupported digit count.
    #[error("Invalid recipient length: {length} digits. {hint}")]
    InvalidLength {
        /// Number of digits after normalization.
        length: usize,
        /// Actionable suggestion for this length bucket.
        hint: &'static str,
    },
}

/// The classified recipient type, which selects the merchant info sub-tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientType {
    /// Mobile phone number (10 digits).
    Phone,
    /// Tax or national ID (13 digits).
    TaxId,
    /// E-wallet ID (15 digits).
    EWallet,
}

impl RecipientType {
    /// Returns the merchant information sub-field this type is encoded under.
    pub const fn merchant_field(self) -> MerchantInfoField {
        match self {
            Self::Phone => MerchantInfoField::PhoneNumber,
            Self::TaxId => MerchantInfoField::TaxId,
            Self::EWallet => MerchantInfoField::EWalletId,
        }
    }

    /// Human-readable label for this type.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone Number",
            Self::TaxId => "Tax ID",
            Self::EWallet => "E-Wallet ID",
        }
    }
}

/// A validated, normalized PromptPay recipient.
///
/// Construction validates eagerly; a `Recipient` is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    normalized: String,
    kind: RecipientType,
}

impl Recipient {
    /// Validates and normalizes a raw recipient string.
    ///
    /// Non-digit characters (dashes, spaces, punctuation) are stripped
    /// before length validation and classification.
    pub fn from_string(raw: &str) -> Result<Self, RecipientError> {
        if raw.trim().is_empty() {
            return Err(RecipientError::Empty);
        }

        let normalized = normalize(raw);

        if normalized.is_empty() {
            return Err(RecipientError::EmptyAfterNormalization(raw.to_string()));
        }

        // Unreachable after normalize(), but kept so the check also guards
        // callers that construct from pre-normalized input.
        if !normalized.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecipientError::NotNumeric(raw.to_string()));
        }

        let length = normalized.len();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(RecipientError::InvalidLength {
                length,
                hint: length_hint(length),
            });
        }

        let kind = classify(&normalized);

        Ok(Self { normalized, kind })
    }

    /// Returns the normalized digits-only value.
    pub fn value(&self) -> &str {
        &self.normalized
    }

    /// Returns the classified recipient type.
    pub fn kind(&self) -> RecipientType {
        self.kind
    }

    /// Returns the value as embedded in the payload.
    ///
    /// Phone numbers swap the leading `0` for the country calling code `66`
    /// and are zero-padded on the left to 13 digits; tax IDs and e-wallet
    /// IDs pass through unchanged.
    pub fn formatted_value(&self) -> String {
        match self.kind {
            RecipientType::Phone => {
                let with_country_code = match self.normalized.strip_prefix('0') {
                    Some(rest) => format!("66{rest}"),
                    None => self.normalized.clone(),
                };
                format!("{with_country_code:0>13}")
            }
            _ => self.normalized.clone(),
        }
    }

    /// Returns the value formatted for humans, with dashes.
    ///
    /// Phone numbers render as `0XX-XXX-XXXX`, tax IDs as
    /// `X-XXXX-XXXXX-XX-X`; other lengths pass through.
    pub fn display_value(&self) -> String {
        let v = &self.normalized;
        match v.len() {
            PHONE_LENGTH => format!("{}-{}-{}", &v[..3], &v[3..6], &v[6..]),
            TAX_ID_LENGTH => format!(
                "{}-{}-{}-{}-{}",
                &v[..1],
                &v[1..5],
                &v[5..10],
                &v[10..12],
                &v[12..]
            ),
            _ => v.clone(),
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Strips every non-digit character from `raw`.
fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn classify(normalized: &str) -> RecipientType {
    let length = normalized.len();

    if length >= EWALLET_LENGTH {
        RecipientType::EWallet
    } else if length >= TAX_ID_LENGTH {
        RecipientType::TaxId
    } else {
        RecipientType::Phone
    }
}

fn length_hint(length: usize) -> &'static str {
    if length < MIN_LENGTH {
        "Too short: expected 10 digits (phone), 13 (tax ID), or 15 (e-wallet ID)"
    } else if length == 14 {
        "Close: add one digit for an e-wallet ID (15) or drop one for a tax ID (13)"
    } else if length > MAX_LENGTH {
        "Too long: the maximum is 15 digits for an e-wallet ID"
    } else {
        "Expected 10 digits (phone), 13 (tax ID), or 15 (e-wallet ID)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number() {
        let r = Recipient::from_string("0899999999").unwrap();
        assert_eq!(r.value(), "0899999999");
        assert_eq!(r.kind(), RecipientType::Phone);
        assert_eq!(r.formatted_value(), "0066899999999");
    }

    #[test]
    fn test_phone_normalization_strips_formatting() {
        let dashed = Recipient::from_string("089-999-9999").unwrap();
        let spaced = Recipient::from_string("089 999 9999").unwrap();
        let plain = Recipient::from_string("0899999999").unwrap();

        assert_eq!(dashed, plain);
        assert_eq!(spaced, plain);
    }

    #[test]
    fn test_tax_id() {
        let r = Recipient::from_string("1234567890123").unwrap();
        assert_eq!(r.kind(), RecipientType::TaxId);
        // Tax IDs embed unchanged
        assert_eq!(r.formatted_value(), "1234567890123");
    }

    #[test]
    fn test_ewallet_id() {
        let r = Recipient::from_string("123456789012345").unwrap();
        assert_eq!(r.kind(), RecipientType::EWallet);
        assert_eq!(r.formatted_value(), "123456789012345");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Recipient::from_string(""), Err(RecipientError::Empty));
        assert_eq!(Recipient::from_string("   "), Err(RecipientError::Empty));
    }

    #[test]
    fn test_no_digits_after_normalization() {
        let err = Recipient::from_string("abc-def").unwrap_err();
        assert!(matches!(err, RecipientError::EmptyAfterNormalization(_)));
    }

    #[test]
    fn test_too_short() {
        let err = Recipient::from_string("12345").unwrap_err();
        match err {
            RecipientError::InvalidLength { length, hint } => {
                assert_eq!(length, 5);
                assert!(hint.contains("Too short"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_too_long() {
        let err = Recipient::from_string("1234567890123456").unwrap_err();
        match err {
            RecipientError::InvalidLength { length, hint } => {
                assert_eq!(length, 16);
                assert!(hint.contains("Too long"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_gap_lengths_rejected() {
        for raw in ["12345678901", "123456789012"] {
            let err = Recipient::from_string(raw).unwrap_err();
            assert!(matches!(err, RecipientError::InvalidLength { .. }));
        }
    }

    #[test]
    fn test_fourteen_digits_hint() {
        let err = Recipient::from_string("12345678901234").unwrap_err();
        match err {
            RecipientError::InvalidLength { length, hint } => {
                assert_eq!(length, 14);
                assert!(hint.contains("Close"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_merchant_field_mapping() {
        assert_eq!(
            RecipientType::Phone.merchant_field(),
            MerchantInfoField::PhoneNumber
        );
        assert_eq!(
            RecipientType::TaxId.merchant_field(),
            MerchantInfoField::TaxId
        );
        assert_eq!(
            RecipientType::EWallet.merchant_field(),
            MerchantInfoField::EWalletId
        );
    }

    #[test]
    fn test_display_value_phone() {
        let r = Recipient::from_string("0899999999").unwrap();
        assert_eq!(r.display_value(), "089-999-9999");
    }

    #[test]
    fn test_display_value_tax_id() {
        let r = Recipient::from_string("1234567890123").unwrap();
        assert_eq!(r.display_value(), "1-2345-67890-12-3");
    }

    #[test]
    fn test_display_value_ewallet_passthrough() {
        let r = Recipient::from_string("123456789012345").unwrap();
        assert_eq!(r.display_value(), "123456789012345");
    }

    #[test]
    fn test_display_renders_normalized() {
        let r = Recipient::from_string("089-999-9999").unwrap();
        assert_eq!(r.to_string(), "0899999999");
    }
}
