//! TLV field encoding and EMV QRCPS tag identifiers.
//!
//! Every field in a PromptPay payload is `tag + length + value`, where the
//! tag is two characters and the length is the value's character count,
//! zero-padded to two digits.

/// Payload format indicator value for EMV QRCPS.
pub const PAYLOAD_FORMAT_EMV_QRCPS: &str = "01";

/// PromptPay application identifier (Bank of Thailand).
pub const GUID_PROMPTPAY: &str = "A000000677010111";

/// ISO 4217 numeric code for Thai Baht.
pub const TRANSACTION_CURRENCY_THB: &str = "764";

/// ISO 3166-1 alpha-2 code for Thailand.
pub const COUNTRY_CODE_TH: &str = "TH";

/// Top-level field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPayField {
    PayloadFormat,
    PoiMethod,
    MerchantInformation,
    TransactionCurrency,
    TransactionAmount,
    CountryCode,
    Crc,
}

impl PromptPayField {
    /// Returns the two-character tag for this field.
    pub const fn id(self) -> &'static str {
        match self {
            Self::PayloadFormat => "00",
            Self::PoiMethod => "01",
            Self::MerchantInformation => "29",
            Self::TransactionCurrency => "53",
            Self::TransactionAmount => "54",
            Self::CountryCode => "58",
            Self::Crc => "63",
        }
    }
}

/// Field identifiers inside the merchant information template (tag 29).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerchantInfoField {
    Guid,
    PhoneNumber,
    TaxId,
    EWalletId,
}

impl MerchantInfoField {
    /// Returns the two-character tag for this sub-field.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Guid => "00",
            Self::PhoneNumber => "01",
            Self::TaxId => "02",
            Self::EWalletId => "03",
        }
    }
}

/// Point of initiation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoiMethod {
    /// QR without an amount; the payer enters one when scanning.
    Static,
    /// QR carrying a fixed amount.
    Dynamic,
}

impl PoiMethod {
    /// Returns the two-character value for this method.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Static => "11",
            Self::Dynamic => "12",
        }
    }
}

/// Encodes a single TLV field: `id` + zero-padded 2-digit length + `value`.
///
/// EMV QR values never approach the 99-character limit of the 2-digit
/// length; longer values are a caller bug.
pub fn encode(id: &str, value: &str) -> String {
    debug_assert!(value.len() < 100, "TLV value too long for 2-digit length");
    format!("{}{:02}{}", id, value.len(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pads_length() {
        assert_eq!(encode("00", "01"), "000201");
        assert_eq!(encode("58", "TH"), "5802TH");
    }

    #[test]
    fn test_encode_two_digit_length() {
        assert_eq!(
            encode("00", GUID_PROMPTPAY),
            "0016A000000677010111"
        );
    }

    #[test]
    fn test_encode_empty_value() {
        assert_eq!(encode("99", ""), "9900");
    }

    #[test]
    fn test_field_ids() {
        assert_eq!(PromptPayField::PayloadFormat.id(), "00");
        assert_eq!(PromptPayField::MerchantInformation.id(), "29");
        assert_eq!(PromptPayField::TransactionCurrency.id(), "53");
        assert_eq!(PromptPayField::TransactionAmount.id(), "54");
        assert_eq!(PromptPayField::CountryCode.id(), "58");
        assert_eq!(PromptPayField::Crc.id(), "63");
    }

    #[test]
    fn test_merchant_info_ids() {
        assert_eq!(MerchantInfoField::Guid.id(), "00");
        assert_eq!(MerchantInfoField::PhoneNumber.id(), "01");
        assert_eq!(MerchantInfoField::TaxId.id(), "02");
        assert_eq!(MerchantInfoField::EWalletId.id(), "03");
    }

    #[test]
    fn test_poi_method_ids() {
        assert_eq!(PoiMethod::Static.id(), "11");
        assert_eq!(PoiMethod::Dynamic.id(), "12");
    }
}
