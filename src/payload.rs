//! PromptPay payload assembly.
//!
//! Builds the EMV QRCPS string a wallet app scans: ordered TLV fields,
//! a merchant information template carrying the recipient, and a trailing
//! CRC computed over everything before it plus the CRC field's own tag and
//! length.

use thiserror::Error;

use crate::amount::{Amount, AmountError};
use crate::crc;
use crate::field::{
    self, MerchantInfoField, PoiMethod, PromptPayField, COUNTRY_CODE_TH, GUID_PROMPTPAY,
    PAYLOAD_FORMAT_EMV_QRCPS, TRANSACTION_CURRENCY_THB,
};
use crate::recipient::{Recipient, RecipientError};

/// Errors raised while generating a payload.
///
/// Validation failures propagate untouched; the generator never repairs
/// bad input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    #[error(transparent)]
    Recipient(#[from] RecipientError),

    #[error(transparent)]
    Amount(#[from] AmountError),
}

/// Generates the payload string for a raw recipient and optional amount.
///
/// With an amount the QR is dynamic (fixed amount); without one it is
/// static and the payer chooses the amount. The same inputs always produce
/// a byte-identical payload.
///
/// # Example
///
/// ```
/// let payload = promptpay::generate("089-999-9999", None).unwrap();
/// assert!(payload.starts_with("000201"));
/// assert!(payload.ends_with("FE29"));
/// ```
pub fn generate(target: &str, amount: Option<f64>) -> Result<String, PayloadError> {
    let recipient = Recipient::from_string(target)?;
    let amount = Amount::from_numeric(amount)?;

    Ok(build(&recipient, amount.as_ref()))
}

/// Assembles the payload from already-validated value objects.
pub fn build(recipient: &Recipient, amount: Option<&Amount>) -> String {
    let poi_method = if amount.is_some() {
        PoiMethod::Dynamic
    } else {
        PoiMethod::Static
    };

    let merchant_info = merchant_information(recipient);

    let mut payload = String::new();
    payload.push_str(&field::encode(
        PromptPayField::PayloadFormat.id(),
        PAYLOAD_FORMAT_EMV_QRCPS,
    ));
    payload.push_str(&field::encode(
        PromptPayField::PoiMethod.id(),
        poi_method.id(),
    ));
    payload.push_str(&field::encode(
        PromptPayField::MerchantInformation.id(),
        &merchant_info,
    ));
    payload.push_str(&field::encode(
        PromptPayField::CountryCode.id(),
        COUNTRY_CODE_TH,
    ));
    payload.push_str(&field::encode(
        PromptPayField::TransactionCurrency.id(),
        TRANSACTION_CURRENCY_THB,
    ));

    if let Some(amount) = amount {
        payload.push_str(&field::encode(
            PromptPayField::TransactionAmount.id(),
            &amount.formatted(),
        ));
    }

    // The CRC covers its own tag and length, so checksum the buffer with
    // "6304" appended but no value yet.
    let crc_preimage = format!("{}{}04", payload, PromptPayField::Crc.id());
    let checksum = crc::checksum_hex(crc_preimage.as_bytes());

    payload.push_str(&field::encode(PromptPayField::Crc.id(), &checksum));
    payload
}

/// Builds the merchant information template (tag 29): the PromptPay GUID
/// followed by the recipient, tagged by its type.
fn merchant_information(recipient: &Recipient) -> String {
    let guid = field::encode(MerchantInfoField::Guid.id(), GUID_PROMPTPAY);
    let target = field::encode(
        recipient.kind().merchant_field().id(),
        &recipient.formatted_value(),
    );

    format!("{guid}{target}")
}
