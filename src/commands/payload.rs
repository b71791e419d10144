//! Raw payload command, for scripting and piping.

use anyhow::Result;
use clap::Args;

use super::CommandExecutor;

/// Print the raw EMV payload string for a recipient.
#[derive(Args, Debug)]
pub struct PayloadCommand {
    /// Recipient: phone number (10 digits), tax ID (13), or e-wallet ID (15)
    pub target: String,

    /// Amount in THB; omit for a static QR
    pub amount: Option<f64>,
}

impl CommandExecutor for PayloadCommand {
    fn execute(&self) -> Result<()> {
        let payload = promptpay::generate(&self.target, self.amount)?;
        println!("{payload}");
        Ok(())
    }
}
