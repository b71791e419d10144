//! QR code creation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use promptpay::{Amount, PromptPay, QrFormat, Recipient, RenderConfig};

use super::CommandExecutor;

/// Create a PromptPay QR code for receiving payments.
#[derive(Args, Debug)]
pub struct CreateCommand {
    /// Recipient: phone number (10 digits), tax ID (13), or e-wallet ID (15)
    pub target: String,

    /// Amount in THB; omit for a static QR where the payer picks the amount
    pub amount: Option<f64>,

    /// Save the QR code to a file (format from extension: .png, .svg, .gif, .txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a base64 data URI instead of rendering to the terminal
    #[arg(long)]
    pub data_uri: bool,

    /// Image format for --data-uri: png, svg, or gif
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// QR code size in pixels
    #[arg(short, long, default_value = "300")]
    pub size: u32,

    /// Quiet zone margin in pixels (0 disables it)
    #[arg(long, default_value = "10")]
    pub margin: u32,

    /// Display the raw PromptPay payload string
    #[arg(short = 'p', long)]
    pub show_payload: bool,
}

impl CommandExecutor for CreateCommand {
    fn execute(&self) -> Result<()> {
        // Validate up front so the summary shows normalized values
        let recipient = Recipient::from_string(&self.target)?;
        let amount = Amount::from_numeric(self.amount)?;

        println!(
            "Recipient: {} ({})",
            recipient.display_value(),
            recipient.kind().label()
        );
        match &amount {
            Some(amount) => {
                println!("Amount:    {} THB", amount.display_value());
                println!("QR type:   dynamic (fixed amount)");
            }
            None => {
                println!("Amount:    any (payer enters it when scanning)");
                println!("QR type:   static (reusable)");
            }
        }
        println!();

        let config = RenderConfig {
            size: self.size,
            margin: self.margin,
            ..RenderConfig::default()
        };

        let builder = match self.amount {
            Some(amount) => PromptPay::to(&self.target).amount(amount),
            None => PromptPay::to(&self.target),
        }
        .config(config);

        if let Some(path) = &self.output {
            let written = builder
                .to_file(path)
                .with_context(|| format!("Failed to write QR code to {}", path.display()))?;

            let file_size = std::fs::metadata(&written).map(|m| m.len()).unwrap_or(0);
            println!("QR code saved: {}", written.display());
            println!("  Size: {} x {} px | {} bytes", self.size, self.size, file_size);
        } else if self.data_uri {
            let format = QrFormat::from_str(&self.format)?;
            let uri = builder
                .to_data_uri(format)
                .context("Failed to build data URI")?;
            println!("{uri}");
        } else {
            builder
                .to_console()
                .context("Failed to render QR code to terminal")?;
        }

        if self.show_payload {
            println!();
            println!("Payload: {}", builder.to_payload()?);
        }

        Ok(())
    }
}
