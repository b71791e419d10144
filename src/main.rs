//! PromptPay QR code generator.
//!
//! A CLI for creating EMV-compliant PromptPay QR codes: render them to the
//! terminal, save them as images, or print the raw payload for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CommandExecutor, CreateCommand, PayloadCommand};

/// PromptPay QR code generator.
///
/// Generates Thai PromptPay payment QR codes from a phone number, tax ID,
/// or e-wallet ID, with an optional fixed amount.
#[derive(Parser)]
#[command(name = "promptpay")]
#[command(version)]
#[command(about = "Generate PromptPay QR codes for receiving payments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a QR code and render it to the terminal, a file, or a data URI
    Create(CreateCommand),

    /// Print the raw EMV payload string only
    Payload(PayloadCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create(cmd) => cmd.execute(),
        Commands::Payload(cmd) => cmd.execute(),
    }
}
