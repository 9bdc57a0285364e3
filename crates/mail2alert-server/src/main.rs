//! Mail2Alert - filter entry point
//!
//! One-shot filter for a single mail message: the raw message arrives on
//! stdin, the envelope as command line arguments, and the alert
//! recipients leave on stdout, one per line. The mail-receiving
//! transport invokes this once per accepted message.

use anyhow::{bail, Context, Result};
use mail2alert_common::config::Config;
use mail2alert_core::Manager;
use std::io::Read;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "usage: mail2alert <mail-from> <rcpt-to>... < message";

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let mail_from = match args.next() {
        Some(arg) => arg,
        None => bail!(USAGE),
    };
    let rcpt_tos: Vec<String> = args.collect();
    if rcpt_tos.is_empty() {
        bail!(USAGE);
    }

    let config = Config::load()?;
    let manager = Manager::new(&config)?;
    info!("Loaded configuration with {} rules", manager.rules().len());

    let mut content = Vec::new();
    std::io::stdin()
        .read_to_end(&mut content)
        .context("Failed to read message from stdin")?;

    if !manager.wants_message(&mail_from, &rcpt_tos, &content) {
        debug!("Message from {} is not wanted, dropping", mail_from);
        return Ok(());
    }

    let alert = manager.process_message(&mail_from, &rcpt_tos, &content)?;
    info!(
        "Message from {} matched {} recipient(s)",
        alert.mail_from,
        alert.recipients.len()
    );

    for recipient in &alert.recipients {
        println!("{}", recipient);
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mail2alert=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
