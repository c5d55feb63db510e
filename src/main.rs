//! Address Book - Main entry point
//!
//! Interactive command loop over an address book persisted as JSON.

use address_book::{AddressBook, CommandHandler, Config, Outcome};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Enter a command: ";

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so stdout stays readable)
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let book = AddressBook::open(&config.book_path).with_context(|| {
        format!(
            "Failed to open address book at {}",
            config.book_path.display()
        )
    })?;
    info!(
        "Loaded {} contacts from {}",
        book.len(),
        config.book_path.display()
    );

    let mut handler = CommandHandler::new(book, config);
    run(&mut handler, io::stdin().lock(), io::stdout().lock())?;

    // Input ended without an exit command
    if handler.has_unsaved_changes() {
        handler.save()?;
    }

    info!("Address book closed");
    Ok(())
}

/// Read commands until exit or end of input, printing each reply or error.
fn run(handler: &mut CommandHandler, input: impl BufRead, mut output: impl Write) -> Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match handler.handle_line(&line) {
                Ok(Outcome::Reply(text)) => writeln!(output, "{}", text)?,
                Ok(Outcome::Exit(text)) => {
                    writeln!(output, "{}", text)?;
                    return Ok(());
                }
                Err(e) => writeln!(output, "{}", e)?,
            }
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    Ok(())
}
