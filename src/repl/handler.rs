//! Command execution for the REPL.

use super::command::Command;
use crate::book::AddressBook;
use crate::config::Config;
use crate::domain::Phone;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user; the loop continues.
    Reply(String),
    /// Text to show the user; the loop ends.
    Exit(String),
}

/// Runs parsed commands against an address book.
pub struct CommandHandler {
    book: AddressBook,
    config: Config,
    unsaved: bool,
}

impl CommandHandler {
    /// Create a handler over `book`.
    pub fn new(book: AddressBook, config: Config) -> Self {
        Self {
            book,
            config,
            unsaved: false,
        }
    }

    /// The address book being edited.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> CommandResult<Outcome> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    /// Whether the book has changes not yet written to the configured file.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Execute `command`, saving afterwards if it changed the book and
    /// autosave is enabled.
    pub fn execute(&mut self, command: Command) -> CommandResult<Outcome> {
        let mutating = command.is_mutating();
        let outcome = self.dispatch(command)?;

        if mutating {
            self.unsaved = true;
            if self.config.autosave {
                self.save()?;
            }
        }
        Ok(outcome)
    }

    /// Save the book to the configured file.
    pub fn save(&mut self) -> CommandResult<()> {
        self.book.save(&self.config.book_path)?;
        self.unsaved = false;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> CommandResult<Outcome> {
        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => self.add_contact(name, &phone)?,
            Command::Change { name, old, new } => {
                self.record_mut(&name)?.edit_phone(&old, &new)?;
                format!("Phone number for '{}' updated to '{}'.", name, new)
            }
            Command::Phone { name } => Self::show_phones(self.record(&name)?),
            Command::RemovePhone { name, phone } => {
                self.record_mut(&name)?.remove_phone(&phone);
                format!("Phone '{}' removed from '{}'.", phone, name)
            }
            Command::Birthday { name, date } => {
                self.record_mut(&name)?.set_birthday(&date)?;
                format!("Birthday for '{}' set to '{}'.", name, date)
            }
            Command::Days { name } => match self.record(&name)?.days_to_birthday() {
                Some(days) => format!("{} days until {}'s birthday.", days, name),
                None => format!("No birthday set for '{}'.", name),
            },
            Command::Birthdays { within_days } => {
                self.upcoming_birthdays(Local::now().date_naive(), within_days)
            }
            Command::Delete { name } => match self.book.delete(&name) {
                Some(_) => format!("Contact '{}' deleted.", name),
                None => CommandError::ContactNotFound(name).to_string(),
            },
            Command::Search { query } => self.search(&query),
            Command::ShowAll => self.show_all(),
            Command::Save => {
                self.save()?;
                format!(
                    "Address book saved to '{}'.",
                    self.config.book_path.display()
                )
            }
            Command::Exit => {
                if self.unsaved {
                    tracing::info!("Saving unsaved changes before exit");
                    self.save()?;
                }
                return Ok(Outcome::Exit("Good bye!".to_string()));
            }
        };

        Ok(Outcome::Reply(reply))
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn add_contact(&mut self, name: String, phone: &str) -> CommandResult<String> {
        let reply = format!("Contact '{}' with phone '{}' added.", name, phone);

        if let Some(record) = self.book.find_mut(&name) {
            record.add_phone(phone)?;
        } else {
            let mut record = Record::new(name);
            record.add_phone(phone)?;
            self.book.add_record(record);
        }
        Ok(reply)
    }

    fn show_phones(record: &Record) -> String {
        if record.phones().is_empty() {
            return format!("Contact '{}' has no phone numbers.", record.name());
        }
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        format!(
            "The phone numbers for '{}': {}",
            record.name(),
            phones.join("; ")
        )
    }

    fn search(&self, query: &str) -> String {
        let found = self.book.search(query);
        if found.is_empty() {
            return "No contacts found.".to_string();
        }
        found
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "The address book is empty.".to_string();
        }
        self.book
            .paginate(self.config.page_size)
            .enumerate()
            .map(|(i, page)| {
                let lines: Vec<String> = page.iter().map(|r| r.to_string()).collect();
                format!("Page {}:\n{}", i + 1, lines.join("\n"))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn upcoming_birthdays(&self, today: NaiveDate, within_days: u32) -> String {
        let upcoming = self.book.upcoming_birthdays(today, within_days);
        if upcoming.is_empty() {
            return format!("No birthdays in the next {} days.", within_days);
        }
        upcoming
            .iter()
            .map(|(record, days)| {
                let date = record
                    .birthday()
                    .map(|b| b.to_string())
                    .unwrap_or_default();
                format!("{}: in {} days ({})", record.name(), days, date)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
