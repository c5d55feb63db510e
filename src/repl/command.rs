//! Command-line parsing for the REPL.

use crate::error::{CommandError, CommandResult};

/// Default window for the `birthdays` command.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add { name: String, phone: String },
    /// `change <name> <old> <new>`
    Change {
        name: String,
        old: String,
        new: String,
    },
    /// `phone <name>`
    Phone { name: String },
    /// `remove-phone <name> <phone>`
    RemovePhone { name: String, phone: String },
    /// `birthday <name> <YYYY-MM-DD>`
    Birthday { name: String, date: String },
    /// `days <name>`
    Days { name: String },
    /// `birthdays [days]`
    Birthdays { within_days: u32 },
    /// `delete <name>`
    Delete { name: String },
    /// `search <query>`
    Search { query: String },
    /// `show all`
    ShowAll,
    /// `save`
    Save,
    /// `good bye`, `close` or `exit`
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The command word is matched case-insensitively; arguments are kept
    /// as typed.
    ///
    /// # Errors
    ///
    /// - `CommandError::Unknown` for an unrecognised command word.
    /// - `CommandError::Usage` when the argument count is wrong.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Err(CommandError::Unknown(line.to_string()));
        };

        let head = head.to_lowercase();
        let second = args.first().map(|s| s.to_lowercase());

        match (head.as_str(), second.as_deref(), args) {
            ("hello", _, []) => Ok(Self::Hello),
            ("show", Some("all"), [_]) => Ok(Self::ShowAll),
            ("good", Some("bye"), [_]) | ("close", _, []) | ("exit", _, []) => Ok(Self::Exit),
            ("save", _, []) => Ok(Self::Save),

            ("add", _, [name, phone]) => Ok(Self::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
            ("add", _, _) => Err(CommandError::Usage("add <name> <phone>")),

            ("change", _, [name, old, new]) => Ok(Self::Change {
                name: name.to_string(),
                old: old.to_string(),
                new: new.to_string(),
            }),
            ("change", _, _) => Err(CommandError::Usage("change <name> <old phone> <new phone>")),

            ("phone", _, [name]) => Ok(Self::Phone {
                name: name.to_string(),
            }),
            ("phone", _, _) => Err(CommandError::Usage("phone <name>")),

            ("remove-phone", _, [name, phone]) => Ok(Self::RemovePhone {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
            ("remove-phone", _, _) => Err(CommandError::Usage("remove-phone <name> <phone>")),

            ("birthday", _, [name, date]) => Ok(Self::Birthday {
                name: name.to_string(),
                date: date.to_string(),
            }),
            ("birthday", _, _) => Err(CommandError::Usage("birthday <name> <YYYY-MM-DD>")),

            ("days", _, [name]) => Ok(Self::Days {
                name: name.to_string(),
            }),
            ("days", _, _) => Err(CommandError::Usage("days <name>")),

            ("birthdays", _, []) => Ok(Self::Birthdays {
                within_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            }),
            ("birthdays", _, [days]) => days
                .parse()
                .map(|within_days| Self::Birthdays { within_days })
                .map_err(|_| CommandError::Usage("birthdays [days]")),
            ("birthdays", _, _) => Err(CommandError::Usage("birthdays [days]")),

            ("delete", _, [name]) => Ok(Self::Delete {
                name: name.to_string(),
            }),
            ("delete", _, _) => Err(CommandError::Usage("delete <name>")),

            ("search", _, [query]) => Ok(Self::Search {
                query: query.to_string(),
            }),
            ("search", _, _) => Err(CommandError::Usage("search <query>")),

            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }

    /// Whether running this command changes the address book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add { .. }
                | Self::Change { .. }
                | Self::RemovePhone { .. }
                | Self::Birthday { .. }
                | Self::Delete { .. }
        )
    }
}
