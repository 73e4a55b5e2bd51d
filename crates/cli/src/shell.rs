//! Line-oriented inventory shell.
//!
//! Reads menu choices and field values from any `BufRead`, writes the panel
//! and messages to any `Write`. Field text is forwarded to the store exactly
//! as typed (only the line terminator is stripped).

use std::io::{self, BufRead, Write};

use stockpile_infra::{DispatchError, InventoryStorage, InventoryStore, StorageError};
use stockpile_inventory::InventoryCommand;
use thiserror::Error;

use crate::render;

pub const NAME_PROMPT: &str = "Item Name: ";
pub const STOCK_PROMPT: &str = "Stock: ";
pub const POSITION_PROMPT: &str = "Item ID to delete: ";
pub const UNKNOWN_CHOICE: &str = "Unknown choice. Type a, d or q.";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What the user asked for, with the raw text of each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add { name: String, stock: String },
    Delete { position: String },
    Exit,
}

impl Intent {
    /// Command for the store, `None` for `Exit`.
    pub fn to_command(&self) -> Option<InventoryCommand> {
        match self {
            Intent::Add { name, stock } => Some(InventoryCommand::add(name.clone(), stock.clone())),
            Intent::Delete { position } => Some(InventoryCommand::delete(position.clone())),
            Intent::Exit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Delete,
    Exit,
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "a" | "add" => Some(Choice::Add),
        "d" | "delete" => Some(Choice::Delete),
        "q" | "quit" | "exit" => Some(Choice::Exit),
        _ => None,
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Drive the store until the user exits or input ends.
    ///
    /// Returns `Err` only for terminal I/O failures and fatal storage errors.
    pub fn run<S: InventoryStorage>(&mut self, store: &mut InventoryStore<S>) -> Result<(), ShellError> {
        render::inventory(&mut self.output, store.list())?;

        loop {
            let intent = self.read_intent()?;
            let Some(command) = intent.to_command() else {
                tracing::info!("exit requested");
                return Ok(());
            };

            match store.dispatch(&command) {
                Ok(events) => {
                    for event in &events {
                        writeln!(self.output, "{event}")?;
                    }
                    render::inventory(&mut self.output, store.list())?;
                }
                Err(DispatchError::Storage(err)) => return Err(err.into()),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Show the menu and collect one complete intent. End of input is `Exit`.
    pub fn read_intent(&mut self) -> Result<Intent, ShellError> {
        loop {
            render::menu(&mut self.output)?;
            let Some(line) = self.read_line()? else {
                return Ok(Intent::Exit);
            };

            let intent = match parse_choice(&line) {
                Some(Choice::Add) => self.read_add()?,
                Some(Choice::Delete) => self.read_delete()?,
                Some(Choice::Exit) => Some(Intent::Exit),
                None => {
                    writeln!(self.output, "{UNKNOWN_CHOICE}")?;
                    continue;
                }
            };

            return Ok(intent.unwrap_or(Intent::Exit));
        }
    }

    fn read_add(&mut self) -> Result<Option<Intent>, ShellError> {
        let Some(name) = self.prompt(NAME_PROMPT)? else {
            return Ok(None);
        };
        let Some(stock) = self.prompt(STOCK_PROMPT)? else {
            return Ok(None);
        };
        Ok(Some(Intent::Add { name, stock }))
    }

    fn read_delete(&mut self) -> Result<Option<Intent>, ShellError> {
        Ok(self
            .prompt(POSITION_PROMPT)?
            .map(|position| Intent::Delete { position }))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        strip_line_ending(&mut line);
        Ok(Some(line))
    }
}
