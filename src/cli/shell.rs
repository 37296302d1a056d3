//! Interactive shell
//!
//! Reads one command per line and applies it to an [`ExpenseStore`]. The
//! store's refresh hook raises a flag; after each command the shell redraws
//! the expense table and totals if the flag was raised.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::debug;

use super::form::{today, ExpenseForm};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::export::LedgerSnapshot;
use crate::services::{ExpenseStore, RefreshFlag};

pub const MSG_ADDED: &str = "Expense added successfully";
pub const MSG_CAPACITY: &str = "Failed to add expense. Maximum number of expenses reached.";
pub const MSG_OUT_OF_RANGE: &str = "Failed to update expenses. Totals would be too large.";
pub const MSG_DELETED: &str = "Expense deleted successfully";
pub const MSG_INVALID_ROW: &str = "Failed to delete expense. Invalid index.";
pub const MSG_CLEARED: &str = "All expenses cleared successfully";
pub const CLEAR_PROMPT: &str =
    "Are you sure you want to clear all expenses? This action cannot be undone. [y/N] ";

/// One line of shell input
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Shell commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add an expense
    Add {
        /// Category name
        category: String,
        /// Amount (e.g., "10.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
        /// Expense date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Add an expense under the favorite category
    #[command(alias = "favorite")]
    Fav {
        /// Amount (e.g., "10.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
        /// Expense date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete the expense shown at ROW
    #[command(alias = "rm")]
    Delete {
        /// Row number as listed (starting at 1)
        row: usize,
    },

    /// Remove every expense
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the expense table
    #[command(alias = "ls")]
    List,

    /// Show category totals and the grand total
    Totals,

    /// Show one expense and its snapshot
    Show {
        /// Row number as listed (starting at 1)
        row: usize,
    },

    /// Print the whole ledger as JSON
    Export,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// What the shell should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive front end over an expense store
pub struct Shell {
    store: ExpenseStore,
    refresh: RefreshFlag,
    currency_symbol: String,
    favorite_category: String,
}

impl Shell {
    /// Build a shell with a fresh store configured from `settings`
    pub fn new(settings: &Settings) -> Self {
        let refresh = RefreshFlag::new();
        let store = ExpenseStore::new(settings.limits()).with_refresh_hook(refresh.hook());

        Self {
            store,
            refresh,
            currency_symbol: settings.currency_symbol.clone(),
            favorite_category: settings.favorite_category.clone(),
        }
    }

    /// Read-only access to the underlying store
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Run until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> LedgerResult<()> {
        writeln!(output, "Budget Planner - type 'help' for commands")?;
        self.render(output)?;

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            if self.execute_line(line.trim(), input, output)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Parse and run a single line
    pub fn execute_line<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        output: &mut W,
    ) -> LedgerResult<Flow> {
        let args = split_args(line);
        if args.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellLine::try_parse_from(&args) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                // Covers `help` and `--help` as well as real usage errors
                write!(output, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "shell command");
        let flow = self.execute(command, input, output)?;

        if self.refresh.take() {
            self.render(output)?;
        }

        Ok(flow)
    }

    /// Run a parsed command
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: ShellCommand,
        input: &mut R,
        output: &mut W,
    ) -> LedgerResult<Flow> {
        match command {
            ShellCommand::Add {
                category,
                amount,
                description,
                date,
            } => self.add_expense(category, amount, description, date, output)?,

            ShellCommand::Fav {
                amount,
                description,
                date,
            } => {
                writeln!(output, "Favorite category selected: {}", self.favorite_category)?;
                let category = self.favorite_category.clone();
                self.add_expense(category, amount, description, date, output)?;
            }

            ShellCommand::Delete { row } => {
                let result = match row.checked_sub(1) {
                    Some(index) => self.store.delete_at(index).map(|_| ()),
                    None => Err(LedgerError::InvalidIndex {
                        index: 0,
                        count: self.store.count(),
                    }),
                };

                match result {
                    Ok(()) => writeln!(output, "{}", MSG_DELETED)?,
                    Err(LedgerError::InvalidIndex { .. }) => writeln!(output, "{}", MSG_INVALID_ROW)?,
                    Err(LedgerError::TotalOutOfRange) => writeln!(output, "{}", MSG_OUT_OF_RANGE)?,
                    Err(e) => return Err(e),
                }
            }

            ShellCommand::Clear { yes } => {
                if yes || confirm(input, output)? {
                    self.store.clear();
                    writeln!(output, "{}", MSG_CLEARED)?;
                }
            }

            ShellCommand::List => {
                write!(
                    output,
                    "{}",
                    format_expense_table(&self.store.records(), &self.currency_symbol)
                )?;
            }

            ShellCommand::Totals => {
                write!(output, "{}", self.summary())?;
            }

            ShellCommand::Show { row } => {
                let found = row
                    .checked_sub(1)
                    .map(|index| (index, self.store.record_at(index)));

                match found {
                    Some((index, Ok(record))) => {
                        write!(
                            output,
                            "{}",
                            format_expense_details(row, &record, &self.currency_symbol)
                        )?;
                        writeln!(output, "  Snapshot:    {}", self.store.serialize_record(index)?)?;
                    }
                    Some((_, Err(e))) if !e.is_not_found() => return Err(e),
                    _ => writeln!(output, "No expense at row {}", row)?,
                }
            }

            ShellCommand::Export => {
                let snapshot = LedgerSnapshot::from_store(&self.store);
                writeln!(output, "{}", snapshot.to_json_pretty()?)?;
            }

            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn add_expense<W: Write>(
        &mut self,
        category: String,
        amount: String,
        description: Vec<String>,
        date: Option<String>,
        output: &mut W,
    ) -> LedgerResult<()> {
        let form = ExpenseForm::new(
            date.unwrap_or_else(today),
            category,
            amount,
            description.join(" "),
        );

        let record = match form.validate() {
            Ok(record) => record,
            Err(LedgerError::Validation(msg)) => {
                writeln!(output, "{}", msg)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match self.store.add_record(record) {
            Ok(_) => writeln!(output, "{}", MSG_ADDED)?,
            Err(LedgerError::CapacityExhausted { .. }) => writeln!(output, "{}", MSG_CAPACITY)?,
            Err(LedgerError::TotalOutOfRange) => writeln!(output, "{}", MSG_OUT_OF_RANGE)?,
            Err(e) => return Err(e),
        }

        Ok(())
    }

    fn summary(&self) -> String {
        format_summary(
            &self.store.aggregates(),
            self.store.grand_total(),
            self.store.dropped_category_contributions(),
            &self.currency_symbol,
        )
    }

    fn render<W: Write>(&self, output: &mut W) -> LedgerResult<()> {
        writeln!(output)?;
        write!(
            output,
            "{}",
            format_expense_table(&self.store.records(), &self.currency_symbol)
        )?;
        writeln!(output)?;
        write!(output, "{}", self.summary())?;
        writeln!(output)?;
        Ok(())
    }
}

/// Ask before destroying every record
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> LedgerResult<bool> {
    write!(output, "{}", CLEAR_PROMPT)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Split a command line on whitespace, keeping double-quoted runs together
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        args.push(current);
    }

    args
}
