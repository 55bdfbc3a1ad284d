//! Command-line arguments and the line commands read while a page is open.

use std::str::FromStr;

use clap::{Parser, ValueEnum};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "studio-find",
    about = "Search bookings, clients and invoices in the studio back office"
)]
pub struct Args {
    /// Which find page to open.
    #[arg(value_enum)]
    pub page: Page,

    /// Directory holding `default.yaml` and per-environment overrides.
    #[arg(long, default_value = "config")]
    pub config_dir: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Page {
    Booking,
    Clients,
    Invoices,
}

pub const HELP: &str = "\
commands:
  toggle <filter>       show or hide a filter (hiding clears it)
  set <field> [value]   type into an active field; no value clears it
  show                  list filters and current results
  logout                end the session and quit
  quit                  close the page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(String),
    Set { key: String, value: String },
    Show,
    Help,
    Logout,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    /// Everything after `set <field> ` is the value, whitespace included.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (verb, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

        match verb {
            "" => Err(CommandError::Empty),
            "toggle" => match rest.trim() {
                "" => Err(CommandError::MissingArgument("toggle")),
                name => Ok(Command::Toggle(name.to_string())),
            },
            "set" => {
                let rest = rest.trim_start();
                let (key, value) = rest.split_once(' ').unwrap_or((rest.trim_end(), ""));
                if key.is_empty() {
                    return Err(CommandError::MissingArgument("set"));
                }
                Ok(Command::Set {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
            "show" => Ok(Command::Show),
            "help" => Ok(Command::Help),
            "logout" => Ok(Command::Logout),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
