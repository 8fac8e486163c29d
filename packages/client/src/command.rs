//! REPL command parsing.

use thiserror::Error;

pub const HELP: &str = "\
Commands:
  search <text>            Filter the catalog by name or description (empty clears)
  category <name|all>      Filter the catalog by category
  list                     Show the visible listings
  show <id>                Show one listing
  describe <item name>     Suggest a rental description
  zones                    List safe exchange zones
  sign-in <email>          Sign in (prompts for the password)
  sign-up <email> <name>   Create an account (prompts for the password twice)
  sign-out                 Sign out
  me                       Show the signed-in profile
  ask <text>               Ask the concierge
  help                     Show this help
  quit                     Exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Category(String),
    List,
    Show(String),
    Describe(String),
    Zones,
    SignIn { email: String },
    SignUp { email: String, name: String },
    SignOut,
    Me,
    Ask(String),
    Help,
    Quit,
    /// Blank line
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "" => Command::Nothing,
            "search" => Command::Search(rest.to_string()),
            "category" => Command::Category(required(rest, "category <name|all>")?),
            "list" | "ls" => Command::List,
            "show" => Command::Show(required(rest, "show <id>")?),
            "describe" => Command::Describe(required(rest, "describe <item name>")?),
            "zones" => Command::Zones,
            "sign-in" => Command::SignIn {
                email: required(rest, "sign-in <email>")?,
            },
            "sign-up" => {
                let usage = "sign-up <email> <name>";
                let (email, name) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage(usage))?;
                Command::SignUp {
                    email: email.to_string(),
                    name: required(name.trim(), usage)?,
                }
            }
            "sign-out" => Command::SignOut,
            "me" => Command::Me,
            "ask" => Command::Ask(rest.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn required(value: &str, usage: &'static str) -> Result<String, CommandError> {
    if value.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok(value.to_string())
}
