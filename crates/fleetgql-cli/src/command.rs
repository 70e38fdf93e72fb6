use anyhow::{bail, Result};

pub const USAGE: &str = "\
Usage:
  fleetgql [validate|units|locations|all]   run smoke-test workflows (default: all)
  fleetgql store-password <username>        save a password in the OS keychain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Validate,
    Units,
    Locations,
    All,
    StorePassword(String),
    Help,
}

impl Command {
    /// Parse the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let rest = args.get(1..).unwrap_or_default();
        match rest.first().map(String::as_str) {
            None | Some("all") => Ok(Command::All),
            Some("validate") => Ok(Command::Validate),
            Some("units") => Ok(Command::Units),
            Some("locations") => Ok(Command::Locations),
            Some("store-password") => match rest.get(1) {
                Some(username) if !username.trim().is_empty() => {
                    Ok(Command::StorePassword(username.clone()))
                }
                _ => bail!("store-password needs a username\n\n{}", USAGE),
            },
            Some("-h" | "--help" | "help") => Ok(Command::Help),
            Some(other) => bail!("Unknown command: {}\n\n{}", other, USAGE),
        }
    }

    pub fn runs_validate(&self) -> bool {
        matches!(self, Command::Validate | Command::All)
    }

    pub fn runs_units(&self) -> bool {
        matches!(self, Command::Units | Command::All)
    }

    pub fn runs_locations(&self) -> bool {
        matches!(self, Command::Locations | Command::All)
    }
}
