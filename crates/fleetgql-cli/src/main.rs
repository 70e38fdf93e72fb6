//! fleetgql - smoke-test runner for the fleet GraphQL API.
//!
//! Authenticates against the identity provider with the configured
//! credentials, then runs the unit and location workflows and reports each
//! step. Exits non-zero when authentication fails or any step fails.

mod command;
mod report;
#[cfg(test)]
mod test_support;
mod workflows;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use fleetgql_core::{ApiClient, Config, Credential, CredentialStore};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use command::{Command, USAGE};
use report::Report;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // RUST_LOG controls the level (e.g. RUST_LOG=fleetgql_core=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = Command::parse(&args)?;

    match command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(ExitCode::SUCCESS)
        }
        Command::StorePassword(ref username) => store_password(username),
        _ => run_workflows(&command).await,
    }
}

/// Prompt for a password without echo and save it in the OS keychain.
fn store_password(username: &str) -> Result<ExitCode> {
    if CredentialStore::has_credentials(username) {
        println!("Replacing the stored password for {}", username);
    }
    let password = rpassword::prompt_password(format!("Password for {}: ", username))
        .context("Failed to read password")?;
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }
    CredentialStore::store(username, &password)?;
    println!("✅ Password stored in the OS keychain for {}", username);
    Ok(ExitCode::SUCCESS)
}

/// How a workflow run ended.
#[derive(Debug)]
enum Outcome {
    /// No token was obtained; nothing else ran.
    AuthFailed,
    Finished(Report),
}

impl Outcome {
    fn succeeded(&self) -> bool {
        match self {
            Outcome::AuthFailed => false,
            Outcome::Finished(report) => report.succeeded(),
        }
    }

    fn exit_code(&self) -> ExitCode {
        if self.succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

async fn run_workflows(command: &Command) -> Result<ExitCode> {
    let config = Config::load().context("Failed to load configuration")?;
    let credential = Credential::from_file(&config.credentials_path)?;
    let outcome = run(command, &config, &credential).await?;
    Ok(outcome.exit_code())
}

/// Authenticate, then run the workflows `command` selects.
async fn run(command: &Command, config: &Config, credential: &Credential) -> Result<Outcome> {
    let mut client = ApiClient::from_config(config)?;

    info!(endpoint = %config.graphql_endpoint, "fleetgql starting");
    println!("🔐 Authenticating as {}...", credential.username);
    let token = match client.authenticate(credential, &config.identity).await {
        Ok(token) => token,
        Err(e) => {
            error!(error = %e, "Authentication failed");
            println!("❌ Authentication failed: {}", e);
            return Ok(Outcome::AuthFailed);
        }
    };
    match token.minutes_until_expiry() {
        Some(minutes) => println!("✅ Authenticated (token valid for {} min)", minutes),
        None => println!("✅ Authenticated"),
    }
    client.set_token(token);

    let mut report = Report::new();
    if command.runs_validate() {
        workflows::validate::run(&client, &mut report).await;
    }
    if command.runs_units() {
        workflows::units::run(&client, &config.account_id, &mut report).await;
    }
    if command.runs_locations() {
        workflows::locations::run(&client, &config.account_id, &mut report).await;
    }
    report.print_summary();

    Ok(Outcome::Finished(report))
}
