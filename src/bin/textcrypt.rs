// src/bin/textcrypt.rs
//! textcrypt CLI: the form, on a terminal
//!
//! Stdout carries only the result (or the JSON form state with `--json`);
//! logs and error messages go to stderr.

use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use textcrypt::{config, Direction, FormState, Outcome, Request};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "textcrypt", version, about = "Encrypt and decrypt text with Base64, ROT13 or Caesar")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode / encrypt text
    Encrypt(FormArgs),
    /// Decode / decrypt text
    Decrypt(FormArgs),
}

#[derive(Debug, Args)]
struct FormArgs {
    /// base64, rot13 or caesar (default from config)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Caesar shift; may be negative
    #[arg(short, long, allow_hyphen_values = true)]
    shift: Option<String>,

    /// Print the form state as JSON
    #[arg(long)]
    json: bool,

    /// Artificial processing delay in milliseconds (overrides config)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Text to transform; read from stdin when omitted
    text: Option<String>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (direction, args) = match cli.command {
        Command::Encrypt(args) => (Direction::Encrypt, args),
        Command::Decrypt(args) => (Direction::Decrypt, args),
    };

    let conf = config::load();
    let text = match args.text {
        Some(text) => text,
        None => read_stdin().context("failed to read text from stdin")?,
    };

    let algorithm = args
        .algorithm
        .unwrap_or_else(|| conf.defaults.algorithm.to_string());
    let mut request = Request::new(text, algorithm);
    // ignored by the engine unless the algorithm is caesar
    request.shift = Some(
        args.shift
            .unwrap_or_else(|| conf.defaults.shift.to_string()),
    );

    let delay = Duration::from_millis(args.delay_ms.unwrap_or(conf.ui.delay_ms));
    if !delay.is_zero() {
        info!("Processing...");
        thread::sleep(delay);
    }

    debug!(%direction, algorithm = %request.algorithm, "submitting form");
    let outcome = match direction {
        Direction::Encrypt => textcrypt::encrypt(&request),
        Direction::Decrypt => textcrypt::decrypt(&request),
    };

    render(&outcome, args.json || conf.ui.json)
}

fn render(outcome: &Outcome, json: bool) -> Result<ExitCode> {
    let code = if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    if json {
        let state = FormState::from_outcome(outcome);
        println!("{}", state.to_json().context("failed to serialize form state")?);
        return Ok(code);
    }

    match outcome {
        Outcome::Success(text) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
        Outcome::Failure(message) => eprintln!("error: {message}"),
    }
    Ok(code)
}

/// Read all of stdin, dropping the single trailing newline a shell adds
fn read_stdin() -> io::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
