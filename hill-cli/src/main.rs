//! hill - encrypt a message with a Hill cipher key and decrypt it back

mod key_source;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use hill_cipher::{HillCipherError, decrypt, encrypt};

use crate::key_source::KeySource;

#[derive(Parser)]
#[command(name = "hill")]
#[command(about = "Hill cipher: encrypt a message and decrypt it back", long_about = None)]
struct Cli {
    /// Message to encrypt; read from stdin when omitted
    message: Option<String>,

    /// Key matrix as JSON rows, e.g. [[6,24,1],[13,16,10],[20,17,15]]
    #[arg(long, group = "key_source")]
    key: Option<String>,

    /// File holding the key matrix as JSON rows
    #[arg(long, group = "key_source")]
    key_file: Option<String>,

    /// Key as N*N letters read row-major, e.g. GYBNQKURP
    #[arg(long, group = "key_source")]
    keyword: Option<String>,

    /// Treat the message as ciphertext and only decrypt it
    #[arg(long)]
    decrypt: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Cipher(#[from] HillCipherError),
    #[error("I/O error on {0}: {1}")]
    Io(String, #[source] io::Error),
}

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let cli = Cli::parse();

    match run(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Resolves the key and message, then writes the cipher and/or recovered text to `out`.
fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), CliError> {
    let key = KeySource::from_args(cli.key, cli.key_file, cli.keyword).load()?;
    log::debug!("key {:?}, dimension {}", key.as_matrix(), key.dimension());

    let message = match cli.message {
        Some(message) => message,
        None => prompt_message()?,
    };

    if cli.decrypt {
        let plain = decrypt(message.trim(), &key)?;
        return write_line(out, "Decrypted Text:", &plain);
    }

    let cipher = encrypt(&message, &key)?;
    write_line(out, "Encrypted Text:", &cipher)?;

    let plain = decrypt(&cipher, &key)?;
    write_line(out, "Decrypted Text:", &plain)
}

fn write_line<W: Write>(out: &mut W, label: &str, text: &str) -> Result<(), CliError> {
    writeln!(out, "{} {}", label.bold(), text).map_err(|e| CliError::Io("stdout".to_string(), e))
}

fn prompt_message() -> Result<String, CliError> {
    print!("Enter your secret message: ");
    io::stdout()
        .flush()
        .map_err(|e| CliError::Io("stdout".to_string(), e))?;

    let mut message = String::new();
    io::stdin()
        .lock()
        .read_line(&mut message)
        .map_err(|e| CliError::Io("stdin".to_string(), e))?;

    Ok(message.trim_end_matches(['\r', '\n']).to_string())
}
