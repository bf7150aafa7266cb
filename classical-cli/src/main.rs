#![deny(missing_docs)]
//! A command-line interface for the classical cipher tool.

use clap::{Args, Parser, Subcommand};
use classical_core::key_generator;
use classical_core::metadata::{self, CiphertextMetadata};
use classical_core::settings::{self, Settings};
use classical_core::{CipherKind, CipherRequest, Mode};
use log::{error, info, warn};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt a line of text\nclassical-cli encrypt --cipher vigenere --key LEMONLEMONLEMON --text \"attack at dawn\"\n\n# Encrypt a file, writing the result and a metadata file next to it\nclassical-cli encrypt ./letter.txt --cipher playfair --key MONARCHYMONARCHY --output ./letter.enc\n\n# Decrypt using the metadata file\nclassical-cli decrypt ./letter.enc --key MONARCHYMONARCHY --metadata ./letter.enc.metadata.json\n\n# Generate a key for the Hill cipher\nclassical-cli keygen --cipher hill"
)]
struct Cli {
    /// Path to a JSON settings file. Defaults apply if omitted.
    #[arg(long, global = true, value_name = "SETTINGS_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a classical cipher
    Encrypt(CipherArgs),
    /// Decrypt text with a classical cipher
    Decrypt {
        #[command(flatten)]
        args: CipherArgs,

        /// Path to the ciphertext metadata file. Supplies the cipher and checks the ciphertext hash.
        #[arg(long, value_name = "METADATA_FILE")]
        metadata: Option<PathBuf>,
    },
    /// Generate a random key
    Keygen {
        /// The cipher to generate a key for (vigenere, playfair or hill)
        #[arg(short, long)]
        cipher: Option<CipherKind>,

        /// Number of letters. Defaults to the minimum key length; Hill rounds up to a perfect square.
        #[arg(short, long)]
        length: Option<usize>,
    },
    /// Manage settings files
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
struct CipherArgs {
    /// Path to the input file. If omitted and --text is not given, reads standard input.
    #[arg()]
    input: Option<PathBuf>,

    /// Text to process instead of reading a file
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// The cipher to use (vigenere, playfair or hill)
    #[arg(short, long)]
    cipher: Option<CipherKind>,

    /// The cipher key
    #[arg(short, long, env = "CLASSICAL_CIPHER_KEY", hide_env_values = true)]
    key: String,

    /// Path to the output file. If omitted, the result is printed.
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective settings as JSON
    Show,
    /// Write a settings file with default values
    Init {
        /// Where to create the settings file
        path: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => settings::load_settings(path).unwrap_or_else(|e| {
            error!("Failed to load settings from '{}': {e}", path.display());
            process::exit(1);
        }),
        None => Settings::default(),
    };

    match &cli.command {
        Commands::Encrypt(args) => {
            let kind = args.cipher.unwrap_or(settings.default_cipher);
            let plaintext = read_input(args);
            let ciphertext = run_cipher(&settings, kind, &plaintext, &args.key, Mode::Encrypt);

            match &args.output {
                Some(output) => {
                    write_output(output, &ciphertext);
                    let metadata_path = metadata::sidecar_path(output);
                    if let Err(e) = CiphertextMetadata::new(kind, &ciphertext).save(&metadata_path) {
                        error!("Failed to write metadata file: {e}");
                        process::exit(1);
                    }
                    println!("Decryption metadata saved to '{}'", metadata_path.display());
                }
                None => print_result(&ciphertext),
            }
        }
        Commands::Decrypt { args, metadata } => {
            let ciphertext = read_input(args);

            let recorded_cipher = metadata.as_ref().map(|meta_path| {
                let meta = CiphertextMetadata::load(meta_path).unwrap_or_else(|e| {
                    error!("Failed to read metadata file: {e}");
                    process::exit(1);
                });
                if !meta.verify(&ciphertext) {
                    error!("Ciphertext hash does not match metadata hash. The input may be corrupt or tampered with. Aborting.");
                    process::exit(1);
                }
                meta.cipher
            });

            let kind = match (args.cipher, recorded_cipher) {
                (Some(given), Some(recorded)) => {
                    if given != recorded {
                        warn!("Metadata says '{recorded}' but '{given}' was requested; using '{given}'.");
                    }
                    given
                }
                (Some(given), None) => given,
                (None, Some(recorded)) => recorded,
                (None, None) => settings.default_cipher,
            };

            let plaintext = run_cipher(&settings, kind, &ciphertext, &args.key, Mode::Decrypt);
            match &args.output {
                Some(output) => write_output(output, &plaintext),
                None => print_result(&plaintext),
            }
        }
        Commands::Keygen { cipher, length } => {
            let kind = cipher.unwrap_or(settings.default_cipher);
            let length = length.unwrap_or(settings.min_key_length);
            info!("Generating a {kind} key of at least {length} letters...");
            match key_generator::generate_key(kind, length, &mut rand::rng()) {
                Ok(key) => println!("{key}"),
                Err(e) => {
                    error!("Failed to generate key: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => match serde_json::to_string_pretty(&settings) {
                Ok(settings_str) => println!("{settings_str}"),
                Err(e) => {
                    error!("Failed to serialize settings: {e}");
                    process::exit(1);
                }
            },
            ConfigCommands::Init { path } => {
                if path.exists() {
                    error!(
                        "Settings file '{}' already exists. Remove it first to start over.",
                        path.display()
                    );
                    process::exit(1);
                }
                if let Err(e) = settings::save_settings(path, &Settings::default()) {
                    error!("Failed to write settings file: {e}");
                    process::exit(1);
                }
                println!("Settings written to '{}'", path.display());
            }
        },
    }
}

/// Reads the text to process from `--text`, the input file or standard input.
fn read_input(args: &CipherArgs) -> String {
    if let Some(text) = &args.text {
        return text.clone();
    }
    let result = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input file '{}': {e}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| buffer)
                .map_err(|e| format!("Failed to read standard input: {e}"))
        }
    };
    result.unwrap_or_else(|message| {
        error!("{message}");
        process::exit(1);
    })
}

/// Applies the key policy, then runs the cipher, exiting on any error.
fn run_cipher(settings: &Settings, kind: CipherKind, text: &str, key: &str, mode: Mode) -> String {
    if let Err(e) = settings.check_key(key) {
        error!("{e}");
        process::exit(1);
    }
    info!(
        "Running {kind} ({mode:?}) on {} characters.",
        text.chars().count()
    );
    classical_core::process(kind, &CipherRequest::new(text, key, mode)).unwrap_or_else(|e| {
        error!("{kind} failed: {e}");
        process::exit(1);
    })
}

fn write_output(path: &Path, contents: &str) {
    if let Err(e) = fs::write(path, contents) {
        error!("Failed to write output file '{}': {e}", path.display());
        process::exit(1);
    }
    info!("Result written to '{}'.", path.display());
}

fn print_result(result: &str) {
    if result.ends_with('\n') {
        print!("{result}");
    } else {
        println!("{result}");
    }
}
