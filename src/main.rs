use std::process::ExitCode;

use clap::Parser;

use shroud::password::TerminalPasswordReader;
use shroud::pipeline::{decrypt_file, encrypt_file};
use shroud::ShroudError;

#[derive(Parser)]
#[command(
    name = "shroud",
    version,
    about = "Password-based authenticated file encryption",
    long_about = "shroud encrypts a single file under a password using Argon2id \
                  key derivation and AES-256-GCM, producing one self-contained \
                  encrypted file. Decryption with the same password recovers the \
                  exact original bytes, and fails if the password is wrong or \
                  the file was altered."
)]
struct Cli {
    /// Input file path
    #[arg(short = 'i', default_value = "test/test.txt")]
    input: String,

    /// Output file path
    #[arg(short = 'o', default_value = "test/test1.tmp")]
    output: String,

    /// Encrypt the input file
    #[arg(short = 'e')]
    encrypt: bool,

    /// Decrypt the input file
    #[arg(short = 'd')]
    decrypt: bool,

    /// Silence status messages
    #[arg(short = 's')]
    silent: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Exactly one of -e / -d.
    if cli.encrypt == cli.decrypt {
        eprintln!("Must specify -d xor -e for decryption or encryption");
        return ExitCode::from(1);
    }

    if !cli.silent {
        let action = if cli.encrypt { "Encrypting" } else { "Decrypting" };
        println!("{} {} to outfile {}", action, cli.input, cli.output);
    }

    let reader = TerminalPasswordReader;

    if cli.encrypt {
        if let Err(e) = encrypt_file(&cli.input, &cli.output, &reader) {
            eprintln!("Encryption failed: {}", e);
            return ExitCode::from(3);
        }
    } else if cli.decrypt {
        if let Err(e) = decrypt_file(&cli.input, &cli.output, &reader) {
            match e {
                ShroudError::Authentication => eprintln!(
                    "Decryption failed either due to a wrong password or altered \
                     ciphertext/nonce/salt in the encrypted file."
                ),
                other => eprintln!("Decryption failed: {}", other),
            }
            return ExitCode::from(4);
        }
    } else {
        eprintln!("Unknown operation requested");
        return ExitCode::from(2);
    }

    if !cli.silent {
        println!("Operation successful.");
    }

    ExitCode::SUCCESS
}
