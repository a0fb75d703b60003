use clap::Subcommand;
use std::path::PathBuf;

use crate::console::Console;
use crate::constants::*;
use crate::convert::run_convert;
use crate::error::Error;
use crate::keys::RandomKeySource;
use crate::ops::*;
use crate::types::*;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a batch of key pairs, verify the written file and export public addresses
    Generate {
        #[arg(short, long, help = "Crypto-currency abbreviation (see `currencies`)")]
        crypto: Option<CurrencyProfile>,
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..=KEY_COUNT_MAX as u64), help = "Number of key pairs to generate")]
        count: Option<u64>,
        #[arg(short, long, help = "Base name for the output files, without extension")]
        output: Option<String>,
        #[arg(short, long, default_value = ".", help = "Directory to write the files into")]
        dir: PathBuf,
        #[arg(short = 'y', long, help = "Skip the license and risk confirmation")]
        yes: bool,
        #[arg(long, help = "Overwrite existing files without prompting")]
        force: bool,
    },
    /// Re-verify a previously generated full key file
    Verify {
        #[arg(short, long, help = "Path to the full key file")]
        file: PathBuf,
        #[arg(short, long, help = "Crypto-currency the file was generated for")]
        crypto: CurrencyProfile,
    },
    /// Derive WIF and address from a hex private key
    Convert {
        #[arg(short, long, help = "Private key in 64-character hex format")]
        key: String,
        #[arg(short, long, default_value = "BTC", help = "Crypto-currency abbreviation")]
        crypto: CurrencyProfile,
    },
    /// List supported crypto-currencies
    Currencies,
}

/// Exit code for a run whose written file failed verification.
pub const EXIT_VERIFICATION_FAILED: u8 = 2;

/// Runs `command` and returns the process exit code.
pub fn execute_command(command: Commands) -> Result<u8, Box<dyn std::error::Error>> {
    match command {
        Commands::Generate { crypto, count, output, dir, yes, force } => {
            let options = GenerateOptions { currency: crypto, count: count.map(|c| c as usize), name: output, dir, assume_yes: yes, force };
            let mut console = Console::stdio();
            let mut source = RandomKeySource::new();
            match generate_files(&mut console, &mut source, options)? {
                RunOutcome::VerificationFailed { .. } => Ok(EXIT_VERIFICATION_FAILED),
                RunOutcome::Completed { .. } | RunOutcome::Aborted => Ok(0),
            }
        }
        Commands::Verify { file, crypto } => match verify_file(&file, crypto) {
            Ok(report) => {
                println!("{}: {} addresses verified for {}.", file.display(), report.rows, crypto);
                Ok(0)
            }
            Err(Error::VerificationMismatch { index }) => {
                println!("{}: verification of address number {} failed!", file.display(), index);
                Ok(EXIT_VERIFICATION_FAILED)
            }
            Err(e) => Err(e.into()),
        },
        Commands::Convert { key, crypto } => {
            run_convert(&key, crypto)?;
            Ok(0)
        }
        Commands::Currencies => {
            println!("Supported crypto-currency types:");
            for (i, profile) in CurrencyProfile::ALL.iter().enumerate() {
                println!(" {}. {} ({})", i, profile.abbreviation(), profile.name());
            }
            Ok(0)
        }
    }
}
