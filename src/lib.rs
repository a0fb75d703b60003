//! # cold-keys
//!
//! Offline batch generator for cryptocurrency key pairs with verified CSV output.
//!
//! A run generates a batch of secp256k1 key pairs for one currency, writes them as a
//! quoted CSV file, reads that file back from disk and re-derives every WIF and address
//! from its private key. Only when every row matches is a second, public-only file
//! written with the addresses that are safe to share.
//!
//! ## Usage
//!
//! This is primarily a command-line application. For CLI usage, see the examples below.
//!
//! ### Commands
//!
//! You can run the project using Cargo or the compiled binary:
//!
//! ```bash
//! # Using cargo
//! cargo run -- <command> [options]
//!
//! # For optimized builds
//! cargo run --release -- <command> [options]
//!
//! # Using the compiled binary
//! ./target/release/cold-keys <command> [options]
//! ```
//!
//! ### Generate Keys
//!
//! Fully interactive (license, currency menu, count and file name are prompted):
//!
//! ```bash
//! cargo run -- generate
//! ```
//!
//! Non-interactive:
//!
//! ```bash
//! cargo run -- generate -y -c BTC -n 10 -o my-keys -d /mnt/usb
//! ```
//!
//! **Flags:**
//! - `-c, --crypto <abbr>` (Optional): `BTC`, `BTC_TESTNET`, `LTC` or `DOGE`
//! - `-n, --count <count>` (Optional): Number of key pairs (range = 1–100000)
//! - `-o, --output <name>` (Optional): Base file name, without extension
//! - `-d, --dir <path>` (Optional): Output directory (default = `.`)
//! - `-y, --yes` (Optional): Skip the license and risk confirmation
//! - `--force` (Optional): Overwrite existing files without prompting
//!
//! Two files are produced:
//!
//! ```text
//! my-keys.csv                           type, date, private key hex, WIF, address
//! my-keys-public_addresses_only.csv     type, date, address
//! ```
//!
//! If any row of `my-keys.csv` fails verification, the file is renamed to
//! `my-keys.csv-failed_verification`, no public file is written and the process exits
//! with code `2`.
//!
//! **Note:** The full file holds unencrypted private keys. Encrypt it before it leaves
//! the offline machine; the tool prints an OpenPGP example after a successful run.
//!
//! ### Verify a File
//!
//! ```bash
//! cargo run -- verify -f my-keys.csv -c BTC
//! ```
//!
//! **Flags:**
//! - `-f, --file <path>` (Required): Full key file to check
//! - `-c, --crypto <abbr>` (Required): Currency the file was generated for
//!
//! ### Convert a Key
//!
//! ```bash
//! cargo run -- convert -k 0000000000000000000000000000000000000000000000000000000000000001
//! ```
//!
//! **Flags:**
//! - `-k, --key <hex>` (Required): 64-character hex private key, `0x` prefix optional
//! - `-c, --crypto <abbr>` (Optional): Currency (default = `BTC`)
//!
//! ### List Currencies
//!
//! ```bash
//! cargo run -- currencies
//! ```
//!
//! ### Logging
//!
//! Diagnostics go to stderr. `-v, --verbose` turns on debug output, and `RUST_LOG`
//! overrides the filter entirely.
//!
//! ## File Format
//!
//! Every field is double-quoted, fields are separated by commas and lines end in CRLF.
//! All rows of a batch share one generation timestamp.
//!
//! ```text
//! "Crypto-currency Type","Date Generated","Private Key (Hex)","Private Key (WIF)","Address"
//! "BTC","October 19, 2026 9:41:07 AM +02:00","0000…0001","KwDiBf89…","1BgGZ9tc…"
//! ```
//!
//! Keys are always compressed: the WIF carries the `0x01` suffix and the address is
//! the P2PKH hash of the 33-byte public key.

pub mod codec;
pub mod commands;
pub mod console;
pub mod constants;
pub mod convert;
pub mod derive;
pub mod error;
pub mod keys;
pub mod ops;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use types::{CurrencyProfile, KeyPair, RunOutcome};
