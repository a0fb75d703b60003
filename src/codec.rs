//! Conversion between key pairs, fixed-position records and the persisted CSV text.
//!
//! Every field is written double-quoted, fields are comma separated and each row ends
//! with CRLF. Readers locate fields by position; the header row is never used to find
//! data. Verification treats the private key as the only ground truth and re-derives
//! WIF and address from it.

use bitcoin::secp256k1::{Secp256k1, Signing};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use serde::de::DeserializeOwned;
use std::io;
use tracing::debug;
use zeroize::Zeroizing;

use crate::constants::*;
use crate::derive::*;
use crate::error::{Error, Result};
use crate::types::*;

/// Batch timestamp in long date and time form.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Encodes `keys` with one shared generation timestamp.
pub fn encode(keys: &[KeyPair], profile: CurrencyProfile) -> Document<KeyRecord> {
    encode_at(keys, profile, &timestamp_now())
}

pub fn encode_at(keys: &[KeyPair], profile: CurrencyProfile, generated: &str) -> Document<KeyRecord> {
    let params = profile.network_params();
    let rows = keys
        .iter()
        .map(|key| KeyRecord {
            currency: profile.abbreviation().to_string(),
            generated: generated.to_string(),
            private_key_hex: key.secret_hex().to_string(),
            private_key_wif: derive_wif(key, &params).to_string(),
            address: derive_address(key, &params),
        })
        .collect();
    Document::new(rows)
}

/// Drops the private key columns, keeping currency, timestamp and address.
pub fn project(document: &Document<KeyRecord>) -> Document<PublicRecord> {
    Document::new(document.rows().iter().map(PublicRecord::from).collect())
}

pub fn render<R: Record>(document: &Document<R>) -> Result<String> {
    let mut writer = WriterBuilder::new().has_headers(false).quote_style(QuoteStyle::Always).terminator(Terminator::CRLF).from_writer(Vec::new());
    writer.write_record(document.header())?;
    for row in document.rows() {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Parses persisted text into records. The first row is taken as the header and skipped.
pub fn parse<R: Record + DeserializeOwned>(text: &str) -> Result<Document<R>> {
    let mut reader = reader_for(text);
    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        rows.push(read_row(&result?, index)?);
    }
    Ok(Document::new(rows))
}

/// Re-derives WIF and address from each row's private key and compares them with the
/// stored values. Stops at the first row that does not match.
pub fn verify(text: &str, params: &NetworkParams) -> Result<VerifyReport> {
    let secp = Secp256k1::signing_only();
    let mut reader = reader_for(text);
    let mut rows = 0;
    for (index, result) in reader.records().enumerate() {
        let row: KeyRecord = read_row(&result?, index)?;
        verify_row(&secp, &row, index, params)?;
        rows += 1;
    }
    debug!(rows, "all rows verified");
    Ok(VerifyReport { rows })
}

/// Number of records after the header, well-formed or not.
pub fn count_rows(text: &str) -> usize {
    reader_for(text).records().count()
}

fn reader_for(text: &str) -> csv::Reader<&[u8]> {
    // field counts are checked per row so the error can name the row
    ReaderBuilder::new().has_headers(true).flexible(true).from_reader(text.as_bytes())
}

fn read_row<R: Record + DeserializeOwned>(record: &StringRecord, index: usize) -> Result<R> {
    let expected = R::HEADER.len();
    if record.len() != expected {
        return Err(Error::MalformedRow { index, fields: record.len(), expected });
    }
    Ok(record.deserialize(None)?)
}

fn verify_row<C: Signing>(secp: &Secp256k1<C>, row: &KeyRecord, index: usize, params: &NetworkParams) -> Result<()> {
    let secret = decode_private_key(&row.private_key_hex, index)?;
    let key = KeyPair::from_secret_bytes(secp, &secret).map_err(|e| Error::InvalidKey { index, reason: e.to_string() })?;
    let expected_wif = derive_wif(&key, params);
    let expected_address = derive_address(&key, params);
    if expected_wif.as_str() != row.private_key_wif || expected_address != row.address {
        return Err(Error::VerificationMismatch { index });
    }
    Ok(())
}

fn decode_private_key(field: &str, index: usize) -> Result<Zeroizing<Vec<u8>>> {
    if let Some(c) = field.chars().find(|c| c.is_ascii_uppercase()) {
        return Err(Error::InvalidHex { index, reason: format!("unexpected uppercase character '{}'", c) });
    }
    hex::decode(field).map(Zeroizing::new).map_err(|e| Error::InvalidHex { index, reason: e.to_string() })
}
