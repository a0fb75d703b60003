use bitcoin::secp256k1::{PublicKey, Secp256k1, SecretKey, Signing};
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, str::FromStr};
use zeroize::{Zeroize, Zeroizing};

use crate::constants::*;
use crate::error::Error;

/// Version bytes that distinguish one network's addresses and WIF keys from another's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    pub pubkey_hash_prefix: u8,
    pub secret_key_prefix: u8,
}

/// A supported crypto-currency, selectable by menu index or abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyProfile {
    Btc,
    BtcTestnet,
    Ltc,
    Doge,
}

impl CurrencyProfile {
    /// Menu order. Indices into this array are what the interactive prompt accepts.
    pub const ALL: [CurrencyProfile; 4] = [CurrencyProfile::Btc, CurrencyProfile::BtcTestnet, CurrencyProfile::Ltc, CurrencyProfile::Doge];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            CurrencyProfile::Btc => "BTC",
            CurrencyProfile::BtcTestnet => "BTC_TESTNET",
            CurrencyProfile::Ltc => "LTC",
            CurrencyProfile::Doge => "DOGE",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CurrencyProfile::Btc => "Bitcoin",
            CurrencyProfile::BtcTestnet => "Bitcoin Testnet",
            CurrencyProfile::Ltc => "Litecoin",
            CurrencyProfile::Doge => "Dogecoin",
        }
    }

    pub fn network_params(&self) -> NetworkParams {
        match self {
            CurrencyProfile::Btc => NetworkParams { pubkey_hash_prefix: 0x00, secret_key_prefix: 0x80 },
            CurrencyProfile::BtcTestnet => NetworkParams { pubkey_hash_prefix: 0x6f, secret_key_prefix: 0xef },
            CurrencyProfile::Ltc => NetworkParams { pubkey_hash_prefix: 0x30, secret_key_prefix: 0xb0 },
            CurrencyProfile::Doge => NetworkParams { pubkey_hash_prefix: 0x1e, secret_key_prefix: 0x9e },
        }
    }
}

impl fmt::Display for CurrencyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for CurrencyProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL.iter().copied().find(|profile| profile.abbreviation().eq_ignore_ascii_case(wanted)).ok_or_else(|| Error::UnknownCurrency(wanted.to_string()))
    }
}

/// A secp256k1 secret key together with its public key.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    pub fn from_secret_key<C: Signing>(secp: &Secp256k1<C>, secret: SecretKey) -> Self {
        let public = PublicKey::from_secret_key(secp, &secret);
        Self { secret, public }
    }

    /// Rebuilds a key pair from the 32 raw private-key bytes; the public key is re-derived.
    pub fn from_secret_bytes<C: Signing>(secp: &Secp256k1<C>, bytes: &[u8]) -> Result<Self, bitcoin::secp256k1::Error> {
        let secret = SecretKey::from_slice(bytes)?;
        Ok(Self::from_secret_key(secp, secret))
    }

    pub fn secret_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_SIZE]> {
        Zeroizing::new(self.secret.secret_bytes())
    }

    pub fn secret_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&*self.secret_bytes()))
    }

    /// Compressed public key.
    pub fn public_key(&self) -> bitcoin::PublicKey {
        bitcoin::PublicKey::new(self.public)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair").field("public", &self.public_key().to_string()).finish_non_exhaustive()
    }
}

/// Column layout shared by every record written to a document.
pub trait Record: Serialize {
    const HEADER: &'static [&'static str];
}

/// One full row. Fields are (de)serialized by position, never by header label.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub currency: String,
    pub generated: String,
    pub private_key_hex: String,
    pub private_key_wif: String,
    pub address: String,
}

impl Record for KeyRecord {
    const HEADER: &'static [&'static str] = &FULL_HEADER;
}

impl fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRecord").field("currency", &self.currency).field("generated", &self.generated).field("address", &self.address).finish_non_exhaustive()
    }
}

impl Drop for KeyRecord {
    fn drop(&mut self) {
        self.private_key_hex.zeroize();
        self.private_key_wif.zeroize();
    }
}

/// Positions 0, 1 and 4 of a [`KeyRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicRecord {
    pub currency: String,
    pub generated: String,
    pub address: String,
}

impl Record for PublicRecord {
    const HEADER: &'static [&'static str] = &PUBLIC_HEADER;
}

impl From<&KeyRecord> for PublicRecord {
    fn from(record: &KeyRecord) -> Self {
        Self { currency: record.currency.clone(), generated: record.generated.clone(), address: record.address.clone() }
    }
}

/// Header plus rows, in generation order. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<R> {
    rows: Vec<R>,
}

impl<R: Record> Document<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn header(&self) -> &'static [&'static str] {
        R::HEADER
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    pub rows: usize,
}

/// How a pipeline run ended. Fatal faults are reported through `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { full: PathBuf, public: PathBuf },
    Aborted,
    VerificationFailed { index: usize, moved_to: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_indexed_in_menu_order() {
        for (i, profile) in CurrencyProfile::ALL.iter().enumerate() {
            assert_eq!(CurrencyProfile::from_index(i), Some(*profile));
        }
        assert_eq!(CurrencyProfile::from_index(CurrencyProfile::ALL.len()), None);
    }

    #[test]
    fn test_profile_parses_abbreviation_case_insensitively() {
        assert_eq!("btc".parse::<CurrencyProfile>().unwrap(), CurrencyProfile::Btc);
        assert_eq!(" DOGE ".parse::<CurrencyProfile>().unwrap(), CurrencyProfile::Doge);
        assert_eq!("btc_testnet".parse::<CurrencyProfile>().unwrap(), CurrencyProfile::BtcTestnet);
        let err = "XMR".parse::<CurrencyProfile>().unwrap_err();
        assert!(err.to_string().contains("XMR"));
    }

    #[test]
    fn test_profiles_have_distinct_network_params() {
        let params: Vec<NetworkParams> = CurrencyProfile::ALL.iter().map(|p| p.network_params()).collect();
        for (i, a) in params.iter().enumerate() {
            for b in &params[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_keypair_rebuilds_from_secret_bytes() {
        let secp = Secp256k1::new();
        let secret = SecretKey::from_slice(&[7u8; 32]).unwrap();
        let original = KeyPair::from_secret_key(&secp, secret);
        let rebuilt = KeyPair::from_secret_bytes(&secp, &*original.secret_bytes()).unwrap();
        assert_eq!(original, rebuilt);
        assert!(rebuilt.public_key().compressed);
    }

    #[test]
    fn test_keypair_rejects_bad_scalars() {
        let secp = Secp256k1::new();
        assert!(KeyPair::from_secret_bytes(&secp, &[0u8; 32]).is_err());
        assert!(KeyPair::from_secret_bytes(&secp, &[1u8; 31]).is_err());
    }

    #[test]
    fn test_debug_output_hides_private_material() {
        let record = KeyRecord { currency: "BTC".into(), generated: "now".into(), private_key_hex: "deadbeef".into(), private_key_wif: "Kxyz".into(), address: "1abc".into() };
        let shown = format!("{:?}", record);
        assert!(!shown.contains("deadbeef"));
        assert!(!shown.contains("Kxyz"));
        assert!(shown.contains("1abc"));
    }

    #[test]
    fn test_public_record_keeps_positions_zero_one_four() {
        let record = KeyRecord { currency: "LTC".into(), generated: "then".into(), private_key_hex: "00".into(), private_key_wif: "T".into(), address: "L1".into() };
        let public = PublicRecord::from(&record);
        assert_eq!(public, PublicRecord { currency: "LTC".into(), generated: "then".into(), address: "L1".into() });
    }
}
