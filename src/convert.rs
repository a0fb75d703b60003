use bitcoin::secp256k1::Secp256k1;

use crate::constants::*;
use crate::derive::*;
use crate::types::*;

/// Derives WIF and address for a single hex private key under `profile`.
pub fn convert_key(hex_key: &str, profile: CurrencyProfile) -> Result<(String, String), Box<dyn std::error::Error>> {
    let key_bytes = zeroize::Zeroizing::new(hex::decode(hex_key.trim().trim_start_matches("0x")).map_err(|_| "Invalid hex key format")?);
    if key_bytes.len() != SECRET_KEY_SIZE {
        return Err(format!("Private key must be {} bytes", SECRET_KEY_SIZE).into());
    }
    let key = KeyPair::from_secret_bytes(&Secp256k1::signing_only(), &key_bytes)?;
    let params = profile.network_params();
    Ok((derive_wif(&key, &params).to_string(), derive_address(&key, &params)))
}

pub fn run_convert(hex_key: &str, profile: CurrencyProfile) -> Result<(), Box<dyn std::error::Error>> {
    let (wif, address) = convert_key(hex_key, profile)?;
    println!("\n{} Private Key Conversion", profile.name());
    println!("--------------------------------");
    println!("Currency: {}", profile);
    println!("Format: Compressed");
    println!("WIF: {}", wif);
    println!("Address: {}", address);
    println!("--------------------------------\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_known_key() {
        let hex_key = format!("0x{}1", "0".repeat(63));
        let (wif, address) = convert_key(&hex_key, CurrencyProfile::Btc).unwrap();
        assert_eq!(wif, "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn");
        assert_eq!(address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn test_convert_rejects_bad_input() {
        assert!(convert_key("xyz", CurrencyProfile::Btc).is_err());
        assert!(convert_key("abcd", CurrencyProfile::Btc).is_err());
        assert!(convert_key(&"00".repeat(32), CurrencyProfile::Btc).is_err());
    }
}
