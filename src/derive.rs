use bitcoin::{base58, hashes::Hash};
use zeroize::Zeroizing;

use crate::constants::*;
use crate::types::*;

/// WIF for the compressed form of `key` under `params`.
pub fn derive_wif(key: &KeyPair, params: &NetworkParams) -> Zeroizing<String> {
    let secret = key.secret_bytes();
    let mut payload = Zeroizing::new(Vec::with_capacity(SECRET_KEY_SIZE + 2));
    payload.push(params.secret_key_prefix);
    payload.extend_from_slice(&*secret);
    payload.push(COMPRESSED_FLAG);
    Zeroizing::new(base58::encode_check(&payload))
}

/// Legacy P2PKH address of the compressed public key.
pub fn derive_address(key: &KeyPair, params: &NetworkParams) -> String {
    let hash = key.public_key().pubkey_hash();
    let mut payload = Vec::with_capacity(21);
    payload.push(params.pubkey_hash_prefix);
    payload.extend_from_slice(hash.as_byte_array());
    base58::encode_check(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::secp256k1::{Secp256k1, SecretKey};
    use bitcoin::{Address, Network, NetworkKind, PrivateKey};
    use test_case::test_case;

    fn key_from_byte(last: u8) -> (SecretKey, KeyPair) {
        let mut bytes = [0u8; 32];
        bytes[31] = last;
        let secret = SecretKey::from_slice(&bytes).unwrap();
        (secret, KeyPair::from_secret_key(&Secp256k1::new(), secret))
    }

    #[test]
    fn test_known_bitcoin_vector() {
        let (_, key) = key_from_byte(1);
        let params = CurrencyProfile::Btc.network_params();
        assert_eq!(derive_wif(&key, &params).as_str(), "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn");
        assert_eq!(derive_address(&key, &params), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test_case(CurrencyProfile::Btc, Network::Bitcoin, NetworkKind::Main; "mainnet")]
    #[test_case(CurrencyProfile::BtcTestnet, Network::Testnet, NetworkKind::Test; "testnet")]
    fn test_matches_bitcoin_crate(profile: CurrencyProfile, network: Network, kind: NetworkKind) {
        let params = profile.network_params();
        for last in [1u8, 2, 42, 255] {
            let (secret, key) = key_from_byte(last);
            let expected_wif = PrivateKey::new(secret, kind).to_wif();
            let expected_address = Address::p2pkh(key.public_key(), network).to_string();
            assert_eq!(derive_wif(&key, &params).as_str(), expected_wif);
            assert_eq!(derive_address(&key, &params), expected_address);
        }
    }

    #[test_case(CurrencyProfile::Btc, &['1'], &['K', 'L']; "btc")]
    #[test_case(CurrencyProfile::BtcTestnet, &['m', 'n'], &['c']; "btc_testnet")]
    #[test_case(CurrencyProfile::Ltc, &['L'], &['T']; "ltc")]
    #[test_case(CurrencyProfile::Doge, &['D'], &['Q']; "doge")]
    fn test_profile_prefixes(profile: CurrencyProfile, address_starts: &[char], wif_starts: &[char]) {
        let params = profile.network_params();
        for last in [3u8, 99, 200] {
            let (_, key) = key_from_byte(last);
            let address = derive_address(&key, &params);
            let wif = derive_wif(&key, &params);
            assert!(address_starts.iter().any(|c| address.starts_with(*c)), "{} address {}", profile, address);
            assert!(wif_starts.iter().any(|c| wif.starts_with(*c)), "{} wif prefix", profile);
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let (_, a) = key_from_byte(17);
        let (_, b) = key_from_byte(17);
        let params = CurrencyProfile::Ltc.network_params();
        assert_eq!(derive_address(&a, &params), derive_address(&b, &params));
        assert_eq!(derive_wif(&a, &params), derive_wif(&b, &params));
    }
}
