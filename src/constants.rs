pub const CSV_EXTENSION: &str = ".csv";
pub const PUBLIC_SUFFIX: &str = "-public_addresses_only";
pub const FAILED_SUFFIX: &str = "-failed_verification";

pub const HEADER_CURRENCY: &str = "Crypto-currency Type";
pub const HEADER_DATE_GENERATED: &str = "Date Generated";
pub const HEADER_PRIVATE_KEY_HEX: &str = "Private Key (Hex)";
pub const HEADER_PRIVATE_KEY_WIF: &str = "Private Key (WIF)";
pub const HEADER_ADDRESS: &str = "Address";

pub const FULL_HEADER: [&str; 5] = [HEADER_CURRENCY, HEADER_DATE_GENERATED, HEADER_PRIVATE_KEY_HEX, HEADER_PRIVATE_KEY_WIF, HEADER_ADDRESS];
pub const PUBLIC_HEADER: [&str; 3] = [HEADER_CURRENCY, HEADER_DATE_GENERATED, HEADER_ADDRESS];

pub const FULL_FIELD_COUNT: usize = FULL_HEADER.len();
pub const PUBLIC_FIELD_COUNT: usize = PUBLIC_HEADER.len();

// long date + long time, e.g. "October 19, 2026 4:48:00 PM +00:00"
pub const TIMESTAMP_FORMAT: &str = "%B %-d, %Y %-I:%M:%S %p %Z";

pub const KEY_COUNT_MAX: usize = 100_000;
pub const SECRET_KEY_SIZE: usize = 32;
pub const COMPRESSED_FLAG: u8 = 0x01;

pub const FILE_MODE: u32 = 0o600;
