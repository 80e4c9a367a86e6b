pub mod checksum;
pub mod hex_address;
pub mod base58_key;

pub use base58_key::Base58KeyValidator;
pub use hex_address::HexAddressValidator;

use crate::error::Result;

/// Hex characters in an address body (20 bytes).
pub const ADDRESS_HEX_LEN: usize = 40;

/// Decoded length of a base58 public key.
pub const KEY_LENGTH: usize = 32;

/// Validate a `0x`-prefixed hex address, honouring a mixed-case checksum when present.
pub fn is_valid_hex_address(input: &str) -> bool {
    HexAddressValidator::new().is_valid(input)
}

/// Validate that a base58 string decodes to a 32-byte key.
pub fn is_valid_base58_key(input: &str) -> bool {
    Base58KeyValidator::new().is_valid(input)
}

/// Validate a hex address and return it in checksummed form.
pub fn to_checksum_address(input: &str) -> Result<String> {
    HexAddressValidator::new().checksummed(input)
}
