pub mod codec;
pub mod address;
pub mod error;
pub mod logger;
pub mod config;

pub use address::{
    is_valid_base58_key, is_valid_hex_address, to_checksum_address, Base58KeyValidator,
    HexAddressValidator,
};
pub use error::{Error, Result};

use sha3::{Digest, Keccak256};

/// Calculate legacy Keccak-256 digest (pre-standard padding, not SHA3-256)
pub fn keccak256_digest(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
