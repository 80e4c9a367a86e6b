pub mod standard;

pub use standard::{Bs58Codec, HexCodec, Keccak256Hasher};

use crate::error::Result;

/// Hex decoding capability used by the hex address validator.
///
/// Implementations must reject any character outside `0-9a-fA-F` and
/// odd-length input.
pub trait HexDecoder {
    fn decode_hex(&self, input: &str) -> Result<Vec<u8>>;
}

/// Base58 decoding capability (Bitcoin alphabet, no checksum, no version byte).
pub trait Base58Decoder {
    fn decode_base58(&self, input: &str) -> Result<Vec<u8>>;
}

/// Deterministic 32-byte digest over an arbitrary byte sequence.
///
/// The checksum convention depends on the exact digest variant, so swapping
/// Keccak-256 for SHA3-256 here changes which addresses validate.
pub trait Digest256 {
    fn digest256(&self, data: &[u8]) -> [u8; 32];
}
