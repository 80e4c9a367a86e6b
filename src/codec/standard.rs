use super::{Base58Decoder, Digest256, HexDecoder};
use crate::error::{Error, Result};
use crate::keccak256_digest;

/// Hex backend over the `hex` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexCodec;

impl HexDecoder for HexCodec {
    fn decode_hex(&self, input: &str) -> Result<Vec<u8>> {
        hex::decode(input).map_err(|e| Error::InvalidHex(e.to_string()))
    }
}

/// Base58 backend over the `bs58` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bs58Codec;

impl Base58Decoder for Bs58Codec {
    fn decode_base58(&self, input: &str) -> Result<Vec<u8>> {
        bs58::decode(input)
            .into_vec()
            .map_err(|e| Error::InvalidBase58(e.to_string()))
    }
}

/// Legacy Keccak-256 hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl Digest256 for Keccak256Hasher {
    fn digest256(&self, data: &[u8]) -> [u8; 32] {
        keccak256_digest(data)
    }
}
