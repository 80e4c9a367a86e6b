use super::KEY_LENGTH;
use crate::codec::{Base58Decoder, Bs58Codec};
use crate::error::{Error, Result};

/// Validator for base58 strings that must decode to exactly 32 bytes.
#[derive(Debug, Clone)]
pub struct Base58KeyValidator<D = Bs58Codec> {
    decoder: D,
}

impl Base58KeyValidator {
    pub fn new() -> Self {
        Base58KeyValidator { decoder: Bs58Codec }
    }
}

impl Default for Base58KeyValidator {
    fn default() -> Self {
        Base58KeyValidator::new()
    }
}

impl<D: Base58Decoder> Base58KeyValidator<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Base58KeyValidator { decoder }
    }

    /// Decode `input` into a 32-byte key.
    pub fn decode_key(&self, input: &str) -> Result<[u8; KEY_LENGTH]> {
        let bytes = self.decoder.decode_base58(input)?;
        let actual = bytes.len();
        bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: KEY_LENGTH,
            actual,
        })
    }

    pub fn validate(&self, input: &str) -> Result<()> {
        self.decode_key(input).map(|_| ())
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }
}
