use super::checksum::{has_mixed_case, to_checksum, verify_checksum};
use super::ADDRESS_HEX_LEN;
use crate::codec::{Digest256, HexCodec, HexDecoder, Keccak256Hasher};
use crate::error::{Error, Result};

const PREFIX: &str = "0x";

/// Validator for 20-byte hex addresses with an optional mixed-case checksum.
///
/// Rules, first failure wins:
/// 1. `0x` or `0X` prefix
/// 2. exactly 40 characters after the prefix
/// 3. every character in `0-9a-fA-F`
/// 4. mixed-case bodies must carry a valid checksum; single-case bodies are
///    accepted as-is
#[derive(Debug, Clone)]
pub struct HexAddressValidator<D = HexCodec, H = Keccak256Hasher> {
    decoder: D,
    hasher: H,
}

impl HexAddressValidator {
    pub fn new() -> Self {
        HexAddressValidator {
            decoder: HexCodec,
            hasher: Keccak256Hasher,
        }
    }
}

impl Default for HexAddressValidator {
    fn default() -> Self {
        HexAddressValidator::new()
    }
}

impl<D: HexDecoder, H: Digest256> HexAddressValidator<D, H> {
    /// Build a validator over custom decoding and hashing backends.
    pub fn with_backends(decoder: D, hasher: H) -> Self {
        HexAddressValidator { decoder, hasher }
    }

    /// Validate `input`, reporting which rule failed.
    pub fn validate(&self, input: &str) -> Result<()> {
        let body = strip_prefix(input)?;

        if body.len() != ADDRESS_HEX_LEN {
            return Err(Error::InvalidLength {
                expected: ADDRESS_HEX_LEN,
                actual: body.len(),
            });
        }

        self.decoder.decode_hex(body)?;

        if has_mixed_case(body) {
            verify_checksum(body, &self.hasher)?;
        }

        Ok(())
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }

    /// Validate `input` and return `0x` followed by its checksummed body.
    pub fn checksummed(&self, input: &str) -> Result<String> {
        self.validate(input)?;
        let body = strip_prefix(input)?;
        Ok(format!("{}{}", PREFIX, to_checksum(body, &self.hasher)?))
    }
}

/// Strip the `0x`/`0X` prefix.
fn strip_prefix(input: &str) -> Result<&str> {
    input
        .strip_prefix(PREFIX)
        .or_else(|| input.strip_prefix("0X"))
        .ok_or(Error::MissingPrefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct AlternatingDigest;

    impl Digest256 for AlternatingDigest {
        fn digest256(&self, _data: &[u8]) -> [u8; 32] {
            [0x0f; 32]
        }
    }

    /// Counts hash invocations so tests can see whether the checksum ran.
    struct CountingDigest {
        calls: Cell<usize>,
    }

    impl Digest256 for CountingDigest {
        fn digest256(&self, data: &[u8]) -> [u8; 32] {
            self.calls.set(self.calls.get() + 1);
            Keccak256Hasher.digest256(data)
        }
    }

    struct RejectingDecoder;

    impl HexDecoder for RejectingDecoder {
        fn decode_hex(&self, _input: &str) -> Result<Vec<u8>> {
            Err(Error::InvalidHex("rejected".to_string()))
        }
    }

    fn counting_validator() -> HexAddressValidator<HexCodec, CountingDigest> {
        HexAddressValidator::with_backends(
            HexCodec,
            CountingDigest {
                calls: Cell::new(0),
            },
        )
    }

    #[test]
    fn test_validate_missing_prefix() {
        let v = HexAddressValidator::new();
        assert_eq!(
            v.validate("DE709F2102306220921060314715629080E2FB77"),
            Err(Error::MissingPrefix)
        );
        assert_eq!(v.validate(""), Err(Error::MissingPrefix));
        assert_eq!(v.validate("x0de709f2102306220921060314715629080e2fb77"), Err(Error::MissingPrefix));
    }

    #[test]
    fn test_validate_wrong_length() {
        let v = HexAddressValidator::new();
        assert_eq!(
            v.validate("0x12345"),
            Err(Error::InvalidLength {
                expected: 40,
                actual: 5
            })
        );
        assert_eq!(
            v.validate("0x"),
            Err(Error::InvalidLength {
                expected: 40,
                actual: 0
            })
        );
    }

    #[test]
    fn test_validate_invalid_character() {
        let v = HexAddressValidator::new();
        let result = v.validate("0x52908400098527886E0F7030069857D2E4169EEG");
        assert!(matches!(result, Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_validate_non_ascii_body_of_right_byte_length() {
        // 'é' is two bytes, so the body is 40 bytes long
        let v = HexAddressValidator::new();
        let input = format!("0x{}é", "a".repeat(38));
        assert!(matches!(v.validate(&input), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_single_case_skips_checksum() {
        let v = counting_validator();
        assert!(v.is_valid("0xde709f2102306220921060314715629080e2fb77"));
        assert!(v.is_valid("0xDE709F2102306220921060314715629080E2FB77"));
        assert!(v.is_valid("0x0000000000000000000000000000000000000000"));
        assert_eq!(v.hasher.calls.get(), 0);
    }

    #[test]
    fn test_mixed_case_runs_checksum() {
        let v = counting_validator();
        assert!(v.is_valid("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert_eq!(v.hasher.calls.get(), 1);
    }

    #[test]
    fn test_checksum_mismatch() {
        let v = HexAddressValidator::new();
        assert!(matches!(
            v.validate("0x27B1fdb04752BbC536007a920d24acb045561C26"),
            Err(Error::ChecksumMismatch { .. })
        ));
        assert!(matches!(
            v.validate("0xABCDabcdABCDabcdABCDabcdABCDabcdABCDabcd"),
            Err(Error::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_prefix_case_does_not_matter() {
        let v = HexAddressValidator::new();
        assert!(v.is_valid("0X5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(v.is_valid("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!v.is_valid("0X5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD"));
    }

    #[test]
    fn test_injected_decoder_is_consulted() {
        let v = HexAddressValidator::with_backends(RejectingDecoder, Keccak256Hasher);
        assert!(!v.is_valid("0xde709f2102306220921060314715629080e2fb77"));
    }

    #[test]
    fn test_injected_digest_drives_checksum() {
        let v = HexAddressValidator::with_backends(HexCodec, AlternatingDigest);
        assert!(v.is_valid("0xaAbBcCdDeEfF0123456789aAbBcCdDeEfF012345"));
        assert!(!v.is_valid("0xAabBcCdDeEfF0123456789aAbBcCdDeEfF012345"));
    }

    #[test]
    fn test_checksummed_output() {
        let v = HexAddressValidator::new();
        assert_eq!(
            v.checksummed("0X5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert!(v.checksummed("0x1234").is_err());
    }
}
