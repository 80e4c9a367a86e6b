//! Mixed-case checksum over a 40-character hex address body.
//!
//! The digest is taken over the ASCII bytes of the lowercased body. Character
//! `i` is matched against nibble `i` of the digest: a letter must be uppercase
//! when its nibble is >= 8 and lowercase otherwise. Digits carry no case and
//! are never checked.

use super::ADDRESS_HEX_LEN;
use crate::codec::Digest256;
use crate::error::{Error, Result};

/// Nibble `index` of the digest: high half of `digest[index / 2]` for even
/// indices, low half for odd ones.
pub fn nibble_at(digest: &[u8; 32], index: usize) -> u8 {
    let byte = digest[index / 2];
    if index % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0f
    }
}

/// True when the body contains both an uppercase and a lowercase hex letter.
pub fn has_mixed_case(body: &str) -> bool {
    let mut has_upper = false;
    let mut has_lower = false;
    for c in body.bytes() {
        match c {
            b'A'..=b'F' => has_upper = true,
            b'a'..=b'f' => has_lower = true,
            _ => {}
        }
    }
    has_upper && has_lower
}

/// Check every letter of `body` against the digest of its lowercase form.
///
/// Fails on the first letter whose case disagrees with its nibble. There is
/// no threshold: one wrong letter invalidates the whole body.
pub fn verify_checksum<H: Digest256>(body: &str, hasher: &H) -> Result<()> {
    ensure_body_len(body)?;
    let digest = hasher.digest256(body.to_ascii_lowercase().as_bytes());

    for (i, c) in body.bytes().enumerate() {
        let wants_upper = nibble_at(&digest, i) >= 8;
        match c {
            b'a'..=b'f' if wants_upper => return Err(Error::ChecksumMismatch { position: i }),
            b'A'..=b'F' if !wants_upper => return Err(Error::ChecksumMismatch { position: i }),
            _ => {}
        }
    }
    Ok(())
}

/// Canonical checksummed casing of `body` (no prefix).
pub fn to_checksum<H: Digest256>(body: &str, hasher: &H) -> Result<String> {
    ensure_body_len(body)?;
    let lower = body.to_ascii_lowercase();
    let digest = hasher.digest256(lower.as_bytes());

    Ok(lower
        .char_indices()
        .map(|(i, c)| {
            if c.is_ascii_alphabetic() && nibble_at(&digest, i) >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect())
}

fn ensure_body_len(body: &str) -> Result<()> {
    if body.len() != ADDRESS_HEX_LEN {
        return Err(Error::InvalidLength {
            expected: ADDRESS_HEX_LEN,
            actual: body.len(),
        });
    }
    Ok(())
}
