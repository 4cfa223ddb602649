// src/poll/fingerprint.rs

//! Content fingerprinting for change detection.
//!
//! CRC32 is deliberately cheap: the digest only has to answer "did this body
//! change since last time", not resist an adversary. Equal bodies always map
//! to equal fingerprints; distinct bodies may collide, in which case a change
//! goes unreported until the content moves again.

/// CRC32 of the given body bytes.
pub fn fingerprint(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}
