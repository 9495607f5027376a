//! Binary framing for opaque host state chunks.
//!
//! Hosts hand plugins state as featureless byte blobs. This module
//! frames a [`Snapshot`]'s TOML text so a blob can be recognized and
//! rejected safely:
//!
//! ```text
//! [magic u32 LE][payload length u32 LE][TOML payload]
//! ```
//!
//! [`decode`] is tolerant end to end: wrong magic, short input,
//! truncated payloads, non-UTF-8 bytes, and TOML errors all yield
//! `None`. Bytes past the declared payload length are ignored.

use crate::error::StateError;
use crate::snapshot::Snapshot;

/// Magic tag identifying a perilla state blob (`b"PRL1"`, little endian).
pub const STATE_MAGIC: u32 = u32::from_le_bytes(*b"PRL1");

const HEADER_LEN: usize = 8;

/// Frame a snapshot into a state blob.
pub fn encode(snapshot: &Snapshot) -> Result<Vec<u8>, StateError> {
    let payload = snapshot.to_toml()?;
    let mut blob = Vec::with_capacity(HEADER_LEN + payload.len());
    blob.extend_from_slice(&STATE_MAGIC.to_le_bytes());
    blob.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    blob.extend_from_slice(payload.as_bytes());
    Ok(blob)
}

/// Decode a state blob back into a snapshot.
///
/// Returns `None` for anything that is not a well-formed blob carrying
/// valid snapshot TOML. Restoration is never fatal.
pub fn decode(blob: &[u8]) -> Option<Snapshot> {
    let magic = u32::from_le_bytes(blob.get(0..4)?.try_into().ok()?);
    if magic != STATE_MAGIC {
        return None;
    }
    let payload_len = u32::from_le_bytes(blob.get(4..8)?.try_into().ok()?) as usize;
    let payload = blob.get(HEADER_LEN..HEADER_LEN.checked_add(payload_len)?)?;
    let text = std::str::from_utf8(payload).ok()?;
    Snapshot::from_toml(text).ok()
}
