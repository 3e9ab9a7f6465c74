//! EBML variable-length integers.
//!
//! The first byte's run of leading zero bits determines the total encoded
//! length: `0b1xxx_xxxx` is 1 byte, `0b01xx_xxxx` is 2 bytes, down to
//! `0b0000_0001` for 8 bytes. Element IDs keep the marker bit as part of the
//! value; sizes and plain vints strip it.

use crate::elements::ElementId;
use crate::error::{Error, Result};

/// Longest supported encoding, in bytes.
pub const MAX_LEN: usize = 8;

/// Total encoded length implied by the first byte, or `None` for `0x00`
/// (which would require a length beyond 8 bytes).
pub fn len_from_marker(first: u8) -> Option<usize> {
    if first == 0 {
        None
    } else {
        Some(first.leading_zeros() as usize + 1)
    }
}

/// The all-data-bits-one value that a size vint of length `len` reserves for
/// "unknown size".
pub fn unknown_size_sentinel(len: usize) -> u64 {
    (1u64 << (7 * len)) - 1
}

/// Minimal encoded length for a size/plain vint value. The sentinel value of
/// each length is reserved, so e.g. 127 needs two bytes.
pub fn min_len(value: u64) -> usize {
    for len in 1..MAX_LEN {
        if value < unknown_size_sentinel(len) {
            return len;
        }
    }
    MAX_LEN
}

/// Decode a marker-stripped vint from a byte slice, returning the value and
/// the number of bytes consumed. Used where vints are embedded in an already
/// loaded payload (lacing headers).
pub fn parse_vint(buf: &[u8], at: usize) -> Result<(u64, usize)> {
    let first = *buf
        .get(at)
        .ok_or(Error::MalformedVarInt { offset: at as u64 })?;
    let len = len_from_marker(first).ok_or(Error::MalformedVarInt { offset: at as u64 })?;
    if at + len > buf.len() {
        return Err(Error::MalformedVarInt { offset: at as u64 });
    }
    let mut value = u64::from(first) & (0xff >> len);
    for &b in &buf[at + 1..at + len] {
        value = value << 8 | u64::from(b);
    }
    Ok((value, len))
}

/// Encode an element ID. The value already contains its marker bit, so the
/// length is implied; a value whose top bit is not a valid marker position is
/// rejected.
pub fn encode_id(id: ElementId) -> Result<Vec<u8>> {
    let bits = 64 - id.0.leading_zeros() as usize;
    if bits == 0 || (bits - 1) % 7 != 0 || (bits - 1) / 7 + 1 > MAX_LEN {
        return Err(Error::MalformedVarInt { offset: 0 });
    }
    let len = (bits - 1) / 7 + 1;
    Ok(be_bytes(id.0, len))
}

/// Encode a size (or any marker-stripped) vint, using the minimal length
/// unless `forced_len` asks for a wider one. The sentinel value of the chosen
/// length is rejected, since it would decode as "unknown size".
pub fn encode_size(value: u64, forced_len: Option<usize>) -> Result<Vec<u8>> {
    let len = forced_len.unwrap_or_else(|| min_len(value));
    if !(1..=MAX_LEN).contains(&len) || value >= unknown_size_sentinel(len) {
        return Err(Error::MalformedVarInt { offset: 0 });
    }
    Ok(be_bytes(value | 1u64 << (7 * len), len))
}

/// Encode the "unknown size" sentinel at the given length.
pub fn encode_unknown_size(len: usize) -> Vec<u8> {
    debug_assert!((1..=MAX_LEN).contains(&len));
    be_bytes(unknown_size_sentinel(len) | 1u64 << (7 * len), len)
}

fn be_bytes(value: u64, len: usize) -> Vec<u8> {
    (0..len).rev().map(|i| (value >> (8 * i)) as u8).collect()
}
