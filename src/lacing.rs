//! Splitting a laced block payload into its frames.
//!
//! A laced payload starts with one byte holding `frame count - 1`, then a
//! lacing header describing all frame sizes but the last, which is deduced
//! from the payload remainder.

use crate::block::Lacing;
use crate::error::{Error, Result};
use crate::vint;

/// One frame inside a laced block payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LacedFrame {
    /// Offset from the start of the block payload.
    pub position: usize,
    pub length: usize,
}

/// EBML lacing stores size deltas range-shifted by `2^(7L-1) - 1`.
fn range_shift(difference: u64, encoded_len: usize) -> Result<i64> {
    if !(1..=vint::MAX_LEN).contains(&encoded_len) {
        return Err(Error::InvalidLacing("delta vint too long"));
    }
    let offset = (1i64 << (7 * encoded_len - 1)) - 1;
    Ok(difference as i64 - offset)
}

/// Split `payload` (the complete block payload, lacing header included) into
/// frames according to the block's lacing mode.
pub fn split_frames(payload: &[u8], lacing: Lacing) -> Result<Vec<LacedFrame>> {
    if lacing == Lacing::None {
        return Ok(vec![LacedFrame {
            position: 0,
            length: payload.len(),
        }]);
    }
    if payload.is_empty() {
        return Err(Error::InvalidLacing("empty laced payload"));
    }
    let count = payload[0] as usize + 1;

    match lacing {
        Lacing::None => unreachable!(),
        Lacing::FixedSize => {
            let body = payload.len() - 1;
            if body % count != 0 {
                return Err(Error::InvalidLacing(
                    "fixed-size payload not divisible by frame count",
                ));
            }
            let each = body / count;
            Ok((0..count)
                .map(|i| LacedFrame {
                    position: 1 + each * i,
                    length: each,
                })
                .collect())
        }
        Lacing::Xiph => {
            let mut sizes = Vec::with_capacity(count);
            let mut at = 1usize;
            for _ in 0..count - 1 {
                let mut size = 0usize;
                loop {
                    let b = *payload
                        .get(at)
                        .ok_or(Error::InvalidLacing("xiph header overruns payload"))?;
                    at += 1;
                    size += b as usize;
                    if b != 255 {
                        break;
                    }
                }
                sizes.push(size);
            }
            finish(payload.len(), at, sizes)
        }
        Lacing::Ebml => {
            let mut sizes = Vec::with_capacity(count);
            let mut at = 1usize;
            if count > 1 {
                let (first, consumed) = vint::parse_vint(payload, at)
                    .map_err(|_| Error::InvalidLacing("ebml header overruns payload"))?;
                at += consumed;
                let mut prev = first as i64;
                sizes.push(prev as usize);
                for _ in 1..count - 1 {
                    let (diff, consumed) = vint::parse_vint(payload, at)
                        .map_err(|_| Error::InvalidLacing("ebml header overruns payload"))?;
                    at += consumed;
                    prev += range_shift(diff, consumed)?;
                    if prev < 0 {
                        return Err(Error::InvalidLacing("negative frame size"));
                    }
                    sizes.push(prev as usize);
                }
            }
            finish(payload.len(), at, sizes)
        }
    }
}

/// Lay the sized frames out after the lacing header and deduce the last one
/// from whatever remains.
fn finish(payload_len: usize, header_len: usize, sizes: Vec<usize>) -> Result<Vec<LacedFrame>> {
    let declared: usize = sizes.iter().sum();
    let last = payload_len
        .checked_sub(header_len + declared)
        .ok_or(Error::InvalidLacing("frame sizes exceed payload"))?;

    let mut frames = Vec::with_capacity(sizes.len() + 1);
    let mut at = header_len;
    for size in sizes {
        frames.push(LacedFrame {
            position: at,
            length: size,
        });
        at += size;
    }
    frames.push(LacedFrame {
        position: at,
        length: last,
    });
    Ok(frames)
}
