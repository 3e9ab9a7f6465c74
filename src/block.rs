use crate::error::{Error, Result};
use crate::reader::ElementReader;
use std::io::{Read, Seek};

/// Block header flag bits.
///
/// See <https://www.matroska.org/technical/basics.html#block-structure>.
pub mod flags {
    /// The block contains only key frames (SimpleBlock only).
    pub const KEYFRAME: u8 = 0x80;
    /// The codec should decode but not display this frame.
    pub const INVISIBLE: u8 = 0x08;
    /// Bitmask selecting the lacing mode.
    pub const LACING_MASK: u8 = 0x06;
    /// The frame may be dropped under pressure (SimpleBlock only).
    pub const DISCARDABLE: u8 = 0x01;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lacing {
    None,
    Xiph,
    FixedSize,
    Ebml,
}

/// A SimpleBlock or Block, parsed down to its payload byte range.
///
/// The payload itself stays in the file; only the 4-5 byte block header is
/// consumed. The track number is stored narrow — the format allows up to 8
/// bytes but real files use tiny values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Absolute file offset of the payload (lacing header included).
    pub payload_start: u64,
    pub payload_len: u64,
    pub track_number: u64,
    /// Timestamp relative to the enclosing cluster, in timestamp ticks.
    pub timestamp: i16,
    pub flags: u8,
}

impl Block {
    /// Parse the block header and skip the payload. `parent` must be
    /// positioned right after the SimpleBlock/Block element ID.
    pub fn read<R: Read + Seek>(parent: &mut ElementReader<'_, R>) -> Result<Block> {
        parent.read_master(|c| {
            let end = c.end().ok_or(Error::UnexpectedUnknownSize { offset: c.start() })?;
            let track_number = c.read_vint()?;
            let mut header = [0u8; 3];
            c.read_raw(&mut header)?;
            let timestamp = i16::from_be_bytes([header[0], header[1]]);
            let flags = header[2];
            let payload_start = c.position()?;
            Ok(Block {
                payload_start,
                payload_len: end - payload_start,
                track_number,
                timestamp,
                flags,
            })
        })
    }

    pub fn is_keyframe(&self) -> bool {
        self.flags & flags::KEYFRAME != 0
    }

    pub fn is_invisible(&self) -> bool {
        self.flags & flags::INVISIBLE != 0
    }

    pub fn is_discardable(&self) -> bool {
        self.flags & flags::DISCARDABLE != 0
    }

    pub fn lacing(&self) -> Lacing {
        match self.flags & flags::LACING_MASK {
            0x00 => Lacing::None,
            0x02 => Lacing::Xiph,
            0x04 => Lacing::FixedSize,
            _ => Lacing::Ebml,
        }
    }

    /// Load the payload bytes. Callers that feed a decoder incrementally can
    /// read the range themselves instead.
    pub fn read_payload<R: Read + Seek>(&self, stream: &mut R) -> Result<Vec<u8>> {
        Ok(crate::util::read_slice(
            stream,
            self.payload_start,
            self.payload_len,
        )?)
    }
}
