//! The bounded cursor at the heart of the decoder.
//!
//! An [`ElementReader`] restricts all reads to a declared byte range of the
//! underlying stream. Composite decoding nests readers: a child reader is
//! created from its parent's cursor (`begin_child` / `read_master`) and can
//! never escape the parent's range. Because a child mutably borrows its
//! parent, two sibling cursors can never be live at the same time.

use crate::elements::{ElementId, Guid};
use crate::error::{Error, Result};
use crate::vint;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

pub struct ElementReader<'s, R: Read + Seek> {
    stream: &'s mut R,
    start: u64,
    end: Option<u64>,
}

impl<'s, R: Read + Seek> ElementReader<'s, R> {
    /// A cursor over the entire stream, positioned at its beginning.
    pub fn whole(stream: &'s mut R) -> Result<Self> {
        let len = stream.seek(SeekFrom::End(0))?;
        stream.seek(SeekFrom::Start(0))?;
        Ok(ElementReader {
            stream,
            start: 0,
            end: Some(len),
        })
    }

    /// A cursor over an explicit byte range; `end = None` means "until the
    /// physical end of the stream". Seeks to `start`.
    pub fn over(stream: &'s mut R, start: u64, end: Option<u64>) -> Result<Self> {
        stream.seek(SeekFrom::Start(start))?;
        Ok(ElementReader { stream, start, end })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> Option<u64> {
        self.end
    }

    pub fn position(&mut self) -> Result<u64> {
        Ok(self.stream.stream_position()?)
    }

    /// Direct access to the underlying stream. Reads through it bypass the
    /// boundary checks; composite decoders have no reason to touch it.
    pub fn stream(&mut self) -> &mut R {
        self.stream
    }

    /// True once the cursor has consumed its whole range. For an unbounded
    /// cursor this is the physical end of the stream.
    pub fn at_end(&mut self) -> Result<bool> {
        let pos = self.position()?;
        match self.end {
            Some(end) => Ok(pos >= end),
            None => {
                let len = self.stream.seek(SeekFrom::End(0))?;
                self.stream.seek(SeekFrom::Start(pos))?;
                Ok(pos >= len)
            }
        }
    }

    fn ensure(&mut self, needed: u64) -> Result<()> {
        if let Some(end) = self.end {
            let pos = self.position()?;
            let remaining = end.saturating_sub(pos);
            if needed > remaining {
                return Err(Error::TruncatedContainer {
                    offset: pos,
                    needed,
                    remaining,
                });
            }
        }
        Ok(())
    }

    /// Read exactly `buf.len()` bytes, honoring the cursor boundary.
    pub fn read_raw(&mut self, buf: &mut [u8]) -> Result<()> {
        self.ensure(buf.len() as u64)?;
        self.stream.read_exact(buf)?;
        Ok(())
    }

    fn take(&mut self, len: u64) -> Result<Vec<u8>> {
        self.ensure(len)?;
        let mut buf = vec![0u8; len as usize];
        self.stream.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Decode the next element ID. The length-marker bit stays part of the
    /// value. Consumes the ID only, not the size field after it.
    pub fn read_id(&mut self) -> Result<ElementId> {
        let at = self.position()?;
        self.ensure(1)?;
        let first = self.stream.read_u8()?;
        let len = vint::len_from_marker(first).ok_or(Error::MalformedVarInt { offset: at })?;
        self.ensure(len as u64 - 1)?;
        let mut value = u64::from(first);
        for _ in 1..len {
            value = value << 8 | u64::from(self.stream.read_u8()?);
        }
        Ok(ElementId(value))
    }

    fn read_vint_parts(&mut self) -> Result<(u64, usize)> {
        let at = self.position()?;
        self.ensure(1)?;
        let first = self.stream.read_u8()?;
        let len = vint::len_from_marker(first).ok_or(Error::MalformedVarInt { offset: at })?;
        self.ensure(len as u64 - 1)?;
        let mut value = u64::from(first) & (0xff >> len);
        for _ in 1..len {
            value = value << 8 | u64::from(self.stream.read_u8()?);
        }
        Ok((value, len))
    }

    /// Decode a size vint. All data bits set means "unknown size" and decodes
    /// to `None`.
    pub fn read_size(&mut self) -> Result<Option<u64>> {
        let (value, len) = self.read_vint_parts()?;
        if value == vint::unknown_size_sentinel(len) {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }

    /// Decode a plain marker-stripped vint with no unknown-size semantics
    /// (block track numbers).
    pub fn read_vint(&mut self) -> Result<u64> {
        Ok(self.read_vint_parts()?.0)
    }

    /// Consume the size field of the current element and return a cursor over
    /// its payload. An unknown-size child inherits this cursor's own end. A
    /// child whose declared size overruns this cursor fails.
    pub fn begin_child(&mut self) -> Result<ElementReader<'_, R>> {
        let size = self.read_size()?;
        let start = self.position()?;
        let end = match size {
            Some(n) => {
                self.ensure(n)?;
                Some(start + n)
            }
            None => self.end,
        };
        Ok(ElementReader {
            stream: &mut *self.stream,
            start,
            end,
        })
    }

    /// Decode a master element's payload with `f`, then reposition this
    /// cursor exactly at the child's end — whatever `f` consumed.
    pub fn read_master<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ElementReader<'_, R>) -> Result<T>,
    {
        let mut child = self.begin_child()?;
        let end = child.end;
        let value = f(&mut child)?;
        if let Some(end) = end {
            self.stream.seek(SeekFrom::Start(end))?;
        }
        Ok(value)
    }

    /// Advance past the current element without interpreting it: size field,
    /// then a relative seek of that many bytes. An unknown-size element skips
    /// to this cursor's own end.
    pub fn skip_element(&mut self) -> Result<()> {
        match self.read_size()? {
            Some(n) => {
                self.ensure(n)?;
                let pos = self.position()?;
                self.stream.seek(SeekFrom::Start(pos + n))?;
            }
            None => match self.end {
                Some(end) => {
                    self.stream.seek(SeekFrom::Start(end))?;
                }
                None => {
                    self.stream.seek(SeekFrom::End(0))?;
                }
            },
        }
        Ok(())
    }

    fn leaf_width(&mut self) -> Result<u64> {
        let at = self.position()?;
        self.read_size()?
            .ok_or(Error::UnexpectedUnknownSize { offset: at })
    }

    // Leaf decoders. Each consumes the element's own size field first, the
    // way every non-master payload is laid out. The `decode_*_width` halves
    // are also used by the generic tree walk, which learns the width from
    // `begin_child` instead.

    pub fn read_uint(&mut self) -> Result<u64> {
        let width = self.leaf_width()?;
        self.decode_uint_width(width)
    }

    pub fn decode_uint_width(&mut self, width: u64) -> Result<u64> {
        if width == 0 {
            return Ok(0);
        }
        if width > 8 {
            let at = self.position()?;
            return Err(Error::UnsupportedLeafWidth {
                offset: at,
                width,
                expected: "0-8",
            });
        }
        self.ensure(width)?;
        Ok(self.stream.read_uint::<BigEndian>(width as usize)?)
    }

    pub fn read_int(&mut self) -> Result<i64> {
        let width = self.leaf_width()?;
        self.decode_int_width(width)
    }

    pub fn decode_int_width(&mut self, width: u64) -> Result<i64> {
        if width == 0 {
            return Ok(0);
        }
        if width > 8 {
            let at = self.position()?;
            return Err(Error::UnsupportedLeafWidth {
                offset: at,
                width,
                expected: "0-8",
            });
        }
        self.ensure(width)?;
        Ok(self.stream.read_int::<BigEndian>(width as usize)?)
    }

    pub fn read_float(&mut self) -> Result<f64> {
        let width = self.leaf_width()?;
        self.decode_float_width(width)
    }

    pub fn decode_float_width(&mut self, width: u64) -> Result<f64> {
        match width {
            0 => Ok(0.0),
            4 => {
                self.ensure(4)?;
                Ok(f64::from(self.stream.read_f32::<BigEndian>()?))
            }
            8 => {
                self.ensure(8)?;
                Ok(self.stream.read_f64::<BigEndian>()?)
            }
            _ => {
                let at = self.position()?;
                Err(Error::UnsupportedLeafWidth {
                    offset: at,
                    width,
                    expected: "0, 4 or 8",
                })
            }
        }
    }

    pub fn read_utf8(&mut self) -> Result<String> {
        let width = self.leaf_width()?;
        self.decode_utf8_width(width)
    }

    pub fn decode_utf8_width(&mut self, width: u64) -> Result<String> {
        let at = self.position()?;
        let bytes = self.take(width)?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidString { offset: at })
    }

    pub fn read_ascii(&mut self) -> Result<String> {
        let width = self.leaf_width()?;
        self.decode_ascii_width(width)
    }

    pub fn decode_ascii_width(&mut self, width: u64) -> Result<String> {
        let at = self.position()?;
        let bytes = self.take(width)?;
        if !bytes.is_ascii() {
            return Err(Error::InvalidString { offset: at });
        }
        // Every ASCII byte sequence is valid UTF-8.
        Ok(String::from_utf8(bytes).expect("ascii is utf8"))
    }

    /// Nanoseconds since 2001-01-01T00:00:00 UTC (the Matroska epoch).
    pub fn read_date(&mut self) -> Result<i64> {
        let width = self.leaf_width()?;
        self.decode_date_width(width)
    }

    pub fn decode_date_width(&mut self, width: u64) -> Result<i64> {
        match width {
            0 => Ok(0),
            8 => {
                self.ensure(8)?;
                Ok(self.stream.read_i64::<BigEndian>()?)
            }
            _ => {
                let at = self.position()?;
                Err(Error::UnsupportedLeafWidth {
                    offset: at,
                    width,
                    expected: "0 or 8",
                })
            }
        }
    }

    pub fn read_guid(&mut self) -> Result<Guid> {
        let width = self.leaf_width()?;
        if width != 16 {
            let at = self.position()?;
            return Err(Error::UnsupportedLeafWidth {
                offset: at,
                width,
                expected: "16",
            });
        }
        let mut buf = [0u8; 16];
        self.read_raw(&mut buf)?;
        Ok(Guid(buf))
    }

    pub fn read_binary(&mut self) -> Result<Vec<u8>> {
        let width = self.leaf_width()?;
        self.decode_binary_width(width)
    }

    pub fn decode_binary_width(&mut self, width: u64) -> Result<Vec<u8>> {
        self.take(width)
    }

    /// Record the payload's byte range `(offset, len)` and skip past it
    /// without loading it. For payloads the caller wants to defer.
    pub fn read_binary_range(&mut self) -> Result<(u64, u64)> {
        let width = self.leaf_width()?;
        let start = self.position()?;
        self.ensure(width)?;
        self.stream.seek(SeekFrom::Start(start + width))?;
        Ok((start, width))
    }
}
