//! Shared helpers for building synthetic EBML byte streams.

#![allow(dead_code)]

use mkvbox::elements::{ElementId, id};
use mkvbox::vint;

pub struct EbmlWriter {
    pub buf: Vec<u8>,
}

impl EbmlWriter {
    pub fn new() -> EbmlWriter {
        EbmlWriter { buf: Vec::new() }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// id + minimal size vint + payload bytes.
    pub fn element(&mut self, eid: ElementId, payload: &[u8]) {
        self.buf.extend(vint::encode_id(eid).unwrap());
        self.buf
            .extend(vint::encode_size(payload.len() as u64, None).unwrap());
        self.buf.extend_from_slice(payload);
    }

    /// Unsigned integer with its minimal width (1 byte for 0).
    pub fn uint(&mut self, eid: ElementId, value: u64) {
        let width = ((64 - value.leading_zeros() as usize).div_ceil(8)).max(1);
        self.uint_width(eid, value, width);
    }

    /// Unsigned integer at a forced width; width 0 writes an empty payload.
    pub fn uint_width(&mut self, eid: ElementId, value: u64, width: usize) {
        let bytes: Vec<u8> = (0..width).rev().map(|i| (value >> (8 * i)) as u8).collect();
        self.element(eid, &bytes);
    }

    pub fn int(&mut self, eid: ElementId, value: i64) {
        // 8 bytes is always a faithful signed encoding.
        self.element(eid, &value.to_be_bytes());
    }

    pub fn float32(&mut self, eid: ElementId, value: f32) {
        self.element(eid, &value.to_be_bytes());
    }

    pub fn float64(&mut self, eid: ElementId, value: f64) {
        self.element(eid, &value.to_be_bytes());
    }

    pub fn string(&mut self, eid: ElementId, value: &str) {
        self.element(eid, value.as_bytes());
    }

    pub fn date(&mut self, eid: ElementId, nanoseconds: i64) {
        self.element(eid, &nanoseconds.to_be_bytes());
    }

    /// Nested master element, sized after the fact.
    pub fn master(&mut self, eid: ElementId, fill: impl FnOnce(&mut EbmlWriter)) {
        let mut inner = EbmlWriter::new();
        fill(&mut inner);
        self.element(eid, &inner.buf);
    }

    /// Master element written with the unknown-size sentinel. Only valid as
    /// the last element of its parent.
    pub fn master_unknown_size(&mut self, eid: ElementId, fill: impl FnOnce(&mut EbmlWriter)) {
        let mut inner = EbmlWriter::new();
        fill(&mut inner);
        self.buf.extend(vint::encode_id(eid).unwrap());
        self.buf.extend(vint::encode_unknown_size(8));
        self.buf.extend(inner.buf);
    }

    /// A Void element of exactly `total` encoded bytes (header included).
    pub fn void(&mut self, total: usize) {
        assert!(total >= 2, "a Void element needs at least 2 bytes");
        for size_len in 1..=vint::MAX_LEN {
            if total < 1 + size_len {
                continue;
            }
            let payload = (total - 1 - size_len) as u64;
            if let Ok(size) = vint::encode_size(payload, Some(size_len)) {
                self.buf.extend(vint::encode_id(id::VOID).unwrap());
                self.buf.extend(size);
                self.buf.extend(std::iter::repeat_n(0u8, payload as usize));
                return;
            }
        }
        unreachable!("void of {total} bytes");
    }

    /// Pad with a Void element so the next write lands at `target` bytes
    /// from the start of this writer.
    pub fn pad_to(&mut self, target: usize) {
        assert!(target >= self.buf.len() + 2, "not enough room to pad");
        let total = target - self.buf.len();
        self.void(total);
    }
}

/// The byte body of a SimpleBlock/Block element: track vint, relative
/// timestamp, flags, frame data.
pub fn block_payload(track: u64, timestamp: i16, flags: u8, data: &[u8]) -> Vec<u8> {
    let mut bytes = vint::encode_size(track, None).unwrap();
    bytes.extend(timestamp.to_be_bytes());
    bytes.push(flags);
    bytes.extend_from_slice(data);
    bytes
}

/// A well-formed EBML header for the given doc type.
pub fn ebml_head(doc_type: &str) -> Vec<u8> {
    let mut w = EbmlWriter::new();
    w.master(id::EBML, |w| {
        w.uint(id::EBML_VERSION, 1);
        w.uint(id::EBML_READ_VERSION, 1);
        w.uint(id::EBML_MAX_ID_LENGTH, 4);
        w.uint(id::EBML_MAX_SIZE_LENGTH, 8);
        w.string(id::DOC_TYPE, doc_type);
        w.uint(id::DOC_TYPE_VERSION, 4);
        w.uint(id::DOC_TYPE_READ_VERSION, 2);
    });
    w.into_bytes()
}

/// A complete single-segment file: header plus the given segment children.
pub fn matroska_file(fill: impl FnOnce(&mut EbmlWriter)) -> Vec<u8> {
    let mut w = EbmlWriter::new();
    w.buf.extend(ebml_head("matroska"));
    w.master(id::SEGMENT, fill);
    w.into_bytes()
}

/// Segment children for a minimal file: Info and one video + one audio
/// track. Timestamp scale 1 ms.
pub fn standard_metadata(w: &mut EbmlWriter) {
    w.master(id::INFO, |w| {
        w.uint(id::TIMESTAMP_SCALE, 1_000_000);
        w.float64(id::DURATION, 5_000.0);
        w.string(id::MUXING_APP, "mkvbox-tests");
        w.string(id::WRITING_APP, "mkvbox-tests");
    });
    w.master(id::TRACKS, |w| {
        w.master(id::TRACK_ENTRY, |w| {
            w.uint(id::TRACK_NUMBER, 1);
            w.uint(id::TRACK_UID, 0x1111);
            w.uint(id::TRACK_TYPE, 1);
            w.string(id::CODEC_ID, "V_MPEG4/ISO/AVC");
            w.master(id::VIDEO, |w| {
                w.uint(id::PIXEL_WIDTH, 1920);
                w.uint(id::PIXEL_HEIGHT, 1080);
            });
        });
        w.master(id::TRACK_ENTRY, |w| {
            w.uint(id::TRACK_NUMBER, 2);
            w.uint(id::TRACK_UID, 0x2222);
            w.uint(id::TRACK_TYPE, 2);
            w.string(id::CODEC_ID, "A_AAC");
            w.master(id::AUDIO, |w| {
                w.float64(id::SAMPLING_FREQUENCY, 48_000.0);
                w.uint(id::CHANNELS, 2);
            });
        });
    });
}

/// A cluster with the given absolute timestamp and one keyframe SimpleBlock
/// per entry of `blocks`: `(track, relative timestamp, frame bytes)`.
pub fn cluster(w: &mut EbmlWriter, timestamp: u64, blocks: &[(u64, i16, &[u8])]) {
    w.master(id::CLUSTER, |w| {
        w.uint(id::TIMESTAMP, timestamp);
        for (track, rel, data) in blocks {
            w.element(id::SIMPLE_BLOCK, &block_payload(*track, *rel, 0x80, data));
        }
    });
}
