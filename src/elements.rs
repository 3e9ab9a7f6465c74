use std::fmt;

/// An EBML element ID, as stored in the file: the length-marker bit is kept,
/// so IDs of different encoded lengths never collide numerically.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ElementId(pub u64);

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A 128-bit identifier, e.g. SegmentUID.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Guid(pub [u8; 16]);

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Matroska element IDs.
///
/// See <https://www.matroska.org/technical/elements.html>. Only the elements
/// this crate decodes are listed; anything else is skipped by ID.
pub mod id {
    use super::ElementId;

    // EBML header
    pub const EBML: ElementId = ElementId(0x1a45dfa3);
    pub const EBML_VERSION: ElementId = ElementId(0x4286);
    pub const EBML_READ_VERSION: ElementId = ElementId(0x42f7);
    pub const EBML_MAX_ID_LENGTH: ElementId = ElementId(0x42f2);
    pub const EBML_MAX_SIZE_LENGTH: ElementId = ElementId(0x42f3);
    pub const DOC_TYPE: ElementId = ElementId(0x4282);
    pub const DOC_TYPE_VERSION: ElementId = ElementId(0x4287);
    pub const DOC_TYPE_READ_VERSION: ElementId = ElementId(0x4285);

    // Global
    pub const VOID: ElementId = ElementId(0xec);
    pub const CRC32: ElementId = ElementId(0xbf);

    // Segment and its index
    pub const SEGMENT: ElementId = ElementId(0x18538067);
    pub const SEEK_HEAD: ElementId = ElementId(0x114d9b74);
    pub const SEEK: ElementId = ElementId(0x4dbb);
    pub const SEEK_ID: ElementId = ElementId(0x53ab);
    pub const SEEK_POSITION: ElementId = ElementId(0x53ac);

    // Info
    pub const INFO: ElementId = ElementId(0x1549a966);
    pub const SEGMENT_UID: ElementId = ElementId(0x73a4);
    pub const TIMESTAMP_SCALE: ElementId = ElementId(0x2ad7b1);
    pub const DURATION: ElementId = ElementId(0x4489);
    pub const DATE_UTC: ElementId = ElementId(0x4461);
    pub const TITLE: ElementId = ElementId(0x7ba9);
    pub const MUXING_APP: ElementId = ElementId(0x4d80);
    pub const WRITING_APP: ElementId = ElementId(0x5741);

    // Cluster
    pub const CLUSTER: ElementId = ElementId(0x1f43b675);
    pub const TIMESTAMP: ElementId = ElementId(0xe7);
    pub const SILENT_TRACKS: ElementId = ElementId(0x5854);
    pub const SILENT_TRACK_NUMBER: ElementId = ElementId(0x58d7);
    pub const POSITION: ElementId = ElementId(0xa7);
    pub const PREV_SIZE: ElementId = ElementId(0xab);
    pub const SIMPLE_BLOCK: ElementId = ElementId(0xa3);
    pub const BLOCK_GROUP: ElementId = ElementId(0xa0);
    pub const BLOCK: ElementId = ElementId(0xa1);
    pub const BLOCK_DURATION: ElementId = ElementId(0x9b);
    pub const REFERENCE_BLOCK: ElementId = ElementId(0xfb);

    // Tracks
    pub const TRACKS: ElementId = ElementId(0x1654ae6b);
    pub const TRACK_ENTRY: ElementId = ElementId(0xae);
    pub const TRACK_NUMBER: ElementId = ElementId(0xd7);
    pub const TRACK_UID: ElementId = ElementId(0x73c5);
    pub const TRACK_TYPE: ElementId = ElementId(0x83);
    pub const FLAG_ENABLED: ElementId = ElementId(0xb9);
    pub const FLAG_DEFAULT: ElementId = ElementId(0x88);
    pub const FLAG_FORCED: ElementId = ElementId(0x55aa);
    pub const FLAG_LACING: ElementId = ElementId(0x9c);
    pub const DEFAULT_DURATION: ElementId = ElementId(0x23e383);
    pub const NAME: ElementId = ElementId(0x536e);
    pub const LANGUAGE: ElementId = ElementId(0x22b59c);
    pub const CODEC_ID: ElementId = ElementId(0x86);
    pub const CODEC_PRIVATE: ElementId = ElementId(0x63a2);
    pub const CODEC_NAME: ElementId = ElementId(0x258688);

    // Video / audio track details
    pub const VIDEO: ElementId = ElementId(0xe0);
    pub const PIXEL_WIDTH: ElementId = ElementId(0xb0);
    pub const PIXEL_HEIGHT: ElementId = ElementId(0xba);
    pub const DISPLAY_WIDTH: ElementId = ElementId(0x54b0);
    pub const DISPLAY_HEIGHT: ElementId = ElementId(0x54ba);
    pub const COLOUR_SPACE: ElementId = ElementId(0x2eb524);
    pub const AUDIO: ElementId = ElementId(0xe1);
    pub const SAMPLING_FREQUENCY: ElementId = ElementId(0xb5);
    pub const OUTPUT_SAMPLING_FREQUENCY: ElementId = ElementId(0x78b5);
    pub const CHANNELS: ElementId = ElementId(0x9f);
    pub const BIT_DEPTH: ElementId = ElementId(0x6264);

    // Cues
    pub const CUES: ElementId = ElementId(0x1c53bb6b);
    pub const CUE_POINT: ElementId = ElementId(0xbb);
    pub const CUE_TIME: ElementId = ElementId(0xb3);
    pub const CUE_TRACK_POSITIONS: ElementId = ElementId(0xb7);
    pub const CUE_TRACK: ElementId = ElementId(0xf7);
    pub const CUE_CLUSTER_POSITION: ElementId = ElementId(0xf1);
    pub const CUE_RELATIVE_POSITION: ElementId = ElementId(0xf0);
    pub const CUE_DURATION: ElementId = ElementId(0xb2);
    pub const CUE_BLOCK_NUMBER: ElementId = ElementId(0x5378);
    pub const CUE_CODEC_STATE: ElementId = ElementId(0xea);
    pub const CUE_REFERENCE: ElementId = ElementId(0xdb);
    pub const CUE_REF_TIME: ElementId = ElementId(0x96);

    // Attachments
    pub const ATTACHMENTS: ElementId = ElementId(0x1941a469);
    pub const ATTACHED_FILE: ElementId = ElementId(0x61a7);
    pub const FILE_DESCRIPTION: ElementId = ElementId(0x467e);
    pub const FILE_NAME: ElementId = ElementId(0x466e);
    pub const FILE_MIME_TYPE: ElementId = ElementId(0x4660);
    pub const FILE_DATA: ElementId = ElementId(0x465c);
    pub const FILE_UID: ElementId = ElementId(0x46ae);

    // Tags
    pub const TAGS: ElementId = ElementId(0x1254c367);
    pub const TAG: ElementId = ElementId(0x7373);
    pub const TARGETS: ElementId = ElementId(0x63c0);
    pub const TARGET_TYPE_VALUE: ElementId = ElementId(0x68ca);
    pub const TARGET_TYPE: ElementId = ElementId(0x63ca);
    pub const TAG_TRACK_UID: ElementId = ElementId(0x63c5);
    pub const SIMPLE_TAG: ElementId = ElementId(0x67c8);
    pub const TAG_NAME: ElementId = ElementId(0x45a3);
    pub const TAG_LANGUAGE: ElementId = ElementId(0x447a);
    pub const TAG_DEFAULT: ElementId = ElementId(0x4484);
    pub const TAG_STRING: ElementId = ElementId(0x4487);
    pub const TAG_BINARY: ElementId = ElementId(0x4485);
}
