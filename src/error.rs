use crate::elements::ElementId;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed variable-length integer at offset {offset:#x}")]
    MalformedVarInt { offset: u64 },

    #[error("element at offset {offset:#x} needs {needed} bytes, only {remaining} remain in its parent")]
    TruncatedContainer {
        offset: u64,
        needed: u64,
        remaining: u64,
    },

    #[error("leaf at offset {offset:#x} declares width {width}, expected {expected}")]
    UnsupportedLeafWidth {
        offset: u64,
        width: u64,
        expected: &'static str,
    },

    #[error("unknown-size element at offset {offset:#x} where a sized element is required")]
    UnexpectedUnknownSize { offset: u64 },

    #[error("string at offset {offset:#x} does not match its declared encoding")]
    InvalidString { offset: u64 },

    #[error("stream does not start with an EBML header")]
    NotEbml,

    #[error("unsupported document type {0:?}")]
    UnsupportedDocType(String),

    #[error("expected {expected}, found {found}")]
    UnexpectedElement {
        expected: &'static str,
        found: ElementId,
    },

    #[error("invalid lacing: {0}")]
    InvalidLacing(&'static str),

    #[error("cue references segment position {position:#x} not covered by any cluster")]
    CueMismatch { position: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
