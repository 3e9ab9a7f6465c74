use crate::elements::id;
use crate::error::Result;
use crate::reader::ElementReader;
use std::io::{Read, Seek};

/// The EBML header that opens every document, before the Segment.
#[derive(Debug, Clone)]
pub struct EbmlHead {
    pub version: u64,
    pub read_version: u64,
    pub max_id_length: u64,
    pub max_size_length: u64,
    pub doc_type: String,
    pub doc_type_version: u64,
    pub doc_type_read_version: u64,
}

impl Default for EbmlHead {
    fn default() -> Self {
        EbmlHead {
            version: 1,
            read_version: 1,
            max_id_length: 4,
            max_size_length: 8,
            doc_type: String::new(),
            doc_type_version: 1,
            doc_type_read_version: 1,
        }
    }
}

impl EbmlHead {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<EbmlHead> {
        let mut head = EbmlHead::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::EBML_VERSION => head.version = r.read_uint()?,
                id::EBML_READ_VERSION => head.read_version = r.read_uint()?,
                id::EBML_MAX_ID_LENGTH => head.max_id_length = r.read_uint()?,
                id::EBML_MAX_SIZE_LENGTH => head.max_size_length = r.read_uint()?,
                id::DOC_TYPE => head.doc_type = r.read_ascii()?,
                id::DOC_TYPE_VERSION => head.doc_type_version = r.read_uint()?,
                id::DOC_TYPE_READ_VERSION => head.doc_type_read_version = r.read_uint()?,
                _ => r.skip_element()?,
            }
        }
        Ok(head)
    }
}
