use crate::elements::id;
use crate::error::Result;
use crate::reader::ElementReader;
use std::io::{Read, Seek};

/// A file embedded in the Segment (cover art, fonts). The payload is kept as
/// a byte range — attachments can be megabytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttachedFile {
    pub uid: u64,
    pub name: Option<String>,
    pub mime_type: Option<String>,
    pub description: Option<String>,
    /// Absolute `(offset, len)` of the file payload.
    pub data: Option<(u64, u64)>,
}

impl AttachedFile {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<AttachedFile> {
        let mut file = AttachedFile::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::FILE_UID => file.uid = r.read_uint()?,
                id::FILE_NAME => file.name = Some(r.read_utf8()?),
                id::FILE_MIME_TYPE => file.mime_type = Some(r.read_ascii()?),
                id::FILE_DESCRIPTION => file.description = Some(r.read_utf8()?),
                id::FILE_DATA => file.data = Some(r.read_binary_range()?),
                _ => r.skip_element()?,
            }
        }
        Ok(file)
    }

    /// Load the attachment payload.
    pub fn read_data<R: Read + Seek>(&self, stream: &mut R) -> Result<Vec<u8>> {
        match self.data {
            Some((offset, len)) => Ok(crate::util::read_slice(stream, offset, len)?),
            None => Ok(Vec::new()),
        }
    }
}

pub fn read_attachments<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Vec<AttachedFile>> {
    let mut files = Vec::new();
    while !r.at_end()? {
        match r.read_id()? {
            id::ATTACHED_FILE => files.push(r.read_master(|c| AttachedFile::read(c))?),
            _ => r.skip_element()?,
        }
    }
    Ok(files)
}
