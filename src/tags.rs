use crate::elements::id;
use crate::error::Result;
use crate::reader::ElementReader;
use std::io::{Read, Seek};

/// What a Tag applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct Targets {
    /// Logical level: 50 = movie/album, 30 = track/song, etc.
    pub target_type_value: u64,
    pub target_type: Option<String>,
    /// UIDs of the tracks the tag applies to; empty means the whole Segment.
    pub track_uids: Vec<u64>,
}

impl Default for Targets {
    fn default() -> Self {
        Targets {
            target_type_value: 50,
            target_type: None,
            track_uids: Vec::new(),
        }
    }
}

impl Targets {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Targets> {
        let mut targets = Targets::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::TARGET_TYPE_VALUE => targets.target_type_value = r.read_uint()?,
                id::TARGET_TYPE => targets.target_type = Some(r.read_ascii()?),
                id::TAG_TRACK_UID => targets.track_uids.push(r.read_uint()?),
                _ => r.skip_element()?,
            }
        }
        Ok(targets)
    }
}

/// One name/value metadata pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleTag {
    pub name: Option<String>,
    pub language: String,
    pub default: bool,
    pub value: Option<String>,
    pub binary: Option<Vec<u8>>,
}

impl Default for SimpleTag {
    fn default() -> Self {
        SimpleTag {
            name: None,
            language: "und".to_string(),
            default: true,
            value: None,
            binary: None,
        }
    }
}

impl SimpleTag {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<SimpleTag> {
        let mut tag = SimpleTag::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::TAG_NAME => tag.name = Some(r.read_utf8()?),
                id::TAG_LANGUAGE => tag.language = r.read_ascii()?,
                id::TAG_DEFAULT => tag.default = r.read_uint()? != 0,
                id::TAG_STRING => tag.value = Some(r.read_utf8()?),
                id::TAG_BINARY => tag.binary = Some(r.read_binary()?),
                _ => r.skip_element()?,
            }
        }
        Ok(tag)
    }
}

/// Metadata describing the Segment or some of its tracks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    pub targets: Targets,
    pub simple_tags: Vec<SimpleTag>,
}

impl Tag {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Tag> {
        let mut tag = Tag {
            targets: Targets::default(),
            simple_tags: Vec::new(),
        };
        while !r.at_end()? {
            match r.read_id()? {
                id::TARGETS => tag.targets = r.read_master(|c| Targets::read(c))?,
                id::SIMPLE_TAG => tag.simple_tags.push(r.read_master(|c| SimpleTag::read(c))?),
                _ => r.skip_element()?,
            }
        }
        Ok(tag)
    }
}

pub fn read_tags<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Vec<Tag>> {
    let mut tags = Vec::new();
    while !r.at_end()? {
        match r.read_id()? {
            id::TAG => tags.push(r.read_master(|c| Tag::read(c))?),
            _ => r.skip_element()?,
        }
    }
    Ok(tags)
}
