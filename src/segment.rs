use crate::attachments::{AttachedFile, read_attachments};
use crate::cluster::ClusterPlaceholder;
use crate::cues::{CuePoint, read_cues};
use crate::elements::{ElementId, id};
use crate::error::{Error, Result};
use crate::head::EbmlHead;
use crate::info::Info;
use crate::reader::ElementReader;
use crate::tracks::{TrackEntry, TrackType, read_tracks};
use std::io::{Read, Seek};
use tracing::warn;

/// One SeekHead entry: where a top-level element lives, relative to the
/// Segment payload start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekEntry {
    pub id: ElementId,
    pub position: u64,
}

/// The decoded Segment: all metadata eagerly, clusters as placeholders.
///
/// Memory use is proportional to the file's metadata (track definitions,
/// indices, one placeholder per cluster), never to the media payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Absolute file offset of the Segment payload.
    pub position: u64,
    pub seek_head: Vec<SeekEntry>,
    pub info: Option<Info>,
    pub tracks: Vec<TrackEntry>,
    pub clusters: Vec<ClusterPlaceholder>,
    pub cues: Vec<CuePoint>,
    pub attachments: Vec<AttachedFile>,
    pub tags: Vec<crate::tags::Tag>,
}

/// Parse a Matroska/WebM stream: EBML header gate, then the Segment.
pub fn open<R: Read + Seek>(stream: &mut R) -> Result<(EbmlHead, Segment)> {
    let mut root = ElementReader::whole(stream)?;
    if root.read_id()? != id::EBML {
        return Err(Error::NotEbml);
    }
    let head = root.read_master(|c| EbmlHead::read(c))?;
    if head.doc_type != "matroska" && head.doc_type != "webm" {
        return Err(Error::UnsupportedDocType(head.doc_type.clone()));
    }

    let found = root.read_id()?;
    if found != id::SEGMENT {
        return Err(Error::UnexpectedElement {
            expected: "Segment",
            found,
        });
    }
    let mut body = root.begin_child()?;
    let segment = Segment::read_body(&mut body)?;
    Ok((head, segment))
}

impl Segment {
    /// Parse a Matroska/WebM stream, discarding the EBML header.
    pub fn read<R: Read + Seek>(stream: &mut R) -> Result<Segment> {
        Ok(open(stream)?.1)
    }

    fn read_body<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Segment> {
        let position = r.start();
        let mut segment = Segment {
            position,
            seek_head: Vec::new(),
            info: None,
            tracks: Vec::new(),
            clusters: Vec::new(),
            cues: Vec::new(),
            attachments: Vec::new(),
            tags: Vec::new(),
        };

        while !r.at_end()? {
            let element_start = r.position()?;
            match r.read_id()? {
                id::SEEK_HEAD => {
                    let entries = r.read_master(|c| read_seek_head(c))?;
                    segment.seek_head.extend(entries);
                }
                id::INFO => segment.info = Some(r.read_master(|c| Info::read(c))?),
                id::TRACKS => {
                    let entries = r.read_master(|c| read_tracks(c))?;
                    segment.tracks.extend(entries);
                }
                id::CLUSTER => {
                    segment
                        .clusters
                        .push(ClusterPlaceholder::read(r, position, element_start)?)
                }
                id::CUES => segment.cues = r.read_master(|c| read_cues(c))?,
                id::ATTACHMENTS => {
                    let files = r.read_master(|c| read_attachments(c))?;
                    segment.attachments.extend(files);
                }
                id::TAGS => {
                    let tags = r.read_master(|c| crate::tags::read_tags(c))?;
                    segment.tags.extend(tags);
                }
                _ => r.skip_element()?,
            }
        }
        Ok(segment)
    }

    /// Nanoseconds per timestamp tick.
    pub fn timestamp_scale(&self) -> u64 {
        self.info.as_ref().map_or(1_000_000, |i| i.timestamp_scale)
    }

    /// Absolute file offset of a top-level section, per the SeekHead index.
    /// The last live entry per element type wins.
    pub fn section_offset(&self, target: ElementId) -> Option<u64> {
        self.seek_head
            .iter()
            .rev()
            .find(|e| e.id == target)
            .map(|e| self.position + e.position)
    }

    /// Index of the cluster whose encoded span contains the given
    /// segment-relative position.
    pub fn cluster_at(&self, segment_position: u64) -> Option<usize> {
        let idx = self
            .clusters
            .partition_point(|c| c.segment_position <= segment_position);
        if idx == 0 {
            return None;
        }
        self.clusters[idx - 1]
            .contains(segment_position)
            .then_some(idx - 1)
    }

    pub fn video_track(&self) -> Option<&TrackEntry> {
        self.first_track(TrackType::Video, "video")
    }

    pub fn audio_track(&self) -> Option<&TrackEntry> {
        self.first_track(TrackType::Audio, "audio")
    }

    fn first_track(&self, kind: TrackType, label: &str) -> Option<&TrackEntry> {
        let mut matching = self.tracks.iter().filter(|t| t.track_type == kind);
        let first = matching.next();
        if matching.next().is_some() {
            warn!("multiple {label} tracks, using the first one");
        }
        first
    }
}

fn read_seek_head<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Vec<SeekEntry>> {
    let mut entries = Vec::new();
    while !r.at_end()? {
        match r.read_id()? {
            id::SEEK => {
                let entry = r.read_master(|c| {
                    let mut target = None;
                    let mut position = 0;
                    while !c.at_end()? {
                        match c.read_id()? {
                            id::SEEK_ID => {
                                // The target ID is stored as raw bytes,
                                // marker bit included.
                                let bytes = c.read_binary()?;
                                let mut value = 0u64;
                                for b in bytes.iter().take(8) {
                                    value = value << 8 | u64::from(*b);
                                }
                                target = Some(ElementId(value));
                            }
                            id::SEEK_POSITION => position = c.read_uint()?,
                            _ => c.skip_element()?,
                        }
                    }
                    Ok(target.map(|id| SeekEntry { id, position }))
                })?;
                if let Some(entry) = entry {
                    entries.push(entry);
                }
            }
            _ => r.skip_element()?,
        }
    }
    Ok(entries)
}
