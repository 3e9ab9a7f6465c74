use crate::block::Block;
use crate::elements::id;
use crate::error::{Error, Result};
use crate::reader::ElementReader;
use std::io::{Read, Seek};

/// A Cluster the top-level decode pass skipped over: just its byte geometry
/// and leading timestamp. Resolving one is a pure function of these fields
/// and the file bytes, so it can happen any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterPlaceholder {
    /// Absolute cluster timestamp, in timestamp ticks.
    pub timestamp: u64,
    /// Offset of the cluster element (its ID byte) relative to the Segment
    /// payload start. This is what cue entries reference.
    pub segment_position: u64,
    /// ID + size field bytes preceding the payload.
    pub header_len: u64,
    /// Absolute file offset of the cluster payload.
    pub payload_start: u64,
    pub payload_len: u64,
}

impl ClusterPlaceholder {
    /// Record the cluster at the current position of `r` (just past the
    /// Cluster ID) without decoding it. Peeks leading Timestamp children and
    /// stops at the first block, exactly like a skip otherwise.
    pub fn read<R: Read + Seek>(
        r: &mut ElementReader<'_, R>,
        segment_start: u64,
        element_start: u64,
    ) -> Result<ClusterPlaceholder> {
        let (timestamp, payload_start, payload_end) = r.read_master(|c| {
            let start = c.start();
            let end = c
                .end()
                .ok_or(Error::UnexpectedUnknownSize { offset: start })?;
            let mut timestamp = 0;
            while !c.at_end()? {
                if c.read_id()? == id::TIMESTAMP {
                    timestamp = c.read_uint()?;
                } else {
                    break;
                }
            }
            Ok((timestamp, start, end))
        })?;
        Ok(ClusterPlaceholder {
            timestamp,
            segment_position: element_start - segment_start,
            header_len: payload_start - element_start,
            payload_start,
            payload_len: payload_end - payload_start,
        })
    }

    /// Whether `segment_position` (a cue's CueClusterPosition) falls inside
    /// this cluster's encoded span.
    pub fn contains(&self, segment_position: u64) -> bool {
        segment_position >= self.segment_position
            && segment_position < self.segment_position + self.header_len + self.payload_len
    }

    /// Materialize the cluster. Reads only `[payload_start,
    /// payload_start + payload_len)`; repeated calls decode identical
    /// content.
    pub fn resolve<R: Read + Seek>(&self, stream: &mut R) -> Result<Cluster> {
        let mut r = ElementReader::over(
            stream,
            self.payload_start,
            Some(self.payload_start + self.payload_len),
        )?;
        Cluster::read_body(&mut r)
    }
}

/// Extra data attached to a Block: duration and reference timestamps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockGroup {
    pub block: Option<Block>,
    /// Block duration in timestamp ticks.
    pub duration: Option<u64>,
    /// Timestamps of reference frames, relative to this block.
    pub reference_blocks: Vec<i64>,
}

impl BlockGroup {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<BlockGroup> {
        let mut group = BlockGroup::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::BLOCK => group.block = Some(Block::read(r)?),
                id::BLOCK_DURATION => group.duration = Some(r.read_uint()?),
                id::REFERENCE_BLOCK => group.reference_blocks.push(r.read_int()?),
                _ => r.skip_element()?,
            }
        }
        Ok(group)
    }
}

/// A fully decoded Cluster. Block payloads stay in the file as byte ranges;
/// the decoded form is proportional to the block count, not the media size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cluster {
    pub timestamp: u64,
    pub silent_tracks: Vec<u64>,
    pub position: Option<u64>,
    pub prev_size: Option<u64>,
    pub simple_blocks: Vec<Block>,
    pub block_groups: Vec<BlockGroup>,
}

impl Cluster {
    /// Decode a cluster payload from a cursor bounded to exactly that
    /// payload.
    pub fn read_body<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Cluster> {
        let mut cluster = Cluster::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::TIMESTAMP => cluster.timestamp = r.read_uint()?,
                id::SILENT_TRACKS => {
                    let numbers = r.read_master(|c| {
                        let mut numbers = Vec::new();
                        while !c.at_end()? {
                            match c.read_id()? {
                                id::SILENT_TRACK_NUMBER => numbers.push(c.read_uint()?),
                                _ => c.skip_element()?,
                            }
                        }
                        Ok(numbers)
                    })?;
                    cluster.silent_tracks.extend(numbers);
                }
                id::POSITION => cluster.position = Some(r.read_uint()?),
                id::PREV_SIZE => cluster.prev_size = Some(r.read_uint()?),
                id::SIMPLE_BLOCK => cluster.simple_blocks.push(Block::read(r)?),
                id::BLOCK_GROUP => cluster
                    .block_groups
                    .push(r.read_master(|c| BlockGroup::read(c))?),
                _ => r.skip_element()?,
            }
        }
        Ok(cluster)
    }

    /// Blocks of one track: SimpleBlocks first, then BlockGroup blocks, each
    /// run in file order.
    pub fn track_blocks(&self, track: u64) -> impl Iterator<Item = &Block> + '_ {
        self.simple_blocks
            .iter()
            .chain(self.block_groups.iter().filter_map(|g| g.block.as_ref()))
            .filter(move |b| b.track_number == track)
    }

    /// Absolute presentation time of a block in this cluster, in timestamp
    /// ticks.
    pub fn block_time(&self, block: &Block) -> i64 {
        self.timestamp as i64 + i64::from(block.timestamp)
    }
}
