//! Random access: the per-track cue index and the seek algorithm on top of
//! the lazy cluster placeholders.

use crate::error::{Error, Result};
use crate::segment::Segment;
use std::io::{Read, Seek};
use tracing::debug;

/// How many clusters past the cue target to scan for a matching block before
/// giving up. Keyframes for a cued track sit at or right after the cued
/// cluster, so a small window suffices.
const SEARCH_WINDOW: usize = 3;

/// One cue entry flattened for a single track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueIndexEntry {
    /// In timestamp ticks.
    pub time: u64,
    /// Segment-relative offset of the target cluster.
    pub cluster_position: u64,
    pub relative_position: Option<u64>,
    pub block_number: u64,
}

/// The cue index of one track, ordered by time. Built once per track from
/// the eagerly decoded Cues; owned by the caller, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekIndex {
    track: u64,
    entries: Vec<CueIndexEntry>,
}

impl SeekIndex {
    pub fn build(segment: &Segment, track: u64) -> SeekIndex {
        let mut entries: Vec<CueIndexEntry> = segment
            .cues
            .iter()
            .flat_map(|point| {
                point
                    .positions
                    .iter()
                    .filter(move |p| p.track == track)
                    .map(move |p| CueIndexEntry {
                        time: point.time,
                        cluster_position: p.cluster_position,
                        relative_position: p.relative_position,
                        block_number: p.block_number,
                    })
            })
            .collect();
        // The format stores cue points time-ordered already; sorting keeps
        // the binary search honest on sloppy muxers.
        entries.sort_by_key(|e| e.time);
        SeekIndex { track, entries }
    }

    pub fn track(&self) -> u64 {
        self.track
    }

    pub fn entries(&self) -> &[CueIndexEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The greatest entry with `time <= target`. A target before the first
    /// entry clamps to the first entry; only an empty index yields `None`.
    pub fn find(&self, target: i64) -> Option<&CueIndexEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = self
            .entries
            .partition_point(|e| (e.time as i64) <= target);
        Some(&self.entries[idx.saturating_sub(1)])
    }
}

/// A located block: where playback should resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekPosition {
    /// Absolute block time, in timestamp ticks.
    pub time: i64,
    /// Index into `segment.clusters`.
    pub cluster: usize,
    /// Ordinal of the block among the track's blocks in that cluster.
    pub block: usize,
}

/// Seek `track` to the last block with time <= `target` ticks.
///
/// The cue index picks the starting cluster (clamping targets before the
/// first cue to the first entry); the placeholder covering the cued offset
/// is resolved and its blocks scanned linearly. Without cues, the cluster
/// placeholders' own timestamps stand in for the index. A target before
/// every block clamps to the first block found.
pub fn find_seek_position<R: Read + Seek>(
    segment: &Segment,
    index: &SeekIndex,
    stream: &mut R,
    target: i64,
) -> Result<Option<SeekPosition>> {
    let start_cluster = match index.find(target) {
        Some(entry) => segment
            .cluster_at(entry.cluster_position)
            .ok_or(Error::CueMismatch {
                position: entry.cluster_position,
            })?,
        None => {
            if segment.clusters.is_empty() {
                return Ok(None);
            }
            let idx = segment
                .clusters
                .partition_point(|c| (c.timestamp as i64) <= target);
            idx.saturating_sub(1)
        }
    };
    debug!(ticks = target, start_cluster, "seeking");

    let track = index.track();
    let window_end = (start_cluster + SEARCH_WINDOW).min(segment.clusters.len());
    let mut best: Option<SeekPosition> = None;

    for cluster_index in start_cluster..window_end {
        let cluster = segment.clusters[cluster_index].resolve(stream)?;
        for (block_index, block) in cluster.track_blocks(track).enumerate() {
            let time = cluster.block_time(block);
            let position = SeekPosition {
                time,
                cluster: cluster_index,
                block: block_index,
            };
            if time <= target {
                best = Some(position);
            } else {
                // Block times only grow from here; clamp to the first block
                // when the target precedes everything.
                if best.is_none() {
                    best = Some(position);
                }
                return Ok(best);
            }
        }
    }
    Ok(best)
}
