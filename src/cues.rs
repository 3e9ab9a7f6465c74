use crate::elements::id;
use crate::error::Result;
use crate::reader::ElementReader;
use std::io::{Read, Seek};

/// Position of one track's data for a cue point.
#[derive(Debug, Clone, PartialEq)]
pub struct CueTrackPositions {
    pub track: u64,
    /// Segment-relative offset of the Cluster holding the referenced block.
    pub cluster_position: u64,
    /// Offset of the block inside that cluster, 0-based.
    pub relative_position: Option<u64>,
    pub duration: Option<u64>,
    /// 1-based ordinal of the block in the cluster.
    pub block_number: u64,
    pub codec_state: u64,
    /// CueRefTime of each reference frame the target depends on.
    pub references: Vec<u64>,
}

impl Default for CueTrackPositions {
    fn default() -> Self {
        CueTrackPositions {
            track: 0,
            cluster_position: 0,
            relative_position: None,
            duration: None,
            block_number: 1,
            codec_state: 0,
            references: Vec::new(),
        }
    }
}

impl CueTrackPositions {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<CueTrackPositions> {
        let mut positions = CueTrackPositions::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::CUE_TRACK => positions.track = r.read_uint()?,
                id::CUE_CLUSTER_POSITION => positions.cluster_position = r.read_uint()?,
                id::CUE_RELATIVE_POSITION => positions.relative_position = Some(r.read_uint()?),
                id::CUE_DURATION => positions.duration = Some(r.read_uint()?),
                id::CUE_BLOCK_NUMBER => positions.block_number = r.read_uint()?,
                id::CUE_CODEC_STATE => positions.codec_state = r.read_uint()?,
                id::CUE_REFERENCE => {
                    let ref_time = r.read_master(|c| {
                        let mut ref_time = None;
                        while !c.at_end()? {
                            match c.read_id()? {
                                id::CUE_REF_TIME => ref_time = Some(c.read_uint()?),
                                _ => c.skip_element()?,
                            }
                        }
                        Ok(ref_time)
                    })?;
                    if let Some(t) = ref_time {
                        positions.references.push(t);
                    }
                }
                _ => r.skip_element()?,
            }
        }
        Ok(positions)
    }
}

/// One timestamp in the cue index, with positions for every cued track.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CuePoint {
    /// In timestamp ticks.
    pub time: u64,
    pub positions: Vec<CueTrackPositions>,
}

impl CuePoint {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<CuePoint> {
        let mut point = CuePoint::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::CUE_TIME => point.time = r.read_uint()?,
                id::CUE_TRACK_POSITIONS => point
                    .positions
                    .push(r.read_master(|c| CueTrackPositions::read(c))?),
                _ => r.skip_element()?,
            }
        }
        Ok(point)
    }
}

/// Decode a Cues master into its cue points, in file order (the format
/// stores them sorted by time).
pub fn read_cues<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Vec<CuePoint>> {
    let mut points = Vec::new();
    while !r.at_end()? {
        match r.read_id()? {
            id::CUE_POINT => points.push(r.read_master(|c| CuePoint::read(c))?),
            _ => r.skip_element()?,
        }
    }
    Ok(points)
}
