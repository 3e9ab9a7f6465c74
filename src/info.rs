use crate::elements::{Guid, id};
use crate::error::Result;
use crate::reader::ElementReader;
use std::io::{Read, Seek};

/// Offset of the Matroska date epoch (2001-01-01T00:00:00 UTC) from the Unix
/// epoch, in seconds.
pub const EPOCH_UNIX_SECONDS: i64 = 978_307_200;

/// General information about the Segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    pub segment_uid: Option<Guid>,
    /// Nanoseconds per timestamp tick. 1_000_000 means every timestamp in
    /// the Segment is in milliseconds.
    pub timestamp_scale: u64,
    /// Segment duration in timestamp ticks.
    pub duration: Option<f64>,
    /// Muxing date, nanoseconds since the Matroska epoch.
    pub date_utc: Option<i64>,
    pub title: Option<String>,
    pub muxing_app: Option<String>,
    pub writing_app: Option<String>,
}

impl Default for Info {
    fn default() -> Self {
        Info {
            segment_uid: None,
            timestamp_scale: 1_000_000,
            duration: None,
            date_utc: None,
            title: None,
            muxing_app: None,
            writing_app: None,
        }
    }
}

impl Info {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Info> {
        let mut info = Info::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::SEGMENT_UID => info.segment_uid = Some(r.read_guid()?),
                id::TIMESTAMP_SCALE => info.timestamp_scale = r.read_uint()?,
                id::DURATION => info.duration = Some(r.read_float()?),
                id::DATE_UTC => info.date_utc = Some(r.read_date()?),
                id::TITLE => info.title = Some(r.read_utf8()?),
                id::MUXING_APP => info.muxing_app = Some(r.read_utf8()?),
                id::WRITING_APP => info.writing_app = Some(r.read_utf8()?),
                _ => r.skip_element()?,
            }
        }
        Ok(info)
    }

    /// Segment duration in nanoseconds, if the file declares one.
    pub fn duration_ns(&self) -> Option<u64> {
        self.duration
            .map(|d| (d * self.timestamp_scale as f64) as u64)
    }

    /// Muxing date as Unix nanoseconds.
    pub fn date_unix_ns(&self) -> Option<i64> {
        self.date_utc
            .map(|ns| ns + EPOCH_UNIX_SECONDS * 1_000_000_000)
    }
}
