use crate::elements::id;
use crate::error::Result;
use crate::reader::ElementReader;
use std::io::{Read, Seek};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackType {
    Video,
    Audio,
    Complex,
    Logo,
    Subtitle,
    Buttons,
    Control,
    Unknown(u8),
}

impl TrackType {
    pub fn from_raw(raw: u64) -> TrackType {
        match raw {
            1 => TrackType::Video,
            2 => TrackType::Audio,
            3 => TrackType::Complex,
            0x10 => TrackType::Logo,
            0x11 => TrackType::Subtitle,
            0x12 => TrackType::Buttons,
            0x20 => TrackType::Control,
            other => TrackType::Unknown(other as u8),
        }
    }
}

/// Video-specific track settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Video {
    pub pixel_width: u64,
    pub pixel_height: u64,
    pub display_width: Option<u64>,
    pub display_height: Option<u64>,
    pub colour_space: Option<u32>,
}

impl Video {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Video> {
        let mut video = Video::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::PIXEL_WIDTH => video.pixel_width = r.read_uint()?,
                id::PIXEL_HEIGHT => video.pixel_height = r.read_uint()?,
                id::DISPLAY_WIDTH => video.display_width = Some(r.read_uint()?),
                id::DISPLAY_HEIGHT => video.display_height = Some(r.read_uint()?),
                id::COLOUR_SPACE => {
                    let bytes = r.read_binary()?;
                    if let Ok(four) = <[u8; 4]>::try_from(bytes.as_slice()) {
                        video.colour_space = Some(u32::from_le_bytes(four));
                    }
                }
                _ => r.skip_element()?,
            }
        }
        Ok(video)
    }

    /// Display dimensions, falling back to the pixel dimensions.
    pub fn display_size(&self) -> (u64, u64) {
        (
            self.display_width.unwrap_or(self.pixel_width),
            self.display_height.unwrap_or(self.pixel_height),
        )
    }
}

/// Audio-specific track settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Audio {
    pub sampling_frequency: f64,
    pub output_sampling_frequency: Option<f64>,
    pub channels: u64,
    pub bit_depth: Option<u64>,
}

impl Default for Audio {
    fn default() -> Self {
        Audio {
            sampling_frequency: 8000.0,
            output_sampling_frequency: None,
            channels: 1,
            bit_depth: None,
        }
    }
}

impl Audio {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Audio> {
        let mut audio = Audio::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::SAMPLING_FREQUENCY => audio.sampling_frequency = r.read_float()?,
                id::OUTPUT_SAMPLING_FREQUENCY => {
                    audio.output_sampling_frequency = Some(r.read_float()?)
                }
                id::CHANNELS => audio.channels = r.read_uint()?,
                id::BIT_DEPTH => audio.bit_depth = Some(r.read_uint()?),
                _ => r.skip_element()?,
            }
        }
        Ok(audio)
    }

    /// Playback sampling rate, falling back to the stored rate.
    pub fn output_rate(&self) -> f64 {
        self.output_sampling_frequency
            .unwrap_or(self.sampling_frequency)
    }
}

/// One track of the Segment.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEntry {
    /// Track number as used in block headers.
    pub number: u64,
    pub uid: u64,
    pub track_type: TrackType,
    pub flag_enabled: bool,
    pub flag_default: bool,
    pub flag_forced: bool,
    pub flag_lacing: bool,
    /// Nanoseconds per frame, not scaled by TimestampScale.
    pub default_duration: Option<u64>,
    pub name: Option<String>,
    pub language: String,
    pub codec_id: Option<String>,
    pub codec_private: Option<Vec<u8>>,
    pub codec_name: Option<String>,
    pub video: Option<Video>,
    pub audio: Option<Audio>,
}

impl Default for TrackEntry {
    fn default() -> Self {
        TrackEntry {
            number: 0,
            uid: 0,
            track_type: TrackType::Unknown(0),
            flag_enabled: true,
            flag_default: true,
            flag_forced: false,
            flag_lacing: true,
            default_duration: None,
            name: None,
            language: "eng".to_string(),
            codec_id: None,
            codec_private: None,
            codec_name: None,
            video: None,
            audio: None,
        }
    }
}

impl TrackEntry {
    pub fn read<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<TrackEntry> {
        let mut entry = TrackEntry::default();
        while !r.at_end()? {
            match r.read_id()? {
                id::TRACK_NUMBER => entry.number = r.read_uint()?,
                id::TRACK_UID => entry.uid = r.read_uint()?,
                id::TRACK_TYPE => entry.track_type = TrackType::from_raw(r.read_uint()?),
                id::FLAG_ENABLED => entry.flag_enabled = r.read_uint()? != 0,
                id::FLAG_DEFAULT => entry.flag_default = r.read_uint()? != 0,
                id::FLAG_FORCED => entry.flag_forced = r.read_uint()? != 0,
                id::FLAG_LACING => entry.flag_lacing = r.read_uint()? != 0,
                id::DEFAULT_DURATION => entry.default_duration = Some(r.read_uint()?),
                id::NAME => entry.name = Some(r.read_utf8()?),
                id::LANGUAGE => entry.language = r.read_ascii()?,
                id::CODEC_ID => entry.codec_id = Some(r.read_ascii()?),
                id::CODEC_PRIVATE => entry.codec_private = Some(r.read_binary()?),
                id::CODEC_NAME => entry.codec_name = Some(r.read_utf8()?),
                id::VIDEO => entry.video = Some(r.read_master(|c| Video::read(c))?),
                id::AUDIO => entry.audio = Some(r.read_master(|c| Audio::read(c))?),
                _ => r.skip_element()?,
            }
        }
        Ok(entry)
    }
}

/// Decode a Tracks master into its TrackEntry children, in file order.
pub fn read_tracks<R: Read + Seek>(r: &mut ElementReader<'_, R>) -> Result<Vec<TrackEntry>> {
    let mut entries = Vec::new();
    while !r.at_end()? {
        match r.read_id()? {
            id::TRACK_ENTRY => entries.push(r.read_master(|c| TrackEntry::read(c))?),
            _ => r.skip_element()?,
        }
    }
    Ok(entries)
}
