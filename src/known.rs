use crate::elements::{ElementId, id};

/// How an element's payload is decoded.
///
/// This is the dispatch table the generic tree walk runs on; the typed
/// composites hard-code the same classification in their decode loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    /// Payload is a sequence of child elements.
    Master,
    /// Master element whose payload is deferred, not recursed into.
    Bulk,
    UInt,
    Int,
    Float,
    Ascii,
    Utf8,
    Date,
    Binary,
    Guid,
    Unknown,
}

impl ElementClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementClass::Master => "master",
            ElementClass::Bulk => "bulk",
            ElementClass::UInt => "uint",
            ElementClass::Int => "int",
            ElementClass::Float => "float",
            ElementClass::Ascii => "ascii",
            ElementClass::Utf8 => "utf8",
            ElementClass::Date => "date",
            ElementClass::Binary => "binary",
            ElementClass::Guid => "guid",
            ElementClass::Unknown => "unknown",
        }
    }
}

/// Typed view over the Matroska elements this crate understands.
///
/// Anything not in this list becomes `KnownElement::Unknown(id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownElement {
    // EBML header
    Ebml,
    EbmlVersion,
    EbmlReadVersion,
    EbmlMaxIdLength,
    EbmlMaxSizeLength,
    DocType,
    DocTypeVersion,
    DocTypeReadVersion,

    // Global
    Void,
    Crc32,

    // Segment and its index
    Segment,
    SeekHead,
    Seek,
    SeekId,
    SeekPosition,

    // Info
    Info,
    SegmentUid,
    TimestampScale,
    Duration,
    DateUtc,
    Title,
    MuxingApp,
    WritingApp,

    // Cluster
    Cluster,
    Timestamp,
    SilentTracks,
    SilentTrackNumber,
    Position,
    PrevSize,
    SimpleBlock,
    BlockGroup,
    Block,
    BlockDuration,
    ReferenceBlock,

    // Tracks
    Tracks,
    TrackEntry,
    TrackNumber,
    TrackUid,
    TrackType,
    FlagEnabled,
    FlagDefault,
    FlagForced,
    FlagLacing,
    DefaultDuration,
    Name,
    Language,
    CodecId,
    CodecPrivate,
    CodecName,
    Video,
    PixelWidth,
    PixelHeight,
    DisplayWidth,
    DisplayHeight,
    ColourSpace,
    Audio,
    SamplingFrequency,
    OutputSamplingFrequency,
    Channels,
    BitDepth,

    // Cues
    Cues,
    CuePoint,
    CueTime,
    CueTrackPositions,
    CueTrack,
    CueClusterPosition,
    CueRelativePosition,
    CueDuration,
    CueBlockNumber,
    CueCodecState,
    CueReference,
    CueRefTime,

    // Attachments
    Attachments,
    AttachedFile,
    FileDescription,
    FileName,
    FileMimeType,
    FileData,
    FileUid,

    // Tags
    Tags,
    Tag,
    Targets,
    TargetTypeValue,
    TargetType,
    TagTrackUid,
    SimpleTag,
    TagName,
    TagLanguage,
    TagDefault,
    TagString,
    TagBinary,

    // Anything else
    Unknown(ElementId),
}

impl From<ElementId> for KnownElement {
    fn from(eid: ElementId) -> Self {
        match eid {
            id::EBML => KnownElement::Ebml,
            id::EBML_VERSION => KnownElement::EbmlVersion,
            id::EBML_READ_VERSION => KnownElement::EbmlReadVersion,
            id::EBML_MAX_ID_LENGTH => KnownElement::EbmlMaxIdLength,
            id::EBML_MAX_SIZE_LENGTH => KnownElement::EbmlMaxSizeLength,
            id::DOC_TYPE => KnownElement::DocType,
            id::DOC_TYPE_VERSION => KnownElement::DocTypeVersion,
            id::DOC_TYPE_READ_VERSION => KnownElement::DocTypeReadVersion,

            id::VOID => KnownElement::Void,
            id::CRC32 => KnownElement::Crc32,

            id::SEGMENT => KnownElement::Segment,
            id::SEEK_HEAD => KnownElement::SeekHead,
            id::SEEK => KnownElement::Seek,
            id::SEEK_ID => KnownElement::SeekId,
            id::SEEK_POSITION => KnownElement::SeekPosition,

            id::INFO => KnownElement::Info,
            id::SEGMENT_UID => KnownElement::SegmentUid,
            id::TIMESTAMP_SCALE => KnownElement::TimestampScale,
            id::DURATION => KnownElement::Duration,
            id::DATE_UTC => KnownElement::DateUtc,
            id::TITLE => KnownElement::Title,
            id::MUXING_APP => KnownElement::MuxingApp,
            id::WRITING_APP => KnownElement::WritingApp,

            id::CLUSTER => KnownElement::Cluster,
            id::TIMESTAMP => KnownElement::Timestamp,
            id::SILENT_TRACKS => KnownElement::SilentTracks,
            id::SILENT_TRACK_NUMBER => KnownElement::SilentTrackNumber,
            id::POSITION => KnownElement::Position,
            id::PREV_SIZE => KnownElement::PrevSize,
            id::SIMPLE_BLOCK => KnownElement::SimpleBlock,
            id::BLOCK_GROUP => KnownElement::BlockGroup,
            id::BLOCK => KnownElement::Block,
            id::BLOCK_DURATION => KnownElement::BlockDuration,
            id::REFERENCE_BLOCK => KnownElement::ReferenceBlock,

            id::TRACKS => KnownElement::Tracks,
            id::TRACK_ENTRY => KnownElement::TrackEntry,
            id::TRACK_NUMBER => KnownElement::TrackNumber,
            id::TRACK_UID => KnownElement::TrackUid,
            id::TRACK_TYPE => KnownElement::TrackType,
            id::FLAG_ENABLED => KnownElement::FlagEnabled,
            id::FLAG_DEFAULT => KnownElement::FlagDefault,
            id::FLAG_FORCED => KnownElement::FlagForced,
            id::FLAG_LACING => KnownElement::FlagLacing,
            id::DEFAULT_DURATION => KnownElement::DefaultDuration,
            id::NAME => KnownElement::Name,
            id::LANGUAGE => KnownElement::Language,
            id::CODEC_ID => KnownElement::CodecId,
            id::CODEC_PRIVATE => KnownElement::CodecPrivate,
            id::CODEC_NAME => KnownElement::CodecName,
            id::VIDEO => KnownElement::Video,
            id::PIXEL_WIDTH => KnownElement::PixelWidth,
            id::PIXEL_HEIGHT => KnownElement::PixelHeight,
            id::DISPLAY_WIDTH => KnownElement::DisplayWidth,
            id::DISPLAY_HEIGHT => KnownElement::DisplayHeight,
            id::COLOUR_SPACE => KnownElement::ColourSpace,
            id::AUDIO => KnownElement::Audio,
            id::SAMPLING_FREQUENCY => KnownElement::SamplingFrequency,
            id::OUTPUT_SAMPLING_FREQUENCY => KnownElement::OutputSamplingFrequency,
            id::CHANNELS => KnownElement::Channels,
            id::BIT_DEPTH => KnownElement::BitDepth,

            id::CUES => KnownElement::Cues,
            id::CUE_POINT => KnownElement::CuePoint,
            id::CUE_TIME => KnownElement::CueTime,
            id::CUE_TRACK_POSITIONS => KnownElement::CueTrackPositions,
            id::CUE_TRACK => KnownElement::CueTrack,
            id::CUE_CLUSTER_POSITION => KnownElement::CueClusterPosition,
            id::CUE_RELATIVE_POSITION => KnownElement::CueRelativePosition,
            id::CUE_DURATION => KnownElement::CueDuration,
            id::CUE_BLOCK_NUMBER => KnownElement::CueBlockNumber,
            id::CUE_CODEC_STATE => KnownElement::CueCodecState,
            id::CUE_REFERENCE => KnownElement::CueReference,
            id::CUE_REF_TIME => KnownElement::CueRefTime,

            id::ATTACHMENTS => KnownElement::Attachments,
            id::ATTACHED_FILE => KnownElement::AttachedFile,
            id::FILE_DESCRIPTION => KnownElement::FileDescription,
            id::FILE_NAME => KnownElement::FileName,
            id::FILE_MIME_TYPE => KnownElement::FileMimeType,
            id::FILE_DATA => KnownElement::FileData,
            id::FILE_UID => KnownElement::FileUid,

            id::TAGS => KnownElement::Tags,
            id::TAG => KnownElement::Tag,
            id::TARGETS => KnownElement::Targets,
            id::TARGET_TYPE_VALUE => KnownElement::TargetTypeValue,
            id::TARGET_TYPE => KnownElement::TargetType,
            id::TAG_TRACK_UID => KnownElement::TagTrackUid,
            id::SIMPLE_TAG => KnownElement::SimpleTag,
            id::TAG_NAME => KnownElement::TagName,
            id::TAG_LANGUAGE => KnownElement::TagLanguage,
            id::TAG_DEFAULT => KnownElement::TagDefault,
            id::TAG_STRING => KnownElement::TagString,
            id::TAG_BINARY => KnownElement::TagBinary,

            _ => KnownElement::Unknown(eid),
        }
    }
}

impl KnownElement {
    pub fn class(&self) -> ElementClass {
        use KnownElement::*;
        match self {
            Cluster => ElementClass::Bulk,

            Ebml | Segment | SeekHead | Seek | Info | SilentTracks | BlockGroup | Tracks
            | TrackEntry | Video | Audio | Cues | CuePoint | CueTrackPositions | CueReference
            | Attachments | AttachedFile | Tags | Tag | Targets | SimpleTag => {
                ElementClass::Master
            }

            EbmlVersion | EbmlReadVersion | EbmlMaxIdLength | EbmlMaxSizeLength
            | DocTypeVersion | DocTypeReadVersion | SeekPosition | TimestampScale | Timestamp
            | SilentTrackNumber | Position | PrevSize | BlockDuration | TrackNumber | TrackUid
            | TrackType | FlagEnabled | FlagDefault | FlagForced | FlagLacing | DefaultDuration
            | PixelWidth | PixelHeight | DisplayWidth | DisplayHeight | Channels | BitDepth
            | CueTime | CueTrack | CueClusterPosition | CueRelativePosition | CueDuration
            | CueBlockNumber | CueCodecState | CueRefTime | FileUid | TargetTypeValue
            | TagTrackUid | TagDefault => ElementClass::UInt,

            ReferenceBlock => ElementClass::Int,

            Duration | SamplingFrequency | OutputSamplingFrequency => ElementClass::Float,

            DocType | Language | CodecId | FileMimeType | TargetType | TagLanguage => {
                ElementClass::Ascii
            }

            Title | MuxingApp | WritingApp | Name | CodecName | FileDescription | FileName
            | TagName | TagString => ElementClass::Utf8,

            DateUtc => ElementClass::Date,

            SegmentUid => ElementClass::Guid,

            Void | Crc32 | SeekId | SimpleBlock | Block | CodecPrivate | ColourSpace
            | FileData | TagBinary => ElementClass::Binary,

            Unknown(_) => ElementClass::Unknown,
        }
    }

    pub fn full_name(&self) -> &'static str {
        use KnownElement::*;
        match self {
            Ebml => "EBML",
            EbmlVersion => "EBMLVersion",
            EbmlReadVersion => "EBMLReadVersion",
            EbmlMaxIdLength => "EBMLMaxIDLength",
            EbmlMaxSizeLength => "EBMLMaxSizeLength",
            DocType => "DocType",
            DocTypeVersion => "DocTypeVersion",
            DocTypeReadVersion => "DocTypeReadVersion",
            Void => "Void",
            Crc32 => "CRC-32",
            Segment => "Segment",
            SeekHead => "SeekHead",
            Seek => "Seek",
            SeekId => "SeekID",
            SeekPosition => "SeekPosition",
            Info => "Info",
            SegmentUid => "SegmentUID",
            TimestampScale => "TimestampScale",
            Duration => "Duration",
            DateUtc => "DateUTC",
            Title => "Title",
            MuxingApp => "MuxingApp",
            WritingApp => "WritingApp",
            Cluster => "Cluster",
            Timestamp => "Timestamp",
            SilentTracks => "SilentTracks",
            SilentTrackNumber => "SilentTrackNumber",
            Position => "Position",
            PrevSize => "PrevSize",
            SimpleBlock => "SimpleBlock",
            BlockGroup => "BlockGroup",
            Block => "Block",
            BlockDuration => "BlockDuration",
            ReferenceBlock => "ReferenceBlock",
            Tracks => "Tracks",
            TrackEntry => "TrackEntry",
            TrackNumber => "TrackNumber",
            TrackUid => "TrackUID",
            TrackType => "TrackType",
            FlagEnabled => "FlagEnabled",
            FlagDefault => "FlagDefault",
            FlagForced => "FlagForced",
            FlagLacing => "FlagLacing",
            DefaultDuration => "DefaultDuration",
            Name => "Name",
            Language => "Language",
            CodecId => "CodecID",
            CodecPrivate => "CodecPrivate",
            CodecName => "CodecName",
            Video => "Video",
            PixelWidth => "PixelWidth",
            PixelHeight => "PixelHeight",
            DisplayWidth => "DisplayWidth",
            DisplayHeight => "DisplayHeight",
            ColourSpace => "ColourSpace",
            Audio => "Audio",
            SamplingFrequency => "SamplingFrequency",
            OutputSamplingFrequency => "OutputSamplingFrequency",
            Channels => "Channels",
            BitDepth => "BitDepth",
            Cues => "Cues",
            CuePoint => "CuePoint",
            CueTime => "CueTime",
            CueTrackPositions => "CueTrackPositions",
            CueTrack => "CueTrack",
            CueClusterPosition => "CueClusterPosition",
            CueRelativePosition => "CueRelativePosition",
            CueDuration => "CueDuration",
            CueBlockNumber => "CueBlockNumber",
            CueCodecState => "CueCodecState",
            CueReference => "CueReference",
            CueRefTime => "CueRefTime",
            Attachments => "Attachments",
            AttachedFile => "AttachedFile",
            FileDescription => "FileDescription",
            FileName => "FileName",
            FileMimeType => "FileMimeType",
            FileData => "FileData",
            FileUid => "FileUID",
            Tags => "Tags",
            Tag => "Tag",
            Targets => "Targets",
            TargetTypeValue => "TargetTypeValue",
            TargetType => "TargetType",
            TagTrackUid => "TagTrackUID",
            SimpleTag => "SimpleTag",
            TagName => "TagName",
            TagLanguage => "TagLanguage",
            TagDefault => "TagDefault",
            TagString => "TagString",
            TagBinary => "TagBinary",
            Unknown(_) => "Unknown",
        }
    }
}
