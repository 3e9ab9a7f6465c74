use clap::Parser;
use mkvbox::tracks::TrackType;
use serde::Serialize;
use std::fs::File;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Simple Matroska media info (like mkvinfo)")]
struct Args {
    /// Matroska/WebM file path
    path: String,

    /// Output as JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TrackSummary {
    number: u64,
    track_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    codec: Option<String>,

    language: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    sampling_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    channels: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bit_depth: Option<u64>,
}

#[derive(Debug, Serialize)]
struct MediaSummary {
    file: String,
    doc_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    timestamp_scale: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    duration_seconds: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    muxing_app: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    writing_app: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    tracks: Vec<TrackSummary>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<String>,

    cluster_count: usize,
    cue_count: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut file = File::open(&args.path)?;
    let (head, segment) = mkvbox::open(&mut file)?;

    let scale = segment.timestamp_scale();
    let info = segment.info.clone().unwrap_or_default();

    let tracks = segment
        .tracks
        .iter()
        .map(|t| TrackSummary {
            number: t.number,
            track_type: track_type_name(t.track_type).to_string(),
            codec: t.codec_id.clone(),
            language: t.language.clone(),
            width: t.video.as_ref().map(|v| v.display_size().0),
            height: t.video.as_ref().map(|v| v.display_size().1),
            sampling_rate: t.audio.as_ref().map(|a| a.output_rate()),
            channels: t.audio.as_ref().map(|a| a.channels),
            bit_depth: t.audio.as_ref().and_then(|a| a.bit_depth),
        })
        .collect();

    let duration_seconds = info.duration_ns().map(|ns| ns as f64 / 1e9);
    let summary = MediaSummary {
        file: args.path.clone(),
        doc_type: head.doc_type,
        title: info.title,
        timestamp_scale: scale,
        duration_seconds,
        muxing_app: info.muxing_app,
        writing_app: info.writing_app,
        tracks,
        attachments: segment
            .attachments
            .iter()
            .filter_map(|a| a.name.clone())
            .collect(),
        cluster_count: segment.clusters.len(),
        cue_count: segment.cues.len(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("File:            {}", summary.file);
    println!("Doc type:        {}", summary.doc_type);
    if let Some(title) = &summary.title {
        println!("Title:           {title}");
    }
    println!("Timestamp scale: {} ns/tick", summary.timestamp_scale);
    if let Some(secs) = summary.duration_seconds {
        println!("Duration:        {secs:.3} s");
    }
    if let Some(app) = &summary.muxing_app {
        println!("Muxing app:      {app}");
    }
    if let Some(app) = &summary.writing_app {
        println!("Writing app:     {app}");
    }
    println!(
        "Clusters:        {} ({} cue points)",
        summary.cluster_count, summary.cue_count
    );
    for t in &summary.tracks {
        let mut details = Vec::new();
        if let (Some(w), Some(h)) = (t.width, t.height) {
            details.push(format!("{w}x{h}"));
        }
        if let Some(rate) = t.sampling_rate {
            details.push(format!("{rate} Hz"));
        }
        if let Some(ch) = t.channels {
            details.push(format!("{ch} ch"));
        }
        if let Some(bits) = t.bit_depth {
            details.push(format!("{bits} bit"));
        }
        println!(
            "Track {}: {} {} [{}] {}",
            t.number,
            t.track_type,
            t.codec.as_deref().unwrap_or("?"),
            t.language,
            details.join(", ")
        );
    }
    for name in &summary.attachments {
        println!("Attachment: {name}");
    }
    Ok(())
}

fn track_type_name(t: TrackType) -> &'static str {
    match t {
        TrackType::Video => "video",
        TrackType::Audio => "audio",
        TrackType::Complex => "complex",
        TrackType::Logo => "logo",
        TrackType::Subtitle => "subtitle",
        TrackType::Buttons => "buttons",
        TrackType::Control => "control",
        TrackType::Unknown(_) => "other",
    }
}
