use clap::Parser;
use mkvbox::Segment;
use serde::Serialize;
use std::fs::File;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "List the media samples (blocks) of one track")]
struct Args {
    /// Matroska/WebM file path
    path: String,

    /// Track number; defaults to the first video track
    #[arg(long)]
    track: Option<u64>,

    /// Stop after this many samples (0 = no limit)
    #[arg(long, default_value_t = 0)]
    limit: usize,

    /// Output as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SampleRow {
    /// 0-based sample index within the track
    index: usize,

    /// Index of the cluster holding the sample
    cluster: usize,

    /// Presentation time in timestamp ticks
    pts: i64,

    /// Presentation time in seconds
    seconds: f64,

    /// Absolute payload offset in the file
    offset: u64,

    /// Payload size in bytes
    size: u64,

    /// Whether the block is flagged as a keyframe
    keyframe: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut file = File::open(&args.path)?;
    let segment = Segment::read(&mut file)?;

    let track = match args.track {
        Some(n) => n,
        None => segment
            .video_track()
            .or_else(|| segment.tracks.first())
            .map(|t| t.number)
            .ok_or_else(|| anyhow::anyhow!("no tracks in file"))?,
    };
    let scale = segment.timestamp_scale();

    let mut rows = Vec::new();
    'clusters: for (cluster_index, placeholder) in segment.clusters.iter().enumerate() {
        let cluster = placeholder.resolve(&mut file)?;
        for block in cluster.track_blocks(track) {
            let pts = cluster.block_time(block);
            rows.push(SampleRow {
                index: rows.len(),
                cluster: cluster_index,
                pts,
                seconds: pts as f64 * scale as f64 / 1e9,
                offset: block.payload_start,
                size: block.payload_len,
                keyframe: block.is_keyframe(),
            });
            if args.limit != 0 && rows.len() >= args.limit {
                break 'clusters;
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("track {track}, {} sample(s)", rows.len());
    println!("{:>8} {:>8} {:>12} {:>10} {:>12} {:>10}  key", "index", "cluster", "pts", "seconds", "offset", "size");
    for row in &rows {
        println!(
            "{:>8} {:>8} {:>12} {:>10.3} {:>12} {:>10}  {}",
            row.index,
            row.cluster,
            row.pts,
            row.seconds,
            row.offset,
            row.size,
            if row.keyframe { "*" } else { "" }
        );
    }
    Ok(())
}
