use std::env;
use std::fs::File;

fn main() -> anyhow::Result<()> {
    let path = env::args().nth(1).expect("usage: simple <file.mkv>");
    let mut file = File::open(path)?;

    let segment = mkvbox::Segment::read(&mut file)?;
    println!(
        "{} track(s), {} cluster(s), {} cue point(s)",
        segment.tracks.len(),
        segment.clusters.len(),
        segment.cues.len()
    );
    for track in &segment.tracks {
        println!(
            "  track {}: {:?} {}",
            track.number,
            track.track_type,
            track.codec_id.as_deref().unwrap_or("?")
        );
    }
    Ok(())
}
