use mkvbox::{Segment, SeekIndex, find_seek_position};
use std::env;
use std::fs::File;

fn main() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);
    let path = args.next().expect("usage: seek <file.mkv> <seconds>");
    let seconds: f64 = args
        .next()
        .expect("usage: seek <file.mkv> <seconds>")
        .parse()?;

    let mut file = File::open(path)?;
    let segment = Segment::read(&mut file)?;
    let track = segment
        .video_track()
        .ok_or_else(|| anyhow::anyhow!("no video track"))?
        .number;

    let index = SeekIndex::build(&segment, track);
    let target = (seconds * 1e9 / segment.timestamp_scale() as f64) as i64;

    match find_seek_position(&segment, &index, &mut file, target)? {
        Some(position) => println!(
            "seek to {seconds} s -> cluster {}, block {}, time {} ticks",
            position.cluster, position.block, position.time
        ),
        None => println!("nothing to seek to"),
    }
    Ok(())
}
