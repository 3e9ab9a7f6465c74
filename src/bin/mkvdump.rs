use clap::Parser;
use mkvbox::{ElementNode, ElementReader, parse_tree, util};
use std::fs::File;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Dump the EBML element tree of a Matroska/WebM file")]
struct Args {
    /// Matroska/WebM file path
    path: String,

    /// Output as JSON instead of a text tree
    #[arg(long)]
    json: bool,

    /// Recurse into Cluster payloads instead of deferring them
    #[arg(long)]
    clusters: bool,

    /// Hex-dump the payload of every leaf element
    #[arg(long)]
    hex: bool,

    /// Maximum nesting depth shown in text mode
    #[arg(long, default_value_t = 16)]
    max_depth: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut file = File::open(&args.path)?;
    let mut root = ElementReader::whole(&mut file)?;
    let nodes = parse_tree(&mut root, args.clusters)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
        return Ok(());
    }
    for node in &nodes {
        print_node(node, 0, &args, &mut file)?;
    }
    Ok(())
}

fn print_node(
    node: &ElementNode,
    depth: usize,
    args: &Args,
    file: &mut File,
) -> anyhow::Result<()> {
    if depth >= args.max_depth {
        return Ok(());
    }
    let indent = "  ".repeat(depth);
    let size = match node.size {
        Some(n) => n.to_string(),
        None => "?".to_string(),
    };
    match &node.value {
        Some(value) => println!(
            "{indent}{} ({}) @ {:#x} size {size}: {value}",
            node.name, node.id, node.offset
        ),
        None => println!(
            "{indent}{} ({}) @ {:#x} size {size} [{}]",
            node.name, node.id, node.offset, node.class
        ),
    }
    if args.hex && node.children.is_none() {
        if let Some(len) = node.size {
            let shown = len.min(256);
            let bytes = util::read_slice(file, node.payload_offset, shown)?;
            print!("{}", util::hex_dump(&bytes, node.payload_offset));
        }
    }
    if let Some(children) = &node.children {
        for child in children {
            print_node(child, depth + 1, args, file)?;
        }
    }
    Ok(())
}
