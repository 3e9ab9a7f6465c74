mod common;

use common::{EbmlWriter, block_payload, cluster, matroska_file, standard_metadata};
use mkvbox::elements::id;
use mkvbox::tracks::TrackType;
use mkvbox::{ElementReader, parse_tree};
use std::io::Cursor;

fn full_file() -> Vec<u8> {
    matroska_file(|w| {
        w.master(id::SEEK_HEAD, |w| {
            w.master(id::SEEK, |w| {
                w.element(id::SEEK_ID, &[0x1c, 0x53, 0xbb, 0x6b]);
                w.uint(id::SEEK_POSITION, 4242);
            });
        });
        standard_metadata(w);
        w.master(id::ATTACHMENTS, |w| {
            w.master(id::ATTACHED_FILE, |w| {
                w.uint(id::FILE_UID, 7);
                w.string(id::FILE_NAME, "cover.png");
                w.string(id::FILE_MIME_TYPE, "image/png");
                w.element(id::FILE_DATA, b"\x89PNGdata");
            });
        });
        w.master(id::TAGS, |w| {
            w.master(id::TAG, |w| {
                w.master(id::TARGETS, |w| {
                    w.uint(id::TARGET_TYPE_VALUE, 50);
                });
                w.master(id::SIMPLE_TAG, |w| {
                    w.string(id::TAG_NAME, "TITLE");
                    w.string(id::TAG_STRING, "Synthetic");
                });
            });
        });
        cluster(w, 0, &[(1, 0, b"videoframe"), (2, 10, b"audioframe")]);
        cluster(w, 1000, &[(1, 0, b"videoframe2")]);
        w.master(id::CUES, |w| {
            w.master(id::CUE_POINT, |w| {
                w.uint(id::CUE_TIME, 0);
                w.master(id::CUE_TRACK_POSITIONS, |w| {
                    w.uint(id::CUE_TRACK, 1);
                    w.uint(id::CUE_CLUSTER_POSITION, 0);
                });
            });
        });
    })
}

#[test]
fn the_whole_segment_decodes() {
    let mut cur = Cursor::new(full_file());
    let (head, segment) = mkvbox::open(&mut cur).unwrap();

    assert_eq!(head.doc_type, "matroska");
    assert_eq!(head.max_id_length, 4);

    let info = segment.info.as_ref().unwrap();
    assert_eq!(info.timestamp_scale, 1_000_000);
    assert_eq!(info.duration, Some(5_000.0));
    assert_eq!(info.duration_ns(), Some(5_000_000_000));
    assert_eq!(info.muxing_app.as_deref(), Some("mkvbox-tests"));

    assert_eq!(segment.tracks.len(), 2);
    let video = segment.video_track().unwrap();
    assert_eq!(video.number, 1);
    assert_eq!(video.codec_id.as_deref(), Some("V_MPEG4/ISO/AVC"));
    assert_eq!(video.video.as_ref().unwrap().display_size(), (1920, 1080));
    let audio = segment.audio_track().unwrap();
    assert_eq!(audio.track_type, TrackType::Audio);
    assert_eq!(audio.audio.as_ref().unwrap().channels, 2);

    assert_eq!(segment.clusters.len(), 2);
    assert_eq!(segment.clusters[1].timestamp, 1000);
    assert_eq!(segment.cues.len(), 1);

    assert_eq!(segment.attachments.len(), 1);
    let attachment = &segment.attachments[0];
    assert_eq!(attachment.name.as_deref(), Some("cover.png"));
    assert_eq!(attachment.read_data(&mut cur).unwrap(), b"\x89PNGdata");

    assert_eq!(segment.tags.len(), 1);
    let tag = &segment.tags[0];
    assert_eq!(tag.targets.target_type_value, 50);
    assert_eq!(tag.simple_tags[0].name.as_deref(), Some("TITLE"));
    assert_eq!(tag.simple_tags[0].value.as_deref(), Some("Synthetic"));
    assert_eq!(tag.simple_tags[0].language, "und");
}

#[test]
fn seek_head_maps_element_types_to_offsets() {
    let mut cur = Cursor::new(full_file());
    let segment = mkvbox::Segment::read(&mut cur).unwrap();

    assert_eq!(
        segment.section_offset(id::CUES),
        Some(segment.position + 4242)
    );
    assert_eq!(segment.section_offset(id::CHANNELS), None);
}

#[test]
fn tree_walk_defers_clusters_by_default() {
    let mut cur = Cursor::new(full_file());
    let mut root = ElementReader::whole(&mut cur).unwrap();
    let nodes = parse_tree(&mut root, false).unwrap();

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].name, "EBML");
    assert_eq!(nodes[1].name, "Segment");

    let segment_children = nodes[1].children.as_ref().unwrap();
    let clusters: Vec<_> = segment_children
        .iter()
        .filter(|n| n.name == "Cluster")
        .collect();
    assert_eq!(clusters.len(), 2);
    for node in &clusters {
        assert_eq!(node.class, "bulk");
        assert!(node.children.is_none());
        assert!(node.size.unwrap() > 0);
    }

    // Scalar leaves come back rendered.
    let info = segment_children.iter().find(|n| n.name == "Info").unwrap();
    let scale = info
        .children
        .as_ref()
        .unwrap()
        .iter()
        .find(|n| n.name == "TimestampScale")
        .unwrap();
    assert_eq!(scale.value.as_deref(), Some("1000000"));
}

#[test]
fn tree_walk_can_recurse_into_clusters() {
    let mut cur = Cursor::new(full_file());
    let mut root = ElementReader::whole(&mut cur).unwrap();
    let nodes = parse_tree(&mut root, true).unwrap();

    let segment_children = nodes[1].children.as_ref().unwrap();
    let first_cluster = segment_children
        .iter()
        .find(|n| n.name == "Cluster")
        .unwrap();
    let blocks: Vec<_> = first_cluster
        .children
        .as_ref()
        .unwrap()
        .iter()
        .filter(|n| n.name == "SimpleBlock")
        .collect();
    assert_eq!(blocks.len(), 2);
}

#[test]
fn tree_geometry_matches_the_placeholders() {
    let bytes = full_file();
    let mut cur = Cursor::new(bytes);
    let segment = mkvbox::Segment::read(&mut cur).unwrap();

    let mut root = ElementReader::whole(&mut cur).unwrap();
    let nodes = parse_tree(&mut root, false).unwrap();
    let segment_node = &nodes[1];
    let cluster_nodes: Vec<_> = segment_node
        .children
        .as_ref()
        .unwrap()
        .iter()
        .filter(|n| n.name == "Cluster")
        .collect();

    for (node, placeholder) in cluster_nodes.iter().zip(&segment.clusters) {
        assert_eq!(node.payload_offset, placeholder.payload_start);
        assert_eq!(node.size, Some(placeholder.payload_len));
        assert_eq!(
            node.offset,
            segment.position + placeholder.segment_position
        );
    }
}

#[test]
fn unknown_size_segment_decodes_to_the_end_of_stream() {
    let mut w = EbmlWriter::new();
    w.buf.extend(common::ebml_head("matroska"));
    w.master_unknown_size(id::SEGMENT, |w| {
        standard_metadata(w);
        w.master(id::CLUSTER, |w| {
            w.uint(id::TIMESTAMP, 0);
            w.element(id::SIMPLE_BLOCK, &block_payload(1, 0, 0x80, b"frame"));
        });
    });
    let mut cur = Cursor::new(w.into_bytes());

    let segment = mkvbox::Segment::read(&mut cur).unwrap();
    assert_eq!(segment.tracks.len(), 2);
    assert_eq!(segment.clusters.len(), 1);
    let resolved = segment.clusters[0].resolve(&mut cur).unwrap();
    assert_eq!(resolved.simple_blocks.len(), 1);
}
