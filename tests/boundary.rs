mod common;

use common::EbmlWriter;
use mkvbox::elements::{ElementId, id};
use mkvbox::info::Info;
use mkvbox::{ElementReader, Error};
use std::io::Cursor;

// IDs deliberately absent from the known-element table.
const STRANGE_ONE: ElementId = ElementId(0xee);
const STRANGE_TWO: ElementId = ElementId(0x6fab);

/// An Info composite with unknown elements and trailing padding interleaved
/// in different spots. Decoding must consume exactly the declared size and
/// the recognized fields must come out the same regardless of ordering.
#[test]
fn unknown_children_and_padding_do_not_disturb_known_fields() {
    let orderings: [&dyn Fn(&mut EbmlWriter); 2] = [
        &|w: &mut EbmlWriter| {
            w.uint(STRANGE_ONE, 42);
            w.uint(id::TIMESTAMP_SCALE, 250_000);
            w.element(STRANGE_TWO, b"opaque");
            w.string(id::MUXING_APP, "writer");
            w.void(9);
        },
        &|w: &mut EbmlWriter| {
            w.uint(id::TIMESTAMP_SCALE, 250_000);
            w.void(9);
            w.string(id::MUXING_APP, "writer");
            w.uint(STRANGE_ONE, 42);
            w.element(STRANGE_TWO, b"opaque");
        },
    ];

    for (i, fill) in orderings.iter().enumerate() {
        let mut w = EbmlWriter::new();
        w.master(id::INFO, fill);
        // A trailing sentinel element right after the composite.
        w.uint(id::TIMESTAMP, 77);
        let mut cur = Cursor::new(w.into_bytes());

        let mut r = ElementReader::whole(&mut cur).unwrap();
        assert_eq!(r.read_id().unwrap(), id::INFO);
        let info = r.read_master(|c| Info::read(c)).unwrap();

        assert_eq!(info.timestamp_scale, 250_000, "ordering {i}");
        assert_eq!(info.muxing_app.as_deref(), Some("writer"), "ordering {i}");

        // The cursor sits exactly at the composite's end: the sentinel is
        // next.
        assert_eq!(r.read_id().unwrap(), id::TIMESTAMP, "ordering {i}");
        assert_eq!(r.read_uint().unwrap(), 77, "ordering {i}");
        assert!(r.at_end().unwrap(), "ordering {i}");
    }
}

#[test]
fn child_cursor_rejects_reads_past_its_end() {
    // A uint payload declaring 4 data bytes, but the cursor is cut to 3
    // bytes: size vint (1) + 2 remaining.
    let mut body = mkvbox::vint::encode_size(4, None).unwrap();
    body.extend(0xdead_beef_u32.to_be_bytes());

    let mut cur = Cursor::new(body);
    let mut r = ElementReader::over(&mut cur, 0, Some(3)).unwrap();
    let err = r.read_uint().unwrap_err();
    assert!(
        matches!(err, Error::TruncatedContainer { needed: 4, remaining: 2, .. }),
        "{err:?}"
    );
}

#[test]
fn child_declaring_more_than_its_parent_is_rejected() {
    // Parent (Info) declares 4 payload bytes; its child claims 100. Plenty
    // of bytes follow in the stream, so only the parent boundary can reject
    // the read.
    let mut w = EbmlWriter::new();
    w.buf.extend(mkvbox::vint::encode_id(id::INFO).unwrap());
    w.buf.extend(mkvbox::vint::encode_size(4, None).unwrap());
    w.buf.extend(mkvbox::vint::encode_id(id::TITLE).unwrap());
    w.buf.extend(mkvbox::vint::encode_size(100, None).unwrap());
    w.buf.extend(std::iter::repeat_n(b'x', 120));
    let mut cur = Cursor::new(w.into_bytes());

    let mut r = ElementReader::whole(&mut cur).unwrap();
    assert_eq!(r.read_id().unwrap(), id::INFO);
    let err = r.read_master(|c| Info::read(c)).unwrap_err();
    assert!(matches!(err, Error::TruncatedContainer { .. }), "{err:?}");
}

#[test]
fn no_silent_clamp_on_truncated_stream() {
    // An element whose declared size runs past the physical end of data.
    let mut w = EbmlWriter::new();
    w.buf.extend(mkvbox::vint::encode_id(id::TITLE).unwrap());
    w.buf.extend(mkvbox::vint::encode_size(50, None).unwrap());
    w.buf.extend_from_slice(b"short");
    let mut cur = Cursor::new(w.into_bytes());

    let mut r = ElementReader::whole(&mut cur).unwrap();
    assert_eq!(r.read_id().unwrap(), id::TITLE);
    assert!(matches!(
        r.read_utf8().unwrap_err(),
        Error::TruncatedContainer { .. }
    ));
}

#[test]
fn unknown_size_child_runs_to_parent_boundary() {
    // An unknown-size Cluster as the last child: its cursor inherits the
    // parent's end.
    let mut w = EbmlWriter::new();
    w.master_unknown_size(id::CLUSTER, |w| {
        w.uint(id::TIMESTAMP, 9000);
    });
    let mut cur = Cursor::new(w.into_bytes());

    let mut r = ElementReader::whole(&mut cur).unwrap();
    assert_eq!(r.read_id().unwrap(), id::CLUSTER);
    let timestamp = r
        .read_master(|c| {
            assert_eq!(c.read_id().unwrap(), id::TIMESTAMP);
            let t = c.read_uint()?;
            assert!(c.at_end()?);
            Ok(t)
        })
        .unwrap();
    assert_eq!(timestamp, 9000);
    assert!(r.at_end().unwrap());
}
