use mkvbox::elements::ElementId;
use mkvbox::{ElementReader, Error, vint};
use std::io::Cursor;

fn reader_over(bytes: Vec<u8>) -> Cursor<Vec<u8>> {
    Cursor::new(bytes)
}

#[test]
fn id_round_trip_every_length() {
    // One ID per encoded length: marker bit at the right position, some
    // payload bits set.
    for len in 1..=8usize {
        let marker = 1u64 << (7 * len);
        let value = marker | (marker >> 3) | 1;
        let bytes = vint::encode_id(ElementId(value)).unwrap();
        assert_eq!(bytes.len(), len, "length {len}");

        let mut cur = reader_over(bytes);
        let mut r = ElementReader::whole(&mut cur).unwrap();
        assert_eq!(r.read_id().unwrap(), ElementId(value), "length {len}");
    }
}

#[test]
fn id_keeps_marker_bit() {
    // 0x81 and 0x4001 carry the same payload bits (1) at different lengths;
    // with the marker kept they stay distinct.
    let one_byte = vint::encode_id(ElementId(0x81)).unwrap();
    let two_byte = vint::encode_id(ElementId(0x4001)).unwrap();

    let mut cur = reader_over(one_byte);
    let mut r = ElementReader::whole(&mut cur).unwrap();
    let a = r.read_id().unwrap();

    let mut cur = reader_over(two_byte);
    let mut r = ElementReader::whole(&mut cur).unwrap();
    let b = r.read_id().unwrap();

    assert_ne!(a, b);
}

#[test]
fn size_round_trip_every_length() {
    for len in 1..=8usize {
        // Largest non-sentinel value of this length.
        let value = vint::unknown_size_sentinel(len) - 1;
        let bytes = vint::encode_size(value, Some(len)).unwrap();
        assert_eq!(bytes.len(), len);

        let mut cur = reader_over(bytes);
        let mut r = ElementReader::whole(&mut cur).unwrap();
        assert_eq!(r.read_size().unwrap(), Some(value), "length {len}");
    }
}

#[test]
fn size_round_trip_forced_wide_encoding() {
    // The same value survives non-minimal encodings.
    for len in 2..=8usize {
        let bytes = vint::encode_size(126, Some(len)).unwrap();
        let mut cur = reader_over(bytes);
        let mut r = ElementReader::whole(&mut cur).unwrap();
        assert_eq!(r.read_size().unwrap(), Some(126));
    }
}

#[test]
fn only_the_all_ones_pattern_is_unknown_size() {
    for len in 1..=8usize {
        let mut cur = reader_over(vint::encode_unknown_size(len));
        let mut r = ElementReader::whole(&mut cur).unwrap();
        assert_eq!(r.read_size().unwrap(), None, "length {len}");

        let below = vint::unknown_size_sentinel(len) - 1;
        let mut cur = reader_over(vint::encode_size(below, Some(len)).unwrap());
        let mut r = ElementReader::whole(&mut cur).unwrap();
        assert_eq!(r.read_size().unwrap(), Some(below), "length {len}");
    }
}

#[test]
fn sentinel_value_cannot_be_encoded_as_a_size() {
    assert!(vint::encode_size(127, Some(1)).is_err());
    // ...but the minimal encoder just widens it.
    let bytes = vint::encode_size(127, None).unwrap();
    assert_eq!(bytes.len(), 2);
}

#[test]
fn zero_first_byte_is_malformed() {
    let mut cur = reader_over(vec![0x00, 0xff]);
    let mut r = ElementReader::whole(&mut cur).unwrap();
    assert!(matches!(
        r.read_id().unwrap_err(),
        Error::MalformedVarInt { offset: 0 }
    ));

    let mut cur = reader_over(vec![0x00, 0xff]);
    let mut r = ElementReader::whole(&mut cur).unwrap();
    assert!(matches!(
        r.read_size().unwrap_err(),
        Error::MalformedVarInt { offset: 0 }
    ));
}

#[test]
fn truncated_vint_is_rejected() {
    // 0x40 declares two bytes; only one is present.
    let mut cur = reader_over(vec![0x40]);
    let mut r = ElementReader::whole(&mut cur).unwrap();
    assert!(r.read_size().is_err());
}

#[test]
fn invalid_id_values_cannot_be_encoded() {
    // No marker bit in a valid position.
    assert!(vint::encode_id(ElementId(0)).is_err());
    assert!(vint::encode_id(ElementId(0x1ff)).is_err());
}

#[test]
fn slice_parse_round_trip() {
    let mut buf = vec![0xaa]; // leading garbage, parse starts at 1
    buf.extend(vint::encode_size(300, None).unwrap());
    let (value, consumed) = vint::parse_vint(&buf, 1).unwrap();
    assert_eq!(value, 300);
    assert_eq!(consumed, 2);
}

#[test]
fn slice_parse_rejects_overrun() {
    let buf = vec![0x40]; // declares 2 bytes, slice has 1
    assert!(vint::parse_vint(&buf, 0).is_err());
}
