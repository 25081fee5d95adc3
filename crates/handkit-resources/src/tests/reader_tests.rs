use super::*;

#[test]
fn reads_big_endian_values() {
    let data = [
        0x12, 0x34, // i16
        0xFF, 0xFE, // i16 -2
        0x00, 0x11, 0x22, 0x33, // i32
        0x3F, 0x80, 0x00, 0x00, // f32 1.0
        0x01, 0x00, // bools
    ];
    let mut reader = ByteReader::new(&data);
    assert_eq!(reader.read_i16().unwrap(), 0x1234);
    assert_eq!(reader.read_i16().unwrap(), -2);
    assert_eq!(reader.read_i32().unwrap(), 0x112233);
    assert_eq!(reader.read_f32().unwrap(), 1.0);
    assert!(reader.read_bool().unwrap());
    assert!(!reader.read_bool().unwrap());
    assert!(reader.is_at_end());
}

#[test]
fn reads_length_prefixed_strings() {
    let data = [0x00, 0x03, b'a', b'b', b'c', 0x00, 0x00];
    let mut reader = ByteReader::new(&data);
    assert_eq!(reader.read_utf().unwrap(), "abc");
    assert_eq!(reader.read_utf().unwrap(), "");
}

#[test]
fn truncated_read_reports_offset() {
    let data = [0x00, 0x05, b'a'];
    let mut reader = ByteReader::new(&data);
    let err = reader.read_utf().unwrap_err();
    match err {
        ResourceError::CorruptResourceFile { offset, kind } => {
            assert_eq!(offset, 2);
            assert_eq!(kind, CorruptKind::UnexpectedEof { needed: 4 });
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn negative_counts_are_corrupt() {
    let mut reader = ByteReader::new(&[0xFF, 0xFF]);
    assert_eq!(
        reader.read_count().unwrap_err().corrupt_kind(),
        Some(&CorruptKind::NegativeCount(-1))
    );

    let mut reader = ByteReader::new(&[0x80, 0x00, 0x00, 0x00]);
    assert_eq!(
        reader.read_len().unwrap_err().corrupt_kind(),
        Some(&CorruptKind::NegativeCount(i32::MIN))
    );
}

#[test]
fn invalid_utf8_is_corrupt() {
    let mut reader = ByteReader::new(&[0x00, 0x01, 0xFF]);
    assert_eq!(
        reader.read_utf().unwrap_err().corrupt_kind(),
        Some(&CorruptKind::InvalidUtf8)
    );
}

#[test]
fn strings_use_java_modified_utf8() {
    let data = [
        0x00, 0x04, b'a', 0xC0, 0x80, b'b', // embedded NUL
        0x00, 0x06, 0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80, // U+1F600 as a surrogate pair
    ];
    let mut reader = ByteReader::new(&data);
    assert_eq!(reader.read_utf().unwrap(), "a\0b");
    assert_eq!(reader.read_utf().unwrap(), "\u{1F600}");
    assert!(reader.is_at_end());
}
