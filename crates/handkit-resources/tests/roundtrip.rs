use std::rc::Rc;

use handkit_resources::prelude::*;
use handkit_resources::{Image, IndexedImage, L10n};
use handkit_ui_graphics::Color;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_table() -> ResourceTable {
    let mut table = ResourceTable::new(FormatVersion::CURRENT);
    table.insert(
        "swatch",
        Resource::Image(Rc::new(Image::Indexed(IndexedImage {
            width: 2,
            height: 1,
            palette: vec![Color(0x000000), Color(0xFFFFFF)],
            pixels: vec![0, 1],
        }))),
    );

    let mut theme = Theme::new("theme1");
    theme.insert("bg.fgColor", ThemeValue::Color(Color(0x112233)));
    theme.insert("bg.bgImage", ThemeValue::Image(Ref::Pending("swatch".into())));
    table.insert("theme1", Resource::Theme(theme));

    let mut l10n = L10n::new(vec!["yes".into(), "no".into()]);
    l10n.insert_language("en", vec!["Yes".into(), "No".into()]);
    l10n.insert_language("fr", vec!["Oui".into(), "Non".into()]);
    table.insert("strings", Resource::L10n(l10n));
    table
}

#[test]
fn bundle_survives_encode_and_decode() {
    init_logging();
    let bytes = ResourceWriter::encode(&sample_table()).expect("encode");
    let table = decode_bytes(&bytes).expect("decode");

    assert_eq!(table.version(), FormatVersion::CURRENT);
    assert_eq!(
        table.names_of(ResourceKind::Image).collect::<Vec<_>>(),
        ["swatch"]
    );

    let theme = table.theme("theme1").expect("theme wires");
    let attributes: Vec<(String, String)> = theme
        .attributes_of("bg")
        .map(|(key, value)| (key.to_owned(), value.to_string()))
        .collect();
    assert_eq!(
        attributes,
        [
            ("fgColor".to_owned(), "112233".to_owned()),
            ("bgImage".to_owned(), "swatch".to_owned()),
        ]
    );

    let strings = table.l10n("strings").expect("l10n");
    assert_eq!(strings.get("fr", "no"), Some("Non"));
    assert_eq!(strings.languages().collect::<Vec<_>>(), ["en", "fr"]);
}

#[test]
fn decoding_reads_from_a_reader() {
    init_logging();
    let bytes = ResourceWriter::encode(&sample_table()).expect("encode");
    let table = decode(bytes.as_slice()).expect("decode");
    assert!(table.contains("theme1"));
    assert_eq!(table.len(), 3);
}

#[test]
fn corrupt_bundle_reports_the_record() {
    init_logging();
    let mut bytes = ResourceWriter::encode(&sample_table()).expect("encode");
    // Record count (2 bytes) and the empty-metadata header record (11).
    bytes[13] = 0x42;
    match decode_bytes(&bytes) {
        Err(ResourceError::CorruptResourceFile { offset, .. }) => assert_eq!(offset, 13),
        other => panic!("expected corrupt stream, got {other:?}"),
    }
}
