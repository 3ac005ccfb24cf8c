use medkit_core::media::MediaPayload;

#[test]
fn parses_base64_data_uri() {
    let media = MediaPayload::from_data_uri("data:image/jpeg;base64,/9j/4AAQ").unwrap();
    assert_eq!(media.mime_type, "image/jpeg");
    assert_eq!(media.bytes[..3], [0xFF, 0xD8, 0xFF]);
}

#[test]
fn round_trips_through_data_uri() {
    let media = MediaPayload::new("image/png", vec![1, 2, 3, 4]);
    assert_eq!(MediaPayload::from_data_uri(&media.to_data_uri()), Some(media));
}

#[test]
fn rejects_malformed_uris() {
    for uri in [
        "",
        "image/png;base64,AAAA",
        "data:image/png,AAAA",
        "data:;base64,AAAA",
        "data:image/png;base64,",
        "data:image/png;base64,@@@@",
        "data:png;base64,AAAA",
    ] {
        assert!(MediaPayload::from_data_uri(uri).is_none(), "{uri}");
    }
}

#[test]
fn debug_output_omits_bytes() {
    let media = MediaPayload::new("image/png", vec![7; 2048]);
    let debug = format!("{media:?}");
    assert!(debug.contains("len: 2048"));
    assert!(!debug.contains("7, 7"));
}
