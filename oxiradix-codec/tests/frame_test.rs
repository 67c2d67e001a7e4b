//! Frame container integration tests.

use oxiradix_codec::{
    BitString, Configuration, OxiRadixError, bytes_to_bits, configure, decode, encode, is_frame,
    read_frame, write_frame,
};

#[test]
fn test_frame_roundtrip_every_power() {
    let bits = bytes_to_bits(b"The quick brown fox jumps over the lazy dog. ");
    for (base, power) in Configuration::all_base_powers() {
        let cfg = configure(base.value(), power, 77).unwrap();
        let stream = encode(&bits, &cfg);
        let frame = write_frame(&stream);

        assert!(is_frame(&frame));
        let parsed = read_frame(&frame).expect("frame should parse");
        assert_eq!(parsed, stream);
        assert_eq!(decode(&parsed, &cfg).unwrap(), bits);
    }
}

#[test]
fn test_empty_stream_frame() {
    let cfg = configure(5, 125, 10).unwrap();
    let stream = encode(&BitString::new(), &cfg);
    let frame = write_frame(&stream);
    assert_eq!(frame.len(), oxiradix_codec::frame::HEADER_SIZE);
    assert!(decode(&read_frame(&frame).unwrap(), &cfg).unwrap().is_empty());
}

#[test]
fn test_frame_decoded_with_wrong_config() {
    let cfg = configure(5, 625, 40).unwrap();
    let frame = write_frame(&encode(&BitString::repeat(true, 50), &cfg));
    let stream = read_frame(&frame).unwrap();

    let other = configure(5, 625, 41).unwrap();
    assert!(matches!(
        decode(&stream, &other),
        Err(OxiRadixError::ConfigurationMismatch { .. })
    ));
}

#[test]
fn test_not_a_frame() {
    assert!(!is_frame(b"{\"blocks\":[]}"));
    assert!(!is_frame(b"ORD"));
}
