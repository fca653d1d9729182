use std::collections::{LinkedList, VecDeque};

use shape::{
    decode, decode7, decode7_samples, decode_str, encode, encode7, encode7_samples,
    encode_string, LonLat, Precision, Shape5Decoder, VarintError, DECODE_PRECISION,
    ENCODE_PRECISION,
};

fn route() -> Vec<LonLat> {
    vec![
        LonLat::new(-122.483_696, 38.58),
        LonLat::new(-122.483_1, 38.581_2),
        LonLat::new(-122.47, 38.6),
        LonLat::new(-122.47, 38.6),
        LonLat::new(-121.9, 37.33),
    ]
}

fn assert_close(got: &[LonLat], want: &[LonLat], tolerance: f64) {
    assert_eq!(got.len(), want.len());
    for (a, b) in got.iter().zip(want) {
        assert!(a.approx_eq(b, tolerance), "{a:?} != {b:?}");
    }
}

#[test]
fn single_point_polyline5_roundtrip() {
    let precision = Precision::polyline5();
    let points = [LonLat::new(-122.483_696, 38.58)];
    let encoded = encode(&points, precision.encode_factor());
    let decoded: Vec<LonLat> = decode(&encoded, precision.decode_factor()).unwrap();
    assert_close(&decoded, &points, 1e-5);
}

#[test]
fn reference_polyline_first_point() {
    let encoded = encode_string(&[(-120.2, 38.5)], Precision::polyline5().encode_factor());
    assert_eq!(encoded, "_p~iF~ps|U");
    let decoded: Vec<LonLat> = decode_str(&encoded, 1e-5).unwrap();
    assert_close(&decoded, &[LonLat::new(-120.2, 38.5)], 1e-9);
}

#[test]
fn default_precision_roundtrip_both_formats() {
    let points = route();
    let five: Vec<LonLat> = decode(&encode(&points, ENCODE_PRECISION), DECODE_PRECISION).unwrap();
    let seven: Vec<LonLat> =
        decode7(&encode7(&points, ENCODE_PRECISION), DECODE_PRECISION).unwrap();
    assert_close(&five, &points, 5e-7);
    assert_close(&seven, &points, 5e-7);
}

#[test]
fn high_precision_roundtrip_full_range() {
    let precision = Precision::high();
    let points = vec![
        LonLat::new(180.0, 90.0),
        LonLat::new(-180.0, -90.0),
        LonLat::new(179.999_999_9, -89.999_999_9),
    ];
    let five: Vec<LonLat> = decode(
        &encode(&points, precision.encode_factor()),
        precision.decode_factor(),
    )
    .unwrap();
    let seven: Vec<LonLat> = decode7(
        &encode7(&points, precision.encode_factor()),
        precision.decode_factor(),
    )
    .unwrap();
    assert_close(&five, &points, 1e-7);
    assert_close(&seven, &points, 1e-7);
}

#[test]
fn container_choice_does_not_change_result() {
    let encoded = encode(&route(), ENCODE_PRECISION);
    let vec: Vec<LonLat> = decode(&encoded, DECODE_PRECISION).unwrap();
    let list: LinkedList<LonLat> = decode(&encoded, DECODE_PRECISION).unwrap();
    let deque: VecDeque<LonLat> = decode(&encoded, DECODE_PRECISION).unwrap();
    assert_eq!(vec, list.into_iter().collect::<Vec<_>>());
    assert_eq!(vec, deque.into_iter().collect::<Vec<_>>());
}

#[test]
fn mismatched_precision_scales_output() {
    let encoded = encode(&[LonLat::new(1.0, 2.0)], 100_000);
    let decoded: Vec<LonLat> = decode(&encoded, DECODE_PRECISION).unwrap();
    assert_close(&decoded, &[LonLat::new(0.1, 0.2)], 1e-9);
}

#[test]
fn truncated_buffer_yields_no_points() {
    let mut encoded = encode(&route(), ENCODE_PRECISION);
    encoded.pop();
    let result: Result<Vec<LonLat>, VarintError> = decode(&encoded, DECODE_PRECISION);
    assert!(matches!(result, Err(VarintError::MalformedStream { .. })));

    let mut encoded = encode7(&route(), ENCODE_PRECISION);
    encoded.pop();
    let result: Result<Vec<LonLat>, VarintError> = decode7(&encoded, DECODE_PRECISION);
    assert!(matches!(result, Err(VarintError::MalformedStream { .. })));
}

#[test]
fn lazy_decoder_matches_bulk_decode() {
    let encoded = encode(&route(), ENCODE_PRECISION);
    let mut decoder = Shape5Decoder::<LonLat>::new(&encoded);
    let mut lazy = Vec::new();
    while !decoder.is_empty() {
        lazy.push(decoder.pop().unwrap());
    }
    let bulk: Vec<LonLat> = decode(&encoded, DECODE_PRECISION).unwrap();
    assert_eq!(lazy, bulk);
}

#[test]
fn elevation_profile_roundtrip() {
    let heights = [12.0, 13.5, 13.5, 9.25, -4.0, 1_234.5];
    let encoded = encode7_samples(&heights, 100);
    let decoded = decode7_samples(&encoded, 0.01).unwrap();
    assert_eq!(decoded.len(), heights.len());
    for (got, want) in decoded.iter().zip(heights) {
        assert!((got - want).abs() < 1e-9);
    }
}
