#![no_main]

use libfuzzer_sys::fuzz_target;
use shape::{decode, decode7, encode, encode7, LonLat, DECODE_PRECISION, ENCODE_PRECISION};

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must survive a re-encode with the same point count.
    if let Ok(points) = decode::<Vec<LonLat>>(data, DECODE_PRECISION) {
        let again: Vec<LonLat> =
            decode(&encode(&points, ENCODE_PRECISION), DECODE_PRECISION).unwrap();
        assert_eq!(again.len(), points.len());
    }
    if let Ok(points) = decode7::<Vec<LonLat>>(data, DECODE_PRECISION) {
        let again: Vec<LonLat> =
            decode7(&encode7(&points, ENCODE_PRECISION), DECODE_PRECISION).unwrap();
        assert_eq!(again.len(), points.len());
    }
});
