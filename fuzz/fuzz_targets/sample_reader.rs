#![no_main]

use libfuzzer_sys::fuzz_target;
use varint::{SampleReader, Varint5, Varint7};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let mut reader = SampleReader::new(rest);
    let mut idx = 0usize;
    let mut last = 0i32;

    // Selector bits pick the codec for each read.
    while !reader.is_empty() && idx < 1024 {
        let before = reader.position();
        let result = if (selector >> (idx % 8)) & 1 == 0 {
            reader.read_sample::<Varint5>(last)
        } else {
            reader.read_sample::<Varint7>(last)
        };
        idx += 1;
        match result {
            Ok(value) => {
                assert!(reader.position() > before);
                last = value;
            }
            Err(_) => break,
        }
    }
});
