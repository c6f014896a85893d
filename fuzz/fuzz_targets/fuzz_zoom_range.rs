#![no_main]

use libfuzzer_sys::fuzz_target;
use tilebake::domain::value_objects::ZoomRange;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(range) = input.parse::<ZoomRange>() {
            assert!(range.min() <= range.max());
        }
    }
});
