#![no_main]

use libfuzzer_sys::fuzz_target;
use tilebake::domain::value_objects::TilesetName;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(name) = TilesetName::parse(raw) {
            assert!(!name.as_str().contains(['/', '\\']));
            assert!(!name.as_str().starts_with('.'));
        }
    }
});
