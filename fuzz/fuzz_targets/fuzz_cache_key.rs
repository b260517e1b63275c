#![no_main]

use libfuzzer_sys::fuzz_target;

use ontofactory::CacheKey;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = CacheKey::parse(text);
        let key = CacheKey::from_locator(text);
        assert_eq!(CacheKey::parse(key.as_str()), Some(key));
    }
});
