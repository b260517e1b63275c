#![no_main]

use libfuzzer_sys::fuzz_target;

use ontofactory::domain::services::{classify, ClassifierSettings};
use ontofactory::Handle;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Classification must accept every valid handle without panicking
        if let Ok(handle) = Handle::new(raw) {
            let settings = ClassifierSettings::default();
            let _ = classify(&handle, &settings, &|_| false);
            let _ = classify(&handle, &settings, &|_| true);
        }
    }
});
