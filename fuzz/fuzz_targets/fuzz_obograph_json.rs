#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz obographs document parsing - this should never panic
    if let Ok(doc) = serde_json::from_slice::<ontofactory::GraphDocument>(data) {
        let _ = doc.node_count();
        let _ = doc.edge_count();
    }
});
