#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Rejected rows are fine; a panic is a bug.
        let lines: Vec<&str> = s.lines().collect();
        let _ = factura::filter(&lines);
    }
});
