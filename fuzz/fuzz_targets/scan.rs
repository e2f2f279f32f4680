#![no_main]

use bracecheck::{DEFAULT_DISPLAY_LIMIT, ScanConfig, render_text, scan_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let report = scan_with(s, &ScanConfig::default());

        // Every reported position must name a character of the input
        for diagnostic in report.diagnostics() {
            assert!(diagnostic.position().byte_offset_in(s).is_some());
        }
        let _ = render_text(&report, DEFAULT_DISPLAY_LIMIT);
    }
});
