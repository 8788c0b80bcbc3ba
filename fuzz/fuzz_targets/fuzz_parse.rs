#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary strings must parse or fail cleanly, never panic.
    let _ = scry::query::parse(data);
});
