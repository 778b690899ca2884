#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Hostile input must be rejected or decoded, never panic or overread
    let _ = zenbmp::decode(data, enough::Unstoppable);
});
