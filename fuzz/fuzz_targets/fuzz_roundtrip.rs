#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode to a file that decodes to the
    // same pixels and dimensions.
    let Ok(decoded) = zenbmp::decode(data, enough::Unstoppable) else {
        return;
    };
    if decoded.width() == 0 || decoded.height() == 0 {
        // encodes to bare headers, which the validator rejects
        return;
    }

    let reencoded = zenbmp::encode(&decoded, enough::Unstoppable)
        .expect("decoded image must re-encode");
    let decoded2 = zenbmp::decode(&reencoded, enough::Unstoppable)
        .expect("re-encoded data must decode");

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
});
