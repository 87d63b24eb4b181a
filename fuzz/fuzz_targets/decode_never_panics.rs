#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary byte strings, including ones that never came from `encode`,
// must decode without panicking: truncated or mis-framed input yields
// implementation-defined garbage, never a crash, and must never read
// past the end of the input.
fuzz_target!(|data: &[u8]| {
    let _ = ordkey::decode_record(data);
});
