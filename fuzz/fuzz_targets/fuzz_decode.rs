#![no_main]

use libfuzzer_sys::fuzz_target;
use lzfactor::huffman::{decode_frame, is_entropy_frame};
use lzfactor::{decode_tokens, reconstruct};

/// Skip token streams that would expand beyond this many bytes
const MAX_OUTPUT: usize = 1 << 20;

fuzz_target!(|data: &[u8]| {
    // Decoding may fail on invalid input - that's OK
    // We're looking for panics/crashes, not errors
    let payload = if is_entropy_frame(data) {
        match decode_frame(data) {
            Ok(payload) => payload,
            Err(_) => return,
        }
    } else {
        data.to_vec()
    };

    let Ok(tokens) = decode_tokens(&payload) else {
        return;
    };

    let total = tokens.iter().try_fold(0usize, |acc, t| acc.checked_add(t.uncompressed_size()));
    if total.map_or(true, |n| n > MAX_OUTPUT) {
        return;
    }

    if let Ok(output) = reconstruct(&tokens) {
        assert_eq!(Some(output.len()), total);
    }
});
