#![no_main]

use libfuzzer_sys::fuzz_target;
use lzfactor::{compress_bytes, decompress_bytes, CompressConfig, Compressor, IndexKind};

fuzz_target!(|data: &[u8]| {
    // The trie grows quadratically with input length
    let kind = if data.len() <= 512 { IndexKind::Trie } else { IndexKind::SuffixTree };

    let compressed = compress_bytes(data, kind).expect("compression should not fail");
    let restored = decompress_bytes(&compressed).expect("decompression should not fail");
    assert_eq!(restored, data);

    // Same again through the entropy stage
    let compressor = Compressor::new(CompressConfig { entropy: true, ..Default::default() });
    let mut framed = Vec::new();
    compressor.compress(data, &mut framed).expect("compression should not fail");
    let mut restored = Vec::new();
    compressor.decompress(framed.as_slice(), &mut restored).expect("decompression should not fail");
    assert_eq!(restored, data);
});
