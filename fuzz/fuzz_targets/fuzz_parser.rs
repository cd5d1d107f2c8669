#![no_main]

use jsonrelay::{DomBackend, Extensions, Parser};
use libfuzzer_sys::fuzz_target;

const HEADER: usize = 5; // 1 extensions byte + 4-byte split seed

/// Split `data` into chunks whose sizes are derived from `seed`. Chunks may
/// end anywhere, including inside multi-byte UTF-8 sequences; the parser
/// must treat every split identically.
fn split_chunks(data: &[u8], seed: u64) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < data.len() {
        let remaining = data.len() - start;
        let size = (seed as usize % remaining) + 1;
        chunks.push(&data[start..start + size]);
        start += size;
    }
    chunks
}

fuzz_target!(|data: &[u8]| {
    if data.len() < HEADER {
        return;
    }
    let extensions = Extensions::from_bits_truncate(data[0]);
    let split_seed = u64::from(u32::from_le_bytes(data[1..5].try_into().unwrap()));
    let body = &data[5..];

    let mut whole = Parser::new(DomBackend::new(), extensions);
    whole.input(body);
    let whole = whole.eof();

    let mut chunked = Parser::new(DomBackend::new(), extensions);
    for chunk in split_chunks(body, split_seed) {
        chunked.input(chunk);
    }
    let chunked = chunked.eof();

    // Chunking invariance: the outcome may not depend on how the input was
    // split.
    assert_eq!(whole, chunked);
});
