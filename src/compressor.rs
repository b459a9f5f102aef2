use crate::codec::{decode_tokens, encode_tokens, TokenReader, TokenWriter};
use crate::error::Result;
use crate::huffman::{decode_frame, encode_frame, is_entropy_frame};
use crate::index::IndexKind;
use crate::lz::{reconstruct, FactorizationSummary, Factorizer, Reconstructor};
use std::io::{BufReader, BufWriter, Read, Write};

/// Configuration for compression and decompression
#[derive(Clone, Debug)]
pub struct CompressConfig {
    /// Substring index used by the factorizer
    pub index: IndexKind,
    /// Huffman-code the token stream into an entropy frame
    pub entropy: bool,
    /// Buffer size for I/O operations
    pub buffer_size: usize,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self { index: IndexKind::default(), entropy: false, buffer_size: 128 * 1024 }
    }
}

/// Statistics from a compression run
#[derive(Clone, Debug, Default)]
pub struct CompressStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub literals: u64,
    pub matches: u64,
    pub longest_match: usize,
    /// Nodes allocated by the substring index
    pub index_nodes: usize,
}

impl CompressStats {
    /// Output size relative to input size (0.0 for empty input)
    pub fn compression_ratio(&self) -> f64 {
        ratio(self.output_bytes, self.input_bytes)
    }
}

/// Statistics from a decompression run
#[derive(Clone, Debug, Default)]
pub struct DecompressStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub tokens: u64,
    /// Bytes of a partial trailing record that were ignored
    pub truncated_bytes: usize,
}

impl DecompressStats {
    /// Compressed size relative to restored size (0.0 for empty output)
    pub fn compression_ratio(&self) -> f64 {
        ratio(self.input_bytes, self.output_bytes)
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// End-to-end compressor: factorize, serialize, and optionally entropy-code
pub struct Compressor {
    config: CompressConfig,
}

impl Compressor {
    pub fn new(config: CompressConfig) -> Self {
        Self { config }
    }

    /// Compress all of `input` into `output`
    pub fn compress<R: Read, W: Write>(&self, input: R, output: W) -> Result<CompressStats> {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, output);

        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let (tokens, index_nodes) = Factorizer::new(self.config.index).compress_with_nodes(&data)?;
        let summary = FactorizationSummary::from_tokens(&tokens);

        let output_bytes = if self.config.entropy {
            let frame = encode_frame(&encode_tokens(&tokens)?);
            writer.write_all(&frame)?;
            frame.len() as u64
        } else {
            let mut token_writer = TokenWriter::new(&mut writer);
            token_writer.write_tokens(&tokens)?;
            let written = token_writer.bytes_written();
            token_writer.finish()?;
            written
        };
        writer.flush()?;

        Ok(CompressStats {
            input_bytes: data.len() as u64,
            output_bytes,
            literals: summary.literals,
            matches: summary.matches,
            longest_match: summary.longest_match,
            index_nodes,
        })
    }

    /// Restore the original bytes from a raw token stream or an entropy frame
    pub fn decompress<R: Read, W: Write>(&self, input: R, output: W) -> Result<DecompressStats> {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, output);

        let mut compressed = Vec::new();
        reader.read_to_end(&mut compressed)?;
        let input_bytes = compressed.len() as u64;

        let payload =
            if is_entropy_frame(&compressed) { decode_frame(&compressed)? } else { compressed };

        let mut tokens = TokenReader::new(payload.as_slice());
        let mut reconstructor = Reconstructor::with_capacity(payload.len());
        let mut token_count = 0u64;
        while let Some(token) = tokens.read_token()? {
            reconstructor.push(&token)?;
            token_count += 1;
        }
        let truncated_bytes = tokens.truncated_bytes();

        let restored = reconstructor.finish();
        writer.write_all(&restored)?;
        writer.flush()?;

        Ok(DecompressStats {
            input_bytes,
            output_bytes: restored.len() as u64,
            tokens: token_count,
            truncated_bytes,
        })
    }
}

/// Compress `data` in memory into a raw token stream
pub fn compress_bytes(data: &[u8], kind: IndexKind) -> Result<Vec<u8>> {
    encode_tokens(&Factorizer::new(kind).compress(data)?)
}

/// Decompress a raw token stream or entropy frame held in memory
pub fn decompress_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    if is_entropy_frame(bytes) {
        reconstruct(&decode_tokens(&decode_frame(bytes)?)?)
    } else {
        reconstruct(&decode_tokens(bytes)?)
    }
}
