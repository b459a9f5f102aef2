use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use lzfactor::{CompressConfig, Compressor, IndexKind};

#[derive(Parser, Debug)]
#[command(name = "lzfactor")]
#[command(about = "Compress files by greedy longest-prior-match factorization")]
#[command(version)]
struct Args {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, required_unless_present = "stats")]
    output: Option<PathBuf>,

    /// Decompress instead of compress
    #[arg(short, long)]
    decompress: bool,

    /// Substring index: trie or suffix-tree
    #[arg(long, default_value = "suffix-tree")]
    index: IndexKind,

    /// Huffman-code the token stream
    #[arg(long)]
    entropy: bool,

    /// I/O buffer size in bytes
    #[arg(long, default_value = "131072")]
    buffer_size: usize,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,

    /// Print input and output sizes in KB without writing output
    #[arg(long)]
    stats: bool,
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<u8, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = CompressConfig {
        index: args.index,
        entropy: args.entropy,
        buffer_size: args.buffer_size,
    };
    let compressor = Compressor::new(config);

    let input: Box<dyn Read> = if is_stdio(&args.input) {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(&args.input)?))
    };

    if args.stats {
        return run_stats_mode(&args, &compressor, input);
    }

    let output_path = args.output.as_ref().ok_or("an output path is required")?;
    let output: Box<dyn Write> = if is_stdio(output_path) {
        Box::new(io::stdout().lock())
    } else {
        Box::new(BufWriter::new(File::create(output_path)?))
    };

    let start = Instant::now();

    if args.decompress {
        let stats = compressor.decompress(input, output)?;
        let elapsed = start.elapsed();

        if stats.truncated_bytes > 0 {
            eprintln!(
                "Warning: ignored {} trailing bytes of an incomplete record",
                stats.truncated_bytes
            );
        }
        if args.verbose {
            eprintln!("Decompression complete:");
            eprintln!("  Input bytes:      {}", stats.input_bytes);
            eprintln!("  Output bytes:     {}", stats.output_bytes);
            eprintln!("  Tokens:           {}", stats.tokens);
            eprintln!("  Time:             {:.2?}", elapsed);
            eprintln!(
                "  Throughput:       {:.1} MB/s",
                stats.output_bytes as f64 / elapsed.as_secs_f64() / 1_000_000.0
            );
        }
    } else {
        let stats = compressor.compress(input, output)?;
        let elapsed = start.elapsed();

        if args.verbose {
            eprintln!("Compression complete:");
            eprintln!("  Index:            {}", args.index);
            eprintln!("  Input bytes:      {}", stats.input_bytes);
            eprintln!("  Output bytes:     {}", stats.output_bytes);
            eprintln!("  Ratio:            {:.3}", stats.compression_ratio());
            eprintln!("  Literals:         {}", stats.literals);
            eprintln!("  Matches:          {}", stats.matches);
            eprintln!("  Longest match:    {}", stats.longest_match);
            eprintln!("  Index nodes:      {}", stats.index_nodes);
            eprintln!("  Time:             {:.2?}", elapsed);
            eprintln!(
                "  Throughput:       {:.1} MB/s",
                stats.input_bytes as f64 / elapsed.as_secs_f64() / 1_000_000.0
            );
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Run the pipeline into a sink and report both sizes
fn run_stats_mode(
    args: &Args,
    compressor: &Compressor,
    input: Box<dyn Read>,
) -> Result<u8, Box<dyn std::error::Error>> {
    let (input_bytes, output_bytes) = if args.decompress {
        let stats = compressor.decompress(input, io::sink())?;
        (stats.input_bytes, stats.output_bytes)
    } else {
        let stats = compressor.compress(input, io::sink())?;
        (stats.input_bytes, stats.output_bytes)
    };

    // KB is 1000 bytes here
    println!("Input size:  {:.2} KB", input_bytes as f64 / 1000.0);
    println!("Output size: {:.2} KB", output_bytes as f64 / 1000.0);

    Ok(EXIT_SUCCESS)
}

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}
