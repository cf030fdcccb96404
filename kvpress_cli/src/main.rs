use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use kvpress_codecs::BytesCodec;
use kvpress_core::{
    CompressingCodec, CompressionConfig, Frame, KvCodec, COMPRESSED_HEADER_SIZE, FLAG_COMPRESSED,
    FLAG_RAW, RAW_HEADER_SIZE,
};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "kvpress",
    about = "Frame byte payloads with kvpress's LZ4 value-compression format",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Frame a payload, compressing it when that shrinks the frame
    Pack {
        /// Source file ("-" reads stdin)
        input: PathBuf,
        /// Destination frame file ("-" writes stdout)
        output: PathBuf,
        /// Payloads shorter than this skip the compression attempt
        #[arg(long, default_value_t = CompressionConfig::default().min_len)]
        min_len: usize,
    },
    /// Recover the original payload from a frame file
    Unpack {
        /// Source frame file ("-" reads stdin)
        input: PathBuf,
        /// Destination file ("-" writes stdout)
        output: PathBuf,
    },
    /// Print a frame's header fields without decoding its payload
    Inspect {
        /// Frame file to inspect
        file: PathBuf,
    },
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

fn read_input(path: &PathBuf) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if path.to_str() == Some("-") {
        io::stdin().lock().read_to_end(&mut buf)?;
    } else {
        File::open(path)
            .with_context(|| format!("opening input file {:?}", path))?
            .read_to_end(&mut buf)?;
    }
    Ok(buf)
}

fn write_output(path: &PathBuf, bytes: &[u8]) -> anyhow::Result<()> {
    if path.to_str() == Some("-") {
        io::stdout().lock().write_all(bytes)?;
    } else {
        File::create(path)
            .with_context(|| format!("creating output file {:?}", path))?
            .write_all(bytes)?;
    }
    Ok(())
}

fn flag_name(flag: u8) -> &'static str {
    match flag {
        FLAG_RAW => "RAW",
        FLAG_COMPRESSED => "COMPRESSED",
        _ => "?",
    }
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_pack(input: PathBuf, output: PathBuf, min_len: usize) -> anyhow::Result<()> {
    let payload = read_input(&input)?;
    let codec = CompressingCodec::with_config(BytesCodec, CompressionConfig { min_len });

    let t0 = Instant::now();
    let wire = codec.encode_value(&payload)?;
    let elapsed = t0.elapsed();

    write_output(&output, &wire)?;

    let ratio = if wire.is_empty() {
        1.0
    } else {
        payload.len() as f64 / wire.len() as f64
    };
    eprintln!("  frame       : {}", flag_name(wire[0]));
    eprintln!("  raw size    : {}", human_bytes(payload.len() as u64));
    eprintln!("  framed size : {}", human_bytes(wire.len() as u64));
    eprintln!("  ratio       : {:.2}x", ratio);
    eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_unpack(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let wire = read_input(&input)?;
    let codec = CompressingCodec::new(BytesCodec);

    let t0 = Instant::now();
    let payload = codec.decode_value(&wire)?;
    let elapsed = t0.elapsed();

    write_output(&output, &payload)?;

    eprintln!("  framed size : {}", human_bytes(wire.len() as u64));
    eprintln!("  raw size    : {}", human_bytes(payload.len() as u64));
    eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_inspect(file: PathBuf) -> anyhow::Result<()> {
    let wire = read_input(&file)?;
    let frame = Frame::parse(&wire)?;

    println!("=== kvpress frame: {:?} ===", file);
    println!();
    println!("  flag          : {} ({})", frame.flag(), flag_name(frame.flag()));
    match frame {
        Frame::Raw(payload) => {
            println!("  header size   : {} B", RAW_HEADER_SIZE);
            println!("  payload       : {}", human_bytes(payload.len() as u64));
        }
        Frame::Compressed {
            original_len,
            payload,
        } => {
            let ratio = if payload.is_empty() {
                1.0
            } else {
                original_len as f64 / payload.len() as f64
            };
            println!("  header size   : {} B", COMPRESSED_HEADER_SIZE);
            println!("  payload       : {}", human_bytes(payload.len() as u64));
            println!("  original len  : {}", human_bytes(original_len as u64));
            println!("  ratio         : {:.2}x", ratio);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Pack {
            input,
            output,
            min_len,
        } => run_pack(input, output, min_len),
        Commands::Unpack { input, output } => run_unpack(input, output),
        Commands::Inspect { file } => run_inspect(file),
    }
}
