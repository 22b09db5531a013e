use clap::{Parser, Subcommand};
use rust_qr_gen::debug::init_logger;
use rust_qr_gen::utils::render::{MAX_QUIET_ZONE, MAX_SCALE, QUIET_ZONE_SIZE, to_image, to_text};
use rust_qr_gen::{ECLevel, EncodeError, EncodeOptions, MaskPattern, Version, encode_with_options};
use rust_qr_gen::{max_payload_length, version_params};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR Gen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text or a file and print the symbol
    Encode {
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        /// Also write a PNG image
        #[arg(long)]
        png: Option<PathBuf>,
        /// Quiet zone in modules
        #[arg(long, default_value_t = QUIET_ZONE_SIZE as u8, value_parser = clap::value_parser!(u8).range(0..=MAX_QUIET_ZONE as i64))]
        quiet_zone: u8,
        /// Pixels per module in the PNG
        #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: u32,
        /// L, M, Q or H (defaults to QR_EC_LEVEL, then L)
        #[arg(long)]
        ec_level: Option<ECLevel>,
        /// Force mask 0-7 instead of searching
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=7))]
        mask: Option<u8>,
    },
    /// Print byte-mode capacity per version
    Capacity {
        #[arg(long)]
        ec_level: Option<ECLevel>,
    },
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            text,
            file,
            png,
            quiet_zone,
            scale,
            ec_level,
            mask,
        } => {
            let payload = match read_payload(text, file.as_deref()) {
                Ok(payload) => payload,
                Err(err) => {
                    eprintln!("Failed to read payload: {}", err);
                    return ExitCode::FAILURE;
                }
            };
            let mut options = EncodeOptions::from_env();
            if let Some(level) = ec_level {
                options.ec_level = level;
            }
            if let Some(index) = mask {
                options.mask = MaskPattern::from_index(index);
            }
            encode_cmd(
                &payload,
                &options,
                png.as_deref(),
                usize::from(quiet_zone),
                scale,
            )
        }
        Command::Capacity { ec_level } => {
            capacity_cmd(ec_level.unwrap_or(EncodeOptions::from_env().ec_level));
            ExitCode::SUCCESS
        }
    }
}

fn read_payload(text: Option<String>, file: Option<&Path>) -> std::io::Result<Vec<u8>> {
    match (text, file) {
        (Some(text), _) => Ok(text.into_bytes()),
        (None, Some(path)) => std::fs::read(path),
        (None, None) => Ok(Vec::new()),
    }
}

fn encode_cmd(
    payload: &[u8],
    options: &EncodeOptions,
    png: Option<&Path>,
    quiet_zone: usize,
    scale: u32,
) -> ExitCode {
    let start = Instant::now();
    let symbol = match encode_with_options(payload, options) {
        Ok(symbol) => symbol,
        Err(EncodeError::CapacityExceeded { length, capacity }) => {
            eprintln!(
                "Payload too large for encoding: {} bytes (max {} at level {:?})",
                length, capacity, options.ec_level
            );
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Encoding failed: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    print!("{}", to_text(&symbol, quiet_zone));
    println!(
        "Version {} ({}x{}), level {:?}, mask {}, {} bytes, {:.2} ms",
        symbol.version,
        symbol.size,
        symbol.size,
        symbol.ec_level,
        symbol.mask.index(),
        payload.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    if let Some(path) = png {
        let img = to_image(&symbol, quiet_zone, scale);
        if let Err(err) = img.save(path) {
            eprintln!("Failed to write image {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
        println!("Wrote {} ({}x{})", path.display(), img.width(), img.height());
    }

    ExitCode::SUCCESS
}

fn capacity_cmd(ec_level: ECLevel) {
    println!("Byte-mode capacity at level {:?}", ec_level);
    println!("{:>7} {:>7} {:>9} {:>6} {:>9}", "version", "size", "codewords", "blocks", "max bytes");
    for version in Version::range(Version::MIN, Version::MAX) {
        let params = version_params(version, ec_level);
        println!(
            "{:>7} {:>7} {:>9} {:>6} {:>9}",
            version.number(),
            format!("{0}x{0}", version.size()),
            params.data_capacity,
            params.num_blocks,
            params.max_payload_length()
        );
    }
    println!(
        "Largest payload: {} bytes",
        max_payload_length(ec_level, Version::MAX)
    );
}
