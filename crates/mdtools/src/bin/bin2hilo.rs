//! bin2hilo - split BIN formatted ROMs into high and low byte files
//!
//! Usage: bin2hilo BIN_FILE HIGH_FILE LOW_FILE

use clap::Parser;
use md_tools::common::cli::{self, CommonArgs};
use md_tools::common::fs::{create_output, open_input};
use md_tools::common::{RomError, RomResult};
use md_tools::rom::split_hilo;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bin2hilo")]
#[command(version)]
#[command(about = "Split a BIN ROM into even (high) and odd (low) byte files", long_about = None)]
#[command(disable_help_flag = true)]
struct Args {
    /// BIN_FILE HIGH_FILE LOW_FILE
    #[arg(value_name = "FILES", num_args = 0..)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args: Args = cli::parse_args();
    cli::init_logger(args.common.verbose);

    if let Err(e) = run(&args) {
        cli::exit_with::<Args>(&e);
    }
}

fn run(args: &Args) -> RomResult<()> {
    if args.common.license {
        cli::print_license("bin2hilo");
        if args.files.is_empty() {
            return Ok(());
        }
    }

    let [bin, high, low] = args.files.as_slice() else {
        return Err(RomError::usage(format!(
            "expected exactly 3 files (BIN_FILE HIGH_FILE LOW_FILE), got {}",
            args.files.len()
        )));
    };

    let input = BufReader::new(open_input(bin)?);
    let high_out = BufWriter::new(create_output(high)?);
    let low_out = BufWriter::new(create_output(low)?);

    let stats = split_hilo(input, high_out, low_out)?;
    log::info!(
        "{} -> {} ({} bytes), {} ({} bytes)",
        bin.display(),
        high.display(),
        stats.even_bytes,
        low.display(),
        stats.odd_bytes
    );
    Ok(())
}
