//! mbitpad - pad a file to an integer number of megabits
//!
//! Usage: mbitpad [-c BYTE] [-s SIZE] FILE

use clap::Parser;
use md_tools::common::cli::{self, CommonArgs};
use md_tools::common::fs::open_append;
use md_tools::common::{RomError, RomResult};
use md_tools::rom::pad::{self, DEFAULT_FILL, DEFAULT_MBITS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mbitpad")]
#[command(version)]
#[command(about = "Pad a file to an integer number of megabits", long_about = None)]
#[command(after_help = "Example:\n  mbitpad -c 0xFF -s 4 rom.bin\n    pads rom.bin with <FF> to 4 Mbit (0.5 MB)")]
#[command(disable_help_flag = true)]
struct Args {
    /// Value of the byte to pad with
    #[arg(short = 'c', long = "char", value_name = "BYTE", value_parser = cli::parse_u8, default_value_t = DEFAULT_FILL)]
    fill: u8,

    /// Size in megabits to which the file should be padded
    #[arg(short = 's', long, value_name = "SIZE", value_parser = cli::parse_c_int, default_value_t = DEFAULT_MBITS)]
    size: u64,

    /// Name of file to pad
    file: Option<PathBuf>,

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
        cli::print_license("mbitpad");
    }

    let Some(path) = &args.file else {
        if args.common.license {
            return Ok(());
        }
        return Err(RomError::usage("a file to pad is required"));
    };

    let target = pad::mbits_to_bytes(args.size);
    log::debug!("padding {} to {} Mbit ({} bytes)", path.display(), args.size, target);

    let mut file = open_append(path)?;
    pad::pad(target, args.fill, &mut file)?;
    Ok(())
}
