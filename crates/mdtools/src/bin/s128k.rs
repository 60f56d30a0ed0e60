//! s128k - split a ROM into Sega's 128KB even/odd format
//!
//! ```text
//! +---------+---------+
//! | 0: Even | 1: Odd  |
//! +---------+---------+
//! | 2: Even | 3: Odd  |
//! +---------+---------+
//! |        ...        |
//! +---------+---------+
//! ```

use clap::Parser;
use md_tools::common::cli::{self, CommonArgs};
use md_tools::common::{RomError, RomResult};
use md_tools::rom::split_128k_file;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "s128k")]
#[command(version)]
#[command(about = "Split a ROM into 128KB even/odd files named INFILE.0, INFILE.1, ...", long_about = None)]
#[command(disable_help_flag = true)]
struct Args {
    /// Name of file to split
    infile: Option<PathBuf>,

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
        cli::print_license("s128k");
    }

    let Some(infile) = &args.infile else {
        if args.common.license {
            return Ok(());
        }
        return Err(RomError::usage("a file to split is required"));
    };

    let created = split_128k_file(infile)?;
    if created.is_empty() {
        log::warn!("{} is empty; no files written", infile.display());
    }
    Ok(())
}
