//! smd2bin - convert ROMs from SMD to BIN format
//!
//! Usage: smd2bin -o OUTFILE INFILE

use clap::{Parser, ValueEnum};
use md_tools::common::cli::{self, CommonArgs};
use md_tools::common::fs::{create_output, open_input};
use md_tools::common::{RomError, RomResult};
use md_tools::rom::{HalfOrder, smd_to_bin};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Output byte parity held by the first half of each SMD block
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum FirstHalf {
    /// Offsets 0, 2, 4, ...
    #[default]
    Even,
    /// Offsets 1, 3, 5, ... (common copier layout)
    Odd,
}

impl From<FirstHalf> for HalfOrder {
    fn from(value: FirstHalf) -> Self {
        match value {
            FirstHalf::Even => HalfOrder::Even,
            FirstHalf::Odd => HalfOrder::Odd,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "smd2bin")]
#[command(version)]
#[command(about = "Convert ROMs from SMD to BIN format", long_about = None)]
#[command(disable_help_flag = true)]
struct Args {
    /// Output file (mandatory)
    #[arg(short, long, value_name = "OUTFILE")]
    output: Option<PathBuf>,

    /// Output byte parity held by the first half of each SMD block
    #[arg(long, value_enum, default_value = "even")]
    first_half: FirstHalf,

    /// Name of file to convert
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
        cli::print_license("smd2bin");
    }

    let (infile, output) = match (&args.infile, &args.output) {
        (Some(infile), Some(output)) => (infile, output),
        (None, None) if args.common.license => return Ok(()),
        (_, None) => return Err(RomError::usage("an output file (-o OUTFILE) is required")),
        (None, Some(_)) => return Err(RomError::usage("a file to convert is required")),
    };

    let input = BufReader::new(open_input(infile)?);
    let out = BufWriter::new(create_output(output)?);
    let written = smd_to_bin(input, out, args.first_half.into())?;
    log::debug!("{} -> {} ({} bytes)", infile.display(), output.display(), written);
    Ok(())
}
