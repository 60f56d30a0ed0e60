//! mdchksum - read and fix checksums on Sega Genesis / Mega Drive ROMs
//!
//! Usage: mdchksum [-c|-f|-r|-w NUM|-k] [-i] [FILE]

use clap::{ArgGroup, Parser, ValueEnum};
use md_tools::common::cli::{self, CommonArgs};
use md_tools::common::fs::{open_input_or_stdin, replace_atomically};
use md_tools::common::{RomError, RomResult};
use md_tools::rom::{
    self, CHECKSUM_LOCATION, SizeSource, calculate_checksum, find_stored_checksum, fix_checksum,
    update_checksum,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where the image length comes from
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum SizeFrom {
    /// Read the input to its end
    #[default]
    Actual,
    /// Trust the ROM size field at 0x1A4
    Declared,
}

impl From<SizeFrom> for SizeSource {
    fn from(value: SizeFrom) -> Self {
        match value {
            SizeFrom::Actual => SizeSource::Actual,
            SizeFrom::Declared => SizeSource::Declared,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mdchksum")]
#[command(version)]
#[command(about = "Read and write checksums in SEGA Genesis / Mega Drive ROMs", long_about = None)]
#[command(disable_help_flag = true)]
#[command(group(ArgGroup::new("mode").args(["calc", "read", "fix", "write", "check"])))]
struct Args {
    /// Compute checksum (default)
    #[arg(short = 'c', long)]
    calc: bool,

    /// Read stored checksum
    #[arg(short = 'r', long)]
    read: bool,

    /// Fix checksum
    #[arg(short = 'f', long)]
    fix: bool,

    /// Overwrite the checksum with NUM
    #[arg(short = 'w', long, value_name = "NUM", value_parser = cli::parse_u16)]
    write: Option<u16>,

    /// Compare stored and computed checksums; with -i, fix a bad one
    #[arg(short = 'k', long)]
    check: bool,

    /// Operate in-place
    #[arg(short = 'i', long)]
    in_place: bool,

    /// Where the image length comes from
    #[arg(long, value_enum, default_value = "actual")]
    size_from: SizeFrom,

    /// ROM file (standard input if omitted or "-")
    file: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

/// Operating mode, at most one selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Calc,
    Read,
    Fix,
    Write(u16),
    Check,
}

impl Args {
    fn mode(&self) -> Mode {
        if let Some(value) = self.write {
            Mode::Write(value)
        } else if self.read {
            Mode::Read
        } else if self.fix {
            Mode::Fix
        } else if self.check {
            Mode::Check
        } else {
            Mode::Calc
        }
    }

    fn mode_given(&self) -> bool {
        self.calc || self.read || self.fix || self.write.is_some() || self.check
    }

    fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| *p != Path::new("-"))
    }
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
        cli::print_license("mdchksum");
        if args.file.is_none() && !args.mode_given() {
            return Ok(());
        }
    }

    let input_path = args.input_path();
    let mode = args.mode();
    let in_place = match input_path {
        Some(path) if args.in_place => Some(path),
        None if args.in_place => {
            log::warn!("-i ignored when reading standard input");
            None
        }
        _ => None,
    };

    let mut rom_data = rom::load_image(open_input_or_stdin(input_path)?, args.size_from.into())?;
    log::debug!("mode {:?}, {} bytes", mode, rom_data.len());

    match mode {
        Mode::Calc => {
            println!("0x{:04x}", calculate_checksum(&rom_data));
        }
        Mode::Read => {
            let stored = find_stored_checksum(&rom_data).ok_or_else(|| too_small(&rom_data))?;
            println!("0x{:04x}", stored);
        }
        Mode::Fix => {
            if find_stored_checksum(&rom_data).is_none() {
                return Err(too_small(&rom_data));
            }
            let checksum = update_checksum(&mut rom_data);
            log::info!("stored checksum 0x{:04X}", checksum);
            emit(&rom_data, in_place)?;
        }
        Mode::Write(value) => {
            store(&mut rom_data, value)?;
            emit(&rom_data, in_place)?;
        }
        Mode::Check => {
            let report = rom::check_checksum(&rom_data).ok_or_else(|| too_small(&rom_data))?;
            println!("{}", report);
            if let Some(path) = in_place.filter(|_| !report.is_ok()) {
                store(&mut rom_data, report.calculated)?;
                replace_atomically(path, &rom_data)?;
                println!("Checksum fixed.");
            }
        }
    }

    Ok(())
}

fn too_small(rom_data: &[u8]) -> RomError {
    RomError::too_small(CHECKSUM_LOCATION + 2, rom_data.len())
}

fn store(rom_data: &mut [u8], checksum: u16) -> RomResult<()> {
    if fix_checksum(rom_data, checksum) {
        log::info!("stored checksum 0x{:04X}", checksum);
        Ok(())
    } else {
        Err(too_small(rom_data))
    }
}

/// Write the modified image back in place, or to standard output
fn emit(rom_data: &[u8], in_place: Option<&Path>) -> RomResult<()> {
    match in_place {
        Some(path) => replace_atomically(path, rom_data),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rom_data)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
