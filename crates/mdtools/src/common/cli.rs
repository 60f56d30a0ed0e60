//! Command-line plumbing shared by every binary

use super::{ExitCode, RomError};
use clap::{Args, CommandFactory, Parser};
use clap::error::ErrorKind;
use env_logger::Env;
use std::process;

/// Flags every tool accepts.
///
/// Tools flatten this into their own `Args` and set
/// `#[command(disable_help_flag = true)]` so `-?` can act as a help alias.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Show this message
    #[allow(dead_code)]
    #[arg(short = 'h', long, short_alias = '?', action = clap::ArgAction::Help)]
    help: Option<bool>,

    /// Display license information
    #[arg(short = 'l', long)]
    pub license: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse arguments, exiting 0 for help/version and 1 for any other error.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::Usage,
            };
            let _ = e.print();
            process::exit(code.code());
        }
    }
}

/// Install the stderr logger; `-v` lowers the default filter to `debug`.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Report `err` on stderr and exit with its code.
///
/// Usage errors are followed by the tool's usage line.
pub fn exit_with<T: CommandFactory>(err: &RomError) -> ! {
    eprintln!("error: {}", err);
    if let RomError::Usage { .. } = err {
        eprintln!();
        eprintln!("{}", T::command().render_usage());
        eprintln!();
        eprintln!("For more information, try '--help'.");
    }
    process::exit(err.exit_code().code());
}

/// Print the license text for `tool` to stderr.
pub fn print_license(tool: &str) {
    eprint!("{}", license_text(tool));
}

pub fn license_text(tool: &str) -> String {
    format!(
        "
 {tool}
 Copyright (c) 2013-2014, Dakotah Lambert
 All rights reserved.

 Redistribution and use in source and binary forms, with or without
 modification, are permitted provided that the following conditions
 are met:

 1: Redistributions of source code must retain the above copyright
    notice, this list of conditions and the following disclaimer.

 2: Redistributions in binary form must reproduce the above copyright
    notice, this list of conditions and the following disclaimer in
    the documentation and/or other materials provided with the
    distribution.

 3: Neither the names of copyright holders nor the names of their
    contributors may be used to endorse or promote products derived
    from this software without specific prior written permission.

  THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
  \"AS IS\" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
  LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS
  FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE
  COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT,
  INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING,
  BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES;
  LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
  CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
  LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN
  ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
  POSSIBILITY OF SUCH DAMAGE.

"
    )
}

/// Parse a C-style integer literal: `0x` hex, leading `0` octal, else decimal.
pub fn parse_c_int(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };

    u64::from_str_radix(digits, radix).map_err(|_| format!("`{}` is not a valid number", s))
}

/// Value parser for a 16-bit checksum operand
pub fn parse_u16(s: &str) -> Result<u16, String> {
    let value = parse_c_int(s)?;
    u16::try_from(value).map_err(|_| format!("`{}` does not fit in 16 bits", s))
}

/// Value parser for a single fill byte
pub fn parse_u8(s: &str) -> Result<u8, String> {
    let value = parse_c_int(s)?;
    u8::try_from(value).map_err(|_| format!("`{}` does not fit in a byte", s))
}
