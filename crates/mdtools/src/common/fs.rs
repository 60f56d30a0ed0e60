//! File helpers
//!
//! Opening files maps OS failures to [`RomError::Open`]/[`RomError::Create`]
//! so the binaries can report the offending path and exit with code 2.

use super::{RomError, RomResult};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Open an existing file for reading
pub fn open_input(path: &Path) -> RomResult<File> {
    File::open(path).map_err(|e| RomError::open(path, e))
}

/// Open a named file, or standard input when `path` is `None`
pub fn open_input_or_stdin(path: Option<&Path>) -> RomResult<Box<dyn Read>> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(open_input(path)?))),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Create (or truncate) a file for writing
pub fn create_output(path: &Path) -> RomResult<File> {
    File::create(path).map_err(|e| RomError::create(path, e))
}

/// Open a file for appending, creating it if missing
pub fn open_append(path: &Path) -> RomResult<File> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| RomError::open(path, e))
}

/// Replace the contents of `path` with `data` atomically.
///
/// Symlinks are resolved first so the file they point at is the one
/// replaced. The new contents are written to a temporary file next to that
/// target, which then takes over the target's permissions and is renamed
/// over it. If anything fails the original file is left untouched.
pub fn replace_atomically(path: &Path, data: &[u8]) -> RomResult<()> {
    let target = fs::canonicalize(path).map_err(|e| RomError::open(path, e))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| RomError::create(dir, e))?;
    staged.write_all(data)?;
    staged.as_file().sync_all()?;

    let meta = fs::metadata(&target)?;
    fs::set_permissions(staged.path(), meta.permissions())?;

    staged.persist(&target).map_err(|e| RomError::create(&target, e.error))?;
    log::debug!("replaced {} ({} bytes)", target.display(), data.len());
    Ok(())
}

/// Read until `buf` is full or the reader hits EOF.
///
/// Returns the number of bytes read; anything less than `buf.len()` means
/// EOF was reached.
pub fn read_up_to<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
