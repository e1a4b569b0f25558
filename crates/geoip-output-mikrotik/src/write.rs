//! Output file persistence

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

/// Write `data` to `dir/filename`, creating `dir` if needed
///
/// An existing file is truncated and overwritten. On unix, new directories
/// get mode 0755 and new files 0644.
pub(crate) fn write_output(dir: &Path, filename: &str, data: &[u8]) -> io::Result<PathBuf> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(dir)?;

    let path = dir.join(filename);
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);

    let mut file = options.open(&path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(path)
}
