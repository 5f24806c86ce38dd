//! Atomic filelist writer.

use crate::error::{FilelistError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `lines` to `path`, one per line, each terminated by `\n`.
///
/// The data goes to a temp file in the destination directory and is renamed
/// over `path` only once everything is flushed, so a failed run never leaves a
/// truncated or partial filelist behind.
pub fn write_filelist<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(parent).map_err(|e| FilelistError::io(path, e))?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        for line in lines {
            out.write_all(line.as_ref().as_bytes()).map_err(|e| FilelistError::io(path, e))?;
            out.write_all(b"\n").map_err(|e| FilelistError::io(path, e))?;
        }
        out.flush().map_err(|e| FilelistError::io(path, e))?;
    }
    tmp.as_file().sync_all().map_err(|e| FilelistError::io(path, e))?;
    match_permissions(tmp.path(), path);

    tmp.persist(path).map_err(|e| FilelistError::io(path, e.error))?;
    tracing::debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

/// Temp files are created owner-only; give the result the permissions a plain
/// create would have had (or the replaced file's).
fn match_permissions(tmp: &Path, dest: &Path) {
    let wanted = match fs::metadata(dest) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(perms) = wanted {
        if let Err(e) = fs::set_permissions(tmp, perms) {
            tracing::warn!("Could not set permissions on {}: {}", dest.display(), e);
        }
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
