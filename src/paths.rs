//! Path absolutisation for argument values.
//!
//! The spawned test process may run with a different working directory, so
//! directory-valued properties are rendered absolute. The conversion is
//! lexical (no symlink resolution), matching how the host build tool prints
//! file paths.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{BurnishError, Result};

/// Render `path` absolute against the current working directory.
///
/// Already-absolute paths pass through unchanged apart from `.` components.
///
/// # Errors
///
/// Fails when the working directory cannot be determined or when the
/// resulting path is not valid UTF-8.
pub fn absolute_utf8(path: &Utf8Path) -> Result<Utf8PathBuf> {
    let absolute = std::path::absolute(path.as_std_path())?;
    Utf8PathBuf::from_path_buf(absolute).map_err(|path| BurnishError::NonUtf8Path { path })
}
