//! Local file acquisition.

use std::fs;
use std::io;
use std::path::Path;

use subdecode_core::AcquireError;

/// Read the whole file at `path`
///
/// ## Errors
///
/// - `AcquireError::NotFound` when the file does not exist
/// - `AcquireError::Io` for any other read failure
pub fn read_local(path: &Path) -> Result<Vec<u8>, AcquireError> {
    fs::read(path).map_err(|e| {
        let path = path.display().to_string();
        if e.kind() == io::ErrorKind::NotFound {
            AcquireError::NotFound { path }
        } else {
            AcquireError::Io {
                path,
                reason: e.to_string(),
            }
        }
    })
}
