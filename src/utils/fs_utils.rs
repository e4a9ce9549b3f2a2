// File system utilities

use std::path::Path;

/// Create `path` (and parents) if it is missing. Existing directories are fine.
pub fn ensure_directory_exists(path: &Path) -> std::io::Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write `contents` to `path`, replacing whatever was there
pub fn overwrite_file(path: &Path, contents: &str) -> std::io::Result<()> {
    std::fs::write(path, contents)
}
