use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Replace `path` with `data` in one rename, so readers never observe a
/// half-written plan or config. Missing parent directories are created.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut staged = tempfile::Builder::new()
        .prefix(".fundboard-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    staged.write_all(data)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}
