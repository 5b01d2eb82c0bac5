use crate::error::IcieError;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;
use tokio::fs;

/// Whether `executable` must be rebuilt from `source`.
///
/// A missing executable is stale. A missing source is an error.
pub async fn is_stale(source: &Path, executable: &Path) -> Result<bool, IcieError> {
    let source_mtime = match fs::metadata(source).await {
        Ok(meta) => meta.modified()?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(IcieError::SourceNotFound(source.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    // Anything short of a readable mtime means there is nothing usable to test.
    let exe_mtime = fs::metadata(executable)
        .await
        .ok()
        .and_then(|m| m.modified().ok());

    let stale = needs_rebuild(source_mtime, exe_mtime);
    tracing::debug!(
        source = %source.display(),
        executable = %executable.display(),
        stale,
        "staleness check"
    );
    Ok(stale)
}

pub fn needs_rebuild(source_mtime: SystemTime, exe_mtime: Option<SystemTime>) -> bool {
    match exe_mtime {
        None => true,
        Some(exe_time) => source_mtime > exe_time,
    }
}
