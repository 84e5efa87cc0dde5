//! Raw binary dataset loading.
//!
//! A dataset is a headerless file of unsigned 8-bit density samples, one byte
//! per voxel, in the same row-major x→y→z order the grid builder enumerates.

use std::path::Path;

use voxtrace_core::{Result, VolumeDimensions, VoxtraceError};

/// Reads the whole dataset into memory and checks it against the grid.
///
/// Fails with a `Config` error on an empty path (before any I/O), and with a
/// `Data` error if the file cannot be read or holds fewer than
/// `dims.total()` samples. There is no streaming: the entire file is
/// materialized before any further processing begins.
pub fn load_dataset(path: &Path, dims: VolumeDimensions) -> Result<Vec<u8>> {
    if path.as_os_str().is_empty() {
        return Err(VoxtraceError::Config(
            "dataset path is empty".to_string(),
        ));
    }

    let data = std::fs::read(path).map_err(|e| {
        VoxtraceError::Data(format!("cannot read dataset '{}': {e}", path.display()))
    })?;

    let required = dims.total();
    if data.len() < required {
        return Err(VoxtraceError::Data(format!(
            "dataset '{}' holds {} samples, volume {dims} needs {required}",
            path.display(),
            data.len(),
        )));
    }
    if data.len() > required {
        log::debug!(
            "dataset '{}' has {} trailing bytes beyond the voxel count; ignored",
            path.display(),
            data.len() - required
        );
    }
    log::info!("loaded dataset '{}' ({} bytes)", path.display(), data.len());
    Ok(data)
}
