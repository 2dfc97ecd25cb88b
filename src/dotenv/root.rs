//! Project root discovery

use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a directory that contains `marker`.
///
/// `start` itself is checked first. Returns `None` when no ancestor holds
/// the marker file.
pub fn find_root(start: &Path, marker: &str) -> Option<PathBuf> {
    start.ancestors().find(|dir| dir.join(marker).is_file()).map(Path::to_path_buf)
}
