//! Temp-file allocation for export archive downloads.

use rand::distr::Alphanumeric;
use rand::Rng;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};

const NAME_LEN: usize = 12;

/// Allocate a fresh path for a downloaded archive in the system temp
/// directory. Every call produces a new random name; nothing is created on
/// disk yet.
pub(crate) fn temp_archive_path() -> PathBuf {
    let name: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(NAME_LEN)
        .map(char::from)
        .collect();

    std::env::temp_dir().join(format!("koordinates-export-{name}.zip"))
}

/// Open `path` for writing, failing with `AlreadyExists` if anything is
/// already there. A collision on the generated name is a hard error, never
/// overwritten, so two downloads cannot end up sharing a file.
pub(crate) async fn create_exclusive(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
}
