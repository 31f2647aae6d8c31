use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Base names of the regular files directly inside `folder`, in directory order.
///
/// Entries are classified through their resolved metadata, so a symlink to a
/// regular file is kept while symlinks to directories, dangling symlinks,
/// subdirectories and special files are skipped. Names are returned as-is,
/// whether or not they are valid UTF-8.
pub fn list_regular_files(folder: &Path) -> Result<Vec<OsString>> {
    let meta = fs::metadata(folder).map_err(|source| Error::ReadDir {
        path: folder.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory {
            path: folder.to_path_buf(),
        });
    }

    let read_dir_err = |source: std::io::Error| Error::ReadDir {
        path: folder.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();

        if !path.is_file() {
            debug!("Skipping non-regular entry: {:?}", path);
            continue;
        }

        names.push(entry.file_name());
    }

    debug!("Found {} regular files in {:?}", names.len(), folder);
    Ok(names)
}
