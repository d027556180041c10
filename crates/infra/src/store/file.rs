use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::r#trait::{BalanceStore, StoreError};

/// Plain-text file store.
///
/// The file is opened and closed on every call. Saves write a sibling
/// `*.tmp` file, flush it to disk and rename it over the store, so a crash
/// mid-save leaves the previous snapshot in place.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl BalanceStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&mut self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }

        let tmp_path = self.tmp_path();
        let mut file = fs::File::create(&tmp_path).map_err(|e| self.write_err(e))?;
        let written = file
            .write_all(contents.as_bytes())
            .and_then(|()| file.sync_all());
        drop(file);

        if let Err(source) = written.and_then(|()| fs::rename(&tmp_path, &self.path)) {
            // best effort; the original error is the one worth reporting
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_err(source));
        }
        Ok(())
    }
}
