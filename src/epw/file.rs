//! Renders the EPW text and stages output files for an all-or-nothing write.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use super::{header::EpwHeader, record::HourRecord};

/// Header, a newline, then one line per record, each newline-terminated.
pub fn render(header: &EpwHeader, records: &[HourRecord]) -> String {
    let mut out = String::with_capacity(header.as_str().len() + records.len() * 160);
    out.push_str(header.as_str());
    out.push('\n');

    for record in records {
        out.push_str(&record.to_line());
        out.push('\n');
    }

    out
}

/// A fully written temporary file next to its destination, not yet renamed into place.
/// Dropping it deletes the temporary file.
#[derive(Debug)]
pub struct StagedFile {
    file: NamedTempFile,
    path: PathBuf,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames the temporary file onto the destination.
    pub fn persist(self) -> io::Result<PathBuf> {
        self.file.persist(&self.path).map_err(|e| e.error)?;
        Ok(self.path)
    }
}

/// Writes a temporary file in the destination directory. Nothing appears at `path`
/// until [`StagedFile::persist`], so several outputs can be staged and then
/// persisted only once all of them were written.
pub fn stage<F, E>(path: &Path, write: F) -> Result<StagedFile, E>
where
    F: FnOnce(&mut fs::File) -> Result<(), E>,
    E: From<io::Error>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let mut file = NamedTempFile::new_in(&dir)?;
    write(file.as_file_mut())?;
    file.as_file_mut().flush()?;

    Ok(StagedFile {
        file,
        path: path.to_path_buf(),
    })
}

// -- Tests -------------------------------------------------------------------
