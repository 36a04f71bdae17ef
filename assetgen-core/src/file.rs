use std::{
    fs,
    io::{BufWriter, Write},
    path::PathBuf,
};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Generated output bound for a file on disk.
///
/// Content is streamed into a temporary file next to the target and only
/// renamed over it by [`OutputFile::commit`]. Dropping an uncommitted
/// `OutputFile` removes the temporary, so a failed run never leaves a
/// truncated target behind.
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl OutputFile {
    /// Prepare to write `path`, creating parent directories as needed.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| Error::output(&dir, e))?;
        let temp = NamedTempFile::new_in(&dir).map_err(|e| Error::output(&dir, e))?;

        Ok(Self {
            path,
            writer: BufWriter::new(temp),
        })
    }

    /// Flush and move the content into place.
    pub fn commit(self) -> Result<()> {
        let temp = self
            .writer
            .into_inner()
            .map_err(|e| Error::output(&self.path, e.into_error()))?;
        temp.persist(&self.path)
            .map_err(|e| Error::output(&self.path, e.error))?;
        Ok(())
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
