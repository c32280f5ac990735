use crate::application::services::ProfileWriter;
use crate::domain::errors::ProfileError;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Writes profiles into a directory on the local filesystem.
///
/// An existing file with the same name is truncated and replaced, so
/// regenerating a profile is idempotent apart from its identifiers.
#[derive(Debug, Clone)]
pub struct FsProfileWriter {
    output_dir: PathBuf,
}

impl FsProfileWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writer targeting the current working directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

impl ProfileWriter for FsProfileWriter {
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, ProfileError> {
        let path = self.output_dir.join(file_name);
        let write_error = |source: std::io::Error| ProfileError::Write {
            path: path.clone(),
            source,
        };

        let mut file = File::create(&path).map_err(write_error)?;
        file.write_all(contents.as_bytes()).map_err(write_error)?;
        file.flush().map_err(write_error)?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_full_contents_and_returns_path() {
        let dir = TempDir::new().unwrap();
        let writer = FsProfileWriter::new(dir.path());

        let path = writer.write("a_b.mobileconfig", "<plist/>\n").unwrap();

        assert_eq!(path, dir.path().join("a_b.mobileconfig"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<plist/>\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let writer = FsProfileWriter::new(dir.path());
        fs::write(dir.path().join("p.mobileconfig"), "a much longer previous profile").unwrap();

        let path = writer.write("p.mobileconfig", "new").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let writer = FsProfileWriter::new(dir.path().join("nope"));

        let err = writer.write("p.mobileconfig", "x").unwrap_err();
        assert!(matches!(err, ProfileError::Write { .. }));
    }
}
