use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct ApiState {
    pub faketimerc_path: PathBuf,
}

impl ApiState {
    pub async fn new(faketimerc_path: PathBuf) -> Self {
        Self { faketimerc_path }
    }

    /// Replaces the rc file contents with `value`, verbatim. The value goes
    /// into a temp file in the rc file's directory first and is renamed over
    /// the rc path, so a reader never observes a partial write.
    pub fn write_faketimerc(&self, value: &str) -> Result<(), std::io::Error> {
        let dir = match self.faketimerc_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(value.as_bytes())?;
        file.persist(&self.faketimerc_path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_rc_file() {
        let tempdir = tempdir().unwrap();
        let state = ApiState {
            faketimerc_path: tempdir.as_ref().join("faketimerc"),
        };
        state.write_faketimerc("+2y").unwrap();
        assert_eq!(
            std::fs::read_to_string(&state.faketimerc_path).unwrap(),
            "+2y"
        );
    }

    #[test]
    fn test_write_replaces_whole_file() {
        let tempdir = tempdir().unwrap();
        let state = ApiState {
            faketimerc_path: tempdir.as_ref().join("faketimerc"),
        };
        state.write_faketimerc("+1d").unwrap();
        state.write_faketimerc("+2d").unwrap();
        assert_eq!(
            std::fs::read_to_string(&state.faketimerc_path).unwrap(),
            "+2d"
        );
    }

    #[test]
    fn test_write_is_verbatim() {
        let tempdir = tempdir().unwrap();
        let state = ApiState {
            faketimerc_path: tempdir.as_ref().join("faketimerc"),
        };
        state.write_faketimerc("2005-03-29 14:00:00\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&state.faketimerc_path).unwrap(),
            "2005-03-29 14:00:00\n"
        );
    }
}
