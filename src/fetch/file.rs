use std::{fs::read_to_string, io::ErrorKind, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct FetchFile {
    pub path: PathBuf,
}

#[derive(Error, Debug)]
pub enum FetchFileError {
    #[error("FileNotExists: {0}")]
    NotFound(PathBuf),

    #[error("FileError: {0}")]
    FileError(#[from] std::io::Error),
}

impl FetchFile {
    pub fn fetch(&self) -> Result<String, FetchFileError> {
        match read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(FetchFileError::NotFound(self.path.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dns_list.txt");
        std::fs::write(&path, "A | ipv4 | 1.1.1.1\n").unwrap();

        let contents = FetchFile { path }.fetch().unwrap();
        assert_eq!(contents, "A | ipv4 | 1.1.1.1\n");
    }

    #[test]
    fn it_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = FetchFile { path: path.clone() }.fetch().unwrap_err();
        assert!(matches!(err, FetchFileError::NotFound(p) if p == path));
    }
}
