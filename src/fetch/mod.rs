mod file;

use std::path::Path;

pub use self::file::{FetchFile, FetchFileError as FetchError};

impl From<&Path> for FetchFile {
    fn from(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}
