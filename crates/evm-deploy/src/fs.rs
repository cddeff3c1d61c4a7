use std::fs;

use crate::error::DeployError;

// Source of artifact bytes, swappable in tests
pub trait FileReader {
    fn read(&self, path: &str) -> Result<Vec<u8>, DeployError>;
}

pub struct DefaultFileReader;

impl FileReader for DefaultFileReader {
    fn read(&self, path: &str) -> Result<Vec<u8>, DeployError> {
        fs::read(path).map_err(|e| DeployError::FileReadError(format!("{}: {}", path, e)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_reader() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let bytes = DefaultFileReader
            .read(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(bytes, b"{}");
    }

    #[test]
    fn test_default_reader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Missing.json");
        let res = DefaultFileReader.read(path.to_str().unwrap());
        assert!(matches!(res, Err(DeployError::FileReadError(_))));
    }
}
