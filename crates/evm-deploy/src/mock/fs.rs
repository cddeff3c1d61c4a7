use crate::error::DeployError;
use crate::fs::FileReader;

pub struct MockFileReader {
    mock_data: Result<Vec<u8>, DeployError>,
}

impl MockFileReader {
    pub fn new(mock_data: Result<Vec<u8>, DeployError>) -> Self {
        MockFileReader { mock_data }
    }
}

impl FileReader for MockFileReader {
    fn read(&self, _path: &str) -> Result<Vec<u8>, DeployError> {
        self.mock_data.clone()
    }
}
