use log::LevelFilter;
use rand::Rng;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;

// Two lines, nested loops and a comment, so parsing has line/column work to do
pub const TEST_FILE_CONTENT: &str = "+[>,[<;]]\n<< read then write ;";
pub const TEST_FILE_NUM_INSTRUCTIONS: usize = 12;

/// A Boolfuck program written out to a temporary file.
pub struct TestFile {
    file: NamedTempFile,
}

impl TestFile {
    pub fn new() -> io::Result<Self> {
        Self::with_contents(TEST_FILE_CONTENT)
    }

    pub fn with_contents(contents: &str) -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", contents)?;

        // Rewind so the file can be handed straight to a reader
        file.seek(SeekFrom::Start(0))?;
        Ok(TestFile { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Read for TestFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.as_file_mut().read(buf)
    }
}

// Setup logging for any tests that it might be useful for
pub fn setup_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter(None, LevelFilter::Debug)
        .try_init();
}

pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buffer = vec![0u8; len];
    rand::thread_rng().fill(&mut buffer[..]);
    buffer
}
