// LogPager - platform/fs.rs
//
// Filesystem abstraction for content scans.
// Lets the listing service be exercised without real file I/O faults.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Opens a named log file for a line-by-line read.
///
/// Every call must return an independent reader; the reader owns its file
/// handle, so dropping it on any exit path releases the handle.
pub trait LineSource {
    type Reader: BufRead;

    fn open_lines(&self, filename: &str) -> io::Result<Self::Reader>;
}

/// Line source backed by files in one directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LineSource for DirectorySource {
    type Reader = BufReader<File>;

    fn open_lines(&self, filename: &str) -> io::Result<Self::Reader> {
        let file = File::open(self.root.join(filename))?;
        Ok(BufReader::new(file))
    }
}
