use std::io;
use std::path::PathBuf;

/// Resource-access port: how the engine reaches the packaged corpus.
///
/// Implementations map a source name to raw bytes. An `Err` here surfaces as
/// `CorpusError::ResourceUnavailable` to the engine's callers.
pub trait BookResources: Send + Sync {
    fn open(&self, source_name: &str) -> io::Result<Vec<u8>>;
}

/// Directory-backed resources: one `<source_name>.json` file per book.
#[derive(Debug, Clone)]
pub struct FsBookResources {
    root: PathBuf,
}

impl FsBookResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl BookResources for FsBookResources {
    fn open(&self, source_name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(format!("{}.json", source_name)))
    }
}
