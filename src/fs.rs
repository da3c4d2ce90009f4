use std::path::Path;

pub trait FileSystem {
    fn read(&mut self, path: &Path) -> Result<Vec<u8>, std::io::Error>;
}

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&mut self, path: &Path) -> Result<Vec<u8>, std::io::Error> {
        std::fs::read(path)
    }
}

/// Serves file contents from memory. Paths without an entry fail with `NotFound`.
#[cfg(test)]
pub struct MockFileSystem {
    pub files: std::collections::HashMap<std::path::PathBuf, Vec<u8>>,
    pub reads: Vec<std::path::PathBuf>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: std::collections::HashMap::new(),
            reads: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: &Path, content: &[u8]) -> Self {
        self.files.insert(path.to_path_buf(), content.to_vec());
        self
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read(&mut self, path: &Path) -> Result<Vec<u8>, std::io::Error> {
        self.reads.push(path.to_path_buf());
        match self.files.get(path) {
            Some(content) => Ok(content.clone()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "mock file not found",
            )),
        }
    }
}
