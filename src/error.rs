use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read directory {path:?}")]
    DirectoryRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Failed to write {path:?}")]
    FileWrite {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}
