use crate::error::Error;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Suffix an entry name must end with to count as an icon (case-sensitive)
pub const SVG_SUFFIX: &str = ".svg";

/// Ordered list of icon stems, in the order they were collected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconNames(Vec<String>);

impl IconNames {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sort stems by byte order so output does not depend on the filesystem
    pub fn sort(&mut self) {
        self.0.sort();
    }

}

impl<'a> IntoIterator for &'a IconNames {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collect the stems of every `*.svg` entry directly inside `dir`.
///
/// Entries are not filtered by type, so a sub-directory named `foo.svg`
/// contributes `foo`. Order follows the directory listing. Fails if `dir`
/// is not a directory, or if a `*.svg` entry name is not valid UTF-8.
pub fn collect_icon_names(dir: &Path) -> Result<IconNames, Error> {
    log::debug!("Scanning for SVG files in: {}", dir.display());

    let directory_read_error = |source| Error::DirectoryRead {
        source,
        path: dir.to_path_buf(),
    };

    let mut names = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|err| directory_read_error(io::Error::from(err)))?;

        if entry.depth() == 0 {
            if !entry.path().is_dir() {
                return Err(directory_read_error(io::Error::other("not a directory")));
            }
            continue;
        }

        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(name) => name,
            // Lossy conversion keeps ASCII bytes, so the suffix check is exact
            None if file_name.to_string_lossy().ends_with(SVG_SUFFIX) => {
                return Err(directory_read_error(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("icon file name is not valid UTF-8: {:?}", file_name),
                )));
            }
            None => {
                log::debug!("  Skipping non UTF-8 entry: {:?}", file_name);
                continue;
            }
        };

        if let Some(stem) = stem_of(name) {
            log::debug!("  Found: {} -> {}", name, stem);
            names.push(stem.to_owned());
        }
    }

    Ok(IconNames::new(names))
}

/// Strip the `.svg` suffix from `name`, or `None` if it doesn't have one
pub fn stem_of(name: &str) -> Option<&str> {
    name.strip_suffix(SVG_SUFFIX)
}
