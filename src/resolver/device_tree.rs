//! Read-only view of the device tree.
//!
//! The resolver and the sysfs enumeration backend only ever list directories,
//! canonicalize paths and read small attribute files. Keeping those three
//! operations behind [`DeviceTree`] lets tests count or fake every access.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait DeviceTree {
    /// Resolves every symlink in `path` to an absolute canonical path.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Names of the entries directly below `dir`, in directory order.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// Reads a small attribute file.
    fn read_attribute(&self, path: &Path) -> io::Result<String>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysfsTree;

impl DeviceTree for SysfsTree {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        // The ReadDir handle is dropped on every return path, including `?`.
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            match entry {
                Ok(entry) => names.push(entry.file_name()),
                // Entry vanished between readdir calls
                Err(e) => debug!("Skipping unreadable entry in {}: {}", dir.display(), e),
            }
        }
        Ok(names)
    }

    fn read_attribute(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

impl<T: DeviceTree + ?Sized> DeviceTree for &T {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }

    fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        (**self).list_dir(dir)
    }

    fn read_attribute(&self, path: &Path) -> io::Result<String> {
        (**self).read_attribute(path)
    }
}
