//! Per-joystick output lines.

use crate::enumeration::JoystickInfo;
use crate::resolver::Resolution;
use std::fmt;
use std::path::PathBuf;

pub const UNKNOWN_MARKER: &str = "(unknown)";
pub const NULL_NAME: &str = "(null)";

/// What to show in the path column of a joystick line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDisplay {
    /// The enumeration reported no path at all
    Unknown,
    /// A path was reported but it does not resolve to a joystick interface
    Raw(String),
    /// Resolved joystick interface, plus the reported path it came from
    Resolved { device_node: PathBuf, raw: String },
}

impl PathDisplay {
    /// Applies the fallback policy around a lookup.
    ///
    /// `resolve` is only called when there is a non-empty path to resolve.
    pub fn compose<F>(raw: Option<&str>, resolve: F) -> Self
    where
        F: FnOnce(&str) -> Resolution,
    {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return PathDisplay::Unknown,
        };

        match resolve(raw) {
            Resolution::Found { device_node, .. } => PathDisplay::Resolved {
                device_node,
                raw: raw.to_string(),
            },
            Resolution::NotFound => PathDisplay::Raw(raw.to_string()),
        }
    }
}

impl fmt::Display for PathDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathDisplay::Unknown => f.write_str(UNKNOWN_MARKER),
            PathDisplay::Raw(raw) => f.write_str(raw),
            PathDisplay::Resolved { device_node, raw } => {
                write!(f, "{} ({})", device_node.display(), raw)
            }
        }
    }
}

/// One output line.
#[derive(Debug, Clone)]
pub struct DeviceReport<'a> {
    pub info: &'a JoystickInfo,
    pub path: PathDisplay,
}

impl fmt::Display for DeviceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} path={} name=\"{}\" guid={} vendor=0x{:04x} product=0x{:04x} version=0x{:04x}",
            self.info.index,
            self.path,
            self.info.name.as_deref().unwrap_or(NULL_NAME),
            self.info.guid,
            self.info.vendor,
            self.info.product,
            self.info.version,
        )
    }
}
