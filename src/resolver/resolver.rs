use super::device_tree::{DeviceTree, SysfsTree};
use super::node_name::{last_segment, NodeName};
use crate::config::ResolverConfig;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found {
        /// `<device node dir>/<joystick entry name>`, e.g. `/dev/input/js0`
        device_node: PathBuf,
        /// Index parsed from the joystick entry name
        index: Option<u32>,
    },
    NotFound,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    pub fn device_node(&self) -> Option<&Path> {
        match self {
            Resolution::Found { device_node, .. } => Some(device_node),
            Resolution::NotFound => None,
        }
    }

    pub fn joystick_index(&self) -> Option<u32> {
        match self {
            Resolution::Found { index, .. } => *index,
            Resolution::NotFound => None,
        }
    }
}

/// Why a lookup came back empty.
///
/// Never crosses [`DeviceNodeResolver::resolve`]; every variant maps to
/// [`Resolution::NotFound`] there.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Empty candidate path")]
    EmptyCandidate,

    #[error("'{0}' is not an event interface name")]
    NotEventToken(String),

    #[error("Failed to canonicalize {}: {source}", .path.display())]
    Canonicalize { path: PathBuf, source: io::Error },

    #[error("Failed to list {}: {source}", .path.display())]
    ListDir { path: PathBuf, source: io::Error },

    #[error("No joystick interface shares the device at {}", .0.display())]
    NoMatch(PathBuf),
}

/// Maps an event interface (`/dev/input/event5`) to the joystick interface
/// (`/dev/input/js0`) of the same physical device.
///
/// Two interfaces belong to the same device when the `device` links of their
/// device tree entries canonicalize to the same path. The resolver is
/// stateless; every call reads the tree afresh.
#[derive(Debug, Clone)]
pub struct DeviceNodeResolver<T> {
    tree: T,
    config: ResolverConfig,
}

impl DeviceNodeResolver<SysfsTree> {
    pub fn sysfs(config: ResolverConfig) -> Self {
        Self::new(SysfsTree, config)
    }
}

impl<T: DeviceTree> DeviceNodeResolver<T> {
    pub fn new(tree: T, config: ResolverConfig) -> Self {
        Self { tree, config }
    }

    /// Resolves an optional candidate path, degrading every failure to
    /// [`Resolution::NotFound`].
    pub fn resolve(&self, candidate: Option<&str>) -> Resolution {
        let Some(candidate) = candidate else {
            return Resolution::NotFound;
        };

        match self.try_resolve(candidate) {
            Ok(resolution) => resolution,
            Err(e) => {
                debug!("No joystick node for '{}': {}", candidate, e);
                Resolution::NotFound
            }
        }
    }

    pub fn resolve_path(&self, candidate: &str) -> Resolution {
        self.resolve(Some(candidate))
    }

    /// Same lookup as [`resolve`](Self::resolve) but keeps the failure reason.
    pub fn try_resolve(&self, candidate: &str) -> Result<Resolution, ResolveError> {
        if candidate.is_empty() {
            return Err(ResolveError::EmptyCandidate);
        }

        // No filesystem access before this check passes
        let segment = last_segment(candidate);
        let event = NodeName::parse(segment, &self.config.event_prefix)
            .ok_or_else(|| ResolveError::NotEventToken(segment.to_string()))?;

        let target = self.device_location(event.token)?;
        debug!("{} -> {}", event.token, target.display());

        let root = &self.config.device_tree_root;
        let entries = self
            .tree
            .list_dir(root)
            .map_err(|source| ResolveError::ListDir {
                path: root.clone(),
                source,
            })?;

        for entry in &entries {
            let Some(name) = entry.to_str() else {
                continue;
            };
            let Some(joystick) = NodeName::parse(name, &self.config.joystick_prefix) else {
                continue;
            };

            let location = match self.device_location(joystick.token) {
                Ok(location) => location,
                Err(e) => {
                    // Stale or unreadable entry, keep looking
                    warn!("Skipping {}: {}", joystick.token, e);
                    continue;
                }
            };

            if location.as_os_str() == target.as_os_str() {
                let device_node = self.config.device_node_dir.join(joystick.token);
                debug!("{} matches {}", event.token, device_node.display());
                return Ok(Resolution::Found {
                    device_node,
                    index: joystick.index,
                });
            }
        }

        Err(ResolveError::NoMatch(target))
    }

    /// Canonical location of `<root>/<entry>/<device link>`.
    fn device_location(&self, entry: &str) -> Result<PathBuf, ResolveError> {
        let path = self
            .config
            .device_tree_root
            .join(entry)
            .join(&self.config.device_link);

        self.tree
            .canonicalize(&path)
            .map_err(|source| ResolveError::Canonicalize { path, source })
    }
}
