//! Enumeration of event interfaces straight from the device tree.
//!
//! For every `<root>/eventN` whose device reports absolute axes, the device
//! attributes are read from `<root>/eventN/device/`:
//!
//! ```text
//! name                  "Microsoft X-Box 360 pad"
//! id/bustype            0003
//! id/vendor             045e
//! id/product            028e
//! id/version            0114
//! capabilities/abs      3003f
//! ```

use super::{EnumerationError, JoystickBackend, JoystickGuid, JoystickInfo};
use crate::config::ResolverConfig;
use crate::resolver::{DeviceTree, NodeName};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct SysfsSource<T> {
    tree: T,
    config: ResolverConfig,
}

impl<T: DeviceTree> SysfsSource<T> {
    pub fn new(tree: T, config: ResolverConfig) -> Self {
        Self { tree, config }
    }

    /// Event entries under the root, ordered by their numeric index.
    fn event_entries(&self) -> Result<Vec<(u32, String)>, EnumerationError> {
        let root = &self.config.device_tree_root;
        let names = self
            .tree
            .list_dir(root)
            .map_err(|source| EnumerationError::DeviceTreeError {
                path: root.clone(),
                source,
            })?;

        let mut entries: Vec<(u32, String)> = names
            .iter()
            .filter_map(|name| name.to_str())
            .filter_map(|name| {
                let node = NodeName::parse(name, &self.config.event_prefix)?;
                Some((node.index?, node.token.to_string()))
            })
            .collect();
        entries.sort();
        Ok(entries)
    }

    fn device_dir(&self, token: &str) -> PathBuf {
        self.config
            .device_tree_root
            .join(token)
            .join(&self.config.device_link)
    }

    fn has_absolute_axes(&self, device_dir: &Path) -> bool {
        match self
            .tree
            .read_attribute(&device_dir.join("capabilities").join("abs"))
        {
            Ok(bitmap) => bitmap
                .split_whitespace()
                .any(|word| u64::from_str_radix(word, 16).is_ok_and(|v| v != 0)),
            Err(e) => {
                debug!("No abs capabilities under {}: {}", device_dir.display(), e);
                false
            }
        }
    }

    fn read_id(&self, device_dir: &Path, field: &str) -> u32 {
        let path = device_dir.join("id").join(field);
        match self.tree.read_attribute(&path) {
            Ok(raw) => parse_hex(&raw).unwrap_or_else(|| {
                warn!("Unparsable id value {:?} in {}", raw.trim(), path.display());
                0
            }),
            Err(e) => {
                debug!("Failed to read {}: {}", path.display(), e);
                0
            }
        }
    }
}

fn parse_hex(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    u32::from_str_radix(digits, 16).ok()
}

impl<T: DeviceTree> JoystickBackend for SysfsSource<T> {
    fn name(&self) -> &'static str {
        "sysfs"
    }

    fn joysticks(&mut self) -> Result<Vec<JoystickInfo>, EnumerationError> {
        let mut joysticks = Vec::new();

        for (_, token) in self.event_entries()? {
            let device_dir = self.device_dir(&token);
            if !self.has_absolute_axes(&device_dir) {
                continue;
            }

            let name = match self.tree.read_attribute(&device_dir.join("name")) {
                Ok(name) => Some(name.trim_end().to_string()),
                Err(e) => {
                    debug!("No name for {}: {}", token, e);
                    None
                }
            };

            let bustype = self.read_id(&device_dir, "bustype");
            let vendor = self.read_id(&device_dir, "vendor");
            let product = self.read_id(&device_dir, "product");
            let version = self.read_id(&device_dir, "version");
            let guid = JoystickGuid::from_input_id(
                super::mask_u16(bustype),
                super::mask_u16(vendor),
                super::mask_u16(product),
                super::mask_u16(version),
            );

            let path = self.config.device_node_dir.join(&token);
            debug!("Joystick {} at {}", joysticks.len(), path.display());

            joysticks.push(JoystickInfo::from_raw_ids(
                joysticks.len(),
                name,
                guid,
                vendor,
                product,
                version,
                Some(path.to_string_lossy().into_owned()),
            ));
        }

        Ok(joysticks)
    }
}
