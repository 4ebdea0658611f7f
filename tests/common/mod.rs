//! Builds a miniature `/sys` inside a temp dir.
//!
//! Mirrors the real layout: the class entry is a symlink into the device
//! hierarchy and each interface's `device` link points at its parent input
//! device.
//!
//! ```text
//! sys/class/input/event5 -> sys/devices/<dev>/input/event5
//! sys/devices/<dev>/input/event5/device -> ..
//! ```

#![allow(dead_code)]

use joynode::config::ResolverConfig;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct FakeSysfs {
    dir: TempDir,
}

impl FakeSysfs {
    pub fn new() -> Self {
        let sysfs = Self {
            dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(sysfs.class_dir()).unwrap();
        sysfs
    }

    pub fn class_dir(&self) -> PathBuf {
        self.dir.path().join("sys/class/input")
    }

    pub fn config(&self) -> ResolverConfig {
        ResolverConfig {
            device_tree_root: self.class_dir(),
            ..ResolverConfig::default()
        }
    }

    /// Creates an input device directory and returns it.
    pub fn add_device(&self, name: &str) -> PathBuf {
        let device = self.dir.path().join("sys/devices").join(name).join("input");
        fs::create_dir_all(&device).unwrap();
        device
    }

    /// Writes the attributes the sysfs enumeration reads.
    pub fn describe_device(&self, device: &Path, name: &str, ids: [&str; 4], abs: &str) {
        fs::create_dir_all(device.join("id")).unwrap();
        fs::create_dir_all(device.join("capabilities")).unwrap();
        fs::write(device.join("name"), format!("{}\n", name)).unwrap();
        for (field, value) in ["bustype", "vendor", "product", "version"].iter().zip(ids) {
            fs::write(device.join("id").join(field), format!("{}\n", value)).unwrap();
        }
        fs::write(device.join("capabilities/abs"), format!("{}\n", abs)).unwrap();
    }

    /// Exposes `iface` (e.g. `js0`) for `device` under the class directory.
    pub fn add_interface(&self, device: &Path, iface: &str) {
        let iface_dir = device.join(iface);
        fs::create_dir_all(&iface_dir).unwrap();
        symlink("..", iface_dir.join("device")).unwrap();
        symlink(&iface_dir, self.class_dir().join(iface)).unwrap();
    }

    /// Class entry whose `device` link points nowhere.
    pub fn add_dangling_interface(&self, iface: &str) {
        let iface_dir = self.class_dir().join(iface);
        fs::create_dir_all(&iface_dir).unwrap();
        symlink(
            self.dir.path().join("sys/devices/gone/input"),
            iface_dir.join("device"),
        )
        .unwrap();
    }
}
