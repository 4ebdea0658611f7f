//! Event interface to joystick interface resolution
//!
//! Linux exposes a joystick twice: as a generic event interface
//! (`/dev/input/eventN`) and as a legacy joystick interface (`/dev/input/jsM`).
//! The numbers are unrelated. Both show up in the device tree
//! (`/sys/class/input`) and each entry carries a `device` link to the same
//! physical input device, which is what ties them together:
//!
//! ```text
//! /sys/class/input/event5/device ─┐
//!                                 ├─► /sys/devices/.../input/input12
//! /sys/class/input/js0/device ────┘
//! ```
//!
//! [`DeviceNodeResolver`] walks the tree and answers `event5 -> js0`.

pub mod device_tree;
pub mod node_name;
#[allow(clippy::module_inception)]
pub mod resolver;

pub use device_tree::{DeviceTree, SysfsTree};
pub use node_name::{last_segment, NodeName};
pub use resolver::{DeviceNodeResolver, ResolveError, Resolution};
