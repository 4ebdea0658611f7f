//! Maps joysticks to their legacy joystick device nodes.
//!
//! ```text
//! JoystickSession ──► JoystickInfo ──► DeviceNodeResolver ──► PathDisplay
//!  (gilrs | sysfs)    (event path)      (event5 -> js0)       (report line)
//! ```

pub mod config;
pub mod enumeration;
pub mod report;
pub mod resolver;

pub use config::{AppConfig, ResolverConfig, SourceKind};
pub use enumeration::{JoystickInfo, JoystickSession};
pub use report::{DeviceReport, PathDisplay};
pub use resolver::{DeviceNodeResolver, Resolution};
