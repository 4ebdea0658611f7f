//! Joystick enumeration
//!
//! Produces one [`JoystickInfo`] per joystick the system knows about. Two
//! backends exist:
//!
//! 1. [`gilrs_source`] - gilrs gamepad enumeration, no device paths
//! 2. [`sysfs_source`] - event interfaces read straight from the device tree
//!
//! Backends are only reachable through a [`JoystickSession`], which owns the
//! backend for its whole lifetime and shuts it down exactly once, whether the
//! caller closes it explicitly or drops it on an early return.

pub mod gilrs_source;
pub mod guid;
pub mod sysfs_source;

pub use gilrs_source::GilrsSource;
pub use guid::JoystickGuid;
pub use sysfs_source::SysfsSource;

use crate::config::{ResolverConfig, SourceKind};
use crate::resolver::SysfsTree;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything the enumeration reports about one joystick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoystickInfo {
    pub index: usize,
    pub name: Option<String>,
    pub guid: JoystickGuid,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
    /// Event interface path, for backends that can report one
    pub path: Option<String>,
}

impl JoystickInfo {
    /// Builds an entry from raw id values, keeping only their low 16 bits.
    pub fn from_raw_ids(
        index: usize,
        name: Option<String>,
        guid: JoystickGuid,
        vendor: u32,
        product: u32,
        version: u32,
        path: Option<String>,
    ) -> Self {
        Self {
            index,
            name: name.filter(|n| !n.is_empty()),
            guid,
            vendor: mask_u16(vendor),
            product: mask_u16(product),
            version: mask_u16(version),
            path,
        }
    }
}

pub(crate) fn mask_u16(value: u32) -> u16 {
    (value & 0xFFFF) as u16
}

#[derive(Debug, thiserror::Error)]
pub enum EnumerationError {
    #[error("Failed to initialize joystick backend: {0}")]
    InitializationError(String),

    #[error("Failed to read device tree at {}: {source}", .path.display())]
    DeviceTreeError { path: PathBuf, source: io::Error },

    #[error("Joystick session already closed")]
    SessionClosed,
}

/// A source of joystick information.
pub trait JoystickBackend {
    fn name(&self) -> &'static str;

    /// Current joystick list, indexed from zero.
    fn joysticks(&mut self) -> Result<Vec<JoystickInfo>, EnumerationError>;

    /// Releases whatever the backend acquired when it was opened.
    fn shutdown(&mut self) {}
}

/// Caller-managed handle around an open backend.
pub struct JoystickSession {
    backend: Option<Box<dyn JoystickBackend>>,
}

impl JoystickSession {
    /// Opens the backend selected by `kind`.
    pub fn open(kind: SourceKind, config: &ResolverConfig) -> Result<Self, EnumerationError> {
        info!("Opening joystick session with {:?} backend", kind);

        let backend: Box<dyn JoystickBackend> = match kind {
            SourceKind::Gilrs => Box::new(GilrsSource::open()?),
            SourceKind::Sysfs => Box::new(SysfsSource::new(SysfsTree, config.clone())),
        };

        Ok(Self::with_backend(backend))
    }

    pub fn with_backend(backend: Box<dyn JoystickBackend>) -> Self {
        debug!("Joystick session bound to {} backend", backend.name());
        Self {
            backend: Some(backend),
        }
    }

    pub fn joysticks(&mut self) -> Result<Vec<JoystickInfo>, EnumerationError> {
        let backend = self
            .backend
            .as_mut()
            .ok_or(EnumerationError::SessionClosed)?;
        let joysticks = backend.joysticks()?;
        info!("{} backend reported {} joysticks", backend.name(), joysticks.len());
        Ok(joysticks)
    }

    pub fn close(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            info!("Closing {} joystick session", backend.name());
            backend.shutdown();
        }
    }
}

impl Drop for JoystickSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
