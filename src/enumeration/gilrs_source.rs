use super::{EnumerationError, JoystickBackend, JoystickGuid, JoystickInfo};
use gilrs::Gilrs;
use tracing::{debug, error, info};

/// Enumeration through gilrs.
///
/// gilrs does not expose the event interface a gamepad was opened from, so
/// every entry comes back without a path and is reported as unknown.
pub struct GilrsSource {
    gilrs: Option<Gilrs>,
}

impl GilrsSource {
    pub fn open() -> Result<Self, EnumerationError> {
        info!("Initializing gilrs controller interface");
        let gilrs = match Gilrs::new() {
            Ok(g) => {
                info!("Successfully initialized gilrs");
                g
            }
            Err(e) => {
                error!("Failed to initialize gilrs: {}", e);
                return Err(EnumerationError::InitializationError(e.to_string()));
            }
        };

        Ok(Self { gilrs: Some(gilrs) })
    }
}

/// Builds an entry from what gilrs knows about a gamepad.
///
/// The uuid has the SDL GUID byte layout on little-endian hosts, so missing
/// vendor/product ids and the version come from it.
fn joystick_from_uuid(
    index: usize,
    name: &str,
    uuid: [u8; 16],
    vendor: Option<u16>,
    product: Option<u16>,
) -> JoystickInfo {
    let guid = JoystickGuid(uuid);
    JoystickInfo::from_raw_ids(
        index,
        Some(name.to_string()),
        guid,
        u32::from(vendor.unwrap_or_else(|| guid.vendor())),
        u32::from(product.unwrap_or_else(|| guid.product())),
        u32::from(guid.version()),
        None,
    )
}

impl JoystickBackend for GilrsSource {
    fn name(&self) -> &'static str {
        "gilrs"
    }

    fn joysticks(&mut self) -> Result<Vec<JoystickInfo>, EnumerationError> {
        let gilrs = self
            .gilrs
            .as_ref()
            .ok_or(EnumerationError::SessionClosed)?;

        let joysticks = gilrs
            .gamepads()
            .enumerate()
            .map(|(index, (id, gamepad))| {
                debug!("  [{}] ID: {}, Name: {}", index, id, gamepad.name());
                joystick_from_uuid(
                    index,
                    gamepad.name(),
                    gamepad.uuid(),
                    gamepad.vendor_id(),
                    gamepad.product_id(),
                )
            })
            .collect();

        Ok(joysticks)
    }

    fn shutdown(&mut self) {
        if self.gilrs.take().is_some() {
            debug!("gilrs context released");
        }
    }
}
