use std::fmt;

/// 16-byte joystick identifier in the layout SDL2 uses on Linux.
///
/// Displayed as 32 lowercase hex characters, the same string
/// `SDL_JoystickGetGUIDString` produces, so it can be matched against
/// controller mapping databases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct JoystickGuid(pub [u8; 16]);

impl JoystickGuid {
    /// Builds the GUID from the kernel `input_id` quadruple.
    ///
    /// Each value is stored little-endian and followed by two zero bytes.
    pub fn from_input_id(bustype: u16, vendor: u16, product: u16, version: u16) -> Self {
        let mut bytes = [0u8; 16];
        for (slot, value) in [bustype, vendor, product, version].into_iter().enumerate() {
            bytes[slot * 4..slot * 4 + 2].copy_from_slice(&value.to_le_bytes());
        }
        Self(bytes)
    }

    fn word(&self, slot: usize) -> u16 {
        u16::from_le_bytes([self.0[slot * 4], self.0[slot * 4 + 1]])
    }

    pub fn bustype(&self) -> u16 {
        self.word(0)
    }

    pub fn vendor(&self) -> u16 {
        self.word(1)
    }

    pub fn product(&self) -> u16 {
        self.word(2)
    }

    pub fn version(&self) -> u16 {
        self.word(3)
    }
}

impl fmt::Display for JoystickGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
