/// Internal registers of the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Last converted temperature
    Temperature = 0,
    /// Configuration word, kept opaque by this driver
    Configuration = 1,
    /// Alert low threshold
    LowThreshold = 2,
    /// Alert high threshold
    HighThreshold = 3,
}

impl Register {
    /// One-byte index written to the pointer register
    pub fn index(&self) -> u8 {
        *self as _
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Register::Temperature),
            1 => Some(Register::Configuration),
            2 => Some(Register::LowThreshold),
            3 => Some(Register::HighThreshold),
            _ => None,
        }
    }

    /// Whether the register holds a fixed-point temperature
    pub fn holds_temperature(&self) -> bool {
        !matches!(self, Register::Configuration)
    }
}
