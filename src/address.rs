use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use embedded_hal::i2c::SevenBitAddress;

/// Level the ADD0 strap pin is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Add0Pin {
    Vss = 0,
    Vdd = 1,
    Sda = 2,
    Scl = 3,
}

/// Level the ADD1 strap pin is wired to
///
/// `PullUpVdd` means the ADD1 pin shares the ALERT pull-up to VDD. It resolves
/// to the same address bits as `Vss` and enables the alert output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Add1Pin {
    Scl = 1,
    Vss = 2,
    PullUpVdd = 3,
}

/// Error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Selector value outside the pin's range
    OutOfRange(u8),
    /// Unrecognised pin level name
    Invalid,
}

impl TryFrom<u8> for Add0Pin {
    type Error = PinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Add0Pin::Vss),
            1 => Ok(Add0Pin::Vdd),
            2 => Ok(Add0Pin::Sda),
            3 => Ok(Add0Pin::Scl),
            other => Err(PinError::OutOfRange(other)),
        }
    }
}

impl TryFrom<u8> for Add1Pin {
    type Error = PinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Add1Pin::Scl),
            2 => Ok(Add1Pin::Vss),
            3 => Ok(Add1Pin::PullUpVdd),
            other => Err(PinError::OutOfRange(other)),
        }
    }
}

impl FromStr for Add0Pin {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("vss") || s.eq_ignore_ascii_case("gnd") {
            Ok(Add0Pin::Vss)
        } else if s.eq_ignore_ascii_case("vdd") {
            Ok(Add0Pin::Vdd)
        } else if s.eq_ignore_ascii_case("sda") {
            Ok(Add0Pin::Sda)
        } else if s.eq_ignore_ascii_case("scl") {
            Ok(Add0Pin::Scl)
        } else {
            Err(PinError::Invalid)
        }
    }
}

impl FromStr for Add1Pin {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("scl") {
            Ok(Add1Pin::Scl)
        } else if s.eq_ignore_ascii_case("vss") || s.eq_ignore_ascii_case("gnd") {
            Ok(Add1Pin::Vss)
        } else if s.eq_ignore_ascii_case("pullup-vdd") || s.eq_ignore_ascii_case("pullup") {
            Ok(Add1Pin::PullUpVdd)
        } else {
            Err(PinError::Invalid)
        }
    }
}

/// Bus address of a sensor, resolved from its strap pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address {
    raw: SevenBitAddress,
    alert_enabled: bool,
}

impl Address {
    /// Fixed upper bits of every AS621x address
    pub const BASE: SevenBitAddress = 0x40;

    pub fn from_pins(add1: Add1Pin, add0: Add0Pin) -> Self {
        let (add1, alert_enabled) = match add1 {
            Add1Pin::PullUpVdd => (Add1Pin::Vss, true),
            other => (other, false),
        };
        Address {
            raw: Self::BASE | ((add1 as u8) << 2) | (add0 as u8),
            alert_enabled,
        }
    }

    /// 7-bit address as used by `embedded_hal::i2c`
    pub fn seven_bit(&self) -> SevenBitAddress {
        self.raw
    }

    /// Address shifted into the upper bits of the first bus byte, the
    /// lowest bit being left for the read/write direction
    pub fn wire_byte(&self) -> u8 {
        self.raw << 1
    }

    pub fn alert_enabled(&self) -> bool {
        self.alert_enabled
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{:#04x}", self.raw)
    }
}
