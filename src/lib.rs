#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

mod fmt;

mod address;
mod driver;
mod pointer;
mod register;
mod result;
mod sensor;
mod temperature;

pub use address::{Add0Pin, Add1Pin, Address, PinError};
pub use driver::As621x;
pub use pointer::RegisterPointer;
pub use register::Register;
pub use result::Error;
pub use sensor::Sensor;
pub use temperature::{celsius_to_raw, raw_to_celsius, LSB_PER_CELSIUS};
