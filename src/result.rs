use core::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: Sized + Debug> {
    /// Addressed transfer failed on the bus
    Bus(E),
    /// Register is unknown or not allowed for the requested operation
    InvalidRegister,
}

impl<E: Sized + Debug> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Error::Bus(e) => write!(f, "i2c bus error: {:?}", e),
            Error::InvalidRegister => f.write_str("invalid register"),
        }
    }
}
