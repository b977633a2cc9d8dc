use crate::{Add0Pin, Add1Pin, Address, Error, Register, RegisterPointer};
use byteorder::{BigEndian, ByteOrder};
use embedded_hal::i2c::{Error as I2cError, I2c};

/// AS621x temperature sensor on an I2C bus
///
/// Every register access is a single `embedded_hal` I2C call, so shared bus
/// implementations hold the bus for the whole exchange, including the
/// pointer write of an uncached read.
pub struct As621x<I> {
    i2c: I,
    address: Address,
    pointer: RegisterPointer,
}

impl<E: I2cError, I: I2c<Error = E>> As621x<I> {
    pub fn new(i2c: I, add1: Add1Pin, add0: Add0Pin) -> Self {
        let address = Address::from_pins(add1, add0);
        debug!(
            "as621x at address {}, alert enabled: {}",
            address.seven_bit(),
            address.alert_enabled()
        );
        As621x {
            i2c,
            address,
            pointer: RegisterPointer::Unknown,
        }
    }

    /// Destroys the driver and gives back the bus
    pub fn release(self) -> I {
        self.i2c
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Whether the ADD1 pin was strapped to the alert pull-up
    pub fn alert_enabled(&self) -> bool {
        self.address.alert_enabled()
    }

    pub fn register_pointer(&self) -> RegisterPointer {
        self.pointer
    }

    /// Forgets the cached pointer so the next read re-addresses the sensor,
    /// e.g. after it was power cycled behind the driver's back
    pub fn invalidate_register_pointer(&mut self) {
        self.pointer.invalidate();
    }

    pub fn read_configuration(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::Configuration)
    }

    pub fn write_configuration(&mut self, value: u16) -> Result<(), Error<E>> {
        self.write_register(Register::Configuration, value)
    }

    /// Reads the big-endian word of a register
    ///
    /// The pointer write is skipped when the sensor already points at
    /// `register`, otherwise pointer write and data read happen in one
    /// `write_read` exchange.
    pub fn read_register(&mut self, register: Register) -> Result<u16, Error<E>> {
        let address = self.address.seven_bit();
        let mut buf = [0u8; 2];

        let result = if self.pointer.is_pointing_at(register) {
            trace!("pointer at {:?}, skipping pointer write", register);
            self.i2c.read(address, &mut buf)
        } else {
            self.i2c.write_read(address, &[register.index()], &mut buf)
        };

        if let Err(e) = result {
            warn!("reading {:?} failed: {:?}", register, e.kind());
            self.pointer.invalidate();
            return Err(Error::Bus(e));
        }

        self.pointer.point_at(register);
        Ok(BigEndian::read_u16(&buf))
    }

    /// Writes the index byte followed by the big-endian word in one transfer
    pub fn write_register(&mut self, register: Register, value: u16) -> Result<(), Error<E>> {
        let mut buf = [register.index(), 0, 0];
        BigEndian::write_u16(&mut buf[1..], value);

        if let Err(e) = self.i2c.write(self.address.seven_bit(), &buf) {
            warn!("writing {:?} failed: {:?}", register, e.kind());
            self.pointer.invalidate();
            return Err(Error::Bus(e));
        }

        self.pointer.point_at(register);
        Ok(())
    }

    /// Like [`As621x::read_register`], for a raw register index
    pub fn read_register_at(&mut self, index: u8) -> Result<u16, Error<E>> {
        let register = Register::from_index(index).ok_or(Error::InvalidRegister)?;
        self.read_register(register)
    }

    /// Like [`As621x::write_register`], for a raw register index
    pub fn write_register_at(&mut self, index: u8, value: u16) -> Result<(), Error<E>> {
        let register = Register::from_index(index).ok_or(Error::InvalidRegister)?;
        self.write_register(register, value)
    }
}
