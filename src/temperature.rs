//! Fixed-point temperature encoding
//!
//! Temperature registers hold a two's complement word in 1/128 °C steps,
//! giving a range of -256 °C to just below +256 °C.

use embedded_hal::i2c::{Error as I2cError, I2c};

use crate::{As621x, Error, Register, Sensor};

/// Counts per degree Celsius
pub const LSB_PER_CELSIUS: f64 = 128.0;

pub fn raw_to_celsius(raw: u16) -> f64 {
    raw as i16 as f64 / LSB_PER_CELSIUS
}

/// Rounds to the nearest count, halves away from zero
///
/// The rounded count saturates to `i32` and is then truncated to 16 bits, so
/// values just outside the register range wrap around while huge or infinite
/// values end up as an arbitrary word (`+inf` encodes as `0xffff`). NaN
/// encodes as `0x0000`. Check the range before writing thresholds.
pub fn celsius_to_raw(celsius: f64) -> u16 {
    libm::round(celsius * LSB_PER_CELSIUS) as i32 as i16 as u16
}

impl<E: I2cError, I: I2c<Error = E>> As621x<I> {
    /// Reads one of the temperature registers in degrees Celsius
    ///
    /// Fails with [`Error::InvalidRegister`] for [`Register::Configuration`]
    /// without touching the bus.
    pub fn read_temperature(&mut self, register: Register) -> Result<f64, Error<E>> {
        if !register.holds_temperature() {
            return Err(Error::InvalidRegister);
        }
        self.read_register(register).map(raw_to_celsius)
    }

    /// Writes one of the temperature registers, usually a threshold
    pub fn write_temperature(&mut self, register: Register, celsius: f64) -> Result<(), Error<E>> {
        if !register.holds_temperature() {
            return Err(Error::InvalidRegister);
        }
        self.write_register(register, celsius_to_raw(celsius))
    }
}

impl<E: I2cError, I: I2c<Error = E>> Sensor for As621x<I> {
    type Error = Error<E>;

    fn read_measurement(&mut self) -> Result<f64, Self::Error> {
        self.read_temperature(Register::Temperature)
    }

    fn read_measurement_raw(&mut self) -> Result<u16, Self::Error> {
        self.read_register(Register::Temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::{celsius_to_raw, raw_to_celsius};
    use crate::driver::tests::{sensor, ADDR};
    use crate::{Error, Register, Sensor};
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;

    #[test]
    fn test_temp_conv() {
        assert_eq!(raw_to_celsius(0x0190), 3.125);
        assert_eq!(raw_to_celsius(0xfe70), -3.125);
        assert_eq!(raw_to_celsius(0x0000), 0.0);
        assert_eq!(raw_to_celsius(0x0001), 0.0078125);
        assert_eq!(raw_to_celsius(0x7fff), 255.9921875);
        assert_eq!(raw_to_celsius(0x8000), -256.0);

        assert_eq!(celsius_to_raw(27.5), 0x0dc0);
        assert_eq!(celsius_to_raw(-3.125), 0xfe70);
        assert_eq!(celsius_to_raw(0.0), 0x0000);
    }

    #[test]
    fn conversion_rounds_to_nearest() {
        assert_eq!(celsius_to_raw(25.003), 0x0c80);
        assert_eq!(celsius_to_raw(25.005), 0x0c81);
        assert_eq!(celsius_to_raw(-0.003), 0x0000);
        assert_eq!(celsius_to_raw(-0.005), 0xffff);
    }

    #[test]
    fn out_of_range_wraps() {
        assert_eq!(celsius_to_raw(256.0), 0x8000);
        assert_eq!(celsius_to_raw(-256.0078125), 0x7fff);
    }

    #[test]
    fn huge_values_saturate_before_truncation() {
        assert_eq!(celsius_to_raw(1e10), 0xffff);
        assert_eq!(celsius_to_raw(f64::INFINITY), 0xffff);
        assert_eq!(celsius_to_raw(-1e10), 0x0000);
        assert_eq!(celsius_to_raw(f64::NEG_INFINITY), 0x0000);
        assert_eq!(celsius_to_raw(f64::NAN), 0x0000);
    }

    #[test]
    fn one_degree_is_one_lsb_scale() {
        assert_eq!(crate::raw_to_celsius(crate::LSB_PER_CELSIUS as u16), 1.0);
        assert_eq!(crate::celsius_to_raw(-1.0), 0xff80);
    }

    #[test]
    fn every_word_survives_conversion() {
        for raw in 0..=u16::MAX {
            assert_eq!(celsius_to_raw(raw_to_celsius(raw)), raw);
        }
    }

    #[test]
    fn configuration_is_not_a_temperature() {
        let (mut sensor, mut i2c) = sensor(&[]);

        assert_eq!(
            sensor.read_temperature(Register::Configuration),
            Err(Error::InvalidRegister)
        );
        assert_eq!(
            sensor.write_temperature(Register::Configuration, 20.0),
            Err(Error::InvalidRegister)
        );
        i2c.done();
    }

    #[test]
    fn read_thresholds() {
        let (mut sensor, mut i2c) = sensor(&[
            I2cTransaction::write_read(ADDR, vec![0x02], vec![0x25, 0x80]),
            I2cTransaction::write_read(ADDR, vec![0x03], vec![0x28, 0x00]),
        ]);

        assert_eq!(sensor.read_temperature(Register::LowThreshold), Ok(75.0));
        assert_eq!(sensor.read_temperature(Register::HighThreshold), Ok(80.0));
        i2c.done();
    }

    #[test]
    fn write_thresholds() {
        let (mut sensor, mut i2c) = sensor(&[
            I2cTransaction::write(ADDR, vec![0x02, 0xfe, 0x70]),
            I2cTransaction::write(ADDR, vec![0x03, 0x0d, 0xc0]),
        ]);

        sensor.write_temperature(Register::LowThreshold, -3.125).unwrap();
        sensor.write_temperature(Register::HighThreshold, 27.5).unwrap();
        i2c.done();
    }

    #[test]
    fn bus_error_is_propagated() {
        let (mut sensor, mut i2c) = sensor(&[
            I2cTransaction::write_read(ADDR, vec![0x00], vec![0x00, 0x00])
                .with_error(ErrorKind::Other),
            I2cTransaction::write(ADDR, vec![0x02, 0x00, 0x00])
                .with_error(ErrorKind::NoAcknowledge(
                    embedded_hal::i2c::NoAcknowledgeSource::Address,
                )),
        ]);

        assert_eq!(
            sensor.read_temperature(Register::Temperature),
            Err(Error::Bus(ErrorKind::Other))
        );
        assert!(matches!(
            sensor.write_temperature(Register::LowThreshold, 0.0),
            Err(Error::Bus(ErrorKind::NoAcknowledge(_)))
        ));
        i2c.done();
    }

    #[test]
    fn measure_through_sensor_trait() {
        let (mut sensor, mut i2c) = sensor(&[
            I2cTransaction::write_read(ADDR, vec![0x00], vec![0x0d, 0xc0]),
            I2cTransaction::read(ADDR, vec![0xfe, 0x70]),
        ]);

        assert_eq!(sensor.read_measurement(), Ok(27.5));
        assert_eq!(sensor.read_measurement_raw(), Ok(0xfe70));
        i2c.done();
    }
}
