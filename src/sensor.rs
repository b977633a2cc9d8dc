/// Generic measurement interface for temperature sensors
pub trait Sensor {
    type Error;

    /// returns the measured temperature in degrees Celsius
    fn read_measurement(&mut self) -> Result<f64, Self::Error>;

    /// returns the measured value as encoded by the sensor
    fn read_measurement_raw(&mut self) -> Result<u16, Self::Error>;
}
