use crate::Register;

/// Register the sensor's pointer is known to target
///
/// The sensor keeps its pointer across reads, so a read of the register it
/// already points at can skip the pointer write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterPointer {
    /// No assumption about the device, the next read re-addresses
    #[default]
    Unknown,
    PointingAt(Register),
}

impl RegisterPointer {
    pub fn is_pointing_at(&self, register: Register) -> bool {
        *self == RegisterPointer::PointingAt(register)
    }

    pub(crate) fn point_at(&mut self, register: Register) {
        *self = RegisterPointer::PointingAt(register);
    }

    pub(crate) fn invalidate(&mut self) {
        *self = RegisterPointer::Unknown;
    }
}
