
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroScaleRange
{
    D250 = 0,
    D500 = 1,
    D1000 = 2,
    D2000 = 3,
}

impl GyroScaleRange {
    
    /// Converts the given full scale range setting into the bits one would need to write into the
    /// `GYRO_CONFIG` register to configure the sensor to use that scale range.
    /// 
    pub const fn as_register(&self) -> u8 {
        (*self as u8) << 3
    }
    
    /// Gets the full scale range currently configured in the `GYRO_CONFIG` register based on its
    /// contents.
    /// 
    pub const fn from_register(value: u8) -> Self {
        match (value >> 3) & 0b011 {
            0 => Self::D250,
            1 => Self::D500,
            2 => Self::D1000,
            _ => Self::D2000,
        }
    }
    
    /// Gets the resolution for the given scale range in (deg/s) per LSB.
    /// 
    pub const fn dps_per_lsb(&self) -> f32 {
        match self {
            Self::D250 => 0.007633,
            Self::D500 => 0.015267,
            Self::D1000 => 0.030487,
            Self::D2000 => 0.060975,
        }
    }
}

impl Default for GyroScaleRange {
    fn default() -> Self {
        GyroScaleRange::D250
    }
}
