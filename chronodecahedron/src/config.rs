use mpu6050::MPU6050_DEFAULT_I2C_ADDR;

/// Everything about the sensor that is decided by the firmware it runs in rather than by the
/// chip itself.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorConfig
{
    /// 7 bit i2c address of the MPU6050.
    pub address: u8,

    /// In milliseconds; how often the scheduler should call `Sensor::poll()`.
    pub update_interval_ms: u32,
}

impl SensorConfig {
    pub const fn new(address: u8, update_interval_ms: u32) -> Self {
        SensorConfig { address, update_interval_ms }
    }

    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub const fn with_update_interval_ms(mut self, update_interval_ms: u32) -> Self {
        self.update_interval_ms = update_interval_ms;
        self
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        SensorConfig::new(MPU6050_DEFAULT_I2C_ADDR, 1000)
    }
}
