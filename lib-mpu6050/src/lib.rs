#![cfg_attr(not(test), no_std)]

pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod bus;
pub use bus::*;

pub mod data;
pub use data::*;

pub mod error;
pub use error::*;

pub mod motion;
pub use motion::*;

pub mod registers;

pub mod mpu6050;
pub use mpu6050::*;

#[cfg(test)]
mod tests;

/// Default i2c address of the MPU 6050 chip.
/// 
pub const MPU6050_DEFAULT_I2C_ADDR: u8 = 0x68;

/// The contents of the `WHO_AM_I` register of a genuine MPU6050 chip.
/// 
pub const MPU6050_DEVICE_ID: u8 = 0x68;
