use math::{Vector, G_TO_MS2};
use crate::{AccelScaleRange, GyroScaleRange};

/// Full scale range the accelerometer is set up with, see [`crate::Mpu6050::initialize`].
pub const ACCEL_SCALE: AccelScaleRange = AccelScaleRange::G2;

/// Full scale range the gyroscope is set up with, see [`crate::Mpu6050::initialize`].
pub const GYRO_SCALE: GyroScaleRange = GyroScaleRange::D2000;

/// In g/LSB; resolution of the accelerometer at [`ACCEL_SCALE`].
pub const ACCEL_G_PER_LSB: f32 = ACCEL_SCALE.g_per_lsb();

/// In (deg/s)/LSB; resolution of the gyroscope at [`GYRO_SCALE`].
pub const GYRO_DPS_PER_LSB: f32 = GYRO_SCALE.dps_per_lsb();

// Formula from page 30 of the register map data sheet.
pub const TEMP_LSB_PER_DEG: f32 = 340.0;
pub const TEMP_OFFSET: f32 = 36.53;

/// Number of 16 bit words in one burst read starting at `ACCEL_XOUT_H`, the accelerometer,
/// temperature and gyroscope registers are laid out back to back in that order.
pub const RAW_SAMPLE_WORDS: usize = 7;

/// The untouched register contents of one burst read.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSample
{
    pub accel: [i16; 3],
    pub temp: i16,
    pub gyro: [i16; 3],
}

/// One sample converted to physical units.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorData
{
    /// In m/s².
    pub accel: Vector,
    /// In deg/s.
    pub gyro: Vector,
    /// In degrees celsius.
    pub temp: f32,
}

impl RawSample {

    /// Reinterprets the words of a burst read as the signed values they hold.
    /// 
    pub fn from_words(words: [u16; RAW_SAMPLE_WORDS]) -> Self {
        let signed = words.map(|word| word as i16);
        RawSample {
            accel: [ signed[0], signed[1], signed[2] ],
            temp: signed[3],
            gyro: [ signed[4], signed[5], signed[6] ],
        }
    }

    /// Converts the raw register values to physical units, every bit pattern is a valid reading so
    /// this can not fail.
    /// 
    pub fn decode(&self) -> SensorData {
        let accel = self.accel.map(|raw| raw as f32 * ACCEL_G_PER_LSB * G_TO_MS2);
        let gyro = self.gyro.map(|raw| raw as f32 * GYRO_DPS_PER_LSB);
        SensorData {
            accel: Vector::from(accel),
            gyro: Vector::from(gyro),
            temp: self.temp as f32 / TEMP_LSB_PER_DEG + TEMP_OFFSET,
        }
    }
}
