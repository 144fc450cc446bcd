
pub const GYRO_CONFIG: u8 = 0x1B;   //[4:3] FS_SEL
pub const ACCEL_CONFIG: u8 = 0x1C;  //[4:3] AFS_SEL, [2:0] ACCEL_HPF

pub const MOT_THR: u8 = 0x1F;
pub const MOT_DUR: u8 = 0x20;

pub const INT_PIN_CFG: u8 = 0x37;
pub const INT_ENABLE: u8 = 0x38;

pub const ACCEL_XOUT_H: u8 = 0x3B; // Start of the accel, temp and gyro block, up to 0x48

pub const MOT_DETECT_CTRL: u8 = 0x69; //[5:4] ACCEL_ON_DELAY, [3:2] FF_COUNT, [1:0] MOT_COUNT
pub const PWR_MGMT_1: u8 = 0x6B;      //[7] DEVICE_RESET, [6] SLEEP, [3] TEMP_DIS, [2:0] CLKSEL

pub const WHO_AM_I: u8 = 0x75;

/// Clears the full scale select field (bits 3 and 4) of `GYRO_CONFIG` and `ACCEL_CONFIG`.
pub const SCALE_SELECT_MASK: u8 = 0b1110_0111;
