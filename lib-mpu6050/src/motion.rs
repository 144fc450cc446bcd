use crate::registers::*;

/// Register writes that arm the motion detection interrupt, in the order they are written. None
/// of these are read back.
/// 
/// Note that the `ACCEL_CONFIG` write replaces the whole register, which leaves the accelerometer
/// at ±2g.
/// 
pub const MOTION_INTERRUPT_CONFIG: [(u8, u8); 6] = [
    (INT_PIN_CFG, 0x30),        // Active high, latched until any register is read
    (ACCEL_CONFIG, 0x04),       // 0.63Hz digital high pass filter
    (MOT_THR, 15),              // 2mg per LSB
    (MOT_DUR, 10),              // 1ms per LSB
    (MOT_DETECT_CTRL, 0x15),    // Free-fall and motion decrements of 1, 1ms extra start-up delay
    (INT_ENABLE, 0x40),         // MOT_EN
];
