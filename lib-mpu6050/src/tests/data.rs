use math::{approx_eq, nearest_integer, G_TO_MS2};
use crate::*;

fn sample(accel: [i16; 3], temp: i16, gyro: [i16; 3]) -> RawSample {
    RawSample { accel, temp, gyro }
}

#[test]
fn test_temperature_at_zero() {
    let data = sample([0; 3], 0, [0; 3]).decode();
    assert!(approx_eq(data.temp, 36.53, 1e-5), "{}", data.temp);
}

#[test]
fn test_temperature_one_degree_up() {
    let data = sample([0; 3], 340, [0; 3]).decode();
    assert!(approx_eq(data.temp, 37.53, 1e-5), "{}", data.temp);
}

#[test]
fn test_gyro_scale() {
    let data = sample([0; 3], 0, [1000, -1000, 0]).decode();
    assert!(approx_eq(data.gyro.x, 60.975, 1e-4), "{}", data.gyro.x);
    assert!(approx_eq(data.gyro.y, -60.975, 1e-4), "{}", data.gyro.y);
    assert_eq!(data.gyro.z, 0.0);
}

#[test]
fn test_accel_scale() {
    // 16384 * 0.000061 g = 0.999424 g
    let data = sample([0, 0, 16384], 0, [0; 3]).decode();
    assert!(approx_eq(data.accel.z, 9.801001, 1e-5), "{}", data.accel.z);
    assert_eq!(data.accel.x, 0.0);
    assert_eq!(data.accel.y, 0.0);
}

#[test]
fn test_accel_round_trip() {
    let factor = ACCEL_G_PER_LSB * G_TO_MS2;
    for raw in [i16::MIN, -16384, -1234, -1, 0, 1, 7, 2048, 16384, i16::MAX] {
        let data = sample([raw, raw, raw], 0, [0; 3]).decode();
        assert_eq!(nearest_integer(data.accel.x / factor, 0.05), Some(raw as i32), "{}", raw);
    }
}

#[test]
fn test_from_words_keeps_register_order() {
    let raw = RawSample::from_words([1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(raw, sample([1, 2, 3], 4, [5, 6, 7]));
}

#[test]
fn test_from_words_is_signed() {
    let raw = RawSample::from_words([0xFFFF, 0x8000, 0x7FFF, 0xFFFE, 0, 0, 0]);
    assert_eq!(raw.accel, [-1, i16::MIN, i16::MAX]);
    assert_eq!(raw.temp, -2);
}

#[test]
fn test_scale_range_register_bits() {
    assert_eq!(GyroScaleRange::D2000.as_register(), 0b0001_1000);
    assert_eq!(AccelScaleRange::G2.as_register(), 0);
    assert_eq!(GyroScaleRange::from_register(0b1111_1111), GyroScaleRange::D2000);
    assert_eq!(AccelScaleRange::from_register(0b1110_0111), AccelScaleRange::G2);
    assert_eq!(AccelScaleRange::from_register(0b0001_0000), AccelScaleRange::G8);
}
