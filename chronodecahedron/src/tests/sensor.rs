use math::approx_eq;
use mpu6050::{registers::WHO_AM_I, InitError};
use processing::Face;
use super::fakes::*;
use crate::*;

fn all_outputs(published: &Published) -> SensorOutputs<Recorder> {
    SensorOutputs::new()
        .with_accel(
            recorder("accel_x", published),
            recorder("accel_y", published),
            recorder("accel_z", published),
        )
        .with_gyro(
            recorder("gyro_x", published),
            recorder("gyro_y", published),
            recorder("gyro_z", published),
        )
        .with_temperature(recorder("temperature", published))
        .with_face(recorder("face", published))
}

fn names(published: &Published) -> Vec<&'static str> {
    published.borrow().iter().map(|(name, _)| *name).collect()
}

fn value(published: &Published, name: &str) -> Option<f32> {
    published.borrow().iter().rev().find(|(n, _)| *n == name).map(|(_, value)| *value)
}

#[test]
fn test_poll_publishes_everything() {
    let bus = FakeBus::mpu6050();
    bus.set_sample([0, 0, 16384, 340, 1000, 0, -1000]);
    let published = Published::default();

    let mut sensor = Sensor::new(bus.clone(), SensorConfig::default(), all_outputs(&published));
    sensor.setup().unwrap();

    let outcome = sensor.poll();
    assert!(matches!(outcome, PollOutcome::Published { face: Some(_), .. }));

    assert_eq!(names(&published), vec![
        "accel_x", "accel_y", "accel_z",
        "temperature",
        "gyro_x", "gyro_y", "gyro_z",
        "face",
    ]);
    assert!(approx_eq(value(&published, "accel_z").unwrap(), 9.801001, 1e-5));
    assert!(approx_eq(value(&published, "temperature").unwrap(), 37.53, 1e-5));
    assert!(approx_eq(value(&published, "gyro_x").unwrap(), 60.975, 1e-4));
    assert!(approx_eq(value(&published, "gyro_z").unwrap(), -60.975, 1e-4));
    assert_eq!(value(&published, "face"), Some(1.0));
    assert!(!sensor.state().has_warning());
}

#[test]
fn test_only_configured_outputs_are_published() {
    let bus = FakeBus::mpu6050();
    bus.set_sample([0, 0, -16384, 0, 0, 0, 0]);
    let published = Published::default();
    let outputs = SensorOutputs::new()
        .with_temperature(recorder("temperature", &published))
        .with_face(recorder("face", &published));

    let mut sensor = Sensor::new(bus, SensorConfig::default(), outputs);
    sensor.setup().unwrap();
    sensor.poll();

    assert_eq!(names(&published), vec!["temperature", "face"]);
    assert_eq!(value(&published, "face"), Some(12.0));
}

#[test]
fn test_identity_mismatch_fails_for_good() {
    let bus = FakeBus::mpu6050();
    bus.set_register(WHO_AM_I, 0x00);
    let published = Published::default();

    let mut sensor = Sensor::new(bus.clone(), SensorConfig::default(), all_outputs(&published));
    let result = sensor.setup();

    assert_eq!(result, Err(AppError::Setup(InitError::IdentityMismatch { found: 0x00 })));
    assert!(sensor.state().is_failed());
    assert!(bus.writes().is_empty());

    assert_eq!(sensor.poll(), PollOutcome::DeviceFailed);
    assert_eq!(sensor.read(), Err(AppError::DeviceFailed));
    assert_eq!(bus.bursts(), 0);
    assert!(published.borrow().is_empty());
}

#[test]
fn test_read_failure_publishes_nothing() {
    let bus = FakeBus::mpu6050();
    bus.set_sample([0, 0, 16384, 0, 0, 0, 0]);
    let published = Published::default();

    let mut sensor = Sensor::new(bus.clone(), SensorConfig::default(), all_outputs(&published));
    sensor.setup().unwrap();
    sensor.poll();
    let before = published.borrow().clone();

    bus.fail_bursts(true);
    assert_eq!(sensor.poll(), PollOutcome::ReadFailed);
    assert!(sensor.state().has_warning());
    assert!(!sensor.state().is_failed());
    assert_eq!(*published.borrow(), before);

    // Retried on the next tick, without any limit.
    assert_eq!(sensor.poll(), PollOutcome::ReadFailed);
    bus.fail_bursts(false);
    assert!(matches!(sensor.poll(), PollOutcome::Published { .. }));
    assert!(!sensor.state().has_warning());
    assert_eq!(bus.bursts(), 4);
}

#[test]
fn test_free_fall_keeps_last_face() {
    let bus = FakeBus::mpu6050();
    let published = Published::default();
    let outputs = SensorOutputs::new().with_face(recorder("face", &published));

    let mut sensor = Sensor::new(bus.clone(), SensorConfig::default(), outputs);
    sensor.setup().unwrap();

    // No face is known yet, so none is published.
    bus.set_sample([0; 7]);
    assert!(matches!(sensor.poll(), PollOutcome::Published { face: None, .. }));
    assert!(published.borrow().is_empty());

    bus.set_sample([0, 0, -16384, 0, 0, 0, 0]);
    sensor.poll();
    bus.set_sample([0; 7]);
    let outcome = sensor.poll();

    assert!(matches!(outcome, PollOutcome::Published { face, .. } if face == Face::new(12)));
    assert_eq!(*published.borrow(), vec![("face", 12.0), ("face", 12.0)]);
}

#[test]
fn test_release_gives_back_bus() {
    let bus = FakeBus::mpu6050();
    let sensor = Sensor::new(bus, SensorConfig::default(), SensorOutputs::<Recorder>::new());
    let (bus, outputs) = sensor.release();
    assert_eq!(bus.bursts(), 0);
    assert!(outputs.configured().iter().all(|(_, configured)| !configured));
}

#[test]
fn test_default_config() {
    let config = SensorConfig::default();
    assert_eq!(config.address, 0x68);
    assert_eq!(config.update_interval_ms, 1000);

    let config = config.with_address(0x69).with_update_interval_ms(250);
    assert_eq!(config, SensorConfig::new(0x69, 250));
}

#[test]
fn test_error_display() {
    let err: AppError<BusFault> = InitError::IdentityMismatch { found: 0x12 }.into();
    assert_eq!(format!("{}", err), "MPU6050 setup failed: Unexpected device ID: 0x12");
    let err: AppError<BusFault> = AppError::Read(BusFault);
    assert_eq!(format!("{}", err), "Reading MPU6050 failed: BusFault");
}

#[test]
fn test_closures_as_outputs() {
    let bus = FakeBus::mpu6050();
    bus.set_sample([0, 0, -16384, 680, 0, 0, 0]);
    let mut accel_z = Vec::new();
    let mut temperature = Vec::new();
    let mut faces = Vec::new();

    let mut on_accel_z = |value: f32| accel_z.push(value);
    let mut on_temperature = |value: f32| temperature.push(value);
    let mut on_face = |value: f32| faces.push(value);

    let mut outputs: SensorOutputs<&mut dyn FnMut(f32)> = SensorOutputs::new();
    outputs.accel_z = Some(&mut on_accel_z);
    outputs.temperature = Some(&mut on_temperature);
    outputs.face = Some(&mut on_face);

    let mut sensor = Sensor::new(bus, SensorConfig::default(), outputs);
    sensor.setup().unwrap();
    sensor.poll();
    sensor.poll();
    drop(sensor);

    assert_eq!(accel_z.len(), 2);
    assert!(approx_eq(accel_z[0], -9.801001, 1e-5));
    assert_eq!(temperature.len(), 2);
    assert!(approx_eq(temperature[1], 38.53, 1e-5));
    assert_eq!(faces, vec![12.0, 12.0]);
}

#[test]
fn test_log_config_leaves_bus_alone() {
    let _ = env_logger::builder().is_test(true).try_init();

    let bus = FakeBus::mpu6050();
    let published = Published::default();
    let mut healthy = Sensor::new(bus.clone(), SensorConfig::default(), all_outputs(&published));
    healthy.setup().unwrap();
    let writes = bus.writes();
    healthy.log_config();
    assert!(!healthy.state().is_failed());
    assert_eq!(bus.writes(), writes);
    assert_eq!(bus.bursts(), 0);

    let bus = FakeBus::mpu6050();
    bus.set_register(WHO_AM_I, 0x00);
    let mut failed = Sensor::new(bus.clone(), SensorConfig::default(), SensorOutputs::<Recorder>::new());
    assert!(failed.setup().is_err());
    failed.log_config();
    assert!(failed.state().is_failed());
    assert!(bus.writes().is_empty());
    assert_eq!(bus.bursts(), 0);
}
