use core::sync::atomic::{AtomicBool, Ordering};
use mpu6050::{InitError, Mpu6050, RegisterBus, SensorData};
use processing::{Face, FaceDetection};
use crate::{AppError, Publish, SensorConfig, SensorOutputs};

/// Health of the sensor as seen by the firmware around it.
/// 
#[derive(Debug, Default)]
pub struct DeviceState
{
    /// Set for good when setting up the chip failed.
    failed: AtomicBool,

    /// Set while the most recent update could not read the chip, cleared by the next good read.
    warning: AtomicBool,
}

impl DeviceState {
    pub const fn new() -> Self {
        DeviceState {
            failed: AtomicBool::new(false),
            warning: AtomicBool::new(false),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn has_warning(&self) -> bool {
        self.warning.load(Ordering::Relaxed)
    }

    fn mark_failed(&self) {
        self.failed.store(true, Ordering::Relaxed);
    }

    fn set_warning(&self, warning: bool) {
        self.warning.store(warning, Ordering::Relaxed);
    }
}

/// Result of a single `Sensor::poll()`.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PollOutcome
{
    /// The sample was read and handed to the outputs.
    Published { data: SensorData, face: Option<Face> },
    /// Reading the chip failed, nothing was published this time.
    ReadFailed,
    /// The sensor is marked as failed, the chip was not touched.
    DeviceFailed,
}

pub struct Sensor<B: RegisterBus, P: Publish>
{
    pub mpu: Mpu6050<B>,

    pub outputs: SensorOutputs<P>,

    pub face_detection: FaceDetection,

    config: SensorConfig,

    state: DeviceState,
}

impl<B: RegisterBus, P: Publish> Sensor<B, P>
{
    pub fn new(bus: B, config: SensorConfig, outputs: SensorOutputs<P>) -> Self {
        Sensor {
            mpu: Mpu6050::new(bus),
            outputs,
            face_detection: FaceDetection::new(),
            config,
            state: DeviceState::new(),
        }
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Sets up the chip, needs to be called once before the first `poll()`. Any failure marks the
    /// sensor as failed for good.
    /// 
    pub fn setup(&mut self) -> Result<(), AppError<B::Error>> {
        log::info!("Setting up MPU6050 at {:#04x}", self.config.address);
        if let Err(err) = self.mpu.initialize() {
            match &err {
                InitError::IdentityMismatch { found } => {
                    log::error!("Not an MPU6050, WHO_AM_I returned {:#010b}", found);
                }
                InitError::Transport(err) => {
                    log::error!("Communication with MPU6050 failed: {:?}", err);
                }
            }
            self.state.mark_failed();
            return Err(err.into());
        }
        Ok(())
    }

    /// Reads and decodes one sample without publishing it or touching the warning state.
    /// 
    pub fn read(&mut self) -> Result<SensorData, AppError<B::Error>> {
        if self.state.is_failed() {
            return Err(AppError::DeviceFailed);
        }
        let raw = self.mpu.get_raw_sample().map_err(AppError::Read)?;
        Ok(raw.decode())
    }

    /// One update cycle: read the chip, work out which face is up and publish everything. A failed
    /// read sets the warning and publishes nothing, it is simply tried again on the next poll.
    /// 
    pub fn poll(&mut self) -> PollOutcome {
        log::trace!("Updating MPU6050");
        let data = match self.read() {
            Ok(data) => data,
            Err(AppError::Read(err)) => {
                log::warn!("Reading MPU6050 failed: {:?}", err);
                self.state.set_warning(true);
                return PollOutcome::ReadFailed;
            }
            Err(_) => return PollOutcome::DeviceFailed,
        };

        log::debug!(
            "Got accel={{x={:.3} m/s², y={:.3} m/s², z={:.3} m/s²}}, \
            gyro={{x={:.3} °/s, y={:.3} °/s, z={:.3} °/s}}, temp={:.3}°C",
            data.accel.x, data.accel.y, data.accel.z,
            data.gyro.x, data.gyro.y, data.gyro.z,
            data.temp,
        );

        let face = self.face_detection.update(&data.accel);
        self.outputs.publish(&data, face);
        self.state.set_warning(false);

        PollOutcome::Published { data, face }
    }

    /// Logs the configuration and health of the sensor.
    /// 
    pub fn log_config(&self) {
        log::info!("MPU6050:");
        log::info!("  Address: {:#04x}", self.config.address);
        if self.state.is_failed() {
            log::error!("Communication with MPU6050 failed!");
        }
        log::info!("  Update interval: {}ms", self.config.update_interval_ms);
        for (name, configured) in self.outputs.configured() {
            if configured {
                log::info!("  {}", name);
            }
        }
    }

    /// Takes the sensor apart again, giving back the bus and the outputs.
    /// 
    pub fn release(self) -> (B, SensorOutputs<P>) {
        (self.mpu.release(), self.outputs)
    }
}

#[cfg(feature = "hal")]
impl<I: embedded_hal::i2c::I2c, P: Publish> Sensor<mpu6050::I2cBus<I>, P>
{
    /// Creates a sensor talking to the chip over i2c at the configured address.
    /// 
    pub fn from_i2c(i2c: I, config: SensorConfig, outputs: SensorOutputs<P>) -> Self {
        Sensor::new(mpu6050::I2cBus::new(i2c, config.address), config, outputs)
    }
}
