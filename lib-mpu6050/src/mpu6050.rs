use crate::registers::*;
use crate::{InitError, RawSample, RegisterBus, SensorData, GYRO_SCALE, ACCEL_SCALE, MOTION_INTERRUPT_CONFIG, MPU6050_DEVICE_ID, RAW_SAMPLE_WORDS};

pub struct Mpu6050<B: RegisterBus>
{
    /// Bus we use to access the registers of the MPU6050 chip.
    bus: B,
}

impl<B: RegisterBus> Mpu6050<B>
{
    /// Create a new MPU 6050 instance on the given register bus, this does not touch the chip
    /// yet, call `initialize()` before reading any data.
    /// 
    pub fn new(bus: B) -> Self {
        Mpu6050 { bus }
    }

    /// Gives back the bus this driver was created with.
    /// 
    pub fn release(self) -> B {
        self.bus
    }

    /// Checks the device ID and sets the chip up for use: wakes it up, selects the ±2000 deg/s
    /// gyroscope and ±2g accelerometer ranges and arms the motion detection interrupt.
    /// 
    /// The first failing register access aborts the sequence, nothing is retried. If the device ID
    /// does not match no register is written at all.
    /// 
    pub fn initialize(&mut self) -> Result<(), InitError<B::Error>> {
        log::info!("Setting up MPU6050");

        let device_id = self.get_device_id().map_err(InitError::Transport)?;
        if device_id != MPU6050_DEVICE_ID {
            log::debug!("WHO_AM_I: {:#010b}", device_id);
            return Err(InitError::IdentityMismatch { found: device_id });
        }

        self.wake_up().map_err(InitError::Transport)?;
        self.set_scale_ranges().map_err(InitError::Transport)?;

        log::debug!("Setting up motion detection");
        self.write_register_table(&MOTION_INTERRUPT_CONFIG).map_err(InitError::Transport)?;

        log::info!("Finished setting up MPU6050");
        Ok(())
    }

    /// Gets the contents of the `WHO_AM_I` register.
    /// 
    pub fn get_device_id(&mut self) -> Result<u8, B::Error> {
        self.bus.read_byte(WHO_AM_I)
    }

    /// Clears the sleep, temperature disable and clock source bits of `PWR_MGMT_1`, i.e. wakes the
    /// chip up running on its internal oscillator.
    /// 
    pub fn wake_up(&mut self) -> Result<(), B::Error> {
        log::debug!("Setting up power management");
        let state = self.bus.read_byte(PWR_MGMT_1)?;
        log::trace!("Input power management: {:#010b}", state);
        self.bus.write_byte(PWR_MGMT_1, 0x00)
    }

    fn set_scale_ranges(&mut self) -> Result<(), B::Error> {
        log::debug!("Setting up gyro config");
        let gyro_config = self.bus.read_byte(GYRO_CONFIG)?;
        log::trace!("Input gyro config: {:#010b}", gyro_config);
        let gyro_config = (gyro_config & SCALE_SELECT_MASK) | GYRO_SCALE.as_register();
        log::trace!("Output gyro config: {:#010b}", gyro_config);
        self.bus.write_byte(GYRO_CONFIG, gyro_config)?;

        log::debug!("Setting up accel config");
        let accel_config = self.bus.read_byte(ACCEL_CONFIG)?;
        log::trace!("Input accel config: {:#010b}", accel_config);
        let accel_config = (accel_config & SCALE_SELECT_MASK) | ACCEL_SCALE.as_register();
        log::trace!("Output accel config: {:#010b}", accel_config);

        if cfg!(feature = "legacy-accel-write") {
            // Historic firmware wrote the gyro config again here, the accel range only ends up at
            // ±2g because the motion detection setup overwrites `ACCEL_CONFIG` afterwards.
            self.bus.write_byte(GYRO_CONFIG, gyro_config)
        } else {
            self.bus.write_byte(ACCEL_CONFIG, accel_config)
        }
    }

    /// Writes a table of `(register, value)` pairs in order, stopping at the first failure.
    /// 
    pub fn write_register_table(&mut self, table: &[(u8, u8)]) -> Result<(), B::Error> {
        for &(register, value) in table {
            log::trace!("Writing {:#04x} <- {:#010b}", register, value);
            self.bus.write_byte(register, value)?;
        }
        Ok(())
    }

    /// Reads accelerometer, temperature and gyroscope registers in a single burst.
    /// 
    pub fn get_raw_sample(&mut self) -> Result<RawSample, B::Error> {
        let mut words = [ 0u16; RAW_SAMPLE_WORDS ];
        self.bus.read_words(ACCEL_XOUT_H, &mut words)?;
        Ok(RawSample::from_words(words))
    }

    /// Gets the current gyroscope, acceleration, and temperature all at once in physical units.
    /// 
    pub fn get_data(&mut self) -> Result<SensorData, B::Error> {
        Ok(self.get_raw_sample()?.decode())
    }
}
