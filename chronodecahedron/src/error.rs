use core::{error::Error, fmt};
use mpu6050::InitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError<E>
{
    /// Setting up the MPU6050 failed, the sensor is marked as failed.
    Setup(InitError<E>),
    /// A burst read failed, only the current update is lost.
    Read(E),
    /// The sensor was marked as failed earlier and is not used anymore.
    DeviceFailed,
}

impl<E: fmt::Debug> Error for AppError<E> {}

impl<E: fmt::Debug> fmt::Display for AppError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Setup(err) => write!(f, "MPU6050 setup failed: {}", err),
            Self::Read(err) => write!(f, "Reading MPU6050 failed: {:?}", err),
            Self::DeviceFailed => write!(f, "Communication with MPU6050 failed"),
        }
    }
}

impl<E> From<InitError<E>> for AppError<E>
{
    fn from(err: InitError<E>) -> Self {
        AppError::Setup(err)
    }
}
