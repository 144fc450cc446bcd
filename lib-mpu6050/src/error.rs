use core::{error::Error, fmt};

/// Reasons the setup sequence of the chip can be aborted, both are permanent: the chip is not
/// usable until it is set up again.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError<E>
{
    /// The `WHO_AM_I` register did not contain the MPU6050 device ID.
    IdentityMismatch { found: u8 },
    /// Reading or writing a register failed.
    Transport(E),
}

impl<E: fmt::Debug> Error for InitError<E> {}

impl<E: fmt::Debug> fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IdentityMismatch { found } => write!(f, "Unexpected device ID: {:#04x}", found),
            Self::Transport(err) => write!(f, "Register transport error: {:?}", err),
        }
    }
}
