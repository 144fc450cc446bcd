use core::fmt::Debug;

/// Byte oriented access to the registers of a device, this is the only thing the driver needs
/// from whatever bus the chip is hooked up to.
/// 
pub trait RegisterBus
{
    type Error: Debug;

    /// Reads the contents of a single register.
    fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error>;

    /// Overwrites the contents of a single register.
    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads `words.len()` consecutive big endian 16 bit words, starting at the high byte in
    /// `register`, in a single burst.
    fn read_words(&mut self, register: u8, words: &mut [u16]) -> Result<(), Self::Error>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T
{
    type Error = T::Error;

    #[inline]
    fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error> {
        (**self).read_byte(register)
    }

    #[inline]
    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_byte(register, value)
    }

    #[inline]
    fn read_words(&mut self, register: u8, words: &mut [u16]) -> Result<(), Self::Error> {
        (**self).read_words(register, words)
    }
}

#[cfg(feature = "hal")]
pub use i2c::*;

#[cfg(feature = "hal")]
mod i2c {
    use embedded_hal::i2c::I2c;
    use super::RegisterBus;

    /// Largest number of bytes read in one i2c transaction, longer bursts are split up.
    pub const MAX_BURST_BYTES: usize = 32;

    /// [`RegisterBus`] on top of any embedded-hal i2c bus, talking to the chip at a fixed 7 bit
    /// address.
    /// 
    pub struct I2cBus<I> {
        i2c: I,
        address: u8,
    }

    impl<I: I2c> I2cBus<I> {
        pub fn new(i2c: I, address: u8) -> Self {
            I2cBus { i2c, address }
        }

        /// Gives back the underlying i2c bus.
        pub fn release(self) -> I {
            self.i2c
        }
    }

    impl<I: I2c> RegisterBus for I2cBus<I>
    {
        type Error = I::Error;

        fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error> {
            let mut state = [ 0u8 ];
            self.i2c.write_read(self.address, &[ register ], &mut state)?;
            Ok(state[0])
        }

        fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
            self.i2c.write(self.address, &[ register, value ])
        }

        fn read_words(&mut self, register: u8, words: &mut [u16]) -> Result<(), Self::Error> {
            let mut data = [ 0u8; MAX_BURST_BYTES ];
            let mut start = register;
            for chunk in words.chunks_mut(MAX_BURST_BYTES / 2) {
                let bytes = &mut data[.. chunk.len() * 2];
                self.i2c.write_read(self.address, &[ start ], bytes)?;
                for (word, pair) in chunk.iter_mut().zip(bytes.chunks_exact(2)) {
                    *word = u16::from_be_bytes([ pair[0], pair[1] ]);
                }
                start = start.wrapping_add(bytes.len() as u8);
            }
            Ok(())
        }
    }
}
