//! A platform agnostic driver to interface with the LIS3MDL (3-axis
//! magnetometer)
//!
//! This driver was built using [`embedded-hal`] traits.
//!
//! Every operation is a short, blocking sequence of single byte register
//! transactions. The driver keeps no state of its own: configuration lives
//! in the device registers and is read back on demand. Raw counts are
//! returned as-is, without calibration or conversion to gauss.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal

#![deny(missing_docs)]
#![no_std]

extern crate cast;
#[cfg(feature = "defmt")]
extern crate defmt;
extern crate embedded_hal as hal;

mod conf;
mod reg;

use cast::u16;

use hal::blocking::i2c::{Write, WriteRead};

pub use conf::{Axis, DataRate, FastOdr, FullScale, InterruptState,
               OperatingMode, SpeedConfig};
use reg::{Register, ADDRESS, DEVICE_ID};

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus reported a failure
    Bus(E),
    /// A value outside the recognized set was supplied, or read back
    /// from the device
    InvalidArgument,
}

/// An integer that does not name any variant of the target type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidArgument;

impl<E> From<InvalidArgument> for Error<E> {
    fn from(_: InvalidArgument) -> Self {
        Error::InvalidArgument
    }
}

/// Raw magnetometer measurement
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagData {
    /// X axis
    pub x: i16,
    /// Y axis
    pub y: i16,
    /// Z axis
    pub z: i16,
}

/// LIS3MDL driver
pub struct Lis3mdl<I2C> {
    i2c: I2C,
}

impl<I2C, E> Lis3mdl<I2C> where I2C: WriteRead<Error = E> + Write<Error = E>
{
    /// Creates a new driver from a I2C peripheral. No bus traffic happens
    /// until an operation is called.
    pub fn new(i2c: I2C) -> Self {
        Lis3mdl { i2c }
    }

    /// Destroys the driver and returns the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Reads the `WHO_AM_I` register
    pub fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        self.read_register(Register::WHO_AM_I)
    }

    /// Checks the `WHO_AM_I` response against the LIS3MDL device id
    pub fn detected(&mut self) -> Result<bool, Error<E>> {
        Ok(self.who_am_i()? == DEVICE_ID)
    }

    /// Magnetometer full scale
    pub fn full_scale(&mut self) -> Result<FullScale, Error<E>> {
        let r = self.read_register(Register::CTRL_REG2)?;
        Ok(FullScale::from_register(r))
    }

    /// Output data rate, operating mode and fast ODR as currently held by
    /// the device.
    ///
    /// Fails with `InvalidArgument` if the data rate field holds a value
    /// outside [`DataRate`].
    ///
    /// [`DataRate`]: ./enum.DataRate.html
    pub fn output_data_rate(&mut self) -> Result<SpeedConfig, Error<E>> {
        let r = self.read_register(Register::CTRL_REG1)?;
        Ok(SpeedConfig::from_register(r)?)
    }

    /// Sets output data rate, operating mode and fast ODR.
    ///
    /// The whole `CTRL_REG1` byte is written in one transaction without
    /// reading it first: bits 5-7 are cleared by every call.
    pub fn set_output_data_rate(&mut self,
                                config: SpeedConfig)
                                -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("Set speed config: {:?}", config);

        self.write_register(Register::CTRL_REG1, config.to_register())
    }

    /// Enables or disables interrupt generation.
    ///
    /// `INT_CFG` is written back only when bit 0 differs from `state`, so
    /// repeating a request costs a single read. A failing write is
    /// reported.
    pub fn toggle_interrupt(&mut self,
                            state: InterruptState)
                            -> Result<(), Error<E>> {
        self.update_register(Register::INT_CFG, |r| {
            if InterruptState::from_register(r) == state {
                return None;
            }

            match state {
                InterruptState::Enable => Some(r | InterruptState::MASK),
                InterruptState::Disable => Some(r & !InterruptState::MASK),
            }
        })
    }

    /// Raw measurement of a single axis.
    ///
    /// The low and high output registers are read in two transactions.
    /// Both are always attempted; the first failure is reported.
    pub fn read_output_data(&mut self, axis: Axis) -> Result<i16, Error<E>> {
        let (low, high) = axis.registers();

        let l = self.read_register(low);
        let h = self.read_register(high);

        let (l, h) = (l?, h?);

        Ok(((u16(h) << 8) | u16(l)) as i16)
    }

    /// Raw measurement of all three axes.
    ///
    /// Axes are read one after the other, so samples may come from
    /// different conversions. Stops at the first failing axis.
    pub fn read_all_output_data(&mut self) -> Result<MagData, Error<E>> {
        Ok(MagData { x: self.read_output_data(Axis::X)?,
                     y: self.read_output_data(Axis::Y)?,
                     z: self.read_output_data(Axis::Z)? })
    }

    // `f` returns the new value, or `None` to skip the write
    fn update_register<F>(&mut self,
                          reg: Register,
                          f: F)
                          -> Result<(), Error<E>>
        where F: FnOnce(u8) -> Option<u8>
    {
        let r = self.read_register(reg)?;

        match f(r) {
            Some(v) => self.write_register(reg, v),
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("{:?} already up to date", reg);

                Ok(())
            }
        }
    }

    fn read_register(&mut self, reg: Register) -> Result<u8, Error<E>> {
        let mut buffer = [0; 1];

        self.i2c
            .write_read(ADDRESS, &[reg.addr()], &mut buffer)
            .map_err(Error::Bus)?;

        Ok(buffer[0])
    }

    fn write_register(&mut self,
                      reg: Register,
                      byte: u8)
                      -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("Write {=u8:#x} to {:?}", byte, reg);

        self.i2c
            .write(ADDRESS, &[reg.addr(), byte])
            .map_err(Error::Bus)
    }
}
