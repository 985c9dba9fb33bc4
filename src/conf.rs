use core::convert::TryFrom;

use crate::reg::Register;
use crate::InvalidArgument;

pub(crate) trait RegisterBits {
    fn mask() -> u8;
    fn value(&self) -> u8;
}

/// Magnetometer full scale, `CTRL_REG2` bits 6-7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum FullScale {
    /// +/- 4 gauss
    _4_Ga = 0x00,
    /// +/- 8 gauss
    _8_Ga = 0x40,
    /// +/- 12 gauss
    _12_Ga = 0x80,
    /// +/- 16 gauss
    _16_Ga = 0xC0,
    /// Bit pattern outside the decode table. Every 2-bit pattern is
    /// defined, so a register read never produces this.
    Unknown = 0xFF,
}

impl RegisterBits for FullScale {
    fn mask() -> u8 {
        FullScale::_16_Ga.value()
    }

    fn value(&self) -> u8 {
        *self as u8
    }
}

impl FullScale {
    pub(crate) fn from_register(byte: u8) -> Self {
        match (byte & Self::mask()) >> 6 {
            0x00 => FullScale::_4_Ga,
            0x01 => FullScale::_8_Ga,
            0x02 => FullScale::_12_Ga,
            0x03 => FullScale::_16_Ga,
            _ => FullScale::Unknown,
        }
    }
}

/// Magnetometer Output Data Rate, `CTRL_REG1` bits 2-4
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum DataRate {
    /// 0.625Hz
    _0_625_Hz = 0x00,
    /// 1.25Hz
    _1_25_Hz = 0x04,
    /// 2.5Hz
    _2_5_Hz = 0x08,
    /// 5Hz
    _5_Hz = 0x0C,
    /// 10Hz
    _10_Hz = 0x10,
    /// 40Hz
    _40_Hz = 0x14,
    /// 80Hz
    _80_Hz = 0x18,
}

impl Default for DataRate {
    fn default() -> Self {
        DataRate::_10_Hz
    }
}

impl RegisterBits for DataRate {
    fn mask() -> u8 {
        0x1C
    }

    fn value(&self) -> u8 {
        *self as u8
    }
}

impl DataRate {
    fn from_register(byte: u8) -> Option<Self> {
        match (byte & Self::mask()) >> 2 {
            0 => Some(DataRate::_0_625_Hz),
            1 => Some(DataRate::_1_25_Hz),
            2 => Some(DataRate::_2_5_Hz),
            3 => Some(DataRate::_5_Hz),
            4 => Some(DataRate::_10_Hz),
            5 => Some(DataRate::_40_Hz),
            6 => Some(DataRate::_80_Hz),
            _ => None,
        }
    }
}

/// X and Y axes operative mode selection, `CTRL_REG1` bits 0-1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Low power
    LowPower = 0x00,
    /// Medium performance
    MediumPerformance = 0x01,
    /// High performance
    HighPerformance = 0x02,
    /// Ultra high performance
    UltraHighPerformance = 0x03,
}

impl Default for OperatingMode {
    fn default() -> Self {
        OperatingMode::LowPower
    }
}

impl RegisterBits for OperatingMode {
    fn mask() -> u8 {
        OperatingMode::UltraHighPerformance.value()
    }

    fn value(&self) -> u8 {
        *self as u8
    }
}

impl OperatingMode {
    fn from_register(byte: u8) -> Self {
        match byte & Self::mask() {
            0x00 => OperatingMode::LowPower,
            0x01 => OperatingMode::MediumPerformance,
            0x02 => OperatingMode::HighPerformance,
            _ => OperatingMode::UltraHighPerformance,
        }
    }
}

/// Fast output data rate, `CTRL_REG1` bit 0.
///
/// This bit is shared with bit 0 of [`OperatingMode`]: writing
/// [`FastOdr::Enable`] turns `LowPower` into `MediumPerformance` (and
/// `HighPerformance` into `UltraHighPerformance`) on read back, and an odd
/// operating mode always reads back with fast ODR enabled.
///
/// [`OperatingMode`]: ./enum.OperatingMode.html
/// [`FastOdr::Enable`]: ./enum.FastOdr.html
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FastOdr {
    /// Fast ODR enabled
    Enable = 0x01,
    /// Fast ODR disabled
    Disable = 0x00,
}

impl Default for FastOdr {
    fn default() -> Self {
        FastOdr::Disable
    }
}

impl RegisterBits for FastOdr {
    fn mask() -> u8 {
        FastOdr::Enable.value()
    }

    fn value(&self) -> u8 {
        *self as u8
    }
}

impl FastOdr {
    fn from_register(byte: u8) -> Self {
        if byte & Self::mask() != 0 {
            FastOdr::Enable
        } else {
            FastOdr::Disable
        }
    }
}

/// Speed configuration held in `CTRL_REG1`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedConfig {
    /// Output data rate
    pub data_rate: DataRate,
    /// Operating mode
    pub operating_mode: OperatingMode,
    /// Fast output data rate
    pub fast_odr: FastOdr,
}

impl SpeedConfig {
    /// Creates a speed configuration with default [`DataRate`],
    /// [`OperatingMode`] and [`FastOdr`].
    ///
    /// [`DataRate`]: ./enum.DataRate.html
    /// [`OperatingMode`]: ./enum.OperatingMode.html
    /// [`FastOdr`]: ./enum.FastOdr.html
    pub fn new() -> Self {
        SpeedConfig::default()
    }

    /// Sets output data rate ([`DataRate`])
    ///
    /// [`DataRate`]: ./enum.DataRate.html
    pub fn data_rate(&mut self, data_rate: DataRate) -> &mut Self {
        self.data_rate = data_rate;
        self
    }

    /// Sets operating mode ([`OperatingMode`])
    ///
    /// [`OperatingMode`]: ./enum.OperatingMode.html
    pub fn operating_mode(&mut self,
                          operating_mode: OperatingMode)
                          -> &mut Self {
        self.operating_mode = operating_mode;
        self
    }

    /// Sets fast output data rate ([`FastOdr`])
    ///
    /// [`FastOdr`]: ./enum.FastOdr.html
    pub fn fast_odr(&mut self, fast_odr: FastOdr) -> &mut Self {
        self.fast_odr = fast_odr;
        self
    }

    /// Packs the configuration into a `CTRL_REG1` byte. Bits 5-7 are
    /// always zero.
    pub fn to_register(&self) -> u8 {
        (self.data_rate.value() & DataRate::mask())
            | (self.operating_mode.value() & OperatingMode::mask())
            | (self.fast_odr.value() & FastOdr::mask())
    }

    /// Unpacks a `CTRL_REG1` byte. Fails when the data rate field holds
    /// `0b111`.
    pub fn from_register(byte: u8) -> Result<Self, InvalidArgument> {
        let data_rate = DataRate::from_register(byte).ok_or(InvalidArgument)?;

        Ok(SpeedConfig { data_rate,
                         operating_mode: OperatingMode::from_register(byte),
                         fast_odr: FastOdr::from_register(byte) })
    }
}

/// Interrupt generation state, `INT_CFG` bit 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptState {
    /// Interrupt generation enabled
    Enable,
    /// Interrupt generation disabled
    Disable,
}

impl InterruptState {
    pub(crate) const MASK: u8 = 0x01;

    pub(crate) fn from_register(byte: u8) -> Self {
        if byte & Self::MASK != 0 {
            InterruptState::Enable
        } else {
            InterruptState::Disable
        }
    }
}

impl TryFrom<u8> for InterruptState {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InterruptState::Enable),
            1 => Ok(InterruptState::Disable),
            _ => Err(InvalidArgument),
        }
    }
}

/// Measurement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl Axis {
    /// (low, high) output registers
    pub(crate) fn registers(&self) -> (Register, Register) {
        match self {
            Axis::X => (Register::OUT_X_L, Register::OUT_X_H),
            Axis::Y => (Register::OUT_Y_L, Register::OUT_Y_H),
            Axis::Z => (Register::OUT_Z_L, Register::OUT_Z_H),
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(InvalidArgument),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::convert::TryFrom;

    use super::*;

    #[test]
    fn full_scale_decodes_every_pattern() {
        assert_eq!(FullScale::from_register(0b0000_0000), FullScale::_4_Ga);
        assert_eq!(FullScale::from_register(0b0100_0000), FullScale::_8_Ga);
        assert_eq!(FullScale::from_register(0b1000_0000), FullScale::_12_Ga);
        assert_eq!(FullScale::from_register(0b1100_0000), FullScale::_16_Ga);
        // low bits are ignored
        assert_eq!(FullScale::from_register(0b0111_1111), FullScale::_8_Ga);

        for byte in 0..=u8::max_value() {
            assert_ne!(FullScale::from_register(byte), FullScale::Unknown);
        }
    }

    #[test]
    fn speed_config_packs_fields() {
        let config =
            *SpeedConfig::new().data_rate(DataRate::_80_Hz)
                               .operating_mode(OperatingMode::HighPerformance)
                               .fast_odr(FastOdr::Disable);

        assert_eq!(config.to_register(), 0b0001_1010);
    }

    #[test]
    fn speed_config_unpacks_fields() {
        let config = SpeedConfig::from_register(0b0001_0011).unwrap();

        assert_eq!(config.data_rate, DataRate::_10_Hz);
        assert_eq!(config.operating_mode,
                   OperatingMode::UltraHighPerformance);
        assert_eq!(config.fast_odr, FastOdr::Enable);
    }

    #[test]
    fn speed_config_ignores_upper_bits() {
        let config = SpeedConfig::from_register(0b1110_0100).unwrap();

        assert_eq!(config.data_rate, DataRate::_1_25_Hz);
        assert_eq!(config.operating_mode, OperatingMode::LowPower);
        assert_eq!(config.fast_odr, FastOdr::Disable);
    }

    #[test]
    fn unlisted_data_rate_is_rejected() {
        assert_eq!(SpeedConfig::from_register(0b0001_1100),
                   Err(InvalidArgument));
        assert_eq!(SpeedConfig::from_register(0b1111_1111),
                   Err(InvalidArgument));
    }

    #[test]
    fn fast_odr_shares_bit_with_operating_mode() {
        let config = *SpeedConfig::new().operating_mode(OperatingMode::LowPower)
                                        .fast_odr(FastOdr::Enable);

        let decoded = SpeedConfig::from_register(config.to_register()).unwrap();

        assert_eq!(decoded.operating_mode, OperatingMode::MediumPerformance);
        assert_eq!(decoded.fast_odr, FastOdr::Enable);
    }

    #[test]
    fn open_integers_are_validated() {
        assert_eq!(InterruptState::try_from(0), Ok(InterruptState::Enable));
        assert_eq!(InterruptState::try_from(1),
                   Ok(InterruptState::Disable));
        assert_eq!(InterruptState::try_from(2), Err(InvalidArgument));

        assert_eq!(Axis::try_from(0), Ok(Axis::X));
        assert_eq!(Axis::try_from(2), Ok(Axis::Z));
        assert_eq!(Axis::try_from(3), Err(InvalidArgument));
    }

    #[test]
    fn axis_selects_register_pair() {
        assert_eq!(Axis::X.registers(),
                   (Register::OUT_X_L, Register::OUT_X_H));
        assert_eq!(Axis::Y.registers(),
                   (Register::OUT_Y_L, Register::OUT_Y_H));
        assert_eq!(Axis::Z.registers(),
                   (Register::OUT_Z_L, Register::OUT_Z_H));
    }
}
