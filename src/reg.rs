pub const ADDRESS: u8 = 0x10;

/// Expected `WHO_AM_I` response
pub const DEVICE_ID: u8 = 0x3D;

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    WHO_AM_I = 0x0F,
    CTRL_REG1 = 0x20,
    CTRL_REG2 = 0x21,
    OUT_X_L = 0x28,
    OUT_X_H = 0x29,
    OUT_Y_L = 0x2A,
    OUT_Y_H = 0x2B,
    OUT_Z_L = 0x2C,
    OUT_Z_H = 0x2D,
    INT_CFG = 0x30,
}

impl Register {
    pub fn addr(&self) -> u8 {
        *self as u8
    }
}
