//! Store keys of the mint module. The first byte selects the record type.

pub const MINTER_KEY: u8 = 0x00;
pub const PARAMS_KEY: u8 = 0x01;
