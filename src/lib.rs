//! A CRC engine driven by a parameter record.
//!
//! Any CRC from 1 to 64 bits wide is described by a [`CrcParams`] record;
//! [`CrcModel`] validates it once, derives both seed forms and the lookup
//! table, and then computes checksums with one of four interchangeable
//! strategies.
//!
//! ```
//! use crcmodel::prelude::*;
//!
//! let modbus = CrcModel::new(CrcParams::CRC_16_MODBUS).unwrap();
//! assert_eq!(modbus.checksum(b"123456789"), 0x4B37);
//!
//! let mut frame = b"123456789".to_vec();
//! modbus.append(&mut frame).unwrap();
//! assert!(modbus.verify(&frame));
//! ```
pub mod catalog;
pub mod diag;
pub mod error;
pub mod generic;
pub mod params;
pub mod reflect;

#[cfg(test)]
mod proptests;

pub use catalog::{CATALOG, CHECK_INPUT};
pub use error::{CrcError, ParamError};
pub use generic::{compute, Algorithm, CrcModel, Family};
pub use params::CrcParams;

pub mod prelude {
    pub use crate::catalog::{CATALOG, CHECK_INPUT};
    pub use crate::error::{CrcError, ParamError};
    pub use crate::generic::{compute, Algorithm, CrcModel, Family};
    pub use crate::params::CrcParams;
}
