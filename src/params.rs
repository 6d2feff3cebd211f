//! CRC model parameters.
//!
//! A [`CrcParams`] record fully describes one CRC variant in the style of the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Named
//! variants live in [`crate::catalog`].

use crate::error::ParamError;

/// Returns a value with the low `width` bits set.
///
/// `width` must lie in `1..=64`.
#[inline]
pub const fn mask(width: u8) -> u64 {
    u64::MAX >> (64 - width as u32)
}

/// Parameters describing one CRC variant.
///
/// `init` is the register content the non-augmented algorithms start from,
/// which is the convention every published check value assumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
    /// Label used in reports only.
    pub name: &'static str,
    /// Register width in bits, `1..=64`.
    pub width: u8,
    /// Reflect each input byte before processing.
    pub refin: bool,
    /// Reflect the final register before the output XOR.
    pub refout: bool,
    /// Generator polynomial without its implicit top bit.
    pub poly: u64,
    /// Initial register value.
    pub init: u64,
    /// Value XORed into the final register.
    pub xorout: u64,
    /// Checksum of the ASCII string `123456789`.
    pub check: u64,
    /// Append a checksum suffix in the byte order opposite to the one
    /// `refout` selects.
    ///
    /// Must be set when `refin != refout`, otherwise an appended frame does
    /// not verify.
    pub swap_suffix: bool,
}

impl CrcParams {
    /// Checks that the record is internally consistent.
    ///
    /// The width is checked first, then `poly`, `init` and `xorout` must each
    /// fit in `width` bits. The first violation found is returned.
    pub const fn validate(&self) -> Result<(), ParamError> {
        if self.width < 1 || self.width > 64 {
            return Err(ParamError::InvalidWidth(self.width));
        }
        let crc_mask = mask(self.width);
        if self.poly & !crc_mask != 0 {
            return Err(ParamError::InvalidPoly(self.poly));
        }
        if self.init & !crc_mask != 0 {
            return Err(ParamError::InvalidInit(self.init));
        }
        if self.xorout & !crc_mask != 0 {
            return Err(ParamError::InvalidXorout(self.xorout));
        }
        Ok(())
    }

    /// Whether the width is a whole number of bytes, which the table
    /// algorithms require.
    #[inline]
    pub const fn is_byte_aligned(&self) -> bool {
        self.width % 8 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRC16: CrcParams = CrcParams {
        name: "test",
        width: 16,
        refin: true,
        refout: true,
        poly: 0x8005,
        init: 0xFFFF,
        xorout: 0x0000,
        check: 0x4B37,
        swap_suffix: false,
    };

    #[test]
    fn test_mask() {
        assert_eq!(mask(1), 0x1);
        assert_eq!(mask(5), 0x1F);
        assert_eq!(mask(16), 0xFFFF);
        assert_eq!(mask(63), 0x7FFF_FFFF_FFFF_FFFF);
        assert_eq!(mask(64), u64::MAX);
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(CRC16.validate(), Ok(()));
    }

    #[test]
    fn test_validate_width() {
        let zero = CrcParams { width: 0, ..CRC16 };
        assert_eq!(zero.validate(), Err(ParamError::InvalidWidth(0)));
        let wide = CrcParams { width: 65, ..CRC16 };
        assert_eq!(wide.validate(), Err(ParamError::InvalidWidth(65)));
    }

    #[test]
    fn test_validate_fields() {
        let poly = CrcParams { poly: 0x1_8005, ..CRC16 };
        assert_eq!(poly.validate(), Err(ParamError::InvalidPoly(0x1_8005)));
        let init = CrcParams { init: 0x1_0000, ..CRC16 };
        assert_eq!(init.validate(), Err(ParamError::InvalidInit(0x1_0000)));
        let xorout = CrcParams { xorout: 0xF_FFFF, ..CRC16 };
        assert_eq!(xorout.validate(), Err(ParamError::InvalidXorout(0xF_FFFF)));
    }

    #[test]
    fn test_validate_full_width() {
        let crc64 = CrcParams {
            width: 64,
            poly: 0x42F0E1EBA9EA3693,
            init: u64::MAX,
            xorout: u64::MAX,
            ..CRC16
        };
        assert_eq!(crc64.validate(), Ok(()));
    }

    #[test]
    fn test_is_byte_aligned() {
        assert!(CRC16.is_byte_aligned());
        assert!(!CrcParams { width: 5, poly: 0x05, init: 0x1F, ..CRC16 }.is_byte_aligned());
    }
}
