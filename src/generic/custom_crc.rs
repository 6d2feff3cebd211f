use super::model::CrcModel;
use crate::params::{mask, CrcParams};
use crate::reflect::reflect;

/// Kernels for an arbitrary [`CrcParams`] record.
///
/// The augmented kernels start from the non-direct seed and shift the
/// message into the bottom of the register, then push `width` zero bits
/// through. The fast kernels start from the direct seed and XOR each message
/// bit into the top-bit test instead, which reaches the same final register
/// without the trailing zeros.
///
/// Every function taking a width, directly or through a record, expects it in
/// `1..=64`; [`CrcParams::validate`] guarantees that for a built model.
pub struct CustomCrc {}

impl CustomCrc {
    /// Runs `width` zero bits through the register, turning a non-direct seed
    /// into the equivalent direct one.
    pub(crate) const fn fold_forward(mut crc: u64, poly: u64, width: u8) -> u64 {
        let crc_mask = mask(width);
        let high_bit = 1u64 << (width - 1);
        let mut i = 0;
        while i < width {
            let bit = crc & high_bit;
            crc = (crc << 1) & crc_mask;
            if bit != 0 {
                crc ^= poly;
            }
            i += 1;
        }
        crc
    }

    /// Inverse of [`CustomCrc::fold_forward`]: turns a direct seed into a
    /// candidate non-direct one.
    ///
    /// Exact whenever `poly` has its low bit set. With an even `poly` the
    /// forward step is not invertible: some direct seeds have no non-direct
    /// form and the returned value then does not fold forward to `crc`.
    /// [`CustomCrc::nondirect_init`] checks for that.
    pub(crate) const fn fold_backward(mut crc: u64, poly: u64, width: u8) -> u64 {
        let high_bit = 1u64 << (width - 1);
        let mut i = 0;
        while i < width {
            let bit = crc & 1;
            if bit != 0 {
                crc ^= poly;
            }
            crc >>= 1;
            if bit != 0 {
                crc |= high_bit;
            }
            i += 1;
        }
        crc
    }

    /// The non-direct seed matching `params.init`, or `None` when backward
    /// folding does not lead back to `init`.
    pub(crate) const fn nondirect_init(params: &CrcParams) -> Option<u64> {
        let crc = Self::fold_backward(params.init, params.poly, params.width);
        if Self::fold_forward(crc, params.poly, params.width) == params.init {
            Some(crc)
        } else {
            None
        }
    }

    /// Builds the 256-entry table of per-byte register contributions.
    ///
    /// Entries are reflected when `refin` is set, matching the orientation the
    /// reflected kernels keep the register in.
    pub(crate) const fn generate_lookup_table(params: &CrcParams) -> [u64; 256] {
        let mut table = [0; 256];
        let crc_mask = mask(params.width);
        let high_bit = 1u64 << (params.width - 1);
        let mut length = 0;

        while length < 256 {
            let mut c = length as u64;
            if params.refin {
                c = reflect(c, 8);
            }
            let mut crc = 0u64;
            let mut j = 0x80u64;
            while j != 0 {
                let mut bit = crc & high_bit;
                crc = (crc << 1) & crc_mask;
                if c & j != 0 {
                    bit ^= high_bit;
                }
                if bit != 0 {
                    crc ^= params.poly;
                }
                j >>= 1;
            }
            if params.refin {
                crc = reflect(crc, params.width);
            }
            table[length] = crc & crc_mask;
            length += 1;
        }

        table
    }

    /// Table driven, with augmented zero bytes. Byte-aligned widths only.
    pub(crate) fn crc_lookup<T>(m: &CrcModel<T>, init_nodirect: u64, data: &[u8]) -> u64 {
        let width = m.params.width;
        let shift = width - 8;
        let table = &m.table;
        let mut crc = init_nodirect;

        if m.params.refin {
            crc = reflect(crc, width);
            for &b in data {
                crc = ((crc >> 8) | ((b as u64) << shift)) ^ table[(crc & 0xFF) as usize];
            }
            for _ in 0..width / 8 {
                crc = (crc >> 8) ^ table[(crc & 0xFF) as usize];
            }
        } else {
            for &b in data {
                crc = (((crc << 8) | b as u64) ^ table[((crc >> shift) & 0xFF) as usize])
                    & m.crc_mask;
            }
            for _ in 0..width / 8 {
                crc = ((crc << 8) ^ table[((crc >> shift) & 0xFF) as usize]) & m.crc_mask;
            }
        }

        Self::finalize_lookup(m, crc)
    }

    /// Table driven, without augmentation. Byte-aligned widths only.
    pub(crate) fn crc_lookup_fast<T>(m: &CrcModel<T>, data: &[u8]) -> u64 {
        let width = m.params.width;
        let shift = width - 8;
        let table = &m.table;
        let mut crc = m.init_direct;

        if m.params.refin {
            crc = reflect(crc, width);
            for &b in data {
                crc = (crc >> 8) ^ table[((crc ^ b as u64) & 0xFF) as usize];
            }
        } else {
            for &b in data {
                crc = ((crc << 8) ^ table[(((crc >> shift) ^ b as u64) & 0xFF) as usize])
                    & m.crc_mask;
            }
        }

        Self::finalize_lookup(m, crc)
    }

    /// Bit by bit, with augmented zero bits. Any width.
    pub(crate) fn crc_naive<T>(m: &CrcModel<T>, init_nodirect: u64, data: &[u8]) -> u64 {
        let mut crc = init_nodirect;

        for &b in data {
            let c = Self::input_byte(&m.params, b);
            let mut j = 0x80u64;
            while j != 0 {
                let bit = crc & m.high_bit_mask;
                crc = (crc << 1) & m.crc_mask;
                if c & j != 0 {
                    crc |= 1;
                }
                if bit != 0 {
                    crc ^= m.params.poly;
                }
                j >>= 1;
            }
        }
        crc = Self::fold_forward(crc, m.params.poly, m.params.width);

        Self::finalize_naive(m, crc)
    }

    /// Bit by bit, without augmentation. Any width.
    pub(crate) fn crc_naive_fast<T>(m: &CrcModel<T>, data: &[u8]) -> u64 {
        let mut crc = m.init_direct;

        for &b in data {
            let c = Self::input_byte(&m.params, b);
            let mut j = 0x80u64;
            while j != 0 {
                let mut bit = crc & m.high_bit_mask;
                crc = (crc << 1) & m.crc_mask;
                if c & j != 0 {
                    bit ^= m.high_bit_mask;
                }
                if bit != 0 {
                    crc ^= m.params.poly;
                }
                j >>= 1;
            }
        }

        Self::finalize_naive(m, crc)
    }

    #[inline]
    fn input_byte(params: &CrcParams, b: u8) -> u64 {
        if params.refin {
            reflect(b as u64, 8)
        } else {
            b as u64
        }
    }

    // The table kernels keep the register in input orientation, so only a
    // refin/refout mismatch needs a final reflection.
    #[inline]
    fn finalize_lookup<T>(m: &CrcModel<T>, mut crc: u64) -> u64 {
        if m.params.refout != m.params.refin {
            crc = reflect(crc, m.params.width);
        }
        (crc ^ m.params.xorout) & m.crc_mask
    }

    #[inline]
    fn finalize_naive<T>(m: &CrcModel<T>, mut crc: u64) -> u64 {
        if m.params.refout {
            crc = reflect(crc, m.params.width);
        }
        (crc ^ m.params.xorout) & m.crc_mask
    }
}
