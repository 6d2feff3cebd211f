use crate::error::CrcError;

mod custom_crc;
pub mod model;

use custom_crc::CustomCrc;
pub use model::CrcModel;

/// Signature shared by the four strategies.
pub type ComputeFn<T> = fn(&CrcModel<T>, &[u8]) -> Result<u64, CrcError>;

/// How the initial value is brought into the register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Family {
    /// Starts from the non-direct seed and feeds `width` zero bits after the
    /// message.
    Augmented,
    /// Starts from the direct seed and XORs message bits into the top of the
    /// register, so no trailing zeros are needed.
    #[default]
    Fast,
}

/// One of the four computation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Table driven, augmented. Byte-aligned widths only.
    Lookup,
    /// Table driven, fast. Byte-aligned widths only.
    LookupFast,
    /// Bit by bit, augmented. Any width.
    Naive,
    /// Bit by bit, fast. Any width.
    NaiveFast,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Lookup,
        Algorithm::LookupFast,
        Algorithm::Naive,
        Algorithm::NaiveFast,
    ];

    /// The strategy a model of `width` bits uses for `family`: table driven
    /// when the width is a multiple of 8, bit by bit otherwise.
    pub const fn select(width: u8, family: Family) -> Self {
        match (width % 8 == 0, family) {
            (true, Family::Augmented) => Algorithm::Lookup,
            (true, Family::Fast) => Algorithm::LookupFast,
            (false, Family::Augmented) => Algorithm::Naive,
            (false, Family::Fast) => Algorithm::NaiveFast,
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Algorithm::Lookup | Algorithm::Naive => Family::Augmented,
            Algorithm::LookupFast | Algorithm::NaiveFast => Family::Fast,
        }
    }

    pub const fn uses_table(self) -> bool {
        matches!(self, Algorithm::Lookup | Algorithm::LookupFast)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Lookup => "lookup table",
            Algorithm::LookupFast => "lookup table fast",
            Algorithm::Naive => "bit by bit",
            Algorithm::NaiveFast => "bit by bit fast",
        }
    }

    pub fn compute_fn<T>(self) -> ComputeFn<T> {
        match self {
            Algorithm::Lookup => compute_lookup::<T> as ComputeFn<T>,
            Algorithm::LookupFast => compute_lookup_fast::<T> as ComputeFn<T>,
            Algorithm::Naive => compute_naive::<T> as ComputeFn<T>,
            Algorithm::NaiveFast => compute_naive_fast::<T> as ComputeFn<T>,
        }
    }
}

fn compute_lookup<T>(model: &CrcModel<T>, data: &[u8]) -> Result<u64, CrcError> {
    model.require_byte_aligned()?;
    let seed = model.require_nondirect()?;
    Ok(CustomCrc::crc_lookup(model, seed, data))
}

fn compute_lookup_fast<T>(model: &CrcModel<T>, data: &[u8]) -> Result<u64, CrcError> {
    model.require_byte_aligned()?;
    Ok(CustomCrc::crc_lookup_fast(model, data))
}

fn compute_naive<T>(model: &CrcModel<T>, data: &[u8]) -> Result<u64, CrcError> {
    let seed = model.require_nondirect()?;
    Ok(CustomCrc::crc_naive(model, seed, data))
}

fn compute_naive_fast<T>(model: &CrcModel<T>, data: &[u8]) -> Result<u64, CrcError> {
    Ok(CustomCrc::crc_naive_fast(model, data))
}

/// Runs `algorithm` over `data`, reporting a missing model or buffer as
/// [`CrcError::NullInput`] rather than as a checksum value.
///
/// Intended for callers that hold their inputs as options, for instance
/// across an FFI boundary.
pub fn compute<T>(
    model: Option<&CrcModel<T>>,
    data: Option<&[u8]>,
    algorithm: Algorithm,
) -> Result<u64, CrcError> {
    match (model, data) {
        (Some(model), Some(data)) => (algorithm.compute_fn())(model, data),
        _ => Err(CrcError::NullInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CHECK_INPUT;
    use crate::params::CrcParams;

    #[test]
    fn test_select() {
        assert_eq!(Algorithm::select(16, Family::Fast), Algorithm::LookupFast);
        assert_eq!(Algorithm::select(32, Family::Augmented), Algorithm::Lookup);
        assert_eq!(Algorithm::select(5, Family::Fast), Algorithm::NaiveFast);
        assert_eq!(Algorithm::select(12, Family::Augmented), Algorithm::Naive);
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::select(8, algorithm.family()).family(), algorithm.family());
        }
    }

    #[test]
    fn test_compute_null_input() {
        let model = CrcModel::new(CrcParams::CRC_64_XZ).unwrap();
        for algorithm in Algorithm::ALL {
            assert_eq!(
                compute::<()>(None, Some(CHECK_INPUT), algorithm),
                Err(CrcError::NullInput)
            );
            assert_eq!(
                compute(Some(&model), None, algorithm),
                Err(CrcError::NullInput)
            );
            assert_eq!(
                compute(Some(&model), Some(CHECK_INPUT), algorithm),
                Ok(0x995DC9BBDF1939FA)
            );
        }
    }

    #[test]
    fn test_all_ones_is_a_checksum() {
        // A 64-bit register can legitimately produce all ones: with a zero
        // seed the empty message yields exactly `xorout`.
        let params = CrcParams {
            init: 0,
            ..CrcParams::CRC_64_XZ
        };
        let model = CrcModel::new(params).unwrap();
        assert_eq!(compute(Some(&model), Some(b""), Algorithm::Naive), Ok(u64::MAX));
        assert_eq!(compute::<()>(None, Some(b""), Algorithm::Naive), Err(CrcError::NullInput));
    }

    #[test]
    fn test_table_needs_byte_aligned_width() {
        let model = CrcModel::new(CrcParams::CRC_5_USB).unwrap();
        assert_eq!(
            (Algorithm::Lookup.compute_fn())(&model, CHECK_INPUT),
            Err(CrcError::UnalignedWidth(5))
        );
        assert_eq!(
            (Algorithm::LookupFast.compute_fn())(&model, CHECK_INPUT),
            Err(CrcError::UnalignedWidth(5))
        );
        assert_eq!((Algorithm::NaiveFast.compute_fn())(&model, CHECK_INPUT), Ok(0x19));
    }

    #[test]
    fn test_augmented_needs_nondirect_seed() {
        let params = CrcParams {
            name: "CRC-16/EVEN",
            poly: 0x8004,
            init: 0xFFFF,
            refin: false,
            refout: false,
            ..CrcParams::CRC_16_ARC
        };
        let model = CrcModel::new(params).unwrap();
        let refused = Err(CrcError::NoNondirectSeed {
            name: "CRC-16/EVEN",
            poly: 0x8004,
            init: 0xFFFF,
        });
        assert_eq!(compute(Some(&model), Some(CHECK_INPUT), Algorithm::Lookup), refused);
        assert_eq!(compute(Some(&model), Some(CHECK_INPUT), Algorithm::Naive), refused);
        assert_eq!(
            compute(Some(&model), Some(CHECK_INPUT), Algorithm::LookupFast),
            compute(Some(&model), Some(CHECK_INPUT), Algorithm::NaiveFast)
        );
    }
}
