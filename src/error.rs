use std::fmt;

use crate::diag::StrategyReport;

/// A parameter record that cannot describe a CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamError {
    /// Width outside `1..=64`.
    InvalidWidth(u8),
    /// Polynomial has bits above the width.
    InvalidPoly(u64),
    /// Initial value has bits above the width.
    InvalidInit(u64),
    /// Output XOR has bits above the width.
    InvalidXorout(u64),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::InvalidWidth(width) => write!(f, "invalid width: {}", width),
            ParamError::InvalidPoly(poly) => write!(f, "invalid poly: {:#X}", poly),
            ParamError::InvalidInit(init) => write!(f, "invalid init: {:#X}", init),
            ParamError::InvalidXorout(xorout) => write!(f, "invalid xorout: {:#X}", xorout),
        }
    }
}

impl std::error::Error for ParamError {}

/// Errors returned by model construction and computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrcError {
    /// The parameter record was rejected; no model was built.
    Param(ParamError),
    /// A model or buffer was not supplied.
    NullInput,
    /// Storage for the lookup table could not be reserved.
    Allocation,
    /// A byte-oriented operation was asked of a width that is not a
    /// multiple of 8.
    UnalignedWidth(u8),
    /// The checksum of `123456789` does not match the record's `check`.
    ///
    /// This points at the catalog entry, not at the engine.
    CheckMismatch {
        name: &'static str,
        expected: u64,
        computed: u64,
    },
    /// The seed has no non-direct form under this polynomial, so the
    /// augmented strategies cannot run. Only possible for even polynomials.
    NoNondirectSeed {
        name: &'static str,
        poly: u64,
        init: u64,
    },
    /// The strategies produced different checksums for the same input.
    Disagreement(StrategyReport),
}

impl fmt::Display for CrcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrcError::Param(err) => write!(f, "parameter error: {}", err),
            CrcError::NullInput => f.write_str("invalid parameter: missing model or buffer"),
            CrcError::Allocation => f.write_str("allocation for lookup table failed"),
            CrcError::UnalignedWidth(width) => {
                write!(f, "width {} is not a multiple of 8", width)
            }
            CrcError::CheckMismatch {
                name,
                expected,
                computed,
            } => write!(
                f,
                "[{}] check value mismatch: catalog says {:#X}, computed {:#X}",
                name, expected, computed
            ),
            CrcError::NoNondirectSeed { name, poly, init } => write!(
                f,
                "[{}] init {:#X} has no non-direct form under poly {:#X}",
                name, init, poly
            ),
            CrcError::Disagreement(report) => write!(f, "strategies disagree: {}", report),
        }
    }
}

impl std::error::Error for CrcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrcError::Param(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParamError> for CrcError {
    fn from(err: ParamError) -> Self {
        CrcError::Param(err)
    }
}
