//! Model reports and four-way cross-validation.
//!
//! [`debug`] is the harness the test suite uses to hold every strategy to the
//! same answer; [`show`] prints the parameter block for humans.

use std::fmt;
use std::io;

use log::debug as log_debug;

use crate::error::CrcError;
use crate::generic::{Algorithm, CrcModel};

/// Checksums of one buffer under each strategy.
///
/// The table strategies are absent for widths that are not a multiple of 8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyReport {
    pub name: &'static str,
    pub len: usize,
    pub naive: u64,
    pub naive_fast: u64,
    pub lookup: Option<u64>,
    pub lookup_fast: Option<u64>,
}

impl StrategyReport {
    /// Whether every strategy that ran produced the same value.
    pub fn agree(&self) -> bool {
        [self.naive_fast]
            .iter()
            .chain(self.lookup.iter())
            .chain(self.lookup_fast.iter())
            .all(|&crc| crc == self.naive)
    }

    /// The agreed checksum, if there is one.
    pub fn value(&self) -> Option<u64> {
        self.agree().then_some(self.naive)
    }
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} bytes: {} {:#X}, {} {:#X}",
            self.name,
            self.len,
            Algorithm::Naive.name(),
            self.naive,
            Algorithm::NaiveFast.name(),
            self.naive_fast
        )?;
        if let (Some(lookup), Some(lookup_fast)) = (self.lookup, self.lookup_fast) {
            write!(
                f,
                ", {} {:#X}, {} {:#X}",
                Algorithm::Lookup.name(),
                lookup,
                Algorithm::LookupFast.name(),
                lookup_fast
            )?;
        }
        Ok(())
    }
}

/// Writes the parameter block of `model` to `out`.
pub fn show<T, W: io::Write>(model: &CrcModel<T>, mut out: W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", model)?;
    out.flush()
}

/// Runs every applicable strategy over `data` and fails with
/// [`CrcError::Disagreement`] unless they all return the same checksum.
pub fn debug<T>(model: &CrcModel<T>, data: &[u8]) -> Result<StrategyReport, CrcError> {
    let table = model.params().is_byte_aligned();
    let run = |algorithm: Algorithm| model.checksum_with(algorithm, data);

    let report = StrategyReport {
        name: model.params().name,
        len: data.len(),
        naive: run(Algorithm::Naive)?,
        naive_fast: run(Algorithm::NaiveFast)?,
        lookup: if table { Some(run(Algorithm::Lookup)?) } else { None },
        lookup_fast: if table {
            Some(run(Algorithm::LookupFast)?)
        } else {
            None
        },
    };
    log_debug!("{}", report);

    if !report.agree() {
        return Err(CrcError::Disagreement(report));
    }
    Ok(report)
}
