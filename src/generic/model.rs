use std::fmt;

use log::{debug, warn};

use super::custom_crc::CustomCrc;
use super::{Algorithm, Family};
use crate::catalog::CHECK_INPUT;
use crate::error::CrcError;
use crate::params::{mask, CrcParams};
use crate::reflect::reflect;

const TABLE_LEN: usize = 256;

/// A validated CRC model with its derived seeds and lookup table.
///
/// Built once from a [`CrcParams`] record and read-only afterwards, so a
/// shared reference can be used from any number of threads. `T` is caller
/// data carried alongside the model and never looked at.
pub struct CrcModel<T = ()> {
    pub(super) params: CrcParams,
    pub(super) table: Vec<u64>,
    pub(super) init_direct: u64,
    pub(super) init_nodirect: Option<u64>,
    pub(super) crc_mask: u64,
    pub(super) high_bit_mask: u64,
    family: Family,
    data: T,
}

impl CrcModel {
    /// Creates a model using the fast family.
    pub fn new(params: CrcParams) -> Result<Self, CrcError> {
        Self::with_data(params, ())
    }
}

impl<T> CrcModel<T> {
    /// Creates a model carrying `data`.
    ///
    /// Fails without building anything if `params` does not validate or the
    /// table cannot be allocated. A seed without a non-direct form (possible
    /// only with an even polynomial) leaves the model usable with the fast
    /// family alone; the augmented strategies then return
    /// [`CrcError::NoNondirectSeed`].
    pub fn with_data(params: CrcParams, data: T) -> Result<Self, CrcError> {
        params.validate()?;

        let mut model = Self {
            params,
            table: Vec::new(),
            init_direct: params.init,
            init_nodirect: CustomCrc::nondirect_init(&params),
            crc_mask: mask(params.width),
            high_bit_mask: 1 << (params.width - 1),
            family: Family::default(),
            data,
        };
        model.build_table()?;

        debug!(
            "[{}] model ready: width {}, init {:#X} direct / {:?} nondirect",
            params.name, params.width, model.init_direct, model.init_nodirect
        );
        Ok(model)
    }

    /// Selects the family [`CrcModel::checksum`] uses.
    ///
    /// The augmented family is refused when the seed has no non-direct form.
    pub fn with_family(mut self, family: Family) -> Result<Self, CrcError> {
        if family == Family::Augmented {
            self.require_nondirect()?;
        }
        self.family = family;
        Ok(self)
    }

    /// Fills the lookup table. Calling it on a model whose table already
    /// exists leaves the table untouched.
    pub fn build_table(&mut self) -> Result<(), CrcError> {
        if !self.table.is_empty() {
            warn!("[{}] lookup table already built", self.params.name);
            return Ok(());
        }
        let mut table = Vec::new();
        table
            .try_reserve_exact(TABLE_LEN)
            .map_err(|_| CrcError::Allocation)?;
        table.extend_from_slice(&CustomCrc::generate_lookup_table(&self.params));
        self.table = table;
        Ok(())
    }

    pub fn params(&self) -> &CrcParams {
        &self.params
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Seed used by the fast family.
    pub fn init_direct(&self) -> u64 {
        self.init_direct
    }

    /// Seed used by the augmented family, if the direct seed has one.
    pub fn init_nodirect(&self) -> Option<u64> {
        self.init_nodirect
    }

    pub fn crc_mask(&self) -> u64 {
        self.crc_mask
    }

    pub fn high_bit_mask(&self) -> u64 {
        self.high_bit_mask
    }

    pub fn table(&self) -> &[u64] {
        &self.table
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// The strategy [`CrcModel::checksum`] runs.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::select(self.params.width, self.family)
    }

    /// Computes the checksum of `data`.
    pub fn checksum(&self, data: &[u8]) -> u64 {
        // `with_family` only admits the augmented family with a seed.
        match (self.algorithm(), self.init_nodirect) {
            (Algorithm::Lookup, Some(seed)) => CustomCrc::crc_lookup(self, seed, data),
            (Algorithm::Naive, Some(seed)) => CustomCrc::crc_naive(self, seed, data),
            (Algorithm::Lookup | Algorithm::LookupFast, _) => CustomCrc::crc_lookup_fast(self, data),
            (Algorithm::Naive | Algorithm::NaiveFast, _) => CustomCrc::crc_naive_fast(self, data),
        }
    }

    /// Computes the checksum of `data` with a specific strategy.
    pub fn checksum_with(&self, algorithm: Algorithm, data: &[u8]) -> Result<u64, CrcError> {
        (algorithm.compute_fn())(self, data)
    }

    /// Recomputes the checksum of `123456789` and compares it against the
    /// record's `check`.
    pub fn check(&self) -> Result<u64, CrcError> {
        let computed = self.checksum(CHECK_INPUT);
        if computed != self.params.check {
            return Err(CrcError::CheckMismatch {
                name: self.params.name,
                expected: self.params.check,
                computed,
            });
        }
        Ok(computed)
    }

    /// Encodes `checksum` as the bytes to append to its message.
    ///
    /// The suffix carries the register before the output XOR, so that the
    /// checksum of message and suffix together is `xorout`. Bytes go out
    /// least significant first when `refout` is set, unless `swap_suffix`
    /// reverses that.
    ///
    /// A record with `refin != refout` needs `swap_suffix` set for
    /// [`CrcModel::verify`] to accept the frame; without it the bytes are
    /// still produced, with a warning.
    pub fn suffix(&self, checksum: u64) -> Result<Vec<u8>, CrcError> {
        self.require_byte_aligned()?;
        let p = &self.params;
        if p.refin != p.refout && !p.swap_suffix {
            warn!(
                "[{}] refin != refout without swap_suffix, suffix will not verify",
                p.name
            );
        }

        let mut register = (checksum ^ p.xorout) & self.crc_mask;
        if p.refin != p.refout {
            register = reflect(register, p.width);
        }

        let len = p.width as usize / 8;
        let mut bytes = register.to_le_bytes()[..len].to_vec();
        if p.refout == p.swap_suffix {
            bytes.reverse();
        }
        Ok(bytes)
    }

    /// Appends the checksum of `message` to it.
    pub fn append(&self, message: &mut Vec<u8>) -> Result<(), CrcError> {
        let suffix = self.suffix(self.checksum(message))?;
        message.extend_from_slice(&suffix);
        Ok(())
    }

    /// Whether `framed` ends with a valid suffix produced by
    /// [`CrcModel::append`].
    pub fn verify(&self, framed: &[u8]) -> bool {
        self.checksum(framed) == self.params.xorout
    }

    pub(super) fn require_nondirect(&self) -> Result<u64, CrcError> {
        self.init_nodirect.ok_or(CrcError::NoNondirectSeed {
            name: self.params.name,
            poly: self.params.poly,
            init: self.params.init,
        })
    }

    pub(super) fn require_byte_aligned(&self) -> Result<(), CrcError> {
        if !self.params.is_byte_aligned() {
            return Err(CrcError::UnalignedWidth(self.params.width));
        }
        Ok(())
    }
}

impl<T> fmt::Debug for CrcModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrcModel")
            .field("params", &self.params)
            .field("init_direct", &self.init_direct)
            .field("init_nodirect", &self.init_nodirect)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CrcModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        writeln!(f, "Parameters:")?;
        writeln!(f, " name       :  {}", p.name)?;
        writeln!(f, " polynom    :  {:#X}", p.poly)?;
        writeln!(f, " order      :  {}", p.width)?;
        match self.init_nodirect {
            Some(nondirect) => writeln!(
                f,
                " crcinit    :  {:#X} direct, {:#X} nondirect",
                self.init_direct, nondirect
            )?,
            None => writeln!(f, " crcinit    :  {:#X} direct, no nondirect", self.init_direct)?,
        }
        writeln!(f, " crcxor     :  {:#X}", p.xorout)?;
        writeln!(f, " refin      :  {}", p.refin as u8)?;
        writeln!(f, " refout     :  {}", p.refout as u8)
    }
}
