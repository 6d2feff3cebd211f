use crate::params::mask;

/// Reverses the order of the low `bits` bits of `value`.
///
/// Bits above `bits` are discarded, so the result always fits in `bits`
/// bits. A `bits` of 0 gives 0 and anything above 64 is taken as 64.
#[inline]
pub const fn reflect(value: u64, bits: u8) -> u64 {
    if bits == 0 {
        return 0;
    }
    let bits = if bits > 64 { 64 } else { bits };
    (value & mask(bits)).reverse_bits() >> (64 - bits as u32)
}
