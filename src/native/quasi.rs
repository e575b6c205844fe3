//! Low-discrepancy quasi-random engine
//!
//! Bit-reversed radical-inverse sequence with per-dimension XOR
//! scrambling, in 32- and 64-bit variants. Generated elements interleave
//! dimensions: element `e` belongs to dimension `e % dims` and point
//! `e / dims`. The sequence is seed-independent; only the dimension count
//! and the point offset affect it.

use super::distributions::BitSource;
use super::philox::mix64;

/// Output width of a quasi stream.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum QuasiWidth {
    W32,
    W64,
}

/// Quasi-random stream positioned at an absolute element index.
pub(crate) struct QuasiSource {
    dims: u64,
    salt: u64,
    elem: u64,
    start: u64,
    width: QuasiWidth,
}

impl QuasiSource {
    /// Stream over `dims` interleaved dimensions starting at point
    /// `offset`, already advanced by `drawn` elements. `salt` keys the
    /// scrambling (zero for the unscrambled families).
    pub(crate) fn new(width: QuasiWidth, dims: u32, salt: u64, offset: u64, drawn: u64) -> Self {
        let dims = u64::from(dims.max(1));
        let elem = offset.wrapping_mul(dims).wrapping_add(drawn);
        Self {
            dims,
            salt,
            elem,
            start: elem,
            width,
        }
    }

    /// Elements consumed since construction.
    pub(crate) fn consumed(&self) -> u64 {
        self.elem.wrapping_sub(self.start)
    }

    fn value64(&mut self) -> u64 {
        let dim = self.elem % self.dims;
        let point = self.elem / self.dims;
        self.elem = self.elem.wrapping_add(1);
        point.wrapping_add(1).reverse_bits() ^ scramble(dim, self.salt)
    }

    fn value32(&mut self) -> u32 {
        let dim = self.elem % self.dims;
        let point = self.elem / self.dims;
        self.elem = self.elem.wrapping_add(1);
        (point.wrapping_add(1) as u32).reverse_bits() ^ (scramble(dim, self.salt) >> 32) as u32
    }
}

/// Per-dimension scramble constant. Dimension 0 of an unscrambled stream
/// is the pure radical-inverse sequence.
fn scramble(dim: u64, salt: u64) -> u64 {
    if salt == 0 && dim == 0 {
        return 0;
    }
    mix64(dim.wrapping_add(1).wrapping_mul(0x0123_4567_89AB_CDEF) ^ salt)
}

impl BitSource for QuasiSource {
    fn next_u32(&mut self) -> u32 {
        match self.width {
            QuasiWidth::W32 => self.value32(),
            // 64-bit stream asked for 32 bits: take the high half.
            QuasiWidth::W64 => (self.value64() >> 32) as u32,
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self.width {
            QuasiWidth::W64 => self.value64(),
            // 32-bit stream asked for 64 bits: combine two elements.
            QuasiWidth::W32 => {
                let lo = self.value32() as u64;
                let hi = self.value32() as u64;
                (hi << 32) | lo
            }
        }
    }
}
