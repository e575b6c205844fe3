//! Philox 4x32-10 counter-based pseudo-random engine
//!
//! Counter-based PRNG with cryptographic-strength mixing.
//! Reference: Salmon et al. "Parallel Random Numbers: As Easy as 1, 2, 3"
//! (2011). Every output word is a pure function of (key, position), so a
//! sequence offset is an O(1) counter skip and the same key replays the
//! same bits on any execution target.

use super::distributions::BitSource;

const PHILOX_M0: u32 = 0xD251_1F53;
const PHILOX_M1: u32 = 0xCD9E_8D57;
const PHILOX_W0: u32 = 0x9E37_79B9;
const PHILOX_W1: u32 = 0xBB67_AE85;

/// Mix a 64-bit value, splitmix64-style.
pub(crate) fn mix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Philox 4x32-10 stream positioned at an absolute 32-bit-word index.
pub(crate) struct Philox {
    key: [u32; 2],
    pos: u64,
    start: u64,
    block_idx: u64,
    block: [u32; 4],
}

impl Philox {
    /// Stream for `key`, positioned at word `pos` of the keyed sequence.
    pub(crate) fn new(key: u64, pos: u64) -> Self {
        let key = [key as u32, (key >> 32) as u32];
        let block_idx = pos >> 2;
        Self {
            key,
            pos,
            start: pos,
            block_idx,
            block: block(key, block_idx),
        }
    }

    /// Words consumed since construction.
    pub(crate) fn consumed(&self) -> u64 {
        self.pos.wrapping_sub(self.start)
    }
}

impl BitSource for Philox {
    fn next_u32(&mut self) -> u32 {
        let idx = self.pos >> 2;
        if idx != self.block_idx {
            self.block_idx = idx;
            self.block = block(self.key, idx);
        }
        let value = self.block[(self.pos & 3) as usize];
        self.pos = self.pos.wrapping_add(1);
        value
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }
}

fn block(key: [u32; 2], counter: u64) -> [u32; 4] {
    let mut c = [counter as u32, (counter >> 32) as u32, 0, 0];
    let mut k = key;
    for _ in 0..10 {
        c = round(c, k);
        k[0] = k[0].wrapping_add(PHILOX_W0);
        k[1] = k[1].wrapping_add(PHILOX_W1);
    }
    c
}

#[inline]
fn round(c: [u32; 4], k: [u32; 2]) -> [u32; 4] {
    let p0 = (PHILOX_M0 as u64) * (c[0] as u64);
    let p1 = (PHILOX_M1 as u64) * (c[2] as u64);
    [
        ((p1 >> 32) as u32) ^ c[1] ^ k[0],
        p1 as u32,
        ((p0 >> 32) as u32) ^ c[3] ^ k[1],
        p0 as u32,
    ]
}
