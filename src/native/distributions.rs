//! Distribution sampling over raw bit streams
//!
//! Every fill consumes a deterministic prefix of its source for a given
//! output length, so replaying a call sequence replays the exact bits.
//! Uniform reals map into (0,1]; normal uses the Box-Muller transform;
//! Poisson uses Knuth's product method for small rates and a normal
//! approximation above.

use std::f64::consts::TAU;

/// A positioned stream of raw generator output.
pub(crate) trait BitSource {
    /// Next 32 bits of output.
    fn next_u32(&mut self) -> u32;
    /// Next 64 bits of output.
    fn next_u64(&mut self) -> u64;
}

/// Uniform f32 in (0,1] from one 32-bit draw (24-bit mantissa grid).
#[inline]
pub(crate) fn uniform_f32(src: &mut impl BitSource) -> f32 {
    (((src.next_u32() >> 8) + 1) as f32) * (1.0 / 16_777_216.0)
}

/// Uniform f64 in (0,1] from one 64-bit draw (53-bit mantissa grid).
#[inline]
pub(crate) fn uniform_f64(src: &mut impl BitSource) -> f64 {
    (((src.next_u64() >> 11) + 1) as f64) * (1.0 / 9_007_199_254_740_992.0)
}

pub(crate) fn fill_u32(src: &mut impl BitSource, out: &mut [u32]) {
    for slot in out {
        *slot = src.next_u32();
    }
}

pub(crate) fn fill_u64(src: &mut impl BitSource, out: &mut [u64]) {
    for slot in out {
        *slot = src.next_u64();
    }
}

pub(crate) fn fill_uniform_f32(src: &mut impl BitSource, out: &mut [f32]) {
    for slot in out {
        *slot = uniform_f32(src);
    }
}

pub(crate) fn fill_uniform_f64(src: &mut impl BitSource, out: &mut [f64]) {
    for slot in out {
        *slot = uniform_f64(src);
    }
}

/// Box-Muller pair from two uniform draws. u1 lies in (0,1], so the log
/// is finite.
#[inline]
fn normal_pair_f64(src: &mut impl BitSource) -> (f64, f64) {
    let u1 = uniform_f64(src);
    let u2 = uniform_f64(src);
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = TAU * u2;
    (r * theta.cos(), r * theta.sin())
}

#[inline]
fn normal_pair_f32(src: &mut impl BitSource) -> (f32, f32) {
    let u1 = uniform_f32(src) as f64;
    let u2 = uniform_f32(src) as f64;
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = TAU * u2;
    ((r * theta.cos()) as f32, (r * theta.sin()) as f32)
}

pub(crate) fn fill_normal_f32(src: &mut impl BitSource, out: &mut [f32], mean: f32, stddev: f32) {
    let mut i = 0;
    while i < out.len() {
        let (a, b) = normal_pair_f32(src);
        out[i] = mean + stddev * a;
        if i + 1 < out.len() {
            out[i + 1] = mean + stddev * b;
        }
        i += 2;
    }
}

pub(crate) fn fill_normal_f64(src: &mut impl BitSource, out: &mut [f64], mean: f64, stddev: f64) {
    let mut i = 0;
    while i < out.len() {
        let (a, b) = normal_pair_f64(src);
        out[i] = mean + stddev * a;
        if i + 1 < out.len() {
            out[i + 1] = mean + stddev * b;
        }
        i += 2;
    }
}

pub(crate) fn fill_log_normal_f32(
    src: &mut impl BitSource,
    out: &mut [f32],
    mean: f32,
    stddev: f32,
) {
    fill_normal_f32(src, out, mean, stddev);
    for slot in out {
        *slot = slot.exp();
    }
}

pub(crate) fn fill_log_normal_f64(
    src: &mut impl BitSource,
    out: &mut [f64],
    mean: f64,
    stddev: f64,
) {
    fill_normal_f64(src, out, mean, stddev);
    for slot in out {
        *slot = slot.exp();
    }
}

/// Rate threshold above which Poisson switches from Knuth's product
/// method to the normal approximation.
const POISSON_NORMAL_APPROX_CUTOFF: f64 = 30.0;

pub(crate) fn fill_poisson_u32(src: &mut impl BitSource, out: &mut [u32], lam: f64) {
    if lam < POISSON_NORMAL_APPROX_CUTOFF {
        let limit = (-lam).exp();
        for slot in out {
            let mut k = 0u32;
            let mut p = 1.0f64;
            loop {
                p *= uniform_f64(src);
                if p <= limit {
                    break;
                }
                k += 1;
            }
            *slot = k;
        }
    } else {
        for slot in out {
            let (z, _) = normal_pair_f64(src);
            *slot = (lam + lam.sqrt() * z).round().max(0.0) as u32;
        }
    }
}
