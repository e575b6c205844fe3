//! Native call layer
//!
//! Handle-based entry points for the underlying generation engine. Every
//! entry point returns an integer status code (zero = success); callers
//! translate non-zero codes into errors at the call site. Parameter
//! legality is validated here, so a rejected write never changes generator
//! state regardless of where the caller chose to validate.
//!
//! Generators created through [`create`] are bound to the device execution
//! stream; [`create_host`] is the host-mode entry family. Both run the
//! same engines, which is what makes output bit-identical across targets
//! for a fixed configuration.

pub(crate) mod distributions;
pub(crate) mod philox;
pub(crate) mod quasi;

use crate::rng::RngType;
use crate::status::{
    STATUS_LENGTH_NOT_MULTIPLE, STATUS_NOT_INITIALIZED, STATUS_OUT_OF_RANGE, STATUS_SUCCESS,
    STATUS_TYPE_ERROR,
};
use distributions::BitSource;
use parking_lot::Mutex;
use philox::{mix64, Philox};
use quasi::{QuasiSource, QuasiWidth};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

/// Version reported by [`get_version`].
const NATIVE_VERSION: i32 = 10302;

/// Largest accepted quasi-random dimension count.
const MAX_DIMENSIONS: u32 = 20_000;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);
static GENERATORS: OnceLock<Mutex<HashMap<u64, NativeGenerator>>> = OnceLock::new();

fn registry() -> &'static Mutex<HashMap<u64, NativeGenerator>> {
    GENERATORS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Per-handle generator state.
///
/// `drawn` counts engine positions consumed since the last seed/offset
/// write (32-bit words for pseudo streams, elements for quasi streams),
/// so sequential calls observe a monotonically advancing sequence.
struct NativeGenerator {
    rng_type: RngType,
    ordering: u32,
    seed: u64,
    offset: u64,
    dimensions: u32,
    drawn: u64,
}

impl NativeGenerator {
    fn new(rng_type: RngType) -> Self {
        Self {
            rng_type,
            ordering: 0,
            seed: 0,
            offset: 0,
            dimensions: 0,
            drawn: 0,
        }
    }

    fn effective_dims(&self) -> u32 {
        self.dimensions.max(1)
    }

    /// Quasi streams require the element count to be a multiple of the
    /// dimension count.
    fn check_len(&self, n: usize) -> i32 {
        if self.rng_type.is_quasi() && n % self.effective_dims() as usize != 0 {
            STATUS_LENGTH_NOT_MULTIPLE
        } else {
            STATUS_SUCCESS
        }
    }

    /// Engine stream positioned at the current sequence point.
    fn source(&self) -> Source {
        if self.rng_type.is_quasi() {
            let width = if self.rng_type.native_width() == 64 {
                QuasiWidth::W64
            } else {
                QuasiWidth::W32
            };
            let salt = match self.rng_type {
                RngType::QuasiScrambledSobol32 | RngType::QuasiScrambledSobol64 => {
                    u64::from(self.rng_type.as_raw())
                }
                _ => 0,
            };
            Source::Quasi(QuasiSource::new(
                width,
                self.dimensions,
                salt,
                self.offset,
                self.drawn,
            ))
        } else {
            let key = mix64(mix64(self.seed) ^ u64::from(self.rng_type.as_raw()));
            Source::Pseudo(Philox::new(key, self.offset.wrapping_add(self.drawn)))
        }
    }

    fn advance(&mut self, consumed: u64) {
        self.drawn = self.drawn.wrapping_add(consumed);
    }
}

enum Source {
    Pseudo(Philox),
    Quasi(QuasiSource),
}

impl Source {
    fn consumed(&self) -> u64 {
        match self {
            Self::Pseudo(s) => s.consumed(),
            Self::Quasi(s) => s.consumed(),
        }
    }
}

impl BitSource for Source {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Pseudo(s) => s.next_u32(),
            Self::Quasi(s) => s.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Pseudo(s) => s.next_u64(),
            Self::Quasi(s) => s.next_u64(),
        }
    }
}

fn with_generator(handle: u64, f: impl FnOnce(&mut NativeGenerator) -> i32) -> i32 {
    let mut generators = registry().lock();
    match generators.get_mut(&handle) {
        Some(generator) => f(generator),
        None => STATUS_NOT_INITIALIZED,
    }
}

fn create_impl(rng_type: u32, handle: &mut u64) -> i32 {
    let Some(rng_type) = RngType::from_raw(rng_type) else {
        return STATUS_TYPE_ERROR;
    };
    let id = NEXT_HANDLE.fetch_add(1, Ordering::Relaxed);
    registry().lock().insert(id, NativeGenerator::new(rng_type));
    *handle = id;
    STATUS_SUCCESS
}

/// Create a generator bound to the device execution stream.
pub(crate) fn create(rng_type: u32, handle: &mut u64) -> i32 {
    create_impl(rng_type, handle)
}

/// Create a generator running in host mode.
pub(crate) fn create_host(rng_type: u32, handle: &mut u64) -> i32 {
    create_impl(rng_type, handle)
}

/// Destroy a generator, releasing its handle.
pub(crate) fn destroy(handle: u64) -> i32 {
    match registry().lock().remove(&handle) {
        Some(_) => STATUS_SUCCESS,
        None => STATUS_NOT_INITIALIZED,
    }
}

/// Report the native library version.
pub(crate) fn get_version(version: &mut i32) -> i32 {
    *version = NATIVE_VERSION;
    STATUS_SUCCESS
}

/// Set the seed. Rejected with `STATUS_TYPE_ERROR` for families that are
/// not seed-driven; on success the sequence restarts at the offset.
pub(crate) fn set_seed(handle: u64, seed: u64) -> i32 {
    with_generator(handle, |g| {
        if !g.rng_type.supports_seed() {
            return STATUS_TYPE_ERROR;
        }
        g.seed = seed;
        g.drawn = 0;
        STATUS_SUCCESS
    })
}

/// Set the sequence offset. Rejected for families that cannot skip ahead.
pub(crate) fn set_offset(handle: u64, offset: u64) -> i32 {
    with_generator(handle, |g| {
        if !g.rng_type.supports_offset() {
            return STATUS_TYPE_ERROR;
        }
        g.offset = offset;
        g.drawn = 0;
        STATUS_SUCCESS
    })
}

/// Set the result ordering. The value must be legal for the family.
pub(crate) fn set_ordering(handle: u64, ordering: u32) -> i32 {
    with_generator(handle, |g| {
        if !g.rng_type.ordering_legal(ordering) {
            return STATUS_OUT_OF_RANGE;
        }
        g.ordering = ordering;
        STATUS_SUCCESS
    })
}

/// Read back the result ordering (0 if never set).
pub(crate) fn get_ordering(handle: u64, ordering: &mut u32) -> i32 {
    with_generator(handle, |g| {
        *ordering = g.ordering;
        STATUS_SUCCESS
    })
}

/// Set the quasi-random dimension count. Rejected with
/// `STATUS_TYPE_ERROR` on pseudo families before any state changes.
pub(crate) fn set_dimensions(handle: u64, dimensions: u32) -> i32 {
    with_generator(handle, |g| {
        if !g.rng_type.supports_dimensions() {
            return STATUS_TYPE_ERROR;
        }
        if dimensions == 0 || dimensions > MAX_DIMENSIONS {
            return STATUS_OUT_OF_RANGE;
        }
        g.dimensions = dimensions;
        g.drawn = 0;
        STATUS_SUCCESS
    })
}

/// Fill `n` 32-bit words with uniform bits.
///
/// # Safety
///
/// `out` must be valid for writes of `n` aligned `u32` values.
pub(crate) unsafe fn generate_u32(handle: u64, out: *mut u32, n: usize) -> i32 {
    with_generator(handle, |g| {
        if g.rng_type.native_width() != 32 {
            return STATUS_TYPE_ERROR;
        }
        let status = g.check_len(n);
        if status != STATUS_SUCCESS {
            return status;
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
        let mut src = g.source();
        distributions::fill_u32(&mut src, out);
        g.advance(src.consumed());
        STATUS_SUCCESS
    })
}

/// Fill `n` 64-bit words with uniform bits. Only the 64-bit quasi
/// families support this width.
///
/// # Safety
///
/// `out` must be valid for writes of `n` aligned `u64` values.
pub(crate) unsafe fn generate_u64(handle: u64, out: *mut u64, n: usize) -> i32 {
    with_generator(handle, |g| {
        if g.rng_type.native_width() != 64 {
            return STATUS_TYPE_ERROR;
        }
        let status = g.check_len(n);
        if status != STATUS_SUCCESS {
            return status;
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
        let mut src = g.source();
        distributions::fill_u64(&mut src, out);
        g.advance(src.consumed());
        STATUS_SUCCESS
    })
}

/// Fill `n` f32 values uniform in (0,1].
///
/// # Safety
///
/// `out` must be valid for writes of `n` aligned `f32` values.
pub(crate) unsafe fn generate_uniform_f32(handle: u64, out: *mut f32, n: usize) -> i32 {
    with_generator(handle, |g| {
        let status = g.check_len(n);
        if status != STATUS_SUCCESS {
            return status;
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
        let mut src = g.source();
        distributions::fill_uniform_f32(&mut src, out);
        g.advance(src.consumed());
        STATUS_SUCCESS
    })
}

/// Fill `n` f64 values uniform in (0,1].
///
/// # Safety
///
/// `out` must be valid for writes of `n` aligned `f64` values.
pub(crate) unsafe fn generate_uniform_f64(handle: u64, out: *mut f64, n: usize) -> i32 {
    with_generator(handle, |g| {
        let status = g.check_len(n);
        if status != STATUS_SUCCESS {
            return status;
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
        let mut src = g.source();
        distributions::fill_uniform_f64(&mut src, out);
        g.advance(src.consumed());
        STATUS_SUCCESS
    })
}

/// Fill `n` f32 values drawn from normal(mean, stddev).
///
/// # Safety
///
/// `out` must be valid for writes of `n` aligned `f32` values.
pub(crate) unsafe fn generate_normal_f32(
    handle: u64,
    out: *mut f32,
    n: usize,
    mean: f32,
    stddev: f32,
) -> i32 {
    with_generator(handle, |g| {
        let status = g.check_len(n);
        if status != STATUS_SUCCESS {
            return status;
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
        let mut src = g.source();
        distributions::fill_normal_f32(&mut src, out, mean, stddev);
        g.advance(src.consumed());
        STATUS_SUCCESS
    })
}

/// Fill `n` f64 values drawn from normal(mean, stddev).
///
/// # Safety
///
/// `out` must be valid for writes of `n` aligned `f64` values.
pub(crate) unsafe fn generate_normal_f64(
    handle: u64,
    out: *mut f64,
    n: usize,
    mean: f64,
    stddev: f64,
) -> i32 {
    with_generator(handle, |g| {
        let status = g.check_len(n);
        if status != STATUS_SUCCESS {
            return status;
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
        let mut src = g.source();
        distributions::fill_normal_f64(&mut src, out, mean, stddev);
        g.advance(src.consumed());
        STATUS_SUCCESS
    })
}

/// Fill `n` f32 values with the exponential of normal(mean, stddev) draws.
///
/// # Safety
///
/// `out` must be valid for writes of `n` aligned `f32` values.
pub(crate) unsafe fn generate_log_normal_f32(
    handle: u64,
    out: *mut f32,
    n: usize,
    mean: f32,
    stddev: f32,
) -> i32 {
    with_generator(handle, |g| {
        let status = g.check_len(n);
        if status != STATUS_SUCCESS {
            return status;
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
        let mut src = g.source();
        distributions::fill_log_normal_f32(&mut src, out, mean, stddev);
        g.advance(src.consumed());
        STATUS_SUCCESS
    })
}

/// Fill `n` f64 values with the exponential of normal(mean, stddev) draws.
///
/// # Safety
///
/// `out` must be valid for writes of `n` aligned `f64` values.
pub(crate) unsafe fn generate_log_normal_f64(
    handle: u64,
    out: *mut f64,
    n: usize,
    mean: f64,
    stddev: f64,
) -> i32 {
    with_generator(handle, |g| {
        let status = g.check_len(n);
        if status != STATUS_SUCCESS {
            return status;
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
        let mut src = g.source();
        distributions::fill_log_normal_f64(&mut src, out, mean, stddev);
        g.advance(src.consumed());
        STATUS_SUCCESS
    })
}

/// Fill `n` u32 values drawn from Poisson(lam). `lam` must be positive.
///
/// # Safety
///
/// `out` must be valid for writes of `n` aligned `u32` values.
pub(crate) unsafe fn generate_poisson_u32(handle: u64, out: *mut u32, n: usize, lam: f64) -> i32 {
    with_generator(handle, |g| {
        if !lam.is_finite() || lam <= 0.0 {
            return STATUS_OUT_OF_RANGE;
        }
        let status = g.check_len(n);
        if status != STATUS_SUCCESS {
            return status;
        }
        let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
        let mut src = g.source();
        distributions::fill_poisson_u32(&mut src, out, lam);
        g.advance(src.consumed());
        STATUS_SUCCESS
    })
}
