//! Generator resource and its configuration state machine
//!
//! A [`Generator`] owns exactly one native handle, created against an
//! execution target at construction and released exactly once on drop.
//! Property writes either succeed (native call accepted, cache updated) or
//! fail with a `Configuration` error leaving every cached value untouched;
//! there is no partial update. Which writes a family accepts is decided by
//! the native layer, so behavior is identical whether validation happens
//! locally or at the native boundary.

use crate::error::{Error, Result};
use crate::native;
use crate::rng::RngType;
use crate::status::STATUS_SUCCESS;
use crate::target::Target;

/// A parallel random-number generator bound to an execution target.
///
/// The algorithm family is fixed at construction. Seed, offset and
/// dimension values are cached from successful writes only; ordering is
/// read back from the native layer.
pub struct Generator<T: Target> {
    target: T,
    handle: u64,
    rng_type: RngType,
    seed: u64,
    offset: u64,
    dimensions: u32,
}

impl<T: Target> Generator<T> {
    /// Create a generator of the default pseudo-random family.
    pub fn new(target: &T) -> Result<Self> {
        Self::with_rng_type(target, RngType::PseudoDefault)
    }

    /// Create a generator of an explicit algorithm family.
    ///
    /// Routes through the device-stream create entry when the target is
    /// device-bound, through the host-mode entry otherwise.
    pub fn with_rng_type(target: &T, rng_type: RngType) -> Result<Self> {
        let mut handle = 0;
        let status = if target.is_device_bound() {
            native::create(rng_type.as_raw(), &mut handle)
        } else {
            native::create_host(rng_type.as_raw(), &mut handle)
        };
        if status != STATUS_SUCCESS {
            return Err(Error::initialization(status));
        }
        Ok(Self {
            target: target.clone(),
            handle,
            rng_type,
            seed: 0,
            offset: 0,
            dimensions: 0,
        })
    }

    /// The algorithm family, fixed for the generator's lifetime.
    pub fn rng_type(&self) -> RngType {
        self.rng_type
    }

    /// Native library version.
    pub fn version(&self) -> i32 {
        let mut version = 0;
        let _ = native::get_version(&mut version);
        version
    }

    /// Result ordering, read back from the native layer (0 if never set).
    pub fn ordering(&self) -> u32 {
        let mut ordering = 0;
        let _ = native::get_ordering(self.handle, &mut ordering);
        ordering
    }

    /// Set the result ordering.
    pub fn set_ordering(&mut self, ordering: u32) -> Result<()> {
        match native::set_ordering(self.handle, ordering) {
            STATUS_SUCCESS => Ok(()),
            status => Err(Error::configuration(status)),
        }
    }

    /// Last successfully written seed (0 if never set).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Set the seed, truncating any fractional part.
    ///
    /// Negative values wrap two's-complement style, so every distinct
    /// integer input selects a distinct seed. Fails for families that are
    /// not seed-driven; the cached value is only updated when the native
    /// call succeeds.
    pub fn set_seed(&mut self, seed: f64) -> Result<()> {
        let value = seed.trunc() as i64 as u64;
        match native::set_seed(self.handle, value) {
            STATUS_SUCCESS => {
                self.seed = value;
                Ok(())
            }
            status => Err(Error::configuration(status)),
        }
    }

    /// Last successfully written sequence offset (0 if never set).
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Set the sequence offset, truncating any fractional part.
    ///
    /// Fails for families that cannot skip ahead, with the same
    /// state-preserving contract as [`set_seed`](Self::set_seed).
    pub fn set_offset(&mut self, offset: f64) -> Result<()> {
        let value = offset.trunc() as i64 as u64;
        match native::set_offset(self.handle, value) {
            STATUS_SUCCESS => {
                self.offset = value;
                Ok(())
            }
            status => Err(Error::configuration(status)),
        }
    }

    /// Quasi-random dimension count (0 if never set; non-zero only for
    /// quasi families).
    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    /// Set the number of simultaneous quasi-random output streams.
    ///
    /// Pseudo families reject this before any state changes, so the
    /// cached count stays 0.
    pub fn set_dimensions(&mut self, dimensions: u32) -> Result<()> {
        match native::set_dimensions(self.handle, dimensions) {
            STATUS_SUCCESS => {
                self.dimensions = dimensions;
                Ok(())
            }
            status => Err(Error::configuration(status)),
        }
    }

    pub(crate) fn handle(&self) -> u64 {
        self.handle
    }

    pub(crate) fn target(&self) -> &T {
        &self.target
    }
}

impl<T: Target> Drop for Generator<T> {
    fn drop(&mut self) {
        let _ = native::destroy(self.handle);
    }
}
