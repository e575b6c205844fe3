//! Generation dispatch
//!
//! Every generation operation shares one contract: resolve the effective
//! element count (explicit, or inferred from the destination's capacity at
//! the operation's width), route the write to device or host memory, and
//! translate any non-zero native status into a `Generation` error. The
//! engines behind the native entry points are target-independent, so a
//! fixed configuration produces bit-identical output on either path.

use crate::buffer::BufferMut;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::native;
use crate::status::{STATUS_OUT_OF_RANGE, STATUS_SUCCESS, STATUS_TYPE_ERROR};
use crate::target::Target;

impl<T: Target> Generator<T> {
    /// Fill with uniformly distributed 32-bit words.
    ///
    /// Unsupported by families whose native width is 64-bit.
    pub fn generate32(&mut self, buf: &mut BufferMut<'_>, count: Option<usize>) -> Result<()> {
        self.dispatch(buf, count, 4, |handle, dst, n| unsafe {
            native::generate_u32(handle, dst.cast(), n)
        })
    }

    /// Fill with uniformly distributed 64-bit words.
    ///
    /// Required for the 64-bit quasi families; unsupported otherwise.
    pub fn generate64(&mut self, buf: &mut BufferMut<'_>, count: Option<usize>) -> Result<()> {
        self.dispatch(buf, count, 8, |handle, dst, n| unsafe {
            native::generate_u64(handle, dst.cast(), n)
        })
    }

    /// Fill with f32 values uniform in (0,1].
    pub fn generate_uniform(&mut self, buf: &mut BufferMut<'_>, count: Option<usize>) -> Result<()> {
        self.dispatch(buf, count, 4, |handle, dst, n| unsafe {
            native::generate_uniform_f32(handle, dst.cast(), n)
        })
    }

    /// Fill with f64 values uniform in (0,1].
    pub fn generate_uniform_double(
        &mut self,
        buf: &mut BufferMut<'_>,
        count: Option<usize>,
    ) -> Result<()> {
        self.dispatch(buf, count, 8, |handle, dst, n| unsafe {
            native::generate_uniform_f64(handle, dst.cast(), n)
        })
    }

    /// Fill with f32 values drawn from normal(mean, stddev).
    ///
    /// Pass `0.0, 1.0` for the standard normal distribution.
    pub fn generate_normal(
        &mut self,
        buf: &mut BufferMut<'_>,
        count: Option<usize>,
        mean: f32,
        stddev: f32,
    ) -> Result<()> {
        self.dispatch(buf, count, 4, |handle, dst, n| unsafe {
            native::generate_normal_f32(handle, dst.cast(), n, mean, stddev)
        })
    }

    /// Fill with f64 values drawn from normal(mean, stddev).
    ///
    /// Pass `0.0, 1.0` for the standard normal distribution.
    pub fn generate_normal_double(
        &mut self,
        buf: &mut BufferMut<'_>,
        count: Option<usize>,
        mean: f64,
        stddev: f64,
    ) -> Result<()> {
        self.dispatch(buf, count, 8, |handle, dst, n| unsafe {
            native::generate_normal_f64(handle, dst.cast(), n, mean, stddev)
        })
    }

    /// Fill with f32 values whose logarithm is normal(mean, stddev).
    ///
    /// Pass `0.0, 1.0` for the standard log-normal distribution.
    pub fn generate_log_normal(
        &mut self,
        buf: &mut BufferMut<'_>,
        count: Option<usize>,
        mean: f32,
        stddev: f32,
    ) -> Result<()> {
        self.dispatch(buf, count, 4, |handle, dst, n| unsafe {
            native::generate_log_normal_f32(handle, dst.cast(), n, mean, stddev)
        })
    }

    /// Fill with f64 values whose logarithm is normal(mean, stddev).
    ///
    /// Pass `0.0, 1.0` for the standard log-normal distribution.
    pub fn generate_log_normal_double(
        &mut self,
        buf: &mut BufferMut<'_>,
        count: Option<usize>,
        mean: f64,
        stddev: f64,
    ) -> Result<()> {
        self.dispatch(buf, count, 8, |handle, dst, n| unsafe {
            native::generate_log_normal_f64(handle, dst.cast(), n, mean, stddev)
        })
    }

    /// Fill with u32 values drawn from Poisson(lam). `lam` must be a
    /// positive finite rate; `1.0` is the customary default.
    pub fn generate_poisson(
        &mut self,
        buf: &mut BufferMut<'_>,
        count: Option<usize>,
        lam: f64,
    ) -> Result<()> {
        self.dispatch(buf, count, 4, |handle, dst, n| unsafe {
            native::generate_poisson_u32(handle, dst.cast(), n, lam)
        })
    }

    /// Shared dispatch: count resolution, destination routing, status
    /// translation.
    fn dispatch(
        &mut self,
        buf: &mut BufferMut<'_>,
        count: Option<usize>,
        width_bytes: usize,
        call: impl Fn(u64, *mut u8, usize) -> i32,
    ) -> Result<()> {
        let natural = buf.len_as(width_bytes);
        let n = count.unwrap_or(natural);
        if n > natural {
            return Err(Error::generation(STATUS_OUT_OF_RANGE));
        }
        if n == 0 {
            return Ok(());
        }

        let handle = self.handle();
        let status = match buf {
            BufferMut::Host(bytes) => {
                if self.target().is_device_bound() {
                    return Err(Error::generation(STATUS_TYPE_ERROR));
                }
                if bytes.as_ptr() as usize % width_bytes != 0 {
                    return Err(Error::generation(STATUS_TYPE_ERROR));
                }
                call(handle, bytes.as_mut_ptr(), n)
            }
            BufferMut::Device {
                handle: mem_handle, ..
            } => {
                if !self.target().is_device_bound() {
                    return Err(Error::generation(STATUS_TYPE_ERROR));
                }
                self.target()
                    .map_mut(*mem_handle, &mut |bytes| call(handle, bytes.as_mut_ptr(), n))
            }
        };

        match status {
            STATUS_SUCCESS => Ok(()),
            status => Err(Error::generation(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::STATUS_NOT_INITIALIZED;
    use crate::target::{DeviceMem, DeviceTarget, HostTarget};

    #[test]
    fn test_explicit_count_must_fit() {
        let target = HostTarget::new();
        let mut rng = Generator::new(&target).unwrap();
        let mut data = vec![0u32; 16];
        let mut buf = BufferMut::from(data.as_mut_slice());
        let err = rng.generate32(&mut buf, Some(17)).unwrap_err();
        assert_eq!(err.status(), STATUS_OUT_OF_RANGE);
    }

    #[test]
    fn test_zero_count_is_a_no_op() {
        let target = HostTarget::new();
        let mut rng = Generator::new(&target).unwrap();
        let mut data: Vec<u32> = vec![];
        let mut buf = BufferMut::from(data.as_mut_slice());
        rng.generate32(&mut buf, None).unwrap();
    }

    #[test]
    fn test_device_buffer_rejected_in_host_mode() {
        let device = DeviceTarget::new();
        let host = HostTarget::new();
        let mut rng = Generator::new(&host).unwrap();
        let mut mem = DeviceMem::new(&device, 64);
        let mut buf = BufferMut::from(&mut mem);
        let err = rng.generate32(&mut buf, None).unwrap_err();
        assert_eq!(err.status(), STATUS_TYPE_ERROR);
    }

    #[test]
    fn test_host_slice_rejected_on_device_target() {
        let device = DeviceTarget::new();
        let mut rng = Generator::new(&device).unwrap();
        let mut data = vec![0u32; 16];
        let mut buf = BufferMut::from(data.as_mut_slice());
        let err = rng.generate32(&mut buf, None).unwrap_err();
        assert_eq!(err.status(), STATUS_TYPE_ERROR);
    }

    #[test]
    fn test_freed_device_buffer_fails_cleanly() {
        let device = DeviceTarget::new();
        let mut rng = Generator::new(&device).unwrap();
        let stale = {
            let mem = DeviceMem::new(&device, 64);
            mem.handle()
        };
        let mut buf = BufferMut::Device {
            handle: stale,
            size_bytes: 64,
        };
        let err = rng.generate32(&mut buf, None).unwrap_err();
        assert_eq!(err.status(), STATUS_NOT_INITIALIZED);
    }
}
