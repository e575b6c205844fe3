//! Destination buffer descriptors
//!
//! The core never allocates or frees destination memory; a [`BufferMut`]
//! only describes where generated elements go (a device allocation or a
//! host slice) and how many elements of a given width fit there.

use crate::target::DeviceMem;

/// A writable destination for one generation call.
///
/// Borrowed for the duration of the call. The device variant refers to an
/// allocation by handle; if the allocation is freed before use, the call
/// fails with `STATUS_NOT_INITIALIZED` rather than touching stale memory.
pub enum BufferMut<'a> {
    /// Device-resident destination.
    Device {
        /// Allocation handle on the generator's target.
        handle: u64,
        /// Allocation size in bytes.
        size_bytes: usize,
    },
    /// Host-resident destination.
    Host(&'a mut [u8]),
}

impl BufferMut<'_> {
    /// Destination capacity in bytes.
    pub fn size_bytes(&self) -> usize {
        match self {
            Self::Device { size_bytes, .. } => *size_bytes,
            Self::Host(bytes) => bytes.len(),
        }
    }

    /// Natural element count for a requested element width in bytes.
    pub fn len_as(&self, width_bytes: usize) -> usize {
        self.size_bytes() / width_bytes
    }

    /// Is the destination device-resident?
    pub fn is_device(&self) -> bool {
        matches!(self, Self::Device { .. })
    }
}

impl<'a> From<&'a mut DeviceMem> for BufferMut<'a> {
    fn from(mem: &'a mut DeviceMem) -> Self {
        Self::Device {
            handle: mem.handle(),
            size_bytes: mem.size_bytes(),
        }
    }
}

impl<'a> From<&'a mut [u32]> for BufferMut<'a> {
    fn from(slice: &'a mut [u32]) -> Self {
        Self::Host(bytemuck::cast_slice_mut(slice))
    }
}

impl<'a> From<&'a mut [u64]> for BufferMut<'a> {
    fn from(slice: &'a mut [u64]) -> Self {
        Self::Host(bytemuck::cast_slice_mut(slice))
    }
}

impl<'a> From<&'a mut [f32]> for BufferMut<'a> {
    fn from(slice: &'a mut [f32]) -> Self {
        Self::Host(bytemuck::cast_slice_mut(slice))
    }
}

impl<'a> From<&'a mut [f64]> for BufferMut<'a> {
    fn from(slice: &'a mut [f64]) -> Self {
        Self::Host(bytemuck::cast_slice_mut(slice))
    }
}
