//! Emulated co-processor target and device memory

use super::Target;
use crate::status::STATUS_NOT_INITIALIZED;
use bytemuck::Pod;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// One allocation in the device address space.
///
/// Backed by `u64` words so any element width up to 8 bytes is aligned;
/// `size_bytes` is the caller-visible length.
struct Allocation {
    words: Box<[u64]>,
    size_bytes: usize,
}

impl Allocation {
    fn bytes(&self) -> &[u8] {
        &bytemuck::cast_slice(&self.words)[..self.size_bytes]
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut(&mut self.words)[..self.size_bytes]
    }
}

struct AddressSpace {
    next_handle: AtomicU64,
    allocations: Mutex<HashMap<u64, Allocation>>,
}

/// A co-processor execution target.
///
/// Allocations live in a private, handle-addressed address space; results
/// are observed on the host only through an explicit download. Clones share
/// the same address space, so multiple generators can be bound to one
/// target.
#[derive(Clone)]
pub struct DeviceTarget {
    space: Arc<AddressSpace>,
}

impl DeviceTarget {
    /// Acquire a device context.
    pub fn new() -> Self {
        Self {
            space: Arc::new(AddressSpace {
                next_handle: AtomicU64::new(1),
                allocations: Mutex::new(HashMap::new()),
            }),
        }
    }
}

impl Default for DeviceTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for DeviceTarget {
    fn is_device_bound(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "device"
    }

    fn alloc(&self, size_bytes: usize) -> u64 {
        if size_bytes == 0 {
            return 0;
        }
        let words = size_bytes.div_ceil(8);
        let allocation = Allocation {
            words: vec![0u64; words].into_boxed_slice(),
            size_bytes,
        };
        let handle = self.space.next_handle.fetch_add(1, Ordering::Relaxed);
        self.space.allocations.lock().insert(handle, allocation);
        handle
    }

    fn free(&self, handle: u64) {
        if handle == 0 {
            return;
        }
        self.space.allocations.lock().remove(&handle);
    }

    fn upload(&self, src: &[u8], handle: u64) {
        let mut allocations = self.space.allocations.lock();
        if let Some(allocation) = allocations.get_mut(&handle) {
            let n = src.len().min(allocation.size_bytes);
            allocation.bytes_mut()[..n].copy_from_slice(&src[..n]);
        }
    }

    fn download(&self, handle: u64, dst: &mut [u8]) {
        let allocations = self.space.allocations.lock();
        if let Some(allocation) = allocations.get(&handle) {
            let n = dst.len().min(allocation.size_bytes);
            dst[..n].copy_from_slice(&allocation.bytes()[..n]);
        }
    }

    fn fill_zero(&self, handle: u64) {
        let mut allocations = self.space.allocations.lock();
        if let Some(allocation) = allocations.get_mut(&handle) {
            allocation.words.fill(0);
        }
    }

    fn map_mut(&self, handle: u64, f: &mut dyn FnMut(&mut [u8]) -> i32) -> i32 {
        let mut allocations = self.space.allocations.lock();
        match allocations.get_mut(&handle) {
            Some(allocation) => f(allocation.bytes_mut()),
            None => STATUS_NOT_INITIALIZED,
        }
    }
}

/// An owned allocation on a [`DeviceTarget`].
///
/// Released exactly once when dropped. The transfer-layer counterpart the
/// caller uses to stage input and observe generated output.
pub struct DeviceMem {
    target: DeviceTarget,
    handle: u64,
    size_bytes: usize,
}

impl DeviceMem {
    /// Allocate `size_bytes` of zeroed device memory.
    pub fn new(target: &DeviceTarget, size_bytes: usize) -> Self {
        Self {
            target: target.clone(),
            handle: target.alloc(size_bytes),
            size_bytes,
        }
    }

    /// Allocate device memory holding a copy of `data`.
    pub fn from_host<T: Pod>(target: &DeviceTarget, data: &[T]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let mem = Self::new(target, bytes.len());
        target.upload(bytes, mem.handle);
        mem
    }

    /// Copy the allocation back into a host slice.
    pub fn to_host<T: Pod>(&self, dst: &mut [T]) {
        self.target.download(self.handle, bytemuck::cast_slice_mut(dst));
    }

    /// Overwrite the allocation from a host slice.
    pub fn from_host_slice<T: Pod>(&mut self, src: &[T]) {
        self.target.upload(bytemuck::cast_slice(src), self.handle);
    }

    /// Zero the allocation.
    pub fn fill_zero(&mut self) {
        self.target.fill_zero(self.handle);
    }

    /// Opaque handle of this allocation.
    pub fn handle(&self) -> u64 {
        self.handle
    }

    /// Caller-visible size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }
}

impl Drop for DeviceMem {
    fn drop(&mut self) {
        self.target.free(self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_roundtrip() {
        let target = DeviceTarget::new();
        let data: Vec<u32> = (0..16).collect();
        let mem = DeviceMem::from_host(&target, &data);

        let mut back = vec![0u32; 16];
        mem.to_host(&mut back);
        assert_eq!(data, back);
    }

    #[test]
    fn test_fill_zero() {
        let target = DeviceTarget::new();
        let mut mem = DeviceMem::from_host(&target, &[1u32, 2, 3, 4]);
        mem.fill_zero();

        let mut back = vec![9u32; 4];
        mem.to_host(&mut back);
        assert_eq!(back, vec![0u32; 4]);
    }

    #[test]
    fn test_free_on_drop() {
        let target = DeviceTarget::new();
        let handle = {
            let mem = DeviceMem::new(&target, 64);
            mem.handle()
        };
        let status = target.map_mut(handle, &mut |_| 0);
        assert_eq!(status, STATUS_NOT_INITIALIZED);
    }

    #[test]
    fn test_zero_sized_alloc() {
        let target = DeviceTarget::new();
        assert_eq!(target.alloc(0), 0);
        target.free(0); // must not panic
    }

    #[test]
    fn test_map_mut_passes_status() {
        let target = DeviceTarget::new();
        let mem = DeviceMem::new(&target, 8);
        let status = target.map_mut(mem.handle(), &mut |bytes| {
            assert_eq!(bytes.len(), 8);
            bytes[0] = 42;
            7
        });
        assert_eq!(status, 7);

        let mut back = [0u8; 8];
        mem.to_host(&mut back);
        assert_eq!(back[0], 42);
    }
}
