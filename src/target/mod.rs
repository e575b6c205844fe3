//! Execution targets for native generation calls
//!
//! A target is either a co-processor context (`DeviceTarget`) or host mode
//! (`HostTarget`). The core never distinguishes the two beyond
//! [`Target::is_device_bound`]: a device-bound target routes generator
//! construction through the device-stream entry family and destination
//! buffers through the target's address space, host mode writes into plain
//! host slices.
//!
//! The memory surface (allocate, upload, download, zero-fill) is the
//! transfer layer callers use to stage and observe device-resident results;
//! the dispatcher itself only maps allocations for writing.

mod device;
mod host;

pub use device::{DeviceMem, DeviceTarget};
pub use host::HostTarget;

/// An execution target against which native calls are issued.
pub trait Target: Clone + Send + Sync + 'static {
    /// Whether native calls route through the device-stream entry family.
    fn is_device_bound(&self) -> bool;

    /// Human-readable name of this target.
    fn name(&self) -> &'static str;

    /// Allocate `size_bytes` of zeroed target memory, returning an opaque
    /// handle. Returns 0 for empty allocations and on host-mode targets.
    fn alloc(&self, size_bytes: usize) -> u64;

    /// Release an allocation. Unknown handles are ignored.
    fn free(&self, handle: u64);

    /// Copy host bytes into an allocation.
    fn upload(&self, src: &[u8], handle: u64);

    /// Copy an allocation's bytes back to the host.
    fn download(&self, handle: u64, dst: &mut [u8]);

    /// Zero an allocation in place.
    fn fill_zero(&self, handle: u64);

    /// Map an allocation for writing. `f` receives the backing bytes and
    /// returns a native status code, which is passed through. Unknown
    /// handles yield `STATUS_NOT_INITIALIZED`.
    fn map_mut(&self, handle: u64, f: &mut dyn FnMut(&mut [u8]) -> i32) -> i32;
}
