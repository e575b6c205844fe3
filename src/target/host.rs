//! Host-mode execution target

use super::Target;
use crate::status::STATUS_NOT_INITIALIZED;

/// Host mode: no co-processor context.
///
/// Generators bound to this target are created through the host entry
/// family and write directly into caller-supplied host slices. The target
/// memory surface is inert; there is no separate address space to stage
/// buffers in.
#[derive(Clone, Debug, Default)]
pub struct HostTarget;

impl HostTarget {
    /// Create a host-mode target.
    pub fn new() -> Self {
        Self
    }
}

impl Target for HostTarget {
    fn is_device_bound(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "host"
    }

    fn alloc(&self, _size_bytes: usize) -> u64 {
        0
    }

    fn free(&self, _handle: u64) {}

    fn upload(&self, _src: &[u8], _handle: u64) {}

    fn download(&self, _handle: u64, _dst: &mut [u8]) {}

    fn fill_zero(&self, _handle: u64) {}

    fn map_mut(&self, _handle: u64, _f: &mut dyn FnMut(&mut [u8]) -> i32) -> i32 {
        STATUS_NOT_INITIALIZED
    }
}
