//! # randr
//!
//! **Host-side control layer for a parallel random-number-generation
//! engine.**
//!
//! randr lets a caller create a named generator algorithm, configure its
//! numeric parameters, and fill 32/64-bit integer or real buffers -
//! resident on a co-processor target or on the host - with pseudo-random
//! or quasi-random values from uniform, normal, log-normal and Poisson
//! distributions.
//!
//! ## Why randr?
//!
//! - **Two execution targets**: the same calls run against a device-bound
//!   context or in host mode
//! - **Reproducible**: a fixed (family, seed, call sequence) produces
//!   bit-identical output on either target
//! - **Family-aware configuration**: seed, offset and dimension writes are
//!   validated against the generator's algorithm family and never leave
//!   partial state behind
//!
//! ## Quick Start
//!
//! ```rust
//! use randr::prelude::*;
//!
//! let target = HostTarget::new();
//! let mut rng = Generator::new(&target)?;
//! rng.set_seed(123.0)?;
//!
//! let mut values = vec![0u32; 1024];
//! let mut buf = BufferMut::from(values.as_mut_slice());
//! rng.generate32(&mut buf, None)?;
//! # Ok::<(), randr::error::Error>(())
//! ```
//!
//! Device-resident buffers go through [`target::DeviceMem`]; the caller
//! copies results back to the host to observe them:
//!
//! ```rust
//! use randr::prelude::*;
//!
//! let target = DeviceTarget::new();
//! let mut rng = Generator::new(&target)?;
//! rng.set_seed(123.0)?;
//!
//! let mut mem = DeviceMem::new(&target, 1024 * 4);
//! let mut buf = BufferMut::from(&mut mem);
//! rng.generate32(&mut buf, None)?;
//!
//! let mut values = vec![0u32; 1024];
//! mem.to_host(&mut values);
//! # Ok::<(), randr::error::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
mod dispatch;
pub mod error;
pub mod generator;
mod native;
pub mod rng;
pub mod status;
pub mod target;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::buffer::BufferMut;
    pub use crate::error::{Error, Result};
    pub use crate::generator::Generator;
    pub use crate::rng::RngType;
    pub use crate::target::{DeviceMem, DeviceTarget, HostTarget, Target};
}
