//! Native status codes and diagnostics decoding.
//!
//! Every native entry point returns an integer status; zero means success.
//! Non-zero codes map to a two-part `"SYMBOL | description"` string used
//! when raising configuration and generation errors.

/// Operation completed successfully.
pub const STATUS_SUCCESS: i32 = 0;
/// Header file and linked library version do not match.
pub const STATUS_VERSION_MISMATCH: i32 = 100;
/// Generator handle was not initialized.
pub const STATUS_NOT_INITIALIZED: i32 = 101;
/// Memory allocation failed inside the native library.
pub const STATUS_ALLOCATION_FAILED: i32 = 102;
/// Generator is of the wrong type for the requested operation.
pub const STATUS_TYPE_ERROR: i32 = 103;
/// Argument is out of range.
pub const STATUS_OUT_OF_RANGE: i32 = 104;
/// Requested length is not a multiple of the dimension count.
pub const STATUS_LENGTH_NOT_MULTIPLE: i32 = 105;
/// Double precision is required by the GPU for this operation.
pub const STATUS_DOUBLE_PRECISION_REQUIRED: i32 = 106;
/// Kernel launch failed.
pub const STATUS_LAUNCH_FAILURE: i32 = 201;
/// A previous kernel launch failed.
pub const STATUS_PREEXISTING_FAILURE: i32 = 202;
/// Generator initialization failed.
pub const STATUS_INITIALIZATION_FAILED: i32 = 203;
/// The compute architecture does not support the requested operation.
pub const STATUS_ARCH_MISMATCH: i32 = 204;
/// Internal library error.
pub const STATUS_INTERNAL_ERROR: i32 = 999;

/// All status codes the native layer can return.
pub const ALL_STATUSES: &[i32] = &[
    STATUS_SUCCESS,
    STATUS_VERSION_MISMATCH,
    STATUS_NOT_INITIALIZED,
    STATUS_ALLOCATION_FAILED,
    STATUS_TYPE_ERROR,
    STATUS_OUT_OF_RANGE,
    STATUS_LENGTH_NOT_MULTIPLE,
    STATUS_DOUBLE_PRECISION_REQUIRED,
    STATUS_LAUNCH_FAILURE,
    STATUS_PREEXISTING_FAILURE,
    STATUS_INITIALIZATION_FAILED,
    STATUS_ARCH_MISMATCH,
    STATUS_INTERNAL_ERROR,
];

/// Decode a native status code into a `"SYMBOL | description"` string.
///
/// Unknown codes decode to a stable fallback carrying the raw value, so a
/// diagnostic is always available.
pub fn decode(status: i32) -> String {
    let (symbol, description) = match status {
        STATUS_SUCCESS => ("STATUS_SUCCESS", "no errors"),
        STATUS_VERSION_MISMATCH => (
            "STATUS_VERSION_MISMATCH",
            "header file and linked library version do not match",
        ),
        STATUS_NOT_INITIALIZED => ("STATUS_NOT_INITIALIZED", "generator not initialized"),
        STATUS_ALLOCATION_FAILED => ("STATUS_ALLOCATION_FAILED", "memory allocation failed"),
        STATUS_TYPE_ERROR => ("STATUS_TYPE_ERROR", "generator is wrong type"),
        STATUS_OUT_OF_RANGE => ("STATUS_OUT_OF_RANGE", "argument out of range"),
        STATUS_LENGTH_NOT_MULTIPLE => (
            "STATUS_LENGTH_NOT_MULTIPLE",
            "length requested is not a multiple of dimension",
        ),
        STATUS_DOUBLE_PRECISION_REQUIRED => (
            "STATUS_DOUBLE_PRECISION_REQUIRED",
            "GPU does not have double precision required by MRG32k3a",
        ),
        STATUS_LAUNCH_FAILURE => ("STATUS_LAUNCH_FAILURE", "kernel launch failure"),
        STATUS_PREEXISTING_FAILURE => (
            "STATUS_PREEXISTING_FAILURE",
            "preexisting failure on library entry",
        ),
        STATUS_INITIALIZATION_FAILED => (
            "STATUS_INITIALIZATION_FAILED",
            "initialization of CUDA failed",
        ),
        STATUS_ARCH_MISMATCH => (
            "STATUS_ARCH_MISMATCH",
            "architecture mismatch, GPU does not support requested feature",
        ),
        STATUS_INTERNAL_ERROR => ("STATUS_INTERNAL_ERROR", "internal library error"),
        other => return format!("STATUS_UNKNOWN({other}) | unrecognized status code"),
    };
    format!("{symbol} | {description}")
}
