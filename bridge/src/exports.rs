//! Host-callable wrapper entry points.
//!
//! These are the two functions the host runtime resolves by name:
//! - `get_fixed_integer_wrapper` — pass-through to `get_fixed_integer`
//! - `start_wrapper` — pass-through to the `start` procedure
//!
//! `#[no_mangle]` is the retention directive: it fixes the export name and
//! keeps the symbol in the cdylib's export table even though no internal
//! code path references it. Removing it strips the symbol and the host's
//! by-name lookup fails, so it is load-bearing on every entry point here.
//!
//! Each wrapper calls its underlying function exactly once, synchronously,
//! and adds no state, no validation, and no error handling of its own.
//! Neither wrapper can panic.

use crate::imports;

/// Pass-through to the compute module's `get_fixed_integer`.
///
/// Returns the underlying result unchanged. Any failure originates in,
/// and is owned by, the underlying function.
#[no_mangle]
pub extern "C" fn get_fixed_integer_wrapper(num: i32) -> i32 {
    // Scalar in, scalar out; nothing here can violate the declared ABI.
    unsafe { imports::get_fixed_integer(num) }
}

/// Pass-through to the compute module's `start` procedure.
///
/// The underlying procedure runs to completion (or traps) before this
/// wrapper returns.
#[no_mangle]
pub extern "C" fn start_wrapper() {
    unsafe { imports::start() }
}
