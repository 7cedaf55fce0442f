//! Shared test double for the Fortran compute module.
//!
//! The bridge declares `get_fixed_integer` and `start` as external symbols,
//! so every test binary that links the bridge must define them. This module
//! provides deterministic definitions: a fixed-offset integer function and
//! a `start` that bumps an observable counter.
//!
//! Each integration test file is its own binary with its own copy of these
//! statics; tests within one binary run in parallel, so tests that assert
//! on a static must be the only test in that binary touching it.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

/// Offset chosen so that `get_fixed_integer(5)` returns 42, the reference
/// behavior of the real Fortran module.
pub const FIXED_OFFSET: i32 = 37;

/// Number of times `start` has run in this test binary.
pub static START_CALLS: AtomicU32 = AtomicU32::new(0);

/// Last argument `get_fixed_integer` received.
pub static LAST_NUM: AtomicI32 = AtomicI32::new(0);

#[no_mangle]
pub extern "C" fn get_fixed_integer(num: i32) -> i32 {
    LAST_NUM.store(num, Ordering::SeqCst);
    FIXED_OFFSET.wrapping_add(num)
}

#[no_mangle]
pub extern "C" fn start() {
    START_CALLS.fetch_add(1, Ordering::SeqCst);
}
