//! Forward declarations of the Fortran compute module.
//!
//! The Fortran side exposes these under unmangled C names (`bind(c)`), so
//! they are declared in a plain `extern "C"` block and resolved at link
//! time against the compiled Fortran objects. The bridge trusts these
//! signatures without runtime verification: a mismatch with the compiled
//! module is undefined behavior and a fatal integration bug, to be caught
//! by signature review before deployment.
//!
//! Only scalar primitives appear in the signatures. The module's failure
//! semantics (whether `get_fixed_integer` can trap, whether `start` is
//! idempotent) are owned by the Fortran side; assume neither purity nor
//! reentrancy.

extern "C" {
    /// Return the module's fixed integer for `num`. Contract owned by the
    /// compute module; the bridge imposes no precondition of its own.
    pub fn get_fixed_integer(num: i32) -> i32;

    /// Run the module's main procedure. No parameters, no return value.
    pub fn start();
}
