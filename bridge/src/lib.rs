//! `fortwasm-bridge` — WASM export bridge for the Fortran compute module.
//!
//! This crate compiles to a `.wasm` artifact that exports the two entry
//! points the host runtime resolves by string name after instantiation:
//!
//! - `get_fixed_integer_wrapper` — pass-through to `get_fixed_integer`
//! - `start_wrapper` — pass-through to the `start` procedure
//!
//! The bridge performs no computation and holds no state. It exists so that
//! functions compiled from Fortran are callable from outside the binary
//! under stable, unmangled names, and so those symbols survive link-time
//! stripping even though nothing inside the binary calls them.
//!
//! Only scalar primitives cross this boundary. Composite or owning types
//! would need an explicit marshaling layer, which this crate does not have.

// ── Modules ──

mod imports;
mod exports;

// Re-export the exported functions so the linker sees them.
// They are already #[no_mangle] pub extern "C" in exports.rs.
pub use exports::{get_fixed_integer_wrapper, start_wrapper};
