//! `d3dx-sys` provides low-level "sys" bindings to the Microsoft D3DX9
//! library.
//!
//! D3DX9 exposes COM interfaces, which cannot be called from Rust without
//! their vtables. A small C++ shim (`src/bindings.cpp`) turns every method
//! used here into a flat `extern "C"` function taking the interface pointer
//! as its first argument. Each shim function forwards its arguments and
//! result verbatim.
//!
//! The shim is only compiled and linked for Windows targets. Types,
//! constants and errors are available everywhere.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::all)]

pub mod consts;
pub mod error;
pub mod types;

pub use consts::*;
pub use error::*;
pub use types::*;

include!("bindings.rs");
