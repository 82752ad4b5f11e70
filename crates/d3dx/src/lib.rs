//! Safe bindings to Microsoft D3DX9.
//!
//! Every D3DX interface is wrapped in an owning type which releases the
//! interface when dropped. Calls forward to [`d3dx_sys`] and turn the
//! returned `HRESULT` into a [`Result`]; nothing else is added on top of
//! what D3DX does.
//!
//! Anything that talks to Direct3D is only available on Windows. The
//! helpers for building font descriptions, colors and vertex declarations,
//! and the checks run before calling into D3DX, are portable.

pub use d3dx_sys as sys;
pub use sys::{Error, HResult, Result};

pub mod buffer;
pub mod color;
pub mod effect;
pub mod font;
pub mod mesh;
pub mod vertex;

#[cfg(windows)]
mod com;
#[cfg(windows)]
pub use com::ComPtr;

#[cfg(windows)]
pub mod math;
#[cfg(windows)]
pub mod sprite;
#[cfg(windows)]
pub mod texture;

pub use buffer::*;
pub use effect::*;
pub use font::*;
pub use mesh::*;
pub use vertex::*;

#[cfg(windows)]
pub use sprite::*;
#[cfg(windows)]
pub use texture::*;

/// Converts a string into a C string for D3DX.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn str_to_c_string(value: &str) -> Result<std::ffi::CString> {
    std::ffi::CString::new(value)
        .map_err(|_| format!("The string {value:?} contains an interior NUL byte.").into())
}

/// Converts a path into the ANSI C string D3DX expects.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn path_to_c_string(path: &std::path::Path) -> Result<std::ffi::CString> {
    let path = path
        .to_str()
        .ok_or_else(|| Error::from(format!("The path {path:?} is not valid UTF-8.")))?;
    str_to_c_string(path)
}

/// Turns an optional reference into a nullable pointer.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn optional_ptr<T>(value: Option<&T>) -> *const T {
    value.map_or(std::ptr::null(), |value| value as *const T)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_strings_reject_interior_nul() {
        assert_eq!(str_to_c_string("fx/diffuse.fx").unwrap().as_bytes(), b"fx/diffuse.fx");
        assert!(matches!(str_to_c_string("a\0b"), Err(Error::Other(_))));
    }

    #[test]
    fn paths_become_c_strings() {
        let path = std::path::Path::new("textures").join("crate.dds");
        let c_path = path_to_c_string(&path).unwrap();
        assert_eq!(c_path.to_str().unwrap(), path.to_str().unwrap());
    }

    #[test]
    fn optional_pointers() {
        let value = 7u32;
        assert!(optional_ptr::<u32>(None).is_null());
        assert_eq!(optional_ptr(Some(&value)), &value as *const u32);
    }
}
