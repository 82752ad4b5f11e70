//! Texture loading.

use std::path::Path;

use windows::{
    core::Interface as _,
    Win32::Graphics::Direct3D9::{IDirect3DDevice9, IDirect3DTexture9},
};

use crate::{com::device_ptr, path_to_c_string, sys, Result};

/// Loads a texture from an image file (BMP, DDS, DIB, HDR, JPG, PFM,
/// PNG, PPM or TGA), with a full mip chain and the format of the file.
pub fn create_texture_from_file(
    device: &IDirect3DDevice9,
    path: impl AsRef<Path>,
) -> Result<IDirect3DTexture9> {
    let path = path.as_ref();
    let c_path = path_to_c_string(path)?;
    let mut texture = std::ptr::null_mut();
    Result::from(unsafe {
        sys::HELPERS_D3DX_CreateTextureFromFile(device_ptr(device), c_path.as_ptr(), &mut texture)
    })?;
    if texture.is_null() {
        return Err(format!("No texture was created for {path:?}.").into());
    }
    log::debug!("Loaded texture {path:?}.");
    // The reference returned by D3DX is handed over to the `windows` wrapper.
    Ok(unsafe { IDirect3DTexture9::from_raw(texture.cast()) })
}
