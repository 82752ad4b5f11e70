//! Batched 2D drawing through `ID3DXSprite`.

use windows::{
    core::Interface as _,
    Win32::Graphics::Direct3D9::{IDirect3DDevice9, IDirect3DTexture9},
};

use crate::{
    com::{device_ptr, ComPtr},
    optional_ptr, sys, Result,
};

/// An `ID3DXSprite`.
#[derive(Debug)]
pub struct Sprite(ComPtr<sys::ID3DXSprite>);

impl Sprite {
    /// Creates a sprite batch for `device`.
    pub fn new(device: &IDirect3DDevice9) -> Result<Self> {
        let mut sprite = std::ptr::null_mut();
        Result::from(unsafe { sys::HELPERS_D3DX_CreateSprite(device_ptr(device), &mut sprite) })?;
        log::debug!("Created sprite {sprite:?}.");
        unsafe { ComPtr::from_created(sprite) }.map(Self)
    }

    /// Starts a batch. `flags` is a combination of `D3DXSPRITE_*`.
    pub fn begin(&self, flags: u32) -> Result {
        Result::from(unsafe { sys::HELPERS_D3DX_ID3DXSprite_Begin(self.as_raw(), flags) })
    }

    /// Queues `texture` for drawing.
    ///
    /// `source` selects part of the texture, the whole texture when
    /// `None`. `center` is the point of the sprite placed at `position`;
    /// both default to the origin.
    pub fn draw(
        &self,
        texture: &IDirect3DTexture9,
        source: Option<&sys::RECT>,
        center: Option<&sys::D3DXVECTOR3>,
        position: Option<&sys::D3DXVECTOR3>,
        color: sys::D3DCOLOR,
    ) -> Result {
        Result::from(unsafe {
            sys::HELPERS_D3DX_ID3DXSprite_Draw(
                self.as_raw(),
                texture.as_raw().cast(),
                optional_ptr(source),
                optional_ptr(center),
                optional_ptr(position),
                color,
            )
        })
    }

    /// Submits the queued sprites and restores the device state.
    pub fn end(&self) -> Result {
        Result::from(unsafe { sys::HELPERS_D3DX_ID3DXSprite_End(self.as_raw()) })
    }

    /// Submits the queued sprites without ending the batch.
    pub fn flush(&self) -> Result {
        Result::from(unsafe { sys::HELPERS_D3DX_ID3DXSprite_Flush(self.as_raw()) })
    }

    /// Sets the transform applied to every following draw.
    pub fn set_transform(&self, transform: &sys::D3DXMATRIX) -> Result {
        Result::from(unsafe { sys::HELPERS_D3DX_ID3DXSprite_SetTransform(self.as_raw(), transform) })
    }

    /// Releases the video memory held by the sprite before a device reset.
    pub fn on_lost_device(&self) -> Result {
        Result::from(unsafe { sys::HELPERS_D3DX_ID3DXSprite_OnLostDevice(self.as_raw()) })
    }

    /// Recreates the resources released by [`Sprite::on_lost_device`].
    pub fn on_reset_device(&self) -> Result {
        Result::from(unsafe { sys::HELPERS_D3DX_ID3DXSprite_OnResetDevice(self.as_raw()) })
    }

    /// Returns the underlying interface.
    pub fn as_raw(&self) -> sys::LPD3DXSPRITE {
        self.0.as_raw()
    }
}
