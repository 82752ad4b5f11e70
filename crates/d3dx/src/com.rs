//! Ownership of D3DX interface pointers.

use std::ptr::NonNull;

use windows::{core::Interface as _, Win32::Graphics::Direct3D9::IDirect3DDevice9};

use crate::{sys, Result};

/// An owned reference to a D3DX interface. The reference is released
/// exactly once, when this value is dropped.
#[repr(transparent)]
pub struct ComPtr<T>(NonNull<T>);

impl<T> ComPtr<T> {
    /// Takes ownership of an interface pointer returned by D3DX.
    ///
    /// # Safety
    ///
    /// `raw` must be null or point to a live interface of type `T` whose
    /// reference the caller owns.
    pub unsafe fn from_raw(raw: *mut T) -> Option<Self> {
        NonNull::new(raw).map(Self)
    }

    /// Like [`ComPtr::from_raw`], but a null pointer is an error.
    ///
    /// # Safety
    ///
    /// Same as [`ComPtr::from_raw`].
    pub(crate) unsafe fn from_created(raw: *mut T) -> Result<Self> {
        Self::from_raw(raw).ok_or_else(|| "D3DX reported success but returned no interface.".into())
    }

    /// Returns the interface pointer without giving up ownership.
    pub fn as_raw(&self) -> *mut T {
        self.0.as_ptr()
    }

    /// Gives up ownership of the interface pointer. The caller becomes
    /// responsible for releasing it.
    pub fn into_raw(self) -> *mut T {
        let raw = self.0.as_ptr();
        std::mem::forget(self);
        raw
    }
}

impl<T> std::fmt::Debug for ComPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ComPtr")
            .field(&std::any::type_name::<T>())
            .field(&self.0)
            .finish()
    }
}

impl<T> Drop for ComPtr<T> {
    fn drop(&mut self) {
        log::debug!("Releasing {self:?}.");
        unsafe { sys::HELPERS_D3DX_Release(self.0.as_ptr().cast()) }
    }
}

/// The raw device pointer the shim expects. The `windows` crate's
/// interface types own their pointer, so only the address is passed on.
pub(crate) fn device_ptr(device: &IDirect3DDevice9) -> sys::LPDIRECT3DDEVICE9 {
    device.as_raw().cast()
}
