//! Shader effects through `ID3DXEffect`.

use crate::{sys, Error, HResult};

/// A technique, parameter or pass of an [`Effect`].
///
/// Handles stay valid as long as the effect they were obtained from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EffectHandle(sys::D3DXHANDLE);

impl EffectHandle {
    #[cfg_attr(not(windows), allow(dead_code))]
    fn new(raw: sys::D3DXHANDLE) -> Option<Self> {
        (!raw.is_null()).then_some(Self(raw))
    }

    /// Returns the raw handle.
    pub fn as_raw(self) -> sys::D3DXHANDLE {
        self.0
    }
}

/// The error for a failed effect creation. Compiler output turns the
/// failure into [`Error::Compilation`].
pub fn compile_error(result: HResult, log: Option<String>) -> Error {
    match log {
        Some(log) => Error::Compilation { result, log },
        None => Error::Internal(result),
    }
}

/// Compiler output as text, `None` when the compiler had nothing to say.
#[cfg_attr(not(windows), allow(dead_code))]
fn log_from_text(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}

#[cfg(windows)]
pub use platform::*;

#[cfg(windows)]
mod platform {
    use std::path::Path;

    use windows::{
        core::Interface as _,
        Win32::Graphics::Direct3D9::{IDirect3DBaseTexture9, IDirect3DDevice9},
    };

    use super::{compile_error, log_from_text, EffectHandle};
    use crate::{
        buffer::Buffer,
        com::{device_ptr, ComPtr},
        path_to_c_string, str_to_c_string, sys, Error, Result,
    };

    /// An `ID3DXEffect`.
    #[derive(Debug)]
    pub struct Effect(ComPtr<sys::ID3DXEffect>);

    impl Effect {
        /// Compiles an effect from a `.fx` source file or loads a compiled one.
        /// `flags` is a combination of `D3DXSHADER_*` and `D3DXFX_*`.
        ///
        /// A rejected source is reported as [`Error::Compilation`] carrying the
        /// compiler output. Warnings of a successful compilation are logged.
        pub fn from_file(device: &IDirect3DDevice9, path: impl AsRef<Path>, flags: u32) -> Result<Self> {
            let path = path.as_ref();
            let c_path = path_to_c_string(path)?;
            let mut effect = std::ptr::null_mut();
            let mut errors = std::ptr::null_mut();
            let result = unsafe {
                sys::HELPERS_D3DX_CreateEffectFromFile(
                    device_ptr(device),
                    c_path.as_ptr(),
                    std::ptr::null(),
                    std::ptr::null_mut(),
                    flags,
                    std::ptr::null_mut(),
                    &mut effect,
                    &mut errors,
                )
            };
            let log = unsafe { Buffer::from_raw(errors) }
                .map(|errors| errors.to_string_lossy())
                .and_then(log_from_text);

            if result.is_err() {
                // The effect is not expected on failure, but must not leak.
                drop(unsafe { ComPtr::from_raw(effect) });
                return Err(compile_error(result, log));
            }
            if let Some(log) = log {
                log::warn!("Effect {path:?} compiled with warnings:\n{log}");
            }
            log::debug!("Created effect from {path:?}.");
            unsafe { ComPtr::from_created(effect) }.map(Self)
        }

        fn base(&self) -> sys::LPD3DXBASEEFFECT {
            // ID3DXEffect derives from ID3DXBaseEffect.
            self.0.as_raw().cast()
        }

        /// Looks a technique up by name.
        pub fn technique_by_name(&self, name: &str) -> Result<Option<EffectHandle>> {
            let name = str_to_c_string(name)?;
            Ok(EffectHandle::new(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseEffect_GetTechniqueByName(self.base(), name.as_ptr())
            }))
        }

        /// Looks a parameter up by name. With a `parent` the lookup is limited
        /// to the members of that structure parameter.
        pub fn parameter_by_name(
            &self,
            parent: Option<EffectHandle>,
            name: &str,
        ) -> Result<Option<EffectHandle>> {
            let name = str_to_c_string(name)?;
            let parent = parent.map_or(std::ptr::null(), EffectHandle::as_raw);
            Ok(EffectHandle::new(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseEffect_GetParameterByName(self.base(), parent, name.as_ptr())
            }))
        }

        /// Selects the technique used by [`Effect::begin`].
        pub fn set_technique(&self, technique: EffectHandle) -> Result {
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXEffect_SetTechnique(self.0.as_raw(), technique.as_raw())
            })
        }

        /// Starts the active technique and returns its number of passes.
        /// `flags` is a combination of `D3DXFX_*`.
        pub fn begin(&self, flags: u32) -> Result<u32> {
            let mut passes = 0;
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXEffect_Begin(self.0.as_raw(), &mut passes, flags) })?;
            Ok(passes)
        }

        /// Applies the state of pass `pass`.
        pub fn begin_pass(&self, pass: u32) -> Result {
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXEffect_BeginPass(self.0.as_raw(), pass) })
        }

        /// Pushes parameter changes made inside a pass to the device.
        pub fn commit_changes(&self) -> Result {
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXEffect_CommitChanges(self.0.as_raw()) })
        }

        /// Ends the pass started by [`Effect::begin_pass`].
        pub fn end_pass(&self) -> Result {
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXEffect_EndPass(self.0.as_raw()) })
        }

        /// Ends the active technique, restoring the saved device state.
        pub fn end(&self) -> Result {
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXEffect_End(self.0.as_raw()) })
        }

        /// Sets a matrix parameter.
        pub fn set_matrix(&self, parameter: EffectHandle, matrix: &sys::D3DXMATRIX) -> Result {
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseEffect_SetMatrix(self.base(), parameter.as_raw(), matrix)
            })
        }

        /// Sets a float parameter.
        pub fn set_float(&self, parameter: EffectHandle, value: f32) -> Result {
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseEffect_SetFloat(self.base(), parameter.as_raw(), value)
            })
        }

        /// Sets an integer or boolean parameter.
        pub fn set_int(&self, parameter: EffectHandle, value: i32) -> Result {
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseEffect_SetInt(self.base(), parameter.as_raw(), value)
            })
        }

        /// Binds a texture to a sampler or texture parameter. `None` unbinds it.
        pub fn set_texture(
            &self,
            parameter: EffectHandle,
            texture: Option<&IDirect3DBaseTexture9>,
        ) -> Result {
            let texture = texture.map_or(std::ptr::null_mut(), |texture| texture.as_raw().cast());
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseEffect_SetTexture(self.base(), parameter.as_raw(), texture)
            })
        }

        /// Copies `value` into a parameter of any type, such as a vector, a
        /// structure or an array.
        pub fn set_value<T: bytemuck::Pod>(&self, parameter: EffectHandle, value: &T) -> Result {
            let bytes = bytemuck::bytes_of(value);
            let len = u32::try_from(bytes.len()).map_err(|_| Error::from("The value is too large."))?;
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseEffect_SetValue(
                    self.base(),
                    parameter.as_raw(),
                    bytes.as_ptr().cast(),
                    len,
                )
            })
        }

        /// Releases the video memory held by the effect before a device reset.
        pub fn on_lost_device(&self) -> Result {
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXEffect_OnLostDevice(self.0.as_raw()) })
        }

        /// Recreates the resources released by [`Effect::on_lost_device`].
        pub fn on_reset_device(&self) -> Result {
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXEffect_OnResetDevice(self.0.as_raw()) })
        }

        /// Returns the underlying interface.
        pub fn as_raw(&self) -> sys::LPD3DXEFFECT {
            self.0.as_raw()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handles_are_none() {
        assert!(EffectHandle::new(std::ptr::null()).is_none());
        let name = c"gWorld";
        let handle = EffectHandle::new(name.as_ptr()).unwrap();
        assert_eq!(handle.as_raw(), name.as_ptr());
    }

    #[test]
    fn compiler_output_becomes_a_compilation_error() {
        let log = "fx/diffuse.fx(12,5): error X3004: undeclared identifier 'gWorld'";
        let error = compile_error(sys::E_FAIL, log_from_text(log.to_owned()));
        match error {
            Error::Compilation { result, log: text } => {
                assert_eq!(result, sys::E_FAIL);
                assert_eq!(text, log);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn silent_failures_stay_internal() {
        let error = compile_error(sys::D3DERR_INVALIDCALL, log_from_text(String::new()));
        assert!(matches!(error, Error::Internal(sys::D3DERR_INVALIDCALL)));
        assert!(log_from_text(" \n".to_owned()).is_none());
    }
}
